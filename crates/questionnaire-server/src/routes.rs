//! HTTP routes
//!
//! | Path               | Method     | Purpose                        |
//! |--------------------|------------|--------------------------------|
//! | `/graphql`         | GET, POST  | GraphQL endpoint               |
//! | `/graphiql`        | GET        | interactive explorer           |
//! | `/questions.json`  | GET        | catalog, when one is loaded    |
//! | `/health`          | GET        | liveness                       |

use crate::schema::QuestionnaireSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use questionnaire_model::Catalog;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// All routes, with CORS open to any origin
pub fn routes(
    schema: QuestionnaireSchema,
    catalog: Option<Arc<Catalog>>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let graphql = warp::path("graphql")
        .and(warp::path::end())
        .and(async_graphql_warp::graphql(schema))
        .and_then(
            |(schema, request): (QuestionnaireSchema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        );

    let graphiql = warp::path("graphiql")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::html(GraphiQLSource::build().endpoint("/graphql").finish()));

    let questions = warp::path("questions.json")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || {
            let catalog = catalog.clone();
            async move {
                catalog
                    .map(|catalog| warp::reply::json(catalog.as_ref()))
                    .ok_or_else(warp::reject::not_found)
            }
        });

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "ok");

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    graphql
        .or(graphiql)
        .or(questions)
        .or(health)
        .with(cors)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(GraphQLBadRequest(bad)) = err.find() {
        (StatusCode::BAD_REQUEST, bad.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else if let Some(cors) = err.find::<warp::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, cors.to_string())
    } else {
        warn!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
    };
    Ok(warp::reply::with_status(message, status))
}
