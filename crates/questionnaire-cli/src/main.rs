//! `questionnaire` binary

use anyhow::{bail, Context};
use clap::{value_parser, Arg, Command};
use questionnaire_cli::{render, Session, SessionEnd};
use questionnaire_wizard::{
    CatalogSource, GraphqlClient, Wizard, DEFAULT_CATALOG_URL, DEFAULT_ENDPOINT,
};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("questionnaire")
        .version(questionnaire_cli::VERSION)
        .about("Answer the questionnaire from a terminal")
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .env("QUESTIONNAIRE_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT)
                .global(true)
                .help("GraphQL endpoint of the questionnaire server"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .default_value(DEFAULT_CATALOG_URL)
                .value_parser(value_parser!(CatalogSource))
                .global(true)
                .help("Question catalog, file path or URL"),
        )
        .subcommand(Command::new("run").about("Walk through the questionnaire (default)"))
        .subcommand(Command::new("list").about("Print stored submissions"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: &GraphqlClient, source: &CatalogSource) -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    match source.load(client.http()).await {
        Ok(catalog) => wizard.load(catalog)?,
        Err(err) => wizard.catalog_failed(err.to_string())?,
    }

    let mut session = Session::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    let end = session
        .run(&mut wizard, client)
        .await
        .context("questionnaire session failed")?;

    if let SessionEnd::CatalogUnavailable(reason) = end {
        bail!("catalog {source} unavailable: {reason}");
    }
    Ok(())
}

async fn list(client: &GraphqlClient) -> anyhow::Result<()> {
    let submissions = client
        .list_submissions()
        .await
        .with_context(|| format!("failed to list submissions from {}", client.endpoint()))?;

    render::submissions(&mut std::io::stdout().lock(), &submissions)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = cli().get_matches();
    let args = matches.subcommand().map_or(&matches, |(_, sub)| sub);

    let endpoint = args
        .get_one::<String>("endpoint")
        .map_or(DEFAULT_ENDPOINT, String::as_str);
    let client = GraphqlClient::new(endpoint);

    match matches.subcommand_name() {
        Some("list") => list(&client).await,
        _ => {
            let source = args
                .get_one::<CatalogSource>("catalog")
                .cloned()
                .unwrap_or_else(|| CatalogSource::Url(DEFAULT_CATALOG_URL.to_string()));
            run(&client, &source).await
        }
    }
}
