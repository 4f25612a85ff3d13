//! `questionnaire-server` binary

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use questionnaire_server::{serve, ServerConfig};
use questionnaire_store::DEFAULT_DATA_FILE;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "127.0.0.1:4000";

fn cli() -> Command {
    Command::new("questionnaire-server")
        .version(questionnaire_server::VERSION)
        .about("GraphQL questionnaire server")
        .arg(
            Arg::new("bind")
                .long("bind")
                .env("QUESTIONNAIRE_BIND")
                .default_value(DEFAULT_BIND)
                .value_parser(value_parser!(SocketAddr))
                .help("Listen address"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .env("QUESTIONNAIRE_DATA_FILE")
                .default_value(DEFAULT_DATA_FILE)
                .value_parser(value_parser!(PathBuf))
                .help("JSON file holding all submissions"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .env("QUESTIONNAIRE_CATALOG")
                .value_parser(value_parser!(PathBuf))
                .help("Question catalog served at /questions.json"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let mut config = ServerConfig::new();
    if let Some(bind) = matches.get_one::<SocketAddr>("bind") {
        config = config.with_bind(*bind);
    }
    if let Some(path) = matches.get_one::<PathBuf>("data-file") {
        config = config.with_data_file(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("catalog") {
        config = config.with_catalog(path.clone());
    }

    serve(&config, shutdown_signal())
        .await
        .context("questionnaire server failed")
}
