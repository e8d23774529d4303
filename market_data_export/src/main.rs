use std::{io, process::ExitCode};

use clap::Parser;
use market_data_export::{
    Error,
    cli::{commands::Cli, prompt::collect_request},
    config::ExportConfig,
    confirmation_message, export_history,
    io::xlsx::XlsxSink,
    providers::yahoo::YahooProvider,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout is reserved for the prompts and the confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = ExportConfig::resolve(cli.config.as_deref())?;

    let request = collect_request(
        cli.symbol,
        cli.period,
        cli.interval,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let provider = YahooProvider::with_config(&config.provider)?;
    let sink = XlsxSink::new(cli.output_dir.unwrap_or(config.output.directory));

    let path = export_history(&provider, &sink, &request).await?;
    println!("{}", confirmation_message(&request.symbol, &path));

    Ok(())
}
