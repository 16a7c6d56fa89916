use clap::Parser;
use iyzipay_adapter::application::client::IyzipayClient;
use iyzipay_adapter::infrastructure::http::HttpGateway;
use iyzipay_adapter::interfaces::cli::{Cli, execute};
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway = HttpGateway::new(cli.gateway.to_config().into_diagnostic()?).into_diagnostic()?;
    let client = IyzipayClient::new(Box::new(gateway));

    let reply = execute(&client, cli.command).await.into_diagnostic()?;
    println!("{}", serde_json::to_string_pretty(&reply).into_diagnostic()?);

    Ok(())
}
