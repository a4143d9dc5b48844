use anyhow::Result;
use clap::Parser;
use log::info;

use smartapi_cli::api::SmartApiClient;
use smartapi_cli::auth::{Credentials, totp};
use smartapi_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting smartapi-cli");

    let credentials = match &cli.env_file {
        Some(path) => Credentials::from_env_file(path)?,
        None => Credentials::from_env()?,
    };

    // The code expires with its 30s window, so compute it right before login.
    let code = totp::generate_code(&credentials.totp_secret)?;

    let client = SmartApiClient::new(credentials.api_key.clone());
    let session = client
        .generate_session(&credentials.client_code, &credentials.pin, &code)
        .await?;

    println!("{}", session.jwt_token);
    Ok(())
}
