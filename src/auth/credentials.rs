use anyhow::Result;
use log::info;
use std::path::Path;

/// Static credential bundle required to open a SmartAPI session.
#[derive(Debug)]
pub struct Credentials {
    pub api_key: String,
    pub client_code: String,
    pub pin: String,
    pub totp_secret: String,
}

impl Credentials {
    pub fn from_env() -> Result<Credentials> {
        info!("Importing credentials from environment variables");

        // Pick up a .env in the working directory if one exists
        dotenvy::dotenv().ok();

        let api_key = std::env::var("SMARTAPI_API_KEY")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_API_KEY environment variable not set"))?;
        let client_code = std::env::var("SMARTAPI_CLIENT_CODE")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_CLIENT_CODE environment variable not set"))?;
        let pin = std::env::var("SMARTAPI_PIN")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_PIN environment variable not set"))?;
        let totp_secret = std::env::var("SMARTAPI_TOTP_SECRET")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_TOTP_SECRET environment variable not set"))?;

        Ok(Credentials {
            api_key,
            client_code,
            pin,
            totp_secret,
        })
    }

    pub fn from_env_file(path: &str) -> Result<Credentials> {
        info!("Importing credentials from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;

        let api_key = std::env::var("SMARTAPI_API_KEY")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_API_KEY not found in .env file: {}", path))?;
        let client_code = std::env::var("SMARTAPI_CLIENT_CODE")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_CLIENT_CODE not found in .env file: {}", path))?;
        let pin = std::env::var("SMARTAPI_PIN")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_PIN not found in .env file: {}", path))?;
        let totp_secret = std::env::var("SMARTAPI_TOTP_SECRET")
            .map_err(|_| anyhow::anyhow!("SMARTAPI_TOTP_SECRET not found in .env file: {}", path))?;

        Ok(Credentials {
            api_key,
            client_code,
            pin,
            totp_secret,
        })
    }
}
