use clap::Parser;

#[derive(Parser)]
#[command(name = "smartapi-cli")]
#[command(about = "Opens an Angel One SmartAPI session and prints the JWT session token")]
pub struct Cli {
    /// Load credentials from a specific .env file instead of the ambient environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<String>,
}
