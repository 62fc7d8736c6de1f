use anyhow::Context;
use auth::ApiCredentials;
use clap::Parser;
use common::GeminiEnvironment;
use gemini_rest::GeminiRestClient;
use shell::Shell;
use tracing::info;

#[derive(Parser)]
#[command(name = "gemini-cli")]
#[command(about = "Check balances, look up prices and place confirmed buys on Gemini", long_about = None)]
#[command(version)]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    token: String,

    /// Gemini API secret
    #[arg(long, env = "GEMINI_API_SECRET", hide_env_values = true)]
    secret: String,

    /// Trade against the sandbox exchange (required; live trading is not implemented)
    #[arg(long)]
    test_mode: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present so the env fallbacks above can use it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    common::init_logging();

    let environment = GeminiEnvironment::from_test_mode(cli.test_mode);
    info!(environment = %environment, "Starting Gemini command line");

    let credentials = ApiCredentials::new(cli.token, cli.secret);
    let client = GeminiRestClient::new(credentials, environment)
        .with_context(|| format!("cannot start against the {environment} environment"))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&client, stdin.lock(), stdout.lock())
        .run()
        .await
        .context("console I/O failed")?;

    info!("Shutdown complete");
    Ok(())
}
