use mmi::commands::Cli;
use mmi::libs::messages::Message;
use mmi::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_ok() || std::env::var("MMI_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mmi=debug")))
            .init();
    }

    if let Err(err) = Cli::menu().await {
        msg_error!(Message::CommandFailed(err.to_string()));
        std::process::exit(1);
    }
}
