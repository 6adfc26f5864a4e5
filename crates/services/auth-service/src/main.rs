//! Auth Service - Login check demonstration.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_service_lib::config::AuthServiceConfig;
use domain::{DEMO_PASSWORD, SEED_USERNAME};

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(about = "Check login credentials against the mock user database")]
struct Cli {
    /// Username (email address) to log in with
    #[arg(long, default_value = SEED_USERNAME)]
    email: String,

    /// Plaintext password
    #[arg(long, default_value = DEMO_PASSWORD)]
    password: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AuthServiceConfig::from_env();

    init_tracing(&config.service.log_filter(cli.verbose));
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    let authenticated = auth_service_lib::run(&cli.email, &cli.password).map_err(|e| {
        tracing::error!(code = e.code(), "Login check failed: {}", e);
        e
    })?;
    println!("{}", auth_service_lib::report(authenticated));

    Ok(())
}

/// Initialize tracing subscriber (logs go to stderr)
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
