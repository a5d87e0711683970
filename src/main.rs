use anyhow::Result;
use clap::Parser;
use nanoid::nanoid;

use logcast::{
    cli::Cli,
    forward::{self, ForwardConfig},
};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Diagnostics go to stderr so the forwarded stream on stdout stays clean.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ForwardConfig {
        host: cli.host,
        port: cli.port,
        id: cli.id.unwrap_or_else(|| nanoid!()),
        echo: !cli.mute,
    };

    forward::run(config).await
}
