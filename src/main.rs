use clap::Parser;
use swaggerize::cli::{run_cli, Cli};
use swaggerize::logging::{init_logging, LogConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = LogConfig::from_env();
    if cli.verbose {
        config = config.with_level("debug");
    }
    if let Err(e) = init_logging(&config) {
        eprintln!("⚠️  logging disabled: {e}");
    }

    if let Err(e) = run_cli(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
