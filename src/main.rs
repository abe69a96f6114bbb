use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_insights_lib::Cli;

fn main() {
  let cli = Cli::parse();

  // Logs go to stderr so stdout stays valid JSON
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("workout_insights_lib=info")),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  if let Err(e) = workout_insights_lib::run(cli) {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}
