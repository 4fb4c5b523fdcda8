#[cfg(feature = "gui")]
use clap::Parser;

#[cfg(feature = "gui")]
#[derive(Parser)]
#[command(name = "smartpark")]
#[command(about = "Campus parking dashboard with a simulated backend")]
struct Cli {
    /// View to start the session controller on; unknown values fall back
    /// to home
    #[arg(long, default_value = "home", value_name = "VIEW")]
    page: String,

    /// Override the simulated sign-in latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    use std::time::Duration;

    use smartpark::gui::{self, Config};
    use smartpark::{SimulatedBackend, ViewId};

    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let backend = match args.latency_ms {
        Some(ms) => SimulatedBackend::with_latency(Duration::from_millis(ms)),
        None => SimulatedBackend::default(),
    };

    tracing::info!(
        login_latency_ms = backend.login_latency().as_millis() as u64,
        "starting smartpark"
    );

    gui::run(Config {
        initial_view: ViewId::parse(&args.page),
        backend,
    })?;

    Ok(())
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("smartpark was built without the `gui` feature; nothing to run");
}
