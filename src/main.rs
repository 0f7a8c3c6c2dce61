use airfoil_perf::config::airfoil::Naca2412;
use airfoil_perf::constants::CHART_FILE;
use airfoil_perf::physics::environment::Environment;
use airfoil_perf::plotting::display_chart;
use airfoil_perf::session::run_session;
use std::error::Error;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("airfoil_perf=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    static AIRFOIL: Naca2412 = Naca2412;
    run_session(
        &AIRFOIL,
        Environment::standard(),
        Path::new(CHART_FILE),
        display_chart,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    Ok(())
}
