use crate::constants::{SWEEP_MAX_VELOCITY, SWEEP_MIN_VELOCITY, SWEEP_SAMPLES};
use crate::errors::AeroErrors;
use crate::fsm::state_machine::ShellFSM;
use crate::models::airfoil::AirfoilProperties;
use crate::models::performance::PerformanceSweep;
use crate::numerics::linspace::linspace;
use crate::physics::environment::Environment;
use crate::plotting::render_performance_chart;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Sweeps the velocity range, writes the chart to `chart_path`, hands it to
/// `display` and then answers queries from `input` until the shell exits.
///
/// A failing `display` is logged and skipped; the chart is already on disk
/// by then. Returns the number of queries answered.
pub fn run_session<T, D, R, W>(
    airfoil: &T,
    environment: Environment,
    chart_path: &Path,
    display: D,
    input: R,
    output: &mut W,
) -> Result<usize, AeroErrors>
where
    T: AirfoilProperties,
    D: FnOnce(&Path) -> Result<(), AeroErrors>,
    R: BufRead,
    W: Write,
{
    let velocities = linspace(SWEEP_MIN_VELOCITY, SWEEP_MAX_VELOCITY, SWEEP_SAMPLES);
    info!("Sweeping {} velocities for {}", velocities.len(), airfoil.name());

    writeln!(
        output,
        "Calculating lift and drag forces for velocities from {} m/s to {} m/s...\n",
        SWEEP_MIN_VELOCITY, SWEEP_MAX_VELOCITY
    )?;
    let sweep = PerformanceSweep::compute(airfoil, &environment, velocities)?;

    writeln!(output, "Generating and saving performance plots...\n")?;
    render_performance_chart(&sweep, airfoil.name(), chart_path)?;
    writeln!(output, "Plot saved as '{}'", chart_path.display())?;

    if let Err(e) = display(chart_path) {
        warn!("{}", e);
    }

    writeln!(output, "Plots completed and saved successfully. \n")?;

    let mut shell = ShellFSM::new(airfoil, environment);
    shell.run(input, output)?;
    info!("Answered {} velocity queries", shell.get_queries_answered());

    Ok(shell.get_queries_answered())
}
