use airfoil_perf::config::airfoil::{CustomAirfoil, Naca2412};
use airfoil_perf::constants::*;
use airfoil_perf::errors::AeroErrors;
use airfoil_perf::fsm::shell_states::ShellState;
use airfoil_perf::fsm::state_machine::{ShellFSM, EXIT_MESSAGE, INVALID_INPUT_MESSAGE, PROMPT};
use airfoil_perf::models::{AirfoilProperties, PerformancePoint, PerformanceSweep};
use airfoil_perf::numerics::linspace::linspace;
use airfoil_perf::physics::aerodynamics::calculate_forces;
use airfoil_perf::physics::environment::Environment;
use airfoil_perf::physics::power::calculate_power;
use airfoil_perf::plotting::render_performance_chart;
use airfoil_perf::session::run_session;
use approx::assert_abs_diff_eq;
use std::fs;
use std::io::Cursor;
use std::path::Path;

// Full sweep from the entry point's constants rendered to disk
#[test]
fn sweep_renders_chart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let chart_path = dir.path().join(CHART_FILE);

    let velocities = linspace(SWEEP_MIN_VELOCITY, SWEEP_MAX_VELOCITY, SWEEP_SAMPLES);
    let sweep = PerformanceSweep::compute(&Naca2412, &Environment::standard(), velocities)?;
    assert_eq!(sweep.len(), 200);

    render_performance_chart(&sweep, Naca2412.name(), &chart_path)?;

    let metadata = fs::metadata(&chart_path)?;
    assert!(metadata.is_file());
    assert!(metadata.len() > 0);

    // Re-rendering overwrites the existing file
    render_performance_chart(&sweep, Naca2412.name(), &chart_path)?;
    assert!(fs::metadata(&chart_path)?.len() > 0);
    Ok(())
}

#[test]
fn chart_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("missing").join(CHART_FILE);
    let sweep =
        PerformanceSweep::compute(&Naca2412, &Environment::standard(), linspace(1.0, 2.0, 3))
            .unwrap();

    assert!(render_performance_chart(&sweep, Naca2412.name(), &chart_path).is_err());
}

#[test]
fn reference_point_at_10_m_s() {
    let (lift, drag) = calculate_forces(&Naca2412, &Environment::standard(), 10.0);
    assert_abs_diff_eq!(lift, 3.2808, epsilon = 1e-9);
    assert_abs_diff_eq!(drag, 0.4512, epsilon = 1e-9);
    assert_abs_diff_eq!(calculate_power(drag, 10.0), 4.512, epsilon = 1e-9);
}

#[test]
fn custom_airfoil_matches_fixed_constants() {
    let custom = CustomAirfoil::new(NACA_2412_C_D, NACA_2412_C_L, NACA_2412_WING_AREA);
    let environment = Environment::new(AIR_DENSITY);

    for velocity in [0.0, 1.0, 33.3, 100.0] {
        assert_eq!(
            PerformancePoint::compute(&custom, &environment, velocity),
            PerformancePoint::compute(&Naca2412, &environment, velocity)
        );
    }
}

#[test]
fn shell_session() {
    let mut shell = ShellFSM::new(&Naca2412, Environment::standard());
    let mut output = Vec::new();

    shell
        .run(Cursor::new("50\nabc\n\n"), &mut output)
        .unwrap();

    let expected = format!(
        "{prompt}\n\
         Results for velocity 50.0 m/s:\n\
         Lift Force: 82.02 N\n\
         Drag Force: 11.28 N\n\
         Power Required: 564.00 W\n\
         \n\
         {prompt}{invalid}\n\
         {prompt}{exit}\n",
        prompt = PROMPT,
        invalid = INVALID_INPUT_MESSAGE,
        exit = EXIT_MESSAGE,
    );
    assert_eq!(String::from_utf8(output).unwrap(), expected);
    assert_eq!(shell.get_current_state(), ShellState::Terminated);
}

// A viewer that cannot start must leave the saved chart and the shell intact
#[test]
fn session_survives_display_failure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let chart_path = dir.path().join(CHART_FILE);
    let mut displayed = None;
    let mut output = Vec::new();

    let answered = run_session(
        &Naca2412,
        Environment::standard(),
        &chart_path,
        |path: &Path| {
            displayed = Some(fs::metadata(path).map(|m| m.len()).unwrap_or(0));
            Err(AeroErrors::Display("no viewer".to_string()))
        },
        Cursor::new("50\n\n"),
        &mut output,
    )?;

    assert_eq!(answered, 1);
    assert!(displayed.unwrap() > 0);
    assert!(fs::metadata(&chart_path)?.len() > 0);

    let output = String::from_utf8(output)?;
    let saved = output.find("Plot saved as").unwrap();
    let completed = output.find("Plots completed and saved successfully.").unwrap();
    let results = output.find("Results for velocity 50.0 m/s:").unwrap();
    assert!(saved < completed && completed < results);
    assert!(output.ends_with(&format!("{}{}\n", PROMPT, EXIT_MESSAGE)));
    Ok(())
}
