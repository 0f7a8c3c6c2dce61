use crate::errors::AeroErrors;
use nalgebra as na;

/// Power (W) needed to overcome `drag_force` (N) at `velocity` (m/s).
pub fn calculate_power(drag_force: f64, velocity: f64) -> f64 {
    drag_force * velocity
}

pub fn calculate_power_sweep(
    drag_forces: &na::DVector<f64>,
    velocities: &na::DVector<f64>,
) -> Result<na::DVector<f64>, AeroErrors> {
    AeroErrors::check_length("drag forces", velocities.len(), drag_forces.len())?;
    Ok(drag_forces.zip_map(velocities, calculate_power))
}
