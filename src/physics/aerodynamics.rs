use super::environment::Environment;
use crate::models::airfoil::AirfoilProperties;
use nalgebra as na;

/// Common factor of the lift and drag equations, `0.5 * rho * v² * A`.
pub fn dynamic_pressure_factor(velocity: f64, reference_area: f64, density: f64) -> f64 {
    0.5 * density * velocity.powi(2) * reference_area
}

/// Lift and drag (N) on `airfoil` at `velocity` (m/s). No validation is done
/// on the velocity; non-finite inputs propagate.
pub fn calculate_forces<T: AirfoilProperties>(
    airfoil: &T,
    environment: &Environment,
    velocity: f64,
) -> (f64, f64) {
    let q = dynamic_pressure_factor(velocity, airfoil.reference_area(), environment.density);

    let lift_force = airfoil.lift_coefficient() * q;
    let drag_force = airfoil.drag_coefficient() * q;
    (lift_force, drag_force)
}

/// Element-wise [`calculate_forces`] over a velocity sweep.
pub fn calculate_forces_sweep<T: AirfoilProperties>(
    airfoil: &T,
    environment: &Environment,
    velocities: &na::DVector<f64>,
) -> (na::DVector<f64>, na::DVector<f64>) {
    let forces = velocities.map(|velocity| calculate_forces(airfoil, environment, velocity));
    (forces.map(|(lift, _)| lift), forces.map(|(_, drag)| drag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::airfoil::{CustomAirfoil, Naca2412};
    use approx::assert_abs_diff_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case(0.0, 0.0, 0.0; "zero velocity")]
    #[test_case(10.0, 3.2808, 0.4512; "10 m/s")]
    #[test_case(50.0, 82.02, 11.28; "50 m/s")]
    #[test_case(-10.0, 3.2808, 0.4512; "negative velocity is squared")]
    fn test_naca_2412_forces(velocity: f64, expected_lift: f64, expected_drag: f64) {
        let (lift, drag) = calculate_forces(&Naca2412, &Environment::standard(), velocity);
        assert_abs_diff_eq!(lift, expected_lift, epsilon = 1e-9);
        assert_abs_diff_eq!(drag, expected_drag, epsilon = 1e-9);
    }

    #[test]
    fn test_dynamic_pressure_factor() {
        assert_abs_diff_eq!(dynamic_pressure_factor(10.0, 0.4, 1.2), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_alternative_coefficients() {
        let airfoil = CustomAirfoil::new(0.5, 1.0, 2.0);
        let (lift, drag) = calculate_forces(&airfoil, &Environment::new(1.0), 3.0);
        // q = 0.5 * 1.0 * 9.0 * 2.0
        assert_abs_diff_eq!(lift, 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(drag, 4.5, epsilon = 1e-12);
    }

    #[test]
    fn test_infinite_velocity_is_not_handled() {
        let (lift, drag) = calculate_forces(&Naca2412, &Environment::standard(), f64::INFINITY);
        assert!(lift.is_infinite());
        assert!(drag.is_infinite());
    }

    #[test]
    fn test_sweep_matches_scalar() {
        let mut rng = rand::thread_rng();
        let velocities = na::DVector::from_fn(64, |_, _| rng.gen_range(-200.0..200.0));
        let environment = Environment::standard();

        let (lift, drag) = calculate_forces_sweep(&Naca2412, &environment, &velocities);
        assert_eq!(lift.len(), velocities.len());
        assert_eq!(drag.len(), velocities.len());
        for (i, &velocity) in velocities.iter().enumerate() {
            let (expected_lift, expected_drag) = calculate_forces(&Naca2412, &environment, velocity);
            assert_eq!(lift[i], expected_lift);
            assert_eq!(drag[i], expected_drag);
        }
    }

    #[test]
    fn test_empty_sweep() {
        let (lift, drag) =
            calculate_forces_sweep(&Naca2412, &Environment::standard(), &na::DVector::zeros(0));
        assert!(lift.is_empty());
        assert!(drag.is_empty());
    }
}
