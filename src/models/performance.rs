use crate::errors::AeroErrors;
use crate::models::airfoil::AirfoilProperties;
use crate::physics::aerodynamics::{calculate_forces, calculate_forces_sweep};
use crate::physics::environment::Environment;
use crate::physics::power::{calculate_power, calculate_power_sweep};
use nalgebra as na;
use std::fmt;

/// Lift, drag and power at a single velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformancePoint {
    pub velocity: f64, // m/s
    pub lift: f64,     // N
    pub drag: f64,     // N
    pub power: f64,    // W
}

impl PerformancePoint {
    pub fn compute<T: AirfoilProperties>(
        airfoil: &T,
        environment: &Environment,
        velocity: f64,
    ) -> Self {
        let (lift, drag) = calculate_forces(airfoil, environment, velocity);
        let power = calculate_power(drag, velocity);
        PerformancePoint {
            velocity,
            lift,
            drag,
            power,
        }
    }
}

impl fmt::Display for PerformancePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Debug keeps the trailing ".0" on integral velocities
        writeln!(f, "Results for velocity {:?} m/s:", self.velocity)?;
        writeln!(f, "Lift Force: {:.2} N", self.lift)?;
        writeln!(f, "Drag Force: {:.2} N", self.drag)?;
        write!(f, "Power Required: {:.2} W", self.power)
    }
}

/// Parallel velocity, lift, drag and power series of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSweep {
    velocities: na::DVector<f64>,
    lift: na::DVector<f64>,
    drag: na::DVector<f64>,
    power: na::DVector<f64>,
}

impl PerformanceSweep {
    pub fn compute<T: AirfoilProperties>(
        airfoil: &T,
        environment: &Environment,
        velocities: na::DVector<f64>,
    ) -> Result<Self, AeroErrors> {
        let (lift, drag) = calculate_forces_sweep(airfoil, environment, &velocities);
        let power = calculate_power_sweep(&drag, &velocities)?;
        Self::from_parts(velocities, lift, drag, power)
    }

    pub fn from_parts(
        velocities: na::DVector<f64>,
        lift: na::DVector<f64>,
        drag: na::DVector<f64>,
        power: na::DVector<f64>,
    ) -> Result<Self, AeroErrors> {
        let expected = velocities.len();
        AeroErrors::check_length("lift forces", expected, lift.len())?;
        AeroErrors::check_length("drag forces", expected, drag.len())?;
        AeroErrors::check_length("power values", expected, power.len())?;

        Ok(PerformanceSweep {
            velocities,
            lift,
            drag,
            power,
        })
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn velocities(&self) -> &na::DVector<f64> {
        &self.velocities
    }

    pub fn lift(&self) -> &na::DVector<f64> {
        &self.lift
    }

    pub fn drag(&self) -> &na::DVector<f64> {
        &self.drag
    }

    pub fn power(&self) -> &na::DVector<f64> {
        &self.power
    }

    pub fn points(&self) -> impl Iterator<Item = PerformancePoint> + '_ {
        (0..self.len()).map(move |i| PerformancePoint {
            velocity: self.velocities[i],
            lift: self.lift[i],
            drag: self.drag[i],
            power: self.power[i],
        })
    }
}
