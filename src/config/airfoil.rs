use crate::constants::{NACA_2412_C_D, NACA_2412_C_L, NACA_2412_WING_AREA};
use crate::models::airfoil::AirfoilProperties;

/// NACA 2412 section with coefficients taken from a SolidWorks CFD run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naca2412;

impl Naca2412 {
    pub const C_D: f64 = NACA_2412_C_D;
    pub const C_L: f64 = NACA_2412_C_L;
    pub const WING_AREA: f64 = NACA_2412_WING_AREA; // m²
}

impl AirfoilProperties for Naca2412 {
    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn lift_coefficient(&self) -> f64 {
        Self::C_L
    }

    fn reference_area(&self) -> f64 {
        Self::WING_AREA
    }

    fn name(&self) -> &str {
        "NACA 2412"
    }
}

/// Airfoil described by an arbitrary coefficient set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomAirfoil {
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
    pub reference_area: f64,
}

impl CustomAirfoil {
    pub fn new(drag_coefficient: f64, lift_coefficient: f64, reference_area: f64) -> Self {
        Self {
            drag_coefficient,
            lift_coefficient,
            reference_area,
        }
    }
}

impl AirfoilProperties for CustomAirfoil {
    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn lift_coefficient(&self) -> f64 {
        self.lift_coefficient
    }

    fn reference_area(&self) -> f64 {
        self.reference_area
    }
}
