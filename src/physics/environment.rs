use crate::constants::AIR_DENSITY;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub density: f64, // kg/m³
}

impl Environment {
    pub fn new(density: f64) -> Self {
        Environment { density }
    }

    /// Air at the density used for the NACA 2412 analysis.
    pub fn standard() -> Self {
        Self::new(AIR_DENSITY)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::standard()
    }
}
