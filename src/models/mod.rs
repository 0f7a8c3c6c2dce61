pub mod airfoil;
pub mod performance;

pub use airfoil::AirfoilProperties;
pub use performance::{PerformancePoint, PerformanceSweep};
