// Fluid properties
pub const AIR_DENSITY: f64 = 1.2; // Air density used in the CFD analysis (kg/m³)

// NACA 2412 properties from the SolidWorks CFD analysis
pub const NACA_2412_C_D: f64 = 0.0188; // Coefficient of drag
pub const NACA_2412_C_L: f64 = 0.1367; // Coefficient of lift
pub const NACA_2412_WING_AREA: f64 = 0.4; // Reference area (m²)

// Velocity sweep
pub const SWEEP_MIN_VELOCITY: f64 = 1.0; // m/s
pub const SWEEP_MAX_VELOCITY: f64 = 100.0; // m/s
pub const SWEEP_SAMPLES: usize = 200;

// Chart output
pub const CHART_FILE: &str = "performance_curves_stacked.png";
pub const CHART_DPI: u32 = 200;
pub const CHART_SIZE_INCHES: (u32, u32) = (6, 8); // width, height
