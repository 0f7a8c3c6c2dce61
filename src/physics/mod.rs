pub mod aerodynamics;
pub mod environment;
pub mod power;
