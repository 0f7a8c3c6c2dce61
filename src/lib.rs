pub mod config;
pub mod constants;
pub mod errors;
pub mod fsm;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod plotting;
pub mod session;
