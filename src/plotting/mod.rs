pub mod display;
pub mod performance_chart;

pub use display::display_chart;
pub use performance_chart::render_performance_chart;
