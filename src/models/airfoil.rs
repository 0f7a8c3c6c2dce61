pub trait AirfoilProperties {
    fn drag_coefficient(&self) -> f64;
    fn lift_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;

    /// Human readable designation used in chart titles.
    fn name(&self) -> &str {
        "Custom"
    }
}
