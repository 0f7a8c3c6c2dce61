pub mod linspace;
