pub mod airfoil;
