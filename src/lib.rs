pub mod batch;
pub mod bench;
pub mod core;
pub mod grid;
pub mod solver;
