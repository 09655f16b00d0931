pub mod complex;
pub mod escape_result;
pub mod grid;
pub mod region;
