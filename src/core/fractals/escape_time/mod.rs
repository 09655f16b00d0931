pub mod algorithm;
pub mod config;
pub mod errors;
pub mod escape_mode;
pub mod max_iterations;
pub mod threshold;
