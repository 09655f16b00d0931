pub mod errors;
pub mod factory;
pub mod kinds;
pub mod laws;
pub mod ports;
pub mod to_colour;
