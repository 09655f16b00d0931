pub mod colour_law;
