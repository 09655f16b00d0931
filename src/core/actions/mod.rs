pub mod colour_mapping;
pub mod evaluate_batch;
pub mod sample_grid;
