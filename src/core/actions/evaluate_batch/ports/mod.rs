pub mod sample_algorithm;
