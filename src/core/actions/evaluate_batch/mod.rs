pub mod evaluate_batch;
pub mod evaluate_batch_parallel_rayon;
pub mod evaluate_batch_scalar;
pub(crate) mod masked_batch;
pub mod ports;
