use crate::core::data::complex::Complex;

pub trait SampleAlgorithm {
    type Success;

    fn compute(&self, sample: Complex) -> Self::Success;
}
