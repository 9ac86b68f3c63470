use std::ops::Index;

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// The coefficient of the term of degree `idx`, if there is one
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&T> {
        debug_assert!(self.is_normalized());
        self.0.get(idx)
    }
}

impl<T: Scalar> Index<usize> for Poly<T> {
    type Output = T;

    /// # Panics
    /// If `idx` is larger than the degree.
    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}
