use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    #[must_use]
    pub fn from_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self(coeffs.collect()).normalize()
    }
}

impl<T: Scalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value).normalize()
    }
}

impl<T: Scalar> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<T: Scalar> FromIterator<T> for Poly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iterator(iter.into_iter())
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
