#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::common::{Cost, Location};
use crate::utils::{GenericError, GenericResult};
use std::ops::Index;

/// A square travel cost matrix indexed by location, stored row major so that
/// `matrix[from][to]` reads a single cost.
#[derive(Clone, Debug)]
pub struct Matrix {
    size: usize,
    data: Vec<Cost>,
}

impl Matrix {
    /// Creates a new instance of `Matrix` from row-major data.
    pub fn new(size: usize, data: Vec<Cost>) -> GenericResult<Self> {
        if data.len() != size * size {
            return Err(GenericError::from(format!(
                "cannot create matrix: expected {} values, got {}",
                size * size,
                data.len()
            )));
        }

        Ok(Self { size, data })
    }

    /// Creates a new instance of `Matrix` by evaluating the given function for
    /// every (from, to) pair.
    pub fn from_fn<F: Fn(Location, Location) -> Cost>(size: usize, costs: F) -> Self {
        let data = (0..size * size).map(|idx| costs(idx / size, idx % size)).collect();
        Self { size, data }
    }

    /// Returns the number of locations covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<Location> for Matrix {
    type Output = [Cost];

    fn index(&self, from: Location) -> &Self::Output {
        &self.data[from * self.size..(from + 1) * self.size]
    }
}
