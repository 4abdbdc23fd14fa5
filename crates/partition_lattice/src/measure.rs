//! Dense measure tensor over the Cartesian product of the value sets.
//!
//! Cells are addressed by a tuple of element indices, one per dimension,
//! linearised with dimension 0 fastest:
//! `id = ((e_{D-1} * N_{D-2}) + e_{D-2}) * ... + e_0`.

use std::fmt;

#[derive(Debug, Clone)]
pub struct MeasureTensor {
    shape: Vec<usize>,
    strides: Vec<usize>,
    values: Vec<f64>,
}

impl MeasureTensor {
    /// Allocate a zero-filled tensor once the per-dimension sizes are fixed.
    pub fn new(shape: Vec<usize>) -> Self {
        assert!(!shape.is_empty(), "tensor needs at least one dimension");
        let mut strides = Vec::with_capacity(shape.len());
        let mut stride = 1;
        for &n in &shape {
            strides.push(stride);
            stride *= n;
        }
        Self {
            shape,
            strides,
            values: vec![0.0; stride],
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Linear address of an element-index tuple.
    pub fn cell_id(&self, indices: &[usize]) -> usize {
        assert_eq!(indices.len(), self.shape.len(), "index tuple arity mismatch");
        let mut id = 0;
        for d in (0..self.shape.len()).rev() {
            debug_assert!(indices[d] < self.shape[d]);
            id = id * self.shape[d] + indices[d];
        }
        id
    }

    /// Element-index tuple of a linear address.
    pub fn cell_indices(&self, mut id: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.shape.len());
        for &n in &self.shape {
            indices.push(id % n);
            id /= n;
        }
        indices
    }

    pub fn get(&self, indices: &[usize]) -> f64 {
        self.values[self.cell_id(indices)]
    }

    /// Assign a cell; assigning the same cell twice overwrites silently.
    pub fn set(&mut self, indices: &[usize], value: f64) {
        let id = self.cell_id(indices);
        self.values[id] = value;
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Non-zero cells as (index tuple, value), in address order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Vec<usize>, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(id, &v)| (self.cell_indices(id), v))
    }
}

impl fmt::Display for MeasureTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeasureTensor{:?} ({} cells)", self.shape, self.values.len())
    }
}
