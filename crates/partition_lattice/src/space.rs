//! The product space: all dimensions plus the measure tensor over their
//! Cartesian product. Construction freezes the hierarchies (each one is
//! validated) and allocates the tensor; afterwards only cell values change.

use crate::error::{HierarchyError, MeasureError};
use crate::hierarchy::Hierarchy;
use crate::measure::MeasureTensor;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Space {
    pub name: String,
    dims: Vec<Hierarchy>,
    measure: MeasureTensor,
}

impl Space {
    pub fn new<S: Into<String>>(name: S, dims: Vec<Hierarchy>) -> Result<Self, HierarchyError> {
        assert!(!dims.is_empty(), "a space needs at least one dimension");
        for dim in &dims {
            dim.validate()?;
        }
        let shape = dims.iter().map(|dim| dim.set().len()).collect();
        Ok(Self {
            name: name.into(),
            measure: MeasureTensor::new(shape),
            dims,
        })
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn dim(&self, d: usize) -> &Hierarchy {
        &self.dims[d]
    }

    pub fn dims(&self) -> &[Hierarchy] {
        &self.dims
    }

    pub fn measure(&self) -> &MeasureTensor {
        &self.measure
    }

    fn resolve(&self, names: &[&str]) -> Result<Vec<usize>, MeasureError> {
        if names.len() != self.dims.len() {
            return Err(MeasureError::WrongArity {
                expected: self.dims.len(),
                got: names.len(),
            });
        }
        names
            .iter()
            .zip(&self.dims)
            .map(|(&name, dim)| {
                dim.set()
                    .index_of(name)
                    .ok_or_else(|| MeasureError::UnknownElement {
                        set: dim.name().to_string(),
                        name: name.to_string(),
                    })
            })
            .collect()
    }

    /// Assign one measure cell by element names. Negative values are a
    /// domain error; repeated assignment overwrites.
    pub fn set_measure(&mut self, names: &[&str], value: f64) -> Result<(), MeasureError> {
        if !(value >= 0.0) {
            return Err(MeasureError::NegativeValue {
                cell: names.iter().join(", "),
                value,
            });
        }
        let indices = self.resolve(names)?;
        self.measure.set(&indices, value);
        Ok(())
    }

    pub fn get_measure(&self, names: &[&str]) -> Result<f64, MeasureError> {
        let indices = self.resolve(names)?;
        Ok(self.measure.get(&indices))
    }

    /// Names of one cell's elements, for diagnostics and reports.
    pub fn cell_names(&self, indices: &[usize]) -> Vec<&str> {
        indices
            .iter()
            .zip(&self.dims)
            .map(|(&i, dim)| dim.set().element_name(i))
            .collect()
    }
}

impl fmt::Display for Space {
    /// The per-dimension hierarchies followed by the non-zero cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dim in &self.dims {
            writeln!(f, "{}", dim)?;
        }
        writeln!(f, "{} = {{", self.name)?;
        for (indices, value) in self.measure.nonzero() {
            writeln!(f, "\t({}, {})", self.cell_names(&indices).iter().join(", "), value)?;
        }
        write!(f, "}}")
    }
}
