//! # Partition Lattice
//!
//! Optimal rectangular partitions of multidimensional datasets.
//!
//! Every dimension comes with a user-supplied hierarchy of admissible
//! subsets; a rectangular block picks one subset per dimension. Given a
//! non-negative measure over the cell grid and a trade-off parameter
//! `lambda`, the engine finds the admissible partition of the full grid
//! minimising `size + lambda * loss`, where loss is the information (in
//! bits) lost by replacing each block's cells with their average.
//!
//! ## Pipeline
//!
//! 1. Build one [`Hierarchy`] per dimension (directly or via [`parse`]).
//! 2. Assemble them into a [`Space`] and fill the measure.
//! 3. Build the [`Lattice`] of blocks and refinements once.
//! 4. Compute per-block aggregates and loss once ([`block_stats`]).
//! 5. Solve for any number of lambda values with a [`Solver`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use partition_lattice::{block_stats, Hierarchy, Lattice, Solver, Space, ValueSet};
//!
//! let mut a = Hierarchy::new(ValueSet::new("A"));
//! a.add_atomic_element("a1")?;
//! a.add_atomic_element("a2")?;
//! a.add_top("A12")?;
//! a.add_partition("A12", &["a1", "a2"])?;
//!
//! let mut space = Space::new("demo", vec![a])?;
//! space.set_measure(&["a1"], 3.0)?;
//!
//! let lattice = Lattice::build(&space)?;
//! let stats = block_stats(&space, &lattice)?;
//! let partition = Solver::new(&lattice, &stats).solve(1.0);
//! ```

pub mod aggregate;
pub mod conf;
pub mod error;
pub mod hierarchy;
pub mod lattice;
pub mod measure;
pub mod parse;
pub mod report;
pub mod set;
pub mod solver;
pub mod space;

pub use aggregate::{block_stats, BlockStats};
pub use conf::ReportDetail;
pub use error::{HierarchyError, MeasureError, ParseError};
pub use hierarchy::{Hierarchy, Subset, SubsetKind, SubsetPartition};
pub use lattice::{Block, Lattice, LatticeDump, Refinement};
pub use measure::MeasureTensor;
pub use report::{summarize, BlockSummary, Report};
pub use set::ValueSet;
pub use solver::{OptimalPartition, Solver};
pub use space::Space;
