//! Product lattice of rectangular blocks.
//!
//! A block picks one admissible subset per dimension; its cell cover is the
//! Cartesian product of the components' elements. A refinement splits a
//! block along exactly one dimension, substituting the parts of one of that
//! component's partitions. Blocks and refinements are flat arrays indexed
//! by dense id; refinements reference their part blocks by id.

use crate::error::HierarchyError;
use crate::space::Space;
use itertools::Itertools;
use std::fmt;

/// Refinement of one block along `dim`: the block ids obtained by
/// substituting each part of one admissible partition into that position.
#[derive(Debug, Clone)]
pub struct Refinement {
    pub dim: usize,
    pub parts: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Block {
    /// One subset index per dimension.
    pub subsets: Vec<usize>,
    /// All admissible refinements, dimensions ascending, partitions in
    /// declaration order. Empty for fully atomic blocks.
    pub refinements: Vec<Refinement>,
}

impl Block {
    pub fn is_leaf(&self) -> bool {
        self.refinements.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Lattice {
    shape: Vec<usize>,
    strides: Vec<usize>,
    blocks: Vec<Block>,
    top: usize,
}

impl Lattice {
    /// Enumerate every block and every refinement of the space. Block ids
    /// are dense, dimension 0 fastest, consistent with `block_id`.
    pub fn build(space: &Space) -> Result<Self, HierarchyError> {
        let shape: Vec<usize> = space.dims().iter().map(|dim| dim.subset_count()).collect();
        let mut strides = Vec::with_capacity(shape.len());
        let mut stride = 1;
        for &n in &shape {
            strides.push(stride);
            stride *= n;
        }
        let total = stride;

        let mut blocks = Vec::with_capacity(total);
        for id in 0..total {
            let mut remainder = id;
            let subsets: Vec<usize> = shape
                .iter()
                .map(|&n| {
                    let s = remainder % n;
                    remainder /= n;
                    s
                })
                .collect();

            let mut refinements = Vec::new();
            for (d, &subset) in subsets.iter().enumerate() {
                for partition in &space.dim(d).subset(subset).partitions {
                    let parts = partition
                        .parts
                        .iter()
                        .map(|&part| derived_id(id, subset, part, strides[d]))
                        .collect();
                    refinements.push(Refinement { dim: d, parts });
                }
            }
            blocks.push(Block { subsets, refinements });
        }

        let top_subsets = space
            .dims()
            .iter()
            .map(|dim| dim.top())
            .collect::<Result<Vec<usize>, _>>()?;
        let top = address(&top_subsets, &strides);

        Ok(Self {
            shape,
            strides,
            blocks,
            top,
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: usize) -> &Block {
        &self.blocks[id]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Dense id of a tuple of per-dimension subset indices.
    pub fn block_id(&self, subsets: &[usize]) -> usize {
        assert_eq!(subsets.len(), self.shape.len(), "subset tuple arity mismatch");
        address(subsets, &self.strides)
    }

    /// Names of a block's component subsets, for reports.
    pub fn block_names<'a>(&self, space: &'a Space, id: usize) -> Vec<&'a str> {
        self.blocks[id]
            .subsets
            .iter()
            .enumerate()
            .map(|(d, &s)| space.dim(d).subset(s).name.as_str())
            .collect()
    }
}

fn address(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides)
        .map(|(&i, &stride)| i * stride)
        .sum()
}

fn derived_id(id: usize, subset: usize, part: usize, stride: usize) -> usize {
    id - subset * stride + part * stride
}

/// Full textual dump of a lattice, one block per line with its refinement
/// count, in id order.
pub struct LatticeDump<'a> {
    pub space: &'a Space,
    pub lattice: &'a Lattice,
}

impl fmt::Display for LatticeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in 0..self.lattice.len() {
            let block = self.lattice.block(id);
            writeln!(
                f,
                "({}) [{} refinements]",
                self.lattice.block_names(self.space, id).iter().join(", "),
                block.refinements.len()
            )?;
        }
        Ok(())
    }
}
