//! Aggregation of the measure over the lattice and information loss.
//!
//! Each block gets, exactly once:
//! * `count`: number of cells it covers
//! * `sum_v`: total measure over those cells
//! * `sum_i`: sum of `v * log2(v)` over its positive cells
//! * `loss`: bits lost when the block is represented by its average value
//!   instead of its cells, normalised by the total measure of the space.
//!
//! Leaf blocks read the tensor directly over the Cartesian product of their
//! components' elements; interior blocks sum the parts of their first
//! refinement (all refinements of a block agree, by the cover invariant).

use crate::error::HierarchyError;
use crate::lattice::Lattice;
use crate::space::Space;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStats {
    pub count: usize,
    pub sum_v: f64,
    pub sum_i: f64,
    pub loss: f64,
}

/// Compute the stats of every block in one memoised sweep.
pub fn block_stats(space: &Space, lattice: &Lattice) -> Result<Vec<BlockStats>, HierarchyError> {
    // Elements reachable from each subset, resolved once per dimension.
    let mut atoms: Vec<Vec<Vec<usize>>> = Vec::with_capacity(space.ndim());
    for dim in space.dims() {
        let per_subset = (0..dim.subset_count())
            .map(|s| dim.atoms(s))
            .collect::<Result<Vec<_>, _>>()?;
        atoms.push(per_subset);
    }

    let mut memo: Vec<Option<BlockStats>> = vec![None; lattice.len()];
    for id in 0..lattice.len() {
        aggregate(id, space, lattice, &atoms, &mut memo);
    }
    let mut stats: Vec<BlockStats> = memo.into_iter().map(|s| s.unwrap()).collect();

    for s in &mut stats {
        s.loss = raw_loss(s);
    }
    let total = stats[lattice.top()].sum_v;
    if total > 0.0 {
        for s in &mut stats {
            s.loss /= total;
        }
    }
    Ok(stats)
}

fn aggregate(
    id: usize,
    space: &Space,
    lattice: &Lattice,
    atoms: &[Vec<Vec<usize>>],
    memo: &mut Vec<Option<BlockStats>>,
) {
    if memo[id].is_some() {
        return;
    }
    let block = lattice.block(id);

    let stats = if block.is_leaf() {
        let covers: Vec<&[usize]> = block
            .subsets
            .iter()
            .enumerate()
            .map(|(d, &s)| atoms[d][s].as_slice())
            .collect();
        let count = covers.iter().map(|c| c.len()).product();
        let mut sum_v = 0.0;
        let mut sum_i = 0.0;
        for cell in covers
            .iter()
            .map(|c| c.iter().copied())
            .multi_cartesian_product()
        {
            let v = space.measure().get(&cell);
            sum_v += v;
            if v > 0.0 {
                sum_i += v * v.log2();
            }
        }
        BlockStats {
            count,
            sum_v,
            sum_i,
            loss: 0.0,
        }
    } else {
        // Any one refinement carries the same totals; take the first.
        let parts = lattice.block(id).refinements[0].parts.clone();
        let mut count = 0;
        let mut sum_v = 0.0;
        let mut sum_i = 0.0;
        for part in parts {
            aggregate(part, space, lattice, atoms, memo);
            let s = memo[part].unwrap();
            count += s.count;
            sum_v += s.sum_v;
            sum_i += s.sum_i;
        }
        BlockStats {
            count,
            sum_v,
            sum_i,
            loss: 0.0,
        }
    };
    memo[id] = Some(stats);
}

/// Unnormalised loss in bits. Zero-mass blocks lose nothing; otherwise this
/// is `sum_i - sum_v*log2(sum_v) + sum_v*log2(count)`, the divergence
/// between the cells and the flat profile with the same total. It is zero
/// exactly when the covered cells are uniform, and in particular for
/// single-cell blocks.
fn raw_loss(s: &BlockStats) -> f64 {
    if s.sum_v <= 0.0 {
        return 0.0;
    }
    s.sum_i - s.sum_v * s.sum_v.log2() + s.sum_v * (s.count as f64).log2()
}
