//! Textual and serialisable views of a solved partition.

use crate::aggregate::BlockStats;
use crate::conf::ReportDetail;
use crate::lattice::Lattice;
use crate::solver::OptimalPartition;
use crate::space::Space;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-block summary in reconstruction order, exportable as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub subsets: Vec<String>,
    pub count: usize,
    pub mean: f64,
    pub loss: f64,
}

pub fn summarize(
    space: &Space,
    lattice: &Lattice,
    stats: &[BlockStats],
    partition: &OptimalPartition,
) -> Vec<BlockSummary> {
    partition
        .blocks
        .iter()
        .map(|&id| {
            let s = &stats[id];
            BlockSummary {
                subsets: lattice
                    .block_names(space, id)
                    .iter()
                    .map(|n| n.to_string())
                    .collect(),
                count: s.count,
                mean: s.sum_v / s.count as f64,
                loss: s.loss,
            }
        })
        .collect()
}

/// Deterministic rendering of a solved partition. With
/// [`ReportDetail::Stats`] every block also shows its cell count and loss,
/// and a header line carries the partition totals.
pub struct Report<'a> {
    pub space: &'a Space,
    pub lattice: &'a Lattice,
    pub stats: &'a [BlockStats],
    pub partition: &'a OptimalPartition,
    pub detail: ReportDetail,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.shows_stats() {
            writeln!(
                f,
                "lambda = {} -> {} blocks, cost = {:.6}, loss = {:.6}",
                self.partition.lambda,
                self.partition.len(),
                self.partition.cost,
                self.partition.loss(self.stats)
            )?;
        }
        for &id in &self.partition.blocks {
            let s = &self.stats[id];
            write!(
                f,
                "({}) mean = {:.6}",
                self.lattice.block_names(self.space, id).iter().join(", "),
                s.sum_v / s.count as f64
            )?;
            if self.detail.shows_stats() {
                write!(f, " count = {} loss = {:.6}", s.count, s.loss)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
