/// How much detail a partition report prints for each block.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ReportDetail {
    /// Subset names and block mean only.
    Means,
    /// Names, mean, cell count, loss, and the partition totals.
    Stats,
}

impl ReportDetail {
    pub fn shows_stats(&self) -> bool {
        matches!(self, ReportDetail::Stats)
    }
}
