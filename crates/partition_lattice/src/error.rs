//! Error types for hierarchy construction, measure assignment and input parsing.

use thiserror::Error;

/// Errors raised while building or validating a per-dimension subset hierarchy.
#[derive(Debug, Error, PartialEq)]
pub enum HierarchyError {
    #[error("duplicate element '{name}' in set '{set}'")]
    DuplicateElement { set: String, name: String },

    #[error("duplicate subset '{name}' in set '{set}'")]
    DuplicateSubset { set: String, name: String },

    #[error("unknown element '{name}' in set '{set}'")]
    UnknownElement { set: String, name: String },

    #[error("unknown subset '{name}' in set '{set}'")]
    UnknownSubset { set: String, name: String },

    #[error("cannot attach a partition to atomic subset '{subset}' of set '{set}'")]
    PartitionOnAtomic { set: String, subset: String },

    #[error("partition of subset '{subset}' of set '{set}' needs at least two parts")]
    TooFewParts { set: String, subset: String },

    #[error("no partition found on intermediate subset '{subset}' of set '{set}'")]
    NoPartition { set: String, subset: String },

    #[error("no top subset marked in set '{set}'")]
    MissingTop { set: String },

    #[error("partitions of subset '{subset}' of set '{set}' cover different elements")]
    CoverMismatch { set: String, subset: String },
}

/// Errors raised when assigning or reading measure cells by element names.
#[derive(Debug, Error, PartialEq)]
pub enum MeasureError {
    #[error("expected {expected} element names, got {got}")]
    WrongArity { expected: usize, got: usize },

    #[error("unknown element '{name}' in set '{set}'")]
    UnknownElement { set: String, name: String },

    #[error("negative value {value} for cell ({cell})")]
    NegativeValue { cell: String, value: f64 },
}

/// Errors raised by the text input adapter. Malformed records are not errors:
/// they are skipped with a warning and parsing continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no subset declared for set '{set}', cannot mark a top subset")]
    EmptyHierarchy { set: String },
}
