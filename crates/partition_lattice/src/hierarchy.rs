//! Per-dimension hierarchy of admissible subsets.
//!
//! A hierarchy owns its value set plus a flat list of subsets. Atomic
//! subsets wrap a single element; every other subset carries one or more
//! admissible partitions into previously declared subsets of the same
//! dimension. The refinement structure is a DAG, not a tree: a subset may
//! admit several alternative partitions.

use crate::error::HierarchyError;
use crate::set::ValueSet;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetKind {
    /// Wraps exactly one element; never partitioned.
    Atomic(usize),
    Intermediate,
    Top,
}

impl SubsetKind {
    pub fn is_atomic(&self) -> bool {
        matches!(self, SubsetKind::Atomic(_))
    }
}

/// One admissible decomposition of its owner into disjoint subsets.
/// Parts are indices into the owning hierarchy's subset storage.
#[derive(Debug, Clone)]
pub struct SubsetPartition {
    pub parts: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Subset {
    pub name: String,
    pub kind: SubsetKind,
    pub partitions: Vec<SubsetPartition>,
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    set: ValueSet,
    subsets: Vec<Subset>,
    by_name: HashMap<String, usize>,
    top: Option<usize>,
}

impl Hierarchy {
    pub fn new(set: ValueSet) -> Self {
        Self {
            set,
            subsets: Vec::new(),
            by_name: HashMap::new(),
            top: None,
        }
    }

    pub fn set(&self) -> &ValueSet {
        &self.set
    }

    pub fn name(&self) -> &str {
        &self.set.name
    }

    /// Register an element without any subset over it.
    pub fn add_element(&mut self, name: &str) -> Result<usize, HierarchyError> {
        self.set.add_element(name)
    }

    /// Declare an element together with its singleton atomic subset of the
    /// same name.
    pub fn add_atomic_element(&mut self, name: &str) -> Result<usize, HierarchyError> {
        self.set.add_element(name)?;
        self.add_atomic(name, name)
    }

    /// Declare an atomic subset aliasing an existing element.
    pub fn add_atomic(&mut self, name: &str, element: &str) -> Result<usize, HierarchyError> {
        let element = self.element_index(element)?;
        self.push_subset(name, SubsetKind::Atomic(element))
    }

    pub fn add_intermediate(&mut self, name: &str) -> Result<usize, HierarchyError> {
        self.push_subset(name, SubsetKind::Intermediate)
    }

    /// Declare the top subset covering the whole dimension.
    pub fn add_top(&mut self, name: &str) -> Result<usize, HierarchyError> {
        let index = self.push_subset(name, SubsetKind::Top)?;
        self.mark_top(index);
        Ok(index)
    }

    fn push_subset(&mut self, name: &str, kind: SubsetKind) -> Result<usize, HierarchyError> {
        if self.by_name.contains_key(name) {
            return Err(HierarchyError::DuplicateSubset {
                set: self.set.name.clone(),
                name: name.to_string(),
            });
        }
        let index = self.subsets.len();
        self.subsets.push(Subset {
            name: name.to_string(),
            kind,
            partitions: Vec::new(),
        });
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    /// Designate `index` as the dimension's top subset. The previous top, if
    /// any, is demoted to an intermediate. An atomic subset keeps its kind
    /// (its element reference stays intact) but is still recorded as top.
    pub fn mark_top(&mut self, index: usize) {
        if let Some(prev) = self.top.take() {
            if prev != index && self.subsets[prev].kind == SubsetKind::Top {
                self.subsets[prev].kind = SubsetKind::Intermediate;
            }
        }
        if self.subsets[index].kind == SubsetKind::Intermediate {
            self.subsets[index].kind = SubsetKind::Top;
        }
        self.top = Some(index);
    }

    /// Attach one admissible partition to a non-atomic subset. Parts must be
    /// previously declared subsets of this dimension, two or more of them.
    pub fn add_partition(&mut self, owner: &str, parts: &[&str]) -> Result<(), HierarchyError> {
        let owner = self.subset_index(owner)?;
        let parts = parts
            .iter()
            .map(|name| self.subset_index(name))
            .collect::<Result<Vec<usize>, _>>()?;
        self.add_partition_by_index(owner, parts)
    }

    pub fn add_partition_by_index(
        &mut self,
        owner: usize,
        parts: Vec<usize>,
    ) -> Result<(), HierarchyError> {
        if self.subsets[owner].kind.is_atomic() {
            return Err(HierarchyError::PartitionOnAtomic {
                set: self.set.name.clone(),
                subset: self.subsets[owner].name.clone(),
            });
        }
        if parts.len() < 2 {
            return Err(HierarchyError::TooFewParts {
                set: self.set.name.clone(),
                subset: self.subsets[owner].name.clone(),
            });
        }
        self.subsets[owner].partitions.push(SubsetPartition { parts });
        Ok(())
    }

    pub fn element_index(&self, name: &str) -> Result<usize, HierarchyError> {
        self.set
            .index_of(name)
            .ok_or_else(|| HierarchyError::UnknownElement {
                set: self.set.name.clone(),
                name: name.to_string(),
            })
    }

    pub fn subset_index(&self, name: &str) -> Result<usize, HierarchyError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| HierarchyError::UnknownSubset {
                set: self.set.name.clone(),
                name: name.to_string(),
            })
    }

    pub fn has_subset(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn subset(&self, index: usize) -> &Subset {
        &self.subsets[index]
    }

    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    pub fn subsets(&self) -> impl Iterator<Item = &Subset> {
        self.subsets.iter()
    }

    pub fn top(&self) -> Result<usize, HierarchyError> {
        self.top.ok_or_else(|| HierarchyError::MissingTop {
            set: self.set.name.clone(),
        })
    }

    /// Atomic elements reachable from a subset, by depth-first closure
    /// through its first partition. All partitions of a subset cover the
    /// same elements (a validated input precondition), so any one of them
    /// gives the answer.
    pub fn atoms(&self, index: usize) -> Result<Vec<usize>, HierarchyError> {
        let mut elements = Vec::new();
        self.collect_atoms(index, &mut elements)?;
        Ok(elements)
    }

    fn collect_atoms(&self, index: usize, elements: &mut Vec<usize>) -> Result<(), HierarchyError> {
        match self.subsets[index].kind {
            SubsetKind::Atomic(element) => elements.push(element),
            _ => {
                let partition = self.subsets[index].partitions.first().ok_or_else(|| {
                    HierarchyError::NoPartition {
                        set: self.set.name.clone(),
                        subset: self.subsets[index].name.clone(),
                    }
                })?;
                for &part in &partition.parts {
                    self.collect_atoms(part, elements)?;
                }
            }
        }
        Ok(())
    }

    /// Atoms reached through one specific partition of a subset.
    fn atoms_via(&self, partition: &SubsetPartition) -> Result<Vec<usize>, HierarchyError> {
        let mut elements = Vec::new();
        for &part in &partition.parts {
            self.collect_atoms(part, &mut elements)?;
        }
        Ok(elements)
    }

    /// Check the structural input preconditions that are decidable after
    /// load: a top subset exists, every non-atomic subset carries at least
    /// one partition, and alternative partitions of one subset reach the
    /// same elements. Cycles and disjointness of a partition's parts remain
    /// documented preconditions of the input.
    pub fn validate(&self) -> Result<(), HierarchyError> {
        self.top()?;
        for (index, subset) in self.subsets.iter().enumerate() {
            if subset.kind.is_atomic() {
                continue;
            }
            let mut reference = self.atoms(index)?;
            reference.sort_unstable();
            for partition in subset.partitions.iter().skip(1) {
                let mut alternative = self.atoms_via(partition)?;
                alternative.sort_unstable();
                if alternative != reference {
                    return Err(HierarchyError::CoverMismatch {
                        set: self.set.name.clone(),
                        subset: subset.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Hierarchy {
    /// One line for the value set, then one line per subset with its
    /// elements and attached partitions, e.g.
    /// `B123 = {b1, b2, b3} {B1, B23} {B12, B3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set)?;
        for (index, subset) in self.subsets.iter().enumerate() {
            let elements = self.atoms(index).unwrap_or_default();
            write!(
                f,
                "\n\t{} = {{{}}}",
                subset.name,
                elements.iter().map(|&e| self.set.element_name(e)).join(", ")
            )?;
            for partition in &subset.partitions {
                write!(
                    f,
                    " {{{}}}",
                    partition
                        .parts
                        .iter()
                        .map(|&p| self.subsets[p].name.as_str())
                        .join(", ")
                )?;
            }
        }
        Ok(())
    }
}
