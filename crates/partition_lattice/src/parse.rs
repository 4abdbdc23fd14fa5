//! Text input adapter.
//!
//! Input is whitespace-delimited, one record per line, blank lines ignored.
//! Malformed records are reported through `tracing::warn!` and skipped;
//! parsing always continues with the next line.
//!
//! Subset file grammar, per line:
//! * `elementName`: a new element plus its same-named atomic subset;
//! * `subsetName elementName`: an atomic subset aliasing a known element;
//! * `subsetName part1 part2 ...`: an intermediate subset (created on
//!   first sight) with one admissible partition over known subsets.
//!
//! The last subset declared in a file becomes the dimension's top. A
//! measure file has one record per non-zero cell: D element names and a
//! value.

use crate::error::ParseError;
use crate::hierarchy::Hierarchy;
use crate::set::ValueSet;
use crate::space::Space;
use std::io::BufRead;
use tracing::warn;

/// Read one dimension's subset file.
pub fn read_hierarchy<R: BufRead>(name: &str, input: R) -> Result<Hierarchy, ParseError> {
    let mut hierarchy = Hierarchy::new(ValueSet::new(name));
    let mut last_declared: Option<usize> = None;

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = lineno + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if tokens.len() == 1 {
            match hierarchy.add_atomic_element(tokens[0]) {
                Ok(subset) => last_declared = Some(subset),
                Err(e) => warn!("set '{}' line {}: {}; record skipped", name, lineno, e),
            }
            continue;
        }

        // Two tokens naming a known element declare an atomic alias.
        if tokens.len() == 2 && hierarchy.set().index_of(tokens[1]).is_some() {
            match hierarchy.add_atomic(tokens[0], tokens[1]) {
                Ok(subset) => last_declared = Some(subset),
                Err(e) => warn!("set '{}' line {}: {}; record skipped", name, lineno, e),
            }
            continue;
        }

        // Otherwise: an intermediate subset plus one partition. Unknown
        // parts are dropped with a warning, the rest of the record applies.
        let parts: Vec<&str> = tokens[1..]
            .iter()
            .copied()
            .filter(|part| {
                let known = hierarchy.has_subset(part);
                if !known {
                    warn!(
                        "set '{}' line {}: unknown part '{}' of subset '{}'; part skipped",
                        name, lineno, part, tokens[0]
                    );
                }
                known
            })
            .collect();
        if parts.len() < 2 {
            warn!(
                "set '{}' line {}: partition of '{}' has fewer than two known parts; record skipped",
                name, lineno, tokens[0]
            );
            continue;
        }

        let owner = match hierarchy.subset_index(tokens[0]) {
            Ok(owner) => owner,
            Err(_) => match hierarchy.add_intermediate(tokens[0]) {
                Ok(owner) => owner,
                Err(e) => {
                    warn!("set '{}' line {}: {}; record skipped", name, lineno, e);
                    continue;
                }
            },
        };
        match hierarchy.add_partition(tokens[0], &parts) {
            Ok(()) => last_declared = Some(owner),
            Err(e) => warn!("set '{}' line {}: {}; record skipped", name, lineno, e),
        }
    }

    match last_declared {
        Some(top) => hierarchy.mark_top(top),
        None => {
            return Err(ParseError::EmptyHierarchy {
                set: name.to_string(),
            })
        }
    }
    Ok(hierarchy)
}

/// Read a measure file into an existing space. Returns the number of cells
/// applied; bad records (wrong arity, unknown names, unparsable or negative
/// values) are skipped with a warning.
pub fn read_measure<R: BufRead>(space: &mut Space, input: R) -> Result<usize, ParseError> {
    let ndim = space.ndim();
    let mut applied = 0;

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = lineno + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != ndim + 1 {
            warn!(
                "measure line {}: expected {} names and a value, got {} tokens; record skipped",
                lineno,
                ndim,
                tokens.len()
            );
            continue;
        }

        let value: f64 = match tokens[ndim].parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "measure line {}: unreadable value '{}'; record skipped",
                    lineno, tokens[ndim]
                );
                continue;
            }
        };
        match space.set_measure(&tokens[..ndim], value) {
            Ok(()) => applied += 1,
            Err(e) => warn!("measure line {}: {}; record skipped", lineno, e),
        }
    }
    Ok(applied)
}
