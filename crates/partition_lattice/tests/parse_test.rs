//! Integration tests for the text input adapter: the three record shapes,
//! top promotion, skip-and-continue on malformed records, and measure
//! loading.

use partition_lattice::parse::{read_hierarchy, read_measure};
use partition_lattice::{ParseError, Space, SubsetKind};
use std::io::Cursor;

#[test]
fn single_token_declares_element_and_atomic_subset() {
    let h = read_hierarchy("A", Cursor::new("a1\na2\nA12 a1 a2\n")).unwrap();
    assert_eq!(h.set().len(), 2);
    let a1 = h.subset_index("a1").unwrap();
    assert_eq!(h.subset(a1).kind, SubsetKind::Atomic(0));
    assert_eq!(h.top().unwrap(), h.subset_index("A12").unwrap());
    assert!(h.validate().is_ok());
}

#[test]
fn two_tokens_with_known_element_declare_an_alias() {
    let h = read_hierarchy("A", Cursor::new("a1\na2\nA2 a2\nA12 a1 A2\n")).unwrap();
    let alias = h.subset_index("A2").unwrap();
    assert_eq!(h.subset(alias).kind, SubsetKind::Atomic(1));
    // The alias does not create a new element.
    assert_eq!(h.set().len(), 2);
}

#[test]
fn later_records_attach_alternative_partitions() {
    let h = read_hierarchy(
        "B",
        Cursor::new("b1\nb2\nb3\nB12 b1 b2\nB23 b2 b3\nB123 b1 B23\nB123 B12 b3\n"),
    )
    .unwrap();
    let top = h.top().unwrap();
    assert_eq!(h.subset(top).name, "B123");
    assert_eq!(h.subset(top).partitions.len(), 2);
    assert!(h.validate().is_ok());
}

#[test]
fn last_declared_subset_wins_the_top() {
    let h = read_hierarchy("A", Cursor::new("a1\na2\nA12 a1 a2\na3\n")).unwrap();
    // The trailing element declaration is the last subset declared.
    assert_eq!(h.subset(h.top().unwrap()).name, "a3");
}

#[test]
fn unknown_parts_are_dropped_but_the_record_applies() {
    let h = read_hierarchy("A", Cursor::new("a1\na2\nA12 a1 zz a2\n")).unwrap();
    let top = h.top().unwrap();
    assert_eq!(h.subset(top).name, "A12");
    assert_eq!(h.subset(top).partitions[0].parts.len(), 2);
    assert!(h.validate().is_ok());
}

#[test]
fn records_with_too_few_known_parts_are_skipped() {
    let h = read_hierarchy("A", Cursor::new("a1\na2\nA12 a1 zz\nA12 a1 a2\n")).unwrap();
    // The first A12 record is dropped entirely; the second one applies.
    let top = h.subset(h.top().unwrap());
    assert_eq!(top.name, "A12");
    assert_eq!(top.partitions.len(), 1);
    assert_eq!(top.partitions[0].parts.len(), 2);
}

#[test]
fn duplicate_element_records_are_skipped() {
    let h = read_hierarchy("A", Cursor::new("a1\na1\na2\nA12 a1 a2\n")).unwrap();
    assert_eq!(h.set().len(), 2);
    assert!(h.validate().is_ok());
}

#[test]
fn blank_lines_are_ignored() {
    let h = read_hierarchy("A", Cursor::new("a1\n\n\na2\n\nA12 a1 a2\n")).unwrap();
    assert_eq!(h.set().len(), 2);
    assert_eq!(h.subset(h.top().unwrap()).name, "A12");
}

#[test]
fn empty_input_cannot_name_a_top() {
    let result = read_hierarchy("A", Cursor::new("\n\n"));
    assert!(matches!(result, Err(ParseError::EmptyHierarchy { .. })));
}

fn ab_space() -> Space {
    let a = read_hierarchy("A", Cursor::new("a1\na2\nA12 a1 a2\n")).unwrap();
    let b = read_hierarchy("B", Cursor::new("b1\nb2\nB12 b1 b2\n")).unwrap();
    Space::new("AB", vec![a, b]).unwrap()
}

#[test]
fn measure_records_set_cells_and_overwrite() {
    let mut space = ab_space();
    let applied = read_measure(
        &mut space,
        Cursor::new("a1 b1 2.5\na2 b2 1\na1 b1 4.0\n"),
    )
    .unwrap();
    assert_eq!(applied, 3);
    assert_eq!(space.get_measure(&["a1", "b1"]).unwrap(), 4.0);
    assert_eq!(space.get_measure(&["a2", "b2"]).unwrap(), 1.0);
}

#[test]
fn malformed_measure_records_are_skipped() {
    let mut space = ab_space();
    let applied = read_measure(
        &mut space,
        Cursor::new(
            "a1 b1\n\
             a1 b1 c1 3\n\
             zz b1 3\n\
             a1 b1 abc\n\
             a1 b1 -2\n\
             \n\
             a2 b1 7\n",
        ),
    )
    .unwrap();
    assert_eq!(applied, 1);
    assert_eq!(space.get_measure(&["a2", "b1"]).unwrap(), 7.0);
    assert_eq!(space.get_measure(&["a1", "b1"]).unwrap(), 0.0);
}
