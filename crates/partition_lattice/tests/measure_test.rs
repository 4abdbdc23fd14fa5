//! Integration tests for the measure tensor and measure assignment through
//! the space: linear addressing, zero defaults, overwrite semantics, and
//! domain errors on bad cells.

use partition_lattice::parse::read_hierarchy;
use partition_lattice::{MeasureError, MeasureTensor, Space};
use std::io::Cursor;

fn abc_space() -> Space {
    let a = read_hierarchy(
        "A",
        Cursor::new("a1\na2\na3\na4\nA12 a1 a2\nA34 a3 a4\nA1234 A12 A34\n"),
    )
    .unwrap();
    let b = read_hierarchy("B", Cursor::new("b1\nb2\nb3\nB123 b1 b2 b3\n")).unwrap();
    let c = read_hierarchy("C", Cursor::new("c1\nc2\nC12 c1 c2\n")).unwrap();
    Space::new("ABC", vec![a, b, c]).unwrap()
}

#[test]
fn addressing_is_dense_with_dimension_zero_fastest() {
    let tensor = MeasureTensor::new(vec![4, 3, 2]);
    assert_eq!(tensor.len(), 24);
    // id = (e2 * N1 + e1) * N0 + e0
    assert_eq!(tensor.cell_id(&[0, 0, 0]), 0);
    assert_eq!(tensor.cell_id(&[1, 0, 0]), 1);
    assert_eq!(tensor.cell_id(&[0, 1, 0]), 4);
    assert_eq!(tensor.cell_id(&[0, 0, 1]), 12);
    assert_eq!(tensor.cell_id(&[3, 2, 1]), 23);
    for id in 0..tensor.len() {
        assert_eq!(tensor.cell_id(&tensor.cell_indices(id)), id);
    }
}

#[test]
fn cells_default_to_zero_and_overwrite_silently() {
    let mut tensor = MeasureTensor::new(vec![2, 2]);
    assert_eq!(tensor.get(&[1, 1]), 0.0);
    tensor.set(&[1, 1], 2.5);
    tensor.set(&[1, 1], 4.0);
    assert_eq!(tensor.get(&[1, 1]), 4.0);
    assert_eq!(tensor.total(), 4.0);
    assert_eq!(tensor.nonzero().collect::<Vec<_>>(), vec![(vec![1, 1], 4.0)]);
}

#[test]
fn space_assigns_cells_by_element_names() {
    let mut space = abc_space();
    space.set_measure(&["a3", "b2", "c1"], 2.0).unwrap();
    assert_eq!(space.get_measure(&["a3", "b2", "c1"]).unwrap(), 2.0);
    assert_eq!(space.get_measure(&["a3", "b2", "c2"]).unwrap(), 0.0);
    assert_eq!(space.measure().get(&[2, 1, 0]), 2.0);
}

#[test]
fn space_rejects_bad_cells() {
    let mut space = abc_space();
    assert_eq!(
        space.set_measure(&["a3", "b2"], 1.0),
        Err(MeasureError::WrongArity {
            expected: 3,
            got: 2,
        })
    );
    assert_eq!(
        space.set_measure(&["a3", "zz", "c1"], 1.0),
        Err(MeasureError::UnknownElement {
            set: "B".to_string(),
            name: "zz".to_string(),
        })
    );
    assert!(matches!(
        space.set_measure(&["a3", "b2", "c1"], -1.0),
        Err(MeasureError::NegativeValue { .. })
    ));
    // Nothing was written by the failed assignments.
    assert_eq!(space.measure().total(), 0.0);
}

#[test]
fn space_display_dumps_hierarchies_and_nonzero_cells() {
    let mut space = abc_space();
    space.set_measure(&["a3", "b2", "c1"], 2.0).unwrap();
    let rendered = format!("{}", space);
    assert!(rendered.contains("A = {a1, a2, a3, a4}"));
    assert!(rendered.contains("ABC = {"));
    assert!(rendered.contains("(a3, b2, c1, 2)"));
}
