use partition_lattice::parse::{read_hierarchy, read_measure};
use partition_lattice::{block_stats, Lattice, LatticeDump, Report, ReportDetail, Solver, Space};
use std::io::Cursor;

// Three dimensions with nested groupings; B123 admits two alternative
// partitions, so the refinement structure is a genuine DAG.
const SET_A: &str = "\
a1
a2
a3
a4
A1 a1
A2 a2
A3 a3
A4 a4
A12 A1 A2
A34 A3 A4
A1234 A12 A34
";

const SET_B: &str = "\
b1
b2
b3
B1 b1
B2 b2
B3 b3
B12 B1 B2
B23 B2 B3
B123 B1 B23
B123 B12 B3
";

const SET_C: &str = "\
c1
c2
C1 c1
C2 c2
C12 C1 C2
";

const MEASURE: &str = "\
a3 b2 c1 2
";

fn main() {
    println!("=== Rectangular compression of a 4 x 3 x 2 grid ===");

    let a = read_hierarchy("A", Cursor::new(SET_A)).expect("set A");
    let b = read_hierarchy("B", Cursor::new(SET_B)).expect("set B");
    let c = read_hierarchy("C", Cursor::new(SET_C)).expect("set C");

    let mut space = Space::new("ABC", vec![a, b, c]).expect("space");
    let applied = read_measure(&mut space, Cursor::new(MEASURE)).expect("measure");
    println!("{}", space);
    println!("{} measure cells set\n", applied);

    let lattice = Lattice::build(&space).expect("lattice");
    println!(
        "lattice: {} blocks, top = ({})",
        lattice.len(),
        lattice.block_names(&space, lattice.top()).join(", ")
    );
    let stats = block_stats(&space, &lattice).expect("stats");

    let mut solver = Solver::new(&lattice, &stats);
    for lambda in [0.0, 0.2, 1.0, 1e5] {
        let partition = solver.solve(lambda);
        println!(
            "\n{}",
            Report {
                space: &space,
                lattice: &lattice,
                stats: &stats,
                partition: &partition,
                detail: ReportDetail::Stats,
            }
        );
    }

    println!("\n=== Full lattice ===");
    print!(
        "{}",
        LatticeDump {
            space: &space,
            lattice: &lattice,
        }
    );
}
