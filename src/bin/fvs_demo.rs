use fvs_approx::cs::approx::feedback_vertex_set::{solve, FvsConfig};
use fvs_approx::cs::graph::{is_feedback_vertex_set, SimpleGraph};
use fvs_approx::Result;
use ndarray::{array, Array2};

fn run(name: &str, adjacency: &Array2<u8>, weights: &[f64]) -> Result<()> {
    let graph = SimpleGraph::from_adjacency_matrix(adjacency)?;
    let solution = solve(&graph, weights, &FvsConfig::default())?;
    let verified = is_feedback_vertex_set(&graph, &solution.vertices)?;

    println!(
        "{}: fvs {:?}, weight {}, dual bound {}, verified {}",
        name, solution.vertices, solution.weight, solution.dual_bound, verified
    );
    Ok(())
}

fn main() -> Result<()> {
    // A 4-cycle.
    let ring = array![[0, 1, 0, 1], [1, 0, 1, 0], [0, 1, 0, 1], [1, 0, 1, 0]];
    run("ring", &ring, &[3.0, 2.0, 1.0, 9.0])?;

    // Two triangles joined by the edge 2-3.
    let bridged = array![
        [0, 1, 1, 0, 0, 0],
        [1, 0, 1, 0, 0, 0],
        [1, 1, 0, 1, 0, 0],
        [0, 0, 1, 0, 1, 1],
        [0, 0, 0, 1, 0, 1],
        [0, 0, 0, 1, 1, 0]
    ];
    run("bridged triangles", &bridged, &[2.0, 6.0, 4.0, 9.0, 1.0, 7.0])?;

    Ok(())
}
