//! Combine two overlapping unit squares with every rule and print the result faces.
//! Pipeline `debug!` events are printed as well.
//!
//! Usage:
//!   cargo run -p planarbool --example two_squares -- [union|intersection|xor|difference|all]

use planarbool::boolean::interior_faces;
use planarbool::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn square_a() -> Vec<Vec2<f64>> {
    [(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (1.0, 1.0), (0.5, 1.0), (0.0, 1.0)]
        .iter()
        .map(|&(x, y)| Vec2::new(x, y))
        .collect()
}

fn square_b() -> Vec<Vec2<f64>> {
    [(0.5, 0.5), (1.0, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5), (0.5, 1.0)]
        .iter()
        .map(|&(x, y)| Vec2::new(x, y))
        .collect()
}

fn run(rule: Rule) -> Result<(), BoolError> {
    let mut b = square_b();
    if rule == Rule::Difference {
        b.reverse();
    }
    let mut g = PlanarGraph::new();
    g.insert_loop(&square_a())?;
    g.insert_loop(&b)?;
    let summary = BooleanEngine::<CoincidentVertexMerge, RayBridge>::default().apply(&mut g, rule)?;
    println!(
        "{rule:?}: nodes {} -> {}, removed {} edges",
        summary.nodes_before, summary.nodes_after, summary.edges_removed
    );
    for face in interior_faces(&mut g)? {
        println!("  interior face: {} nodes, area {:.4}", face.node_count, face.area);
    }
    Ok(())
}

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let rules: Vec<Rule> = match mode.as_str() {
        "union" => vec![Rule::Union],
        "intersection" => vec![Rule::Intersection],
        "xor" => vec![Rule::Parity],
        "difference" => vec![Rule::Difference],
        "all" => vec![Rule::Union, Rule::Intersection, Rule::Parity, Rule::Difference],
        _ => {
            eprintln!("usage: two_squares [union|intersection|xor|difference|all]");
            return;
        }
    };
    for rule in rules {
        if let Err(e) = run(rule) {
            eprintln!("{rule:?} failed: {e}");
        }
    }
}
