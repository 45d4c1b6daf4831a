//! Walk the inscribed-polygon family and print what it produces.
//!
//! Usage:
//!   cargo run -p ngon --example sweep -- [count]
//!
//! Steps the traversal `count` times (default 20) at circumradius 5, then
//! prints the produced range, a reversed sample, and the edge count with the
//! best area-to-perimeter ratio.

use ngon::PolygonCollection;

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(20);

    let collection = PolygonCollection::new(5.0).expect("non-negative circumradius");
    let mut traversal = collection.traverse();
    for polygon in traversal.by_ref().take(count) {
        println!(
            "edges={:3} side={:.6} area={:.6} perimeter={:.6}",
            polygon.edge_count(),
            polygon.side_length(),
            polygon.area(),
            polygon.perimeter()
        );
    }

    println!("{traversal}");
    println!("length: {}", traversal.len());

    let reversed = traversal.slice(None, None, -1).expect("nonzero step");
    let edges: Vec<usize> = reversed.iter().map(|p| p.edge_count()).collect();
    println!("reversed edge counts: {edges:?}");

    match traversal.max_efficiency_edges() {
        Ok(edges) => println!("max efficiency at {edges} edges"),
        Err(err) => println!("max efficiency unavailable: {err}"),
    }
}
