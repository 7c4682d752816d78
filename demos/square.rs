//! Inspects a square, then breaks it by dragging one corner across the
//! opposite edge.
//!
//! Run with: cargo run --example square

use polygonum::{DynamicPolygon, Shape, Vertex2};

fn report(shape: &dyn Shape<f64>) {
    println!("Coordinates:");
    for i in 0..shape.vertex_count() {
        match shape.vertex(i) {
            Ok(vertex) => println!("{vertex}"),
            Err(err) => println!("{err}"),
        }
    }
    println!("Convex: {}", if shape.is_convex() { "yes" } else { "no" });
    println!("Perimeter: {}", shape.perimeter());
    match shape.area(true) {
        Ok(area) => println!("Area: {area}"),
        Err(err) => println!("{err}"),
    }
}

fn main() {
    let mut square = DynamicPolygon::from_vec(vec![
        Vertex2::new(-1.0, -1.0),
        Vertex2::new(1.0, -1.0),
        Vertex2::new(1.0, 1.0),
        Vertex2::new(-1.0, 1.0),
    ]);

    report(&square);
    println!();
    println!();

    // Deliberately make the polygon degenerate
    if let Err(err) = square.set_vertex(0, Vertex2::new(0.0, 17.0)) {
        println!("{err}");
        return;
    }
    report(&square);
}
