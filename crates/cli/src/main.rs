use anyhow::Result;
use clap::{Parser, Subcommand};
use ngon::{Polygon, PolygonCollection};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inscribed-polygon demonstration driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Construct one polygon and print every derived property
    Inspect {
        #[arg(long)]
        edges: usize,
        #[arg(long, default_value_t = 1.0)]
        circumradius: f64,
        /// Also print the vertex coordinates on the circumcircle
        #[arg(long, default_value_t = false)]
        vertices: bool,
    },
    /// Step the polygon family and report the produced range
    Sweep {
        #[arg(long, default_value_t = 5.0)]
        circumradius: f64,
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// Write a JSON report of the sweep to this path
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Inspect {
            edges,
            circumradius,
            vertices,
        } => inspect(edges, circumradius, vertices),
        Action::Sweep {
            circumradius,
            count,
            out,
        } => sweep(circumradius, count, out),
    }
}

fn inspect(edges: usize, circumradius: f64, vertices: bool) -> Result<()> {
    tracing::info!(edges, circumradius, "inspect");
    let polygon = Polygon::new(edges, circumradius)?;
    println!("{polygon}");
    println!("vertices:       {}", polygon.vertex_count());
    println!("edges:          {}", polygon.edge_count());
    println!("circumradius:   {}", polygon.circumradius());
    println!("interior angle: {}", polygon.interior_angle());
    println!("side length:    {}", polygon.side_length());
    println!("apothem:        {}", polygon.apothem());
    println!("area:           {}", polygon.area());
    println!("perimeter:      {}", polygon.perimeter());
    if vertices {
        for (k, v) in polygon.vertices().iter().enumerate() {
            println!("vertex {k}: ({:.6}, {:.6})", v.x, v.y);
        }
    }
    Ok(())
}

fn sweep(circumradius: f64, count: usize, out: Option<String>) -> Result<()> {
    tracing::info!(circumradius, count, out = ?out, "sweep");
    let collection = PolygonCollection::new(circumradius)?;
    let mut traversal = collection.traverse();
    for polygon in traversal.by_ref().take(count) {
        println!("edges: {}", polygon.edge_count());
    }

    println!("{traversal}");
    println!("length: {}", traversal.len());
    let best = traversal.max_efficiency_edges()?;
    println!("max efficiency at {best} edges");

    if let Some(path) = out {
        let doc = report::SweepReport::from_traversal(&traversal)?;
        let written = report::write_report(&path, &doc)?;
        tracing::info!(path = %written.display(), "report written");
    }
    Ok(())
}
