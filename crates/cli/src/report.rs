use anyhow::{Context, Result};
use ngon::Traversal;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One produced polygon, flattened for the JSON report.
#[derive(Serialize)]
pub struct PolygonRecord {
    pub edges: usize,
    pub circumradius: f64,
    pub interior_angle: f64,
    pub side_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
    pub efficiency: f64,
}

/// Machine-readable summary of one sweep.
#[derive(Serialize)]
pub struct SweepReport {
    pub circumradius: f64,
    pub count: usize,
    pub max_efficiency_edges: usize,
    pub polygons: Vec<PolygonRecord>,
}

impl SweepReport {
    /// Flatten a traversal's produced history. Requires at least one step.
    pub fn from_traversal(traversal: &Traversal) -> Result<Self> {
        let max_efficiency_edges = traversal.max_efficiency_edges()?;
        let polygons = traversal
            .produced()
            .iter()
            .map(|p| PolygonRecord {
                edges: p.edge_count(),
                circumradius: p.circumradius(),
                interior_angle: p.interior_angle(),
                side_length: p.side_length(),
                apothem: p.apothem(),
                area: p.area(),
                perimeter: p.perimeter(),
                efficiency: p.area() / p.perimeter(),
            })
            .collect();
        Ok(Self {
            circumradius: traversal.circumradius(),
            count: traversal.len(),
            max_efficiency_edges,
            polygons,
        })
    }
}

/// Write the report as pretty-printed JSON, creating parent directories.
pub fn write_report<P: AsRef<Path>>(path: P, report: &SweepReport) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngon::PolygonCollection;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample_traversal(steps: usize) -> Traversal {
        let collection = PolygonCollection::new(5.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..steps {
            traversal.next();
        }
        traversal
    }

    #[test]
    fn report_flattens_produced_history() {
        let report = SweepReport::from_traversal(&sample_traversal(20)).unwrap();
        assert_eq!(report.count, 20);
        assert_eq!(report.max_efficiency_edges, 22);
        assert_eq!(report.polygons.len(), 20);
        assert_eq!(report.polygons[0].edges, 3);
        assert_eq!(report.polygons[19].edges, 22);
    }

    #[test]
    fn report_requires_a_stepped_traversal() {
        assert!(SweepReport::from_traversal(&sample_traversal(0)).is_err());
    }

    #[test]
    fn write_report_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sweep/report.json");
        let report = SweepReport::from_traversal(&sample_traversal(5)).unwrap();
        let written = write_report(&path, &report).unwrap();
        assert!(written.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(written).unwrap()).unwrap();
        assert_eq!(parsed["count"], 5);
        assert_eq!(parsed["polygons"][0]["edges"], 3);
    }
}
