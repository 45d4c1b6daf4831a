//! Unbounded family of inscribed polygons with a stepwise traversal.
//!
//! Purpose
//! - Produce the polygons with 3, 4, 5, … edges in a fixed circumcircle, one
//!   per step, recording each polygon and its area-to-perimeter efficiency
//!   ratio as it appears.
//! - Answer length, indexed/sliced access, and the max-efficiency query over
//!   everything produced so far, without re-deriving any polygon.
//!
//! Why traversal-owns-all-state
//! - The produced sequence and ratio map live on the [`Traversal`] handle,
//!   not on the collection. [`PolygonCollection`] is a pure factory, so two
//!   handles never alias each other's cursor or history.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Error;
use crate::polygon::{Polygon, MIN_EDGES};
use crate::slice;

/// Factory for traversals over the polygons inscribed in one circle.
///
/// Invariant: `circumradius >= 0` (zero is accepted though degenerate;
/// every produced polygon then has zero side length and area).
#[derive(Clone, Copy, Debug)]
pub struct PolygonCollection {
    circumradius: f64,
}

impl PolygonCollection {
    /// Construct a collection for the circle of radius `circumradius`.
    pub fn new(circumradius: f64) -> Result<Self, Error> {
        if circumradius < 0.0 {
            return Err(Error::NegativeCircumradius(circumradius));
        }
        Ok(Self { circumradius })
    }

    /// Radius of the shared circumcircle.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Start a fresh traversal. The first step produces the triangle; each
    /// handle owns its own cursor and produced history, independent of any
    /// other handle.
    pub fn traverse(&self) -> Traversal {
        Traversal {
            circumradius: self.circumradius,
            next_edges: MIN_EDGES - 1,
            produced: Vec::new(),
            ratios: BTreeMap::new(),
        }
    }
}

/// One pass over the collection: production cursor plus produced history.
///
/// Invariants:
/// - Edge counts produced are exactly 3, 4, 5, … with no skips, duplicates,
///   or reordering; the history only grows.
/// - `produced.len() == ratios.len()` at all times.
///
/// Queries on a fresh handle are total: length is zero, slices are empty,
/// single-index access fails with [`Error::IndexOutOfRange`], and the
/// max-efficiency query fails with [`Error::EmptyTraversal`].
#[derive(Clone, Debug)]
pub struct Traversal {
    circumradius: f64,
    next_edges: usize,
    produced: Vec<Polygon>,
    ratios: BTreeMap<usize, f64>,
}

impl Iterator for Traversal {
    type Item = Polygon;

    /// Produce the next polygon. Unbounded: always `Some`. The only implicit
    /// bound is numerical, as huge edge counts approach the circle itself.
    fn next(&mut self) -> Option<Polygon> {
        self.next_edges += 1;
        let polygon = Polygon::unchecked(self.next_edges, self.circumradius);
        let ratio = polygon.area() / polygon.perimeter();
        self.ratios.entry(self.next_edges).or_insert(ratio);
        self.produced.push(polygon.clone());
        Some(polygon)
    }
}

impl Traversal {
    /// Number of distinct edge counts produced so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Produced polygon at `index` in production order. Negative indices
    /// count from the end. Out of range after normalization fails; access
    /// never auto-produces.
    pub fn get(&self, index: i64) -> Result<&Polygon, Error> {
        let len = self.len();
        let normalized = if index < 0 {
            index + len as i64
        } else {
            index
        };
        if normalized < 0 || normalized >= len as i64 {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(&self.produced[normalized as usize])
    }

    /// Produced polygons selected by `(start, stop, step)` slice bounds
    /// resolved against the produced count, in slice order. Out-of-bounds
    /// slice bounds clamp rather than fail.
    pub fn slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    ) -> Result<Vec<Polygon>, Error> {
        let indices = slice::resolve(start, stop, step, self.len())?;
        Ok(indices.map(|i| self.produced[i].clone()).collect())
    }

    /// Edge count with the highest area-to-perimeter ratio produced so far.
    ///
    /// Ties are implementation-defined; in practice the ratio is strictly
    /// increasing in edge count for a fixed radius, so the answer is the
    /// largest edge count produced.
    pub fn max_efficiency_edges(&self) -> Result<usize, Error> {
        self.ratios
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&edges, _)| edges)
            .ok_or(Error::EmptyTraversal)
    }

    /// Edge count → efficiency ratio for every produced polygon.
    #[inline]
    pub fn ratios(&self) -> &BTreeMap<usize, f64> {
        &self.ratios
    }

    /// Produced polygons in production order.
    #[inline]
    pub fn produced(&self) -> &[Polygon] {
        &self.produced
    }

    /// Radius of the circumcircle shared by every produced polygon.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "regular polygons with edges 3 to {}",
            self.len() + MIN_EDGES - 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_circumradius() {
        assert_eq!(
            PolygonCollection::new(-1.0).map(|_| ()),
            Err(Error::NegativeCircumradius(-1.0))
        );
        // Zero is degenerate but accepted.
        assert!(PolygonCollection::new(0.0).is_ok());
    }

    #[test]
    fn production_starts_at_three_and_increments() {
        let collection = PolygonCollection::new(5.0).unwrap();
        let mut traversal = collection.traverse();
        for expected in 3..=12 {
            let polygon = traversal.next().unwrap();
            assert_eq!(polygon.edge_count(), expected);
            assert_eq!(polygon.circumradius(), 5.0);
        }
        assert_eq!(traversal.len(), 10);
    }

    #[test]
    fn twenty_step_sweep_matches_reference_behavior() {
        let collection = PolygonCollection::new(5.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..20 {
            traversal.next();
        }
        assert_eq!(traversal.len(), 20);
        assert_eq!(*traversal.get(0).unwrap(), Polygon::new(3, 5.0).unwrap());
        assert_eq!(
            traversal.slice(Some(0), Some(2), 1).unwrap(),
            vec![Polygon::new(3, 5.0).unwrap(), Polygon::new(4, 5.0).unwrap()]
        );
        // The 22-gon wins the efficiency query among edge counts 3..=22.
        assert_eq!(traversal.max_efficiency_edges().unwrap(), 22);
    }

    #[test]
    fn negative_index_counts_from_the_end() {
        let collection = PolygonCollection::new(5.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..20 {
            traversal.next();
        }
        assert_eq!(traversal.get(-1).unwrap().edge_count(), 22);
        assert_eq!(traversal.get(-20).unwrap().edge_count(), 3);
        assert_eq!(
            traversal.get(25).map(|_| ()),
            Err(Error::IndexOutOfRange {
                index: 25,
                len: 20
            })
        );
        assert_eq!(
            traversal.get(-21).map(|_| ()),
            Err(Error::IndexOutOfRange {
                index: -21,
                len: 20
            })
        );
        // index == len is already past the produced range.
        assert_eq!(
            traversal.get(20).map(|_| ()),
            Err(Error::IndexOutOfRange {
                index: 20,
                len: 20
            })
        );
    }

    #[test]
    fn slices_resolve_against_produced_count() {
        let collection = PolygonCollection::new(1.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..6 {
            traversal.next();
        }
        // Edges 3..=8 produced.
        let reversed = traversal.slice(None, None, -1).unwrap();
        let edges: Vec<usize> = reversed.iter().map(Polygon::edge_count).collect();
        assert_eq!(edges, vec![8, 7, 6, 5, 4, 3]);

        let window = traversal.slice(Some(2), Some(5), 1).unwrap();
        let edges: Vec<usize> = window.iter().map(Polygon::edge_count).collect();
        assert_eq!(edges, vec![5, 6, 7]);

        // Clamped, not failing.
        let clamped = traversal.slice(Some(-100), Some(100), 2).unwrap();
        let edges: Vec<usize> = clamped.iter().map(Polygon::edge_count).collect();
        assert_eq!(edges, vec![3, 5, 7]);

        assert_eq!(
            traversal.slice(None, None, 0).map(|_| ()),
            Err(Error::ZeroStep)
        );
    }

    #[test]
    fn ratio_map_tracks_every_produced_edge_count() {
        let collection = PolygonCollection::new(2.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..8 {
            traversal.next();
        }
        assert_eq!(traversal.ratios().len(), 8);
        for (edges, ratio) in traversal.ratios() {
            let p = Polygon::new(*edges, 2.0).unwrap();
            assert_eq!(*ratio, p.area() / p.perimeter());
        }
        // Strictly increasing toward the circle's ratio R/2.
        let ratios: Vec<f64> = traversal.ratios().values().copied().collect();
        for pair in ratios.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(ratios.last().unwrap() < &1.0);
    }

    #[test]
    fn fresh_traversal_queries_are_total() {
        let collection = PolygonCollection::new(5.0).unwrap();
        let traversal = collection.traverse();
        assert_eq!(traversal.len(), 0);
        assert!(traversal.is_empty());
        assert!(traversal.slice(None, None, 1).unwrap().is_empty());
        assert_eq!(
            traversal.get(0).map(|_| ()),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            traversal.max_efficiency_edges(),
            Err(Error::EmptyTraversal)
        );
    }

    #[test]
    fn traversals_are_independent() {
        let collection = PolygonCollection::new(3.0).unwrap();
        let mut first = collection.traverse();
        for _ in 0..5 {
            first.next();
        }
        let mut second = collection.traverse();
        assert_eq!(second.len(), 0);
        assert_eq!(second.next().unwrap().edge_count(), 3);
        // The first handle's history is untouched.
        assert_eq!(first.len(), 5);
        assert_eq!(first.get(-1).unwrap().edge_count(), 7);
    }

    #[test]
    fn display_reports_produced_range() {
        let collection = PolygonCollection::new(5.0).unwrap();
        let mut traversal = collection.traverse();
        for _ in 0..20 {
            traversal.next();
        }
        assert_eq!(
            traversal.to_string(),
            "regular polygons with edges 3 to 22"
        );
    }

    #[test]
    fn iterator_adapters_compose() {
        let collection = PolygonCollection::new(1.0).unwrap();
        let mut traversal = collection.traverse();
        let edges: Vec<usize> = traversal
            .by_ref()
            .take(4)
            .map(|p| p.edge_count())
            .collect();
        assert_eq!(edges, vec![3, 4, 5, 6]);
        assert_eq!(traversal.len(), 4);
    }

    #[test]
    fn zero_radius_is_degenerate_but_well_defined() {
        let collection = PolygonCollection::new(0.0).unwrap();
        let mut traversal = collection.traverse();
        let p = traversal.next().unwrap();
        assert_eq!(p.side_length(), 0.0);
        assert_eq!(p.area(), 0.0);
        assert_eq!(p.perimeter(), 0.0);
        // 0/0 ratio is NaN; the map still records the edge count.
        assert_eq!(traversal.len(), 1);
        assert!(traversal.ratios()[&3].is_nan());
    }
}
