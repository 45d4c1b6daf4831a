//! Regular convex polygon with memoized derived geometry.
//!
//! Purpose
//! - Hold the two defining attributes (edge count, circumradius) and compute
//!   every derived quantity on first access, caching it for the lifetime of
//!   the instance.
//!
//! Assumptions and conventions
//! - `edges >= 3` is enforced at construction; there is no such thing as a
//!   two-sided polygon here.
//! - The circumradius is stored as-is. Callers supply a positive value for
//!   physically meaningful results; non-positive values are not rejected at
//!   this level (the collection validates its own radius).
//! - Fields are private and there are no mutators, so cached values can
//!   never go stale.

use std::cell::OnceCell;
use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::error::Error;

/// Fewest edges a regular polygon can have.
pub const MIN_EDGES: usize = 3;

/// Regular convex polygon inscribed in a circle of fixed circumradius.
///
/// Invariants:
/// - `edges >= 3` (checked by [`Polygon::new`]).
/// - Derived properties are computed once and returned unchanged on every
///   subsequent access.
///
/// Equality compares exactly the edge count and circumradius; the derived
/// values agree whenever the inputs do. The one ordering relation,
/// [`Polygon::exceeds`], compares edge counts only.
#[derive(Clone, Debug)]
pub struct Polygon {
    edges: usize,
    circumradius: f64,
    interior_angle: OnceCell<f64>,
    side_length: OnceCell<f64>,
    apothem: OnceCell<f64>,
    area: OnceCell<f64>,
    perimeter: OnceCell<f64>,
}

impl Polygon {
    /// Construct a regular polygon with `edges` edges inscribed in a circle
    /// of radius `circumradius`.
    pub fn new(edges: usize, circumradius: f64) -> Result<Self, Error> {
        if edges < MIN_EDGES {
            return Err(Error::TooFewEdges(edges));
        }
        Ok(Self::unchecked(edges, circumradius))
    }

    /// Caller upholds `edges >= MIN_EDGES`.
    pub(crate) fn unchecked(edges: usize, circumradius: f64) -> Self {
        Self {
            edges,
            circumradius,
            interior_angle: OnceCell::new(),
            side_length: OnceCell::new(),
            apothem: OnceCell::new(),
            area: OnceCell::new(),
            perimeter: OnceCell::new(),
        }
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of vertices (equal to the edge count for a regular polygon).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.edges
    }

    /// Radius of the circumscribed circle.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Interior angle in degrees: `(n - 2) * 180 / n`.
    pub fn interior_angle(&self) -> f64 {
        *self
            .interior_angle
            .get_or_init(|| (self.edges as f64 - 2.0) * 180.0 / self.edges as f64)
    }

    /// Length of each side: `2 R sin(pi / n)`.
    pub fn side_length(&self) -> f64 {
        *self
            .side_length
            .get_or_init(|| 2.0 * self.circumradius * (PI / self.edges as f64).sin())
    }

    /// Perpendicular distance from the center to a side: `R cos(pi / n)`.
    pub fn apothem(&self) -> f64 {
        *self
            .apothem
            .get_or_init(|| self.circumradius * (PI / self.edges as f64).cos())
    }

    /// Enclosed area: `n / 2 * side * apothem`.
    pub fn area(&self) -> f64 {
        *self
            .area
            .get_or_init(|| self.edges as f64 / 2.0 * self.side_length() * self.apothem())
    }

    /// Perimeter: `n * side`.
    pub fn perimeter(&self) -> f64 {
        *self
            .perimeter
            .get_or_init(|| self.edges as f64 * self.side_length())
    }

    /// Vertex coordinates on the circumcircle, counterclockwise starting at
    /// angle 0.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let n = self.edges as f64;
        (0..self.edges)
            .map(|k| {
                let theta = 2.0 * PI * (k as f64) / n;
                Vector2::new(
                    self.circumradius * theta.cos(),
                    self.circumradius * theta.sin(),
                )
            })
            .collect()
    }

    /// True iff `self` has strictly more edges than `other`.
    ///
    /// The circumradius is irrelevant here: a 1000-gon in a tiny circle
    /// exceeds a triangle in a huge one. This mirrors the domain's single
    /// greater-than relation; no further ordering is defined (and a
    /// `PartialOrd` on edge counts alone would disagree with the two-field
    /// equality, so it stays a named method).
    #[inline]
    pub fn exceeds(&self, other: &Polygon) -> bool {
        self.edges > other.edges
    }
}

impl PartialEq for Polygon {
    /// Equal iff edge counts and circumradii match exactly. Caches are
    /// derived state and do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.circumradius == other.circumradius
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon(edges={}, circumradius={})",
            self.edges, self.circumradius
        )
    }
}
