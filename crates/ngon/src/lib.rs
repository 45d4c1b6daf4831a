//! Regular convex polygons inscribed in a circle.
//!
//! Purpose
//! - Compute the derived geometry of a regular n-gon (interior angle, side
//!   length, apothem, area, perimeter) lazily, caching each value on first
//!   access for the lifetime of the instance.
//! - Produce the open-ended family of inscribed polygons (3 edges upward) as
//!   an unbounded traversal with indexing, slicing, and an area-to-perimeter
//!   efficiency query layered over everything produced so far.
//!
//! Why this design (short)
//! - `Polygon` is immutable after construction, so per-field `OnceCell`
//!   caches can never go stale.
//! - A `Traversal` owns its production cursor and produced history; starting
//!   a second traversal via [`PolygonCollection::traverse`] is independent of
//!   the first instead of aliasing shared state.
//! - Everything is single-threaded, in-memory, and O(1) or O(produced count).

pub mod collection;
pub mod error;
pub mod polygon;
pub mod slice;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collection::{PolygonCollection, Traversal};
pub use error::Error;
pub use polygon::Polygon;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collection::{PolygonCollection, Traversal};
    pub use crate::error::Error;
    pub use crate::polygon::Polygon;
    pub use nalgebra::Vector2 as Vec2;
}
