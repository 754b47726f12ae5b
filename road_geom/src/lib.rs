//! Road reference-line geometry: Euler spiral (clothoid) segments with
//! point evaluation and analytic bounding boxes.
//!
//! A [`Spiral`] maps road arclength to 2D positions through a canonical
//! Fresnel-integral spiral, and finds its axis-aligned bounding box from
//! closed-form extrema of the quadratic heading instead of sampling.
//!
//! ```
//! use road_geom::Spiral;
//!
//! let spiral = Spiral::create(0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.1)?;
//! let p = spiral.get_point(5.0, 0.0);
//! assert!(spiral.get_bbox().contains_point(p));
//! # Ok::<(), road_geom::GeometryError>(())
//! ```

// Core evaluation only needs core + libm; the std feature adds the
// Vec sampling helper and the demo binary.
#![no_std]

pub mod bbox;
pub mod error;
pub mod fresnel;
pub mod geometry;
pub mod point;
pub mod spiral;

pub use bbox::Box2D;
pub use error::GeometryError;
pub use geometry::{GeometryType, RoadGeometry};
pub use point::Position;
pub use spiral::Spiral;
