//! Shared contract for road reference-line geometry variants.

use serde::{Deserialize, Serialize};

use crate::bbox::Box2D;
use crate::point::Position;

/// The closed set of reference-line geometry kinds a road description can
/// carry. Only the Euler spiral lives in this crate; lines, arcs and the
/// polynomial variants belong to the surrounding road-network code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Line,
    Spiral,
    Arc,
    Poly3,
    ParamPoly3,
}

/// Two-operation contract shared by every reference-line geometry variant.
///
/// Implementations are pure: both queries read an immutable descriptor and
/// keep no state between calls.
pub trait RoadGeometry {
    fn geometry_type(&self) -> GeometryType;

    /// Position at arclength `s` and lateral offset `t`.
    fn get_point(&self, s: f64, t: f64) -> Position;

    /// Axis-aligned bounding box of the centerline.
    fn get_bbox(&self) -> Box2D;
}
