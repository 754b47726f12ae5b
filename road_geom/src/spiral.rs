//! Euler spiral (clothoid) road-geometry segment.

use core::f64::consts::{FRAC_PI_2, PI};
use core::ops::RangeInclusive;

use libm::{ceil, cos, floor, sin, sqrt};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bbox::Box2D;
use crate::error::GeometryError;
use crate::fresnel::normalized_spiral;
use crate::geometry::{GeometryType, RoadGeometry};
use crate::point::Position;

#[cfg(feature = "std")]
extern crate alloc;
#[cfg(feature = "std")]
use alloc::vec::Vec;

/// Curvature profile of a segment, fixed at construction.
///
/// Splitting the degenerate profile off as its own variant keeps every
/// division by `c_dot` (and by `curv` in the arc case) out of reach when the
/// divisor would be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CurvatureProfile {
    /// `curv_start == curv_end`: a straight line when zero, a circular arc
    /// otherwise.
    Constant { curv: f64 },
    /// Curvature varies linearly with nonzero rate `c_dot`. `s_start` and
    /// `s_end` are the canonical-spiral arclengths whose curvature equals
    /// the segment's boundary curvatures.
    Linear { c_dot: f64, s_start: f64, s_end: f64 },
}

/// The four closed-form root families for axis-aligned extrema of the
/// centerline: x-extrema where the heading crosses `pi/2 + n pi`, y-extrema
/// where it crosses `n pi`, each with the two branches of the quadratic
/// formula.
#[derive(Debug, Clone, Copy)]
enum ExtremaBranch {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
}

const EXTREMA_BRANCHES: [ExtremaBranch; 4] = [
    ExtremaBranch::XPlus,
    ExtremaBranch::XMinus,
    ExtremaBranch::YPlus,
    ExtremaBranch::YMinus,
];

impl ExtremaBranch {
    /// Heading offset of the extremum family: pi/2 for x, 0 for y.
    fn axis_offset(self) -> f64 {
        match self {
            ExtremaBranch::XPlus | ExtremaBranch::XMinus => FRAC_PI_2,
            ExtremaBranch::YPlus | ExtremaBranch::YMinus => 0.0,
        }
    }

    /// Sign of the square root in the quadratic formula.
    fn sign(self) -> f64 {
        match self {
            ExtremaBranch::XPlus | ExtremaBranch::YPlus => 1.0,
            ExtremaBranch::XMinus | ExtremaBranch::YMinus => -1.0,
        }
    }
}

/// Euler spiral road-geometry segment.
///
/// An immutable descriptor of one reference-line piece: the pose at
/// arclength `s0` (`xy0`, `hdg0`), the arclength extent `length`, and the
/// signed curvatures at both ends, between which curvature varies linearly.
/// Both queries are pure reads, so descriptors can be shared freely across
/// threads.
///
/// Serializes as the seven raw parameters; deserializing re-runs the same
/// validation as [`Spiral::create`] and rederives the curvature profile, so
/// no construction path skips it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpiralParams", into = "SpiralParams")]
pub struct Spiral {
    s0: f64,
    xy0: Position,
    hdg0: f64,
    length: f64,
    curv_start: f64,
    curv_end: f64,
    profile: CurvatureProfile,
}

/// Wire form of [`Spiral`]: the raw constructor parameters, nothing derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SpiralParams {
    s0: f64,
    x0: f64,
    y0: f64,
    hdg0: f64,
    length: f64,
    curv_start: f64,
    curv_end: f64,
}

impl From<Spiral> for SpiralParams {
    fn from(spiral: Spiral) -> Self {
        Self {
            s0: spiral.s0,
            x0: spiral.xy0.x,
            y0: spiral.xy0.y,
            hdg0: spiral.hdg0,
            length: spiral.length,
            curv_start: spiral.curv_start,
            curv_end: spiral.curv_end,
        }
    }
}

impl TryFrom<SpiralParams> for Spiral {
    type Error = GeometryError;

    fn try_from(params: SpiralParams) -> Result<Self, Self::Error> {
        Spiral::create(
            params.s0,
            params.x0,
            params.y0,
            params.hdg0,
            params.length,
            params.curv_start,
            params.curv_end,
        )
    }
}

impl Spiral {
    /// Validates the descriptor and derives its curvature profile.
    ///
    /// Fails when `length <= 0` or any parameter is non-finite; evaluation
    /// is infallible after this point.
    pub fn create(
        s0: f64,
        x0: f64,
        y0: f64,
        hdg0: f64,
        length: f64,
        curv_start: f64,
        curv_end: f64,
    ) -> Result<Self, GeometryError> {
        let params = [
            ("s0", s0),
            ("x0", x0),
            ("y0", y0),
            ("hdg0", hdg0),
            ("length", length),
            ("curv_start", curv_start),
            ("curv_end", curv_end),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteParam { name, value });
            }
        }
        if length <= 0.0 {
            return Err(GeometryError::NonPositiveLength(length));
        }

        let profile = if curv_start == curv_end {
            CurvatureProfile::Constant { curv: curv_start }
        } else {
            let c_dot = (curv_end - curv_start) / length;
            CurvatureProfile::Linear {
                c_dot,
                s_start: curv_start / c_dot,
                s_end: curv_end / c_dot,
            }
        };

        Ok(Self {
            s0,
            xy0: Position::new(x0, y0),
            hdg0,
            length,
            curv_start,
            curv_end,
            profile,
        })
    }

    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn xy0(&self) -> Position {
        self.xy0
    }

    pub fn hdg0(&self) -> f64 {
        self.hdg0
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn curv_start(&self) -> f64 {
        self.curv_start
    }

    pub fn curv_end(&self) -> f64 {
        self.curv_end
    }

    /// Curvature rate; zero for the constant-curvature profile.
    pub fn c_dot(&self) -> f64 {
        match self.profile {
            CurvatureProfile::Constant { .. } => 0.0,
            CurvatureProfile::Linear { c_dot, .. } => c_dot,
        }
    }

    /// Canonical-spiral arclength whose curvature equals `curv_start`, or
    /// `None` when the curvature is constant and the embedding is
    /// undefined. Kept for downstream consumers; evaluation does not read
    /// it beyond the stored profile.
    pub fn s_start(&self) -> Option<f64> {
        match self.profile {
            CurvatureProfile::Constant { .. } => None,
            CurvatureProfile::Linear { s_start, .. } => Some(s_start),
        }
    }

    /// Canonical-spiral arclength whose curvature equals `curv_end`; see
    /// [`Self::s_start`].
    pub fn s_end(&self) -> Option<f64> {
        match self.profile {
            CurvatureProfile::Constant { .. } => None,
            CurvatureProfile::Linear { s_end, .. } => Some(s_end),
        }
    }

    /// Heading (radians) of the reference line at arclength `s`.
    pub fn get_hdg(&self, s: f64) -> f64 {
        let u = s - self.s0;
        self.hdg0 + (self.curv_start + 0.5 * self.c_dot() * u) * u
    }

    /// Signed curvature at arclength `s`, linear between the endpoint
    /// curvatures.
    pub fn get_curvature(&self, s: f64) -> f64 {
        self.curv_start + self.c_dot() * (s - self.s0)
    }

    /// Position at arclength `s` and lateral offset `t`, the offset
    /// measured perpendicular to the local heading, positive to the left
    /// of the travel direction.
    ///
    /// `s` is nominally within `[s0, s0 + length]`; values outside
    /// extrapolate the same formulas smoothly rather than erroring.
    pub fn get_point(&self, s: f64, t: f64) -> Position {
        let u = s - self.s0;
        match self.profile {
            CurvatureProfile::Constant { curv } => {
                let heading = self.hdg0 + curv * u;
                let (cx, cy) = if curv == 0.0 {
                    (
                        self.xy0.x + u * cos(self.hdg0),
                        self.xy0.y + u * sin(self.hdg0),
                    )
                } else {
                    // circular arc of radius 1/curv around the center a
                    // quarter turn left of the start pose
                    (
                        self.xy0.x + (sin(heading) - sin(self.hdg0)) / curv,
                        self.xy0.y - (cos(heading) - cos(self.hdg0)) / curv,
                    )
                };
                Position::new(cx - t * sin(heading), cy + t * cos(heading))
            }
            CurvatureProfile::Linear { c_dot, s_start, .. } => {
                // canonical-spiral state at the segment start and at s
                let (x0_spiral, y0_spiral, a0_spiral) = normalized_spiral(s_start, c_dot);
                let (xs_spiral, ys_spiral, as_spiral) = normalized_spiral(u + s_start, c_dot);

                // lateral offset, perpendicular to the local spiral heading
                let t_x = t * cos(as_spiral + FRAC_PI_2);
                let t_y = t * sin(as_spiral + FRAC_PI_2);

                // rotate the canonical-frame delta onto the segment's start
                // heading, then translate to its origin
                let hdg = self.hdg0 - a0_spiral;
                let dx = xs_spiral - x0_spiral + t_x;
                let dy = ys_spiral - y0_spiral + t_y;
                Position::new(
                    self.xy0.x + dx * cos(hdg) - dy * sin(hdg),
                    self.xy0.y + dx * sin(hdg) + dy * cos(hdg),
                )
            }
        }
    }

    /// Centerline sampled uniformly in arclength, endpoints included.
    pub fn get_points<const NUM: usize>(&self) -> [[f64; 2]; NUM] {
        let mut xys = [[0.0; 2]; NUM];
        let step = if NUM > 1 {
            self.length / (NUM - 1) as f64
        } else {
            0.0
        };
        for (i, xy) in xys.iter_mut().enumerate() {
            let s = self.s0 + i as f64 * step;
            *xy = self.get_point(s, 0.0).as_array();
        }
        xys
    }

    /// Centerline sampled uniformly in arclength, endpoints included; at
    /// least the two endpoints are returned.
    #[cfg(feature = "std")]
    pub fn get_points_num(&self, num: usize) -> Vec<[f64; 2]> {
        let num = num.max(2);
        let step = self.length / (num - 1) as f64;
        (0..num)
            .map(|i| self.get_point(self.s0 + i as f64 * step, 0.0).as_array())
            .collect()
    }

    /// Tight axis-aligned bounding box of the centerline over
    /// `[s0, s0 + length]`.
    ///
    /// Extrema arclengths come from closed-form roots of the quadratic
    /// heading rather than from sampling: x-extrema lie where the heading
    /// crosses `pi/2 + n pi`, y-extrema where it crosses `n pi`. Candidates
    /// with no real solution or outside the segment are discarded, and the
    /// survivors are folded together with the two endpoints.
    pub fn get_bbox(&self) -> Box2D {
        let s_hi = self.s0 + self.length;
        let mut bbox = Box2D::from_point(self.get_point(self.s0, 0.0))
            .expand_to_include(self.get_point(s_hi, 0.0));

        let (sweep_lo, sweep_hi) = self.heading_sweep();
        let mut extrema = 0usize;

        match self.profile {
            CurvatureProfile::Constant { curv } => {
                // Straight line: the endpoints already bound the box. Arc:
                // the heading is linear, one root per crossed target.
                if curv != 0.0 {
                    for offset in [FRAC_PI_2, 0.0] {
                        for n in Self::target_range(offset, sweep_lo, sweep_hi) {
                            let target = offset + n as f64 * PI;
                            let s = self.s0 + (target - self.hdg0) / curv;
                            if s >= self.s0 && s <= s_hi {
                                bbox = bbox.expand_to_include(self.get_point(s, 0.0));
                                extrema += 1;
                            }
                        }
                    }
                }
            }
            CurvatureProfile::Linear { c_dot, .. } => {
                for branch in EXTREMA_BRANCHES {
                    for n in Self::target_range(branch.axis_offset(), sweep_lo, sweep_hi) {
                        let s = self.extremum_arclength(branch, n, c_dot);
                        // a NaN from a negative discriminant fails here too
                        if s >= self.s0 && s <= s_hi {
                            bbox = bbox.expand_to_include(self.get_point(s, 0.0));
                            extrema += 1;
                        }
                    }
                }
            }
        }

        debug!(
            "spiral bbox at s0={}: {extrema} extrema, x [{}, {}], y [{}, {}]",
            self.s0, bbox.min.x, bbox.max.x, bbox.min.y, bbox.max.y
        );
        bbox
    }

    // Road arclength where the heading reaches `axis_offset + n pi`, on one
    // branch of the quadratic
    //   hdg0 + curv_start * u + c_dot * u^2 / 2 = target.
    // A negative discriminant comes back as NaN and fails the caller's
    // range check.
    fn extremum_arclength(&self, branch: ExtremaBranch, n: i64, c_dot: f64) -> f64 {
        let target = branch.axis_offset() + n as f64 * PI;
        let disc = self.curv_start * self.curv_start + 2.0 * c_dot * (target - self.hdg0);
        self.s0 + (branch.sign() * sqrt(disc) - self.curv_start) / c_dot
    }

    // Smallest and largest heading reached over the segment. The heading is
    // quadratic in arclength, so the sweep is bounded by the endpoint
    // headings plus the interior vertex where the curvature crosses zero.
    fn heading_sweep(&self) -> (f64, f64) {
        let a_start = self.hdg0;
        let a_end = self.get_hdg(self.s0 + self.length);
        let mut lo = a_start.min(a_end);
        let mut hi = a_start.max(a_end);
        if let CurvatureProfile::Linear { c_dot, .. } = self.profile {
            let u_vertex = -self.curv_start / c_dot;
            if u_vertex > 0.0 && u_vertex < self.length {
                let a_vertex = self.get_hdg(self.s0 + u_vertex);
                lo = lo.min(a_vertex);
                hi = hi.max(a_vertex);
            }
        }
        (lo, hi)
    }

    // Integer multiples n with `offset + n pi` inside the swept heading
    // range, expanded by one on each side to cover boundary rounding. The
    // float cast saturates for headings beyond i64 range; the expansion
    // must not wrap past it.
    fn target_range(offset: f64, sweep_lo: f64, sweep_hi: f64) -> RangeInclusive<i64> {
        let n_lo = (floor((sweep_lo - offset) / PI) as i64).saturating_sub(1);
        let n_hi = (ceil((sweep_hi - offset) / PI) as i64).saturating_add(1);
        n_lo..=n_hi
    }
}

impl RoadGeometry for Spiral {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Spiral
    }

    fn get_point(&self, s: f64, t: f64) -> Position {
        Spiral::get_point(self, s, t)
    }

    fn get_bbox(&self) -> Box2D {
        Spiral::get_bbox(self)
    }
}
