//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! Pure functions over stack-local data: no globals, reentrant, safe to call
//! from any thread on independent segments.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A point in the normalized 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An ordered pair of endpoints. Clipping rewrites the endpoints in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }
}

/// Axis-aligned clip window. Invariant: `xmin < xmax` and `ymin < ymax`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl ClipRect {
    /// # Panics
    /// Panics in debug builds if the bounds are not strictly ordered
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        debug_assert!(
            xmin < xmax && ymin < ymax,
            "ClipRect: bounds must be strictly ordered ({}, {}, {}, {})",
            xmin,
            ymin,
            xmax,
            ymax
        );
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.xmin < self.xmax && self.ymin < self.ymax
    }
}

/// 4-bit encoding of which clip boundaries a point violates.
/// At most one of LEFT/RIGHT and one of BOTTOM/TOP can be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCode(u8);

impl RegionCode {
    pub const INSIDE: RegionCode = RegionCode(0);
    pub const LEFT: RegionCode = RegionCode(0b0001);
    pub const RIGHT: RegionCode = RegionCode(0b0010);
    pub const BOTTOM: RegionCode = RegionCode(0b0100);
    pub const TOP: RegionCode = RegionCode(0b1000);

    /// True if the point lies within or on the rectangle
    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if any of `other`'s bits are set in `self`
    #[inline]
    pub fn contains(self, other: RegionCode) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for RegionCode {
    type Output = RegionCode;
    #[inline]
    fn bitor(self, rhs: RegionCode) -> RegionCode {
        RegionCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegionCode {
    #[inline]
    fn bitor_assign(&mut self, rhs: RegionCode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegionCode {
    type Output = RegionCode;
    #[inline]
    fn bitand(self, rhs: RegionCode) -> RegionCode {
        RegionCode(self.0 & rhs.0)
    }
}

/// Classify a point against the clip window.
///
/// The horizontal test is an if/else-if: a point is never both left and right
/// of the window. Same for the vertical axis.
#[inline]
pub fn region_code(p: Point, rect: &ClipRect) -> RegionCode {
    let mut code = RegionCode::INSIDE;
    if p.x < rect.xmin {
        code |= RegionCode::LEFT;
    } else if p.x > rect.xmax {
        code |= RegionCode::RIGHT;
    }
    if p.y < rect.ymin {
        code |= RegionCode::BOTTOM;
    } else if p.y > rect.ymax {
        code |= RegionCode::TOP;
    }
    code
}

// Converges in at most 4 corrections for finite input (each correction clears
// one boundary bit for good). The cap only matters for NaN/infinite coordinates.
const MAX_ITERATIONS: u32 = 16;

/// Clip a segment to the window, rewriting its endpoints in place.
///
/// Returns `true` if any portion survives; the segment then holds the clipped
/// sub-segment. Returns `false` if the segment lies entirely outside, in which
/// case the endpoint values are unspecified and must not be used.
///
/// Boundary corrections are applied in fixed priority order TOP, BOTTOM,
/// RIGHT, LEFT. When an endpoint violates two boundaries at once (a corner
/// region), only the higher-priority axis is corrected per iteration; the
/// recomputed region code picks up the remaining violation on the next pass.
/// When both endpoints are outside, the first endpoint is corrected first.
pub fn clip_segment(seg: &mut Segment, rect: &ClipRect) -> bool {
    let mut code1 = region_code(seg.p1, rect);
    let mut code2 = region_code(seg.p2, rect);

    for _ in 0..MAX_ITERATIONS {
        if code1.is_inside() && code2.is_inside() {
            // Both endpoints inside
            return true;
        }
        if !(code1 & code2).is_inside() {
            // Both endpoints share an outside half-plane
            return false;
        }

        // At least one endpoint is outside; prefer the first
        let code_out = if !code1.is_inside() { code1 } else { code2 };

        let Point { x: x1, y: y1 } = seg.p1;
        let Point { x: x2, y: y2 } = seg.p2;

        // A shared TOP/BOTTOM bit trivially rejects above, so when TOP or
        // BOTTOM is selected the other endpoint is on the near side of that
        // boundary and y2 - y1 is nonzero. Same for LEFT/RIGHT and x2 - x1.
        let p = if code_out.contains(RegionCode::TOP) {
            Point::new(x1 + (x2 - x1) * (rect.ymax - y1) / (y2 - y1), rect.ymax)
        } else if code_out.contains(RegionCode::BOTTOM) {
            Point::new(x1 + (x2 - x1) * (rect.ymin - y1) / (y2 - y1), rect.ymin)
        } else if code_out.contains(RegionCode::RIGHT) {
            Point::new(rect.xmax, y1 + (y2 - y1) * (rect.xmax - x1) / (x2 - x1))
        } else {
            Point::new(rect.xmin, y1 + (y2 - y1) * (rect.xmin - x1) / (x2 - x1))
        };

        if code_out == code1 {
            seg.p1 = p;
            code1 = region_code(seg.p1, rect);
        } else {
            seg.p2 = p;
            code2 = region_code(seg.p2, rect);
        }
    }

    // Iteration cap exceeded (non-finite input) - reject
    false
}
