use bytemuck::{Pod, Zeroable};

use super::{Point, Size};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Two sentinel values are distinguished by field pattern rather than a tag,
/// so callers (the layer tree, clip computation) can compare against
/// [`Rect::NULL`] and [`Rect::INFINITE`] by exact value:
///
/// - [`Rect::NULL`]: origin `(+inf, +inf)`, size `(0, 0)` — "no area".
/// - [`Rect::INFINITE`]: all four scalars `+inf` — the unbounded plane.
///
/// Stored width/height may be negative; every operation standardizes its
/// inputs first, so `Rect::new(10.0, 10.0, -4.0, -4.0)` and
/// `Rect::new(6.0, 6.0, 4.0, 4.0)` describe the same region.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

/// Names the side of a rectangle that [`Rect::divide`] carves the slice from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RectEdge {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Sentinel for "no area / empty result".
    pub const NULL: Self = Self::new(f32::INFINITY, f32::INFINITY, 0.0, 0.0);

    /// Sentinel for the entire unbounded plane.
    pub const INFINITE: Self =
        Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY, f32::INFINITY);

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Exact structural comparison against [`Rect::NULL`].
    #[inline]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Exact structural comparison against [`Rect::INFINITE`].
    #[inline]
    pub fn is_infinite(self) -> bool {
        self == Self::INFINITE
    }

    /// True for the null rect and for rects with no positive area.
    #[inline]
    pub fn is_empty(self) -> bool {
        let r = self.standardize();
        r.size.width <= 0.0 || r.size.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Canonicalizes the rect so width/height are non-negative by flipping
    /// negative extents into the origin. Idempotent.
    #[inline]
    pub fn standardize(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.width;
        let mut h = self.size.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Self::new(x, y, w, h)
    }

    // ── edge accessors (standardized) ─────────────────────────────────────

    #[inline]
    pub fn min_x(self) -> f32 {
        self.standardize().origin.x
    }

    #[inline]
    pub fn mid_x(self) -> f32 {
        let r = self.standardize();
        r.origin.x + r.size.width / 2.0
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        let r = self.standardize();
        r.origin.x + r.size.width
    }

    #[inline]
    pub fn min_y(self) -> f32 {
        self.standardize().origin.y
    }

    #[inline]
    pub fn mid_y(self) -> f32 {
        let r = self.standardize();
        r.origin.y + r.size.height / 2.0
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        let r = self.standardize();
        r.origin.y + r.size.height
    }

    /// Standardized (non-negative) width.
    #[inline]
    pub fn width(self) -> f32 {
        self.size.width.abs()
    }

    /// Standardized (non-negative) height.
    #[inline]
    pub fn height(self) -> f32 {
        self.size.height.abs()
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let r = self.standardize();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.width)
            && p.y < (r.origin.y + r.size.height)
    }

    /// Intersection of two rects.
    ///
    /// Returns [`Rect::NULL`] when the rects do not overlap with positive
    /// area on both axes. Rects that merely touch along an edge do NOT
    /// intersect — the overlap must be strictly positive, never zero-width.
    pub fn intersection(self, other: Rect) -> Rect {
        let a = self.standardize();
        let b = other.standardize();

        let x1 = a.origin.x.max(b.origin.x);
        let y1 = a.origin.y.max(b.origin.y);
        let x2 = (a.origin.x + a.size.width).min(b.origin.x + b.size.width);
        let y2 = (a.origin.y + a.size.height).min(b.origin.y + b.size.height);

        let w = x2 - x1;
        let h = y2 - y1;

        if w <= 0.0 || h <= 0.0 {
            Self::NULL
        } else {
            Self::new(x1, y1, w, h)
        }
    }

    /// Smallest rect containing both inputs.
    ///
    /// An infinite operand short-circuits to the *other* operand, returned
    /// unchanged (not standardized) — callers compare clip results against
    /// the exact rects they passed in, so this asymmetry is part of the
    /// contract. A null operand yields the other operand standardized.
    pub fn union(self, other: Rect) -> Rect {
        if self.is_infinite() {
            return other;
        }
        if other.is_infinite() {
            return self;
        }
        if self.is_null() {
            return other.standardize();
        }
        if other.is_null() {
            return self.standardize();
        }

        let a = self.standardize();
        let b = other.standardize();

        let x1 = a.origin.x.min(b.origin.x);
        let y1 = a.origin.y.min(b.origin.y);
        let x2 = (a.origin.x + a.size.width).max(b.origin.x + b.size.width);
        let y2 = (a.origin.y + a.size.height).max(b.origin.y + b.size.height);

        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Splits the rect into `(slice, remainder)` by carving a strip of
    /// thickness `amount` off the side named by `edge`.
    ///
    /// `amount` is clamped to `[0, extent]` on the divided axis; when it
    /// consumes the whole extent, `slice` is the entire standardized rect and
    /// the remainder's extent on that axis collapses to zero. A null input
    /// yields `(NULL, NULL)`.
    pub fn divide(self, amount: f32, edge: RectEdge) -> (Rect, Rect) {
        if self.is_null() {
            return (Self::NULL, Self::NULL);
        }

        // Comparison-form clamps so NaN amounts propagate instead of being
        // silently sanitized.
        let amount = if amount < 0.0 { 0.0 } else { amount };
        let rect = self.standardize();

        let mut slice = rect;
        let mut remainder = rect;

        match edge {
            RectEdge::MinY => {
                let amount = if amount > rect.size.height {
                    rect.size.height
                } else {
                    amount
                };
                remainder.origin.y += amount;
                if amount >= rect.size.height {
                    remainder.size.height = 0.0;
                } else {
                    slice.size.height = amount;
                    remainder.size.height -= amount;
                }
            }
            RectEdge::MaxY => {
                if amount >= rect.size.height {
                    remainder.size.height = 0.0;
                } else {
                    slice.origin.y += rect.size.height - amount;
                    slice.size.height = amount;
                    remainder.size.height -= amount;
                }
            }
            RectEdge::MinX => {
                let amount = if amount > rect.size.width {
                    rect.size.width
                } else {
                    amount
                };
                remainder.origin.x += amount;
                if amount >= rect.size.width {
                    remainder.size.width = 0.0;
                } else {
                    slice.size.width = amount;
                    remainder.size.width -= amount;
                }
            }
            RectEdge::MaxX => {
                if amount >= rect.size.width {
                    remainder.size.width = 0.0;
                } else {
                    remainder.size.width -= amount;
                    slice.origin.x += rect.size.width - amount;
                    slice.size.width = amount;
                }
            }
        }

        (slice, remainder)
    }

    /// Expands the rect outward to integer boundaries: origin is floored,
    /// far edges are ceiled, and extents are recomputed as the difference,
    /// so the result always fully contains the input.
    pub fn integral(self) -> Rect {
        let r = self.standardize();

        let max_x = (r.origin.x + r.size.width).ceil();
        let max_y = (r.origin.y + r.size.height).ceil();
        let x = r.origin.x.floor();
        let y = r.origin.y.floor();

        Self::new(x, y, max_x - x, max_y - y)
    }
}
