use bytemuck::{Pod, Zeroable};

use super::{Point, Size};

/// 2D affine transform, stored as the six free entries of
///
/// ```text
/// | a   b   0 |
/// | c   d   0 |
/// | tx  ty  1 |
/// ```
///
/// applied to a row vector: `(x, y, 1) · M`. So `x' = a·x + c·y + tx` and
/// `y' = b·x + d·y + ty`.
///
/// Equality is exact field-wise float comparison; callers needing tolerance
/// supply their own epsilon.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

/// Angles this close to π/2 snap to the exact quarter-turn matrix.
const QUARTER_TURN_SNAP: f32 = 0.0001;

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle` radians (counter-clockwise in the +Y-down space).
    ///
    /// Angles within `0.0001` rad of π/2 return the exact quarter-turn matrix
    /// `(0, 1, -1, 0, 0, 0)` rather than the cos/sin approximation; layout
    /// code rotates by exactly a quarter turn constantly, and the drift from
    /// `cos(π/2) ≠ 0` otherwise leaks into every derived frame.
    pub fn rotation(angle: f32) -> Self {
        if (angle - core::f32::consts::FRAC_PI_2).abs() <= QUARTER_TURN_SNAP {
            return Self::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
        }

        let cos = angle.cos();
        let sin = angle.sin();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Matrix product `self · other` under the row-vector convention:
    /// the returned transform applies `self` first, then `other`.
    ///
    /// `other`'s translation row is the outer one. Argument order matters for
    /// any transform with rotation or scale.
    pub fn concat(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
            self.tx * other.a + self.ty * other.c + other.tx,
            self.tx * other.b + self.ty * other.d + other.ty,
        )
    }

    /// Prepends a rotation: the rotation happens before `self`.
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        Self::rotation(angle).concat(self)
    }

    /// Prepends a translation: the translation happens before `self`.
    #[inline]
    pub fn translated(self, x: f32, y: f32) -> Self {
        Self::translation(x, y).concat(self)
    }

    /// Prepends a scale: the scale happens before `self`.
    #[inline]
    pub fn scaled(self, x: f32, y: f32) -> Self {
        Self::scale(x, y).concat(self)
    }

    /// Inverse transform, or `self` unchanged when the determinant is
    /// exactly zero.
    ///
    /// The singular fallback is silent and total — callers that need to know
    /// whether the inversion succeeded must check the determinant themselves.
    /// The name carries the fallback so call sites read honestly.
    pub fn invert_or_self(self) -> Self {
        let det = self.a * self.d - self.c * self.b;
        if det == 0.0 {
            return self;
        }

        Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (-self.d * self.tx + self.c * self.ty) / det,
            (self.b * self.tx - self.a * self.ty) / det,
        )
    }

    /// Exact comparison against [`AffineTransform::IDENTITY`].
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Applies the full transform, translation included.
    #[inline]
    pub fn apply_to_point(self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies the linear part only — sizes are vectors, so translation does
    /// not affect them. Computed in f64 internally to limit accumulated
    /// error across repeated compositions, then narrowed back to f32.
    #[inline]
    pub fn apply_to_size(self, s: Size) -> Size {
        let w = f64::from(self.a) * f64::from(s.width) + f64::from(self.c) * f64::from(s.height);
        let h = f64::from(self.b) * f64::from(s.width) + f64::from(self.d) * f64::from(s.height);
        Size::new(w as f32, h as f32)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
