use bytemuck::{Pod, Zeroable};

/// 2D extent in logical pixels.
///
/// Width/height may be negative transiently during rectangle arithmetic;
/// [`Rect::standardize`](crate::Rect::standardize) flips negative extents
/// into the origin before any rectangle algebra runs.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}
