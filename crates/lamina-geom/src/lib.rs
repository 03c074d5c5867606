//! Geometry and affine-transform algebra for the Lamina layer/view stack.
//!
//! This crate owns the pure value math the presentation layer is built on:
//! points, sizes, axis-aligned rectangles (with null/infinite sentinels), and
//! 2D affine transforms. Every operation takes values and returns values —
//! no shared state, no allocation, no I/O — so everything here is safe to
//! call from any thread.
//!
//! Canonical coordinate space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod affine;
mod point;
mod rect;
mod size;

pub use affine::AffineTransform;
pub use point::Point;
pub use rect::{Rect, RectEdge};
pub use size::Size;
