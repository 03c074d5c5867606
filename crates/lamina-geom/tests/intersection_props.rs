//! Randomized cross-checks of the rectangle algebra.
//!
//! `Rect::intersection` is checked against an independently written
//! max-of-starts / min-of-ends formula, across rects with positive and
//! negative extents, including fully-nested pairs.
//!
//! Tests that assert exact equality on reconstructed edges use
//! integer-valued coordinates, where f32 edge arithmetic is exact. The
//! formula cross-check runs on fractional coordinates and hands the
//! reference the same standardized inputs the engine derives internally,
//! so agreement is required bit-for-bit.

use lamina_geom::{Rect, RectEdge};
use proptest::prelude::*;

/// Reference intersection: straight max-of-starts / min-of-ends on the
/// standardized edge intervals.
fn edge_interval_intersection(a: Rect, b: Rect) -> Rect {
    let x0 = a.origin.x.max(b.origin.x);
    let x1 = (a.origin.x + a.size.width).min(b.origin.x + b.size.width);
    let y0 = a.origin.y.max(b.origin.y);
    let y1 = (a.origin.y + a.size.height).min(b.origin.y + b.size.height);

    if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
        Rect::NULL
    } else {
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -1000.0f32..1000.0,
        -1000.0f32..1000.0,
        -500.0f32..500.0,
        -500.0f32..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Integer-valued coordinates, so edge sums and differences are exact.
fn integer_rect_strategy() -> impl Strategy<Value = Rect> {
    (-1000i32..1000, -1000i32..1000, -500i32..500, -500i32..500)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

fn positive_integer_rect_strategy() -> impl Strategy<Value = Rect> {
    (-1000i32..1000, -1000i32..1000, 1i32..500, 1i32..500)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

fn edge_strategy() -> impl Strategy<Value = RectEdge> {
    prop_oneof![
        Just(RectEdge::MinX),
        Just(RectEdge::MaxX),
        Just(RectEdge::MinY),
        Just(RectEdge::MaxY),
    ]
}

proptest! {
    #[test]
    fn intersection_matches_edge_interval_formula(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(
            a.intersection(b),
            edge_interval_intersection(a.standardize(), b.standardize())
        );
    }

    #[test]
    fn intersection_is_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersection(b), b.intersection(a));
    }

    #[test]
    fn intersection_of_nested_rects_is_inner(
        (outer, inner) in (-1000i32..1000, -1000i32..1000, 10i32..500, 10i32..500, 1i32..5, 1i32..5)
            .prop_map(|(x, y, w, h, dx, dy)| {
                let outer = Rect::new(x as f32, y as f32, w as f32, h as f32);
                let inner = Rect::new(
                    (x + dx) as f32,
                    (y + dy) as f32,
                    (w - 2 * dx) as f32,
                    (h - 2 * dy) as f32,
                );
                (outer, inner)
            }),
    ) {
        prop_assert_eq!(outer.intersection(inner), inner);
        prop_assert_eq!(inner.intersection(outer), inner);
    }

    #[test]
    fn standardize_yields_non_negative_extents(r in rect_strategy()) {
        let s = r.standardize();
        prop_assert!(s.size.width >= 0.0);
        prop_assert!(s.size.height >= 0.0);
        prop_assert_eq!(s.standardize(), s);
    }

    #[test]
    fn standardize_preserves_edges(r in integer_rect_strategy()) {
        let s = r.standardize();
        let x0 = r.origin.x.min(r.origin.x + r.size.width);
        let x1 = r.origin.x.max(r.origin.x + r.size.width);
        prop_assert_eq!(s.origin.x, x0);
        prop_assert_eq!(s.origin.x + s.size.width, x1);
    }

    #[test]
    fn union_contains_both_inputs(a in integer_rect_strategy(), b in integer_rect_strategy()) {
        let u = a.union(b);
        let sa = a.standardize();
        let sb = b.standardize();
        prop_assert!(u.min_x() <= sa.min_x() && u.min_x() <= sb.min_x());
        prop_assert!(u.min_y() <= sa.min_y() && u.min_y() <= sb.min_y());
        prop_assert!(u.max_x() >= sa.max_x() && u.max_x() >= sb.max_x());
        prop_assert!(u.max_y() >= sa.max_y() && u.max_y() >= sb.max_y());
    }

    #[test]
    fn divide_partitions_the_extent(
        r in positive_integer_rect_strategy(),
        amount in -50i32..600,
        edge in edge_strategy(),
    ) {
        let amount = amount as f32;
        let (slice, remainder) = r.divide(amount, edge);
        let s = r.standardize();
        match edge {
            RectEdge::MinX | RectEdge::MaxX => {
                let clamped = amount.clamp(0.0, s.size.width);
                if clamped >= s.size.width {
                    prop_assert_eq!(slice, s);
                    prop_assert_eq!(remainder.size.width, 0.0);
                } else {
                    prop_assert_eq!(slice.size.width, clamped);
                    prop_assert_eq!(slice.size.width + remainder.size.width, s.size.width);
                }
                prop_assert_eq!(slice.size.height, s.size.height);
                prop_assert_eq!(remainder.size.height, s.size.height);
            }
            RectEdge::MinY | RectEdge::MaxY => {
                let clamped = amount.clamp(0.0, s.size.height);
                if clamped >= s.size.height {
                    prop_assert_eq!(slice, s);
                    prop_assert_eq!(remainder.size.height, 0.0);
                } else {
                    prop_assert_eq!(slice.size.height, clamped);
                    prop_assert_eq!(slice.size.height + remainder.size.height, s.size.height);
                }
                prop_assert_eq!(slice.size.width, s.size.width);
                prop_assert_eq!(remainder.size.width, s.size.width);
            }
        }
    }

    #[test]
    fn integral_contains_input_with_integer_edges(r in rect_strategy()) {
        let s = r.standardize();
        let i = r.integral();
        prop_assert_eq!(i.origin.x, i.origin.x.floor());
        prop_assert_eq!(i.origin.y, i.origin.y.floor());
        prop_assert_eq!(i.max_x(), i.max_x().ceil());
        prop_assert_eq!(i.max_y(), i.max_y().ceil());
        prop_assert!(i.min_x() <= s.min_x());
        prop_assert!(i.min_y() <= s.min_y());
        prop_assert!(i.max_x() >= s.max_x());
        prop_assert!(i.max_y() >= s.max_y());
    }
}
