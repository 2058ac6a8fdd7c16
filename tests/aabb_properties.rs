//! Property tests for the AABB overlap test

use car_hop::sim::{Rect, overlaps};
use proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rect> {
    (-1000i32..1000, -1000i32..1000, 0i32..500, 0i32..500)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn rect_overlaps_itself(a in rect()) {
        prop_assert!(overlaps(&a, &a));
    }

    #[test]
    fn disjoint_x_ranges_never_overlap(
        a in rect(),
        gap in 1i32..200,
        y in -1000i32..1000,
        w in 0i32..500,
        h in 0i32..500,
    ) {
        let b = Rect::new(a.right() + gap, y, w, h);
        prop_assert!(!overlaps(&a, &b));
        prop_assert!(!overlaps(&b, &a));
    }

    #[test]
    fn disjoint_y_ranges_never_overlap(
        a in rect(),
        gap in 1i32..200,
        x in -1000i32..1000,
        w in 0i32..500,
        h in 0i32..500,
    ) {
        let b = Rect::new(x, a.bottom() + gap, w, h);
        prop_assert!(!overlaps(&a, &b));
    }

    #[test]
    fn touching_edges_overlap(a in rect(), w in 0i32..500, h in 0i32..500) {
        // b starts exactly where a ends on the same row
        let b = Rect::new(a.right(), a.y, w, a.h);
        prop_assert!(overlaps(&a, &b));
        let c = Rect::new(a.x, a.bottom(), a.w, h);
        prop_assert!(overlaps(&a, &c));
    }

    #[test]
    fn translating_both_preserves_overlap(
        a in rect(),
        b in rect(),
        dx in -500i32..500,
        dy in -500i32..500,
    ) {
        let before = overlaps(&a, &b);
        let (mut a2, mut b2) = (a, b);
        let delta = glam::IVec2::new(dx, dy);
        a2.translate(delta);
        b2.translate(delta);
        prop_assert_eq!(overlaps(&a2, &b2), before);
    }
}
