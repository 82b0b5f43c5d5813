use crate::geometry::primitives::Point;
use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Returns `None` for degenerate rectangles (zero or negative extent in either direction).
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Option<Self> {
        match x_min < x_max && y_min < y_max {
            true => Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            false => None,
        }
    }

    /// True if `other` lies entirely within `self` (shared edges allowed).
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// True if `self` and `other` share a region of positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        Rect::intersection(*self, *other).is_some()
    }

    /// Same as [`Rect::overlaps`], but overlaps thinner than the floating point tolerance are ignored.
    pub fn almost_overlaps(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) < FPA(f32::min(self.x_max, other.x_max))
            && FPA(f32::max(self.y_min, other.y_min)) < FPA(f32::min(self.y_max, other.y_max))
    }

    /// Returns the four corners of `self`, counter-clockwise starting at the lower-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width() + self.height())
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f32::max(a.x_min, b.x_min);
        let y_min = f32::max(a.y_min, b.y_min);
        let x_max = f32::min(a.x_max, b.x_max);
        let y_max = f32::min(a.y_max, b.y_max);
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!a.almost_overlaps(&b));
        assert!(Rect::intersection(a, b).is_none());
    }

    #[test]
    fn overlap_within_tolerance_is_ignored() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(9.9999, 0.0, 20.0, 10.0).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.almost_overlaps(&b));
    }

    #[test]
    fn containment() {
        let outer = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let inner = Rect::try_new(2.0, 2.0, 10.0, 5.0).unwrap();
        let slightly_out = Rect::try_new(2.0, 2.0, 10.0001, 5.0).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&slightly_out));
    }

    #[test]
    fn degenerate_rect_is_rejected() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 5.0).is_none());
        assert!(Rect::try_new(1.0, 1.0, 4.0, -1.0).is_none());
    }

    #[test]
    fn corners_are_counter_clockwise() {
        let r = Rect::try_new(1.0, 2.0, 4.0, 6.0).unwrap();
        assert_eq!(
            r.corners(),
            [Point(1.0, 2.0), Point(4.0, 2.0), Point(4.0, 6.0), Point(1.0, 6.0)]
        );
        assert_eq!(r.perimeter(), 14.0);
        assert_eq!(r.centroid(), Point(2.5, 4.0));
    }
}
