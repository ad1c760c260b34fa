/// Axis-aligned rectangle with an integer position and unsigned size.
///
/// Entities track sub-pixel positions as floats and copy them into a `Rect`
/// once per frame; the frontend only ever sees integer rects.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Rect of size `w`x`h` whose top edge midpoint sits at `(cx, cy)`.
    pub const fn from_midtop(cx: i32, cy: i32, w: u32, h: u32) -> Rect {
        Rect {
            x: cx - (w / 2) as i32,
            y: cy,
            w,
            h,
        }
    }

    /// Rect of size `w`x`h` whose bottom edge midpoint sits at `(cx, cy)`.
    pub const fn from_midbottom(cx: i32, cy: i32, w: u32, h: u32) -> Rect {
        Rect {
            x: cx - (w / 2) as i32,
            y: cy - h as i32,
            w,
            h,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    #[inline]
    pub const fn midtop(&self) -> (i32, i32) {
        (self.x + (self.w / 2) as i32, self.y)
    }

    #[inline]
    pub const fn midbottom(&self) -> (i32, i32) {
        (self.x + (self.w / 2) as i32, self.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn midpoints() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.midtop(), (25, 20));
        assert_eq!(r.midbottom(), (25, 60));
    }

    #[test]
    fn anchored_constructors_round_trip() {
        let r = Rect::from_midbottom(600, 800, 40, 60);
        assert_eq!(r, Rect::new(580, 740, 40, 60));
        assert_eq!(r.midbottom(), (600, 800));

        let b = Rect::from_midtop(600, 740, 25, 80);
        assert_eq!(b, Rect::new(588, 740, 25, 80));
        assert_eq!(b.midtop(), (600, 740));
    }

    #[test]
    fn odd_width_midpoint_truncates() {
        let r = Rect::from_midtop(100, 0, 25, 80);
        assert_eq!(r.x, 88);
        // Re-reading the midpoint lands on x + w/2 with truncating division.
        assert_eq!(r.midtop(), (100, 0));
    }
}
