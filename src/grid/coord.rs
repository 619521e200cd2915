//! Integer grid coordinates and row-major traversal

use std::iter::FusedIterator;

/// 2D integer position: `x` is the column, `y` the row.
///
/// Negative values are allowed; whether a coordinate lies inside a grid is
/// decided by the grid (see `PixelGrid::check_bounds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Successor in row-major order within a `width` x `height` area.
    ///
    /// Steps right along the row, then wraps to the start of the next row.
    /// Returns `None` past the last row.
    #[inline]
    pub fn next_in_row_major_order(self, width: i32, height: i32) -> Option<Coordinate> {
        if self.x.saturating_add(1) < width {
            Some(Self::new(self.x + 1, self.y))
        } else if self.y.saturating_add(1) < height {
            Some(Self::new(0, self.y + 1))
        } else {
            None
        }
    }

    /// Every coordinate of `[0, width) x [0, height)`, row by row
    pub fn row_major(width: i32, height: i32) -> RowMajor {
        RowMajor::new(width, height)
    }

    /// Apply `fx` to `x` and `fy` to `y`.
    ///
    /// Both axis functions are required; use [`Coordinate::map`] to apply one
    /// function to both axes.
    #[must_use]
    pub fn transform<FX, FY>(self, fx: FX, fy: FY) -> Coordinate
    where
        FX: FnOnce(i32) -> i32,
        FY: FnOnce(i32) -> i32,
    {
        Self::new(fx(self.x), fy(self.y))
    }

    /// Apply the same function to both axes
    #[must_use]
    pub fn map<F>(self, f: F) -> Coordinate
    where
        F: Fn(i32) -> i32,
    {
        Self::new(f(self.x), f(self.y))
    }

    /// Shift by `(dx, dy)`, wrapping at the `i32` limits
    #[must_use]
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Coordinate {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Coordinate {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.offset(rhs.x, rhs.y)
    }
}

impl std::ops::Sub for Coordinate {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

/// Row-major iterator over a `width` x `height` area.
///
/// Holds the next coordinate to yield, or `None` once exhausted. Areas with
/// a zero or negative side yield nothing.
#[derive(Debug, Clone)]
pub struct RowMajor {
    width: i32,
    height: i32,
    next: Option<Coordinate>,
}

impl RowMajor {
    pub fn new(width: i32, height: i32) -> Self {
        let next = (width > 0 && height > 0).then_some(Coordinate::ORIGIN);
        Self {
            width,
            height,
            next,
        }
    }

    fn remaining(&self) -> usize {
        match self.next {
            Some(c) => {
                let total = self.width as usize * self.height as usize;
                total - (c.y as usize * self.width as usize + c.x as usize)
            }
            None => 0,
        }
    }
}

impl Iterator for RowMajor {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let current = self.next?;
        self.next = current.next_in_row_major_order(self.width, self.height);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowMajor {}

impl FusedIterator for RowMajor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_along_row() {
        assert_eq!(
            Coordinate::new(0, 0).next_in_row_major_order(3, 2),
            Some(Coordinate::new(1, 0))
        );
    }

    #[test]
    fn test_next_wraps_to_next_row() {
        assert_eq!(
            Coordinate::new(2, 0).next_in_row_major_order(3, 2),
            Some(Coordinate::new(0, 1))
        );
    }

    #[test]
    fn test_next_ends_after_last_cell() {
        assert_eq!(Coordinate::new(2, 1).next_in_row_major_order(3, 2), None);
    }

    #[test]
    fn test_next_does_not_overflow_at_max() {
        assert_eq!(
            Coordinate::new(i32::MAX, i32::MAX).next_in_row_major_order(i32::MAX, i32::MAX),
            None
        );
    }

    #[test]
    fn test_row_major_3x2() {
        let coords: Vec<(i32, i32)> = Coordinate::row_major(3, 2).map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_row_major_empty_areas() {
        assert_eq!(Coordinate::row_major(0, 5).count(), 0);
        assert_eq!(Coordinate::row_major(5, 0).count(), 0);
        assert_eq!(Coordinate::row_major(-1, 3).count(), 0);
    }

    #[test]
    fn test_row_major_exact_size() {
        let mut iter = Coordinate::row_major(4, 3);
        assert_eq!(iter.len(), 12);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 10);
        assert_eq!(iter.by_ref().count(), 10);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_transform_uses_both_functions() {
        let c = Coordinate::new(2, 3).transform(|x| x * 10, |y| y - 1);
        assert_eq!(c, Coordinate::new(20, 2));
    }

    #[test]
    fn test_transform_identity_on_y() {
        let c = Coordinate::new(2, 3).transform(|x| -x, |y| y);
        assert_eq!(c, Coordinate::new(-2, 3));
    }

    #[test]
    fn test_map_applies_to_both_axes() {
        assert_eq!(Coordinate::new(2, 3).map(|v| v * 2), Coordinate::new(4, 6));
    }

    #[test]
    fn test_offset_and_ops() {
        let c = Coordinate::new(1, 1);
        assert_eq!(c.offset(-2, 3), Coordinate::new(-1, 4));
        assert_eq!(c + Coordinate::new(2, 2), Coordinate::new(3, 3));
        assert_eq!(c - Coordinate::new(2, 2), Coordinate::new(-1, -1));
    }

    #[test]
    fn test_offset_and_ops_wrap_at_limits() {
        let edge = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(1, -1), Coordinate::new(i32::MIN, i32::MAX));
        assert_eq!(edge + Coordinate::new(1, 0), Coordinate::new(i32::MIN, i32::MIN));
        assert_eq!(edge - Coordinate::new(0, 1), Coordinate::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(5, -10).to_string(), "(5, -10)");
    }
}
