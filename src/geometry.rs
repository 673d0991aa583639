// src/geometry.rs

//! Integer 2D points, sizes, and axis-aligned rectangles.
//!
//! These are the coordinate primitives every drawing routine in the crate
//! works in. `Rectangle` intersection (via the `&` operator) is what clips a
//! window's on-screen footprint against a caller-supplied damage area during
//! compositing.

use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::ops::{Add, AddAssign, BitAnd, Sub};

/// A 2D point or extent, generic over the numeric component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2D<T> {
    pub x: T,
    pub y: T,
}

/// Shorthand for the pixel plane.
pub type Vec2 = Vector2D<i32>;

/// Shorthand for rectangles on the pixel plane.
pub type Rect = Rectangle<i32>;

impl<T> Vector2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Ord> Vector2D<T> {
    /// Component-wise minimum.
    pub fn element_min(self, other: Self) -> Self {
        Self {
            x: min(self.x, other.x),
            y: min(self.y, other.y),
        }
    }

    /// Component-wise maximum.
    pub fn element_max(self, other: Self) -> Self {
        Self {
            x: max(self.x, other.x),
            y: max(self.y, other.y),
        }
    }
}

impl<T: Add<Output = T>> Add for Vector2D<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vector2D<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: AddAssign> AddAssign for Vector2D<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// An axis-aligned rectangle: top-left corner plus extent.
///
/// A rectangle with a zero or negative component in `size` is considered
/// empty. Intersection of disjoint rectangles yields the canonical empty
/// rectangle `{{0,0},{0,0}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle<T> {
    pub pos: Vector2D<T>,
    pub size: Vector2D<T>,
}

impl<T> Rectangle<T> {
    pub const fn new(pos: Vector2D<T>, size: Vector2D<T>) -> Self {
        Self { pos, size }
    }
}

impl<T> BitAnd for Rectangle<T>
where
    T: Copy + Ord + Add<Output = T> + Sub<Output = T> + Default,
{
    type Output = Self;

    /// Intersection of two axis-aligned rectangles.
    fn bitand(self, rhs: Self) -> Self {
        let end = (self.pos + self.size).element_min(rhs.pos + rhs.size);
        let pos = self.pos.element_max(rhs.pos);

        if end.x <= pos.x || end.y <= pos.y {
            // Disjoint (or touching edge-to-edge, which contains no pixels).
            return Self::default();
        }

        Self {
            pos,
            size: end - pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(3, -2);
        let b = Vec2::new(1, 7);

        assert_eq!(a + b, Vec2::new(4, 5));
        assert_eq!(a - b, Vec2::new(2, -9));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4, 5));
    }

    #[test]
    fn test_element_min_max() {
        let a = Vec2::new(3, 9);
        let b = Vec2::new(5, 1);

        assert_eq!(a.element_min(b), Vec2::new(3, 1));
        assert_eq!(a.element_max(b), Vec2::new(5, 9));
    }

    #[test]
    fn test_intersection_overlapping() {
        let a = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let b = Rect::new(Vec2::new(5, 5), Vec2::new(10, 10));

        let i = a & b;
        assert_eq!(i.pos, Vec2::new(5, 5));
        assert_eq!(i.size, Vec2::new(5, 5));
    }

    #[test]
    fn test_intersection_contained() {
        let outer = Rect::new(Vec2::new(0, 0), Vec2::new(100, 100));
        let inner = Rect::new(Vec2::new(20, 30), Vec2::new(10, 5));

        assert_eq!(outer & inner, inner);
        assert_eq!(inner & outer, inner);
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let b = Rect::new(Vec2::new(50, 50), Vec2::new(10, 10));

        assert_eq!(a & b, Rect::default());
    }

    #[test]
    fn test_intersection_touching_edges_is_empty() {
        let a = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let b = Rect::new(Vec2::new(10, 0), Vec2::new(10, 10));

        // A shared edge contains no pixels.
        assert_eq!(a & b, Rect::default());
    }

    #[test]
    fn test_intersection_negative_origin() {
        let a = Rect::new(Vec2::new(-5, -5), Vec2::new(10, 10));
        let b = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));

        let i = a & b;
        assert_eq!(i.pos, Vec2::new(0, 0));
        assert_eq!(i.size, Vec2::new(5, 5));
    }
}
