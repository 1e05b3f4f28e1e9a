//! Immutable 2D vector
//!
//! Operators apply per axis when the right-hand side is a vector, and
//! uniformly to both axes when it is a scalar.

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D vector in surface pixel space (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const TOP: Self = Self::new(0.0, 1.0);
    pub const BOTTOM: Self = Self::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply an arbitrary per-axis transform (flooring, clamping, ...)
    #[inline]
    pub fn inject<F>(self, f: F) -> Self
    where
        F: FnOnce(f64, f64) -> (f64, f64),
    {
        let (x, y) = f(self.x, self.y);
        Self::new(x, y)
    }

    /// Floor both axes
    #[inline]
    pub fn floor(self) -> Self {
        self.inject(|x, y| (x.floor(), y.floor()))
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.inject(|x, y| (x.abs(), y.abs()))
    }

    /// Euclidean norm, without intermediate overflow or underflow
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// `None` for the origin and for non-finite vectors; every other vector,
    /// subnormal or near `f64::MAX`, has a direction.
    pub fn normalized(self) -> Option<Self> {
        if self.is_origin() || !self.is_finite() {
            return None;
        }
        // Scale the larger axis to 1 first so the norm stays representable
        let scaled = self / self.x.abs().max(self.y.abs());
        Some(scaled / scaled.magnitude())
    }

    /// True iff both axes are exactly zero
    #[inline]
    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Vector2d {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2d> for DVec2 {
    fn from(v: Vector2d) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

macro_rules! impl_axis_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vector2d {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl $trait<f64> for Vector2d {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f64) -> Self {
                Self::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

impl_axis_op!(Add, add, +);
impl_axis_op!(Sub, sub, -);
impl_axis_op!(Mul, mul, *);
impl_axis_op!(Div, div, /);

impl Neg for Vector2d {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
