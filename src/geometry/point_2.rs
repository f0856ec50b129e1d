// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.


use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use num_traits::ToPrimitive;

/// A point in the plane.
///
/// Equality is exact coordinate equality; `-0.0` and `0.0` compare equal and
/// hash alike. Points fed to the triangulator must be finite, which also makes
/// `Eq` and `Ord` well behaved.
#[derive(Debug, Clone, Copy)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<f64>,
        Y: Into<f64>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Builds a point from any primitive numeric pair, e.g. pixel indices.
    pub fn from_primitive<X, Y>(x: X, y: Y) -> Option<Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        Some(Self {
            x: x.to_f64()?,
            y: y.to_f64()?,
        })
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline(always)]
    fn key(&self) -> (f64, f64) {
        // adding +0.0 folds -0.0 into 0.0
        (self.x + 0.0, self.y + 0.0)
    }
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point2 {}

impl Hash for Point2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.key();
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic on (x, y).
impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        let (ax, ay) = self.key();
        let (bx, by) = other.key();
        ax.total_cmp(&bx).then_with(|| ay.total_cmp(&by))
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Point2;
    fn sub(self, rhs: &'b Point2) -> Point2 {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Point2 { x, y }
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
