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

use crate::geometry::Point2;
use crate::numeric::exact::orient2d_sign;

/// Half of the machine epsilon: the unit roundoff of `f64`.
pub(crate) const UNIT_ROUNDOFF: f64 = f64::EPSILON * 0.5;

/// Forward error bound of [`orient2d`], relative to the magnitude of its two products.
const ORIENT2D_ERRBOUND: f64 = (3.0 + 16.0 * UNIT_ROUNDOFF) * UNIT_ROUNDOFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
        }
    }

    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

/// Sign of a floating-point determinant; NaN counts as zero.
pub(crate) fn float_sign(det: f64) -> Ordering {
    det.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Plain floating point; the sign can be wrong when the points are nearly
/// collinear. Use [`orientation`] when the sign matters.
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Exact orientation of the turn `a -> b -> c`.
///
/// The floating-point determinant is accepted when it clears its error bound;
/// otherwise the sign is recomputed in rational arithmetic. Non-finite
/// coordinates have no exact value: they get the floating-point sign, and a
/// NaN determinant reads as collinear.
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let left = (b.x - a.x) * (c.y - a.y);
    let right = (b.y - a.y) * (c.x - a.x);
    let det = left - right;
    let errbound = ORIENT2D_ERRBOUND * (left.abs() + right.abs());

    if det > errbound {
        Orientation::CounterClockwise
    } else if -det > errbound {
        Orientation::Clockwise
    } else {
        Orientation::from_sign(orient2d_sign(a, b, c).unwrap_or_else(|| float_sign(det)))
    }
}
