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


//! Exact evaluation of the geometric determinants over `rug::Rational`.
//!
//! Every finite `f64` is a dyadic rational, so converting the inputs loses
//! nothing and the sign of the result is the true sign. This is the slow path
//! behind the filtered predicates in [`crate::kernel`].
//!
//! Infinities and NaN have no rational value; every function here returns
//! `None` when one of its inputs is not finite.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;

/// Exact value of `v`, or `None` for an infinity or NaN.
pub fn rational(v: f64) -> Option<Rational> {
    Rational::from_f64(v)
}

#[inline]
fn diff(a: f64, b: f64) -> Option<Rational> {
    let mut result = rational(a)?;
    result -= &rational(b)?;
    Some(result)
}

/// `ux * vy - uy * vx`
#[inline]
fn cross(ux: &Rational, uy: &Rational, vx: &Rational, vy: &Rational) -> Rational {
    let mut result = ux.clone();
    result *= vy;
    let mut rhs = uy.clone();
    rhs *= vx;
    result -= &rhs;
    result
}

#[inline]
fn norm2(x: &Rational, y: &Rational) -> Rational {
    let mut xx = x.clone();
    xx *= x;
    let mut yy = y.clone();
    yy *= y;
    xx += &yy;
    xx
}

/// Sign of `(b - a) x (c - a)`.
pub fn orient2d_sign(a: &Point2, b: &Point2, c: &Point2) -> Option<Ordering> {
    let abx = diff(b.x, a.x)?;
    let aby = diff(b.y, a.y)?;
    let acx = diff(c.x, a.x)?;
    let acy = diff(c.y, a.y)?;
    Some(cross(&abx, &aby, &acx, &acy).cmp0())
}

/// Sign of the lifted-paraboloid determinant of `(a, b, c)` against `d`.
/// Positive when `d` is inside the circle through a counter-clockwise `(a, b, c)`.
pub fn incircle_sign(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Option<Ordering> {
    let adx = diff(a.x, d.x)?;
    let ady = diff(a.y, d.y)?;
    let bdx = diff(b.x, d.x)?;
    let bdy = diff(b.y, d.y)?;
    let cdx = diff(c.x, d.x)?;
    let cdy = diff(c.y, d.y)?;

    let mut det = norm2(&adx, &ady);
    det *= &cross(&bdx, &bdy, &cdx, &cdy);

    let mut term = norm2(&bdx, &bdy);
    term *= &cross(&cdx, &cdy, &adx, &ady);
    det += &term;

    let mut term = norm2(&cdx, &cdy);
    term *= &cross(&adx, &ady, &bdx, &bdy);
    det += &term;

    Some(det.cmp0())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_signs() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert_eq!(orient2d_sign(&a, &b, &c), Some(Ordering::Greater));
        assert_eq!(orient2d_sign(&a, &c, &b), Some(Ordering::Less));
        assert_eq!(
            orient2d_sign(&a, &b, &Point2::new(7.0, 0.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn tiny_offsets_are_not_lost() {
        // 0.1 + 0.2 is not 0.3 in binary; the exact sign sees that.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.1 + 0.2, 0.3);
        let c = Point2::new(1.0, 1.0);
        assert_ne!(orient2d_sign(&a, &b, &c), Some(Ordering::Equal));
    }

    #[test]
    fn cocircular_is_zero() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let d = Point2::new(1.0, 1.0);
        assert_eq!(incircle_sign(&a, &b, &c, &d), Some(Ordering::Equal));
        assert_eq!(
            incircle_sign(&a, &b, &c, &Point2::new(0.5, 0.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            incircle_sign(&a, &b, &c, &Point2::new(2.0, 2.0)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn infinity_has_no_exact_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(f64::INFINITY, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(rational(f64::NAN).is_none());
        assert_eq!(orient2d_sign(&a, &b, &c), None);
        assert_eq!(incircle_sign(&a, &b, &c, &Point2::new(0.5, 0.5)), None);
    }
}
