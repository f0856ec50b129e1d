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
use crate::kernel::orientation::{Orientation, UNIT_ROUNDOFF, float_sign, orientation};
use crate::numeric::exact::incircle_sign;

/// Forward error bound of the lifted determinant, relative to its permanent.
const INCIRCLE_ERRBOUND: f64 = (10.0 + 96.0 * UNIT_ROUNDOFF) * UNIT_ROUNDOFF;

/// Sign of the lifted-paraboloid determinant.
///
/// Each point `(x, y)` is lifted to `(x, y, x^2 + y^2)` relative to `d`; the
/// result is the sign of the signed volume of the tetrahedron spanned by the
/// lifted `a`, `b`, `c` and `d`. For a counter-clockwise `(a, b, c)` it is
/// `Greater` iff `d` lies strictly inside their circumcircle, `Equal` iff it
/// lies on it. The sign flips for a clockwise triangle.
pub fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Ordering {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    let errbound = INCIRCLE_ERRBOUND * permanent;

    if det > errbound {
        Ordering::Greater
    } else if -det > errbound {
        Ordering::Less
    } else {
        incircle_sign(a, b, c, d).unwrap_or_else(|| float_sign(det))
    }
}

/// Is `p` strictly inside the circumcircle of `(a, b, c)`?
///
/// The vertices may come in either winding. Collinear vertices have no
/// circumcircle and never contain anything.
pub fn in_circumcircle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    in_circumcircle_oriented(p, a, b, c, orientation(a, b, c))
}

/// Same as [`in_circumcircle`] with the triangle's orientation already known.
pub fn in_circumcircle_oriented(
    p: &Point2,
    a: &Point2,
    b: &Point2,
    c: &Point2,
    orient: Orientation,
) -> bool {
    match orient {
        Orientation::CounterClockwise => incircle(a, b, c, p) == Ordering::Greater,
        Orientation::Clockwise => incircle(a, b, c, p) == Ordering::Less,
        Orientation::Collinear => false,
    }
}
