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

use crate::error::{MeshError, Result};
use crate::geometry::{CanonicalEdge, Point2};
use crate::kernel::orientation::{Orientation, orient2d, orientation};
use crate::kernel::predicates::in_circumcircle_oriented;

/// A non-degenerate triangle.
///
/// Vertices are stored counter-clockwise; the orientation is settled once, at
/// construction, and every in-circle query reuses it. Equality and hashing
/// look at the vertex set only, so `(a, b, c)` equals `(c, a, b)` and `(b, a, c)`.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    vertices: [Point2; 3],
    circumcenter: Point2,
}

impl Triangle {
    /// Fails with [`MeshError::DegenerateGeometry`] when the points are
    /// collinear, or so close to it that the circumcenter is not representable,
    /// and with [`MeshError::NonFiniteTriangle`] on an infinite or NaN coordinate.
    pub fn new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(MeshError::NonFiniteTriangle { a, b, c });
        }

        let vertices = match orientation(&a, &b, &c) {
            Orientation::CounterClockwise => [a, b, c],
            Orientation::Clockwise => [a, c, b],
            Orientation::Collinear => return Err(MeshError::DegenerateGeometry { a, b, c }),
        };

        let circumcenter = circumcenter(&vertices[0], &vertices[1], &vertices[2])
            .ok_or(MeshError::DegenerateGeometry { a, b, c })?;

        Ok(Triangle {
            vertices,
            circumcenter,
        })
    }

    /// Counter-clockwise vertices.
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    pub fn circumcenter(&self) -> Point2 {
        self.circumcenter
    }

    pub fn circumradius(&self) -> f64 {
        self.circumcenter.distance_to(&self.vertices[0])
    }

    pub fn edges(&self) -> [CanonicalEdge; 3] {
        let [a, b, c] = &self.vertices;
        [
            CanonicalEdge::new(a, b),
            CanonicalEdge::new(b, c),
            CanonicalEdge::new(c, a),
        ]
    }

    pub fn has_vertex(&self, p: &Point2) -> bool {
        self.vertices.contains(p)
    }

    pub fn shares_vertex_with(&self, other: &Triangle) -> bool {
        other.vertices.iter().any(|p| self.has_vertex(p))
    }

    /// Strict: points on the circle are outside.
    pub fn circumcircle_contains(&self, p: &Point2) -> bool {
        let [a, b, c] = &self.vertices;
        in_circumcircle_oriented(p, a, b, c, Orientation::CounterClockwise)
    }

    /// Twice the area; always positive.
    pub fn doubled_area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        orient2d(a, b, c)
    }

    /// Vertices in ascending point order; the identity of the triangle.
    pub fn sorted_vertices(&self) -> [Point2; 3] {
        let mut key = self.vertices;
        key.sort_unstable();
        key
    }
}

/// `None` when the determinant underflows or the center overflows.
///
/// Offsets are divided by their largest magnitude first, so the squared
/// lengths cannot overflow for far-apart vertices.
fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Option<Point2> {
    let scale = (b.x - a.x)
        .abs()
        .max((b.y - a.y).abs())
        .max((c.x - a.x).abs())
        .max((c.y - a.y).abs());
    if !(scale > 0.0 && scale.is_finite()) {
        return None;
    }

    let bx = (b.x - a.x) / scale;
    let by = (b.y - a.y) / scale;
    let cx = (c.x - a.x) / scale;
    let cy = (c.y - a.y) / scale;

    let d = 2.0 * (bx * cy - by * cx);
    if d == 0.0 {
        log::warn!("zero circumcenter determinant for {a}, {b}, {c}");
        return None;
    }

    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let center = Point2::new(
        a.x + (cy * b2 - by * c2) / d * scale,
        a.y + (bx * c2 - cx * b2) / d * scale,
    );
    center.is_finite().then_some(center)
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_vertices().hash(state);
    }
}

impl PartialOrd for Triangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Triangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_vertices().cmp(&other.sorted_vertices())
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.vertices;
        write!(f, "T[{a}, {b}, {c}]")
    }
}
