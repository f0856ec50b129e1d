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


use crate::geometry::point_2::Point2;

/// An undirected edge. The endpoints are stored in ascending order so that
/// `(u, v)` and `(v, u)` compare and hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalEdge {
    pub a: Point2,
    pub b: Point2,
}

impl CanonicalEdge {
    pub fn new(p1: &Point2, p2: &Point2) -> Self {
        if p1 < p2 {
            Self { a: *p1, b: *p2 }
        } else {
            Self { a: *p2, b: *p1 }
        }
    }

    pub fn has_endpoint(&self, p: &Point2) -> bool {
        self.a == *p || self.b == *p
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_does_not_matter() {
        let u = Point2::new(2.0, 1.0);
        let v = Point2::new(-1.0, 5.0);
        assert_eq!(CanonicalEdge::new(&u, &v), CanonicalEdge::new(&v, &u));
        assert_eq!(CanonicalEdge::new(&u, &v).a, v);
        assert_eq!(CanonicalEdge::new(&u, &v).length(), 5.0);
    }
}
