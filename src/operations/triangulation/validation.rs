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


//! Post-condition check for the empty-circumcircle property.
//!
//! O(points x triangles); meant for tests and debugging, not the hot path.

use crate::error::{MeshError, Result};
use crate::geometry::{Point2, Triangle};
use crate::operations::triangulation::Triangulation;

/// First triangle found with an input point strictly inside its circumcircle.
pub fn find_violation(triangles: &[Triangle], points: &[Point2]) -> Option<(Triangle, Point2)> {
    triangles.iter().find_map(|t| {
        points
            .iter()
            .find(|p| !t.has_vertex(p) && t.circumcircle_contains(p))
            .map(|p| (*t, *p))
    })
}

pub fn validate(triangles: &[Triangle], points: &[Point2]) -> bool {
    find_violation(triangles, points).is_none()
}

/// Like [`validate`], reporting the offending pair as [`MeshError::ValidationFailure`].
pub fn check(triangles: &[Triangle], points: &[Point2]) -> Result<()> {
    match find_violation(triangles, points) {
        Some((triangle, point)) => {
            log::error!("Delaunay violation: {point} inside the circumcircle of {triangle}");
            Err(MeshError::ValidationFailure { triangle, point })
        }
        None => Ok(()),
    }
}

impl Triangulation {
    /// Checks every triangle against every accepted input point.
    pub fn is_delaunay(&self) -> bool {
        validate(self.triangles(), self.points())
    }
}
