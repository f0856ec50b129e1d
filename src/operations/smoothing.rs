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


use crate::config::SmoothingConfig;
use crate::error::{MeshError, Result};
use crate::geometry::Point2;
use crate::operations::triangulation::IndexedMesh;

/// Radius-based Laplacian smoothing.
///
/// Each round moves every free point to the mean of the other points found
/// within `config.radius` of it (strict distance), using positions from the
/// previous round. Points without neighbours stay put; `pinned[i]` freezes
/// point `i`.
pub fn laplacian_smoothing(
    points: &[Point2],
    pinned: &[bool],
    config: &SmoothingConfig,
) -> Result<Vec<Point2>> {
    config.validate()?;
    if pinned.len() != points.len() {
        return Err(MeshError::InvalidConfig(format!(
            "pinned mask has {} entries for {} points",
            pinned.len(),
            points.len()
        )));
    }

    let radius2 = config.radius * config.radius;
    let mut current = points.to_vec();

    for _ in 0..config.iterations {
        let previous = current.clone();
        for (i, p) in previous.iter().enumerate() {
            if pinned[i] {
                continue;
            }

            let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
            for (j, q) in previous.iter().enumerate() {
                if j != i && p.distance_squared_to(q) < radius2 {
                    sx += q.x;
                    sy += q.y;
                    n += 1;
                }
            }

            if n > 0 {
                current[i] = Point2::new(sx / n as f64, sy / n as f64);
            }
        }
    }

    Ok(current)
}

impl IndexedMesh {
    /// Smooths the node positions with the boundary nodes pinned. Connectivity
    /// is kept as is, so large moves can fold elements.
    pub fn smoothed(&self, config: &SmoothingConfig) -> Result<IndexedMesh> {
        let mut pinned = vec![false; self.nodes.len()];
        for i in self.boundary_nodes() {
            pinned[i] = true;
        }

        Ok(IndexedMesh {
            nodes: laplacian_smoothing(&self.nodes, &pinned, config)?,
            elements: self.elements.clone(),
        })
    }
}
