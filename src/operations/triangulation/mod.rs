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


use ahash::{AHashMap, AHashSet};

use crate::error::Result;
use crate::geometry::{CanonicalEdge, Point2, Triangle};

pub mod delaunay;
pub mod validation;

pub use delaunay::BowyerWatson;

pub trait Triangulate2D {
    /// Triangulates `points` inside a `width` x `height` domain. The domain
    /// extent only sizes the bounding triangle.
    fn triangulate(&self, points: &[Point2], width: f64, height: f64) -> Result<Triangulation>;
}

/// A finished (or in-progress) triangle set over the accepted input points.
#[derive(Clone, Debug)]
pub struct Triangulation {
    points: Vec<Point2>,
    triangles: Vec<Triangle>,
    bounding: Triangle,
}

impl Triangulation {
    pub(crate) fn new(points: Vec<Point2>, triangles: Vec<Triangle>, bounding: Triangle) -> Self {
        Self {
            points,
            triangles,
            bounding,
        }
    }

    /// Input points that made it into the triangulation, in input order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The synthetic triangle the run was seeded with.
    pub fn bounding_triangle(&self) -> &Triangle {
        &self.bounding
    }

    /// Drops every triangle sharing a vertex with the bounding triangle and
    /// returns how many were dropped. A second call removes nothing.
    pub fn remove_bounding(&mut self) -> usize {
        let before = self.triangles.len();
        let bounding = self.bounding;
        self.triangles.retain(|t| !t.shares_vertex_with(&bounding));
        before - self.triangles.len()
    }

    pub fn contains(&self, triangle: &Triangle) -> bool {
        self.triangles.contains(triangle)
    }

    /// The triangles as a set, for order-independent comparison.
    pub fn triangle_set(&self) -> AHashSet<Triangle> {
        self.triangles.iter().copied().collect()
    }

    /// Nodes in input order and elements as zero-based node indices, sorted.
    pub fn to_indexed(&self) -> IndexedMesh {
        let lookup: AHashMap<Point2, usize> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i))
            .collect();

        // Triangles touching the bounding triangle have no index; a
        // Triangulation never carries them once it leaves the triangulator.
        let mut elements: Vec<[usize; 3]> = self
            .triangles
            .iter()
            .filter_map(|t| {
                let [a, b, c] = t.vertices();
                Some([*lookup.get(a)?, *lookup.get(b)?, *lookup.get(c)?])
            })
            .collect();
        elements.sort_unstable();

        IndexedMesh {
            nodes: self.points.clone(),
            elements,
        }
    }
}

/// The `Nodes` / `Elements` form of an unstructured mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedMesh {
    pub nodes: Vec<Point2>,
    /// Counter-clockwise node index triples.
    pub elements: Vec<[usize; 3]>,
}

impl IndexedMesh {
    /// Nodes on an edge used by exactly one element, ascending.
    pub fn boundary_nodes(&self) -> Vec<usize> {
        let mut uses: AHashMap<(usize, usize), u32> = AHashMap::default();
        for &[a, b, c] in &self.elements {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *uses.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }

        let mut nodes: Vec<usize> = uses
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .flat_map(|((u, v), _)| [u, v])
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    /// Undirected edges of the mesh as canonical point pairs.
    pub fn edges(&self) -> AHashSet<CanonicalEdge> {
        self.elements
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
            .map(|(u, v)| CanonicalEdge::new(&self.nodes[u], &self.nodes[v]))
            .collect()
    }
}
