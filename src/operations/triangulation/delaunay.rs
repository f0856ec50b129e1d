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
use smallvec::SmallVec;

use crate::config::{DuplicatePolicy, TriangulatorConfig};
use crate::error::{MeshError, Result};
use crate::geometry::{Aabb2, CanonicalEdge, Point2, Triangle};
use crate::operations::triangulation::{Triangulate2D, Triangulation, validation};

pub const SQRT_3: f64 = 1.7320508075688772;

/// Incremental Delaunay triangulation (Bowyer-Watson).
///
/// Points are inserted one at a time in input order. Each insertion removes
/// the triangles whose circumcircle strictly contains the new point and fans
/// the boundary of the resulting cavity around it. The scan over triangles is
/// linear; there is no point-location structure.
#[derive(Clone, Debug, Default)]
pub struct BowyerWatson {
    config: TriangulatorConfig,
}

impl BowyerWatson {
    pub fn new(config: TriangulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriangulatorConfig {
        &self.config
    }

    /// Equilateral triangle centred on the box covering the domain and the
    /// points, with inradius `bounding_scale * largest extent + 1`.
    ///
    /// Fails with [`MeshError::InvalidDomain`], reporting the covering box,
    /// when a vertex of that triangle does not fit in an `f64`.
    pub fn bounding_triangle(&self, points: &[Point2], width: f64, height: f64) -> Result<Triangle> {
        let mut bbox = Aabb2::from_extent(width, height);
        if let Some(cloud) = Aabb2::from_points(points) {
            bbox = bbox.union(&cloud);
        }

        let c = bbox.center();
        let r = self.config.bounding_scale * bbox.largest_extent() + 1.0;

        let top = Point2::new(c.x, c.y + 2.0 * r);
        let left = Point2::new(c.x - SQRT_3 * r, c.y - r);
        let right = Point2::new(c.x + SQRT_3 * r, c.y - r);
        if ![top, left, right].iter().all(Point2::is_finite) {
            return Err(MeshError::InvalidDomain {
                width: bbox.width(),
                height: bbox.height(),
            });
        }
        Triangle::new(left, right, top)
    }

    /// Finite, de-duplicated points in input order.
    fn accept_points(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        let mut seen = AHashSet::with_capacity(points.len());
        let mut accepted = Vec::with_capacity(points.len());

        for (index, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(MeshError::NonFinitePoint { point: *p, index });
            }
            if !seen.insert(*p) {
                match self.config.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(MeshError::DuplicatePoint { point: *p, index });
                    }
                    DuplicatePolicy::Skip => {
                        log::warn!("skipping duplicate point {p} at input position {index}");
                        continue;
                    }
                }
            }
            accepted.push(*p);
        }

        Ok(accepted)
    }

    /// Insert a single point using Bowyer-Watson algorithm
    fn insert_point(p: Point2, triangles: &mut AHashSet<Triangle>) -> Result<()> {
        // Find triangles whose circumcircle contains p
        let bad: SmallVec<[Triangle; 16]> = triangles
            .iter()
            .filter(|t| t.circumcircle_contains(&p))
            .copied()
            .collect();

        // p is strictly inside the bounding triangle and distinct from every
        // vertex, so some circumcircle always contains it.
        debug_assert!(!bad.is_empty(), "no triangle contains {p}");

        // Find cavity boundary
        let mut edge_count: AHashMap<CanonicalEdge, u32> = AHashMap::with_capacity(bad.len() * 3);
        for t in &bad {
            for edge in t.edges() {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        // Boundary edges appear exactly once
        let fan = edge_count
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(edge, _)| Triangle::new(edge.a, edge.b, p))
            .collect::<Result<SmallVec<[Triangle; 16]>>>()?;

        log::trace!(
            "inserted {p}: {} bad triangles, {} boundary edges",
            bad.len(),
            fan.len()
        );

        for t in &bad {
            triangles.remove(t);
        }
        triangles.extend(fan);
        Ok(())
    }
}

impl Triangulate2D for BowyerWatson {
    fn triangulate(&self, points: &[Point2], width: f64, height: f64) -> Result<Triangulation> {
        self.config.validate()?;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MeshError::InvalidDomain { width, height });
        }

        let points = self.accept_points(points)?;
        let bounding = self.bounding_triangle(&points, width, height)?;
        log::debug!(
            "triangulating {} points in a {width} x {height} domain",
            points.len()
        );

        let mut triangles = AHashSet::with_capacity(2 * points.len() + 1);
        triangles.insert(bounding);
        for p in &points {
            Self::insert_point(*p, &mut triangles)?;
        }

        let mut triangles: Vec<Triangle> = triangles.into_iter().collect();
        triangles.sort_unstable();

        let mut triangulation = Triangulation::new(points, triangles, bounding);
        let removed = triangulation.remove_bounding();
        log::debug!(
            "triangulation done: {} triangles kept, {removed} bounding triangles removed",
            triangulation.len()
        );

        if self.config.verify {
            validation::check(triangulation.triangles(), triangulation.points())?;
        }

        Ok(triangulation)
    }
}

/// Triangulates with the default configuration.
pub fn triangulate(points: &[Point2], width: f64, height: f64) -> Result<Triangulation> {
    BowyerWatson::default().triangulate(points, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn bounding_triangle_encloses_domain_and_points() {
        let bw = BowyerWatson::default();
        let pts = [p(0.0, 0.0), p(30.0, 5.0), p(-4.0, 12.0)];
        let bounding = bw.bounding_triangle(&pts, 20.0, 10.0).unwrap();

        let mut probe = Aabb2::from_extent(20.0, 10.0);
        for q in &pts {
            probe.include(q);
        }
        let corners = [
            probe.min,
            probe.max,
            p(probe.min.x, probe.max.y),
            p(probe.max.x, probe.min.y),
        ];
        let [a, b, c] = bounding.vertices();
        for q in &corners {
            // strictly left of every counter-clockwise edge
            for (u, v) in [(a, b), (b, c), (c, a)] {
                assert!(crate::kernel::orient2d(u, v, q) > 0.0);
            }
        }
    }

    #[test]
    fn duplicate_is_rejected_by_default() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
        let err = triangulate(&pts, 1.0, 1.0).unwrap_err();
        match err {
            MeshError::DuplicatePoint { point, index } => {
                assert_eq!(point, p(1.0, 0.0));
                assert_eq!(index, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn duplicate_can_be_skipped() {
        let bw = BowyerWatson::new(TriangulatorConfig {
            duplicate_policy: DuplicatePolicy::Skip,
            ..Default::default()
        });
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        let tri = bw.triangulate(&pts, 1.0, 1.0).unwrap();
        assert_eq!(tri.points().len(), 3);
        assert_eq!(tri.len(), 1);
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let pts = [p(0.0, 0.0), p(f64::NAN, 1.0), p(0.0, 1.0)];
        assert!(matches!(
            triangulate(&pts, 1.0, 1.0),
            Err(MeshError::NonFinitePoint { index: 1, .. })
        ));
    }

    #[test]
    fn invalid_domain_is_rejected_before_work() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0)];
        // the duplicate would fail too; the domain check comes first
        assert!(matches!(
            triangulate(&pts, 0.0, 5.0),
            Err(MeshError::InvalidDomain { .. })
        ));
        assert!(matches!(
            triangulate(&pts, 3.0, -1.0),
            Err(MeshError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn unenclosable_extent_is_invalid_domain() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(matches!(
            triangulate(&pts, 1e300, 1e300),
            Err(MeshError::InvalidDomain { .. })
        ));

        let far = [p(0.0, 0.0), p(1e299, 0.0), p(0.0, 1e299)];
        match triangulate(&far, 1.0, 1.0) {
            Err(MeshError::InvalidDomain { width, height }) => {
                assert_eq!((width, height), (1e299, 1e299));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn small_scale_reaches_larger_extents() {
        let bw = BowyerWatson::new(TriangulatorConfig {
            bounding_scale: 1.0,
            ..Default::default()
        });
        assert_eq!(bw.config().bounding_scale, 1.0);

        let pts = [p(0.0, 0.0), p(1e299, 0.0), p(0.0, 1e299)];
        let tri = bw.triangulate(&pts, 1.0, 1.0).unwrap();
        assert_eq!(tri.len(), 1);
    }

    #[test]
    fn fewer_than_three_points_give_nothing() {
        assert!(triangulate(&[], 1.0, 1.0).unwrap().is_empty());
        assert!(triangulate(&[p(0.5, 0.5), p(0.2, 0.1)], 1.0, 1.0)
            .unwrap()
            .is_empty());
    }
}
