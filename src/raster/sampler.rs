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


use ahash::AHashSet;
use rand::Rng;

use crate::config::SamplerConfig;
use crate::error::{MeshError, Result};
use crate::geometry::Point2;
use crate::raster::{Occupancy, OccupancySource};

/// Triangulation input points taken from a raster.
///
/// Black samples whose coordinates are both multiples of `stride` come first,
/// then white samples on the `gap` grid; each pass runs row by row. The two
/// passes pick disjoint samples, so the output has no duplicates.
pub fn sample_points<S: OccupancySource + ?Sized>(
    source: &S,
    config: &SamplerConfig,
) -> Result<Vec<Point2>> {
    config.validate()?;
    let (width, height) = (source.width(), source.height());

    let mut points = Vec::new();
    for y in (0..height).step_by(config.stride) {
        for x in (0..width).step_by(config.stride) {
            if source.sample(x, y) == Occupancy::Black {
                points.extend(Point2::from_primitive(x, y));
            }
        }
    }
    let black = points.len();

    for y in (0..height).step_by(config.gap) {
        for x in (0..width).step_by(config.gap) {
            if source.sample(x, y) == Occupancy::White {
                points.extend(Point2::from_primitive(x, y));
            }
        }
    }

    log::debug!(
        "sampled {black} black and {} white points from a {width} x {height} raster",
        points.len() - black
    );
    Ok(points)
}

/// `count` distinct integer points in `[0, width) x [0, height)`.
pub fn random_points<R: Rng + ?Sized>(
    count: usize,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Vec<Point2>> {
    if count > width.saturating_mul(height) {
        return Err(MeshError::InvalidConfig(format!(
            "cannot draw {count} distinct points from a {width} x {height} grid"
        )));
    }

    let mut seen = AHashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        if seen.insert((x, y)) {
            points.extend(Point2::from_primitive(x, y));
        }
    }
    Ok(points)
}

/// Keeps the first occurrence of every point, preserving order.
pub fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut seen = AHashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let pts = [
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(
            dedup_points(&pts),
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn random_points_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = random_points(50, 10, 8, &mut rng).unwrap();
        assert_eq!(pts.len(), 50);
        assert_eq!(dedup_points(&pts).len(), 50);
        assert!(pts
            .iter()
            .all(|p| (0.0..10.0).contains(&p.x) && (0.0..8.0).contains(&p.y)));
    }

    #[test]
    fn too_many_random_points() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_points(10, 3, 3, &mut rng).is_err());
    }
}
