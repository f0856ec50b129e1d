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


use rastermesh::geometry::{Point2, Triangle};
use rastermesh::operations::triangulation::delaunay::triangulate;
use rastermesh::operations::triangulation::validation::{check, find_violation, validate};
use rastermesh::MeshError;

fn hexagon_with_center() -> Vec<Point2> {
    let mut pts: Vec<Point2> = (0..6)
        .map(|k| {
            let angle = k as f64 * std::f64::consts::FRAC_PI_3;
            Point2::new(10.0 + 5.0 * angle.cos(), 10.0 + 5.0 * angle.sin())
        })
        .collect();
    pts.push(Point2::new(10.3, 9.8));
    pts
}

#[test]
fn triangulator_output_passes() {
    let pts = hexagon_with_center();
    let tri = triangulate(&pts, 20.0, 20.0).unwrap();
    assert_eq!(tri.len(), 6);
    assert!(validate(tri.triangles(), &pts));
    assert!(check(tri.triangles(), &pts).is_ok());
}

#[test]
fn points_on_the_circle_are_not_violations() {
    // both diagonals of a square are valid Delaunay splits
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(3.0, 0.0);
    let c = Point2::new(3.0, 3.0);
    let d = Point2::new(0.0, 3.0);
    let pts = [a, b, c, d];

    let one = [Triangle::new(a, b, c).unwrap(), Triangle::new(a, c, d).unwrap()];
    let other = [Triangle::new(a, b, d).unwrap(), Triangle::new(b, c, d).unwrap()];
    assert!(validate(&one, &pts));
    assert!(validate(&other, &pts));
}

#[test]
fn extra_point_reports_its_triangle() {
    let pts = hexagon_with_center();
    let tri = triangulate(&pts, 20.0, 20.0).unwrap();

    let intruder = Point2::new(12.0, 10.5);
    let mut probe = pts.clone();
    probe.push(intruder);

    let (triangle, point) = find_violation(tri.triangles(), &probe).unwrap();
    assert_eq!(point, intruder);
    assert!(triangle.circumcircle_contains(&intruder));

    match check(tri.triangles(), &probe) {
        Err(MeshError::ValidationFailure { triangle: t, point: p }) => {
            assert_eq!(t, triangle);
            assert_eq!(p, intruder);
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }
}

#[test]
fn empty_input_is_trivially_valid() {
    assert!(validate(&[], &[]));
    assert!(find_violation(&[], &[Point2::new(1.0, 1.0)]).is_none());
}
