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


use rastermesh::kernel::{Orientation, orient2d, orientation};
use rastermesh::geometry::Point2;

#[test]
fn winding_follows_turn_direction() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(4.0, 0.0);
    let c = Point2::new(2.0, 3.0);

    assert_eq!(orientation(&a, &b, &c), Orientation::CounterClockwise);
    assert_eq!(orientation(&b, &c, &a), Orientation::CounterClockwise);
    assert_eq!(orientation(&a, &c, &b), Orientation::Clockwise);
    assert_eq!(orient2d(&a, &b, &c), 12.0);
}

#[test]
fn repeated_point_is_collinear() {
    let a = Point2::new(3.0, 7.0);
    let b = Point2::new(-1.0, 2.0);
    assert!(orientation(&a, &a, &b).is_collinear());
    assert!(orientation(&a, &b, &a).is_collinear());
}

#[test]
fn tiny_offsets_are_not_rounded_away() {
    // the naive determinant is swamped by cancellation at this offset
    let a = Point2::new(1.0e8, 1.0e8);
    let b = Point2::new(1.0e8 + 3.0, 1.0e8 + 3.0);
    let above = Point2::new(1.0e8 + 1.0, f64::from_bits((1.0e8 + 1.0f64).to_bits() + 1));
    let below = Point2::new(1.0e8 + 1.0, f64::from_bits((1.0e8 + 1.0f64).to_bits() - 1));

    assert_eq!(orientation(&a, &b, &above), Orientation::CounterClockwise);
    assert_eq!(orientation(&a, &b, &below), Orientation::Clockwise);
}
