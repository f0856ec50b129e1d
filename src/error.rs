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


use thiserror::Error;

use crate::geometry::{Point2, Triangle};

pub type Result<T> = std::result::Result<T, MeshError>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("points {a}, {b} and {c} are collinear and cannot form a triangle")]
    DegenerateGeometry { a: Point2, b: Point2, c: Point2 },
    #[error("point {point} at input position {index} is a duplicate")]
    DuplicatePoint { point: Point2, index: usize },
    #[error("point {point} at input position {index} has a non-finite coordinate")]
    NonFinitePoint { point: Point2, index: usize },
    #[error("triangle {a}, {b}, {c} has a non-finite vertex")]
    NonFiniteTriangle { a: Point2, b: Point2, c: Point2 },
    #[error("domain of {width} x {height} is empty, non-finite or too large to enclose")]
    InvalidDomain { width: f64, height: f64 },
    #[error("quadtree size threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed raster: {0}")]
    InvalidRaster(String),
    #[error("triangle {triangle} has {point} strictly inside its circumcircle")]
    ValidationFailure { triangle: Triangle, point: Point2 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
