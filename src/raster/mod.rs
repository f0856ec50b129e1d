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


//! The raster seen as an injected data provider.
//!
//! Decoding image files is up to the caller: anything that can answer
//! "which class is the sample at (x, y)" implements [`OccupancySource`].

use crate::error::{MeshError, Result};

pub mod sampler;

pub use sampler::{dedup_points, random_points, sample_points};

/// Binary class of a raster sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// Material / foreground (a black pixel).
    Black,
    /// Background (a white pixel).
    White,
}

pub trait OccupancySource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Class at column `x`, row `y`. Coordinates outside the raster read as
    /// [`Occupancy::White`].
    fn sample(&self, x: usize, y: usize) -> Occupancy;
}

impl<S: OccupancySource + ?Sized> OccupancySource for &S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn sample(&self, x: usize, y: usize) -> Occupancy {
        (**self).sample(x, y)
    }
}

/// Sample counts per class over a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancyCount {
    pub black: usize,
    pub white: usize,
}

impl OccupancyCount {
    /// At most one class present.
    pub fn is_homogeneous(&self) -> bool {
        self.black == 0 || self.white == 0
    }

    /// The single class present, if there is exactly one.
    pub fn uniform_class(&self) -> Option<Occupancy> {
        match (self.black, self.white) {
            (0, 0) => None,
            (_, 0) => Some(Occupancy::Black),
            (0, _) => Some(Occupancy::White),
            _ => None,
        }
    }
}

/// Counts the classes over the `width` x `height` rectangle at `(x0, y0)`.
pub fn count_occupancy<S: OccupancySource + ?Sized>(
    source: &S,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> OccupancyCount {
    let mut count = OccupancyCount::default();
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            match source.sample(x, y) {
                Occupancy::Black => count.black += 1,
                Occupancy::White => count.white += 1,
            }
        }
    }
    count
}

/// Row-major in-memory raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    cells: Vec<Occupancy>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, fill: Occupancy) -> Self {
        Bitmap {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Occupancy,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Bitmap {
            width,
            height,
            cells,
        }
    }

    /// Parses rows of `#` (black) and `.` (white). Blank lines are skipped;
    /// all rows must have the same length.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MeshError::InvalidRaster(format!(
                    "bitmap row {y} has {} samples, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '#' => Occupancy::Black,
                    '.' => Occupancy::White,
                    other => {
                        return Err(MeshError::InvalidRaster(format!(
                            "unexpected bitmap character {other:?} at ({x}, {y})"
                        )));
                    }
                });
            }
        }

        Ok(Bitmap {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn set(&mut self, x: usize, y: usize, value: Occupancy) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }
}

impl OccupancySource for Bitmap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> Occupancy {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Occupancy::White
        }
    }
}
