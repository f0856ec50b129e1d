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


//! Mesh generation from raster occupancy data.
//!
//! Two independent kernels live here:
//! - [`quadtree`] decomposes the raster domain into axis-aligned cells tagged
//!   by occupancy (structured mesh).
//! - [`operations::triangulation`] builds a Delaunay triangulation over points
//!   sampled from the raster with the Bowyer-Watson algorithm (unstructured mesh).
//!
//! Raster decoding and rendering are left to the caller; the raster is reached
//! through the [`raster::OccupancySource`] trait.

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod operations;
pub mod quadtree;
pub mod raster;

pub use config::{DuplicatePolicy, QuadtreeConfig, SamplerConfig, SmoothingConfig, TriangulatorConfig};
pub use error::{MeshError, Result};
pub use geometry::{Point2, Triangle};
