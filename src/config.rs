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


use crate::error::{MeshError, Result};

/// What the triangulator does with a point equal to one already inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Abort the run with [`MeshError::DuplicatePoint`].
    #[default]
    Reject,
    /// Drop the repeated point, log a warning and keep going.
    Skip,
}

/// 2^30. Near-collinear points on the hull of a raster up to tens of thousands
/// of samples across keep their hull triangles at this scale.
pub const DEFAULT_BOUNDING_SCALE: f64 = 1_073_741_824.0;

#[derive(Clone, Debug)]
pub struct TriangulatorConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// The bounding triangle's inradius is `bounding_scale * max(extent) + 1`.
    pub bounding_scale: f64,
    /// Run the empty-circumcircle check on the result and fail on a violation.
    pub verify: bool,
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            bounding_scale: DEFAULT_BOUNDING_SCALE,
            verify: false,
        }
    }
}

impl TriangulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.bounding_scale.is_finite() || self.bounding_scale < 1.0 {
            return Err(MeshError::InvalidConfig(format!(
                "bounding_scale must be finite and >= 1, got {}",
                self.bounding_scale
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct QuadtreeConfig {
    /// Cells with a side at or below this size are never split.
    pub size_threshold: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self { size_threshold: 1 }
    }
}

impl QuadtreeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size_threshold == 0 {
            return Err(MeshError::InvalidThreshold(self.size_threshold));
        }
        Ok(())
    }
}

/// Controls which raster samples become triangulation input points.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Black samples are kept when both coordinates are multiples of `stride`.
    pub stride: usize,
    /// White samples are kept on a `gap` x `gap` grid.
    pub gap: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { stride: 2, gap: 50 }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 || self.gap == 0 {
            return Err(MeshError::InvalidConfig(format!(
                "sampler stride and gap must be >= 1, got stride {} and gap {}",
                self.stride, self.gap
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SmoothingConfig {
    /// Nodes closer than this distance count as neighbours.
    pub radius: f64,
    pub iterations: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            iterations: 1,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::InvalidConfig(format!(
                "smoothing radius must be finite and positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}
