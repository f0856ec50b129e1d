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


pub mod node;

pub use node::{CellKind, Leaves, QuadNode, subdivide};

use crate::config::QuadtreeConfig;
use crate::error::{MeshError, Result};
use crate::raster::OccupancySource;

/// Structured mesh: the leaves of a quadtree over the raster domain.
#[derive(Clone, Debug)]
pub struct Quadtree {
    root: QuadNode,
    size_threshold: usize,
}

impl Quadtree {
    /// Decomposes the `width` x `height` domain at the origin.
    pub fn build<S: OccupancySource + ?Sized>(
        width: usize,
        height: usize,
        source: &S,
        config: &QuadtreeConfig,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MeshError::InvalidDomain {
                width: width as f64,
                height: height as f64,
            });
        }
        config.validate()?;

        let mut root = QuadNode::new(0, 0, width, height);
        subdivide(&mut root, config.size_threshold, source);

        let tree = Quadtree {
            root,
            size_threshold: config.size_threshold,
        };
        log::debug!(
            "quadtree over {width} x {height}: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Decomposes the whole raster of `source`.
    pub fn from_source<S: OccupancySource + ?Sized>(source: &S, config: &QuadtreeConfig) -> Result<Self> {
        Self::build(source.width(), source.height(), source, config)
    }

    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    pub fn size_threshold(&self) -> usize {
        self.size_threshold
    }

    pub fn leaves(&self) -> Leaves<'_> {
        self.root.leaves()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
