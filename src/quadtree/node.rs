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


use crate::raster::{Occupancy, OccupancySource, count_occupancy};

/// What a node knows about the samples under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Both classes present. Leaves stay mixed when they reach the size
    /// threshold; internal nodes are always mixed.
    Mixed,
    /// A single class covers the whole cell.
    Uniform(Occupancy),
}

/// Axis-aligned raster cell with zero or four children.
#[derive(Clone, Debug)]
pub struct QuadNode {
    pub x0: usize,
    pub y0: usize,
    pub width: usize,
    pub height: usize,
    kind: CellKind,
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    pub fn new(x0: usize, y0: usize, width: usize, height: usize) -> Self {
        QuadNode {
            x0,
            y0,
            width,
            height,
            kind: CellKind::Mixed,
            children: None,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Top-left, bottom-left, top-right, bottom-right.
    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        self.children.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Element type tag: 1 for a homogeneous cell, 0 otherwise.
    pub fn tag(&self) -> u8 {
        match self.kind {
            CellKind::Uniform(_) => 1,
            CellKind::Mixed => 0,
        }
    }

    /// Number of levels below this node; 0 for a leaf.
    pub fn depth(&self) -> usize {
        self.children().map_or(0, |cs| {
            1 + cs.iter().map(QuadNode::depth).max().unwrap_or(0)
        })
    }

    /// Depth-first leaves, children visited top-left, bottom-left, top-right,
    /// bottom-right.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

pub struct Leaves<'a> {
    stack: Vec<&'a QuadNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a QuadNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.children() {
                // reversed so the top-left child is popped first
                Some(children) => self.stack.extend(children.iter().rev()),
                None => return Some(node),
            }
        }
        None
    }
}

/// Splits `node` until every leaf is homogeneous or has a side at or below
/// `size_threshold`. Odd sides give the extra sample to the right and bottom
/// halves. A threshold of 0 behaves like 1, so no cell is ever empty.
pub fn subdivide<S: OccupancySource + ?Sized>(node: &mut QuadNode, size_threshold: usize, source: &S) {
    let threshold = size_threshold.max(1);

    let count = count_occupancy(source, node.x0, node.y0, node.width, node.height);
    if count.is_homogeneous() {
        node.kind = CellKind::Uniform(count.uniform_class().unwrap_or(Occupancy::White));
        return;
    }

    if node.width <= threshold || node.height <= threshold {
        return;
    }

    let w1 = node.width / 2;
    let w2 = node.width - w1;
    let h1 = node.height / 2;
    let h2 = node.height - h1;
    let (x0, y0) = (node.x0, node.y0);

    let mut children = Box::new([
        QuadNode::new(x0, y0, w1, h1),           // top left
        QuadNode::new(x0, y0 + h1, w1, h2),      // btm left
        QuadNode::new(x0 + w1, y0, w2, h1),      // top right
        QuadNode::new(x0 + w1, y0 + h1, w2, h2), // btm right
    ]);
    for child in children.iter_mut() {
        subdivide(child, threshold, source);
    }
    node.children = Some(children);
}
