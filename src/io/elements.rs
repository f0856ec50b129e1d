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


use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{error::Result, quadtree::QuadNode, quadtree::Quadtree};

/// Write structured-mesh cells, one line each:
///   Element <i> node_1 = x0,y0; node_2 = x1,y0; node_3 = x0,y1; node_4 = x1,y1; Type = <tag>
/// where (x1, y1) is the far corner and the tag is 1 for a homogeneous cell,
/// 0 for a mixed one. Leaves are quadrilateral elements, so the line carries
/// all four corner nodes rather than a triangle's three.
pub fn write_elements<'a, I, W>(leaves: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a QuadNode>,
    W: Write + ?Sized,
{
    for (i, cell) in leaves.into_iter().enumerate() {
        let (x0, y0) = (cell.x0, cell.y0);
        let (x1, y1) = (x0 + cell.width, y0 + cell.height);
        writeln!(
            out,
            "Element {i} node_1 = {x0},{y0}; node_2 = {x1},{y0}; node_3 = {x0},{y1}; node_4 = {x1},{y1}; Type = {}",
            cell.tag()
        )?;
    }
    Ok(())
}

/// Write the leaves of `tree` to a file.
pub fn save_elements<P: AsRef<Path>>(tree: &Quadtree, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_elements(tree.leaves(), &mut out)?;
    out.flush()?;
    Ok(())
}
