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

use crate::{error::Result, operations::triangulation::IndexedMesh};

/// Write an unstructured mesh.
/// Format:
///   Nodes
///   <i> x y
///   ...
///   Elements
///   <j> v0 v1 v2   (zero-based node indices)
pub fn write_mesh<W: Write + ?Sized>(mesh: &IndexedMesh, out: &mut W) -> io::Result<()> {
    writeln!(out, "Nodes")?;
    for (i, p) in mesh.nodes.iter().enumerate() {
        writeln!(out, "{i} {} {}", p.x, p.y)?;
    }

    writeln!(out, "Elements")?;
    for (j, [a, b, c]) in mesh.elements.iter().enumerate() {
        writeln!(out, "{j} {a} {b} {c}")?;
    }
    Ok(())
}

/// Write `mesh` to a file.
pub fn save_mesh<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_mesh(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}
