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


use std::fs;

use rastermesh::geometry::Point2;
use rastermesh::io::{save_elements, save_mesh, write_elements, write_mesh};
use rastermesh::operations::triangulation::IndexedMesh;
use rastermesh::quadtree::Quadtree;
use rastermesh::raster::{Bitmap, Occupancy};
use rastermesh::{MeshError, QuadtreeConfig};

fn checkerboard_2x2() -> Quadtree {
    let bmp = Bitmap::from_fn(2, 2, |x, y| {
        if x == y {
            Occupancy::Black
        } else {
            Occupancy::White
        }
    });
    Quadtree::from_source(&bmp, &QuadtreeConfig::default()).unwrap()
}

fn square_mesh() -> IndexedMesh {
    IndexedMesh {
        nodes: vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.5),
            Point2::new(-0.25, 1.0),
        ],
        elements: vec![[0, 1, 2], [0, 2, 3]],
    }
}

#[test]
fn element_lines_list_four_corners_and_tag() {
    let tree = checkerboard_2x2();
    let mut out = Vec::new();
    write_elements(tree.leaves(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Element 0 node_1 = 0,0; node_2 = 1,0; node_3 = 0,1; node_4 = 1,1; Type = 1",
            "Element 1 node_1 = 0,1; node_2 = 1,1; node_3 = 0,2; node_4 = 1,2; Type = 1",
            "Element 2 node_1 = 1,0; node_2 = 2,0; node_3 = 1,1; node_4 = 2,1; Type = 1",
            "Element 3 node_1 = 1,1; node_2 = 2,1; node_3 = 1,2; node_4 = 2,2; Type = 1",
        ]
    );
}

#[test]
fn mixed_cells_are_tagged_zero() {
    let bmp = Bitmap::from_ascii("#.\n.#").unwrap();
    let tree = Quadtree::from_source(&bmp, &QuadtreeConfig { size_threshold: 2 }).unwrap();
    let mut out = Vec::new();
    write_elements(tree.leaves(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Element 0 node_1 = 0,0; node_2 = 2,0; node_3 = 0,2; node_4 = 2,2; Type = 0\n"
    );
}

#[test]
fn mesh_sections_use_zero_based_indices() {
    let mut out = Vec::new();
    write_mesh(&square_mesh(), &mut out).unwrap();

    let expected = "\
Nodes
0 0 0
1 1 0
2 0.5 1.5
3 -0.25 1
Elements
0 0 1 2
1 0 2 3
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn save_writes_the_same_text() {
    let dir = std::env::temp_dir();
    let mesh_path = dir.join(format!("rastermesh-nodes-{}.txt", std::process::id()));
    let elem_path = dir.join(format!("rastermesh-elements-{}.txt", std::process::id()));

    save_mesh(&square_mesh(), &mesh_path).unwrap();
    let mut expected = Vec::new();
    write_mesh(&square_mesh(), &mut expected).unwrap();
    assert_eq!(fs::read(&mesh_path).unwrap(), expected);

    let tree = checkerboard_2x2();
    save_elements(&tree, &elem_path).unwrap();
    assert_eq!(fs::read_to_string(&elem_path).unwrap().lines().count(), 4);

    fs::remove_file(mesh_path).unwrap();
    fs::remove_file(elem_path).unwrap();
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let path = std::env::temp_dir()
        .join("rastermesh-no-such-dir")
        .join("mesh.txt");
    assert!(matches!(
        save_mesh(&square_mesh(), &path),
        Err(MeshError::Io(_))
    ));
}
