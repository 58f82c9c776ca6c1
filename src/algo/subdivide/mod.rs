//! Mesh subdivision algorithms.
//!
//! # Catmull-Clark Subdivision (Quad Meshes)
//!
//! Catmull-Clark subdivision (Catmull & Clark, 1978) is an approximating
//! subdivision scheme for quad meshes. Each step:
//!
//! 1. Creates a face point at each face centroid
//! 2. Creates edge points as the mean of each edge's endpoints and its
//!    adjacent face points
//! 3. Repositions the original points using a weighted average of their
//!    neighborhood
//! 4. Connects the three point sets into 4 new quads per original face
//!
//! The result converges to a C² continuous surface (C¹ at extraordinary
//! vertices). One call performs exactly one step; refine further by
//! feeding the output back in.
//!
//! # Example
//!
//! ```no_run
//! use tessel::prelude::*;
//! use tessel::algo::subdivide::catmull_clark_subdivide;
//!
//! # fn load_mesh() -> QuadMesh { unimplemented!() }
//! let mut mesh: QuadMesh = load_mesh();
//! for _ in 0..3 {
//!     mesh = catmull_clark_subdivide(&mesh).unwrap();
//! }
//! ```
//!
//! # References
//!
//! - Catmull, E. & Clark, J. (1978). "Recursively generated B-spline
//!   surfaces on arbitrary topological meshes." Computer-Aided Design,
//!   10(6), 350-355.

mod catmull_clark;

pub use catmull_clark::catmull_clark_subdivide;
