//! Mesh data structures and derived connectivity.
//!
//! The primary type is [`QuadMesh`], a validated face-vertex quad mesh:
//! an ordered point sequence plus ordered 4-tuples of point indices. It
//! carries no adjacency data of its own; [`extract_edges`] derives the
//! undirected edge set with face incidence, and [`Incidence`] indexes
//! those edges by point and by face for constant-time lookups.
//!
//! # Construction
//!
//! ```
//! use tessel::mesh::QuadMesh;
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2, 3]];
//!
//! let mesh = QuadMesh::new(points, faces).unwrap();
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod quad;
mod topology;

pub use quad::QuadMesh;
pub use topology::{extract_edges, Edge, Incidence};
