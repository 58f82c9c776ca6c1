//! Derived mesh connectivity.
//!
//! A [`QuadMesh`] carries no adjacency data; this module derives it. The
//! undirected edge set, with per-edge face incidence, comes from a single
//! pass over the face list ([`extract_edges`]). [`Incidence`] then maps
//! every point and every face to its incident edge indices, so later
//! stages resolve corners in constant time instead of rescanning the edge
//! list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::mesh::QuadMesh;

/// An undirected edge with its face incidence.
///
/// Endpoints are stored canonically with `a < b`; `edge(a, b)` and
/// `edge(b, a)` denote the same edge. `face_b` is `None` for boundary
/// edges (edges bordering exactly one face).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Smaller endpoint index.
    pub a: usize,
    /// Larger endpoint index.
    pub b: usize,
    /// The face that first produced this edge.
    pub face_a: usize,
    /// The second face sharing this edge, or `None` on the boundary.
    pub face_b: Option<usize>,
}

impl Edge {
    /// Whether this edge borders exactly one face.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face_b.is_none()
    }

    /// Whether `v` is one of this edge's endpoints.
    #[inline]
    pub fn has_endpoint(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }
}

/// State of a point pair while scanning the face list.
enum EdgeSlot {
    /// Seen once; remembers the originating face and discovery order.
    Open { face: usize, seq: usize },
    /// Seen twice; a third occurrence is non-manifold.
    Shared,
}

/// Derive the undirected edge set of a quad mesh.
///
/// Each face contributes its 4 sides (consecutive corner pairs, wrapping).
/// Sides are matched across faces by their unordered point-index pair.
/// Interior edges are emitted in the order their second occurrence is
/// discovered (face-major, side-minor within a face); boundary edges
/// follow, in first-occurrence order. This ordering is deterministic and
/// fixes the edge-point index range of the subdivided mesh.
///
/// # Errors
/// Returns [`TopologyError::NonManifoldEdge`] if any point pair occurs in
/// more than two faces.
///
/// # Example
/// ```
/// use tessel::prelude::*;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = QuadMesh::new(points, vec![[0, 1, 2, 3]]).unwrap();
///
/// let edges = extract_edges(&mesh).unwrap();
/// assert_eq!(edges.len(), 4);
/// assert!(edges.iter().all(|e| e.is_boundary()));
/// ```
pub fn extract_edges(mesh: &QuadMesh) -> Result<Vec<Edge>> {
    let mut seen: HashMap<(usize, usize), EdgeSlot> =
        HashMap::with_capacity(mesh.num_faces() * 2);
    let mut edges = Vec::with_capacity(mesh.num_faces() * 2);
    let mut seq = 0;

    for (fi, face) in mesh.faces().iter().enumerate() {
        for side in 0..4 {
            let s = face[side];
            let t = face[(side + 1) % 4];
            let key = if s < t { (s, t) } else { (t, s) };

            match seen.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(EdgeSlot::Open { face: fi, seq });
                    seq += 1;
                }
                Entry::Occupied(mut slot) => {
                    match std::mem::replace(slot.get_mut(), EdgeSlot::Shared) {
                        EdgeSlot::Open { face, .. } => edges.push(Edge {
                            a: key.0,
                            b: key.1,
                            face_a: face,
                            face_b: Some(fi),
                        }),
                        EdgeSlot::Shared => {
                            return Err(
                                TopologyError::NonManifoldEdge { v0: key.0, v1: key.1 }.into()
                            );
                        }
                    }
                }
            }
        }
    }

    // Unmatched sides are boundary edges; append them in discovery order.
    let mut open: Vec<(usize, (usize, usize), usize)> = seen
        .into_iter()
        .filter_map(|(key, slot)| match slot {
            EdgeSlot::Open { face, seq } => Some((seq, key, face)),
            EdgeSlot::Shared => None,
        })
        .collect();
    open.sort_unstable_by_key(|&(seq, _, _)| seq);
    edges.extend(open.into_iter().map(|(_, (a, b), face)| Edge {
        a,
        b,
        face_a: face,
        face_b: None,
    }));

    Ok(edges)
}

/// Point and face incidence over a derived edge set.
///
/// Built once per subdivision call in linear time; maps every point to
/// the edges touching it and every face to the edges bordering it.
#[derive(Debug)]
pub struct Incidence {
    vertex_edges: Vec<Vec<usize>>,
    face_edges: Vec<Vec<usize>>,
}

impl Incidence {
    /// Build incidence maps for `edges` over a mesh with the given point
    /// and face counts.
    pub fn build(edges: &[Edge], num_points: usize, num_faces: usize) -> Self {
        let mut vertex_edges = vec![Vec::new(); num_points];
        let mut face_edges = vec![Vec::new(); num_faces];

        for (ei, edge) in edges.iter().enumerate() {
            vertex_edges[edge.a].push(ei);
            vertex_edges[edge.b].push(ei);
            face_edges[edge.face_a].push(ei);
            if let Some(fb) = edge.face_b {
                face_edges[fb].push(ei);
            }
        }

        Self { vertex_edges, face_edges }
    }

    /// Indices of the edges incident to point `v`. The length of this
    /// slice is the point's valence.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn vertex_edges(&self, v: usize) -> &[usize] {
        &self.vertex_edges[v]
    }

    /// Indices of the edges bordering face `f`.
    ///
    /// # Panics
    /// Panics if `f` is out of range.
    #[inline]
    pub fn face_edges(&self, f: usize) -> &[usize] {
        &self.face_edges[f]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use nalgebra::Point3;

    fn quad_cube() -> QuadMesh {
        let points = vec![
            // Bottom face (z = 0)
            Point3::new(0.0, 0.0, 0.0), // 0
            Point3::new(1.0, 0.0, 0.0), // 1
            Point3::new(1.0, 1.0, 0.0), // 2
            Point3::new(0.0, 1.0, 0.0), // 3
            // Top face (z = 1)
            Point3::new(0.0, 0.0, 1.0), // 4
            Point3::new(1.0, 0.0, 1.0), // 5
            Point3::new(1.0, 1.0, 1.0), // 6
            Point3::new(0.0, 1.0, 1.0), // 7
        ];
        let faces = vec![
            [0, 3, 2, 1], // Bottom (outward when viewed from below)
            [4, 5, 6, 7], // Top
            [0, 1, 5, 4], // Front
            [2, 3, 7, 6], // Back
            [0, 4, 7, 3], // Left
            [1, 2, 6, 5], // Right
        ];
        QuadMesh::new(points, faces).unwrap()
    }

    fn two_quads() -> QuadMesh {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2, 3], [1, 4, 5, 2]];
        QuadMesh::new(points, faces).unwrap()
    }

    #[test]
    fn test_cube_edges() {
        let mesh = quad_cube();
        let edges = extract_edges(&mesh).unwrap();

        // A cube has 12 edges, all interior.
        assert_eq!(edges.len(), 12);
        assert!(edges.iter().all(|e| !e.is_boundary()));

        // Every edge joins two distinct faces.
        for edge in &edges {
            assert_ne!(Some(edge.face_a), edge.face_b);
        }
    }

    #[test]
    fn test_cube_edge_order_is_deterministic() {
        let mesh = quad_cube();
        let edges = extract_edges(&mesh).unwrap();

        // The first pair to recur is (0, 1): seen in face 0 as the side
        // (1, 0), matched by face 2's side (0, 1).
        assert_eq!(edges[0].a, 0);
        assert_eq!(edges[0].b, 1);
        assert_eq!(edges[0].face_a, 0);
        assert_eq!(edges[0].face_b, Some(2));

        let again = extract_edges(&mesh).unwrap();
        assert_eq!(edges, again);
    }

    #[test]
    fn test_two_quads_shared_edge() {
        let mesh = two_quads();
        let edges = extract_edges(&mesh).unwrap();

        // 7 edges total; the shared edge (1, 2) is interior and, having
        // recurred first, comes before the 6 boundary edges.
        assert_eq!(edges.len(), 7);
        assert_eq!((edges[0].a, edges[0].b), (1, 2));
        assert!(!edges[0].is_boundary());
        assert_eq!(edges.iter().filter(|e| e.is_boundary()).count(), 6);
    }

    #[test]
    fn test_boundary_edges_keep_discovery_order() {
        let mesh = two_quads();
        let edges = extract_edges(&mesh).unwrap();

        // Face 0 contributes its unmatched sides in side order, then face 1.
        let boundary: Vec<(usize, usize)> =
            edges.iter().filter(|e| e.is_boundary()).map(|e| (e.a, e.b)).collect();
        assert_eq!(boundary, vec![(0, 1), (2, 3), (0, 3), (1, 4), (4, 5), (2, 5)]);
    }

    #[test]
    fn test_non_manifold_edge() {
        // Three quads sharing the side (0, 1).
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2, 3], [1, 0, 5, 4], [0, 1, 6, 7]];
        let mesh = QuadMesh::new(points, faces).unwrap();

        let result = extract_edges(&mesh);
        assert!(matches!(
            result,
            Err(MeshError::Topology(TopologyError::NonManifoldEdge { v0: 0, v1: 1 }))
        ));
    }

    #[test]
    fn test_cube_incidence() {
        let mesh = quad_cube();
        let edges = extract_edges(&mesh).unwrap();
        let incidence = Incidence::build(&edges, mesh.num_points(), mesh.num_faces());

        // Every cube corner has valence 3; every face borders 4 edges.
        for v in 0..mesh.num_points() {
            assert_eq!(incidence.vertex_edges(v).len(), 3);
        }
        for f in 0..mesh.num_faces() {
            assert_eq!(incidence.face_edges(f).len(), 4);
        }

        // Incident edges actually touch their point and face.
        for v in 0..mesh.num_points() {
            for &ei in incidence.vertex_edges(v) {
                assert!(edges[ei].has_endpoint(v));
            }
        }
        for f in 0..mesh.num_faces() {
            for &ei in incidence.face_edges(f) {
                let edge = &edges[ei];
                assert!(edge.face_a == f || edge.face_b == Some(f));
            }
        }
    }
}
