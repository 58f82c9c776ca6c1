//! Catmull-Clark subdivision for closed quad meshes.

use nalgebra::{Point3, Vector3};

use crate::error::{Result, TopologyError};
use crate::mesh::{extract_edges, Edge, Incidence, QuadMesh};

/// Performs one step of Catmull-Clark subdivision on a closed quad mesh.
///
/// Catmull-Clark subdivision is an approximating scheme that produces
/// smooth surfaces from quad meshes. Each step quadruples the number of
/// quads; repeated refinement is the caller's loop, applying this
/// function to its own output.
///
/// # Algorithm
///
/// 1. Derive the edge set and its point/face incidence
/// 2. Compute face points (centroid of each face)
/// 3. Compute edge points (mean of both endpoints and both adjacent face points)
/// 4. Reposition original points using a weighted average
/// 5. Re-stitch the topology: each quad becomes 4 new quads
///
/// # Output layout
///
/// The result's point sequence is, in order: one edge point per edge
/// `[0, n)`, one face point per face `[n, n+k)`, and the repositioned
/// original points `[n+k, n+k+m)`. Each of the 4 sub-quads of a face
/// reads `[face point, edge point, repositioned corner, edge point]`,
/// winding the same way as the face it came from.
///
/// # Vertex rules
///
/// - **Face point**: centroid of the face's 4 corners
/// - **Edge point**: mean of the edge's endpoints and both adjacent face points
/// - **Repositioned point**: `(F + 2R + (n-3)S) / n` where:
///   - `F` = average of the adjacent face points
///   - `R` = average of the incident edge midpoints
///   - `S` = original position
///   - `n` = valence
///
/// # Errors
///
/// Fails with a [`TopologyError`] if the mesh is not closed, a point is
/// isolated, or a corner cannot be resolved to exactly two incident
/// edges. No partial mesh is returned.
///
/// # Example
/// ```
/// use tessel::prelude::*;
/// use tessel::algo::subdivide::catmull_clark_subdivide;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
/// let faces = vec![
///     [0, 3, 2, 1],
///     [4, 5, 6, 7],
///     [0, 1, 5, 4],
///     [2, 3, 7, 6],
///     [0, 4, 7, 3],
///     [1, 2, 6, 5],
/// ];
/// let cube = QuadMesh::new(points, faces).unwrap();
///
/// let refined = catmull_clark_subdivide(&cube).unwrap();
/// assert_eq!(refined.num_faces(), 24);
/// assert_eq!(refined.num_points(), 26); // 12 edge + 6 face + 8 original
/// ```
pub fn catmull_clark_subdivide(mesh: &QuadMesh) -> Result<QuadMesh> {
    // Step 1: derive edges and incidence from the face list
    let edges = extract_edges(mesh)?;
    let incidence = Incidence::build(&edges, mesh.num_points(), mesh.num_faces());

    // Step 2: face points (centroids)
    let face_points: Vec<Point3<f64>> =
        (0..mesh.num_faces()).map(|f| mesh.face_centroid(f)).collect();

    // Step 3: edge points
    let edge_points = compute_edge_points(mesh, &edges, &face_points)?;

    // Step 4: reposition the original points
    let repositioned = reposition_points(mesh, &edges, &face_points, &incidence)?;

    // Step 5: re-stitch the quad topology
    assemble(mesh, &edges, &incidence, edge_points, face_points, repositioned)
}

/// Compute one edge point per edge, in edge order: the mean of the two
/// endpoints and the two adjacent face points.
fn compute_edge_points(
    mesh: &QuadMesh,
    edges: &[Edge],
    face_points: &[Point3<f64>],
) -> Result<Vec<Point3<f64>>> {
    let points = mesh.points();
    let mut edge_points = Vec::with_capacity(edges.len());

    for edge in edges {
        let fb = edge
            .face_b
            .ok_or(TopologyError::OpenEdge { v0: edge.a, v1: edge.b })?;
        let sum = points[edge.a].coords
            + points[edge.b].coords
            + face_points[edge.face_a].coords
            + face_points[fb].coords;
        edge_points.push(Point3::from(sum / 4.0));
    }

    Ok(edge_points)
}

/// Compute the new location of every original point: `(F + 2R + (n-3)S) / n`
/// with `n` the valence, `F` the mean of adjacent face points and `R` the
/// mean of incident edge midpoints.
fn reposition_points(
    mesh: &QuadMesh,
    edges: &[Edge],
    face_points: &[Point3<f64>],
    incidence: &Incidence,
) -> Result<Vec<Point3<f64>>> {
    let points = mesh.points();
    let mut repositioned = Vec::with_capacity(points.len());

    for (vi, point) in points.iter().enumerate() {
        let incident = incidence.vertex_edges(vi);
        if incident.is_empty() {
            return Err(TopologyError::IsolatedVertex { vertex: vi }.into());
        }
        let n = incident.len() as f64;

        // Each incident edge contributes both of its face points to F and
        // its midpoint to R.
        let mut f_sum = Vector3::zeros();
        let mut r_sum = Vector3::zeros();
        for &ei in incident {
            let edge = &edges[ei];
            let fb = edge
                .face_b
                .ok_or(TopologyError::OpenEdge { v0: edge.a, v1: edge.b })?;
            f_sum += face_points[edge.face_a].coords + face_points[fb].coords;
            r_sum += (points[edge.a].coords + points[edge.b].coords) * 0.5;
        }

        let f = f_sum / (2.0 * n);
        let r = r_sum / n;
        repositioned.push(Point3::from((f + r * 2.0 + point.coords * (n - 3.0)) / n));
    }

    Ok(repositioned)
}

/// Build the subdivided mesh: points are the three new sequences
/// concatenated (edge points, face points, repositioned originals), and
/// every original face yields 4 sub-quads, one per corner.
fn assemble(
    mesh: &QuadMesh,
    edges: &[Edge],
    incidence: &Incidence,
    edge_points: Vec<Point3<f64>>,
    face_points: Vec<Point3<f64>>,
    repositioned: Vec<Point3<f64>>,
) -> Result<QuadMesh> {
    let n = edge_points.len();
    let k = face_points.len();

    let mut new_faces = Vec::with_capacity(mesh.num_faces() * 4);

    for (fi, face) in mesh.faces().iter().enumerate() {
        let face_edges = incidence.face_edges(fi);
        if face_edges.len() != 4 {
            return Err(
                TopologyError::FaceEdgeCount { face: fi, found: face_edges.len() }.into(),
            );
        }

        // One sub-quad per incident edge, anchored at the edge endpoint
        // that comes second in this face's winding. The 4 edges of a quad
        // anchor 4 distinct corners, so every corner is covered once.
        for &ei in face_edges {
            let edge = &edges[ei];
            let corner = winding_head(face, edge).ok_or(TopologyError::EdgeNotOnFace {
                v0: edge.a,
                v1: edge.b,
                face: fi,
            })?;
            let other = other_corner_edge(face_edges, edges, ei, corner)
                .ok_or(TopologyError::MissingCornerEdge { face: fi, vertex: corner })?;

            new_faces.push([n + fi, ei, n + k + corner, other]);
        }
    }

    let mut new_points = Vec::with_capacity(n + k + repositioned.len());
    new_points.extend(edge_points);
    new_points.extend(face_points);
    new_points.extend(repositioned);

    QuadMesh::new(new_points, new_faces)
}

/// The endpoint of `edge` that appears second when walking the face's
/// corners in winding order, or `None` if the edge is not a side of the
/// face.
fn winding_head(face: &[usize; 4], edge: &Edge) -> Option<usize> {
    for i in 0..4 {
        let s = face[i];
        let t = face[(i + 1) % 4];
        if s == edge.a && t == edge.b {
            return Some(edge.b);
        }
        if s == edge.b && t == edge.a {
            return Some(edge.a);
        }
    }
    None
}

/// The unique edge of the face, other than `used`, that also touches
/// `corner`. Returns `None` when there is no such edge or more than one.
fn other_corner_edge(
    face_edges: &[usize],
    edges: &[Edge],
    used: usize,
    corner: usize,
) -> Option<usize> {
    let mut found = None;
    for &ei in face_edges {
        if ei != used && edges[ei].has_endpoint(corner) {
            if found.is_some() {
                return None;
            }
            found = Some(ei);
        }
    }
    found
}
