//! The quad mesh value type.
//!
//! A [`QuadMesh`] is a plain face-vertex representation: an ordered
//! sequence of 3D points and an ordered sequence of quadrilateral faces,
//! each face an ordered 4-tuple of point indices. Faces are expected to
//! wind consistently; winding is not verified or corrected here.

use nalgebra::{Point3, Vector3};

use crate::error::{MalformedInputError, Result};

/// A quadrilateral mesh in face-vertex form.
///
/// Construction validates the face list, so every `QuadMesh` in
/// circulation references only in-range, pairwise-distinct point indices.
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
/// let faces = vec![[0, 1, 2, 3]];
///
/// let mesh = QuadMesh::new(points, faces).unwrap();
/// assert_eq!(mesh.num_points(), 4);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuadMesh {
    points: Vec<Point3<f64>>,
    faces: Vec<[usize; 4]>,
}

impl QuadMesh {
    /// Build a quad mesh from points and faces, validating the face list.
    ///
    /// # Errors
    /// Returns a [`MalformedInputError`] if the face list is empty, a face
    /// references a point index out of range, or a face repeats a point
    /// index (including across the diagonal).
    pub fn new(points: Vec<Point3<f64>>, faces: Vec<[usize; 4]>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MalformedInputError::EmptyMesh.into());
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= points.len() {
                    return Err(MalformedInputError::VertexOutOfRange {
                        face: fi,
                        vertex: vi,
                        num_points: points.len(),
                    }
                    .into());
                }
            }
            // All six index pairs must differ, diagonals included.
            if face[0] == face[1]
                || face[1] == face[2]
                || face[2] == face[3]
                || face[3] == face[0]
                || face[0] == face[2]
                || face[1] == face[3]
            {
                return Err(MalformedInputError::DegenerateFace { face: fi }.into());
            }
        }

        Ok(Self { points, faces })
    }

    /// The point sequence.
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// The face sequence.
    #[inline]
    pub fn faces(&self) -> &[[usize; 4]] {
        &self.faces
    }

    /// Number of points in the mesh.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of faces in the mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Centroid of a face: the arithmetic mean of its 4 corner points.
    ///
    /// # Panics
    /// Panics if `face` is out of range.
    pub fn face_centroid(&self, face: usize) -> Point3<f64> {
        let sum: Vector3<f64> = self.faces[face]
            .iter()
            .map(|&vi| self.points[vi].coords)
            .sum();
        Point3::from(sum / 4.0)
    }
}
