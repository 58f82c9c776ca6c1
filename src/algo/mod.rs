//! Mesh processing algorithms.
//!
//! This module currently contains one algorithm family:
//!
//! - **Subdivision**: Catmull-Clark subdivision for closed quad meshes.

pub mod subdivide;
