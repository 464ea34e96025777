//! Vertex deformation driven by the ocean field
//!
//! Host-agnostic: callers pass world-space positions in and write the
//! returned positions back to their mesh.

pub mod bounds;
pub mod cache;
pub mod deformer;
pub mod plane;

pub use bounds::Bounds;
pub use cache::OriginalPositions;
pub use deformer::OceanDeformer;
pub use plane::plane_positions;
