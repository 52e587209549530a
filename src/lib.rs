#![feature(portable_simd)]

//! voxel_mesh_core - framework-independent voxel chunk meshing.
//!
//! Converts 32^3 signed distance field chunks into triangle meshes and
//! provides the surrounding concurrency fabric a destructible voxel world
//! needs to keep that meshing off the main thread safely:
//!
//! - **Surface Nets extraction** ([`surface_nets`]): SIMD row-based Naive
//!   Surface Nets, one vertex per surface-crossing cell.
//! - **Attribute encoding** ([`attributes`]): per-vertex material blend
//!   weights from a cell's non-air corner materials.
//! - **Normal pipeline** ([`normals`]): inline gradient normals, optional
//!   triangle-weighted recompute.
//! - **Surface fairing** ([`fairing`]): constrained Laplacian smoothing
//!   with material-boundary and sharp-feature attenuation.
//! - **Chunk storage** ([`volume`]): owned SDF + material sample arrays
//!   with apron/interior layout.
//! - **Fencing** ([`fence`]): per-chunk epoch counters serializing readers
//!   against writers.
//! - **Scheduling** ([`scheduler`]): per-frame admission-budgeted
//!   dispatch onto rayon's worker pool.
//! - **Commit boundary** ([`commit`]): immediate and atomic-batch
//!   publication of finished meshes for presentation.
//! - **Metrics** ([`metrics`]): opt-in, zero-cost-when-disabled timing and
//!   throughput counters for the extraction/fairing pipeline.
//!
//! # Example
//!
//! ```ignore
//! use voxel_mesh_core::{surface_nets, ExtractConfig, Volume};
//!
//! let volume = Volume::new(1.0);
//! let mesh = surface_nets::extract(&volume, &ExtractConfig::default());
//! println!("{} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
//! ```

pub mod attributes;
pub mod commit;
pub mod constants;
pub mod edge_table;
pub mod error;
pub mod fairing;
pub mod fence;
pub mod metrics;
pub mod normals;
pub mod scheduler;
pub mod surface_nets;
pub mod types;
pub mod volume;

pub use commit::CommitGrid;
pub use constants::{coord_to_index, index_to_coord, CHUNK_SAMPLES, CHUNK_SAMPLES_CB, CHUNK_SAMPLES_SQ, CORNER_OFFSETS};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE};
pub use error::{MeshingError, MeshingResult};
pub use fairing::{Adjacency, FairingConfig};
pub use fence::FenceRegistry;
pub use scheduler::{Job, JobKind, Scheduler};
pub use types::{sdf_conversion, ExtractConfig, MaterialId, MaterialMode, MeshBuffers, MinMaxAABB, SdfSample};
pub use volume::{copy_shared_overlap, Face, Sign, Volume};
