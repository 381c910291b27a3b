//! cloudanim loads labeled point clouds and drives two per-frame animations
//! over them.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: binary little-endian PLY bytes -> [`PointCloud`] (centered on
//!    its centroid, with a bounding sphere)
//! 2. **Index**: [`PointAttributeSet`] -> [`Hierarchy`] (group id to ascending
//!    part ids)
//! 3. **Animate**: [`AnimationEvent`]s fold into an immutable [`AnimationState`]
//!    holding two [`AnimationClock`]s
//! 4. **Compose**: `AnimationState -> RenderContract` once per frame, consumed
//!    by a renderer
//!
//! Animation 1 fades a displacement applied to group [`SOURCE_GROUP`].
//! Animation 2 moves the selected (group, part) from identity to a rigid
//! [`Se3Target`]. [`Session`] ties the steps together for a frame loop.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod config;
mod dataset;
mod foundation;
mod session;

/// Vector, quaternion and rigid-transform helpers.
pub mod transform;

pub use animation::clock::{AnimationClock, PROGRESS_PER_SECOND, PlaybackPhase};
pub use animation::state::{
    AnimationEvent, AnimationId, AnimationState, DISPLACEMENT_LIMIT, Se3Target,
};
pub use compose::compositor::Compositor;
pub use compose::contract::{RenderContract, SOURCE_GROUP};
pub use config::SessionConfig;
pub use dataset::decode::{PlyHeader, STRIDE, decode_binary_ply, parse_header};
pub use dataset::encode::encode_binary_ply;
pub use dataset::example::{ExampleSpec, MAX_EXAMPLE_POINTS, generate_example_cloud};
pub use dataset::hierarchy::{Hierarchy, build_hierarchy};
pub use dataset::points::{BoundingSphere, PointAttributeSet, PointCloud, PointRecord};
pub use foundation::core::{Mat4, PartKey, Quat, Vec3, VisMode};
pub use foundation::error::{CloudError, CloudResult};
pub use session::Session;
