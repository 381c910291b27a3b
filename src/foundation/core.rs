pub use glam::{Mat4, Quat, Vec3};

/// A (group, part) pair identifying one hierarchical subset of a cloud.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PartKey {
    /// Group tag.
    pub group: i32,
    /// Part tag within `group`.
    pub part: i32,
}

impl PartKey {
    /// Key for `part` within `group`.
    pub fn new(group: i32, part: i32) -> Self {
        Self { group, part }
    }
}

/// Which color source the renderer shades points with.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VisMode {
    /// Per-point decoded color.
    #[default]
    Rgb,
    /// Palette color keyed by group id.
    GroupId,
    /// Palette color keyed by part id.
    PartId,
}

impl VisMode {
    /// Numeric value handed to shaders (0, 1, 2).
    pub fn index(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::GroupId => 1,
            Self::PartId => 2,
        }
    }

    /// Inverse of [`VisMode::index`].
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Rgb),
            1 => Some(Self::GroupId),
            2 => Some(Self::PartId),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
