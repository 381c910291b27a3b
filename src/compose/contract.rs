use crate::{
    compose::compositor::Compositor,
    foundation::core::{Mat4, PartKey, Vec3, VisMode},
};

/// Group id whose points receive the displacement falloff.
pub const SOURCE_GROUP: i32 = 0;

/// Parameters handed to the renderer for one frame.
///
/// `displacement` is the raw user displacement; the renderer fades it with
/// `1 - anim1_progress` (see [`RenderContract::effective_displacement`]).
/// `part_transform` is already interpolated for `anim2_progress`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderContract {
    /// Color source for shading.
    pub mode: VisMode,
    /// Raw user displacement for the source group, not yet faded.
    pub displacement: Vec3,
    /// Progress of the displacement animation in `[0, 1]`.
    pub anim1_progress: f32,
    /// Group id of the transformed part.
    pub selected_group: i32,
    /// Part id of the transformed part.
    pub selected_part: i32,
    /// Rigid transform for the selected part at `anim2_progress`.
    pub part_transform: Mat4,
    /// Progress of the part-transform animation in `[0, 1]`.
    pub anim2_progress: f32,
}

impl RenderContract {
    /// Displacement after falloff, added to every source-group point.
    pub fn effective_displacement(&self) -> Vec3 {
        Compositor::displacement_falloff(self.displacement, self.anim1_progress)
    }

    /// The selected (group, part).
    pub fn selection(&self) -> PartKey {
        PartKey::new(self.selected_group, self.selected_part)
    }

    /// True for points of [`SOURCE_GROUP`].
    pub fn displaces(&self, group_id: i32) -> bool {
        group_id == SOURCE_GROUP
    }

    /// Exact integer match against the selection.
    pub fn selects(&self, group_id: i32, part_id: i32) -> bool {
        group_id == self.selected_group && part_id == self.selected_part
    }

    /// Reference per-point rule: displace source points, then apply the part
    /// transform to the (possibly displaced) position of selected points.
    pub fn apply_to_point(&self, position: Vec3, group_id: i32, part_id: i32) -> Vec3 {
        let mut p = position;
        if self.displaces(group_id) {
            p += self.effective_displacement();
        }
        if self.selects(group_id, part_id) {
            p = self.part_transform.transform_point3(p);
        }
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/contract.rs"]
mod tests;
