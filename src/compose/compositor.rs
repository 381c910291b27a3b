use crate::{
    animation::state::{AnimationState, Se3Target},
    compose::contract::RenderContract,
    dataset::points::PointCloud,
    foundation::core::{Mat4, Vec3, VisMode},
    transform::{non_linear::clamp01, rigid::interpolate_from_identity},
};

/// Stateless mapping from [`AnimationState`] to [`RenderContract`].
pub struct Compositor;

impl Compositor {
    /// Build this frame's contract. Nothing is cached between calls.
    #[tracing::instrument(level = "trace", skip(state))]
    pub fn compose(state: &AnimationState, mode: VisMode) -> RenderContract {
        let selection = state.selection();
        RenderContract {
            mode,
            displacement: state.displacement(),
            anim1_progress: state.anim1_progress(),
            selected_group: selection.group,
            selected_part: selection.part,
            part_transform: Self::part_transform(&state.target(), state.anim2_progress()),
            anim2_progress: state.anim2_progress(),
        }
    }

    /// `displacement * (1 - progress)`; full offset at 0, none at 1.
    pub fn displacement_falloff(displacement: Vec3, progress: f32) -> Vec3 {
        displacement * (1.0 - clamp01(progress))
    }

    /// Rigid transform from identity toward `target` at parameter `t`.
    pub fn part_transform(target: &Se3Target, t: f32) -> Mat4 {
        interpolate_from_identity(target.rotation(), target.translation, t)
    }

    /// CPU preview of what the renderer draws for `cloud` under `contract`.
    pub fn apply_to_cloud(cloud: &PointCloud, contract: &RenderContract) -> Vec<Vec3> {
        cloud
            .attributes()
            .records()
            .map(|r| contract.apply_to_point(r.position, r.group_id, r.part_id))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
