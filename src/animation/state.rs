use crate::{
    animation::clock::AnimationClock,
    foundation::core::{Mat4, PartKey, Quat, Vec3},
    transform::{
        linear::finite_or_zero,
        rigid::{compose_rigid, euler_xyz_degrees},
    },
};

/// Per-axis limit for the source-group displacement.
pub const DISPLACEMENT_LIMIT: f32 = 10.0;

/// End pose of the part-transform animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Se3Target {
    /// Intrinsic X, Y, Z Euler angles in degrees.
    pub rotation_deg: Vec3,
    /// Translation applied after the rotation.
    pub translation: Vec3,
}

impl Default for Se3Target {
    fn default() -> Self {
        Self {
            rotation_deg: Vec3::new(0.0, 45.0, 0.0),
            translation: Vec3::new(2.0, 2.0, 0.0),
        }
    }
}

impl Se3Target {
    /// No rotation, no translation.
    pub fn identity() -> Self {
        Self {
            rotation_deg: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }

    /// Unit quaternion of `rotation_deg`.
    pub fn rotation(&self) -> Quat {
        euler_xyz_degrees(self.rotation_deg)
    }

    /// Full end-pose matrix.
    pub fn to_mat4(&self) -> Mat4 {
        compose_rigid(self.rotation(), self.translation)
    }

    fn sanitized(self) -> Self {
        Self {
            rotation_deg: finite_or_zero(self.rotation_deg),
            translation: finite_or_zero(self.translation),
        }
    }
}

/// The two animations of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimationId {
    /// Animation 1: source-group displacement fading to zero.
    Displacement,
    /// Animation 2: identity to [`Se3Target`] on the selected part.
    PartTransform,
}

/// Input that drives [`AnimationState::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationEvent {
    /// Play one animation from progress 0.
    Start(AnimationId),
    /// Stop one animation at progress 0.
    Reset(AnimationId),
    /// One frame of wall-clock time; advances both animations.
    Tick {
        /// Seconds since the previous frame; negative or non-finite counts as 0.
        delta_secs: f32,
    },
    /// New displacement; rewinds animation 1 so the full offset shows.
    SetDisplacement(Vec3),
    /// New end pose; parks animation 2 at the end pose for preview.
    SetTarget(Se3Target),
    /// New selection; parks animation 2 at the end pose for preview.
    Select {
        /// Group id to select.
        group: i32,
        /// Part id to select.
        part: i32,
    },
}

/// Snapshot of everything the compositor reads.
///
/// Values are replaced wholesale by [`AnimationState::apply`]; no transition
/// mutates in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationState {
    displacement: Vec3,
    target: Se3Target,
    selection: PartKey,
    displacement_clock: AnimationClock,
    transform_clock: AnimationClock,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(
            Vec3::new(5.0, 0.0, 0.0),
            Se3Target::default(),
            PartKey::new(0, 0),
        )
    }
}

impl AnimationState {
    /// Both animations idle. Inputs are clamped like the matching events.
    pub fn new(displacement: Vec3, target: Se3Target, selection: PartKey) -> Self {
        Self {
            displacement: clamp_displacement(displacement),
            target: target.sanitized(),
            selection,
            displacement_clock: AnimationClock::IDLE,
            transform_clock: AnimationClock::IDLE,
        }
    }

    /// Clamped source-group displacement.
    pub fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// End pose of animation 2.
    pub fn target(&self) -> Se3Target {
        self.target
    }

    /// Selected (group, part).
    pub fn selection(&self) -> PartKey {
        self.selection
    }

    /// Clock of one animation.
    pub fn clock(&self, id: AnimationId) -> AnimationClock {
        match id {
            AnimationId::Displacement => self.displacement_clock,
            AnimationId::PartTransform => self.transform_clock,
        }
    }

    /// Displacement progress.
    pub fn anim1_progress(&self) -> f32 {
        self.displacement_clock.progress()
    }

    /// Part-transform progress.
    pub fn anim2_progress(&self) -> f32 {
        self.transform_clock.progress()
    }

    /// True while the displacement animation runs.
    pub fn is_playing1(&self) -> bool {
        self.displacement_clock.is_playing()
    }

    /// True while the part-transform animation runs.
    pub fn is_playing2(&self) -> bool {
        self.transform_clock.is_playing()
    }

    /// Change the selection without touching either animation.
    #[must_use]
    pub fn with_selection(self, selection: PartKey) -> Self {
        Self { selection, ..self }
    }

    /// Pure transition for one event; see [`AnimationEvent`] for the effects.
    #[must_use]
    pub fn apply(self, event: AnimationEvent) -> Self {
        match event {
            AnimationEvent::Start(id) => self.map_clock(id, AnimationClock::start),
            AnimationEvent::Reset(id) => self.map_clock(id, AnimationClock::reset),
            AnimationEvent::Tick { delta_secs } => Self {
                displacement_clock: self.displacement_clock.tick(delta_secs),
                transform_clock: self.transform_clock.tick(delta_secs),
                ..self
            },
            AnimationEvent::SetDisplacement(d) => Self {
                displacement: clamp_displacement(d),
                displacement_clock: AnimationClock::IDLE,
                ..self
            },
            AnimationEvent::SetTarget(target) => Self {
                target: target.sanitized(),
                transform_clock: AnimationClock::COMPLETED,
                ..self
            },
            AnimationEvent::Select { group, part } => Self {
                selection: PartKey::new(group, part),
                transform_clock: AnimationClock::COMPLETED,
                ..self
            },
        }
    }

    fn map_clock(self, id: AnimationId, f: impl FnOnce(AnimationClock) -> AnimationClock) -> Self {
        match id {
            AnimationId::Displacement => Self {
                displacement_clock: f(self.displacement_clock),
                ..self
            },
            AnimationId::PartTransform => Self {
                transform_clock: f(self.transform_clock),
                ..self
            },
        }
    }
}

fn clamp_displacement(d: Vec3) -> Vec3 {
    finite_or_zero(d).clamp(
        Vec3::splat(-DISPLACEMENT_LIMIT),
        Vec3::splat(DISPLACEMENT_LIMIT),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
