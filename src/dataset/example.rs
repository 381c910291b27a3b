use std::f32::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    dataset::points::{PointAttributeSet, PointRecord},
    foundation::{
        core::Vec3,
        error::{CloudError, CloudResult},
    },
};

const CLUSTER_SPACING: f32 = 4.0;
const CLUSTER_RADIUS: f32 = 1.5;
const TARGET_JITTER: f32 = 0.2;

/// Largest cloud [`generate_example_cloud`] will build.
pub const MAX_EXAMPLE_POINTS: u64 = 10_000_000;

/// Shape of the synthetic demo cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExampleSpec {
    /// Number of groups; group 0 is the displacement source.
    pub groups: u32,
    /// Parts in every group.
    pub parts_per_group: u32,
    /// Points sampled per (group, part) cluster.
    pub points_per_part: u32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for ExampleSpec {
    fn default() -> Self {
        Self {
            groups: 2,
            parts_per_group: 2,
            points_per_part: 5000,
            seed: 0,
        }
    }
}

impl ExampleSpec {
    /// Reject empty layouts, ids beyond `i32` and clouds above
    /// [`MAX_EXAMPLE_POINTS`].
    pub fn validate(&self) -> CloudResult<()> {
        if self.groups == 0 || self.parts_per_group == 0 {
            return Err(CloudError::validation(
                "example cloud needs at least one group and one part",
            ));
        }
        if i32::try_from(self.groups).is_err() || i32::try_from(self.parts_per_group).is_err() {
            return Err(CloudError::validation("group/part count exceeds i32 range"));
        }
        let total = u64::from(self.groups)
            .saturating_mul(u64::from(self.parts_per_group))
            .saturating_mul(u64::from(self.points_per_part));
        if total > MAX_EXAMPLE_POINTS {
            return Err(CloudError::validation(format!(
                "example cloud of {total} points exceeds the limit of {MAX_EXAMPLE_POINTS}"
            )));
        }
        Ok(())
    }

    /// Points the generator emits for this spec.
    pub fn total_points(&self) -> usize {
        (self.groups as usize)
            .saturating_mul(self.parts_per_group as usize)
            .saturating_mul(self.points_per_part as usize)
    }
}

/// Spherical clusters laid out on a grid, one per (group, part).
///
/// Group 0 is the reddish source; every other group is a bluish, slightly
/// jittered target. Positions are not centered. The output is a pure function
/// of `spec`.
pub fn generate_example_cloud(spec: &ExampleSpec) -> CloudResult<PointAttributeSet> {
    spec.validate()?;
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut out = PointAttributeSet::with_capacity(spec.total_points());

    for g in 0..spec.groups as i32 {
        for p in 0..spec.parts_per_group as i32 {
            let center = Vec3::new(
                (g as f32 - 0.5) * CLUSTER_SPACING,
                (p as f32 - 0.5) * CLUSTER_SPACING,
                0.0,
            );
            let is_target = g != 0;

            for _ in 0..spec.points_per_part {
                let mut position = center + sample_ball(&mut rng, CLUSTER_RADIUS);
                if is_target {
                    position += Vec3::new(
                        (rng.gen_range(0.0f32..1.0) - 0.5) * TARGET_JITTER,
                        (rng.gen_range(0.0f32..1.0) - 0.5) * TARGET_JITTER,
                        (rng.gen_range(0.0f32..1.0) - 0.5) * TARGET_JITTER,
                    );
                }

                let color = if is_target {
                    Vec3::new(
                        0.1 + rng.gen_range(0.0f32..0.1),
                        0.3 + rng.gen_range(0.0f32..0.2),
                        0.8 + rng.gen_range(0.0f32..0.2),
                    )
                } else {
                    Vec3::new(
                        0.9 + rng.gen_range(0.0f32..0.1),
                        0.1 + rng.gen_range(0.0f32..0.2),
                        0.1 + rng.gen_range(0.0f32..0.1),
                    )
                };

                out.push(PointRecord {
                    position,
                    color,
                    group_id: g,
                    part_id: p,
                });
            }
        }
    }

    Ok(out)
}

// Uniform in a ball: uniform direction, radius scaled by the cube root.
fn sample_ball(rng: &mut StdRng, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen_range(0.0f32..1.0);
    let phi = (2.0 * rng.gen_range(0.0f32..1.0) - 1.0).clamp(-1.0, 1.0).acos();
    let r = radius * rng.gen_range(0.0f32..1.0).cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/example.rs"]
mod tests;
