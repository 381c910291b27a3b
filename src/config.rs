use std::path::Path;

use anyhow::Context;

use crate::{
    animation::state::{AnimationState, DISPLACEMENT_LIMIT, Se3Target},
    foundation::{
        core::{PartKey, Vec3, VisMode},
        error::{CloudError, CloudResult},
    },
};

/// Initial session settings, usually read from a JSON file.
///
/// Every field is optional in JSON; missing fields take the defaults of the
/// interactive viewer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial visualization mode.
    pub mode: VisMode,
    /// Source-group displacement; each axis within `[-10, 10]`.
    pub displacement: Vec3,
    /// End pose of the part-transform animation.
    pub target: Se3Target,
    /// Group half of the initial selection; a dataset load replaces both halves.
    pub selected_group: i32,
    /// Part half of the initial selection.
    pub selected_part: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: VisMode::default(),
            displacement: Vec3::new(5.0, 0.0, 0.0),
            target: Se3Target::default(),
            selected_group: 0,
            selected_part: 0,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> CloudResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| CloudError::serde(format!("session config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read `path` and parse it with [`SessionConfig::from_json_str`].
    pub fn from_json_file(path: &Path) -> CloudResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open session config '{}'", path.display()))
            .map_err(CloudError::from)?;
        Self::from_json_str(&text)
    }

    /// Reject non-finite values and out-of-range displacement.
    pub fn validate(&self) -> CloudResult<()> {
        if !self.displacement.is_finite() {
            return Err(CloudError::validation("displacement must be finite"));
        }
        if self.displacement.abs().max_element() > DISPLACEMENT_LIMIT {
            return Err(CloudError::validation(format!(
                "displacement axes must lie within [-{DISPLACEMENT_LIMIT}, {DISPLACEMENT_LIMIT}]"
            )));
        }
        if !self.target.rotation_deg.is_finite() {
            return Err(CloudError::validation("target rotation must be finite"));
        }
        if !self.target.translation.is_finite() {
            return Err(CloudError::validation("target translation must be finite"));
        }
        Ok(())
    }

    /// Configured (group, part).
    pub fn selection(&self) -> PartKey {
        PartKey::new(self.selected_group, self.selected_part)
    }

    /// Idle animation state built from this config.
    pub fn initial_state(&self) -> AnimationState {
        AnimationState::new(self.displacement, self.target, self.selection())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
