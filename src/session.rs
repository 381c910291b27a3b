use std::path::Path;

use anyhow::Context;

use crate::{
    animation::state::{AnimationEvent, AnimationState},
    compose::{compositor::Compositor, contract::RenderContract},
    config::SessionConfig,
    dataset::{
        decode::decode_binary_ply,
        hierarchy::{Hierarchy, build_hierarchy},
        points::PointCloud,
    },
    foundation::{
        core::VisMode,
        error::{CloudError, CloudResult},
    },
};

/// Owns the loaded dataset, its hierarchy and the animation state.
///
/// The state is replaced wholesale on every event; the contract returned by
/// [`Session::tick`] is recomputed from scratch each frame.
#[derive(Clone, Debug)]
pub struct Session {
    cloud: Option<PointCloud>,
    hierarchy: Hierarchy,
    state: AnimationState,
    mode: VisMode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl Session {
    /// Empty session seeded from `config`; both animations idle.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            cloud: None,
            hierarchy: Hierarchy::default(),
            state: config.initial_state(),
            mode: config.mode,
        }
    }

    /// Decode and index `bytes`, then install them.
    ///
    /// On error nothing changes: the previous dataset, hierarchy and state
    /// stay in place.
    #[tracing::instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn load_bytes(&mut self, bytes: &[u8]) -> CloudResult<()> {
        let cloud = match decode_binary_ply(bytes) {
            Ok(cloud) => cloud,
            Err(err) => {
                tracing::warn!(error = %err, "dataset load failed; keeping previous dataset");
                return Err(err);
            }
        };
        self.load_cloud(cloud);
        Ok(())
    }

    /// Read `path` and load it like [`Session::load_bytes`].
    ///
    /// IO failures surface as [`CloudError::Other`] and also leave the session
    /// untouched.
    pub fn load_file(&mut self, path: &Path) -> CloudResult<()> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read dataset '{}'", path.display()))
            .map_err(CloudError::from)?;
        self.load_bytes(&bytes)
    }

    /// Install an already built cloud and select its first (group, part).
    ///
    /// Selecting here leaves both animations untouched.
    pub fn load_cloud(&mut self, cloud: PointCloud) {
        let hierarchy = build_hierarchy(cloud.attributes());
        if let Some(first) = hierarchy.first_selection() {
            self.state = self.state.with_selection(first);
        }
        tracing::debug!(
            points = cloud.count(),
            groups = hierarchy.len(),
            "dataset installed"
        );
        self.cloud = Some(cloud);
        self.hierarchy = hierarchy;
    }

    /// Drop the dataset; animation state and mode are kept.
    pub fn clear(&mut self) {
        self.cloud = None;
        self.hierarchy = Hierarchy::default();
    }

    /// Fold one event into the animation state.
    pub fn dispatch(&mut self, event: AnimationEvent) {
        self.state = self.state.apply(event);
    }

    /// Advance both clocks by one frame and compose that frame.
    pub fn tick(&mut self, delta_secs: f32) -> RenderContract {
        self.dispatch(AnimationEvent::Tick { delta_secs });
        self.contract()
    }

    /// Compose the current frame without advancing time.
    pub fn contract(&self) -> RenderContract {
        Compositor::compose(&self.state, self.mode)
    }

    /// Visualization mode for subsequent contracts.
    pub fn set_mode(&mut self, mode: VisMode) {
        self.mode = mode;
    }

    /// Current visualization mode.
    pub fn mode(&self) -> VisMode {
        self.mode
    }

    /// Current animation snapshot.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Hierarchy of the loaded dataset; empty before the first load.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// The loaded dataset, if any.
    pub fn cloud(&self) -> Option<&PointCloud> {
        self.cloud.as_ref()
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
