use crate::foundation::core::Vec3;

/// One decoded point record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    /// Position as stored in the file (before centering).
    pub position: Vec3,
    /// Normalized to `[0, 1]`.
    pub color: Vec3,
    /// Group tag; group 0 is the displacement source.
    pub group_id: i32,
    /// Part tag within the group.
    pub part_id: i32,
}

/// Index-aligned per-point attribute buffers.
///
/// All four vectors always have the same length. Sets are filled by the decoder
/// and the example generator, or collected from [`PointRecord`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointAttributeSet {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    group_ids: Vec<i32>,
    part_ids: Vec<i32>,
}

impl PointAttributeSet {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            group_ids: Vec::with_capacity(n),
            part_ids: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, record: PointRecord) {
        self.positions.push(record.position);
        self.colors.push(record.color);
        self.group_ids.push(record.group_id);
        self.part_ids.push(record.part_id);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Per-point positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-point colors in `[0, 1]`.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Per-point group tags.
    pub fn group_ids(&self) -> &[i32] {
        &self.group_ids
    }

    /// Per-point part tags.
    pub fn part_ids(&self) -> &[i32] {
        &self.part_ids
    }

    /// Gather point `index` back into one record.
    pub fn record(&self, index: usize) -> Option<PointRecord> {
        Some(PointRecord {
            position: *self.positions.get(index)?,
            color: self.colors[index],
            group_id: self.group_ids[index],
            part_id: self.part_ids[index],
        })
    }

    /// All points in storage order.
    pub fn records(&self) -> impl Iterator<Item = PointRecord> + '_ {
        (0..self.len()).filter_map(|i| self.record(i))
    }

    /// Arithmetic mean of all positions (accumulated in f64), `None` when empty.
    pub fn centroid(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let (sx, sy, sz) = self.positions.iter().fold((0.0f64, 0.0f64, 0.0f64), |acc, p| {
            (
                acc.0 + f64::from(p.x),
                acc.1 + f64::from(p.y),
                acc.2 + f64::from(p.z),
            )
        });
        Some(Vec3::new((sx / n) as f32, (sy / n) as f32, (sz / n) as f32))
    }

    fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }
}

impl FromIterator<PointRecord> for PointAttributeSet {
    fn from_iter<I: IntoIterator<Item = PointRecord>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        for record in iter {
            out.push(record);
        }
        out
    }
}

/// Sphere enclosing every point of a cloud.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius; 0 for empty or single-point clouds.
    pub radius: f32,
}

impl BoundingSphere {
    /// Center at the midpoint of the axis-aligned bounds, radius to the farthest point.
    pub fn enclosing(positions: &[Vec3]) -> Self {
        let Some(first) = positions.first() else {
            return Self::default();
        };
        let (min, max) = positions
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let center = (min + max) * 0.5;
        let radius_sq = positions
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0f32, f32::max);
        Self {
            center,
            radius: radius_sq.sqrt(),
        }
    }

    /// True if `p` lies within the sphere grown by `tolerance`.
    pub fn contains(&self, p: Vec3, tolerance: f32) -> bool {
        p.distance(self.center) <= self.radius + tolerance
    }
}

/// A centered dataset ready for indexing and rendering.
///
/// Read-only once built; `bounds` and `centering_offset` always describe the
/// attributes they were computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    attributes: PointAttributeSet,
    bounds: BoundingSphere,
    centering_offset: Vec3,
}

impl PointCloud {
    /// Center `attributes` on their centroid and compute the bounding sphere.
    pub fn from_attributes(mut attributes: PointAttributeSet) -> Self {
        let centering_offset = attributes.centroid().unwrap_or(Vec3::ZERO);
        attributes.translate(-centering_offset);
        let bounds = BoundingSphere::enclosing(attributes.positions());
        Self {
            attributes,
            bounds,
            centering_offset,
        }
    }

    /// Number of points.
    pub fn count(&self) -> usize {
        self.attributes.len()
    }

    /// Centered per-point attributes.
    pub fn attributes(&self) -> &PointAttributeSet {
        &self.attributes
    }

    /// Bounding sphere of the centered positions.
    pub fn bounds(&self) -> BoundingSphere {
        self.bounds
    }

    /// Centroid that was subtracted from every position.
    pub fn centering_offset(&self) -> Vec3 {
        self.centering_offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/points.rs"]
mod tests;
