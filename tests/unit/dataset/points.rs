use super::*;

fn rec(x: f32, y: f32, z: f32, group_id: i32, part_id: i32) -> PointRecord {
    PointRecord {
        position: Vec3::new(x, y, z),
        color: Vec3::ONE,
        group_id,
        part_id,
    }
}

#[test]
fn attribute_buffers_stay_index_aligned() {
    let set: PointAttributeSet = [rec(0.0, 0.0, 0.0, 3, 4), rec(1.0, 2.0, 3.0, 5, 6)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert_eq!(set.positions().len(), set.colors().len());
    assert_eq!(set.group_ids(), &[3, 5]);
    assert_eq!(set.part_ids(), &[4, 6]);
    assert_eq!(set.record(1), Some(rec(1.0, 2.0, 3.0, 5, 6)));
    assert_eq!(set.record(2), None);
    assert_eq!(set.records().count(), 2);
}

#[test]
fn centroid_of_empty_set_is_none() {
    assert_eq!(PointAttributeSet::default().centroid(), None);
}

#[test]
fn from_attributes_centers_on_centroid() {
    let set: PointAttributeSet = [
        rec(0.0, 0.0, 0.0, 0, 0),
        rec(4.0, 0.0, 0.0, 0, 0),
        rec(2.0, 6.0, 0.0, 0, 0),
    ]
    .into_iter()
    .collect();
    let cloud = PointCloud::from_attributes(set);
    assert_eq!(cloud.centering_offset(), Vec3::new(2.0, 2.0, 0.0));
    assert_eq!(
        cloud.attributes().positions(),
        &[
            Vec3::new(-2.0, -2.0, 0.0),
            Vec3::new(2.0, -2.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        ]
    );
    let c = cloud.attributes().centroid().unwrap();
    assert!(c.abs_diff_eq(Vec3::ZERO, 1e-6));
}

#[test]
fn bounding_sphere_covers_every_point() {
    let set: PointAttributeSet = [
        rec(-1.0, 0.0, 0.0, 0, 0),
        rec(3.0, 1.0, 0.0, 0, 0),
        rec(0.0, -2.0, 5.0, 0, 0),
    ]
    .into_iter()
    .collect();
    let cloud = PointCloud::from_attributes(set);
    for p in cloud.attributes().positions() {
        assert!(cloud.bounds().contains(*p, 1e-5));
    }
    assert!(cloud.bounds().radius > 0.0);
}

#[test]
fn empty_cloud_has_degenerate_bounds() {
    let cloud = PointCloud::from_attributes(PointAttributeSet::default());
    assert_eq!(cloud.count(), 0);
    assert_eq!(cloud.bounds(), BoundingSphere::default());
    assert_eq!(cloud.centering_offset(), Vec3::ZERO);
}

#[test]
fn exposed_attributes_rebuild_to_the_same_bounds() {
    let set: PointAttributeSet = [
        rec(1.0, 1.0, 1.0, 0, 0),
        rec(3.0, 1.0, 1.0, 0, 1),
        rec(2.0, 4.0, 1.0, 1, 0),
    ]
    .into_iter()
    .collect();
    let cloud = PointCloud::from_attributes(set);
    let again = PointCloud::from_attributes(cloud.attributes().clone());
    assert!(again.centering_offset().abs_diff_eq(Vec3::ZERO, 1e-6));
    assert!(again.bounds().center.abs_diff_eq(cloud.bounds().center, 1e-6));
    assert!((again.bounds().radius - cloud.bounds().radius).abs() < 1e-6);
}
