use super::*;
use crate::{
    animation::state::AnimationId,
    dataset::{
        encode::encode_binary_ply,
        points::{PointAttributeSet, PointRecord},
    },
    foundation::{
        core::{Mat4, PartKey, Vec3},
        error::CloudError,
    },
};

fn tagged(tags: &[(i32, i32)]) -> PointAttributeSet {
    tags.iter()
        .enumerate()
        .map(|(i, &(group_id, part_id))| PointRecord {
            position: Vec3::new(i as f32, 0.0, 0.0),
            color: Vec3::ONE,
            group_id,
            part_id,
        })
        .collect()
}

#[test]
fn new_session_has_no_dataset() {
    let s = Session::default();
    assert!(s.cloud().is_none());
    assert!(s.hierarchy().is_empty());
    assert_eq!(s.mode(), VisMode::Rgb);
    assert_eq!(s.state().selection(), PartKey::new(0, 0));
}

#[test]
fn load_selects_first_pair_without_touching_animations() {
    let mut s = Session::default();
    s.dispatch(AnimationEvent::Start(AnimationId::Displacement));
    let bytes = encode_binary_ply(&tagged(&[(4, 9), (3, 2), (3, 1)]));
    s.load_bytes(&bytes).unwrap();

    assert_eq!(s.cloud().map(PointCloud::count), Some(3));
    assert_eq!(s.state().selection(), PartKey::new(3, 1));
    assert!(s.state().is_playing1());
    assert_eq!(s.state().anim2_progress(), 0.0);
}

#[test]
fn failed_load_keeps_previous_dataset() {
    let mut s = Session::default();
    s.load_bytes(&encode_binary_ply(&tagged(&[(1, 1), (1, 2)])))
        .unwrap();
    let before_cloud = s.cloud().cloned();
    let before_hierarchy = s.hierarchy().clone();
    let before_state = *s.state();

    let err = s.load_bytes(b"ply\nformat ascii 1.0\nelement vertex 1\nend_header\n");
    assert!(matches!(err, Err(CloudError::UnsupportedFormat(_))));
    assert_eq!(s.cloud().cloned(), before_cloud);
    assert_eq!(s.hierarchy(), &before_hierarchy);
    assert_eq!(s.state(), &before_state);
}

#[test]
fn tick_returns_fresh_contract() {
    let mut s = Session::default();
    s.dispatch(AnimationEvent::Start(AnimationId::PartTransform));
    let c = s.tick(0.5);
    assert_eq!(c.anim2_progress, 0.25);
    assert_eq!(c, s.contract());

    for _ in 0..10 {
        s.tick(0.5);
    }
    let done = s.contract();
    assert_eq!(done.anim2_progress, 1.0);
    assert_eq!(done.part_transform, s.state().target().to_mat4());
    assert!(!s.state().is_playing2());
}

#[test]
fn mode_flows_into_contract() {
    let mut s = Session::default();
    s.set_mode(VisMode::GroupId);
    assert_eq!(s.contract().mode, VisMode::GroupId);
    assert_eq!(s.contract().part_transform, Mat4::IDENTITY);
}

#[test]
fn clear_drops_dataset_only() {
    let mut s = Session::default();
    s.load_cloud(PointCloud::from_attributes(tagged(&[(0, 5)])));
    s.dispatch(AnimationEvent::Select { group: 0, part: 5 });
    s.clear();
    assert!(s.cloud().is_none());
    assert!(s.hierarchy().is_empty());
    assert_eq!(s.state().selection(), PartKey::new(0, 5));
    assert_eq!(s.state().anim2_progress(), 1.0);
}

#[test]
fn missing_file_is_an_io_error_and_keeps_state() {
    let mut s = Session::default();
    s.load_cloud(PointCloud::from_attributes(tagged(&[(2, 3)])));
    let before = s.hierarchy().clone();

    let path = std::env::temp_dir().join("cloudanim_session_missing.ply");
    let _ = std::fs::remove_file(&path);
    let err = s.load_file(&path).unwrap_err();
    assert!(matches!(err, CloudError::Other(_)));
    assert!(err.to_string().contains("read dataset"));
    assert_eq!(s.hierarchy(), &before);
    assert_eq!(s.state().selection(), PartKey::new(2, 3));
}

#[test]
fn load_file_reads_encoded_dataset() {
    let path = std::env::temp_dir().join("cloudanim_session_load.ply");
    std::fs::write(&path, encode_binary_ply(&tagged(&[(1, 0), (0, 7)]))).unwrap();

    let mut s = Session::default();
    s.load_file(&path).unwrap();
    assert_eq!(s.cloud().map(PointCloud::count), Some(2));
    assert_eq!(s.state().selection(), PartKey::new(0, 7));
}
