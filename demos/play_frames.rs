use cloudanim::{
    AnimationEvent, AnimationId, Compositor, ExampleSpec, PointCloud, Session, SessionConfig,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let spec = ExampleSpec {
        points_per_part: 500,
        ..ExampleSpec::default()
    };
    let cloud = PointCloud::from_attributes(cloudanim::generate_example_cloud(&spec)?);

    let mut session = Session::new(&SessionConfig::default());
    session.load_cloud(cloud);
    session.dispatch(AnimationEvent::Start(AnimationId::Displacement));
    session.dispatch(AnimationEvent::Start(AnimationId::PartTransform));

    for f in 0..=60u32 {
        let c = session.tick(1.0 / 30.0);
        if f % 15 != 0 {
            continue;
        }
        let moved = session
            .cloud()
            .map(|cloud| Compositor::apply_to_cloud(cloud, &c))
            .unwrap_or_default();
        println!(
            "frame {f}: anim1={:.3} anim2={:.3} first point {:?}",
            c.anim1_progress,
            c.anim2_progress,
            moved.first()
        );
    }

    Ok(())
}
