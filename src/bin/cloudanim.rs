use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cloudanim", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a binary PLY file and print its summary as JSON.
    Inspect(InspectArgs),
    /// Write the synthetic two-group example cloud.
    Generate(GenerateArgs),
    /// Simulate a frame loop and print one render contract per line.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input binary PLY.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output PLY path.
    #[arg(long)]
    out: PathBuf,

    /// RNG seed; the same seed always yields the same file.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 5000)]
    points_per_part: u32,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Session config JSON. Missing fields use the viewer defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Optional dataset to load before the first frame.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 2.0)]
    seconds: f32,

    /// Start the displacement animation on frame 0.
    #[arg(long)]
    play1: bool,

    /// Start the part-transform animation on frame 0.
    #[arg(long)]
    play2: bool,

    /// Overrides the config's visualization mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Rgb,
    Group,
    Part,
}

impl From<ModeChoice> for cloudanim::VisMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Rgb => cloudanim::VisMode::Rgb,
            ModeChoice::Group => cloudanim::VisMode::GroupId,
            ModeChoice::Part => cloudanim::VisMode::PartId,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Generate(args) => cmd_generate(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read dataset '{}'", path.display()))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = read_bytes(&args.in_path)?;
    let cloud = cloudanim::decode_binary_ply(&bytes)
        .with_context(|| format!("decode '{}'", args.in_path.display()))?;
    let hierarchy = cloudanim::build_hierarchy(cloud.attributes());

    let summary = serde_json::json!({
        "points": cloud.count(),
        "centering_offset": cloud.centering_offset(),
        "bounds": cloud.bounds(),
        "hierarchy": hierarchy,
    });
    let text = serde_json::to_string_pretty(&summary).context("serialize summary")?;
    println!("{text}");
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let spec = cloudanim::ExampleSpec {
        seed: args.seed,
        points_per_part: args.points_per_part,
        ..cloudanim::ExampleSpec::default()
    };
    let points = cloudanim::generate_example_cloud(&spec)?;
    let bytes = cloudanim::encode_binary_ply(&points);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write ply '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} points)", args.out.display(), points.len());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("fps must be > 0");
    }
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("seconds must be a finite, non-negative number");
    }

    let config = match &args.config {
        Some(path) => cloudanim::SessionConfig::from_json_file(path)?,
        None => cloudanim::SessionConfig::default(),
    };
    let mut session = cloudanim::Session::new(&config);
    if let Some(mode) = args.mode {
        session.set_mode(mode.into());
    }
    if let Some(path) = &args.in_path {
        session
            .load_file(path)
            .with_context(|| format!("load '{}'", path.display()))?;
    }
    if args.play1 {
        session.dispatch(cloudanim::AnimationEvent::Start(
            cloudanim::AnimationId::Displacement,
        ));
    }
    if args.play2 {
        session.dispatch(cloudanim::AnimationEvent::Start(
            cloudanim::AnimationId::PartTransform,
        ));
    }

    let delta = 1.0 / args.fps as f32;
    let frames = (args.seconds * args.fps as f32).round() as u64;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    // Frame 0 shows the state before any time has passed.
    let mut contract = session.contract();
    for frame in 0..=frames {
        if frame > 0 {
            contract = session.tick(delta);
        }
        let line = serde_json::to_string(&contract).context("serialize render contract")?;
        writeln!(out, "{line}").context("write frame")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
