use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use spryte::{FixedCamera, Pixmap, Scene, SimpleSprite, SpriteWorld, decode_image};

#[derive(Parser, Debug)]
#[command(name = "spryte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a scene into a PNG.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let json = fs::read_to_string(&args.in_path)
        .with_context(|| format!("open scene '{}'", args.in_path.display()))?;
    let scene = Scene::from_json_str(&json)?;
    scene.validate()?;

    // All decoding happens before the draw pass.
    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let mut world = SpriteWorld::new();
    for spec in &scene.sprites {
        let path = assets_root.join(&spec.image);
        let bytes = fs::read(&path)
            .with_context(|| format!("read sprite image '{}'", path.display()))?;
        let source = decode_image(&bytes)?;
        let mut sprite = SimpleSprite::from_source(&source);
        sprite.x = spec.x;
        sprite.y = spec.y;
        sprite.rotation = spec.rotation;
        sprite.scale_x = spec.scale_x;
        sprite.scale_y = spec.scale_y;
        world.push(Box::new(sprite));
    }

    let camera = FixedCamera::new(scene.camera);
    let mut frame = Pixmap::new(scene.canvas.width, scene.canvas.height);
    frame.fill(scene.background);
    world.draw(&camera, &mut frame);

    let img = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .context("frame buffer does not match canvas dimensions")?;
    img.save(&args.out)
        .with_context(|| format!("write PNG '{}'", args.out.display()))?;

    println!(
        "wrote {} ({}x{}, {} sprites)",
        args.out.display(),
        frame.width(),
        frame.height(),
        world.len()
    );
    Ok(())
}
