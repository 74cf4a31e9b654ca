//! Native launcher for the scene demos

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use scene_demos::assets::FsAssetSource;
    use scene_demos::{DemoConfig, DemoError, DemoKind, FrameLoop, RecordingRenderer};

    /// Scene demo arguments.
    #[derive(Parser, Debug)]
    #[command(
        name = "scene-demos",
        about = "Interactive 3D scene demos",
        long_about = "Interactive 3D scene demos.\n\n\
            CONTROLS:\n\
              Arrow keys   orbit / move the camera\n\
              l / r        turn left / right (forest)\n\
              Click        cycle textures, toggle the key, change light colour\n\
              Space        pause / resume\n\
              Escape       quit\n\
            \n\
            EXAMPLES:\n\
              # Run the cottage scene with assets from ./assets/cottage\n\
              scene-demos --demo cottage --assets assets/cottage\n\
            \n\
              # Headless run of 120 frames\n\
              scene-demos --demo ludo --max-frames 120",
        version
    )]
    struct Args {
        /// Demo to run (see --list)
        #[arg(long, default_value = "playground")]
        demo: String,

        /// Initial window width in logical pixels.
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Initial window height in logical pixels.
        #[arg(long, default_value = "720")]
        height: u32,

        /// Directory holding the demo's textures/ and models/.
        #[arg(long, default_value = "assets")]
        assets: PathBuf,

        /// Seed for tree placement and random light colours.
        #[arg(long)]
        seed: Option<u64>,

        /// Ignore OS key auto-repeat in step-per-press controls.
        #[arg(long)]
        no_key_repeat: bool,

        /// Run without a window for N frames, then exit.
        #[arg(long)]
        max_frames: Option<usize>,

        /// List available demos and exit.
        #[arg(long)]
        list: bool,
    }

    pub fn main() -> Result<(), DemoError> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args = Args::parse();
        if args.list {
            for kind in DemoKind::ALL {
                println!("{kind}");
            }
            return Ok(());
        }

        let kind: DemoKind = args.demo.parse()?;
        let defaults = DemoConfig::default();
        let config = DemoConfig {
            width: args.width,
            height: args.height,
            asset_root: args.assets,
            key_repeat: !args.no_key_repeat,
            seed: args.seed.unwrap_or(defaults.seed),
            ..defaults
        };
        log::info!("Asset root: {}", config.asset_root.display());

        let demo = kind.build(&config);
        let source = Box::new(FsAssetSource::new(&config.asset_root));

        match args.max_frames {
            Some(frames) => {
                let renderer = RecordingRenderer::new(config.width, config.height, config.pixel_ratio)
                    .with_log_interval(60);
                let mut frame_loop = FrameLoop::new(demo, renderer, source, &config);
                frame_loop.start();
                let ran = frame_loop.run_frames(frames);
                let scene = frame_loop.demo().scene();
                log::info!(
                    "Ran {} frames: {} of {} objects present, {} assets still pending",
                    ran,
                    scene.present_objects().count(),
                    scene.object_count(),
                    scene.assets.pending_count()
                );
                Ok(())
            }
            None => scene_demos::window::run(&config, demo, source),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), scene_demos::DemoError> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
