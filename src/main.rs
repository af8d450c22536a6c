use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_catalog::engine::FastRandSource;
use video_catalog::{Engine, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "video-catalog")]
#[command(about = "Browse, play and organize a video catalog", long_about = None)]
struct Args {
    /// Path to the video catalog (.json or `title | id | #tags` text)
    #[arg(short = 'c', long, default_value = "videos.txt")]
    catalog: String,

    /// Seed for PLAY_RANDOM (makes random picks reproducible)
    #[arg(long)]
    seed: Option<u64>,

    /// No banner or prompt (for piped input)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);

    let mut config = SessionConfig::new(PathBuf::from(catalog_path.as_ref()));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.quiet {
        config = config.quiet();
    }

    let library = video_catalog::loader::load_catalog(&config.catalog_path)?;

    let random = match config.seed {
        Some(seed) => {
            log::debug!("Random selection seeded with {}", seed);
            FastRandSource::with_seed(seed)
        }
        None => FastRandSource::new(),
    };

    let engine = Engine::new(library, random);
    let mut session = Session::new(engine).with_banner(config.interactive);
    if config.interactive {
        session = session.with_prompt("> ");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
