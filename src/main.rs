use anyhow::Result;
use clap::Parser;
use songlist::demo::{self, DemoConfig};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "songlist")]
#[command(about = "Build a small music library and shuffle a playlist", long_about = None)]
struct Args {
    /// Seed for the playlist shuffle (random if omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Also print the shuffled playlist as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = DemoConfig::new().with_json(args.json);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let stdout = io::stdout();
    demo::run(&config, &mut stdout.lock())?;

    Ok(())
}
