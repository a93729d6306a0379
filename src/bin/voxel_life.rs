//! Headless runner: steps a lattice and logs the population per generation.
//!
//! `RUST_LOG=info voxel-life --size 16 --seed mpltsjkm --generations 50`

use clap::Parser;
use voxel_life::{Command, Driver, Outcome, Settings};

#[derive(Parser, Debug)]
#[command(name = "voxel-life")]
#[command(about = "Run a 3D Game of Life lattice without a renderer")]
struct Args {
    /// JSON settings file; flags below override it
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Lattice side length
    #[arg(short, long)]
    size: Option<i16>,

    /// Randomization seed (synthesized when omitted)
    #[arg(long)]
    seed: Option<String>,

    /// Toroidal neighbor lookup
    #[arg(long)]
    wrap: bool,

    #[arg(long)]
    lonely: Option<u8>,

    #[arg(long)]
    crowded: Option<u8>,

    #[arg(long)]
    birth: Option<u8>,

    /// Probability of life when randomizing
    #[arg(long)]
    ratio: Option<f64>,

    /// Stepping threads
    #[arg(long)]
    threads: Option<usize>,

    /// Generations to run after randomizing
    #[arg(short, long, default_value = "32")]
    generations: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(size) = args.size {
        settings.lattice.size = size;
    }
    if let Some(threads) = args.threads {
        settings.lattice.threads = threads;
    }
    if args.wrap {
        settings.rule.wrap = true;
    }
    if let Some(lonely) = args.lonely {
        settings.rule.lonely = lonely;
    }
    if let Some(crowded) = args.crowded {
        settings.rule.crowded = crowded;
    }
    if let Some(birth) = args.birth {
        settings.rule.birth = birth;
    }
    if let Some(ratio) = args.ratio {
        settings.rule.random_ratio = ratio;
    }
    // Randomize explicitly below so the seed can be reported
    settings.lattice.initial_seed = None;

    let mut driver = Driver::from_settings(&settings)?;
    let seed = match driver.apply(Command::Randomize(args.seed.clone()))? {
        Outcome::Seeded(seed) => seed,
        other => anyhow::bail!("unexpected outcome {:?}", other),
    };
    println!("seed: {}", seed);

    for _ in 0..args.generations {
        if let Outcome::Stepped(changes) = driver.apply(Command::ForceStep)? {
            log::info!(
                "generation {}: {} alive, {} changed",
                driver.lattice.generation,
                driver.lattice.population(),
                changes.len()
            );
        }
    }

    println!(
        "generation {}: {} of {} cells alive",
        driver.lattice.generation,
        driver.lattice.population(),
        driver.lattice.volume()
    );
    Ok(())
}
