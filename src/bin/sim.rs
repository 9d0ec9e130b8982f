#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{play_solo, Difficulty, GameConfig};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Run solo games for every difficulty and print a JSON summary.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    /// Games per difficulty.
    games: usize,
    /// Base seed; game `i` uses `seed + i`.
    seed: u64,
    #[arg(long, default_value_t = broadside::DEFAULT_BOARD_SIZE)]
    size: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut results = serde_json::Map::new();

    for difficulty in Difficulty::ALL {
        let config = GameConfig::new(args.size, difficulty);
        let mut shots = Vec::with_capacity(args.games);
        let mut completed = 0usize;
        for i in 0..args.games {
            let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(i as u64));
            let report = play_solo(difficulty, &config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            if report.completed {
                completed += 1;
            }
            shots.push(report.shots);
        }
        let mean = if shots.is_empty() {
            0.0
        } else {
            shots.iter().sum::<usize>() as f64 / shots.len() as f64
        };
        results.insert(
            difficulty.to_string(),
            json!({
                "games": args.games,
                "completed": completed,
                "mean_shots": mean,
                "min_shots": shots.iter().min(),
                "max_shots": shots.iter().max(),
            }),
        );
    }

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
