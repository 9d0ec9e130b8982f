#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, play_solo,
    render::{coord_to_string, parse_coord, render_board, render_heat_map},
    Difficulty, GameConfig, GameState, Orientation, Phase, ShotReport, Side,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = broadside::DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Place your ships by hand instead of at random")]
        manual: bool,
        #[arg(long, help = "Show the hard AI's heat map over your fleet")]
        heatmap: bool,
    },
    /// Watch one AI strategy clear a random fleet.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = broadside::DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            size,
            manual,
            heatmap,
        } => {
            let mut rng = seeded_rng(seed);
            let config = GameConfig::new(size, difficulty);
            let mut state = if manual {
                GameState::new_manual(config).map_err(|e| anyhow::anyhow!(e))?
            } else {
                GameState::new_auto(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?
            };
            run_play(&mut state, &mut rng, heatmap)?;
        }
        Commands::Watch {
            difficulty,
            seed,
            size,
        } => {
            let mut rng = seeded_rng(seed);
            let config = GameConfig::new(size, difficulty);
            let report =
                play_solo(difficulty, &config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", render_board(&report.final_board, true));
            println!(
                "{} AI fired {} shots ({} hits, {} misses) and sank {} ships",
                difficulty, report.shots, report.hits, report.misses, report.ships_sunk
            );
            let shots: Vec<String> = report.history.iter().map(|&c| coord_to_string(c)).collect();
            println!("Shots: {}", shots.join(" "));
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let line = line?;
            if line.trim().eq_ignore_ascii_case("quit") {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        None => Ok(None),
    }
}

#[cfg(feature = "std")]
fn run_play(state: &mut GameState, rng: &mut SmallRng, show_heat: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let size = state.config().board_size;

    while let Some(def) = state.next_ship_to_place().copied() {
        println!("\nYour board:\n{}", render_board(state.player_board(), true));
        let text = format!("Place your {} ({}), e.g. 'A1 h' or 'C3 v': ", def.name(), def.length());
        let Some(line) = prompt(&mut lines, &text)? else {
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        let coord = parts.next().and_then(|p| parse_coord(p, size));
        let orientation = match parts.next().map(|p| p.to_ascii_lowercase()) {
            Some(p) if p.starts_with('v') => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        let Some(coord) = coord else {
            println!("Invalid coordinate.");
            continue;
        };
        if let Err(e) = state.place_player_ship(coord, orientation, rng) {
            println!("{}", e);
        }
    }

    while state.phase() == Phase::Playing {
        println!("\n=== Turn {} ({} AI) ===", state.turn_count() + 1, state.difficulty());
        println!("Opponent's waters:\n{}", render_board(state.ai_board(), false));
        println!("Your fleet:\n{}", render_board(state.player_board(), true));
        if show_heat {
            if let Some(heat) = state.heat_map() {
                println!("{}", render_heat_map(heat));
            }
        }
        let Some(line) = prompt(&mut lines, "Fire at (e.g. B7, 'quit' to stop): ")? else {
            return Ok(());
        };
        let Some(target) = parse_coord(&line, size) else {
            println!("Invalid coordinate.");
            continue;
        };
        let report = state.player_fire(target, rng);
        if report.is_noop() {
            println!("Already fired there, pick another cell.");
            continue;
        }
        if let Some(shot) = &report.human {
            describe("You", shot);
        }
        if let Some(shot) = &report.ai {
            describe("AI", shot);
        }
    }

    println!("\n=== GAME OVER ===");
    println!("Opponent's waters:\n{}", render_board(state.ai_board(), true));
    println!("Your fleet:\n{}", render_board(state.player_board(), true));
    match state.winner() {
        Some(Side::Human) => println!("You win! All enemy ships have been sunk."),
        Some(Side::Ai) => println!("You lost. The AI sank your fleet."),
        None => println!("Game over."),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn describe(who: &str, shot: &ShotReport) {
    let at = coord_to_string(shot.target);
    match (&shot.sunk_ship, shot.hit) {
        (Some(ship), _) => println!("{} fired at {}: hit and sank the {}!", who, at, ship.name()),
        (None, true) => println!("{} fired at {}: hit.", who, at),
        (None, false) => println!("{} fired at {}: miss.", who, at),
    }
}
