use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bevy_utils::tracing::warn;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_tactics::components::world::Position;
use grid_tactics::data::roster::{load_roster_catalog, RosterCatalog, DEFAULT_ROSTER_PATH};
use grid_tactics::render::render_ascii;
use grid_tactics::{Game, Key, Snapshot};

const VIEW_RADIUS: i32 = 12;

/// Terminal driver for the grid tactics simulation.
#[derive(Debug, Parser)]
#[command(name = "grid-tactics", version, about)]
struct Args {
    /// Roster JSON to spawn from; the built-in roster is used when omitted and the
    /// default file is missing.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Seed for AI randomness.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let game = load_roster(args.roster).and_then(|roster| {
        Game::from_roster(&roster, args.seed).map_err(Into::into)
    });
    let mut game = match game {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to load roster: {}", err);
            std::process::exit(1);
        }
    };

    println!("Seed {}", game.seed());
    let mut snapshot = game.frame(Default::default());
    print_snapshot(&snapshot);

    println!("Commands: h/left | j/down | k/up | l/right | wait | quit");
    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let cmd = input.trim().to_lowercase();
        let key = match cmd.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => {
                println!("Commands: h/left | j/down | k/up | l/right | wait | quit");
                continue;
            }
            "wait" | "." => {
                snapshot = game.frame(Default::default());
                print_snapshot(&snapshot);
                continue;
            }
            "h" | "left" => Key::Left,
            "j" | "down" => Key::Down,
            "k" | "up" => Key::Up,
            "l" | "right" => Key::Right,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        };

        snapshot = game.press(key);
        print_snapshot(&snapshot);
        if snapshot.game_over {
            println!("You died.");
            break;
        }
    }
}

fn load_roster(path: Option<PathBuf>) -> Result<RosterCatalog, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(load_roster_catalog(path)?);
    }
    match load_roster_catalog(DEFAULT_ROSTER_PATH) {
        Ok(roster) => Ok(roster),
        Err(err) => {
            warn!(error = %err, "falling back to built-in roster");
            Ok(RosterCatalog::demo())
        }
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    let (px, py) = snapshot.player_pos;
    let min = Position::new(px - VIEW_RADIUS, py - VIEW_RADIUS);
    let max = Position::new(px + VIEW_RADIUS, py + VIEW_RADIUS);
    println!("{}", render_ascii(&snapshot.draw, min, max));
    println!("{} | {}", snapshot.hud(), snapshot.clock);
    for summary in &snapshot.entities {
        let (x, y) = summary.position;
        let (Some(team), Some(hitpoints)) = (summary.team, summary.hitpoints) else {
            continue;
        };
        if (x - px).abs() <= VIEW_RADIUS && (y - py).abs() <= VIEW_RADIUS {
            println!(
                "  {:?} team {} at ({}, {}) hp {}",
                summary.entity, team, x, y, hitpoints as i32
            );
        }
    }
    for line in &snapshot.combat_log {
        println!("  {}", line);
    }
}
