//! Perft runner for the starting position.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --divide`
//!
//! Set `RUST_LOG=debug` for engine logging.

use std::time::Instant;

use log::info;

use chess_rules::move_generation::perft::{perft, perft_divide};
use chess_rules::BoardState;

#[derive(Debug, Clone, Copy)]
struct PerftRunConfig {
    depth: u8,
    divide: bool,
}

impl Default for PerftRunConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            divide: false,
        }
    }
}

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_config() -> PerftRunConfig {
    let defaults = PerftRunConfig::default();
    PerftRunConfig {
        depth: parse_arg_u8("--depth", defaults.depth),
        divide: std::env::args().any(|a| a == "--divide"),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = parse_config();
    let board = BoardState::new_game();
    info!("running perft with {config:?}");
    println!("{board}\n");

    if config.divide {
        for ((from, to, promotion), nodes) in
            perft_divide(&board, config.depth).map_err(|e| e.to_string())?
        {
            match promotion {
                Some(kind) => println!("{from}{to}={kind}: {nodes}"),
                None => println!("{from}{to}: {nodes}"),
            }
        }
    }

    let started = Instant::now();
    let counts = perft(&board, config.depth).map_err(|e| e.to_string())?;
    let elapsed_ms = started.elapsed().as_millis();

    println!(
        "depth={} nodes={} elapsed_ms={elapsed_ms}",
        config.depth, counts.nodes
    );
    println!(
        "captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    Ok(())
}
