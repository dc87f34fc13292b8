//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 5 --position kiwipete --divide`

use std::time::Instant;

use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::{
    kiwipete, perft_divide, perft_multi_threaded, position_3,
};

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

fn parse_arg_str(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map_or_else(|| default.to_owned(), |pair| pair[1].clone())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn load_position(name: &str) -> Result<GameState, String> {
    match name {
        "start" => Ok(GameState::new_game()),
        "kiwipete" => kiwipete().map_err(|e| e.to_string()),
        "position3" => position_3().map_err(|e| e.to_string()),
        other => Err(format!(
            "unknown position '{other}', expected start, kiwipete or position3"
        )),
    }
}

fn main() -> Result<(), String> {
    let depth = parse_arg_u8("--depth", 4);
    let position = parse_arg_str("--position", "start");
    let game = load_position(&position)?;

    println!("{game}\n");

    if has_flag("--divide") {
        let mut total = 0usize;
        for (mv, nodes) in perft_divide(&game, depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("\nmoves={} nodes={total}", game.legal_moves().len());
        return Ok(());
    }

    for d in 1..=depth {
        let started = Instant::now();
        let counts = perft_multi_threaded(&game, d);
        let elapsed = started.elapsed();
        let nps = (counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
        println!(
            "depth={d} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={} nps={nps}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            elapsed.as_millis(),
        );
    }

    Ok(())
}
