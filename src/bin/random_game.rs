//! Seeded random game runner.
//!
//! Usage:
//! `cargo run --bin random_game`
//! `cargo run --bin random_game -- --seed 7 --plies 300`

use mailbox_chess::utils::random_playout::random_playout;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    let seed = parse_arg_u64("--seed", 0);
    let plies = parse_arg_u64("--plies", 200) as usize;

    let playout = random_playout(seed, plies).map_err(|e| e.to_string())?;

    let moves: Vec<String> = playout.moves.iter().map(|m| m.to_string()).collect();
    for (number, pair) in moves.chunks(2).enumerate() {
        println!("{:>3}. {}", number + 1, pair.join(" "));
    }
    println!("\n{}\n", playout.final_state);
    println!(
        "seed={seed} plies={} outcome={:?}",
        playout.moves.len(),
        playout.outcome
    );
    Ok(())
}
