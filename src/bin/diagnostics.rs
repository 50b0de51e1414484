//! Runs the move selector over FEN positions given on the command line.
//!
//! Usage: `diagnostics [--depth N] <fen>...`

use std::time::Duration;

use tactician::board::uci;
use tactician::{Board, MoveSelector, SelectorConfig};

const BUDGET: Duration = Duration::from_secs(1);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = SelectorConfig::default();
    if args.first().map(String::as_str) == Some("--depth") {
        match args.get(1).map(|depth| depth.parse::<u32>()) {
            Some(Ok(depth)) => config = config.with_mate_depth(depth),
            _ => {
                eprintln!("usage: diagnostics [--depth N] <fen>...");
                std::process::exit(2);
            }
        }
        args = args.split_off(2);
    }
    if args.is_empty() {
        eprintln!("usage: diagnostics [--depth N] <fen>...");
        std::process::exit(2);
    }

    let selector = MoveSelector::new(config);
    let mut failures = 0;
    for fen in &args {
        let outcome = Board::from_fen(fen)
            .map_err(|e| e.to_string())
            .and_then(|mut board| {
                selector
                    .decide(&mut board, BUDGET)
                    .map_err(|e| e.to_string())
            });
        match outcome {
            Ok(decision) => println!(
                "{fen} -> {} ({}, {:?})",
                uci(&decision.mv),
                decision.tier,
                decision.elapsed
            ),
            Err(e) => {
                failures += 1;
                println!("{fen} -> error: {e}");
            }
        }
    }
    if failures > 0 {
        log::warn!("{failures} of {} position(s) failed", args.len());
        std::process::exit(1);
    }
}
