//! Arena CLI
//!
//! Play single games or run series between sides.

use std::env;

use arena::{ArenaConfig, GameSession, HumanSide, generate_board, load_board, run_series};
use lookahead::{AdaptiveSide, AlphaBetaSide, MinimaxSide};
use scripted::{BlindRandomSide, FirstValidSide, RandomSide};
use sudoku_core::{Board, Side, SideId};

const CONFIG_PATH: &str = "arena.toml";

fn print_usage() {
    println!("Constraint-Sudoku Arena");
    println!();
    println!("Usage:");
    println!("  arena play <sideA> <sideB> [options]");
    println!("  arena simulate <sideA> <sideB> [--games N] [options]");
    println!();
    println!("Sides:");
    println!("  human         - Console input");
    println!("  random        - Uniform choice among legal moves");
    println!("  blind         - Random cell and value, unchecked");
    println!("  first         - First cell with a candidate, highest value");
    println!("  minimax       - Fixed-depth minimax");
    println!("  alphabeta     - Fixed-depth alpha-beta");
    println!("  adaptive      - Budgeted-depth alpha-beta");
    println!();
    println!("Options:");
    println!("  --size N        Board side length (perfect square)");
    println!("  --file PATH     Load the starting grid from a file");
    println!("  --prefill P     Percentage of cells filled at start");
    println!("  --constraints K Number of consecutive constraints");
    println!("  --depth D       Search depth for minimax/alphabeta");
    println!("  --games N       Games per series (simulate)");
    println!("  --save PATH     Write the series tally to a JSON file");
    println!("  --stats         Collect and print per-side search stats");
    println!("  --quiet         Suppress per-turn output");
    println!();
    println!("Examples:");
    println!("  arena play human adaptive --size 9 --prefill 40");
    println!("  arena simulate alphabeta minimax --games 50 --depth 4");
}

fn create_side(spec: &str, depth: u32) -> Result<Box<dyn Side>, String> {
    match spec.to_lowercase().as_str() {
        "human" => Ok(Box::new(HumanSide::new("Human"))),
        "random" => Ok(Box::new(RandomSide::new())),
        "blind" => Ok(Box::new(BlindRandomSide::new())),
        "first" => Ok(Box::new(FirstValidSide::new())),
        "minimax" | "mm" => Ok(Box::new(MinimaxSide::new(depth)?)),
        "alphabeta" | "ab" => Ok(Box::new(AlphaBetaSide::new(depth)?)),
        "adaptive" => Ok(Box::new(AdaptiveSide::new())),
        _ => Err(format!("Unknown side: {}", spec)),
    }
}

/// CLI options layered over the config-file defaults.
struct Options {
    config: ArenaConfig,
    board_file: Option<String>,
    save_path: Option<String>,
    stats: bool,
}

fn parse_options(args: &[String]) -> Options {
    let mut opts = Options {
        config: ArenaConfig::load_or_default(CONFIG_PATH),
        board_file: None,
        save_path: None,
        stats: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--size" | "-s" => {
                if i + 1 < args.len() {
                    opts.config.board_size = args[i + 1].parse().unwrap_or(opts.config.board_size);
                    i += 1;
                }
            }
            "--prefill" | "-p" => {
                if i + 1 < args.len() {
                    opts.config.prefill_percent =
                        args[i + 1].parse().unwrap_or(opts.config.prefill_percent);
                    i += 1;
                }
            }
            "--constraints" | "-c" => {
                if i + 1 < args.len() {
                    opts.config.constraints = args[i + 1].parse().unwrap_or(opts.config.constraints);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    opts.config.depth = args[i + 1].parse().unwrap_or(opts.config.depth);
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    opts.config.games = args[i + 1].parse().unwrap_or(opts.config.games);
                    i += 1;
                }
            }
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    opts.board_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--save" => {
                if i + 1 < args.len() {
                    opts.save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--stats" => opts.stats = true,
            "--quiet" | "-q" => opts.config.verbose = false,
            _ => {}
        }
        i += 1;
    }
    opts
}

fn starting_board(opts: &Options) -> Result<Board, String> {
    match &opts.board_file {
        Some(path) => load_board(path),
        None => generate_board(
            opts.config.board_size,
            opts.config.prefill_percent,
            opts.config.constraints,
        ),
    }
}

fn run_play(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("play requires two side specifications".to_string());
    }
    let opts = parse_options(&args[2..]);

    let mut side_a = create_side(&args[0], opts.config.depth)?;
    let mut side_b = create_side(&args[1], opts.config.depth)?;
    let board = starting_board(&opts)?;

    let session = GameSession {
        verbose: opts.config.verbose,
        collect_stats: opts.stats,
        ..Default::default()
    };
    let report = session.run(side_a.as_mut(), side_b.as_mut(), board);

    println!();
    println!("=== Result ===");
    println!(
        "{} (A): {}  |  {} (B): {}  ({:?} in {} turns)",
        args[0], report.scores[0], args[1], report.scores[1], report.outcome, report.turns
    );

    if opts.stats {
        for (id, label, spec) in [(SideId::A, "A", &args[0]), (SideId::B, "B", &args[1])] {
            let s = &report.stats[id.idx()];
            println!(
                "{} {}: {} decisions, {} nodes (min {} / max {} / mean {:.0}), {} ms",
                label,
                spec,
                s.decisions,
                s.total_nodes,
                s.min_nodes,
                s.max_nodes,
                s.mean_nodes(),
                s.total_millis
            );
        }
    }
    Ok(())
}

fn run_simulate(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("simulate requires two side specifications".to_string());
    }
    let opts = parse_options(&args[2..]);

    let mut side_a = create_side(&args[0], opts.config.depth)?;
    let mut side_b = create_side(&args[1], opts.config.depth)?;

    println!("=== Series: {} vs {} ===", args[0], args[1]);
    println!(
        "Games: {}, Board: {}x{}, Prefill: {}%, Depth: {}",
        opts.config.games,
        opts.config.board_size,
        opts.config.board_size,
        opts.config.prefill_percent,
        opts.config.depth
    );
    println!();

    // Generate all boards up front so parameter errors surface before
    // any game is played.
    let mut boards = Vec::with_capacity(opts.config.games as usize);
    for _ in 0..opts.config.games {
        boards.push(starting_board(&opts)?);
    }

    let result = run_series(
        side_a.as_mut(),
        side_b.as_mut(),
        opts.config.games,
        opts.config.verbose,
        |i| boards[i as usize].clone(),
    );

    println!();
    println!("=== Final Tally ===");
    println!(
        "{}: {} wins, {} losses, {} ties",
        args[0], result.wins, result.losses, result.ties
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = &opts.save_path {
        result.save(path)?;
        println!("Saved tally to {}", path);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let outcome = match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => Err(format!("Unknown command: {}", args[1])),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        print_usage();
        std::process::exit(1);
    }
}
