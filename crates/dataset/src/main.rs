//! Dataset CLI
//!
//! Replay PGN move text and write one-hot board datasets.

use anyhow::{bail, Context, Result};
use dataset::{build_dataset, read_jsonl, write_jsonl, BatchReport, DatasetConfig, ErrorPolicy};
use replay_core::{find_result, read_games_from_path, tokenize, Board, Color, GameReplay};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Dataset Builder");
    println!();
    println!("Usage:");
    println!("  dataset build <input> [--output FILE] [--config FILE] [--report FILE] [--threads N] [--strict]");
    println!("  dataset replay <move text> [--from PLACEMENT] [--black] [--codes]");
    println!("  dataset inspect <dataset.jsonl> [--game N]");
    println!();
    println!("Options:");
    println!("  --output, -o   JSON-lines output (default: boards.jsonl)");
    println!("  --config, -c   TOML build configuration");
    println!("  --report, -r   also save the build report as JSON");
    println!("  --threads, -t  worker threads (default: all cores)");
    println!("  --strict       stop at the first game that cannot be replayed");
    println!("  --from         replay from a FEN piece placement instead of the start");
    println!("  --black        black moves first (with --from)");
    println!("  --codes        print snapshots as signed piece codes");
    println!("  --game         print every snapshot of one stored game");
    println!();
    println!("Examples:");
    println!("  dataset build games.pgn --output boards.jsonl --threads 8");
    println!("  dataset replay \"1.e4 e5 2.Nf3 Nc6\"");
    println!("  dataset replay \"1.O-O\" --from 4k3/8/8/8/8/8/8/4K2R --codes");
    println!("  dataset inspect boards.jsonl --game 0");
}

fn value_after<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{flag} requires a value"),
    }
}

fn run_build(args: &[String]) -> Result<()> {
    let Some(input) = args.first() else {
        bail!("build requires an input file");
    };

    // Parse optional arguments
    let mut output = PathBuf::from("boards.jsonl");
    let mut config_path: Option<PathBuf> = None;
    let mut report_path: Option<PathBuf> = None;
    let mut threads: Option<usize> = None;
    let mut strict = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                output = PathBuf::from(value_after(args, i, "--output")?);
                i += 1;
            }
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(value_after(args, i, "--config")?));
                i += 1;
            }
            "--report" | "-r" => {
                report_path = Some(PathBuf::from(value_after(args, i, "--report")?));
                i += 1;
            }
            "--threads" | "-t" => {
                let n = value_after(args, i, "--threads")?;
                threads = Some(n.parse().with_context(|| format!("invalid thread count {n:?}"))?);
                i += 1;
            }
            "--strict" => strict = true,
            other => bail!("unknown option {other}"),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => DatasetConfig::load(path)?,
        None => DatasetConfig::default(),
    };
    if threads.is_some() {
        config.threads = threads;
    }
    if strict {
        config.on_error = ErrorPolicy::Abort;
    }

    let games = read_games_from_path(Path::new(input), config.outcome_offset)
        .with_context(|| format!("failed to read games from {input}"))?;
    info!(games = games.len(), input = %input, "read game records");

    let batch = build_dataset(&games, &config)?;

    let file = File::create(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_jsonl(&mut writer, &batch.games)?;
    writer.flush()?;
    info!(path = %output.display(), "wrote dataset");

    let report = BatchReport::new(input, games.len(), &batch);
    report.print_report();
    if let Some(path) = report_path {
        report
            .save(&path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
    }

    Ok(())
}

fn print_codes(board: &Board) {
    for row in board.to_codes() {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>2}")).collect();
        println!("{}", cells.join(" "));
    }
}

fn run_replay(args: &[String]) -> Result<()> {
    let mut words: Vec<&str> = Vec::new();
    let mut start: Option<Board> = None;
    let mut side = Color::White;
    let mut codes = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--from" => {
                let placement = value_after(args, i, "--from")?;
                start = Some(
                    Board::from_placement(placement)
                        .with_context(|| format!("invalid placement {placement:?}"))?,
                );
                i += 1;
            }
            "--black" => side = Color::Black,
            "--codes" => codes = true,
            word => words.push(word),
        }
        i += 1;
    }
    if words.is_empty() {
        bail!("replay requires move text");
    }

    let text = words.join(" ");
    let tokens = tokenize(&text)?;
    let mut game = match start {
        Some(board) => GameReplay::from_position(board, side),
        None => GameReplay::new(),
    };
    let first = game.side_to_move();
    let snapshots = game.play_all(&tokens)?;

    // black's first move counts as ply 1 of move 1
    let offset = usize::from(first == Color::Black);
    for (ply, (token, board)) in tokens.iter().zip(&snapshots).enumerate() {
        let half = ply + offset;
        let number = half / 2 + 1;
        let dots = if half % 2 == 0 { "." } else { "..." };
        println!("{number}{dots} {token}");
        if codes {
            print_codes(board);
        } else {
            println!("{board}");
        }
        println!();
    }
    if let Some(result) = find_result(&text) {
        println!("Result: {result}");
    }

    Ok(())
}

fn run_inspect(args: &[String]) -> Result<()> {
    let Some(input) = args.first() else {
        bail!("inspect requires a dataset file");
    };

    let mut selected: Option<usize> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--game" | "-g" => {
                let n = value_after(args, i, "--game")?;
                selected = Some(n.parse().with_context(|| format!("invalid game index {n:?}"))?);
                i += 1;
            }
            other => bail!("unknown option {other}"),
        }
        i += 1;
    }

    let file = File::open(input).with_context(|| format!("failed to open {input}"))?;
    let games = read_jsonl(BufReader::new(file))
        .with_context(|| format!("failed to read dataset {input}"))?;
    info!(games = games.len(), input = %input, "read dataset");

    match selected {
        None => {
            println!("{:<8} {:<8} {:<10} {}", "Game", "Line", "Outcome", "Plies");
            println!("{}", "-".repeat(40));
            for game in &games {
                let outcome = game.outcome.map_or("none", |o| o.as_str());
                println!("{:<8} {:<8} {:<10} {}", game.index, game.line, outcome, game.plies);
            }
        }
        Some(index) => {
            let Some(game) = games.iter().find(|g| g.index == index) else {
                bail!("game {index} is not in {input}");
            };
            let boards = game
                .snapshots()
                .with_context(|| format!("game {index} holds an invalid snapshot"))?;
            if boards.is_empty() && game.plies > 0 {
                bail!("game {index} was written without boards");
            }
            for (ply, board) in boards.iter().enumerate() {
                println!("Ply {}", ply + 1);
                println!("{board}");
                println!();
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "build" => run_build(&args[2..]),
        "replay" => run_replay(&args[2..]),
        "inspect" => run_inspect(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}
