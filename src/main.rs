use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use chess_engine::perft::{divide, perft};
use chess_engine::{Color, GameState, Move, Position};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use chesslogic::core::{
    init_logging, load_settings, resolve_filter, settings_path, CoreError, OutputFormat, Settings,
};
use chesslogic::game::command::HELP;
use chesslogic::game::{render_position, render_session, ClickOutcome, Command, GameSession, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "chesslogic", version, about = "Two-player chess rules engine")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `chess_engine=trace`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Play interactively, reading commands from stdin
    Play,
    /// Apply a sequence of moves and print the result
    Replay {
        /// Moves in coordinate notation, e.g. e2e4 e7e5
        moves: Vec<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Count move paths from the starting position
    Perft {
        #[arg(long, default_value_t = 3)]
        depth: u32,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    moves: &'a [Move],
    turn: Color,
    status: GameState,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&config_path);
    let filter = resolve_filter(
        cli.log.as_deref(),
        std::env::var("RUST_LOG").ok(),
        &settings.log_filter,
    );
    init_logging(&filter);

    match cli.command {
        CliCommand::Play => run_play(&settings),
        CliCommand::Replay { moves, format } => {
            run_replay(&moves, format.unwrap_or(settings.output_format), &settings)
        }
        CliCommand::Perft { depth, divide } => run_perft(depth, divide),
    }
}

fn run_play(settings: &Settings) -> anyhow::Result<()> {
    let mut session = GameSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{HELP}\n");
    print_board(&session, settings);

    loop {
        print!("{} > ", session.position().turn());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Move(from, to) => {
                let outcome = session.submit(from, to);
                report_outcome(&session, outcome, settings);
            }
            Command::Click(square) => {
                let outcome = session.click(square);
                report_outcome(&session, outcome, settings);
            }
            Command::Undo => match session.undo() {
                Some(mv) => {
                    println!("took back {mv}");
                    print_board(&session, settings);
                }
                None => println!("nothing to undo"),
            },
            Command::Reset => {
                session.reset();
                print_board(&session, settings);
            }
            Command::Moves => {
                let list: Vec<String> = session.legal_moves().iter().map(Move::notation).collect();
                println!("{} legal: {}", list.len(), list.join(" "));
            }
            Command::Board => print_board(&session, settings),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    info!("[SESSION] Leaving after {} plies", session.position().ply());
    Ok(())
}

fn report_outcome(session: &GameSession, outcome: ClickOutcome, settings: &Settings) {
    match outcome {
        ClickOutcome::Selected(square) => {
            if session.legal_targets(square).is_empty() {
                println!("{square} selected (no legal moves from here)");
            }
            print_board(session, settings);
        }
        ClickOutcome::Deselected => println!("selection cleared"),
        ClickOutcome::Moved(_) => print_board(session, settings),
        ClickOutcome::Rejected { from, to } => {
            println!("{from}{to} is not legal");
            warn!("[SESSION] Rejected {from}{to}");
        }
    }
}

fn print_board(session: &GameSession, settings: &Settings) {
    print!(
        "{}",
        render_session(session, settings.unicode_pieces, settings.show_legal_moves)
    );
    match session.status() {
        GameState::Playing => {}
        GameState::Check => println!("{} is in check", session.position().turn()),
        GameState::Checkmate => println!(
            "checkmate, {} wins",
            session.position().turn().opponent()
        ),
        GameState::Stalemate => println!("stalemate"),
    }
}

fn run_replay(moves: &[String], format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    let mut session = GameSession::new();

    for (index, notation) in moves.iter().enumerate() {
        if session.is_over() {
            bail!("game is over after {index} moves; {notation} cannot be played");
        }
        let Command::Move(from, to) = notation.parse::<Command>().map_err(CoreError::from)? else {
            bail!("expected a move like e2e4, got {notation:?}");
        };
        if !matches!(session.submit(from, to), ClickOutcome::Moved(_)) {
            bail!("move {} ({notation}) is not legal", index + 1);
        }
    }

    match format {
        OutputFormat::Text => {
            let options = RenderOptions {
                unicode: settings.unicode_pieces,
                ..Default::default()
            };
            print!("{}", render_position(session.position(), &options));
            println!("{} to move, {}", session.position().turn(), session.status());
        }
        OutputFormat::Json => {
            let report = ReplayReport {
                moves: session.position().move_log(),
                turn: session.position().turn(),
                status: session.status(),
            };
            let json = serde_json::to_string_pretty(&report).context("serialising replay")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_perft(depth: u32, show_divide: bool) -> anyhow::Result<()> {
    let mut position = Position::new();
    let started = Instant::now();

    let nodes = if show_divide {
        let counts = divide(&mut position, depth);
        for (mv, count) in &counts {
            println!("{mv}: {count}");
        }
        counts.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(&mut position, depth)
    };

    let elapsed = started.elapsed();
    println!("\nNodes searched: {nodes}");
    info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, "[PERFT] done");
    Ok(())
}
