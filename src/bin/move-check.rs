use std::error::Error;
use std::process::ExitCode;

use clap::{arg, command, ArgMatches, Command};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use move_validation::chess_board::fen::INITIAL_POSITION;
use move_validation::{legal_targets, validate, BoardView, ChessBoard, ChessField, Move};

fn main() -> ExitCode {
    let matches = command!()
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(Command::new("board").about("Render a position").arg(fen_arg()))
        .subcommand(
            Command::new("check")
                .about("Check whether a move is pseudo-legal")
                .arg(fen_arg())
                .arg(arg!(<MOVE> "Move in long algebraic notation, e.g. e2e4")),
        )
        .subcommand(
            Command::new("targets")
                .about("List every square the piece on a square can reach")
                .arg(fen_arg())
                .arg(arg!(<SQUARE> "Square in algebraic notation, e.g. g1")),
        )
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let result = match matches.subcommand() {
        Some(("board", arg_matches)) => board(arg_matches),
        Some(("check", arg_matches)) => check(arg_matches),
        Some(("targets", arg_matches)) => targets(arg_matches),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    result.unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        ExitCode::from(2)
    })
}

fn fen_arg() -> clap::Arg {
    arg!(
        -f --fen <FEN> "Board position"
    )
    .default_value(INITIAL_POSITION)
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_board(arg_matches: &ArgMatches) -> Result<ChessBoard, Box<dyn Error>> {
    let fen = arg_matches.get_one::<String>("fen").map(String::as_str).unwrap_or(INITIAL_POSITION);
    debug!(fen, "loading position");
    Ok(ChessBoard::from_fen(fen)?)
}

fn positional<'a>(arg_matches: &'a ArgMatches, id: &str) -> Result<&'a str, Box<dyn Error>> {
    arg_matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument {}", id).into())
}

fn board(arg_matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let board = load_board(arg_matches)?;
    print!("{}", board);
    Ok(ExitCode::SUCCESS)
}

fn check(arg_matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let board = load_board(arg_matches)?;
    let mv = Move::from_algebraic(positional(arg_matches, "MOVE")?)?;
    if validate(&board, mv)? {
        println!("{}: legal", mv);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}: illegal", mv);
        Ok(ExitCode::FAILURE)
    }
}

#[derive(Tabled)]
struct TargetRow {
    target: String,
    kind: &'static str,
    captures: String,
}

fn targets(arg_matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let board = load_board(arg_matches)?;
    let from = ChessField::from_algebraic(positional(arg_matches, "SQUARE")?)?;
    let piece = board.occupant_at(from);
    let targets = legal_targets(&board, from)?;
    debug!(%from, count = targets.len(), "collected targets");

    if let Some(piece) = piece {
        println!("{} {} {:?} on {}", piece.symbol(), piece.color, piece.kind, from);
    }
    if targets.is_empty() {
        println!("No moves available.");
        return Ok(ExitCode::SUCCESS);
    }

    let table_rows: Vec<TargetRow> = targets
        .into_iter()
        .map(|to| match board.occupant_at(to) {
            Some(captured) => TargetRow {
                target: to.as_algebraic(),
                kind: "capture",
                captures: format!("{} {:?}", captured.color, captured.kind),
            },
            None => TargetRow {
                target: to.as_algebraic(),
                kind: "move",
                captures: String::new(),
            },
        })
        .collect();
    println!("{}", Table::new(table_rows).with(Style::modern()));
    Ok(ExitCode::SUCCESS)
}
