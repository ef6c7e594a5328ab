use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use connect_four_verdict::config::AppConfig;
use connect_four_verdict::game::{find_winning_run, outcome, Board, GameOutcome};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One line per row: `.` empty, `R` red, `Y` yellow
    Text,
    /// Serialized board snapshot
    Json,
}

/// Report whether a Connect Four board snapshot has a winner.
#[derive(Parser)]
#[command(name = "connect-four-verdict", about = "Check a Connect Four board for a winner")]
struct Cli {
    /// Board file to read; `-` or absent reads stdin
    board: Option<PathBuf>,

    /// Input format of the board
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .context("initializing logger")?;

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let source = read_source(cli.board.as_deref())?;
    let board = match cli.format {
        Format::Text => source.parse::<Board>().context("parsing text board")?,
        Format::Json => serde_json::from_str::<Board>(&source).context("parsing JSON board")?,
    };
    config.board.check(&board)?;
    debug!(
        "loaded {}x{} board",
        board.num_rows(),
        board.num_cols()
    );

    match outcome(&board) {
        Some(GameOutcome::Winner(player)) => {
            println!("{}", player.color());
            if config.output.highlight_run {
                if let Some(run) = find_winning_run(&board) {
                    let cells: Vec<String> = run
                        .positions()
                        .iter()
                        .map(|(r, c)| format!("({r}, {c})"))
                        .collect();
                    println!("{}", cells.join(" "));
                }
            }
            info!("{} wins", player);
        }
        Some(GameOutcome::Draw) => println!("none\ndraw"),
        None => println!("none\nin progress"),
    }

    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading board from {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading board from stdin")?;
            Ok(buf)
        }
    }
}
