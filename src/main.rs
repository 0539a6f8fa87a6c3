//! Knight's Tour - CLI
//!
//! Warnsdorff tour solver with TUI and CLI modes.
//! Covers the full board from 61 of the 64 start squares.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use knights_tour::{
    animation::AnimationConfig,
    commands::{
        SolveConfig, print_survey_statistics, rank_moves, resolve_start, run_simple, run_survey,
        solve_tour, survey_starts,
    },
    output::{print_rank_result, print_solve_result},
    solver::TourSolver,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "knights_tour",
    about = "Knight's Tour solver and animator using Warnsdorff's rule",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Animation frame rate (1-240)
    #[arg(long, global = true, default_value_t = AnimationConfig::DEFAULT_FPS)]
    fps: u32,

    /// Knight speed in squares per second
    #[arg(long, global = true, default_value_t = AnimationConfig::DEFAULT_SPEED)]
    speed: f64,

    /// Write logs to this file (the only log output in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - animated board)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a tour from a start square
    Solve {
        /// Start square as 'row,col' or algebraic (e.g. d5); random if omitted
        square: Option<String>,

        /// Show the candidate ranking at every step
        #[arg(short, long)]
        verbose: bool,

        /// Print the board with move numbers
        #[arg(short, long)]
        board: bool,
    },

    /// Show how the heuristic ranks the moves from a square
    Rank {
        /// Start square as 'row,col' or algebraic (e.g. d5)
        square: String,

        /// Rank the moves after this many moves of the tour
        #[arg(short, long, default_value = "0")]
        after: usize,
    },

    /// Solve from every start square and summarise coverage
    Survey {
        /// Limit number of start squares (row-major order)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_level(text: &str) -> Result<LevelFilter, String> {
    text.parse()
        .map_err(|_| format!("Unknown log level '{text}'"))
}

fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(path) = &cli.log_file {
        let log_file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(cli.log_level, log_config, log_file)
            .context("Failed to install file logger")?;
    } else if !interactive {
        // The TUI owns the terminal, so it only ever logs to a file
        TermLogger::init(
            cli.log_level,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .context("Failed to install terminal logger")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let config = AnimationConfig::new(cli.fps, cli.speed).context("Invalid animation settings")?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, matches!(command, Commands::Play))?;
    log::info!("Knight's tour starting: {}", command.name());

    let solver = TourSolver::new();

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            square,
            verbose,
            board,
        } => run_solve_command(&solver, square.as_deref(), verbose, board),
        Commands::Rank { square, after } => run_rank_command(&solver, &square, after),
        Commands::Survey { limit } => {
            run_survey_command(&solver, limit);
            Ok(())
        }
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Simple => "simple",
            Self::Solve { .. } => "solve",
            Self::Rank { .. } => "rank",
            Self::Survey { .. } => "survey",
        }
    }
}

fn run_solve_command(
    solver: &TourSolver,
    square: Option<&str>,
    verbose: bool,
    board: bool,
) -> Result<()> {
    let start = resolve_start(square).map_err(|e| anyhow::anyhow!(e))?;
    let mut config = SolveConfig::new(start);
    config.trace = verbose;

    let result = solve_tour(&config, solver);
    print_solve_result(&result, verbose, board);
    Ok(())
}

fn run_rank_command(solver: &TourSolver, square: &str, after: usize) -> Result<()> {
    let start = resolve_start(Some(square)).map_err(|e| anyhow::anyhow!(e))?;
    let result = rank_moves(start, after, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_rank_result(&result);
    Ok(())
}

fn run_survey_command(solver: &TourSolver, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Warnsdorff Coverage Survey ");
    println!("{}", "═".repeat(70));

    let starts = survey_starts(limit);
    let stats = run_survey(solver, &starts, true);
    print_survey_statistics(&stats);
}

fn run_play_command(config: AnimationConfig) -> Result<()> {
    use knights_tour::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
