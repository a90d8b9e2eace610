//! Boggle Solver - CLI
//!
//! Generate or load a Boggle board and query it against a dictionary.

use anyhow::{Context, Result, bail};
use boggle_solver::{
    commands::{SurveyConfig, locate_word, run_survey, solve_board},
    core::{Board, Tile, generate_with_rng},
    dictionary::{
        TrieDictionary,
        loader::{embedded_dictionary, load_from_file},
    },
    output::{print_board, print_locate_result, print_solve_result, print_survey_result},
    session::Session,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle board generator and dictionary-pruned word finder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Board rows, e.g. "cat/rxx/exx" (random board if omitted)
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Side length of the random board
    #[arg(short, long, global = true, default_value = "4", allow_negative_numbers = true)]
    size: i64,

    /// Seed for the random board
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the board (default)
    Show,

    /// Count words on the board
    Count {
        /// Only count words of exactly this length
        #[arg(short, long, allow_negative_numbers = true)]
        length: Option<i64>,
    },

    /// List every word on the board
    Solve,

    /// Check if a word is in the dictionary
    InDictionary {
        /// Word to check
        word: String,
    },

    /// Check if a word is feasible on the board
    InBoard {
        /// Word to check
        word: String,
    },

    /// Find any one word on the board
    Any {
        /// Required word length
        #[arg(short, long, allow_negative_numbers = true)]
        length: Option<i64>,
    },

    /// Show the tile path of a word on the board
    Locate {
        /// Word to locate
        word: String,
    },

    /// Check that a tile path spells a word, e.g. `check cat 0,0 0,1 0,2`
    Check {
        /// Word the path should spell
        word: String,

        /// Tiles as row,col
        #[arg(required = true)]
        tiles: Vec<Tile>,
    },

    /// Count words on many random boards
    Survey {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to showing the board if no command given
    let command = cli.command.unwrap_or(Commands::Show);

    if let Commands::Survey { count } = command {
        let config = SurveyConfig::new(cli.size, count).with_seed(cli.seed.unwrap_or(0));
        let result = run_survey(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
        print_survey_result(&result);
        return Ok(());
    }

    let board = load_board(cli.board.as_deref(), cli.size, cli.seed)?;
    let session = Session::new().with_board(board).with_dictionary(dictionary);

    run_command(command, &session)
}

fn run_command(command: Commands, session: &Session) -> Result<()> {
    let board = session.board().context("No board available")?;

    match command {
        Commands::Show | Commands::Survey { .. } => print_board(board, &[]),
        Commands::Count { length: None } => {
            print_board(board, &[]);
            println!("\nThere are {} possible words", session.count_all_words());
        }
        Commands::Count {
            length: Some(length),
        } => {
            print_board(board, &[]);
            println!(
                "\nThere are {} possible words of length {length}",
                session.count_words_of_length(length)
            );
        }
        Commands::Solve => {
            print_board(board, &[]);
            let result = solve_board(session).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
        }
        Commands::InDictionary { word } => {
            if session.word_exists_in_dictionary(&word) {
                println!("{word} exists in the dictionary.");
            } else {
                println!("{word} doesn't exist in the dictionary.");
            }
        }
        Commands::InBoard { word } => {
            print_board(board, &[]);
            if session.word_exists_in_board(&word) {
                println!("\n{word} exists in the board.");
            } else {
                println!("\n{word} doesn't exist in the board.");
            }
        }
        Commands::Any { length } => {
            print_board(board, &[]);
            let word = match length {
                Some(length) => session.find_any_word_of_length(length),
                None => session.find_any_word(),
            };
            match word {
                Some(word) => println!("\nFound: {}", word.to_uppercase()),
                None => println!("\nNo matching word on this board."),
            }
        }
        Commands::Locate { word } => {
            let result = locate_word(session, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_board(board, result.path.as_deref().unwrap_or(&[]));
            println!();
            print_locate_result(&result);
        }
        Commands::Check { word, tiles } => {
            print_board(board, &tiles);
            if session.check_path(&tiles, &word) {
                println!("\nThe tiles spell {}.", word.to_uppercase());
            } else {
                println!("\nThe tiles do not spell {}.", word.to_uppercase());
            }
        }
    }

    Ok(())
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str) -> Result<TrieDictionary> {
    match source {
        "embedded" => Ok(embedded_dictionary()),
        path => load_from_file(path).with_context(|| format!("Failed to load dictionary {path}")),
    }
}

/// Parse the -b flag, or generate a random board of the requested size
fn load_board(text: Option<&str>, size: i64, seed: Option<u64>) -> Result<Board> {
    if let Some(text) = text {
        return text
            .parse::<Board>()
            .with_context(|| format!("Invalid board '{text}'"));
    }

    let board = match seed {
        Some(seed) => generate_with_rng(size, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(size, &mut rand::rng()),
    };

    match board {
        Some(board) => Ok(board),
        None => bail!("Invalid board size {size}: must be greater than 0"),
    }
}
