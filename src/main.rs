//! Jumble - CLI
//!
//! Word puzzle engine with lookup, sub-word and game commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use jumble::{
    commands::{run_benchmark, run_play},
    engine::{DEFAULT_MAX_WORD_LENGTH, EngineConfig, Jumble, WordStore},
    output::{
        print_benchmark_result, print_exists, print_game_state, print_game_state_json,
        print_scramble, print_word_set,
    },
};
use log::debug;
use std::io;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Dictionary-backed word puzzles: scrambles, palindromes, lookups and sub-word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible scrambles and word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Longest word the sub-word search will explore
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play {
        /// Target word length
        #[arg(short, long, default_value = "6")]
        length: usize,

        /// Minimum sub-word length
        #[arg(short, long)]
        min_length: Option<usize>,
    },

    /// Scramble the letters of a word
    Scramble {
        word: String,
    },

    /// List every palindrome in the dictionary
    Palindromes,

    /// Pick a random word
    Random {
        /// Exact word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check whether a word is in the dictionary
    Exists {
        word: String,
    },

    /// List words starting with a prefix
    Prefix {
        prefix: String,
    },

    /// Find words by first letter, last letter and length
    Search {
        /// First letter
        #[arg(short, long)]
        start: Option<char>,

        /// Last letter
        #[arg(short, long)]
        end: Option<char>,

        /// Exact word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List the sub-words hidden in a word
    Subwords {
        word: String,

        /// Minimum sub-word length (default 3)
        #[arg(short, long)]
        min_length: Option<usize>,
    },

    /// Deal a single game round
    Game {
        /// Target word length
        #[arg(short, long)]
        length: Option<usize>,

        /// Minimum sub-word length (default 3)
        #[arg(short, long)]
        min_length: Option<usize>,

        /// Print the round as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark sub-word generation over random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Exact target length (any length if omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// Minimum sub-word length (default 3)
        #[arg(short, long)]
        min_length: Option<usize>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_store(wordlist: &str) -> Result<WordStore> {
    match wordlist {
        "embedded" => Ok(WordStore::embedded()),
        path => WordStore::load(path)
            .with_context(|| format!("Cannot start without word list '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store = load_store(&cli.wordlist)?;
    let config = EngineConfig {
        seed: cli.seed,
        max_word_length: cli.max_word_length,
    };
    debug!("Engine config: {config:?}");
    let mut engine = Jumble::from_config(&store, &config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: 6,
        min_length: None,
    });

    match command {
        Commands::Play { length, min_length } => {
            run_play(
                &mut engine,
                Some(length),
                min_length,
                io::stdin().lock(),
                io::stdout(),
            )?;
        }
        Commands::Scramble { word } => {
            let scrambled = engine.scramble(&word);
            print_scramble(&word, &scrambled);
        }
        Commands::Palindromes => {
            print_word_set("Palindromes", &engine.retrieve_palindrome_words());
        }
        Commands::Random { length } => match engine.pick_one_random_word(length) {
            Some(word) => println!("{word}"),
            None => match length {
                Some(len) => bail!("No dictionary word has {len} letters"),
                None => bail!("Dictionary is empty"),
            },
        },
        Commands::Exists { word } => print_exists(&word, engine.exists(&word)),
        Commands::Prefix { prefix } => {
            let words = engine.words_matching_prefix(&prefix);
            print_word_set(&format!("Words starting with '{prefix}'"), &words);
        }
        Commands::Search { start, end, length } => {
            let words = engine.search_words(start, end, length);
            print_word_set("Search results", &words);
        }
        Commands::Subwords { word, min_length } => {
            let words = engine.generate_sub_words(&word, min_length);
            print_word_set(&format!("Sub-words of '{word}'"), &words);
        }
        Commands::Game {
            length,
            min_length,
            json,
        } => {
            let state = engine.create_game_state(length, min_length)?;
            if json {
                print_game_state_json(&state)?;
            } else {
                print_game_state(&state);
            }
        }
        Commands::Benchmark {
            count,
            length,
            min_length,
        } => {
            println!("Running benchmark on {count} random words...");
            let result = run_benchmark(&mut engine, count, length, min_length, true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
