//! Example: the longest-word command line tool.
//!
//! Reads a word list (one lowercase word per line) and prints the longest and
//! second-longest concatenated words and how many there are.
//!
//! Run with: cargo run --example longest_word -- words.txt
//! Set `RUST_LOG=libconcat=debug` to see every confirmed word.

use std::process::ExitCode;

use libconcat::trie::find_concatenated_words_from_file;
use tracing::error;
use tracing_subscriber::EnvFilter;

static USAGE: &str = "arguments : \n  <file>     file with sorted words, one per line";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<_> = std::env::args().collect();
    let [_, filename] = args.as_slice() else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match find_concatenated_words_from_file(filename) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(file = %filename, "{e}");
            println!("Unable to open file {filename}: {e}");
            println!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
