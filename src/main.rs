use std::io::{self, Read};
use std::process::ExitCode;
use wordle_helper::cli::{self, parse_cli};
use wordle_helper::info_log;
use wordle_helper::protocol;
use wordle_helper::wordbank::{
    load_wordbank_from_file, load_wordbank_from_str, EMBEDDED_WORDBANK,
};

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    info_log!("word list ready: {} entries", wordbank.len());

    if cli.json {
        return run_json(&wordbank);
    }

    let stdin = io::stdin();
    cli::run_interactive(&wordbank, stdin.lock());
    ExitCode::SUCCESS
}

/// One-shot mode: a single JSON request on stdin, the JSON response on
/// stdout. Malformed requests exit non-zero with the reason on stderr.
fn run_json(wordbank: &[String]) -> ExitCode {
    let mut body = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut body) {
        eprintln!("Failed to read request: {e}");
        return ExitCode::FAILURE;
    }

    match protocol::handle_request(wordbank, &body) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
