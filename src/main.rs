use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use interpreter::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

const PROMPT: &str = ">> ";

#[derive(Parser)]
#[command(name = "interpreter")]
#[command(about = "Tokenizes and parses source text, printing tokens or the parsed program", version)]
struct Cli {
    /// Source file; starts the REPL when omitted
    input: Option<PathBuf>,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,

    /// Print how long each phase took
    #[arg(long)]
    timings: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.input {
        Some(path) => run_file(path, &cli),
        None => run_repl(&cli),
    }
}

fn run_file(path: &PathBuf, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_to_string(path)?;
    let file_name = path.as_os_str().to_string_lossy();

    if cli.tokens {
        let start = Instant::now();
        let tokens = tokenize(source.as_str());
        if cli.timings {
            println!("Tokenized in {:?}", start.elapsed());
        }

        for token in tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let start = Instant::now();
    let (parser, program) = parse(source.as_str());
    if cli.timings {
        println!("Parsed in {:?}", start.elapsed());
    }

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            display_error(error, &source, &file_name);
        }
        return Err(format!("{} parser error(s)", parser.errors().len()).into());
    }

    println!("{}", program);
    Ok(())
}

fn run_repl(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        if line.trim() == "quit" {
            return Ok(());
        }

        if cli.tokens {
            for token in tokenize(line.as_str()) {
                println!("{}", token);
            }
            continue;
        }

        let (parser, program) = parse(line.as_str());
        if parser.errors().is_empty() {
            println!("{}", program);
        } else {
            for message in parser.error_messages() {
                eprintln!("\t{}", message);
            }
        }
    }
}

fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        Error: message (tip)
        -> main.src
           |
        20 | let a = #;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error);
    } else {
        eprintln!("Error: {} ({})", error, error.get_tip());
    }
    eprintln!("-> {}", file_name);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = caret_column(&line_text, line_pos).saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

/// Converts a byte offset within `line` into a character count.
fn caret_column(line: &str, byte_pos: usize) -> usize {
    line.get(..byte_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_pos)
}
