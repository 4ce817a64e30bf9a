pub mod output;
#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hilex::{Lexicon, Scanner, Source};
use mf_lex::registry;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// files to highlight
    #[arg(required_unless_present = "list")]
    files: Vec<PathBuf>,

    /// force a lexicon by name or alias instead of going by extension
    #[arg(short, long)]
    lexer: Option<String>,

    /// how tokens leave the program
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// print the registered lexicons and exit
    #[arg(long)]
    list: bool,

    /// dump the scan trace to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Format {
    Ansi,
    Json,
    Summary,
}

#[derive(Debug)]
pub enum Error {
    UnknownLexer(String),
    UnknownExtension(PathBuf),
    Unreadable(PathBuf, std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownLexer(name) => write!(f, "no lexicon answers to `{name}`"),
            Error::UnknownExtension(path) => {
                write!(f, "cannot tell a lexicon for `{}`, pass --lexer", path.display())
            }
            Error::Unreadable(path, err) => write!(f, "cannot read `{}`: {err}", path.display()),
            Error::Json(err) => write!(f, "cannot serialize tokens: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// one scanned file, ready for any of the output formats
pub struct Scanned {
    pub source: Source,
    pub lexicon: &'static Lexicon,
    pub tokens: Vec<hilex::Token>,
    pub trace: String,
}

pub fn scan_source(lexicon: &'static Lexicon, source: Source) -> Scanned {
    let mut scanner = Scanner::new(lexicon, &source);
    let tokens = scanner.get_tokens();
    let trace = scanner.get_trace().to_string();
    Scanned {
        source,
        lexicon,
        tokens,
        trace,
    }
}

fn scan_one(cli: &Cli, path: &Path) -> Result<Scanned, Error> {
    let lexicon = match &cli.lexer {
        Some(name) => registry::by_name(name).ok_or_else(|| Error::UnknownLexer(name.clone()))?,
        None => registry::for_path(path).ok_or_else(|| Error::UnknownExtension(path.to_owned()))?,
    };
    let text =
        std::fs::read_to_string(path).map_err(|err| Error::Unreadable(path.to_owned(), err))?;
    Ok(scan_source(lexicon, Source::new(path.display(), text)))
}

/// scan every file, results stay in argument order either way
#[cfg(feature = "parallel")]
fn scan_all(cli: &Cli) -> Vec<Result<Scanned, Error>> {
    use rayon::prelude::*;

    cli.files
        .par_iter()
        .map(|path| scan_one(cli, path))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_all(cli: &Cli) -> Vec<Result<Scanned, Error>> {
    cli.files.iter().map(|path| scan_one(cli, path)).collect()
}

fn emit(cli: &Cli, scanned: &Scanned) -> Result<(), Error> {
    match cli.format {
        Format::Ansi => print!("{}", hilex::render(&scanned.tokens)),
        Format::Json => println!("{}", output::json(scanned)?),
        Format::Summary => print!("{}", output::summary(scanned)),
    }
    if cli.verbose {
        eprint!("{}", scanned.trace);
    }
    Ok(())
}

fn describe(lexicon: &Lexicon) -> String {
    let aliases = lexicon.aliases().join(", ");
    let extensions: Vec<_> = lexicon
        .extensions()
        .iter()
        .map(|extension| format!(".{extension}"))
        .collect();
    format!("{} ({aliases}): {}", lexicon.name(), extensions.join(" "))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for lexicon in registry::all() {
            println!("{}", describe(lexicon));
        }
        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for (path, result) in cli.files.iter().zip(scan_all(&cli)) {
        match result.and_then(|scanned| emit(&cli, &scanned)) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
