use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser as ClapParser;
use teddy::{
    display_error,
    lexer::{lexer::tokenize, preprocessor::strip_comments},
    parser::parser::{parse_with_options, ParserOptions},
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse a .teddy source file and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "teddy", version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Maximum nesting depth accepted by the parser
    #[arg(long, default_value_t = ParserOptions::default().max_depth)]
    max_depth: usize,
}

fn initialize_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> ExitCode {
    initialize_logging();

    let cli = Cli::parse();
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let raw_source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };
    debug!(bytes = raw_source.len(), "Read source file");

    let start = Instant::now();
    let source = strip_comments(&raw_source);

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_name, &source);
            return ExitCode::FAILURE;
        }
    };
    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();
    let ast = match parse_with_options(&tokens, ParserOptions { max_depth: cli.max_depth }) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &file_name, &source);
            return ExitCode::FAILURE;
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    println!("{:#?}", ast);

    ExitCode::SUCCESS
}
