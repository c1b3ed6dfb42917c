use std::{env, process::ExitCode, time::Instant};

use renaisscript::{
    diagnostics::diagnostics::{display_error, report_lexical_error},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    logging::init_logging,
    options::{Command, Options, OptionsError, HELP, VERSION},
    parser::parser::Parser,
    source_file::load_source,
};
use tracing::{info, warn};

fn main() -> ExitCode {
    if let Err(error) = init_logging() {
        eprintln!("{}", error);
    }

    let options = match Options::parse(env::args().skip(1)) {
        Ok(Command::Help) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("{}", VERSION);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Compile(options)) => options,
        Err(error) => {
            if matches!(
                error,
                OptionsError::UnknownOption(_) | OptionsError::MissingInput
            ) {
                print!("{}", HELP);
            }
            eprintln!("ERROR: {}", error);
            return ExitCode::FAILURE;
        }
    };

    compile(&options)
}

fn compile(options: &Options) -> ExitCode {
    let source_name = options.input.display().to_string();

    let source = match load_source(&options.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("[ERROR] {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let (tokens, lexical_errors) = lex(&source, &source_name);
    info!("Tokenized in {:?}", start.elapsed());

    if lexical_errors > 0 {
        warn!(count = lexical_errors, "lexing failed");
        return ExitCode::FAILURE;
    }

    if options.print_tokens {
        for token in &tokens {
            println!("{}", token.listing_row());
        }
    }

    let parse_start = Instant::now();
    let parsed = Parser::with_max_depth(Lexer::new(&source), options.max_depth).parse();
    info!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(ast) => {
            print!("{}", ast);
            info!("Total time: {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source, &source_name);
            ExitCode::FAILURE
        }
    }
}

/// Scans the whole source, reporting every lexical error on the way.
fn lex(source: &str, source_name: &str) -> (Vec<Token>, usize) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut lexical_errors = 0;

    loop {
        let token = lexer.next_token();
        if report_lexical_error(&lexer, &token, source_name) {
            lexical_errors += 1;
        }

        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);
        if at_end {
            break;
        }
    }

    (tokens, lexical_errors)
}
