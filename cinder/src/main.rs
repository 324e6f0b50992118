use cinder::{init_tracing, parse_source, Stats};
use cinder_parser::ast::TranslationUnit;
use cinder_parser::printer::print_translation_unit;
use cinder_source::Source;
use std::io::{self, BufRead, Write};
use std::{env, fs, process};

/// What to print for a successfully parsed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Pretty,
    Ast,
    Stats,
}

const USAGE: &str = "Usage: cinder [--ast | --stats] [FILE]";

fn main() -> io::Result<()> {
    init_tracing();

    let mut output = Output::Pretty;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--ast" => output = Output::Ast,
            "--stats" => output = Output::Stats,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: unknown option '{}'", flag);
                eprintln!("{}", USAGE);
                process::exit(2);
            }
            _ if path.is_some() => {
                eprintln!("{}", USAGE);
                process::exit(2);
            }
            file => path = Some(file.to_string()),
        }
    }

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            if !run(&Source::new(&path, &content), output) {
                process::exit(1);
            }
            Ok(())
        }
        None => repl(output),
    }
}

fn repl(output: Output) -> io::Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => return Ok(()), // EOF
        };
        run(&Source::new("<stdin>", &input), output);
    }
}

/// Parses `source` and prints the result. Returns `false` on a syntax error.
fn run(source: &Source, output: Output) -> bool {
    match parse_source(source.content) {
        Ok(unit) => {
            print_unit(&unit, output);
            true
        }
        Err(err) => {
            eprint!("{}", source.render(&err));
            false
        }
    }
}

fn print_unit(unit: &TranslationUnit, output: Output) {
    match output {
        Output::Pretty => print!("{}", print_translation_unit(unit)),
        Output::Ast => println!("{:#?}", unit),
        Output::Stats => println!("{}", Stats::collect(unit)),
    }
}
