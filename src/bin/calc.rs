use calculator_console::{lexeme::Lexeme, repl, tokenize};
use clap::Parser;
use codespan_reporting::term::termcolor::{
  Color, ColorChoice, ColorSpec, StandardStream, WriteColor,
};
use log::LevelFilter;
use simplelog::{ConfigBuilder, TermLogger, TerminalMode};
use std::{
  error::Error,
  io::{self, Write},
  process,
};

#[derive(Parser)]
#[clap(author, version, about = "Console calculator front end")]
struct Cli {
  /// Tokenize a single command and exit instead of starting the console
  #[clap(short, long, value_name = "COMMAND")]
  command: Option<String>,

  /// Increase log verbosity (-v for debug, -vv for trace)
  #[clap(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  TermLogger::init(
    level,
    ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
    TerminalMode::Stderr,
    simplelog::ColorChoice::Auto,
  )?;

  if let Some(command) = cli.command {
    return print_lexemes(command.trim());
  }

  let input = io::stdin();
  let output = io::stdout();
  repl::start(input.lock(), output.lock())?;

  Ok(())
}

fn print_lexemes(command: &str) -> Result<(), Box<dyn Error>> {
  match tokenize(command) {
    Ok(lexemes) => {
      let mut stdout = StandardStream::stdout(ColorChoice::Auto);
      for lexeme in lexemes.iter() {
        writeln!(&mut stdout, "{}", describe(lexeme))?;
      }

      Ok(())
    }
    Err(e) => {
      let mut stderr = StandardStream::stderr(ColorChoice::Auto);
      stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
      write!(&mut stderr, "{}", e)?;
      stderr.reset()?;

      process::exit(1)
    }
  }
}

fn describe(lexeme: &Lexeme) -> String {
  format!(
    "{:>4}..{:<4} {:<20} {:<18} {:?}",
    lexeme.position.range.0,
    lexeme.position.range.1,
    lexeme.kind.to_string(),
    lexeme.category.to_string(),
    lexeme.text
  )
}
