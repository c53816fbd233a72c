#![cfg(feature = "repl")]

use super::calculator::Calculator;
use crossterm::{
  cursor::MoveTo,
  execute,
  terminal::{Clear, ClearType},
};
use log::debug;
use std::{
  error,
  io::{BufRead, Write},
};

const BANNER: &str = "Welcome to CalculatorConsole!";
const CONFIRM_PROMPT: &str = "Enter a new command? (Y/N)";
const COMMAND_PROMPT: &str = "Please enter a new calculation request";

#[derive(Debug, PartialEq)]
enum Control {
  Calculate,
  Quit,
  Clear,
  Unknown,
}

/// Runs the confirm loop until the user answers 'n' or the input ends
pub fn start<R: BufRead, W: Write>(
  mut reader: R,
  mut writer: W,
) -> Result<(), Box<dyn error::Error>> {
  let mut calculator = Calculator::new();

  writeln!(writer, "{}", BANNER)?;

  loop {
    writeln!(writer, "{}", CONFIRM_PROMPT)?;
    writer.flush()?;

    let line = match read_trimmed_line(&mut reader)? {
      Some(line) => line,
      None => return Ok(()),
    };

    let control = control(&line);
    debug!("answer {:?} parsed as {:?}", line, control);

    match control {
      Control::Calculate => {
        writeln!(writer, "{}", COMMAND_PROMPT)?;
        writer.flush()?;

        let command = match read_trimmed_line(&mut reader)? {
          Some(command) => command,
          None => return Ok(()),
        };

        calculator.update_command(&command);

        match calculator.result() {
          Ok(result) => writeln!(writer, "Result: {}", result)?,
          Err(e) => writeln!(writer, "Error calculating result: {}", e)?,
        }
      }
      Control::Quit => return Ok(()),
      Control::Clear => execute!(writer, Clear(ClearType::All), MoveTo(0, 0))?,
      Control::Unknown => writeln!(writer, "Invalid input")?,
    }

    writer.flush()?;
  }
}

fn read_trimmed_line<R: BufRead>(
  reader: &mut R,
) -> Result<Option<String>, Box<dyn error::Error>> {
  let mut line = String::new();

  if reader.read_line(&mut line)? == 0 {
    return Ok(None);
  }

  Ok(Some(line.trim().to_string()))
}

fn control(line: &str) -> Control {
  match line {
    "y" | "Y" => Control::Calculate,
    "n" | "N" | "quit" | "exit" => Control::Quit,
    "clear" => Control::Clear,
    _ => Control::Unknown,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use indoc::indoc;
  use pretty_assertions::assert_eq;
  use std::io::Cursor;

  fn run(input: &str) -> Result<String, Box<dyn error::Error>> {
    let mut output = Vec::new();
    start(Cursor::new(input.as_bytes()), &mut output)?;

    Ok(String::from_utf8(output)?)
  }

  #[test]
  fn verify_session() -> Result<(), Box<dyn error::Error>> {
    let transcript = run(indoc!(
      "
      y
        1 + 2
      maybe
      N
      "
    ))?;

    assert_eq!(
      transcript,
      indoc!(
        "
        Welcome to CalculatorConsole!
        Enter a new command? (Y/N)
        Please enter a new calculation request
        Result: consumed lexemes: 1,  , +,  , 2
        Enter a new command? (Y/N)
        Invalid input
        Enter a new command? (Y/N)
        "
      )
    );

    Ok(())
  }

  #[test]
  fn verify_error_is_reported() -> Result<(), Box<dyn error::Error>> {
    let transcript = run("Y\n1+@2\nn\n")?;

    assert!(transcript.contains("Error calculating result: error: invalid command"));
    assert!(transcript.contains("consumed lexemes: 1, +"));

    Ok(())
  }

  #[test]
  fn verify_end_of_input_stops() -> Result<(), Box<dyn error::Error>> {
    assert_eq!(
      run("")?,
      "Welcome to CalculatorConsole!\nEnter a new command? (Y/N)\n"
    );
    assert!(run("y\n")?.ends_with("Please enter a new calculation request\n"));

    Ok(())
  }

  #[test]
  fn verify_control() {
    assert_eq!(control("y"), Control::Calculate);
    assert_eq!(control("N"), Control::Quit);
    assert_eq!(control("exit"), Control::Quit);
    assert_eq!(control("clear"), Control::Clear);
    assert_eq!(control("yes"), Control::Unknown);
  }
}
