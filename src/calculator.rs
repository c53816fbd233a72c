//! Calculator front end holding the current command and its cached outcome

use super::lexer::{self, lexemes_to_string};
use log::debug;

/// Calculator which accepts a command string and produces a textual result
/// on demand. The outcome is cached until the command changes.
#[derive(Debug, Default)]
pub struct Calculator {
  command: String,
  outcome: Option<lexer::Result<String>>,
}

impl Calculator {
  /// Creates a calculator with an empty command
  pub fn new() -> Self {
    Calculator::default()
  }

  /// Replaces the current command and discards the cached outcome
  pub fn update_command(&mut self, command: &str) {
    self.command = command.to_string();
    self.outcome = None;
  }

  /// Current command
  pub fn command(&self) -> &str {
    &self.command
  }

  /// Whether the current command has already been processed
  pub fn has_processed(&self) -> bool {
    self.outcome.is_some()
  }

  /// Processes the current command if it has not been processed since the
  /// last update and returns the result or the lexer error
  pub fn result(&mut self) -> lexer::Result<String> {
    if let Some(outcome) = &self.outcome {
      return outcome.clone();
    }

    debug!("processing command {:?}", self.command);

    let outcome = lexer::tokenize(&self.command).map(|lexemes| {
      // Evaluation is not supported; report what was consumed
      format!("consumed lexemes: {}", lexemes_to_string(&lexemes))
    });
    self.outcome = Some(outcome.clone());

    outcome
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::MsgType;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_result() -> lexer::Result<()> {
    let mut calc = Calculator::new();
    calc.update_command("exp(2)");

    assert!(!calc.has_processed());
    assert_eq!(calc.result()?, "consumed lexemes: exp, (, 2, )");
    assert!(calc.has_processed());

    Ok(())
  }

  #[test]
  fn verify_outcome_is_cached_until_update() -> lexer::Result<()> {
    let mut calc = Calculator::new();
    calc.update_command("1@");

    let first = calc.result().unwrap_err();
    let second = calc.result().unwrap_err();
    assert_eq!(first.error_type, MsgType::UnconsumableFinalCharacter);
    assert_eq!(first.to_string(), second.to_string());

    calc.update_command("1");
    assert!(!calc.has_processed());
    assert_eq!(calc.command(), "1");
    assert_eq!(calc.result()?, "consumed lexemes: 1");

    Ok(())
  }

  #[test]
  fn verify_empty_command() -> lexer::Result<()> {
    let mut calc = Calculator::new();

    assert_eq!(calc.result()?, "consumed lexemes: ");

    Ok(())
  }
}
