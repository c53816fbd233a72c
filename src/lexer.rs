use super::{
  error::{ErrorMsg, MsgType, INVALID_COMMAND},
  lexeme::{self, Category, Classification, Lexeme, LexemeKind, Rejection},
};
use codespan_reporting::{
  diagnostic::{Diagnostic, Label},
  files::SimpleFiles,
  term,
};
use itertools::Itertools;
use log::{debug, trace};
use std::{borrow::Cow, fmt, result};

/// Alias for `Result` with an error of type `calculator_console::lexer::Error`
pub type Result<T> = result::Result<T, Error>;

/// Lexer position
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Position {
  /// Character index of the first character
  pub index: usize,
  /// Byte begin and end index range
  pub range: (usize, usize),
}

/// Lexer error raised when a command cannot be fully consumed
#[derive(Debug, Clone)]
pub struct Error {
  /// Error type
  pub error_type: MsgType,
  input: String,
  consumed: Vec<Lexeme<'static>>,
  position: Position,
}

impl Error {
  /// Command which failed to tokenize
  pub fn input(&self) -> &str {
    &self.input
  }

  /// Lexemes consumed before the failure
  pub fn consumed(&self) -> &[Lexeme<'static>] {
    &self.consumed
  }

  /// Consumed lexemes separated by ", "
  pub fn consumed_to_string(&self) -> String {
    lexemes_to_string(&self.consumed)
  }

  /// Position of the text which could not be consumed
  pub fn position(&self) -> Position {
    self.position
  }

  /// Text which could not be consumed
  pub fn offending(&self) -> &str {
    &self.input[self.position.range.0..self.position.range.1]
  }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut files = SimpleFiles::new();
    let file_id = files.add("command", self.input.as_str());
    let config = term::Config::default();
    let mut buffer = Vec::new();
    let mut writer = term::termcolor::NoColor::new(&mut buffer);

    let msg = ErrorMsg::from(self.error_type);
    let consumed = if self.consumed.is_empty() {
      "(none)".to_string()
    } else {
      self.consumed_to_string()
    };

    let mut notes = vec![format!("consumed lexemes: {}", consumed)];
    if let Some(extended) = msg.extended() {
      notes.push(extended.to_string());
    }

    let diagnostic = Diagnostic::error()
      .with_message(INVALID_COMMAND)
      .with_labels(vec![Label::primary(
        file_id,
        self.position.range.0..self.position.range.1,
      )
      .with_message(msg.to_string())])
      .with_notes(notes);

    term::emit(&mut writer, &config, &files, &diagnostic).map_err(|_| fmt::Error)?;

    write!(f, "{}", String::from_utf8(buffer).map_err(|_| fmt::Error)?)
  }
}

/// Greedy longest-match lexer over the characters of a command. Reusable
/// across commands via `reset`.
#[derive(Debug)]
pub struct Lexer<'a> {
  str_input: &'a str,
  // Byte offset of every char, followed by the input length
  boundaries: Vec<usize>,
  left: usize,
  lexemes: Vec<Lexeme<'a>>,
}

/// Creates a `Lexer` from a string slice
///
/// # Arguments
///
/// `str_input` - String slice with input
pub fn lexer_from_str(str_input: &str) -> Lexer<'_> {
  Lexer::new(str_input)
}

/// Splits a command into lexemes
///
/// # Arguments
///
/// * `input` - String slice with the calculator command
///
/// # Example
///
/// ```
/// use calculator_console::{lexeme::LexemeKind, lexer::tokenize};
///
/// let lexemes = tokenize("exp1").unwrap();
/// assert_eq!(lexemes[0].kind, LexemeKind::FunctionExponent);
/// assert_eq!(lexemes[1].kind.signed_value(), Some(1.0));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>> {
  let mut lexer = Lexer::new(input);
  lexer.tokenize()?;

  Ok(lexer.lexemes)
}

/// Joins the text of each lexeme with ", "
pub fn lexemes_to_string(lexemes: &[Lexeme]) -> String {
  lexemes.iter().join(", ")
}

impl<'a> Lexer<'a> {
  /// Creates a new `Lexer` from a given `&str` input
  pub fn new(str_input: &'a str) -> Lexer<'a> {
    let mut lexer = Lexer {
      str_input,
      boundaries: Vec::with_capacity(str_input.len() + 1),
      left: 0,
      lexemes: Vec::new(),
    };
    lexer.reset(str_input);

    lexer
  }

  /// Points the lexer at a new input and discards all consumed lexemes
  pub fn reset(&mut self, str_input: &'a str) {
    self.str_input = str_input;
    self.boundaries.clear();
    self
      .boundaries
      .extend(str_input.char_indices().map(|(idx, _)| idx));
    self.boundaries.push(str_input.len());
    self.left = 0;
    self.lexemes.clear();
  }

  /// Command being scanned
  pub fn input(&self) -> &'a str {
    self.str_input
  }

  /// Lexemes consumed so far
  pub fn lexemes(&self) -> &[Lexeme<'a>] {
    &self.lexemes
  }

  /// Scans the whole input from the start, replacing any previously
  /// consumed lexemes
  pub fn tokenize(&mut self) -> Result<&[Lexeme<'a>]> {
    self.reset(self.str_input);

    while self.next_lexeme()?.is_some() {}

    Ok(&self.lexemes)
  }

  /// Consumes the longest valid lexeme starting at the current position.
  /// Returns `None` once the input is exhausted.
  pub fn next_lexeme(&mut self) -> Result<Option<Lexeme<'a>>> {
    let char_count = self.boundaries.len() - 1;
    if self.left >= char_count {
      return Ok(None);
    }

    let left = self.left;
    let last = char_count - 1;
    let prefix_sign = self.sign_is_prefix();

    if left == last {
      return match classify_candidate(self.candidate(left, left), prefix_sign) {
        Classification::Valid { kind, category } => {
          Ok(Some(self.commit(left, left, kind, category)))
        }
        Classification::Invalid(rejection) => {
          debug!("final character rejected: {}", rejection);
          Err(self.error(MsgType::UnconsumableFinalCharacter, left, left))
        }
      };
    }

    // The descent runs down to the single character at `left`
    for right in (left..=last).rev() {
      match classify_candidate(self.candidate(left, right), prefix_sign) {
        Classification::Valid { kind, category } => {
          return Ok(Some(self.commit(left, right, kind, category)));
        }
        Classification::Invalid(rejection @ Rejection::NumericOverflow) => {
          debug!("candidate ending at index {} rejected: {}", right, rejection);
          return Err(self.error(MsgType::NumericOverflow, left, right));
        }
        Classification::Invalid(Rejection::Unrecognized) => {}
      }
    }

    Err(self.error(MsgType::UnconsumableLexeme, left, left))
  }

  fn candidate(&self, left: usize, right: usize) -> &'a str {
    &self.str_input[self.boundaries[left]..self.boundaries[right + 1]]
  }

  fn span(&self, left: usize, right: usize) -> Position {
    Position {
      index: left,
      range: (self.boundaries[left], self.boundaries[right + 1]),
    }
  }

  // A sign starts an operand unless it follows an operand or a closing
  // parend, ignoring spaces
  fn sign_is_prefix(&self) -> bool {
    match self.lexemes.iter().rev().find(|l| !l.is_space()) {
      Some(l) => l.category != Category::Operand && l.kind != LexemeKind::CloseParen,
      None => true,
    }
  }

  fn commit(
    &mut self,
    left: usize,
    right: usize,
    kind: LexemeKind,
    category: Category,
  ) -> Lexeme<'a> {
    let lexeme = Lexeme {
      text: Cow::Borrowed(self.candidate(left, right)),
      kind,
      category,
      position: self.span(left, right),
    };

    trace!("consumed {} {:?} at index {}", kind, lexeme.text, left);

    self.lexemes.push(lexeme.clone());
    self.left = right + 1;

    lexeme
  }

  fn error(&self, error_type: MsgType, left: usize, right: usize) -> Error {
    let position = self.span(left, right);

    debug!(
      "{:?} at index {} of {:?} after {} lexeme(s)",
      error_type,
      left,
      self.str_input,
      self.lexemes.len()
    );

    Error {
      error_type,
      input: self.str_input.to_string(),
      consumed: self
        .lexemes
        .iter()
        .cloned()
        .map(Lexeme::into_owned)
        .collect(),
      position,
    }
  }
}

impl<'a> Iterator for Lexer<'a> {
  type Item = Result<Lexeme<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    match self.next_lexeme() {
      Ok(Some(lexeme)) => Some(Ok(lexeme)),
      Ok(None) => None,
      Err(e) => {
        self.left = self.boundaries.len() - 1;
        Some(Err(e))
      }
    }
  }
}

fn classify_candidate(candidate: &str, prefix_sign: bool) -> Classification {
  let classification = lexeme::classify(candidate);

  let signed = candidate.len() > 1 && candidate.starts_with(&['+', '-'][..]);
  if signed && !prefix_sign {
    match classification {
      Classification::Valid {
        kind: LexemeKind::NumericLiteral { .. },
        ..
      }
      | Classification::Invalid(Rejection::NumericOverflow) => {
        return Classification::Invalid(Rejection::Unrecognized);
      }
      _ => (),
    }
  }

  classification
}
