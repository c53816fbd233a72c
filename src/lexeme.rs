use super::lexer::Position;
use displaydoc::Display;
use lexical_core as lexical;
use std::{borrow::Cow, fmt};

/// Lexeme which represents a classified run of characters in a calculator
/// command
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
  /// Exact text consumed from the command
  pub text: Cow<'a, str>,
  /// Kind of lexeme
  pub kind: LexemeKind,
  /// Broad category of the lexeme
  pub category: Category,
  /// Location of the lexeme in the command
  pub position: Position,
}

impl<'a> Lexeme<'a> {
  /// Detaches the lexeme from the command it was scanned from
  pub fn into_owned(self) -> Lexeme<'static> {
    Lexeme {
      text: Cow::Owned(self.text.into_owned()),
      kind: self.kind,
      category: self.category,
      position: self.position,
    }
  }

  /// Whether the lexeme is a literal space
  pub fn is_space(&self) -> bool {
    self.kind == LexemeKind::Space
  }
}

impl<'a> fmt::Display for Lexeme<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.text)
  }
}

/// Kind of a calculator lexeme
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LexemeKind {
  /// Opening parend '('
  OpenParen,
  /// Closing parend ')'
  CloseParen,
  /// Addition operator '+'
  Plus,
  /// Subtraction operator '-'
  Minus,
  /// Multiplication operator '*'
  Multiply,
  /// Division operator '/'
  Divide,
  /// Equality operator '='
  Equal,
  /// Literal space ' '
  Space,
  /// Exponent function 'exp'
  FunctionExponent,
  /// Logarithm function 'log'
  FunctionLog,
  /// Natural logarithm function 'ln'
  FunctionNaturalLog,
  /// Signed decimal literal
  NumericLiteral {
    /// Magnitude of the literal
    value: f64,
    /// Sign of the literal
    sign: Sign,
  },
}

impl LexemeKind {
  /// Category the kind belongs to. 'exp' and 'log' are operators while 'ln'
  /// is an internal function.
  pub fn category(&self) -> Category {
    match self {
      LexemeKind::NumericLiteral { .. } => Category::Operand,
      LexemeKind::FunctionNaturalLog => Category::InternalFunction,
      _ => Category::Operator,
    }
  }

  /// Value of a numeric literal with its sign applied
  pub fn signed_value(&self) -> Option<f64> {
    match self {
      LexemeKind::NumericLiteral { value, sign } => Some(sign.apply(*value)),
      _ => None,
    }
  }
}

impl fmt::Display for LexemeKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      LexemeKind::OpenParen => write!(f, "open paren"),
      LexemeKind::CloseParen => write!(f, "close paren"),
      LexemeKind::Plus => write!(f, "plus"),
      LexemeKind::Minus => write!(f, "minus"),
      LexemeKind::Multiply => write!(f, "multiply"),
      LexemeKind::Divide => write!(f, "divide"),
      LexemeKind::Equal => write!(f, "equal"),
      LexemeKind::Space => write!(f, "space"),
      LexemeKind::FunctionExponent => write!(f, "function exp"),
      LexemeKind::FunctionLog => write!(f, "function log"),
      LexemeKind::FunctionNaturalLog => write!(f, "function ln"),
      LexemeKind::NumericLiteral { value, sign } => {
        write!(f, "numeric literal {}", sign.apply(*value))
      }
    }
  }
}

/// Broad category of a lexeme
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
  /// Arithmetic operator, parend, space, 'exp' or 'log'
  Operator,
  /// Number
  Operand,
  /// Reserved function keyword
  InternalFunction,
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Category::Operator => write!(f, "operator"),
      Category::Operand => write!(f, "operand"),
      Category::InternalFunction => write!(f, "internal function"),
    }
  }
}

/// Sign of a numeric literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
  /// No sign or a leading '+'
  Positive,
  /// Leading '-'
  Negative,
}

impl Sign {
  fn apply(self, magnitude: f64) -> f64 {
    match self {
      Sign::Positive => magnitude,
      Sign::Negative => -magnitude,
    }
  }
}

/// Outcome of classifying a candidate run of characters
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Classification {
  /// Candidate is exactly one complete lexeme
  Valid {
    /// Kind of lexeme
    kind: LexemeKind,
    /// Category of lexeme
    category: Category,
  },
  /// Candidate is not a lexeme
  Invalid(Rejection),
}

impl Classification {
  fn valid(kind: LexemeKind) -> Self {
    Classification::Valid {
      kind,
      category: kind.category(),
    }
  }

  /// Whether the candidate was accepted
  pub fn is_valid(&self) -> bool {
    matches!(self, Classification::Valid { .. })
  }
}

/// Reason a candidate was rejected
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
  /// Candidate is not an operator, function or number
  #[displaydoc("unrecognized lexeme")]
  Unrecognized,
  /// Candidate is a well-formed number too large for an f64
  #[displaydoc("numeric literal exceeds the largest representable magnitude")]
  NumericOverflow,
}

/// Classifies a candidate run of characters. Only complete lexemes are
/// accepted, never prefixes of one.
///
/// # Arguments
///
/// * `candidate` - String slice with the candidate characters
///
/// # Example
///
/// ```
/// use calculator_console::lexeme::{classify, Category, Classification, LexemeKind};
///
/// assert_eq!(
///   classify("ln"),
///   Classification::Valid {
///     kind: LexemeKind::FunctionNaturalLog,
///     category: Category::InternalFunction,
///   }
/// );
/// assert!(!classify("lo").is_valid());
/// ```
pub fn classify(candidate: &str) -> Classification {
  let mut chars = candidate.chars();

  match (chars.next(), chars.next()) {
    (None, _) => Classification::Invalid(Rejection::Unrecognized),
    (Some(c), None) => classify_char(c),
    _ => match lookup_function(candidate) {
      Some(kind) => Classification::valid(kind),
      None => classify_number(candidate),
    },
  }
}

/// Returns the internal function named exactly by `ident`
pub fn lookup_function(ident: &str) -> Option<LexemeKind> {
  match ident {
    "exp" => Some(LexemeKind::FunctionExponent),
    "log" => Some(LexemeKind::FunctionLog),
    "ln" => Some(LexemeKind::FunctionNaturalLog),
    _ => None,
  }
}

fn classify_char(c: char) -> Classification {
  let kind = match c {
    '(' => LexemeKind::OpenParen,
    ')' => LexemeKind::CloseParen,
    '+' => LexemeKind::Plus,
    '-' => LexemeKind::Minus,
    '*' => LexemeKind::Multiply,
    '/' => LexemeKind::Divide,
    '=' => LexemeKind::Equal,
    ' ' => LexemeKind::Space,
    _ => match c.to_digit(10) {
      Some(digit) => LexemeKind::NumericLiteral {
        value: f64::from(digit),
        sign: Sign::Positive,
      },
      None => return Classification::Invalid(Rejection::Unrecognized),
    },
  };

  Classification::valid(kind)
}

fn classify_number(candidate: &str) -> Classification {
  let mut sign = Sign::Positive;
  let mut found_decimal = false;
  let mut overflowed = false;
  let mut digits = 0usize;
  let mut magnitude = 0f64;

  for (idx, c) in candidate.chars().enumerate() {
    match c {
      '+' if idx == 0 => sign = Sign::Positive,
      '-' if idx == 0 => sign = Sign::Negative,
      '.' if !found_decimal => found_decimal = true,
      _ => {
        let digit = match c.to_digit(10) {
          Some(d) => f64::from(d),
          None => return Classification::Invalid(Rejection::Unrecognized),
        };

        digits += 1;

        // Sticky: once set, the remaining digits are only validated
        if !overflowed {
          if (f64::MAX - digit) / 10.0 >= magnitude {
            magnitude = magnitude * 10.0 + digit;
          } else {
            overflowed = true;
          }
        }
      }
    }
  }

  if digits == 0 {
    return Classification::Invalid(Rejection::Unrecognized);
  }

  if overflowed {
    return Classification::Invalid(Rejection::NumericOverflow);
  }

  match parse_magnitude(candidate) {
    Some(value) => Classification::valid(LexemeKind::NumericLiteral { value, sign }),
    None => Classification::Invalid(Rejection::Unrecognized),
  }
}

// Correctly rounded value of an already validated literal. A bare leading
// or trailing '.' is padded with a zero first.
fn parse_magnitude(candidate: &str) -> Option<f64> {
  let unsigned = candidate
    .strip_prefix(&['+', '-'][..])
    .unwrap_or(candidate);

  let mut literal = String::with_capacity(unsigned.len() + 2);
  if unsigned.starts_with('.') {
    literal.push('0');
  }
  literal.push_str(unsigned);
  if unsigned.ends_with('.') {
    literal.push('0');
  }

  lexical::parse::<f64>(literal.as_bytes()).ok()
}
