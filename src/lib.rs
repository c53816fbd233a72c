//! # calculator-console
//!
//! Lexer and console front end for an arithmetic calculator. A command such
//! as `exp(1) + -2.5` is split into classified lexemes (operators,
//! parends, internal functions and numeric operands) using a greedy
//! longest-match scan over the characters of the command.
//!
//! Evaluation of the lexeme sequence is not implemented yet. The calculator
//! reports the lexemes it consumed, and failures are rendered as
//! diagnostics pointing at the characters that could not be consumed.
//!
//! ## Lexemes
//!
//! | Text                              | Kind                 | Category          |
//! | --------------------------------- | -------------------- | ----------------- |
//! | `(` `)` `+` `-` `*` `/` `=` space | operators            | operator          |
//! | `exp` `log`                       | functions            | operator          |
//! | `ln`                              | natural log function | internal function |
//! | `42` `-3.14` `.5` `5.`            | numeric literal      | operand           |
//!
//! A leading sign belongs to a numeric literal only when it cannot be a
//! binary operator, so `1-2` is three lexemes while `2*-3` is three lexemes
//! ending in `-3`. Spaces are kept as lexemes.
//!
//! ## Usage
//!
//! ```
//! use calculator_console::{lexeme::LexemeKind, tokenize};
//!
//! let lexemes = tokenize("(1+2)").unwrap();
//! assert_eq!(lexemes.len(), 5);
//! assert_eq!(lexemes[2].kind, LexemeKind::Plus);
//!
//! let err = tokenize("1+@2").unwrap_err();
//! assert_eq!(err.offending(), "@");
//! assert_eq!(err.consumed_to_string(), "1, +");
//! ```
//!
//! ## Features
//!
//! - `repl` (default): the interactive console and the `calc` binary

#![warn(missing_docs)]

/// Calculator holding the current command
pub mod calculator;
/// Diagnostic messages
pub mod error;
/// Lexeme types and classification
pub mod lexeme;
/// Longest-match lexer for calculator commands
pub mod lexer;
/// Interactive console loop
pub mod repl;

#[doc(inline)]
pub use self::{
  calculator::Calculator,
  lexeme::{Category, Lexeme, LexemeKind},
  lexer::{lexer_from_str, tokenize, Error as LexerError},
};
