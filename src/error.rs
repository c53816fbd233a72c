use std::fmt;

/// Tag shared by every diagnostic raised while consuming a command
pub const INVALID_COMMAND: &str = "invalid command";

/// Human readable diagnostic message
#[derive(Debug)]
pub struct ErrorMsg {
  short: String,
  extended: Option<String>,
}

impl ErrorMsg {
  /// Longer explanation of the message, if any
  pub fn extended(&self) -> Option<&str> {
    self.extended.as_deref()
  }
}

impl fmt::Display for ErrorMsg {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.short)
  }
}

/// Reason a command could not be fully consumed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MsgType {
  /// No lexeme starts at the current position
  UnconsumableLexeme,
  /// The last character is not a lexeme on its own
  UnconsumableFinalCharacter,
  /// A numeric literal exceeds the f64 range
  NumericOverflow,
}

impl From<MsgType> for ErrorMsg {
  fn from(mt: MsgType) -> ErrorMsg {
    match mt {
      MsgType::UnconsumableLexeme => ErrorMsg {
        short: "unable to consume the next lexeme".into(),
        extended: None,
      },
      MsgType::UnconsumableFinalCharacter => ErrorMsg {
        short: "unable to consume final character as a valid lexeme".into(),
        extended: None,
      },
      MsgType::NumericOverflow => ErrorMsg {
        short: "numeric literal is too large".into(),
        extended: Some(format!(
          "numeric literals must not exceed a magnitude of {:e}",
          f64::MAX
        )),
      },
    }
  }
}
