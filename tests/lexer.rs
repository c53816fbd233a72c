use calculator_console::{
  error::MsgType,
  lexeme::{Category, LexemeKind, Sign},
  lexer::{self, Lexer},
  tokenize, Calculator,
};
use pretty_assertions::assert_eq;

const COMMANDS: &[&str] = &[
  "",
  " ",
  "1",
  "exp1",
  "(1+2)",
  "1 + 2",
  "-3.14",
  "3.1.4",
  "++",
  "ln(5) - log 100 = exp 2",
  "2*-3/(.5+5.)",
  "  (  -1  )  ",
  "1-2-3",
  "(((1)))",
];

#[test]
fn verify_round_trip() -> lexer::Result<()> {
  for command in COMMANDS.iter() {
    let lexemes = tokenize(command)?;
    let rebuilt = lexemes.iter().map(|l| l.text.as_ref()).collect::<String>();

    assert_eq!(&rebuilt, command);
    assert!(lexemes
      .windows(2)
      .all(|w| w[0].position.range.1 == w[1].position.range.0));
  }

  Ok(())
}

#[test]
fn verify_idempotence() {
  let mut reused = Lexer::new("");

  for command in COMMANDS.iter().chain(["1+@2", "5@", "@"].iter()) {
    let first = tokenize(command).map_err(|e| e.to_string());
    let second = tokenize(command).map_err(|e| e.to_string());
    assert_eq!(first, second);

    reused.reset(command);
    let third = reused
      .tokenize()
      .map(|l| l.to_vec())
      .map_err(|e| e.to_string());
    assert_eq!(first, third);
  }
}

#[test]
fn verify_categories() -> lexer::Result<()> {
  let lexemes = tokenize("ln(5) - log 100 = exp 2")?;

  let categories = lexemes
    .iter()
    .filter(|l| !l.is_space())
    .map(|l| (l.text.to_string(), l.category))
    .collect::<Vec<_>>();

  assert_eq!(
    categories,
    vec![
      ("ln".to_string(), Category::InternalFunction),
      ("(".to_string(), Category::Operator),
      ("5".to_string(), Category::Operand),
      (")".to_string(), Category::Operator),
      ("-".to_string(), Category::Operator),
      ("log".to_string(), Category::Operator),
      ("100".to_string(), Category::Operand),
      ("=".to_string(), Category::Operator),
      ("exp".to_string(), Category::Operator),
      ("2".to_string(), Category::Operand),
    ]
  );

  Ok(())
}

#[test]
fn verify_negative_literal() -> lexer::Result<()> {
  let lexemes = tokenize("  (  -1  )  ")?;
  let literal = lexemes
    .iter()
    .find(|l| l.category == Category::Operand)
    .map(|l| l.kind);

  assert_eq!(
    literal,
    Some(LexemeKind::NumericLiteral {
      value: 1.0,
      sign: Sign::Negative,
    })
  );

  Ok(())
}

#[test]
fn verify_failures() {
  let cases = [
    ("1+@2", MsgType::UnconsumableLexeme, "@", "1, +"),
    ("5@", MsgType::UnconsumableFinalCharacter, "@", "5"),
    ("x", MsgType::UnconsumableFinalCharacter, "x", ""),
    ("exp(a)", MsgType::UnconsumableLexeme, "a", "exp, ("),
    ("LOG2", MsgType::UnconsumableLexeme, "L", ""),
  ];

  for (command, error_type, offending, consumed) in cases.iter() {
    let e = tokenize(command).unwrap_err();

    assert_eq!(e.error_type, *error_type, "command {:?}", command);
    assert_eq!(e.offending(), *offending, "command {:?}", command);
    assert_eq!(e.consumed_to_string(), *consumed, "command {:?}", command);
    assert_eq!(e.input(), *command);
  }
}

#[test]
fn verify_calculator_reports_lexemes() {
  let mut calc = Calculator::new();

  calc.update_command("2*-3/(.5+5.)");
  assert_eq!(
    calc.result().map_err(|e| e.to_string()),
    Ok("consumed lexemes: 2, *, -3, /, (, .5, +, 5., )".to_string())
  );

  calc.update_command("2^3");
  let e = calc.result().unwrap_err();
  assert_eq!(e.offending(), "^");
}
