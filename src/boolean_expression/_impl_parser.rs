//!
//! Expression parsing first groups the character stream into a token tree defined
//! by parentheses, then splits the tree at `|` and `&` occurrences in the order of
//! operator precedence. Negation and atoms are handled last.

use super::BooleanExpression;
use super::BooleanExpression::*;
use super::ExprParseError;
use std::iter::Peekable;
use std::str::Chars;

/// **(internal)** Tokens of the infix expression language.
#[derive(Debug, Eq, PartialEq)]
enum ExprToken {
    Not,                    // '!'
    And,                    // '&'
    Or,                     // '|'
    Id(String),             // variable name
    Num(u64),               // integer constant
    Tokens(Vec<ExprToken>), // a parenthesised group
}

fn invalid(message: impl Into<String>) -> ExprParseError {
    ExprParseError::InvalidSyntax {
        message: message.into(),
    }
}

/// Parse a string into a [`BooleanExpression`], or an error if it is not a valid
/// formula of the grammar `or := and ('|' and)*`, `and := atom ('&' atom)*`,
/// `atom := '(' or ')' | integer | identifier | '!' atom`.
pub fn parse_boolean_expression(from: &str) -> Result<BooleanExpression, ExprParseError> {
    let tokens = tokenize_group(&mut from.chars().peekable(), true)?;
    parse_or(&tokens)
}

/// **(internal)** Turn a character stream into a token tree. The outer call
/// consumes the opening parenthesis of a group and the recursive call its closing
/// one; `top_level` marks the stream end as the terminator instead.
fn tokenize_group(
    data: &mut Peekable<Chars>,
    top_level: bool,
) -> Result<Vec<ExprToken>, ExprParseError> {
    let mut output = Vec::new();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* skip */ }
            '!' => output.push(ExprToken::Not),
            '&' => output.push(ExprToken::And),
            '|' => output.push(ExprToken::Or),
            ')' => {
                return if top_level {
                    Err(invalid("Unexpected ')'."))
                } else {
                    Ok(output)
                }
            }
            '(' => {
                let tokens = tokenize_group(data, false)?;
                output.push(ExprToken::Tokens(tokens));
            }
            c if c.is_ascii_digit() => {
                let mut value = u64::from(c as u8 - b'0');
                while let Some(d) = data.peek().and_then(|c| c.to_digit(10)) {
                    value = value.saturating_mul(10).saturating_add(u64::from(d));
                    data.next();
                }
                output.push(ExprToken::Num(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = vec![c];
                while let Some(&c) = data.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        data.next();
                    } else {
                        break;
                    }
                }
                output.push(ExprToken::Id(name.into_iter().collect()));
            }
            c => return Err(invalid(format!("Unknown character '{}'.", c))),
        }
    }
    if top_level {
        Ok(output)
    } else {
        Err(invalid("Expected ')'."))
    }
}

/// **(internal)** Split the token tree at every top-level `|`.
fn parse_or(data: &[ExprToken]) -> Result<BooleanExpression, ExprParseError> {
    let mut operands = Vec::new();
    for part in data.split(|t| *t == ExprToken::Or) {
        operands.push(parse_and(part)?);
    }
    if operands.len() == 1 {
        Ok(operands.pop().expect("One operand is present."))
    } else {
        Ok(Or(operands))
    }
}

/// **(internal)** Split a `|`-free token run at every top-level `&`.
fn parse_and(data: &[ExprToken]) -> Result<BooleanExpression, ExprParseError> {
    let mut operands = Vec::new();
    for part in data.split(|t| *t == ExprToken::And) {
        operands.push(parse_atom(part)?);
    }
    if operands.len() == 1 {
        Ok(operands.pop().expect("One operand is present."))
    } else {
        Ok(And(operands))
    }
}

/// **(internal)** An operator-free token run: negations followed by one atom.
fn parse_atom(data: &[ExprToken]) -> Result<BooleanExpression, ExprParseError> {
    if data.is_empty() {
        return Err(invalid("Expected a formula, found nothing."));
    }
    if data[0] == ExprToken::Not {
        return Ok(Not(Box::new(parse_atom(&data[1..])?)));
    }
    if data.len() > 1 {
        return Err(invalid(format!(
            "Expected a variable, constant or (...), but found {:?}.",
            data
        )));
    }
    match &data[0] {
        ExprToken::Id(name) => Ok(Variable(name.clone())),
        ExprToken::Num(value) => Ok(Const(*value != 0)),
        ExprToken::Tokens(inner) => parse_or(inner),
        _ => unreachable!("Operators are consumed by the split passes."),
    }
}
