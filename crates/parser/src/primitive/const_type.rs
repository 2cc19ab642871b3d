//! Constant value types for logic schemas.

use crate::{next_inner, Lexeme, ParserError, Result, Rule};
use pest::iterators::Pair;
use std::fmt;

/// A constant in a logic schema.
///
/// Two constants denote the same term iff they are equal by value; an
/// integer never equals a text constant, even with the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstType {
    /// 64-bit signed integer constant.
    Integer(i64),

    /// UTF-8 string constant.
    Text(String),
}

impl fmt::Display for ConstType {
    /// Integers as-is, strings in single quotes with inner quotes doubled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

impl Lexeme for ConstType {
    /// Parses `integer | string`. Both quote styles are accepted for text; a
    /// doubled delimiter inside the quotes stands for one.
    fn from_parsed_rule(parsed_rule: Pair<Rule>) -> Result<Self> {
        let mut inner = parsed_rule.into_inner();
        let value = next_inner(&mut inner, "constant value")?;
        match value.as_rule() {
            Rule::integer => value
                .as_str()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| ParserError::InvalidInteger(value.as_str().to_string())),
            Rule::string => Ok(Self::Text(unquote(value.as_str()))),
            other => Err(ParserError::UnexpectedRule(
                "constant".into(),
                format!("{other:?}"),
            )),
        }
    }
}

/// Strip the delimiters of a matched `string` and collapse doubled ones.
fn unquote(raw: &str) -> String {
    let quote = &raw[..1];
    raw[1..raw.len() - 1].replace(&quote.repeat(2), quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogicSchemaParser;
    use pest::Parser;

    fn parse(text: &str) -> Result<ConstType> {
        let mut pairs = LogicSchemaParser::parse(Rule::constant, text)?;
        ConstType::from_parsed_rule(next_inner(&mut pairs, "constant")?)
    }

    #[test]
    fn display_golden() {
        assert_eq!(ConstType::Integer(42).to_string(), "42");
        assert_eq!(ConstType::Integer(-7).to_string(), "-7");
        assert_eq!(ConstType::Text("".into()).to_string(), "''");
        assert_eq!(ConstType::Text("hello world".into()).to_string(), "'hello world'");
        assert_eq!(ConstType::Text("it's".into()).to_string(), "'it''s'");
        assert_eq!(ConstType::Text("say \"hi\"".into()).to_string(), "'say \"hi\"'");
    }

    #[test]
    fn doubled_quotes_are_unescaped() {
        assert_eq!(parse("'it''s'"), Ok(ConstType::Text("it's".into())));
        assert_eq!(parse("\"say \"\"hi\"\"\""), Ok(ConstType::Text("say \"hi\"".into())));
        assert_eq!(parse("\"it's\""), Ok(ConstType::Text("it's".into())));
        assert_eq!(parse("''"), Ok(ConstType::Text(String::new())));
        assert_eq!(parse("-12"), Ok(ConstType::Integer(-12)));
    }

    #[test]
    fn printed_text_parses_back() {
        for text in ["it's", "''", "a \"b\" 'c'", ""] {
            let constant = ConstType::Text(text.into());
            assert_eq!(parse(&constant.to_string()), Ok(constant));
        }
    }

    #[test]
    fn equality_cross_type() {
        assert_ne!(ConstType::Integer(42), ConstType::Text("42".into()));
        assert_eq!(ConstType::Text("a".into()), ConstType::Text("a".into()));
    }
}
