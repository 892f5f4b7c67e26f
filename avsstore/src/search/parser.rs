use super::ast::{Expr, Value};
use super::lexer::{tokenize, Token};
use crate::error::StorageError;

/// `expr := orExpr`, `orExpr := andExpr (OR andExpr)*`, `andExpr := relExpr (AND relExpr)*`,
/// `relExpr := PROPERTY COMPAREOP value | PROPERTY STRINGOP STRING | PROPERTY EXISTS BOOLVAL | LPAREN expr RPAREN`.
pub fn parse(input: &str) -> Result<Expr, StorageError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_or()?;
    if parser.pos != parser.tokens.len() {
        return Err(StorageError::SearchParse(format!(
            "unexpected trailing token at position {}",
            parser.pos
        )));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        t
    }

    fn parse_or(&mut self) -> Result<Expr, StorageError> {
        let mut lhs = self.parse_and()?;
        while matches!(self.peek(), Some(Token::Or)) {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr, StorageError> {
        let mut lhs = self.parse_rel()?;
        while matches!(self.peek(), Some(Token::And)) {
            self.advance();
            let rhs = self.parse_rel()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_rel(&mut self) -> Result<Expr, StorageError> {
        match self.peek() {
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_or()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(Expr::Group(Box::new(inner))),
                    other => Err(StorageError::SearchParse(format!(
                        "expected ')' but found {other:?}"
                    ))),
                }
            }
            Some(Token::Property(_)) => {
                let property = match self.advance() {
                    Some(Token::Property(p)) => p,
                    _ => unreachable!(),
                };
                match self.advance() {
                    Some(Token::CompareOp(op)) => {
                        let value = self.parse_value()?;
                        Ok(Expr::Compare { property, op, value })
                    }
                    Some(Token::StringOp(op)) => {
                        let value = self.parse_string()?;
                        Ok(Expr::StringOp { property, op, value })
                    }
                    Some(Token::Exists) => {
                        let value = match self.advance() {
                            Some(Token::BoolVal(b)) => b,
                            other => {
                                return Err(StorageError::SearchParse(format!(
                                    "expected true/false after 'exists' but found {other:?}"
                                )))
                            }
                        };
                        Ok(Expr::Exists { property, value })
                    }
                    other => Err(StorageError::SearchParse(format!(
                        "expected comparison, string op or 'exists' after property '{property}' but found {other:?}"
                    ))),
                }
            }
            other => Err(StorageError::SearchParse(format!(
                "expected property or '(' but found {other:?}"
            ))),
        }
    }

    fn parse_value(&mut self) -> Result<Value, StorageError> {
        match self.advance() {
            Some(Token::EscapedString(s)) => Ok(Value::Str(s)),
            Some(Token::Property(p)) => Ok(Value::Property(p)),
            other => Err(StorageError::SearchParse(format!(
                "expected string or property value but found {other:?}"
            ))),
        }
    }

    fn parse_string(&mut self) -> Result<String, StorageError> {
        match self.advance() {
            Some(Token::EscapedString(s)) => Ok(s),
            other => Err(StorageError::SearchParse(format!(
                "expected quoted string but found {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::lexer::CompareOp;

    #[test]
    fn parses_simple_equality() {
        let expr = parse(r#"upnp:artist = "Kyuss""#).unwrap();
        assert_eq!(
            expr,
            Expr::Compare {
                property: "upnp:artist".into(),
                op: CompareOp::Eq,
                value: Value::Str("Kyuss".into()),
            }
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        // a or b and c  ==  a or (b and c)
        let expr = parse(r#"@id = "1" or upnp:artist = "a" and upnp:album = "b""#).unwrap();
        match expr {
            Expr::Or(_, rhs) => assert!(matches!(*rhs, Expr::And(_, _))),
            other => panic!("expected Or at top level, got {other:?}"),
        }
    }

    #[test]
    fn parens_group_explicitly() {
        let expr = parse(r#"(upnp:artist = "a" or upnp:artist = "b") and @id = "1""#).unwrap();
        match expr {
            Expr::And(lhs, _) => assert!(matches!(*lhs, Expr::Group(_))),
            other => panic!("expected And at top level, got {other:?}"),
        }
    }

    #[test]
    fn rejects_dangling_operator() {
        assert!(parse("upnp:artist =").is_err());
    }
}
