use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringOp {
    Contains,
    DoesNotContain,
    StartsWith,
    DerivedFrom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Property(String),
    BoolVal(bool),
    CompareOp(CompareOp),
    StringOp(StringOp),
    EscapedString(String),
    And,
    Or,
    Exists,
    LParen,
    RParen,
}

struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn read_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let start = match self.chars.peek() {
            Some((i, _)) => *i,
            None => return "",
        };
        let mut end = start;
        while let Some((i, c)) = self.chars.peek().copied() {
            if !pred(c) {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }
        &self.input[start..end]
    }

    fn read_escaped_string(&mut self) -> Result<String, StorageError> {
        // Opening quote already consumed by the caller.
        let mut out = String::new();
        loop {
            match self.chars.next() {
                Some((_, '"')) => return Ok(out),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, '"')) => out.push('"'),
                    Some((_, c)) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err(StorageError::SearchParse("unterminated escape in string literal".into())),
                },
                Some((_, c)) => out.push(c),
                None => return Err(StorageError::SearchParse("unterminated string literal".into())),
            }
        }
    }

    fn is_property_char(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '.' | ':' | '@' | '_' | '-')
    }
}

/// Tokenize a UPnP `SearchCriteria` / Samsung-style search expression.
pub fn tokenize(input: &str) -> Result<Vec<Token>, StorageError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        lexer.skip_whitespace();
        let Some(c) = lexer.peek_char() else { break };

        match c {
            '(' => {
                lexer.chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                lexer.chars.next();
                tokens.push(Token::RParen);
            }
            '"' => {
                lexer.chars.next();
                let s = lexer.read_escaped_string()?;
                tokens.push(Token::EscapedString(s));
            }
            '=' => {
                lexer.chars.next();
                tokens.push(Token::CompareOp(CompareOp::Eq));
            }
            '!' => {
                lexer.chars.next();
                if lexer.peek_char() == Some('=') {
                    lexer.chars.next();
                    tokens.push(Token::CompareOp(CompareOp::Ne));
                } else {
                    return Err(StorageError::SearchParse("expected '=' after '!'".into()));
                }
            }
            '<' => {
                lexer.chars.next();
                if lexer.peek_char() == Some('=') {
                    lexer.chars.next();
                    tokens.push(Token::CompareOp(CompareOp::Le));
                } else {
                    tokens.push(Token::CompareOp(CompareOp::Lt));
                }
            }
            '>' => {
                lexer.chars.next();
                if lexer.peek_char() == Some('=') {
                    lexer.chars.next();
                    tokens.push(Token::CompareOp(CompareOp::Ge));
                } else {
                    tokens.push(Token::CompareOp(CompareOp::Gt));
                }
            }
            c if Lexer::is_property_char(c) => {
                let word = lexer.read_while(Lexer::is_property_char).to_string();
                tokens.push(classify_word(&word)?);
            }
            other => {
                return Err(StorageError::SearchParse(format!("unexpected character '{other}'")));
            }
        }
    }

    Ok(tokens)
}

fn classify_word(word: &str) -> Result<Token, StorageError> {
    let lower = word.to_ascii_lowercase();
    Ok(match lower.as_str() {
        "and" => Token::And,
        "or" => Token::Or,
        "exists" => Token::Exists,
        "true" => Token::BoolVal(true),
        "false" => Token::BoolVal(false),
        "contains" => Token::StringOp(StringOp::Contains),
        "doesnotcontain" => Token::StringOp(StringOp::DoesNotContain),
        "startswith" => Token::StringOp(StringOp::StartsWith),
        "derivedfrom" => Token::StringOp(StringOp::DerivedFrom),
        _ => Token::Property(word.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_equality() {
        let tokens = tokenize(r#"upnp:artist = "Kyuss""#).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Property("upnp:artist".into()),
                Token::CompareOp(CompareOp::Eq),
                Token::EscapedString("Kyuss".into()),
            ]
        );
    }

    #[test]
    fn tokenizes_derivedfrom_and_and() {
        let tokens = tokenize(
            r#"upnp:class derivedfrom "object.item.audioItem" and upnp:artist="King Krule""#,
        )
        .unwrap();
        assert!(tokens.contains(&Token::StringOp(StringOp::DerivedFrom)));
        assert!(tokens.contains(&Token::And));
    }

    #[test]
    fn rejects_bare_bang() {
        assert!(tokenize("upnp:artist ! \"x\"").is_err());
    }

    #[test]
    fn unescapes_embedded_quote() {
        let tokens = tokenize(r#"dc:title = "She said \"hi\"""#).unwrap();
        assert_eq!(tokens[2], Token::EscapedString("She said \"hi\"".into()));
    }
}
