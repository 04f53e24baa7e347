//! A miniature host query language used to drive `geodql-core` end to end.
//!
//! Lexes `NAME(arg, ...)` expressions whose arguments are paths (`p.geom`),
//! numbers, quoted strings, `:named` parameters or nested registered calls.

#![allow(dead_code)]

use geodql_core::{
    ExpressionCompiler, FunctionCall, FunctionRegistry, GeoDqlError, OwnedToken, Result,
    TokenConsumer, TokenCursor, TokenKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'r> {
    Path(String),
    Number(String),
    Text(String),
    Parameter(String),
    Call(FunctionCall<'r, Expr<'r>>),
}

pub fn lex(input: &str) -> TokenCursor {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, ch) = chars[i];
        let single = match ch {
            '(' => Some(TokenKind::OpenParenthesis),
            ')' => Some(TokenKind::CloseParenthesis),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = single {
            tokens.push(OwnedToken::new(kind, ch.to_string(), start));
            i += 1;
            continue;
        }
        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        let kind = if ch == '\'' {
            while end < chars.len() && chars[end].1 != '\'' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            TokenKind::Other
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            while end < chars.len()
                && (chars[end].1.is_ascii_alphanumeric() || matches!(chars[end].1, '_' | '.'))
            {
                end += 1;
            }
            TokenKind::Identifier
        } else {
            while end < chars.len()
                && (chars[end].1.is_ascii_alphanumeric() || matches!(chars[end].1, '_' | '.'))
            {
                end += 1;
            }
            TokenKind::Other
        };

        let stop = chars.get(end).map_or(input.len(), |(offset, _)| *offset);
        tokens.push(OwnedToken::new(kind, &input[start..stop], start));
        i = end;
    }

    TokenCursor::new(tokens)
}

pub fn parse_expression<'r>(
    registry: &'r FunctionRegistry,
    stream: &mut TokenCursor,
) -> Result<Expr<'r>> {
    let (kind, text) = match stream.peek() {
        Some(token) => (token.kind, token.text.to_string()),
        None => return Err(GeoDqlError::InvalidInput("expected expression".into())),
    };

    match kind {
        TokenKind::Identifier if registry.contains(&text) => registry
            .parse_call(stream, |s| parse_expression(registry, s))
            .map(Expr::Call),
        TokenKind::Identifier => {
            stream.advance();
            Ok(Expr::Path(text))
        }
        TokenKind::Other => {
            stream.advance();
            Ok(match text.chars().next() {
                Some('\'') => Expr::Text(text),
                Some(':') => Expr::Parameter(text[1..].to_string()),
                _ => Expr::Number(text),
            })
        }
        _ => Err(GeoDqlError::InvalidInput(format!(
            "unexpected '{text}' in expression"
        ))),
    }
}

/// Parse a whole input as one registered call.
pub fn parse<'r>(registry: &'r FunctionRegistry, input: &str) -> Result<FunctionCall<'r, Expr<'r>>> {
    let mut stream = lex(input);
    let call = registry.parse_call(&mut stream, |s| parse_expression(registry, s))?;
    if let Some(token) = stream.peek() {
        return Err(GeoDqlError::InvalidInput(format!(
            "trailing input at {}: '{}'",
            token.position, token.text
        )));
    }
    Ok(call)
}

/// Renders paths verbatim and parameters as positional placeholders.
pub struct SqlWalker<'p> {
    pub platform: &'p str,
    pub parameters: Vec<String>,
}

impl<'p> SqlWalker<'p> {
    pub fn new(platform: &'p str) -> Self {
        Self {
            platform,
            parameters: Vec::new(),
        }
    }
}

impl<'r> ExpressionCompiler<Expr<'r>> for SqlWalker<'_> {
    fn platform(&self) -> &str {
        self.platform
    }

    fn compile_expression(&mut self, expression: &Expr<'r>) -> Result<String> {
        match expression {
            Expr::Path(path) | Expr::Number(path) | Expr::Text(path) => Ok(path.clone()),
            Expr::Parameter(name) => {
                self.parameters.push(name.clone());
                Ok("?".to_string())
            }
            Expr::Call(call) => call.compile(self),
        }
    }
}
