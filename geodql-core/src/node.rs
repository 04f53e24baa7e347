//! Function definitions and the calls parsed from them.
//!
//! A [`FunctionDefinition`] fixes the SQL name, [`ArgumentBounds`] and
//! [`AllowList`] of one spatial function. [`FunctionCall::parse`] consumes
//! `name(arg, ...)` from a host token stream, delegating each argument to a
//! host expression parser, and [`FunctionCall::render`] emits
//! `name(rendered, ...)` for a platform the definition allows.
//!
//! A call only exists once parsing has succeeded, so there is no way to
//! render a half-parsed node.

use crate::arity::ArgumentBounds;
use crate::error::{GeoDqlError, Result};
use crate::platform::AllowList;
use crate::token::{TokenConsumer, TokenKind};

/// Host compiler capability used by [`FunctionCall::compile`].
///
/// This is the shape of an ORM SQL walker: it knows the platform it targets
/// and how to emit SQL for one sub-expression.
pub trait ExpressionCompiler<E: ?Sized> {
    fn platform(&self) -> &str;

    fn compile_expression(&mut self, expression: &E) -> Result<String>;
}

/// Static description of one spatial function variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: String,
    bounds: ArgumentBounds,
    platforms: AllowList,
}

impl FunctionDefinition {
    /// # Example
    ///
    /// ```
    /// use geodql_core::{AllowList, ArgumentBounds, FunctionDefinition, MaxArgs};
    ///
    /// let def = FunctionDefinition::new(
    ///     "ST_Distance",
    ///     ArgumentBounds::new(2, MaxArgs::Bounded(3)).unwrap(),
    ///     AllowList::new(["postgresql"]),
    /// )
    /// .unwrap();
    /// assert_eq!(def.name(), "ST_Distance");
    /// ```
    pub fn new(
        name: impl Into<String>,
        bounds: ArgumentBounds,
        platforms: AllowList,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GeoDqlError::InvalidDefinition(
                "function name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            bounds,
            platforms,
        })
    }

    /// SQL name, emitted verbatim by [`FunctionCall::render`].
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> ArgumentBounds {
        self.bounds
    }

    pub fn platforms(&self) -> &AllowList {
        &self.platforms
    }

    /// Shorthand for [`FunctionCall::parse`].
    pub fn parse<'d, S, E, F>(
        &'d self,
        stream: &mut S,
        parse_expression: F,
    ) -> Result<FunctionCall<'d, E>>
    where
        S: TokenConsumer + ?Sized,
        F: FnMut(&mut S) -> Result<E>,
    {
        FunctionCall::parse(self, stream, parse_expression)
    }
}

/// One parsed invocation of a [`FunctionDefinition`].
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall<'d, E> {
    definition: &'d FunctionDefinition,
    arguments: Vec<E>,
}

impl<'d, E> FunctionCall<'d, E> {
    /// Build a call from arguments the host already holds.
    pub fn new(definition: &'d FunctionDefinition, arguments: Vec<E>) -> Result<Self> {
        if !definition.bounds.contains(arguments.len()) {
            return Err(GeoDqlError::InvalidInput(format!(
                "{} takes {} arguments, got {}",
                definition.name,
                definition.bounds,
                arguments.len()
            )));
        }
        Ok(Self {
            definition,
            arguments,
        })
    }

    /// Parse `identifier ( expr [, expr]* )` from `stream`.
    ///
    /// The stream must be positioned on the function name. Commas are
    /// mandatory until the minimum is met; after that another argument is
    /// read whenever the maximum allows it and the lookahead is not `)`.
    pub fn parse<S, F>(
        definition: &'d FunctionDefinition,
        stream: &mut S,
        mut parse_expression: F,
    ) -> Result<Self>
    where
        S: TokenConsumer + ?Sized,
        F: FnMut(&mut S) -> Result<E>,
    {
        let bounds = definition.bounds;

        stream.expect(TokenKind::Identifier)?;
        stream.expect(TokenKind::OpenParenthesis)?;

        let mut arguments = vec![parse_expression(stream)?];

        while bounds.requires_more(arguments.len())
            || (bounds.allows_more(arguments.len()) && !stream.at(TokenKind::CloseParenthesis))
        {
            stream.expect(TokenKind::Comma)?;
            arguments.push(parse_expression(stream)?);
        }

        stream.expect(TokenKind::CloseParenthesis)?;

        tracing::debug!(
            function = %definition.name,
            arguments = arguments.len(),
            "parsed function call"
        );

        Ok(Self {
            definition,
            arguments,
        })
    }

    pub fn definition(&self) -> &'d FunctionDefinition {
        self.definition
    }

    pub fn name(&self) -> &'d str {
        &self.definition.name
    }

    pub fn arguments(&self) -> &[E] {
        &self.arguments
    }

    pub fn into_arguments(self) -> Vec<E> {
        self.arguments
    }

    /// Render as `name(arg1, arg2, ...)` for `platform`.
    ///
    /// Fails with [`GeoDqlError::UnsupportedPlatform`] when the definition's
    /// allow-list rejects `platform`; otherwise arguments are rendered in
    /// parse order and joined with `", "`.
    pub fn render<F>(&self, platform: &str, mut render_argument: F) -> Result<String>
    where
        F: FnMut(&E) -> Result<String>,
    {
        if let Err(err) = self.definition.platforms.check(platform) {
            tracing::debug!(
                function = %self.definition.name,
                platform,
                "platform rejected by allow-list"
            );
            return Err(err);
        }

        let rendered = self
            .arguments
            .iter()
            .map(&mut render_argument)
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("{}({})", self.definition.name, rendered.join(", ")))
    }

    /// [`render`](Self::render) against a host compiler's platform.
    pub fn compile<C>(&self, compiler: &mut C) -> Result<String>
    where
        C: ExpressionCompiler<E> + ?Sized,
    {
        let platform = compiler.platform().to_string();
        self.render(&platform, |argument| compiler.compile_expression(argument))
    }
}
