use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{Extras, Token};
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use bumpalo::collections::Vec;
use logos::{Lexer, Logos, Span};

type ParseResult<T> = std::result::Result<T, ASTKind>;

use private::ParseNode as _;

/// Options that change how source texts are parsed.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ParseOptions {
    /// When set, no [Location](crate::error::Location) is recorded on any AST Node and all
    /// `loc` fields are left as `None`.
    pub no_location: bool,
}

impl ParseOptions {
    /// Disables recording source locations on AST Nodes.
    pub fn without_location() -> Self {
        ParseOptions { no_location: true }
    }
}

pub(crate) mod private {
    use super::{ASTContext, Extras, Lexer, Logos, ParseOptions, ParseResult, Span, Token};
    use crate::error::Location;

    /// Tracks the line that the lexer is currently on, so that locations can be computed without
    /// rescanning the source text from its start for every AST Node.
    #[derive(Default)]
    pub(crate) struct LineTracker {
        line: usize,
        line_start: usize,
        scanned: usize,
    }

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        pub(crate) in_var_def: bool,
        pub(crate) track_locations: bool,
        pub(crate) lines: LineTracker,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str, options: ParseOptions) -> Self {
            let extras = Extras { arena: &ctx.arena };
            ParserContext {
                arena: &ctx.arena,
                peek: None,
                iter: Token::lexer_with_extras(source, extras),
                in_var_def: false,
                track_locations: !options.no_location,
                lines: LineTracker {
                    line: 1,
                    ..LineTracker::default()
                },
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            match self.peek.take() {
                Some(token) => token,
                None => self.iter.next().unwrap_or(Token::End),
            }
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            let iter = &mut self.iter;
            self.peek
                .get_or_insert_with(|| iter.next().unwrap_or(Token::End))
        }

        #[inline]
        pub(crate) fn source(&self) -> &str {
            self.iter.source()
        }

        #[inline]
        pub(crate) fn span(&self) -> Span {
            self.iter.span()
        }

        /// Returns the location of the upcoming token, which must be called before the first
        /// token of an AST Node is consumed.
        pub(crate) fn loc(&mut self) -> Option<Location> {
            if !self.track_locations {
                return None;
            }
            self.peek();
            let source = self.iter.source();
            let offset = self.iter.span().start.min(source.len());
            let lines = &mut self.lines;
            if offset < lines.scanned {
                return Some(crate::error::get_location(source, offset));
            }
            for (index, byte) in source.as_bytes()[lines.scanned..offset].iter().enumerate() {
                if *byte == b'\n' {
                    lines.line += 1;
                    lines.line_start = lines.scanned + index + 1;
                }
            }
            lines.scanned = offset;
            Some(Location {
                line: lines.line,
                column: source[lines.line_start..offset].chars().count() + 1,
            })
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        Self::parse_with_options(ctx, source, ParseOptions::default())
    }

    /// Parse an input source text like [`ParseNode::parse`] with the given [ParseOptions].
    fn parse_with_options<T: ToString>(
        ctx: &'a ASTContext,
        source: T,
        options: ParseOptions,
    ) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = private::ParserContext::new(ctx, source, options);
        match Self::new_with_ctx(&mut parser_ctx) {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => {
                let span = parser_ctx.span();
                let context = print_span(parser_ctx.source(), span.clone());
                let location = get_location(parser_ctx.source(), span.start);
                let message = format!("Invalid {}", error);
                Err(Error::new_with_context(
                    message,
                    Some(location),
                    context,
                    Some(ErrorType::Syntax),
                ))
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        let loc = ctx.loc();
        match ctx.next() {
            Token::Name("true") => Ok(BooleanValue { value: true, loc }),
            Token::Name("false") => Ok(BooleanValue { value: false, loc }),
            _ => Err(ASTKind::Boolean),
        }
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let loc = ctx.loc();
        match ctx.next() {
            Token::Name("true" | "false" | "null") => Err(ASTKind::Enum),
            Token::Name(value) => Ok(EnumValue { value, loc }),
            _ => Err(ASTKind::Enum),
        }
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FloatValue<'a>> {
        let loc = ctx.loc();
        if let Token::Float(value) = ctx.next() {
            Ok(FloatValue { value, loc })
        } else {
            Err(ASTKind::Float)
        }
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<IntValue<'a>> {
        let loc = ctx.loc();
        if let Token::Integer(value) = ctx.next() {
            Ok(IntValue { value, loc })
        } else {
            Err(ASTKind::Int)
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let loc = ctx.loc();
        if let Token::String(value) = ctx.next() {
            Ok(StringValue { value, loc })
        } else {
            Err(ASTKind::String)
        }
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Variable<'a>> {
        let loc = ctx.loc();
        if let Token::VariableName(name) = ctx.next() {
            Ok(Variable { name, loc })
        } else {
            Err(ASTKind::Variable)
        }
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        let in_var_def = ctx.in_var_def;
        match ctx.peek() {
            Token::Name("null") => {
                ctx.next();
                Ok(Value::Null)
            }
            Token::VariableName(_) if in_var_def => Err(ASTKind::VariableDefinition),
            Token::VariableName(_) => Variable::new_with_ctx(ctx).map(Value::Variable),
            Token::Name("true" | "false") => BooleanValue::new_with_ctx(ctx).map(Value::Boolean),
            Token::Name(_) => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            Token::Float(_) => FloatValue::new_with_ctx(ctx).map(Value::Float),
            Token::Integer(_) => IntValue::new_with_ctx(ctx).map(Value::Int),
            Token::String(_) => StringValue::new_with_ctx(ctx).map(Value::String),
            Token::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            Token::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => Err(ASTKind::Value),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let loc = ctx.loc();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(ObjectField { name, value, loc });
            }
        }
        Err(ASTKind::ObjectField)
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        let loc = ctx.loc();
        if let Token::BraceOpen = ctx.next() {
            let children = if let Token::BraceClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(ObjectField::new_with_ctx(ctx)?);
                    if let Token::BraceClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            };
            Ok(ObjectValue { children, loc })
        } else {
            Err(ASTKind::Object)
        }
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        let loc = ctx.loc();
        if let Token::BracketOpen = ctx.next() {
            let children = if let Token::BracketClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(Value::new_with_ctx(ctx)?);
                    if let Token::BracketClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            };
            Ok(ListValue { children, loc })
        } else {
            Err(ASTKind::List)
        }
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let loc = ctx.loc();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(Argument { name, value, loc });
            }
        }
        Err(ASTKind::Argument)
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            if let Token::ParenClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(Argument::new_with_ctx(ctx)?);
                    if let Token::ParenClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            }
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directive<'a>> {
        let loc = ctx.loc();
        if let Token::DirectiveName(name) = ctx.next() {
            let arguments = Arguments::new_with_ctx(ctx)?;
            Ok(Directive {
                name,
                arguments,
                loc,
            })
        } else {
            Err(ASTKind::Directive)
        }
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut builder = Vec::new_in(ctx.arena);
        while let Token::DirectiveName(_) = ctx.peek() {
            builder.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children: builder })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        let loc = ctx.loc();
        if let Token::Name(name_or_alias) = ctx.next() {
            let (alias, name) = if let Token::Colon = ctx.peek() {
                ctx.next();
                if let Token::Name(name) = ctx.next() {
                    (Some(name_or_alias), name)
                } else {
                    return Err(ASTKind::Field);
                }
            } else {
                (None, name_or_alias)
            };

            let arguments = Arguments::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = SelectionSet::new_with_ctx(ctx)?;

            Ok(Field {
                alias,
                name,
                arguments,
                directives,
                selection_set,
                loc,
            })
        } else {
            Err(ASTKind::Field)
        }
    }
}

/// Parses the remainder of a fragment spread after its `...` has been consumed.
#[inline]
fn fragment_spread_after_ellipsis<'a>(
    ctx: &mut private::ParserContext<'a>,
    loc: Option<crate::error::Location>,
) -> ParseResult<FragmentSpread<'a>> {
    match ctx.peek() {
        Token::Name("on") => Err(ASTKind::FragmentSpread),
        Token::Name(_) => {
            let name = NamedType::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            Ok(FragmentSpread {
                name,
                directives,
                loc,
            })
        }
        _ => Err(ASTKind::FragmentSpread),
    }
}

/// Parses the remainder of an inline fragment after its `...` has been consumed.
#[inline]
fn inline_fragment_after_ellipsis<'a>(
    ctx: &mut private::ParserContext<'a>,
    loc: Option<crate::error::Location>,
) -> ParseResult<InlineFragment<'a>> {
    let type_condition = if let Token::Name("on") = ctx.peek() {
        ctx.next();
        Some(NamedType::new_with_ctx(ctx)?)
    } else {
        None
    };
    let directives = Directives::new_with_ctx(ctx)?;
    if let Token::BraceOpen = ctx.peek() {
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc,
        })
    } else {
        Err(ASTKind::InlineFragment)
    }
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        let loc = ctx.loc();
        if let Token::Ellipsis = ctx.next() {
            fragment_spread_after_ellipsis(ctx, loc)
        } else {
            Err(ASTKind::FragmentSpread)
        }
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let loc = ctx.loc();
        if let Token::Name(name) = ctx.next() {
            Ok(NamedType { name, loc })
        } else {
            Err(ASTKind::NamedType)
        }
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        let loc = ctx.loc();
        if let Token::Ellipsis = ctx.next() {
            inline_fragment_after_ellipsis(ctx, loc)
        } else {
            Err(ASTKind::InlineFragment)
        }
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        match ctx.peek() {
            Token::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            Token::Ellipsis => {
                let loc = ctx.loc();
                ctx.next();
                match ctx.peek() {
                    Token::DirectiveName(_) | Token::BraceOpen | Token::Name("on") => {
                        inline_fragment_after_ellipsis(ctx, loc).map(Selection::InlineFragment)
                    }
                    Token::Name(_) => {
                        fragment_spread_after_ellipsis(ctx, loc).map(Selection::FragmentSpread)
                    }
                    _ => Err(ASTKind::Selection),
                }
            }
            _ => Err(ASTKind::Selection),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        let selections = if let Token::BraceOpen = ctx.peek() {
            ctx.next();
            let mut builder = Vec::new_in(ctx.arena);
            loop {
                builder.push(Selection::new_with_ctx(ctx)?);
                if let Token::BraceClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            builder
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(SelectionSet { selections })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let loc = ctx.loc();
        let token = ctx.next();
        let of_type = if let Token::BracketOpen = token {
            let inner = Type::new_with_ctx(ctx)?;
            if let Token::BracketClose = ctx.next() {
                Type::ListType(ctx.arena.alloc(inner))
            } else {
                return Err(ASTKind::ListType);
            }
        } else if let Token::Name(name) = token {
            Type::NamedType(NamedType { name, loc })
        } else {
            return Err(ASTKind::Type);
        };
        if let Token::Exclam = ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let loc = ctx.loc();
        let variable = Variable::new_with_ctx(ctx)?;
        let of_type = if let Token::Colon = ctx.next() {
            Type::new_with_ctx(ctx)?
        } else {
            return Err(ASTKind::VariableDefinition);
        };
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            ctx.in_var_def = true;
            let value = Value::new_with_ctx(ctx)?;
            ctx.in_var_def = false;
            Some(value)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            loc,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinitions<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let mut builder = Vec::new_in(ctx.arena);
            loop {
                builder.push(VariableDefinition::new_with_ctx(ctx)?);
                if let Token::ParenClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            builder
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        let loc = ctx.loc();
        if let Token::Name("fragment") = ctx.next() {
            let name = NamedType::new_with_ctx(ctx)?;
            let type_condition = if let Token::Name("on") = ctx.next() {
                NamedType::new_with_ctx(ctx)?
            } else {
                return Err(ASTKind::FragmentDefinition);
            };
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = if let Token::BraceOpen = ctx.peek() {
                SelectionSet::new_with_ctx(ctx)?
            } else {
                return Err(ASTKind::FragmentDefinition);
            };
            Ok(FragmentDefinition {
                name,
                type_condition,
                directives,
                selection_set,
                loc,
            })
        } else {
            Err(ASTKind::FragmentDefinition)
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        match ctx.next() {
            Token::Name("query") => Ok(OperationKind::Query),
            Token::Name("mutation") => Ok(OperationKind::Mutation),
            Token::Name("subscription") => Ok(OperationKind::Subscription),
            _ => Err(ASTKind::OperationKind),
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let loc = ctx.loc();
        let operation = match ctx.peek() {
            Token::BraceOpen => {
                let selection_set = SelectionSet::new_with_ctx(ctx)?;
                return Ok(OperationDefinition {
                    operation: OperationKind::Query,
                    name: None,
                    variable_definitions: VariableDefinitions::default_in(ctx.arena),
                    directives: Directives::default_in(ctx.arena),
                    selection_set,
                    loc,
                });
            }
            Token::Name("query" | "mutation" | "subscription") => OperationKind::new_with_ctx(ctx)?,
            _ => return Err(ASTKind::OperationDefinition),
        };
        let name = if let Token::Name(_) = ctx.peek() {
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if let Token::BraceOpen = ctx.peek() {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(OperationDefinition {
                operation,
                name,
                variable_definitions,
                directives,
                selection_set,
                loc,
            })
        } else {
            Err(ASTKind::OperationDefinition)
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        loop {
            let definition = match ctx.peek() {
                Token::BraceOpen | Token::Name("query" | "mutation" | "subscription") => {
                    OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
                }
                Token::Name("fragment") => {
                    FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
                }
                Token::End => break,
                _ => Err(ASTKind::Document),
            }?;
            definitions.push(definition);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.iter.span().end,
        })
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::collections::Vec;
    use indoc::indoc;

    use crate::error::{ErrorType, Location};

    use super::{super::ast::*, ParseNode, ParseOptions};

    fn assert_parse<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, expected: T)
    where
        T: ParseNode<'a> + std::fmt::Debug + PartialEq,
    {
        let options = ParseOptions::without_location();
        assert_eq!(*T::parse_with_options(ctx, source, options).unwrap(), expected);
    }

    fn at(line: usize, column: usize) -> Option<Location> {
        Some(Location { line, column })
    }

    #[test]
    fn error() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "query { document { $ }}");
        let error = result.err().unwrap();
        assert_eq!(error.error_type(), ErrorType::Syntax);
        assert_eq!(error.location, at(1, 20));

        let result = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        );
        assert_eq!(result.err().unwrap().location, at(3, 17));
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "TypeName", NamedType::from("TypeName"));
    }

    #[test]
    fn variable() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "$test", Variable::from("test"));
    }

    #[test]
    fn lists() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "[]", ListValue::default_in(&ctx.arena));

        let list_children = Vec::from_iter_in([Value::Null, Value::Null], &ctx.arena);
        assert_parse(
            &ctx,
            "[null, null]",
            ListValue {
                children: list_children,
                loc: None,
            },
        );
    }

    #[test]
    fn objects() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "{}", ObjectValue::default_in(&ctx.arena));
        let list_children = Vec::from_iter_in(
            [ObjectField {
                name: "test",
                value: Value::Boolean(true.into()),
                loc: None,
            }],
            &ctx.arena,
        );
        assert_parse(
            &ctx,
            "{ test: true }",
            ObjectValue {
                children: list_children,
                loc: None,
            },
        );
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "true", Value::Boolean(true.into()));
        assert_parse(&ctx, "false", Value::Boolean(false.into()));
        assert_parse(&ctx, "$var", Value::Variable("var".into()));
        assert_parse(&ctx, "null", Value::Null);
        assert_parse(&ctx, "\"x\"", Value::String("x".into()));
        assert_parse(
            &ctx,
            "ENUM",
            Value::Enum(EnumValue {
                value: "ENUM",
                loc: None,
            }),
        );
        assert_parse(
            &ctx,
            "-12",
            Value::Int(IntValue {
                value: "-12",
                loc: None,
            }),
        );
        assert_parse(
            &ctx,
            "1.5e3",
            Value::Float(FloatValue {
                value: "1.5e3",
                loc: None,
            }),
        );
    }

    #[test]
    fn variables_in_defaults() {
        let ctx = ASTContext::new();
        assert!(VariableDefinitions::parse(&ctx, "($a: Int = $b)").is_err());
        assert!(VariableDefinitions::parse(&ctx, "($a: Int = 1)").is_ok());

        let var_defs = VariableDefinitions::parse(&ctx, "($a: Int = null, $b: Int)").unwrap();
        assert_eq!(var_defs.children[0].default_value, Some(Value::Null));
        assert_eq!(var_defs.children[1].default_value, None);
    }

    #[test]
    fn fields() {
        let ctx = ASTContext::new();
        let options = ParseOptions::without_location();
        let field = Field::parse_with_options(&ctx, "alias: name(a: 1) @skip(if: true) { child }", options)
            .unwrap();
        assert_eq!(field.alias, Some("alias"));
        assert_eq!(field.name, "name");
        assert_eq!(field.alias_or_name(), "alias");
        assert_eq!(field.arguments.children.len(), 1);
        assert_eq!(field.directives.children[0].name, "skip");
        assert_eq!(field.selection_set.selections.len(), 1);
        assert_eq!(field.loc, None);

        assert!(Field::parse(&ctx, "alias: { child }").is_err());
    }

    #[test]
    fn selections() {
        let ctx = ASTContext::new();
        let options = ParseOptions::without_location();
        let selection_set =
            SelectionSet::parse_with_options(&ctx, "{ field ...Spread ... on Type { a } ... @skip { b } }", options)
                .unwrap();
        let selections = &selection_set.selections;
        assert_eq!(selections.len(), 4);
        assert_eq!(selections[0].field().unwrap().name, "field");
        assert_eq!(selections[1].fragment_spread().unwrap().name.name, "Spread");
        assert_eq!(
            selections[2]
                .inline_fragment()
                .unwrap()
                .type_condition
                .unwrap()
                .name,
            "Type"
        );
        assert!(selections[3].inline_fragment().unwrap().type_condition.is_none());
        assert!(SelectionSet::parse(&ctx, "{ ...on }").is_err());
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        let inner = Type::NamedType("Int".into());
        assert_parse(&ctx, "Int", inner);
        assert_parse(&ctx, "Int!", Type::NonNullType(&inner));
        let list = Type::ListType(&inner);
        assert_parse(&ctx, "[Int]!", Type::NonNullType(&list));
        assert!(Type::parse(&ctx, "[Int").is_err());
    }

    #[test]
    fn operations() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "query Name($id: ID!) @dir { a } mutation { b } subscription S { c } { d }",
        )
        .unwrap();
        let kinds = document
            .operations()
            .map(|operation| operation.operation)
            .collect::<std::vec::Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                OperationKind::Query,
                OperationKind::Mutation,
                OperationKind::Subscription,
                OperationKind::Query
            ]
        );
        let first = document.operations().next().unwrap();
        assert_eq!(first.name.unwrap().name, "Name");
        assert_eq!(first.variable_definitions.children[0].variable.name, "id");
        assert!(first.variable_definitions.children[0].of_type.is_non_null());
        assert_eq!(first.directives.children[0].name, "dir");
    }

    #[test]
    fn operation_with_high_int_value() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "query { field(id: 1002275100009989500000000000000000000000000000000000) }",
        )
        .unwrap();
        let field = document.operations().next().unwrap().selection_set.selections[0]
            .field()
            .unwrap();
        assert_eq!(
            field.arguments.children[0].value,
            Value::Int(IntValue {
                value: "1002275100009989500000000000000000000000000000000000",
                loc: at(1, 19),
            })
        );
    }

    #[test]
    fn fragments() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "fragment Frag on Type @dir { field }").unwrap();
        let fragment = document.definitions[0].fragment().unwrap();
        assert_eq!(fragment.name.name, "Frag");
        assert_eq!(fragment.type_condition.name, "Type");
        assert_eq!(fragment.directives.children.len(), 1);
        assert!(Document::parse(&ctx, "fragment Frag Type { field }").is_err());
        assert!(Document::parse(&ctx, "fragment Frag on Type").is_err());
    }

    #[test]
    fn locations() {
        let ctx = ASTContext::new();
        let source = indoc! {r#"
            query Q($v: Int = 1) {
              alias: field(arg: "str", obj: { key: [1] }) @dir
              ...Spread
              ... on Type {
                inner
              }
            }

            fragment Spread on Type { x }
        "#};
        let document = Document::parse(&ctx, source).unwrap();

        let operation = document.definitions[0].operation().unwrap();
        assert_eq!(operation.loc, at(1, 1));
        assert_eq!(operation.name.unwrap().loc, at(1, 7));
        let var_def = &operation.variable_definitions.children[0];
        assert_eq!(var_def.loc, at(1, 9));
        assert_eq!(var_def.of_type.of_type().loc, at(1, 13));
        assert_eq!(var_def.default_value.as_ref().and_then(Value::loc), at(1, 19));

        let selections = &operation.selection_set.selections;
        let field = selections[0].field().unwrap();
        assert_eq!(field.loc, at(2, 3));
        assert_eq!(field.arguments.children[0].loc, at(2, 16));
        assert_eq!(field.arguments.children[0].value.loc(), at(2, 21));
        let object = &field.arguments.children[1].value;
        assert_eq!(object.loc(), at(2, 33));
        if let Value::Object(object) = object {
            assert_eq!(object.children[0].loc, at(2, 35));
            assert_eq!(object.children[0].value.loc(), at(2, 40));
        } else {
            panic!("expected an object value");
        }
        assert_eq!(field.directives.children[0].loc, at(2, 47));
        assert_eq!(selections[1].fragment_spread().unwrap().loc, at(3, 3));
        let inline = selections[2].inline_fragment().unwrap();
        assert_eq!(inline.loc, at(4, 3));
        assert_eq!(inline.type_condition.unwrap().loc, at(4, 10));
        assert_eq!(inline.selection_set.selections[0].field().unwrap().loc, at(5, 5));

        let fragment = document.definitions[1].fragment().unwrap();
        assert_eq!(fragment.loc, at(9, 1));
        assert_eq!(fragment.type_condition.loc, at(9, 20));
    }

    #[test]
    fn shorthand_location() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "\n\n   { a }").unwrap();
        assert_eq!(document.definitions[0].operation().unwrap().loc, at(3, 4));
    }

    #[test]
    fn no_location() {
        let ctx = ASTContext::new();
        let document = Document::parse_with_options(
            &ctx,
            "{ a(b: 1) ...F }",
            ParseOptions::without_location(),
        )
        .unwrap();
        let operation = document.definitions[0].operation().unwrap();
        assert_eq!(operation.loc, None);
        let field = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(field.loc, None);
        assert_eq!(field.arguments.children[0].value.loc(), None);
        assert_eq!(operation.selection_set.selections[1].fragment_spread().unwrap().loc, None);
    }
}
