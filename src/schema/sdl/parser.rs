use super::error::{syntax_err, validation, SchemaError};
use super::finalizers::build_schema;
use super::parse_ast::*;
use crate::ast::lexer::Token;
use crate::ast::parser::private::ParseNode as ParseQueryNode;
use crate::ast::{ASTContext, Directives, Type, Value};
use crate::error::Result;
use crate::schema::builtins::BUILTIN_DIRECTIVES;
use crate::schema::{
    DirectiveLocation, Schema, SchemaDirective, SchemaEnum, SchemaField, SchemaFields,
    SchemaInputField, SchemaInputObject, SchemaInterface, SchemaInterfaces, SchemaObject,
    SchemaPossibleTypes, SchemaScalar, SchemaUnion, TypeRef,
};
use bumpalo::collections::Vec;
use logos::Span;

pub(super) type ParseResult<T> = std::result::Result<T, SchemaError>;

use private::ParseFromCtx as _;

pub(crate) mod private {
    use super::*;
    use crate::ast::parser::private::ParserContext as QueryParserContext;
    use crate::ast::ParseOptions;

    /// Private Parser context state for the schema definition language.
    ///
    /// It wraps the query language's parser context, so that values, types, and applied
    /// directives are parsed exactly like they are in query documents.
    pub struct ParserContext<'a> {
        pub(crate) ast_ctx: &'a ASTContext,
        pub(crate) inner: QueryParserContext<'a>,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            ParserContext {
                ast_ctx: ctx,
                inner: QueryParserContext::new(ctx, source, ParseOptions::without_location()),
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            self.inner.next()
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            self.inner.peek()
        }

        #[inline]
        pub(crate) fn source(&self) -> &str {
            self.inner.source()
        }

        #[inline]
        pub(crate) fn span(&self) -> Span {
            self.inner.span()
        }

        /// Parses a query language node, e.g. a type reference or a constant value.
        pub(crate) fn query_node<T: ParseQueryNode<'a>>(&mut self) -> ParseResult<T> {
            T::new_with_ctx(&mut self.inner).map_err(SchemaError::from)
        }

        /// Descriptions carry no meaning for validation and are skipped.
        #[inline]
        pub(crate) fn skip_description(&mut self) {
            if let Token::String(_) = self.peek() {
                self.next();
            }
        }

        /// Applied directives carry no meaning for validation and are skipped.
        #[inline]
        pub(crate) fn skip_directives(&mut self) -> ParseResult<()> {
            self.query_node::<Directives>().map(|_| ())
        }

        pub(crate) fn name(&mut self, kind: &str) -> ParseResult<&'a str> {
            match self.next() {
                Token::Name(name) => Ok(name),
                t => syntax_err!("Expected {} name, got {:?}", kind, t),
            }
        }

        pub(crate) fn expect(&mut self, token: Token<'a>) -> ParseResult<()> {
            let next = self.next();
            if next == token {
                Ok(())
            } else {
                syntax_err!("Expected {:?}, got {:?}", token, next)
            }
        }

        pub(crate) fn type_ref(&mut self) -> ParseResult<&'a TypeRef<'a>> {
            let of_type = self.query_node::<Type>()?;
            Ok(TypeRef::from_ast(self.ast_ctx, &of_type))
        }

        pub(crate) fn get_implements_interfaces(&mut self) -> ParseResult<Vec<'a, &'a str>> {
            let mut interfaces = Vec::new_in(&self.ast_ctx.arena);
            if self.peek() == &Token::Name("implements") {
                self.next();
                // Skip optional leading `&`
                if self.peek() == &Token::Ampersand {
                    self.next();
                }
                interfaces.push(self.name("interface")?);
                while self.peek() == &Token::Ampersand {
                    self.next();
                    interfaces.push(self.name("interface")?);
                }
            }
            Ok(interfaces)
        }
    }

    /// (Private) Trait for parsing schema definitions from a Parser Context.
    /// The [`super::ParseSdl`] trait implements the public `parse` method instead.
    pub trait ParseFromCtx<'a>: Sized {
        fn parse_from_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for loading a [Schema] from a source text in the GraphQL schema definition language.
///
/// The loader reads object, interface, union, enum, scalar, and input object definitions as well
/// as directive definitions and a `schema` definition. Descriptions and applied directives are
/// read but discarded. The built-in scalars and directives are added unless they're redefined.
///
/// ```
/// use graphql_validator::{ast::ASTContext, schema::*};
///
/// let ctx = ASTContext::new();
/// let schema = Schema::parse(&ctx, "type Query { hello: String }").unwrap();
/// assert_eq!(schema.query_type().unwrap().name, "Query");
/// assert!(schema.get_directive("skip").is_some());
/// ```
pub trait ParseSdl<'a>: private::ParseFromCtx<'a> {
    /// Parse an input source text into the implementor's structure and allocate the result into
    /// the context arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = private::ParserContext::new(ctx, source);
        Self::parse_from_ctx(&mut parser_ctx)
            .map(|value| ctx.alloc(value))
            .map_err(|error| error.into_error(parser_ctx.source(), parser_ctx.span()))
    }
}

impl<'a> ParseSdl<'a> for Schema<'a> {}

impl<'a> private::ParseFromCtx<'a> for Schema<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        let document = SchemaDocument::parse_from_ctx(ctx)?;
        let builtins = {
            let mut builtins_ctx = private::ParserContext::new(ctx.ast_ctx, BUILTIN_DIRECTIVES);
            SchemaDocument::parse_from_ctx(&mut builtins_ctx)?
        };
        build_schema(ctx.ast_ctx, document, builtins.directives)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaDocument<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        let mut document = SchemaDocument {
            schema_definition: None,
            types: std::vec::Vec::new(),
            directives: std::vec::Vec::new(),
        };
        loop {
            ctx.skip_description();
            match ctx.peek() {
                Token::End => break,
                Token::Name("schema") => {
                    if document.schema_definition.is_some() {
                        return syntax_err!("Must not specify more than one Schema Definition.");
                    }
                    document.schema_definition = Some(SchemaDefinition::parse_from_ctx(ctx)?);
                }
                Token::Name("directive") => {
                    let directive = SchemaDirective::parse_from_ctx(ctx)?;
                    if document.directives.iter().any(|x| x.name == directive.name) {
                        return Err(validation!(
                            "There can be only one directive named `@{}`.",
                            directive.name
                        ));
                    }
                    document.directives.push(directive);
                }
                Token::Name("extend") => {
                    return syntax_err!("Type system extensions are not supported.");
                }
                _ => {
                    let type_def = TypeDefinition::parse_from_ctx(ctx)?;
                    if document.types.iter().any(|x| x.name() == type_def.name()) {
                        return Err(validation!(
                            "There can be only one type named `{}`.",
                            type_def.name()
                        ));
                    }
                    document.types.push(type_def);
                }
            }
        }
        Ok(document)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaDefinition<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("schema") {
            return syntax_err!("Schema definition must start with the `schema` keyword.");
        }
        ctx.skip_directives()?;
        ctx.expect(Token::BraceOpen)?;

        let mut definition = SchemaDefinition::default();
        while !matches!(ctx.peek(), Token::BraceClose | Token::End) {
            let operation_type = match ctx.next() {
                Token::Name(op @ ("query" | "mutation" | "subscription")) => op,
                t => return syntax_err!("Expected operation type, got {:?}", t),
            };
            ctx.expect(Token::Colon)?;
            let type_name = ctx.name("type")?;
            let slot = match operation_type {
                "query" => &mut definition.query_root_type_name,
                "mutation" => &mut definition.mutation_root_type_name,
                _ => &mut definition.subscription_root_type_name,
            };
            if slot.is_some() {
                return Err(validation!(
                    "There can be only one {} type in schema.",
                    operation_type
                ));
            }
            *slot = Some(type_name);
        }
        ctx.expect(Token::BraceClose)?;
        Ok(definition)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaDirective<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("directive") {
            return syntax_err!("Directive definition must start with the `directive` keyword.");
        }
        let name = match ctx.next() {
            Token::DirectiveName(name) => name,
            t => return syntax_err!("Expected directive name, got {:?}", t),
        };

        let mut directive = SchemaDirective::new(ctx.ast_ctx, name);
        for argument in parse_arguments_definition(ctx)? {
            directive.add_argument(ctx.ast_ctx, argument);
        }

        if ctx.peek() == &Token::Name("repeatable") {
            ctx.next();
            directive.is_repeatable = true;
        }

        if ctx.next() != Token::Name("on") {
            return syntax_err!("Expected `on` in definition of directive `@{}`", name);
        }
        // Skip optional leading `|`
        if ctx.peek() == &Token::Pipe {
            ctx.next();
        }
        loop {
            let location = match ctx.next() {
                Token::Name(location) => DirectiveLocation::from_name(location),
                _ => None,
            };
            match location {
                Some(location) => directive.locations.push(location),
                None => return syntax_err!("Expected a directive location for `@{}`", name),
            }
            if ctx.peek() == &Token::Pipe {
                ctx.next();
            } else {
                break;
            }
        }

        Ok(directive)
    }
}

impl<'a> private::ParseFromCtx<'a> for TypeDefinition<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        match ctx.peek() {
            Token::Name("type") => SchemaObject::parse_from_ctx(ctx).map(TypeDefinition::Object),
            Token::Name("interface") => {
                SchemaInterface::parse_from_ctx(ctx).map(TypeDefinition::Interface)
            }
            Token::Name("union") => SchemaUnion::parse_from_ctx(ctx).map(TypeDefinition::Union),
            Token::Name("enum") => SchemaEnum::parse_from_ctx(ctx).map(TypeDefinition::Enum),
            Token::Name("scalar") => SchemaScalar::parse_from_ctx(ctx).map(TypeDefinition::Scalar),
            Token::Name("input") => {
                SchemaInputObject::parse_from_ctx(ctx).map(TypeDefinition::InputObject)
            }
            t => syntax_err!("Expected a type system definition, got {:?}.", t),
        }
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaObject<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("type") {
            return syntax_err!("Object type must start with the `type` keyword.");
        }
        let mut object = SchemaObject::new(ctx.ast_ctx, ctx.name("type")?);
        object.interfaces = ctx.get_implements_interfaces()?;
        ctx.skip_directives()?;
        for field in parse_fields_definition(ctx)? {
            object.add_field(ctx.ast_ctx, field);
        }
        Ok(object)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaInterface<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("interface") {
            return syntax_err!("Interface type must start with the `interface` keyword.");
        }
        let mut interface = SchemaInterface::new(ctx.ast_ctx, ctx.name("type")?);
        for implemented in ctx.get_implements_interfaces()? {
            interface.add_interface(ctx.ast_ctx, implemented);
        }
        ctx.skip_directives()?;
        for field in parse_fields_definition(ctx)? {
            interface.add_field(ctx.ast_ctx, field);
        }
        Ok(interface)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaUnion<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("union") {
            return syntax_err!("Union type must start with the `union` keyword.");
        }
        let mut union_type = SchemaUnion::new(ctx.ast_ctx, ctx.name("type")?);
        ctx.skip_directives()?;
        if ctx.peek() == &Token::Equal {
            ctx.next();
            // Skip optional leading `|`
            if ctx.peek() == &Token::Pipe {
                ctx.next();
            }
            union_type.add_possible_type(ctx.ast_ctx, ctx.name("member type")?);
            while ctx.peek() == &Token::Pipe {
                ctx.next();
                union_type.add_possible_type(ctx.ast_ctx, ctx.name("member type")?);
            }
        }
        Ok(union_type)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaEnum<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("enum") {
            return syntax_err!("Enum definition must start with the `enum` keyword.");
        }
        let mut enum_type = SchemaEnum::new(ctx.ast_ctx, ctx.name("type")?);
        ctx.skip_directives()?;
        if ctx.peek() == &Token::BraceOpen {
            ctx.next();
            loop {
                ctx.skip_description();
                match ctx.next() {
                    Token::BraceClose => break,
                    Token::Name("true" | "false" | "null") => {
                        return syntax_err!("Enum `{}` may not use a reserved value name.", enum_type.name)
                    }
                    Token::Name(value) => {
                        enum_type.add_value(ctx.ast_ctx, value);
                        ctx.skip_directives()?;
                    }
                    t => {
                        return syntax_err!(
                            "Expected either closing brace or value name, got {:?}",
                            t
                        )
                    }
                }
            }
        }
        Ok(enum_type)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaScalar<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("scalar") {
            return syntax_err!("Scalar definition must start with the `scalar` keyword.");
        }
        let scalar = SchemaScalar::new(ctx.name("type")?);
        ctx.skip_directives()?;
        Ok(scalar)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaInputObject<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        if ctx.next() != Token::Name("input") {
            return syntax_err!("Input object type must start with the `input` keyword.");
        }
        let mut input_object = SchemaInputObject::new(ctx.ast_ctx, ctx.name("type")?);
        ctx.skip_directives()?;
        if ctx.peek() == &Token::BraceOpen {
            ctx.next();
            while !matches!(ctx.peek(), Token::BraceClose | Token::End) {
                let field = SchemaInputField::parse_from_ctx(ctx)?;
                input_object.add_field(ctx.ast_ctx, field);
            }
            ctx.expect(Token::BraceClose)?;
        }
        Ok(input_object)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaField<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        ctx.skip_description();
        let name = ctx.name("field")?;
        let arguments = parse_arguments_definition(ctx)?;
        ctx.expect(Token::Colon)?;
        let mut field = SchemaField::new(ctx.ast_ctx, name, ctx.type_ref()?);
        for argument in arguments {
            field.add_argument(ctx.ast_ctx, argument);
        }
        ctx.skip_directives()?;
        Ok(field)
    }
}

impl<'a> private::ParseFromCtx<'a> for SchemaInputField<'a> {
    fn parse_from_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
        ctx.skip_description();
        let name = ctx.name("input value")?;
        ctx.expect(Token::Colon)?;
        let mut input_field = SchemaInputField::new(name, ctx.type_ref()?);
        if ctx.peek() == &Token::Equal {
            ctx.next();
            ctx.inner.in_var_def = true;
            let value = ctx.query_node::<Value>();
            ctx.inner.in_var_def = false;
            input_field.default_value = Some(ctx.ast_ctx.alloc(value?));
        }
        ctx.skip_directives()?;
        Ok(input_field)
    }
}

/// Parses the optional braced list of field definitions of an object or interface type.
fn parse_fields_definition<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<std::vec::Vec<SchemaField<'a>>> {
    let mut fields = std::vec::Vec::new();
    if ctx.peek() == &Token::BraceOpen {
        ctx.next();
        while !matches!(ctx.peek(), Token::BraceClose | Token::End) {
            fields.push(SchemaField::parse_from_ctx(ctx)?);
        }
        ctx.expect(Token::BraceClose)?;
    }
    Ok(fields)
}

/// Parses the optional parenthesized list of argument definitions of a field or directive.
fn parse_arguments_definition<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<std::vec::Vec<SchemaInputField<'a>>> {
    let mut arguments = std::vec::Vec::new();
    if ctx.peek() == &Token::ParenOpen {
        ctx.next();
        while !matches!(ctx.peek(), Token::ParenClose | Token::End) {
            arguments.push(SchemaInputField::parse_from_ctx(ctx)?);
        }
        ctx.expect(Token::ParenClose)?;
    }
    Ok(arguments)
}
