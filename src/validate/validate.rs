use super::dispatcher::RuleDispatcher;
use super::rules::specified_rules;
use super::{GraphQLError, RuleConstructor, SchemaTypeInfo, TypeInfoProvider, ValidationContext};
use crate::ast::{ASTContext, Document};
use crate::error::{Error, ErrorType, Result};
use crate::schema::Schema;
use crate::visit::VisitNode;
use std::borrow::Borrow;

/// Options for a validation run, created using `ValidationOptions::default()` and its builder
/// methods.
///
/// By default all of [`specified_rules`] are run, the number of reported errors is unlimited,
/// and types are resolved using [`SchemaTypeInfo`].
pub struct ValidationOptions<'a> {
    pub rules: Vec<RuleConstructor>,
    /// Stops validation once this many errors were reported. `None` or `Some(0)` disable the
    /// limit.
    pub max_errors: Option<usize>,
    pub type_info: Option<&'a dyn TypeInfoProvider<'a>>,
    /// Attaches the document path of the reporting node to every diagnostic.
    pub paths: bool,
}

impl<'a> Default for ValidationOptions<'a> {
    fn default() -> Self {
        ValidationOptions {
            rules: specified_rules(),
            max_errors: None,
            type_info: None,
            paths: false,
        }
    }
}

impl<'a> ValidationOptions<'a> {
    /// Replaces the rules that are run, which are run in the given order.
    pub fn with_rules(self, rules: Vec<RuleConstructor>) -> Self {
        ValidationOptions { rules, ..self }
    }

    pub fn with_max_errors(self, max_errors: usize) -> Self {
        ValidationOptions {
            max_errors: Some(max_errors),
            ..self
        }
    }

    /// Attaches the path of the node that a rule was visiting to each diagnostic it reports,
    /// e.g. `0.selectionSet.0.arguments.0.value`.
    pub fn with_paths(self) -> Self {
        ValidationOptions {
            paths: true,
            ..self
        }
    }

    /// Replaces the [`TypeInfoProvider`] used to resolve fields, types, and arguments.
    pub fn with_type_info(self, type_info: &'a dyn TypeInfoProvider<'a>) -> Self {
        ValidationOptions {
            type_info: Some(type_info),
            ..self
        }
    }
}

/// Validates a document against a schema and returns all errors that the rules reported, in the
/// order that they were reported.
///
/// Every rule is instantiated once and all rules are run during a single traversal of the
/// document. An empty list means the document is valid. Only a missing document is an error,
/// which is returned as an [`ErrorType::Usage`] error.
///
/// ```
/// use graphql_validator::{ast::*, schema::*, validate::*};
///
/// let ctx = ASTContext::new();
/// let schema = Schema::parse(&ctx, "type Query { dog: Dog } type Dog { name: String }").unwrap();
/// let document = Document::parse(&ctx, "{ dog { name color } }").unwrap();
///
/// let errors = validate(&ctx, schema, Some(document), ValidationOptions::default()).unwrap();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message, "Cannot query field 'color' on type 'Dog'.");
/// ```
pub fn validate<'a>(
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    document: Option<&'a Document<'a>>,
    options: ValidationOptions<'a>,
) -> Result<Vec<GraphQLError>> {
    let document = match document {
        Some(document) => document,
        None => {
            return Err(Error::new(
                "Must provide document.",
                Some(ErrorType::Usage),
            ))
        }
    };

    let span = tracing::debug_span!(
        "validate",
        rules = options.rules.len(),
        max_errors = ?options.max_errors
    );
    let _enter = span.enter();

    let provider: &'a dyn TypeInfoProvider<'a> = match options.type_info {
        Some(provider) => provider,
        None => ctx.alloc(SchemaTypeInfo::new(ctx)),
    };
    let mut context = ValidationContext::new(ctx, schema, document, provider, options.max_errors)
        .with_paths(options.paths);
    let rules = options
        .rules
        .iter()
        .map(|constructor| constructor(&context))
        .collect();
    let mut dispatcher = RuleDispatcher::new(rules);
    document.visit(&mut context, &mut dispatcher);

    let errors = context.into_errors();
    tracing::debug!(errors = errors.len(), "validation finished");
    Ok(errors)
}

/// Validates a document against a schema using the default [`ValidationOptions`].
#[inline]
pub fn validate_document<'a>(
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
) -> Result<Vec<GraphQLError>> {
    validate(ctx, schema, Some(document), ValidationOptions::default())
}

/// Trait to run validation starting from a GraphQL Document node.
pub trait ValidateNode<'a>
where
    Self: Borrow<Document<'a>>,
{
    /// Validate the document against a schema with the given options.
    ///
    /// `document.validate(&ctx, schema, ValidationOptions::default())`
    #[inline]
    fn validate(
        &'a self,
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        options: ValidationOptions<'a>,
    ) -> Result<Vec<GraphQLError>> {
        validate(ctx, schema, Some(self.borrow()), options)
    }
}

impl<'a> ValidateNode<'a> for Document<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, ParseNode, ParseOptions};
    use crate::schema::SchemaType;
    use crate::validate::harness::test_schema;
    use crate::validate::{RuleHandlers, ValidationRule};
    use crate::visit::{VisitFlow, VisitInfo, Visitor};
    use indoc::indoc;
    use std::cell::Cell;

    #[test]
    fn requires_document() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let error = validate(&ctx, schema, None, ValidationOptions::default()).unwrap_err();
        assert_eq!(error.message(), "Must provide document.");
        assert_eq!(error.error_type(), ErrorType::Usage);
    }

    #[test]
    fn validates_queries() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            indoc! {"
                query ($atOtherHomes: Boolean) {
                  catOrDog {
                    ... on Cat {
                      furColor
                    }
                    ... on Dog {
                      isHouseTrained(atOtherHomes: $atOtherHomes)
                    }
                  }
                }
            "},
        )
        .unwrap();
        let errors = validate_document(&ctx, schema, document).unwrap();
        assert_eq!(errors, vec![]);

        let errors = document
            .validate(&ctx, schema, ValidationOptions::default())
            .unwrap();
        assert_eq!(errors, vec![]);
    }

    #[test]
    fn reports_custom_scalar_errors() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "
            query {
              invalidArg(arg: \"bad value\")
            }
",
        )
        .unwrap();
        let errors = validate_document(&ctx, schema, document).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Expected value of type 'Invalid', found \"bad value\"; \
             Invalid scalar is always invalid: 'bad value'"
        );
        assert_eq!(
            errors[0].locations,
            Some(vec![crate::error::Location {
                line: 3,
                column: 31
            }])
        );
    }

    #[test]
    fn reports_errors_in_stable_order() {
        let source = indoc! {"
            {
              complicatedArgs {
                multipleReqs
                multipleOptAndReq(opt1: 1)
                complexArgField(complexArg: { intField: 1 })
              }
              pet { nickname }
              catOrDog { meows name }
            }
        "};
        let run = || {
            // Every run builds its own schema, so that its maps are hashed differently.
            let ctx = ASTContext::new();
            let schema = test_schema(&ctx);
            let document = Document::parse(&ctx, source).unwrap();
            validate_document(&ctx, schema, document).unwrap()
        };

        let expected = run();
        let messages: Vec<&str> = expected.iter().map(|error| error.message.as_str()).collect();
        assert_eq!(
            &messages[..5],
            &[
                "Field 'multipleReqs' argument 'req1' of type 'Int!' is required, but it was not provided.",
                "Field 'multipleReqs' argument 'req2' of type 'Int!' is required, but it was not provided.",
                "Field 'multipleOptAndReq' argument 'req1' of type 'Int!' is required, but it was not provided.",
                "Field 'multipleOptAndReq' argument 'req2' of type 'Int!' is required, but it was not provided.",
                "Field 'ComplexInput.requiredField' of required type 'Boolean!' was not provided.",
            ]
        );
        assert_eq!(messages.len(), 8);
        for _ in 0..16 {
            assert_eq!(run(), expected);
        }
    }

    #[test]
    fn attaches_paths() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "{ dog { doesKnowCommand(dogCommand: JUMP) color } }").unwrap();

        let errors = validate_document(&ctx, schema, document).unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|error| error.path.is_none()));

        let options = ValidationOptions::default().with_paths();
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        let paths: Vec<Option<String>> = errors
            .iter()
            .map(|error| error.path.as_ref().map(|path| path.to_string()))
            .collect();
        assert_eq!(
            paths,
            vec![
                Some("0.selectionSet.0.selectionSet.0.arguments.0.value".to_string()),
                Some("0.selectionSet.0.selectionSet.1".to_string()),
            ]
        );
        assert_eq!(errors[1].message, "Cannot query field 'color' on type 'Dog'.");
    }

    #[test]
    fn error_limit_has_no_path() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ a b }").unwrap();
        let options = ValidationOptions::default().with_paths().with_max_errors(1);
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].path.as_ref().map(|path| path.to_string()),
            Some("0.selectionSet.0".to_string())
        );
        assert_eq!(errors[1].locations, None);
        assert_eq!(errors[1].path, None);
    }

    /// Resolves type conditions but none of the fields.
    struct NoFields;

    impl<'a> TypeInfoProvider<'a> for NoFields {
        fn type_condition(
            &self,
            schema: &Schema<'a>,
            type_condition: &'a crate::ast::NamedType<'a>,
        ) -> Option<&'a SchemaType<'a>> {
            schema.get_type(type_condition.name)
        }
    }

    #[test]
    fn uses_custom_type_info() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            indoc! {"
                query {
                  catOrDog {
                    ... on Cat {
                      furColor
                    }
                    ... on Dog {
                      isHouseTrained
                    }
                  }
                }
            "},
        )
        .unwrap();
        let options = ValidationOptions::default().with_type_info(&NoFields);
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        let messages = errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Cannot query field 'catOrDog' on type 'QueryRoot'. Did you mean 'catOrDog'?",
                "Cannot query field 'furColor' on type 'Cat'. Did you mean 'furColor'?",
                "Cannot query field 'isHouseTrained' on type 'Dog'. Did you mean 'isHouseTrained'?",
            ]
        );
    }

    #[test]
    fn limits_errors() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse_with_options(
            &ctx,
            "{ firstUnknownField secondUnknownField thirdUnknownField }",
            ParseOptions::without_location(),
        )
        .unwrap();

        let options = ValidationOptions::default().with_max_errors(3);
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        assert_eq!(
            errors,
            vec![
                GraphQLError::new(
                    "Cannot query field 'firstUnknownField' on type 'QueryRoot'.",
                    [None]
                ),
                GraphQLError::new(
                    "Cannot query field 'secondUnknownField' on type 'QueryRoot'.",
                    [None]
                ),
                GraphQLError::new(
                    "Cannot query field 'thirdUnknownField' on type 'QueryRoot'.",
                    [None]
                ),
            ]
        );

        let options = ValidationOptions::default().with_max_errors(2);
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        assert_eq!(
            errors,
            vec![
                GraphQLError::new(
                    "Cannot query field 'firstUnknownField' on type 'QueryRoot'.",
                    [None]
                ),
                GraphQLError::new(
                    "Cannot query field 'secondUnknownField' on type 'QueryRoot'.",
                    [None]
                ),
                GraphQLError::error_limit(),
            ]
        );
    }

    thread_local! {
        static FIELDS_SEEN: Cell<usize> = Cell::new(0);
    }

    struct CountFields;

    impl<'a> ValidationRule<'a> for CountFields {
        fn handlers(&self) -> RuleHandlers {
            RuleHandlers::ENTER_FIELD
        }
    }

    impl<'a> Visitor<'a, ValidationContext<'a>> for CountFields {
        fn enter_field(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            field: &'a Field<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            FIELDS_SEEN.with(|seen| seen.set(seen.get() + 1));
            ctx.report_error(GraphQLError::new(field.name, [field.loc]));
            VisitFlow::Next
        }
    }

    fn count_fields<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
        Box::new(CountFields)
    }

    #[test]
    fn stops_after_error_limit() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ a b c d e }").unwrap();
        let options = ValidationOptions::default()
            .with_rules(vec![count_fields as RuleConstructor])
            .with_max_errors(1);
        let errors = validate(&ctx, schema, Some(document), options).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(FIELDS_SEEN.with(|seen| seen.get()), 2);
    }

    struct PanicOnField;

    impl<'a> ValidationRule<'a> for PanicOnField {}

    impl<'a> Visitor<'a, ValidationContext<'a>> for PanicOnField {
        fn enter_field(
            &mut self,
            _ctx: &mut ValidationContext<'a>,
            _field: &'a Field<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            panic!("Error from custom rule!");
        }
    }

    fn panic_on_field<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
        Box::new(PanicOnField)
    }

    #[test]
    #[should_panic(expected = "Error from custom rule!")]
    fn propagates_rule_panics() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name } }").unwrap();
        let options =
            ValidationOptions::default().with_rules(vec![panic_on_field as RuleConstructor]);
        let _ = validate(&ctx, schema, Some(document), options);
    }
}
