//! The standard validation rules for GraphQL query documents.
//!
//! Each rule checks one of the validation sections of the GraphQL specification and reports
//! every violation it finds. [`specified_rules`] returns all of them in the order in which they're
//! run by default.

use super::RuleConstructor;

/// Creates a [`RuleConstructor`] for a rule that implements [`DefaultIn`].
macro_rules! constructor {
    ($rule:ident) => {{
        fn construct<'a>(
            ctx: &$crate::validate::ValidationContext<'a>,
        ) -> Box<dyn $crate::validate::ValidationRule<'a> + 'a> {
            Box::new(<$rule as $crate::ast::DefaultIn>::default_in(ctx.arena))
        }
        construct as $crate::validate::RuleConstructor
    }};
}

mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod provided_required_arguments;
mod scalar_leafs;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod values_of_correct_type;
mod variables_are_input_types;

pub use fields_on_correct_type::*;
pub use fragments_on_composite_types::*;
pub use known_argument_names::*;
pub use known_directives::*;
pub use known_fragment_names::*;
pub use known_type_names::*;
pub use lone_anonymous_operation::*;
pub use no_fragment_cycles::*;
pub use no_undefined_variables::*;
pub use no_unused_fragments::*;
pub use no_unused_variables::*;
pub use provided_required_arguments::*;
pub use scalar_leafs::*;
pub use unique_argument_names::*;
pub use unique_directives_per_location::*;
pub use unique_fragment_names::*;
pub use unique_input_field_names::*;
pub use unique_operation_names::*;
pub use unique_variable_names::*;
pub use values_of_correct_type::*;
pub use variables_are_input_types::*;

/// Returns constructors for all standard validation rules, in the order in which they're run.
pub fn specified_rules() -> Vec<RuleConstructor> {
    vec![
        constructor!(UniqueOperationNames),
        constructor!(LoneAnonymousOperation),
        constructor!(KnownTypeNames),
        constructor!(FragmentsOnCompositeTypes),
        constructor!(VariablesAreInputTypes),
        constructor!(ScalarLeafs),
        constructor!(FieldsOnCorrectType),
        constructor!(UniqueFragmentNames),
        constructor!(KnownFragmentNames),
        constructor!(NoUnusedFragments),
        constructor!(NoFragmentCycles),
        constructor!(UniqueVariableNames),
        constructor!(NoUndefinedVariables),
        constructor!(NoUnusedVariables),
        constructor!(KnownDirectives),
        constructor!(UniqueDirectivesPerLocation),
        constructor!(KnownArgumentNames),
        constructor!(UniqueArgumentNames),
        constructor!(ValuesOfCorrectType),
        constructor!(ProvidedRequiredArguments),
        constructor!(UniqueInputFieldNames),
    ]
}

/// The standard rules that only look at the document itself and never at schema types.
///
/// These may be run against any schema, including an empty one, to check a document for
/// problems that no schema could resolve.
///
/// ```
/// use graphql_validator::{ast::*, schema::*, validate::*};
///
/// let ctx = ASTContext::new();
/// let schema = Schema::default_in(&ctx.arena);
/// let document = Document::parse(&ctx, "{ ...A } fragment B on Query { a }").unwrap();
///
/// let options = ValidationOptions::default().with_rules(DefaultRules::constructors());
/// let errors = validate(&ctx, &schema, Some(document), options).unwrap();
/// assert_eq!(errors[0].message, "Unknown fragment 'A'.");
/// assert_eq!(errors[1].message, "Fragment 'B' is never used.");
/// ```
pub struct DefaultRules;

impl DefaultRules {
    pub fn constructors() -> Vec<RuleConstructor> {
        vec![
            constructor!(UniqueOperationNames),
            constructor!(LoneAnonymousOperation),
            constructor!(UniqueFragmentNames),
            constructor!(KnownFragmentNames),
            constructor!(NoUnusedFragments),
            constructor!(NoFragmentCycles),
            constructor!(UniqueVariableNames),
            constructor!(NoUndefinedVariables),
            constructor!(NoUnusedVariables),
            constructor!(UniqueArgumentNames),
            constructor!(UniqueInputFieldNames),
        ]
    }
}
