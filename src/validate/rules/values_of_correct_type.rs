use bumpalo::{collections::Vec, Bump};

use super::super::suggestions::{did_you_mean, suggestion_list};
use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::schema::{SchemaEnum, SchemaType, BUILTIN_SCALARS};
use crate::{ast::*, error::Location, visit::*};

/// Validates that all literal values are valid for the input types they're passed to.
///
/// Scalars are checked with their schema's literal coercion, enum values must be defined by their
/// enum, and input objects must only contain known fields and every required field. Variables
/// are left to be checked at execution time.
///
/// A list or object literal that's passed where no list or input object is expected is reported
/// once as a whole, and its contents aren't checked any further.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type)
pub struct ValuesOfCorrectType<'a> {
    ignored_value: Option<&'a Value<'a>>,
    /// Locations of the enclosing arguments, object fields, and variable definitions, which are
    /// reported for `null` literals.
    locations: Vec<'a, Option<Location>>,
}

impl<'a> DefaultIn<'a> for ValuesOfCorrectType<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            ignored_value: None,
            locations: Vec::new_in(arena),
        }
    }
}

fn enum_value_suggestion(enum_type: &SchemaEnum, input: &str) -> String {
    let values = enum_type.sorted_values();
    let suggestions = suggestion_list(input, values.iter().copied());
    did_you_mean(Some("the enum value"), &suggestions)
}

fn parse_enum_literal(enum_type: &SchemaEnum, value: &Value) -> Result<(), String> {
    match value {
        Value::Enum(enum_value) if enum_type.values.contains(enum_value.value) => Ok(()),
        Value::Enum(enum_value) => Err(format!(
            "Value '{}' does not exist in '{}' enum.{}",
            enum_value.value,
            enum_type.name,
            enum_value_suggestion(enum_type, enum_value.value)
        )),
        _ => {
            let printed = value.print();
            Err(format!(
                "Enum '{}' cannot represent non-enum value: {}.{}",
                enum_type.name,
                printed,
                enum_value_suggestion(enum_type, &printed)
            ))
        }
    }
}

/// Checks a value against the leaf type that's expected at the current position.
fn check_leaf_value<'a>(ctx: &mut ValidationContext<'a>, value: &'a Value<'a>) {
    let location_type = match ctx.type_info().input_type() {
        Some(location_type) => location_type,
        None => return,
    };
    let named_type = match location_type.of_type(ctx.schema()) {
        Some(named_type) => named_type,
        None => return,
    };
    let message = match named_type {
        SchemaType::Scalar(scalar) => match scalar.parse_literal(value) {
            Ok(()) => return,
            Err(message) if BUILTIN_SCALARS.contains(&scalar.name) => message,
            Err(message) => format!(
                "Expected value of type '{}', found {}; {}",
                location_type,
                value.print(),
                message
            ),
        },
        SchemaType::Enum(enum_type) => match parse_enum_literal(enum_type, value) {
            Ok(()) => return,
            Err(message) => message,
        },
        _ => format!(
            "Expected value of type '{}', found {}.",
            location_type,
            value.print()
        ),
    };
    ctx.report_error(GraphQLError::new(message, [value.loc()]));
}

impl<'a> ValuesOfCorrectType<'a> {
    fn check_list(&mut self, ctx: &mut ValidationContext<'a>, value: &'a Value<'a>) {
        let is_list = ctx
            .type_info()
            .parent_input_type()
            .map_or(false, |parent_type| parent_type.list_item().is_some());
        if !is_list {
            check_leaf_value(ctx, value);
            self.ignored_value = Some(value);
        }
    }

    fn check_object(&mut self, ctx: &mut ValidationContext<'a>, value: &'a Value<'a>) {
        let input_object = ctx
            .type_info()
            .input_type()
            .and_then(|input_type| input_type.of_type(ctx.schema()))
            .and_then(|schema_type| schema_type.input_object());
        let (input_object, object) = match (input_object, value) {
            (Some(input_object), Value::Object(object)) => (input_object, object),
            _ => {
                check_leaf_value(ctx, value);
                self.ignored_value = Some(value);
                return;
            }
        };

        let mut missing_fields = input_object
            .fields
            .values()
            .filter(|field| field.is_required())
            .filter(|field| !object.children.iter().any(|child| child.name == field.name))
            .collect::<std::vec::Vec<_>>();
        missing_fields.sort_by_key(|field| field.name);
        for field in missing_fields {
            ctx.report_error(GraphQLError::new(
                format!(
                    "Field '{}.{}' of required type '{}' was not provided.",
                    input_object.name, field.name, field.input_type
                ),
                [value.loc()],
            ));
        }
    }

    fn check_null(&self, ctx: &mut ValidationContext<'a>) {
        if let Some(input_type) = ctx.type_info().input_type() {
            if input_type.is_non_null() {
                let loc = self.locations.last().copied().flatten();
                ctx.report_error(GraphQLError::new(
                    format!("Expected value of type '{}', found null.", input_type),
                    [loc],
                ));
            }
        }
    }
}

impl<'a> ValidationRule<'a> for ValuesOfCorrectType<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_VARIABLE_DEFINITION
            | RuleHandlers::LEAVE_VARIABLE_DEFINITION
            | RuleHandlers::ENTER_ARGUMENT
            | RuleHandlers::LEAVE_ARGUMENT
            | RuleHandlers::ENTER_OBJECT_FIELD
            | RuleHandlers::LEAVE_OBJECT_FIELD
            | RuleHandlers::ENTER_VALUE
            | RuleHandlers::LEAVE_VALUE
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for ValuesOfCorrectType<'a> {
    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.push(var_def.loc);
        VisitFlow::Next
    }

    fn leave_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.pop();
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.push(argument.loc);
        VisitFlow::Next
    }

    fn leave_argument(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.pop();
        VisitFlow::Next
    }

    fn enter_object_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        object_field: &'a ObjectField<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.push(object_field.loc);
        if self.ignored_value.is_some() || ctx.type_info().input_type().is_some() {
            return VisitFlow::Next;
        }
        let parent_object = ctx
            .type_info()
            .parent_input_type()
            .and_then(|parent_type| parent_type.of_type(ctx.schema()))
            .and_then(|schema_type| schema_type.input_object());
        if let Some(parent_object) = parent_object {
            let suggestions =
                suggestion_list(object_field.name, parent_object.fields.keys().copied());
            ctx.report_error(GraphQLError::new(
                format!(
                    "Field '{}' is not defined by type '{}'.{}",
                    object_field.name,
                    parent_object.name,
                    did_you_mean(None, &suggestions)
                ),
                [object_field.loc],
            ));
        }
        VisitFlow::Next
    }

    fn leave_object_field(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _object_field: &'a ObjectField<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.locations.pop();
        VisitFlow::Next
    }

    fn enter_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a Value<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if self.ignored_value.is_some() {
            return VisitFlow::Next;
        }
        match value {
            Value::Variable(_) => {}
            Value::Null => self.check_null(ctx),
            Value::List(_) => self.check_list(ctx, value),
            Value::Object(_) => self.check_object(ctx, value),
            _ => check_leaf_value(ctx, value),
        }
        VisitFlow::Next
    }

    fn leave_value(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        value: &'a Value<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(ignored_value) = self.ignored_value {
            if std::ptr::eq(ignored_value, value) {
                self.ignored_value = None;
            }
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::harness::*;
    use indoc::indoc;

    #[test]
    fn valid_values() {
        expect_valid(
            constructor!(ValuesOfCorrectType),
            indoc! {"
                query ($var: Int = 1, $list: [String] = [\"a\", null], $obj: ComplexInput = { requiredField: false }) {
                  complicatedArgs {
                    intArgField(intArg: 2)
                    floatArgField(floatArg: 1)
                    idArgField(idArg: \"someIdString\")
                    idArgField2: idArgField(idArg: 1)
                    stringListArgField(stringListArg: [\"one\", null, \"two\"])
                    stringListArgField2: stringListArgField(stringListArg: \"one\")
                    enumArgField(enumArg: NO_FUR)
                    complexArgField(complexArg: { requiredField: true, stringListField: [\"one\"] })
                    nonNullFieldWithDefault(arg: 2)
                    intArgField3: intArgField(intArg: $var)
                    intArgField4: intArgField(intArg: null)
                  }
                  dog { isHouseTrained(atOtherHomes: true) doesKnowCommand(dogCommand: SIT) }
                  anyArg(arg: { anything: [1, \"a\"] })
                  unknownField(arg: [1, { a: 2 }])
                }
            "},
        );
    }

    #[test]
    fn invalid_scalar_values() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                indoc! {"
                    {
                      complicatedArgs {
                        intArgField(intArg: \"3\")
                        stringArgField(stringArg: 1)
                        booleanArgField(booleanArg: 2)
                        floatArgField(floatArg: true)
                        idArgField(idArg: 1.0)
                        big: intArgField(intArg: 2147483648)
                      }
                    }
                "}
            ),
            vec![
                error("Int cannot represent non-integer value: \"3\"", &[(3, 25)]),
                error("String cannot represent a non string value: 1", &[(4, 31)]),
                error("Boolean cannot represent a non boolean value: 2", &[(5, 33)]),
                error("Float cannot represent non numeric value: true", &[(6, 29)]),
                error(
                    "ID cannot represent a non-string and non-integer value: 1.0",
                    &[(7, 23)]
                ),
                error(
                    "Int cannot represent non 32-bit signed integer value: 2147483648",
                    &[(8, 30)]
                ),
            ]
        );
    }

    #[test]
    fn invalid_enum_values() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                indoc! {"
                    {
                      dog {
                        a: doesKnowCommand(dogCommand: \"SIT\")
                        b: doesKnowCommand(dogCommand: sit)
                        c: doesKnowCommand(dogCommand: JUGGLE)
                        d: doesKnowCommand(dogCommand: 2)
                      }
                    }
                "}
            ),
            vec![
                error(
                    "Enum 'DogCommand' cannot represent non-enum value: \"SIT\". \
                     Did you mean the enum value 'SIT'?",
                    &[(3, 36)]
                ),
                error(
                    "Value 'sit' does not exist in 'DogCommand' enum. \
                     Did you mean the enum value 'SIT'?",
                    &[(4, 36)]
                ),
                error(
                    "Value 'JUGGLE' does not exist in 'DogCommand' enum.",
                    &[(5, 36)]
                ),
                error(
                    "Enum 'DogCommand' cannot represent non-enum value: 2.",
                    &[(6, 36)]
                ),
            ]
        );
    }

    #[test]
    fn invalid_lists_and_objects() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                indoc! {"
                    {
                      complicatedArgs {
                        stringListArgField(stringListArg: [\"one\", 2])
                        complexArgField(complexArg: { intField: 4 })
                        c2: complexArgField(complexArg: { requiredField: true, unknownField: \"value\", intFeild: 1 })
                        c3: complexArgField(complexArg: \"complex\")
                        intArgField(intArg: [1])
                        stringArgField(stringArg: { a: 1 })
                      }
                    }
                "}
            ),
            vec![
                error("String cannot represent a non string value: 2", &[(3, 47)]),
                error(
                    "Field 'ComplexInput.requiredField' of required type 'Boolean!' was not provided.",
                    &[(4, 33)]
                ),
                error(
                    "Field 'unknownField' is not defined by type 'ComplexInput'.",
                    &[(5, 60)]
                ),
                error(
                    "Field 'intFeild' is not defined by type 'ComplexInput'. Did you mean 'intField'?",
                    &[(5, 83)]
                ),
                error(
                    "Expected value of type 'ComplexInput', found \"complex\".",
                    &[(6, 37)]
                ),
                error("Int cannot represent non-integer value: [1]", &[(7, 25)]),
                error(
                    "String cannot represent a non string value: {a: 1}",
                    &[(8, 31)]
                ),
            ]
        );
    }

    #[test]
    fn null_values() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                indoc! {"
                    {
                      complicatedArgs {
                        nonNullIntArgField(nonNullIntArg: null)
                        stringListNonNullArgField(stringListNonNullArg: [\"a\", null])
                        complexArgField(complexArg: { requiredField: null })
                      }
                    }
                "}
            ),
            vec![
                error("Expected value of type 'Int!', found null.", &[(3, 24)]),
                error("Expected value of type 'String!', found null.", &[(4, 31)]),
                error("Expected value of type 'Boolean!', found null.", &[(5, 35)]),
            ]
        );
    }

    #[test]
    fn custom_scalars() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                "{ invalidArg(arg: 123) anyArg(arg: { anything: [1, \"a\"] }) }",
            ),
            vec![error(
                "Expected value of type 'Invalid', found 123; Invalid scalar is always invalid: 123",
                &[(1, 19)]
            )]
        );
    }

    #[test]
    fn variable_default_values() {
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                "query ($a: Int = \"one\", $b: ComplexInput = { intField: 1 }) { complicatedArgs { intArgField(intArg: $a) } }",
            ),
            vec![
                error("Int cannot represent non-integer value: \"one\"", &[(1, 18)]),
                error(
                    "Field 'ComplexInput.requiredField' of required type 'Boolean!' was not provided.",
                    &[(1, 44)]
                ),
            ]
        );
        assert_eq!(
            expect_errors(
                constructor!(ValuesOfCorrectType),
                "query ($c: Int! = null, $d: Int = null) { dog { name } }",
            ),
            vec![error("Expected value of type 'Int!', found null.", &[(1, 8)])]
        );
    }
}
