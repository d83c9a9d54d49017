use super::{validate, GraphQLError, RuleConstructor, ValidationOptions};
use crate::ast::*;
use crate::error::Location;
use crate::schema::{ParseSdl, Schema};

const TEST_SCHEMA: &str = r#"
schema {
  query: QueryRoot
  mutation: MutationRoot
}

interface Mammal {
  mother: Mammal
  father: Mammal
}

interface Pet {
  name(surname: Boolean): String
}

interface Canine implements Mammal {
  name(surname: Boolean): String
  mother: Canine
  father: Canine
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

type Dog implements Pet & Mammal & Canine {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHouseTrained(atOtherHomes: Boolean = true): Boolean
  isAtLocation(x: Int, y: Int): Boolean
  mother: Dog
  father: Dog
}

type Cat implements Pet {
  name(surname: Boolean): String
  nickname: String
  meows: Boolean
  meowsVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]!
}

enum FurColor {
  BROWN
  BLACK
  TAN
  SPOTTED
  NO_FUR
  UNKNOWN
}

input ComplexInput {
  requiredField: Boolean!
  nonNullField: Boolean! = false
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringArgField(stringArg: String): String
  booleanArgField(booleanArg: Boolean): String
  enumArgField(enumArg: FurColor): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  stringListArgField(stringListArg: [String]): String
  stringListNonNullArgField(stringListNonNullArg: [String!]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
  nonNullFieldWithDefault(arg: Int! = 0): String
  multipleOpts(opt1: Int = 0, opt2: Int = 0): String
  multipleOptAndReq(req1: Int!, req2: Int!, opt1: Int = 0, opt2: Int = 0): String
}

scalar Invalid

scalar Any

type QueryRoot {
  human(id: ID): Human
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  complicatedArgs: ComplicatedArgs
  invalidArg(arg: Invalid): String
  anyArg(arg: Any): String
}

type MutationRoot {
  setName(name: String!): Human
}

directive @onQuery on QUERY
directive @onMutation on MUTATION
directive @onField on FIELD
directive @onFragmentDefinition on FRAGMENT_DEFINITION
directive @onFragmentSpread on FRAGMENT_SPREAD
directive @onInlineFragment on INLINE_FRAGMENT
directive @onVariableDefinition on VARIABLE_DEFINITION
directive @tag(name: String) repeatable on FIELD
"#;

fn parse_invalid(value: &Value) -> Result<(), String> {
    match value {
        Value::String(string) => Err(format!(
            "Invalid scalar is always invalid: '{}'",
            string.value
        )),
        _ => Err(format!(
            "Invalid scalar is always invalid: {}",
            value.print()
        )),
    }
}

/// Returns the schema that rules are tested against.
pub(crate) fn test_schema(ctx: &ASTContext) -> &Schema<'_> {
    let schema = Schema::parse(ctx, TEST_SCHEMA).unwrap();
    ctx.alloc(schema.with_scalar_parser(ctx, "Invalid", parse_invalid))
}

/// Runs a single rule against the test schema.
pub(crate) fn expect_errors(rule: RuleConstructor, source: &str) -> Vec<GraphQLError> {
    let ctx = ASTContext::new();
    let schema = test_schema(&ctx);
    let document = Document::parse(&ctx, source).unwrap();
    let options = ValidationOptions::default().with_rules(vec![rule]);
    validate(&ctx, schema, Some(document), options).unwrap()
}

pub(crate) fn expect_valid(rule: RuleConstructor, source: &str) {
    assert_eq!(expect_errors(rule, source), vec![]);
}

/// Creates the expected error for a message and `(line, column)` locations.
pub(crate) fn error(message: &str, locations: &[(usize, usize)]) -> GraphQLError {
    GraphQLError::new(
        message,
        locations
            .iter()
            .map(|&(line, column)| Some(Location { line, column })),
    )
}

#[test]
fn parses_test_schema() {
    let ctx = ASTContext::new();
    let schema = test_schema(&ctx);
    assert_eq!(schema.query_type().unwrap().name, "QueryRoot");
    let invalid = schema.get_type("Invalid").unwrap();
    assert!(invalid.is_leaf());
}
