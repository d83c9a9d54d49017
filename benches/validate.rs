#[macro_use]
extern crate bencher;

use bencher::Bencher;
use graphql_validator::ast::*;
use graphql_validator::schema::*;
use graphql_validator::validate::*;

fn graphql_parse_schema(bench: &mut Bencher) {
    bench.iter(|| {
        let ctx = ASTContext::new();
        Schema::parse(&ctx, SCHEMA).ok();
    });
}

fn graphql_parse_query(bench: &mut Bencher) {
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_validate_specified_rules(bench: &mut Bencher) {
    let ctx = ASTContext::new();
    let schema = Schema::parse(&ctx, SCHEMA).unwrap();
    let document = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| {
        let errors = validate_document(&ctx, schema, document).unwrap();
        assert!(errors.is_empty());
    });
}

fn graphql_validate_default_rules(bench: &mut Bencher) {
    let ctx = ASTContext::new();
    let schema = Schema::parse(&ctx, SCHEMA).unwrap();
    let document = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| {
        let options = ValidationOptions::default().with_rules(DefaultRules::constructors());
        validate(&ctx, schema, Some(document), options).unwrap()
    });
}

fn graphql_validate_invalid_max_errors(bench: &mut Bencher) {
    let ctx = ASTContext::new();
    let schema = Schema::parse(&ctx, SCHEMA).unwrap();
    let document = Document::parse(&ctx, INVALID_QUERY).unwrap();
    bench.iter(|| {
        let options = ValidationOptions::default().with_max_errors(5);
        validate(&ctx, schema, Some(document), options).unwrap()
    });
}

benchmark_group!(
    validation,
    graphql_parse_schema,
    graphql_parse_query,
    graphql_validate_specified_rules,
    graphql_validate_default_rules,
    graphql_validate_invalid_max_errors
);

benchmark_main!(validation);

static SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

interface Node {
  id: ID!
}

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand { SIT HEEL DOWN }

enum FurColor { BROWN BLACK TAN SPOTTED }

type Dog implements Node & Pet {
  id: ID!
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHouseTrained(atOtherHomes: Boolean = true): Boolean
  owner: Human
}

type Cat implements Node & Pet {
  id: ID!
  name(surname: Boolean): String
  meows: Boolean
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human implements Node {
  id: ID!
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
}

input PetFilter {
  name: String
  furColors: [FurColor!]
  limit: Int = 10
  owner: ID
}

type Query {
  node(id: ID!): Node
  pets(filter: PetFilter): [Pet]
  catOrDog(id: ID): CatOrDog
  human(id: ID): Human
}

type Mutation {
  adoptPet(id: ID!, name: String): Pet
}
"#;

static QUERY: &str = r#"
query Pets($filter: PetFilter, $surname: Boolean = false, $withOwner: Boolean!) {
  pets(filter: $filter) {
    ...PetName
    ... on Dog {
      id
      barkVolume
      doesKnowCommand(dogCommand: SIT)
      isHouseTrained
      owner @include(if: $withOwner) {
        ...HumanFields
      }
    }
    ... on Cat {
      furColor
      meows
    }
  }
  catOrDog(id: "1") {
    __typename
    ... on Node { id }
    ...PetName
  }
  filtered: pets(filter: { name: "Rex", furColors: [BROWN, TAN], limit: 3 }) {
    name(surname: $surname)
  }
}

query Human($id: ID) {
  human(id: $id) {
    ...HumanFields
    relatives {
      ...HumanFields
      pets { name }
    }
  }
}

mutation Adopt($id: ID!) {
  adoptPet(id: $id, name: "Fido") {
    ...PetName
  }
}

fragment PetName on Pet {
  name
}

fragment HumanFields on Human {
  id
  name @skip(if: false)
  pets {
    ...PetName
  }
}
"#;

static INVALID_QUERY: &str = r#"
query Pets($filter: PetFilter, $unused: Int) {
  pets(filter: $filter, limit: 10) {
    ...PetName
    ... on Dog {
      barkVolume(loud: true)
      doesKnowCommand(dogCommand: JUMP)
      owner
    }
  }
  catOrDog(id: true) {
    name
  }
  node { id @unknown }
}

query Pets {
  human(id: $id) { relatives }
}

fragment PetName on Pet {
  name
  ...PetName
}

fragment Unused on Boolean {
  name
}
"#;
