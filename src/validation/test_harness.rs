//! A fixed schema and a handful of assertion helpers shared by every rule's
//! unit tests: the familiar `Being`/`Pet`/`Dog`/`Human`/... fixture used by
//! the reference validation test suite, built here as plain [`SchemaType`]
//! data through [`SchemaBuilder`] instead of macro-generated trait impls.

use crate::ast;
use crate::parser;
use crate::schema::builder::SchemaBuilder;
use crate::schema::meta::{Argument, EnumMeta, EnumValue, Field, InputObjectMeta, InterfaceMeta, ObjectMeta, UnionMeta};
use crate::schema::model::{DirectiveLocation, DirectiveType, SchemaType};
use crate::schema::type_ref::TypeRef;
use crate::source::Source;
use crate::validation::context::ValidatorContext;
use crate::validation::multi_visitor::MultiVisitor;
use crate::validation::traits::Visitor;
use crate::validation::visitor::visit;
use crate::value::Value;

fn name_field() -> Field<()> {
    Field::dangling("name", TypeRef::named("String")).argument(Argument::new("surname", TypeRef::named("Boolean")))
}

/// The same being/pet/dog/cat/human/alien world the reference validation
/// test suite checks rules against.
pub fn test_schema() -> SchemaType<()> {
    SchemaBuilder::<()>::new()
        .enum_type(EnumMeta {
            name: "DogCommand".to_owned(),
            description: None,
            values: vec![EnumValue::new("SIT"), EnumValue::new("HEEL"), EnumValue::new("DOWN")],
        })
        .enum_type(EnumMeta {
            name: "FurColor".to_owned(),
            description: None,
            values: vec![EnumValue::new("BROWN"), EnumValue::new("BLACK"), EnumValue::new("TAN"), EnumValue::new("SPOTTED")],
        })
        .interface(InterfaceMeta {
            name: "Being".to_owned(),
            description: None,
            fields: vec![name_field()],
            resolve_type: None,
        })
        .interface(InterfaceMeta { name: "Pet".to_owned(), description: None, fields: vec![name_field()], resolve_type: None })
        .interface(InterfaceMeta { name: "Canine".to_owned(), description: None, fields: vec![name_field()], resolve_type: None })
        .interface(InterfaceMeta {
            name: "Intelligent".to_owned(),
            description: None,
            fields: vec![Field::dangling("iq", TypeRef::named("Int"))],
            resolve_type: None,
        })
        .object(ObjectMeta {
            name: "Dog".to_owned(),
            description: None,
            interface_names: vec!["Being".to_owned(), "Pet".to_owned(), "Canine".to_owned()],
            fields: vec![
                name_field(),
                Field::dangling("nickname", TypeRef::named("String")),
                Field::dangling("barkVolume", TypeRef::named("Int")),
                Field::dangling("barks", TypeRef::named("Boolean")),
                Field::dangling("doesKnowCommand", TypeRef::named("Boolean"))
                    .argument(Argument::new("dogCommand", TypeRef::named("DogCommand"))),
                Field::dangling("isHousetrained", TypeRef::named("Boolean"))
                    .argument(Argument::new("atOtherHomes", TypeRef::named("Boolean")).default_value(Value::Boolean(true))),
                Field::dangling("isAtLocation", TypeRef::named("Boolean"))
                    .argument(Argument::new("x", TypeRef::named("Int")))
                    .argument(Argument::new("y", TypeRef::named("Int"))),
            ],
        })
        .object(ObjectMeta {
            name: "Cat".to_owned(),
            description: None,
            interface_names: vec!["Being".to_owned(), "Pet".to_owned()],
            fields: vec![
                name_field(),
                Field::dangling("nickname", TypeRef::named("String")),
                Field::dangling("meows", TypeRef::named("Boolean")),
                Field::dangling("meowVolume", TypeRef::named("Int")),
                Field::dangling("furColor", TypeRef::named("FurColor")),
            ],
        })
        .union(UnionMeta::new("CatOrDog", vec!["Cat".to_owned(), "Dog".to_owned()]))
        .object(ObjectMeta {
            name: "Human".to_owned(),
            description: None,
            interface_names: vec!["Being".to_owned(), "Intelligent".to_owned()],
            fields: vec![
                name_field(),
                Field::dangling("pets", TypeRef::list(TypeRef::named("Pet"))),
                Field::dangling("relatives", TypeRef::list(TypeRef::named("Human"))),
                Field::dangling("iq", TypeRef::named("Int")),
            ],
        })
        .object(ObjectMeta {
            name: "Alien".to_owned(),
            description: None,
            interface_names: vec!["Being".to_owned(), "Intelligent".to_owned()],
            fields: vec![
                name_field(),
                Field::dangling("iq", TypeRef::named("Int")),
                Field::dangling("numEyes", TypeRef::named("Int")),
            ],
        })
        .union(UnionMeta::new("DogOrHuman", vec!["Dog".to_owned(), "Human".to_owned()]))
        .union(UnionMeta::new("HumanOrAlien", vec!["Human".to_owned(), "Alien".to_owned()]))
        .input_object(InputObjectMeta {
            name: "ComplexInput".to_owned(),
            description: None,
            input_fields: vec![
                Argument::new("requiredField", TypeRef::non_null_named("Boolean")),
                Argument::new("intField", TypeRef::named("Int")),
                Argument::new("stringField", TypeRef::named("String")),
                Argument::new("booleanField", TypeRef::named("Boolean")),
                Argument::new("stringListField", TypeRef::list(TypeRef::named("String"))),
            ],
        })
        .object(ObjectMeta {
            name: "ComplicatedArgs".to_owned(),
            description: None,
            interface_names: vec![],
            fields: vec![
                Field::dangling("intArgField", TypeRef::named("String")).argument(Argument::new("intArg", TypeRef::named("Int"))),
                Field::dangling("nonNullIntArgField", TypeRef::named("String"))
                    .argument(Argument::new("nonNullIntArg", TypeRef::non_null_named("Int"))),
                Field::dangling("stringArgField", TypeRef::named("String")).argument(Argument::new("stringArg", TypeRef::named("String"))),
                Field::dangling("booleanArgField", TypeRef::named("String"))
                    .argument(Argument::new("booleanArg", TypeRef::named("Boolean"))),
                Field::dangling("enumArgField", TypeRef::named("String")).argument(Argument::new("enumArg", TypeRef::named("FurColor"))),
                Field::dangling("floatArgField", TypeRef::named("String")).argument(Argument::new("floatArg", TypeRef::named("Float"))),
                Field::dangling("idArgField", TypeRef::named("String")).argument(Argument::new("idArg", TypeRef::named("ID"))),
                Field::dangling("stringListArgField", TypeRef::named("String"))
                    .argument(Argument::new("stringListArg", TypeRef::list(TypeRef::named("String")))),
                Field::dangling("complexArgField", TypeRef::named("String"))
                    .argument(Argument::new("complexArg", TypeRef::named("ComplexInput"))),
                Field::dangling("multipleReqs", TypeRef::named("String"))
                    .argument(Argument::new("req1", TypeRef::non_null_named("Int")))
                    .argument(Argument::new("req2", TypeRef::non_null_named("Int"))),
                Field::dangling("multipleOpts", TypeRef::named("String"))
                    .argument(Argument::new("opt1", TypeRef::named("Int")).default_value(Value::Int(0)))
                    .argument(Argument::new("opt2", TypeRef::named("Int")).default_value(Value::Int(0))),
                Field::dangling("multipleOptAndReq", TypeRef::named("String"))
                    .argument(Argument::new("req1", TypeRef::non_null_named("Int")))
                    .argument(Argument::new("req2", TypeRef::non_null_named("Int")))
                    .argument(Argument::new("opt1", TypeRef::named("Int")).default_value(Value::Int(0)))
                    .argument(Argument::new("opt2", TypeRef::named("Int")).default_value(Value::Int(0))),
            ],
        })
        .object(ObjectMeta {
            name: "QueryRoot".to_owned(),
            description: None,
            interface_names: vec![],
            fields: vec![
                Field::dangling("human", TypeRef::named("Human")).argument(Argument::new("id", TypeRef::named("ID"))),
                Field::dangling("alien", TypeRef::named("Alien")),
                Field::dangling("dog", TypeRef::named("Dog")),
                Field::dangling("cat", TypeRef::named("Cat")),
                Field::dangling("pet", TypeRef::named("Pet")),
                Field::dangling("catOrDog", TypeRef::named("CatOrDog")),
                Field::dangling("dogOrHuman", TypeRef::named("DogOrHuman")),
                Field::dangling("humanOrAlien", TypeRef::named("HumanOrAlien")),
                Field::dangling("complicatedArgs", TypeRef::named("ComplicatedArgs")),
            ],
        })
        .directive(DirectiveType::new("onQuery", &[DirectiveLocation::Query], &[]))
        .directive(DirectiveType::new("onMutation", &[DirectiveLocation::Mutation], &[]))
        .directive(DirectiveType::new("onField", &[DirectiveLocation::Field], &[]))
        .directive(DirectiveType::new("onFragmentDefinition", &[DirectiveLocation::FragmentDefinition], &[]))
        .directive(DirectiveType::new("onFragmentSpread", &[DirectiveLocation::FragmentSpread], &[]))
        .directive(DirectiveType::new("onInlineFragment", &[DirectiveLocation::InlineFragment], &[]))
        .finalize("QueryRoot", None)
}

/// Parse `query` and run a single rule (produced fresh by `factory`) over
/// it against `schema`, returning whatever it reported.
///
/// Leaks the owned schema and parsed document to `'static`: a rule's
/// internal state and the `Visitor` trait itself are tied to the document's
/// lifetime, and juggling that lifetime against a schema built fresh per
/// test isn't worth it outside this test-only helper — same tradeoff as
/// `executor::leak_selection_set`.
pub fn validate<CtxT: 'static, F, V>(schema: SchemaType<CtxT>, query: &'static str, factory: F) -> Vec<super::context::RuleError>
where
    F: FnOnce() -> V,
    V: Visitor<'static, CtxT> + 'static,
{
    let schema: &'static SchemaType<CtxT> = Box::leak(Box::new(schema));
    let source: Source<'static> = Source::new(query);
    let document: &'static ast::Document<'static> = Box::leak(Box::new(
        parser::parse_document(&source).unwrap_or_else(|e| panic!("parse error on input {:?}: {:?}", query, e)),
    ));

    let mut ctx = ValidatorContext::new(schema);
    let mut mv = MultiVisitor::new(vec![Box::new(factory()) as Box<dyn Visitor<'static, CtxT> + 'static>]);
    visit(&mut mv, &mut ctx, document);
    ctx.into_errors()
}

pub fn expect_passes_rule<F, V>(factory: F, query: &'static str)
where
    F: FnOnce() -> V,
    V: Visitor<'static, ()> + 'static,
{
    expect_passes_rule_with_schema(test_schema(), factory, query);
}

pub fn expect_passes_rule_with_schema<F, V>(schema: SchemaType<()>, factory: F, query: &'static str)
where
    F: FnOnce() -> V,
    V: Visitor<'static, ()> + 'static,
{
    let errs = validate(schema, query, factory);
    if !errs.is_empty() {
        print_errors(&errs);
        panic!("Expected rule to pass, but errors found");
    }
}

pub fn expect_fails_rule<F, V>(factory: F, query: &'static str, expected_errors: &[super::context::RuleError])
where
    F: FnOnce() -> V,
    V: Visitor<'static, ()> + 'static,
{
    expect_fails_rule_with_schema(test_schema(), factory, query, expected_errors);
}

pub fn expect_fails_rule_with_schema<F, V>(
    schema: SchemaType<()>,
    factory: F,
    query: &'static str,
    expected_errors: &[super::context::RuleError],
) where
    F: FnOnce() -> V,
    V: Visitor<'static, ()> + 'static,
{
    let errs = validate(schema, query, factory);

    if errs.is_empty() {
        panic!("Expected rule to fail, but no errors were found");
    } else if errs != expected_errors {
        println!("==> Expected errors:");
        print_errors(expected_errors);
        println!("\n==> Actual errors:");
        print_errors(&errs);
        panic!("Unexpected set of errors found");
    }
}

fn print_errors(errs: &[super::context::RuleError]) {
    for err in errs {
        for l in err.locations() {
            print!("[{:>4},{:>4}]  ", l.start, l.end);
        }
        println!("{}", err.message());
    }
}
