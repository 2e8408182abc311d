use chrono::{TimeZone, Utc};
use strexpr::{
    error::{CallableKind, ExpressionError},
    interpreter::{
        evaluator::operator::{
            comparison::{Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual, compare},
            concat::Plus,
            core::{Operator, PRIORITY_AND, PRIORITY_COMPARISON, PRIORITY_NOT, PRIORITY_OR, PRIORITY_PLUS},
            logic::{And, Not, Or},
        },
        value::core::Value,
    },
};

fn apply(operator: &dyn Operator, args: &[Value]) -> Option<Value> {
    operator.apply(args.to_vec())
}

fn s(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn priorities_are_ordered() {
    assert!(PRIORITY_NOT > PRIORITY_PLUS);
    assert!(PRIORITY_PLUS > PRIORITY_COMPARISON);
    assert!(PRIORITY_COMPARISON > PRIORITY_AND);
    assert!(PRIORITY_AND > PRIORITY_OR);
    assert_eq!(Less.priority(), Equal.priority());
}

#[test]
fn logic() {
    assert_eq!(apply(&And, &[Value::Bool(true), Value::Bool(false)]), Some(Value::Bool(false)));
    assert_eq!(apply(&And, &[Value::Bool(true), Value::Bool(true)]), Some(Value::Bool(true)));
    assert_eq!(apply(&Or, &[Value::Bool(false), Value::Bool(true)]), Some(Value::Bool(true)));
    assert_eq!(apply(&Or, &[Value::Bool(false), Value::Bool(false)]), Some(Value::Bool(false)));
    assert_eq!(apply(&Not, &[Value::Bool(true)]), Some(Value::Bool(false)));
}

#[test]
fn logic_requires_booleans_on_both_sides() {
    assert_eq!(apply(&And, &[Value::Bool(false), s("x")]), None);
    assert_eq!(apply(&Or, &[Value::Bool(true), Value::Null]), None);
    assert_eq!(apply(&Not, &[s("true")]), None);
}

#[test]
fn equality_is_structural() {
    assert_eq!(apply(&Equal, &[s("A"), s("A")]), Some(Value::Bool(true)));
    assert_eq!(apply(&Equal, &[Value::Null, Value::Null]), Some(Value::Bool(true)));
    assert_eq!(apply(&Equal, &[s("true"), Value::Bool(true)]), Some(Value::Bool(false)));
    assert_eq!(apply(&NotEqual, &[s("A"), Value::Null]), Some(Value::Bool(true)));
    assert_eq!(apply(&NotEqual, &[s("A"), s("A")]), Some(Value::Bool(false)));
}

#[test]
fn ordering_of_strings_is_lexicographic() {
    assert_eq!(apply(&Less, &[s("10"), s("9")]), Some(Value::Bool(true)));
    assert_eq!(apply(&Greater, &[s("b"), s("a")]), Some(Value::Bool(true)));
    assert_eq!(apply(&LessOrEqual, &[s("a"), s("a")]), Some(Value::Bool(true)));
    assert_eq!(apply(&GreaterOrEqual, &[s("a"), s("b")]), Some(Value::Bool(false)));
}

#[test]
fn ordering_of_datetimes() {
    let earlier = Value::DateTime(Utc.with_ymd_and_hms(2019, 7, 13, 0, 0, 0).unwrap());
    let later = Value::DateTime(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());

    assert_eq!(apply(&Less, &[earlier.clone(), later.clone()]), Some(Value::Bool(true)));
    assert_eq!(apply(&GreaterOrEqual, &[earlier, later]), Some(Value::Bool(false)));
}

#[test]
fn ordering_with_nulls() {
    assert_eq!(apply(&Less, &[Value::Null, Value::Null]), None);
    assert_eq!(apply(&Greater, &[Value::Null, Value::Null]), None);
    assert_eq!(apply(&LessOrEqual, &[Value::Null, Value::Null]), Some(Value::Bool(true)));
    assert_eq!(apply(&GreaterOrEqual, &[Value::Null, Value::Null]), Some(Value::Bool(true)));
    assert_eq!(apply(&LessOrEqual, &[Value::Null, s("A")]), None);
}

#[test]
fn ordering_treats_empty_strings_as_null() {
    assert_eq!(apply(&LessOrEqual, &[s(""), Value::Null]), Some(Value::Bool(true)));
    assert_eq!(apply(&GreaterOrEqual, &[Value::Null, s("")]), Some(Value::Bool(true)));
    assert_eq!(apply(&Less, &[s(""), Value::Null]), None);
    assert_eq!(apply(&Less, &[s(""), s("")]), Some(Value::Bool(false)));
}

#[test]
fn ordering_of_mixed_types_is_rejected() {
    assert_eq!(compare(&s("A"), &Value::Bool(true)), None);
    assert_eq!(apply(&Less, &[s("A"), Value::Bool(true)]), None);
}

#[test]
fn plus() {
    assert_eq!(apply(&Plus, &[s("A"), s("B")]), Some(s("AB")));
    assert_eq!(apply(&Plus, &[s("A"), Value::Null]), Some(s("A")));
    assert_eq!(apply(&Plus, &[Value::Null, s("B")]), Some(s("B")));
    assert_eq!(apply(&Plus, &[Value::Null, Value::Null]), Some(Value::Null));
    assert_eq!(apply(&Plus, &[s("A"), Value::Bool(true)]), None);
}

#[test]
fn invoke_leaves_lower_values_untouched() {
    let mut stack = vec![s("X"), s("A"), s("B")];

    Plus.invoke(&mut stack).unwrap();

    assert_eq!(stack, vec![s("X"), s("AB")]);
}

#[test]
fn invoke_with_too_few_values() {
    let mut stack = vec![s("A")];

    assert_eq!(Plus.invoke(&mut stack),
               Err(ExpressionError::NotEnoughArguments { kind: CallableKind::Operator,
                                                         name: "+".to_string() }));
    assert_eq!(stack, vec![s("A")]);
}

#[test]
fn invoke_with_invalid_values() {
    let mut stack = vec![s("A"), s("B")];

    assert_eq!(And.invoke(&mut stack),
               Err(ExpressionError::InvalidArguments { kind: CallableKind::Operator,
                                                       name: "&&".to_string() }));
}
