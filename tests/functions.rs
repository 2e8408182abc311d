use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc};
use strexpr::{
    error::{CallableKind, Error, ExpressionError},
    interpreter::{
        evaluator::{
            core::Evaluator,
            function::{
                condition::If,
                core::Function,
                date::{AddDays, FormatDate, Now},
                replace::Replace,
            },
        },
        value::core::Value,
    },
};

fn apply(function: &dyn Function, args: &[Value]) -> Option<Value> {
    function.apply(args.to_vec())
}

fn s(text: &str) -> Value {
    Value::from(text)
}

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 7, 13, 12, 15, 0).unwrap()
}

#[test]
fn if_selects_a_branch() {
    assert_eq!(apply(&If, &[Value::Bool(true), s("1"), s("2")]), Some(s("1")));
    assert_eq!(apply(&If, &[Value::Bool(false), s("1"), Value::Null]), Some(Value::Null));
}

#[test]
fn if_requires_a_boolean_condition() {
    assert_eq!(apply(&If, &[s("true"), s("1"), s("2")]), None);
    assert_eq!(apply(&If, &[Value::Null, s("1"), s("2")]), None);
}

#[test]
fn if_takes_arguments_in_order() {
    let mut stack = vec![s("X"), Value::Bool(false), s("then"), s("else")];

    If.invoke(&mut stack).unwrap();

    assert_eq!(stack, vec![s("X"), s("else")]);
}

#[test]
fn add_days() {
    let expected = Utc.with_ymd_and_hms(2019, 7, 20, 12, 15, 0).unwrap();

    assert_eq!(apply(&AddDays, &[Value::DateTime(date()), s("7")]),
               Some(Value::DateTime(expected)));
    assert_eq!(apply(&AddDays, &[Value::DateTime(date()), s(" -13 ")]),
               Some(Value::DateTime(Utc.with_ymd_and_hms(2019, 6, 30, 12, 15, 0).unwrap())));
}

#[test]
fn add_days_rejects_bad_input() {
    assert_eq!(apply(&AddDays, &[Value::DateTime(date()), s("seven")]), None);
    assert_eq!(apply(&AddDays, &[Value::DateTime(date()), s("1.5")]), None);
    assert_eq!(apply(&AddDays, &[s("2019-07-13"), s("1")]), None);
    assert_eq!(apply(&AddDays, &[Value::DateTime(date()), s("9223372036854775807")]), None);
}

#[test]
fn format_date() {
    assert_eq!(apply(&FormatDate, &[Value::DateTime(date()), s("%d.%m.%Y %H:%M")]),
               Some(s("13.07.2019 12:15")));
    assert_eq!(apply(&FormatDate, &[Value::DateTime(date()), s("no specifiers")]),
               Some(s("no specifiers")));
}

#[test]
fn format_date_rejects_bad_input() {
    assert_eq!(apply(&FormatDate, &[Value::DateTime(date()), s("%Q")]), None);
    assert_eq!(apply(&FormatDate, &[Value::Null, s("%Y")]), None);
}

#[test]
fn now_is_current() {
    let before = Utc::now();
    let now = apply(&Now, &[]);
    let after = Utc::now();

    let Some(Value::DateTime(now)) = now else {
        panic!("NOW returned {now:?}");
    };
    assert!(before <= now && now <= after);
}

#[test]
fn dates_render_without_a_zero_fraction() {
    assert_eq!(Value::DateTime(date()).to_string(), "2019-07-13 12:15:00");
    assert_eq!(Value::DateTime(date().with_nanosecond(999).unwrap()).to_string(),
               "2019-07-13 12:15:00");
}

#[test]
fn dates_render_microseconds() {
    assert_eq!(Value::DateTime(date() + TimeDelta::microseconds(26_490)).to_string(),
               "2019-07-13 12:15:00.026490");
    assert_eq!(Value::DateTime(date().with_nanosecond(123_456_789).unwrap()).to_string(),
               "2019-07-13 12:15:00.123456");
}

#[test]
fn now_as_a_result() {
    let evaluator = Evaluator::standard().unwrap();
    let now = evaluator.evaluate("NOW()").unwrap().unwrap();

    let fraction = now.split_once('.').map(|(_, fraction)| fraction);
    assert!(fraction.is_none_or(|fraction| fraction.len() == 6), "{now}");
    assert!(NaiveDateTime::parse_from_str(&now, "%Y-%m-%d %H:%M:%S%.f").is_ok(), "{now}");
}

#[test]
fn replace() {
    assert_eq!(apply(&Replace, &[s("ABCABA"), s("A.*?C"), s("D")]), Some(s("DABA")));
    assert_eq!(apply(&Replace, &[s("ABA"), s("A"), s("")]), Some(s("B")));
    assert_eq!(apply(&Replace, &[s("2019-07-13"), s(r"(\d+)-(\d+)-(\d+)"), s("$3.$2.$1")]),
               Some(s("13.07.2019")));
}

#[test]
fn replace_with_null_or_empty_source() {
    assert_eq!(apply(&Replace, &[Value::Null, s("A"), s("B")]), Some(Value::Null));
    assert_eq!(apply(&Replace, &[s(""), s("A"), s("B")]), Some(Value::Null));
}

#[test]
fn replace_rejects_bad_input() {
    assert_eq!(apply(&Replace, &[s("ABC"), s(""), s("B")]), None);
    assert_eq!(apply(&Replace, &[s("ABC"), s("("), s("B")]), None);
    assert_eq!(apply(&Replace, &[s("ABC"), Value::Null, s("B")]), None);
    assert_eq!(apply(&Replace, &[s("ABC"), s("A"), Value::Null]), None);
    assert_eq!(apply(&Replace, &[Value::Bool(true), s("A"), s("B")]), None);
}

#[test]
fn dates_in_expressions() {
    let evaluator = Evaluator::standard().unwrap();

    assert_eq!(evaluator.evaluate(r#"FORMAT_DATE(ADD_DAYS(NOW(), 1), "%Y") >= FORMAT_DATE(NOW(), "%Y")"#)
                        .unwrap(),
               Some("True".to_string()));
    assert_eq!(evaluator.evaluate("ADD_DAYS(NOW(), -1) < NOW()").unwrap(),
               Some("True".to_string()));
    assert_eq!(evaluator.evaluate("FORMAT_DATE(A, B)"),
               Err(Error::Expression(ExpressionError::InvalidArguments { kind: CallableKind::Function,
                                                                         name: "FORMAT_DATE".to_string() })));
}

#[test]
fn replace_in_expressions() {
    let evaluator = Evaluator::standard().unwrap();

    assert_eq!(evaluator.evaluate(r#"REPLACE("a b c", " ", "")"#).unwrap(),
               Some("abc".to_string()));
    assert_eq!(evaluator.evaluate(r#"REPLACE("a b c", " ", _)"#).unwrap(),
               Some("a_b_c".to_string()));
    assert_eq!(evaluator.evaluate("REPLACE(NULL, A, B)").unwrap(), None);
}
