use chrono::{
    TimeDelta, Utc,
    format::{Item, StrftimeItems},
};

use crate::interpreter::{evaluator::function::core::Function, value::core::Value};

/// Function `ADD_DAYS(datetime, days)`.
///
/// Shifts a datetime by a whole, possibly negative, number of days given as
/// a string such as `"7"` or `"-1"`.
pub struct AddDays;

/// Function `FORMAT_DATE(datetime, format)`.
///
/// Renders a datetime with a `strftime`-style format. Text without
/// specifiers is copied verbatim; an unknown specifier rejects the arguments.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use strexpr::interpreter::{
///     evaluator::function::{core::Function, date::FormatDate},
///     value::core::Value,
/// };
///
/// let date = Utc.with_ymd_and_hms(2019, 7, 13, 12, 15, 0).unwrap();
/// let mut stack = vec![Value::DateTime(date), Value::from("%Y-%m-%d")];
///
/// FormatDate.invoke(&mut stack).unwrap();
///
/// assert_eq!(stack, vec![Value::from("2019-07-13")]);
/// ```
pub struct FormatDate;

/// Function `NOW()`: the current UTC datetime.
pub struct Now;

impl Function for AddDays {
    fn name(&self) -> &str {
        "ADD_DAYS"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        let [date, days]: [Value; 2] = args.try_into().ok()?;
        let (Value::DateTime(date), Value::String(days)) = (date, days) else {
            return None;
        };

        let days = days.trim().parse::<i64>().ok()?;
        let shifted = date.checked_add_signed(TimeDelta::try_days(days)?)?;

        Some(Value::DateTime(shifted))
    }
}

impl Function for FormatDate {
    fn name(&self) -> &str {
        "FORMAT_DATE"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        let [date, format]: [Value; 2] = args.try_into().ok()?;
        let (Value::DateTime(date), Value::String(format)) = (date, format) else {
            return None;
        };

        let items = StrftimeItems::new(&format);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            return None;
        }

        Some(Value::String(date.format_with_items(items).to_string()))
    }
}

impl Function for Now {
    fn name(&self) -> &str {
        "NOW"
    }

    fn arity(&self) -> usize {
        0
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        args.is_empty().then(|| Value::DateTime(Utc::now()))
    }
}
