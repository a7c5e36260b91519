use crate::calendar;
use crate::commands::{CommandSpec, Param, Placement, ValueKind, Values};
use crate::error::CommandResult;

pub const AGE_PROMPT: &str = "How old are you?";

pub const COMMAND: CommandSpec = CommandSpec {
    name: "year-born",
    about: "Work out the year you were born in",
    params: &[Param {
        name: "age",
        help: "Your age in years; asked for interactively when omitted",
        kind: ValueKind::Int,
        placement: Placement::Positional,
        default: None,
        prompt: Some(AGE_PROMPT),
    }],
    handler: run,
};

pub fn message(current_year: i64, age: i64) -> String {
    format!(
        "You were born in {}",
        calendar::birth_year(current_year, age)
    )
}

fn run(values: &Values) -> CommandResult<String> {
    let age = values.int("age")?;
    let current_year = calendar::current_year();
    tracing::debug!(age, current_year, "computing birth year");
    Ok(message(current_year, age))
}
