use crate::commands::{CommandSpec, Param, Placement, ValueKind, Values};
use crate::error::CommandResult;

pub const DEFAULT_NAME: &str = "World";

pub const COMMAND: CommandSpec = CommandSpec {
    name: "hello",
    about: "Greet someone by name",
    params: &[Param {
        name: "name",
        help: "Name to greet",
        kind: ValueKind::Str,
        placement: Placement::Option,
        default: Some(DEFAULT_NAME),
        prompt: None,
    }],
    handler: run,
};

/// Returns the greeting message for `name`.
pub fn message(name: &str) -> String {
    format!("Hello {name}!")
}

fn run(values: &Values) -> CommandResult<String> {
    Ok(message(values.str("name")?))
}
