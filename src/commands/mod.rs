pub mod greet;
pub mod year_born;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use clap::ArgMatches;

use crate::error::{CommandResult, GeotestError};
use crate::prompt::Console;

/// Handler invoked once every declared parameter has been resolved.
pub type Handler = fn(&Values) -> CommandResult<String>;

/// Type a parameter's value is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
}

impl ValueKind {
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            ValueKind::Str => Some(Value::Str(raw.to_string())),
            ValueKind::Int => raw.trim().parse().ok().map(Value::Int),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

/// Where a parameter appears on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `--name <VALUE>`
    Option,
    Positional,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: ValueKind,
    pub placement: Placement,
    pub default: Option<&'static str>,
    /// Message shown when the value is still missing after parsing.
    pub prompt: Option<&'static str>,
}

#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub params: &'static [Param],
    pub handler: Handler,
}

/// Commands registered at startup, keyed by subcommand name.
#[derive(Default)]
pub struct CommandTable {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table with every built-in command registered.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register(greet::COMMAND);
        table.register(year_born::COMMAND);
        table
    }

    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }
}

/// Resolved parameter values handed to a handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Values {
    entries: BTreeMap<&'static str, Value>,
}

impl Values {
    pub fn insert(&mut self, name: &'static str, value: Value) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: &'static str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn str(&self, name: &'static str) -> CommandResult<&str> {
        match self.get(name) {
            Some(Value::Str(value)) => Ok(value.as_str()),
            Some(_) => Err(GeotestError::WrongType {
                name,
                expected: "a string",
            }),
            None => Err(GeotestError::MissingParameter(name)),
        }
    }

    pub fn int(&self, name: &'static str) -> CommandResult<i64> {
        match self.get(name) {
            Some(Value::Int(value)) => Ok(*value),
            Some(_) => Err(GeotestError::WrongType {
                name,
                expected: "an integer",
            }),
            None => Err(GeotestError::MissingParameter(name)),
        }
    }
}

/// Dispatches the parsed subcommand to its registered handler.
pub fn execute<R: BufRead, W: Write>(
    table: &CommandTable,
    matches: &ArgMatches,
    console: &mut Console<R, W>,
) -> CommandResult<String> {
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| GeotestError::UnknownCommand(String::new()))?;
    let spec = table
        .get(name)
        .ok_or_else(|| GeotestError::UnknownCommand(name.to_string()))?;

    tracing::debug!(command = spec.name, "dispatching command");
    let values = resolve(spec, sub_matches, console)?;
    (spec.handler)(&values)
}

/// Resolves every parameter of `spec`: parsed arguments (defaults included)
/// first, the interactive prompt second.
pub fn resolve<R: BufRead, W: Write>(
    spec: &CommandSpec,
    matches: &ArgMatches,
    console: &mut Console<R, W>,
) -> CommandResult<Values> {
    let mut values = Values::default();

    for param in spec.params {
        let value = match from_matches(param, matches) {
            Some(value) => value,
            None => match param.prompt {
                Some(message) => {
                    tracing::debug!(param = param.name, "prompting for missing value");
                    console.ask(param.name, message, param.kind)?
                }
                None => return Err(GeotestError::MissingParameter(param.name)),
            },
        };
        values.insert(param.name, value);
    }

    Ok(values)
}

fn from_matches(param: &Param, matches: &ArgMatches) -> Option<Value> {
    match param.kind {
        ValueKind::Str => matches
            .get_one::<String>(param.name)
            .map(|value| Value::Str(value.clone())),
        ValueKind::Int => matches.get_one::<i64>(param.name).copied().map(Value::Int),
    }
}
