use clap::{value_parser, Arg, ArgAction, Command};

use crate::commands::{CommandSpec, CommandTable, Param, Placement, ValueKind};

/// Builds the `geotest` command line from the registered commands.
pub fn command(table: &CommandTable) -> Command {
    table.iter().fold(
        Command::new("geotest")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Greets people and works out the year they were born in.")
            .subcommand_required(true)
            .arg_required_else_help(true),
        |cli, spec| cli.subcommand(subcommand(spec)),
    )
}

pub fn subcommand(spec: &CommandSpec) -> Command {
    spec.params
        .iter()
        .fold(Command::new(spec.name).about(spec.about), |cmd, param| {
            cmd.arg(arg(param))
        })
}

fn arg(param: &Param) -> Arg {
    let mut arg = Arg::new(param.name)
        .help(param.help)
        .action(ArgAction::Set)
        .required(false);

    arg = match param.placement {
        // Like a positional, an option's value is taken verbatim even when
        // it starts with a hyphen.
        Placement::Option => arg.long(param.name).allow_hyphen_values(true),
        Placement::Positional => arg.allow_negative_numbers(true),
    };

    arg = match param.kind {
        ValueKind::Str => arg.value_parser(value_parser!(String)),
        ValueKind::Int => arg.value_parser(value_parser!(i64)),
    };

    match param.default {
        Some(default) => arg.default_value(default),
        None => arg,
    }
}
