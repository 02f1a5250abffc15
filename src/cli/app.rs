//! Main CLI application

use crate::cli::completion::print_completions;
use crate::commands::{self, Context, LangFormat, Verbosity};
use crate::error::{is_collaborator_failure, LangError};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Build the clap command tree
pub fn build_command() -> Command {
    Command::new("langkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scaffolding tool for file-based i18n lang projects")
        .arg(
            Arg::new("dir")
                .short('C')
                .long("dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Run as if started in DIR")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print failures")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print every file written")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("new").about("create a new i18n directory"))
        .subcommand(Command::new("init").about("initialize a new lang configs"))
        .subcommand(
            Command::new("default")
                .about("show or set default lang locale")
                .arg(
                    Arg::new("locale")
                        .value_name("LOCALE")
                        .help("lang locale to set as default"),
                ),
        )
        .subcommand(
            Command::new("schema").about("generate or update lang schema and template schema"),
        )
        .subcommand(Command::new("model").about("generate or update lang model"))
        .subcommand(
            Command::new("create")
                .about("create a new lang file")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("name of the lang file")
                        .required(true),
                )
                .arg(
                    Arg::new("yaml")
                        .long("yaml")
                        .help("create a yaml file instead of json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("delete").about("delete a lang file").arg(
                Arg::new("name")
                    .value_name("NAME")
                    .help("name of the lang file")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("completions")
                .about("print a shell completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .value_parser(clap::value_parser!(Shell))
                        .required(true),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Build the command context from global flags
fn build_context(matches: &ArgMatches) -> Context {
    let mut ctx = Context::new().with_verbosity(get_verbosity(matches));
    if let Some(dir) = matches.get_one::<PathBuf>("dir") {
        let dir = ctx.path(dir);
        ctx = ctx.with_working_dir(dir);
    }
    ctx
}

/// Dispatch a parsed subcommand to its handler
pub fn dispatch(name: &str, sub_matches: &ArgMatches, ctx: &Context) -> Result<(), LangError> {
    let result = match name {
        "new" => commands::new(ctx),
        "init" => commands::init(ctx),
        "default" => commands::default(
            ctx,
            sub_matches.get_one::<String>("locale").map(String::as_str),
        ),
        "schema" => commands::schema(ctx).map(|_| ()),
        "model" => commands::model(ctx).map(|_| ()),
        "create" => {
            let format = if sub_matches.get_flag("yaml") {
                LangFormat::Yaml
            } else {
                LangFormat::Json
            };
            commands::create(ctx, lang_name(sub_matches), format)
        }
        "delete" => commands::delete(ctx, lang_name(sub_matches)),
        _ => unreachable!("subcommand '{}' is not registered", name),
    };

    match result {
        Err(e) if is_collaborator_failure(&e) => {
            ctx.report_failure(&e.to_string());
            Ok(())
        }
        other => other,
    }
}

/// Lang file name of `create`/`delete` (clap enforces its presence)
fn lang_name(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("name")
        .map(String::as_str)
        .unwrap_or_default()
}

/// Run the CLI with explicit arguments
pub fn run_from<I, T>(args: I) -> Result<(), LangError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = build_command();
    let matches = command.clone().get_matches_from(args);
    let ctx = build_context(&matches);

    match matches.subcommand() {
        Some(("completions", sub_matches)) => {
            if let Some(shell) = sub_matches.get_one::<Shell>("shell") {
                print_completions(*shell, &mut command);
            }
            Ok(())
        }
        Some((name, sub_matches)) => dispatch(name, sub_matches, &ctx),
        None => {
            // No command given, show help
            command.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), LangError> {
    run_from(std::env::args_os())
}
