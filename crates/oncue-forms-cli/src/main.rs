use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use oncue_form_editor::EditorConfig;
use oncue_form_schema::FieldType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Form schema JSON file")
}

fn index_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(usize))
        .help(help)
}

fn cli() -> Command {
    Command::new("oncue-forms")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit OnCuePlus form schemas")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Editor configuration (TOML)"),
        )
        .subcommand(
            Command::new("init")
                .about("Create a new form")
                .arg(file_arg())
                .arg(
                    Arg::new("template")
                        .long("template")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("empty")
                        .help("Start from the onboarding template"),
                )
                .arg(
                    Arg::new("empty")
                        .long("empty")
                        .action(ArgAction::SetTrue)
                        .help("Start without the onboarding template"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a form's fields")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Append a field")
                .arg(file_arg())
                .arg(
                    Arg::new("type")
                        .required(true)
                        .value_parser(|s: &str| s.parse::<FieldType>())
                        .help("Field type (see `types`)"),
                )
                .arg(
                    Arg::new("label")
                        .long("label")
                        .help("Label for the new field"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete the field at an index")
                .arg(file_arg())
                .arg(index_arg("index", "Zero-based field index")),
        )
        .subcommand(
            Command::new("move")
                .about("Move a field to another index")
                .arg(file_arg())
                .arg(index_arg("from", "Current index"))
                .arg(index_arg("to", "Target index")),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a form, and optionally a response to it")
                .arg(file_arg())
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .value_parser(value_parser!(PathBuf))
                        .help("Response JSON keyed by field id"),
                ),
        )
        .subcommand(Command::new("types").about("List field types"))
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<EditorConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(EditorConfig::load(path)?),
        None => Ok(EditorConfig::default()),
    }
}

fn file(args: &ArgMatches) -> anyhow::Result<&PathBuf> {
    args.get_one::<PathBuf>("file")
        .ok_or_else(|| anyhow::anyhow!("missing form file"))
}

fn index(args: &ArgMatches, name: &str) -> anyhow::Result<usize> {
    args.get_one::<usize>(name)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("missing {name}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ONCUE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;

    let report = match matches.subcommand() {
        Some(("init", args)) => {
            let template = if args.get_flag("template") {
                Some(true)
            } else if args.get_flag("empty") {
                Some(false)
            } else {
                None
            };
            commands::init(file(args)?, config, template).await?
        }
        Some(("show", args)) => commands::show(file(args)?).await?,
        Some(("add", args)) => {
            let field_type = *args
                .get_one::<FieldType>("type")
                .ok_or_else(|| anyhow::anyhow!("missing field type"))?;
            let label = args.get_one::<String>("label").map(String::as_str);
            commands::add(file(args)?, config, field_type, label).await?
        }
        Some(("remove", args)) => {
            commands::remove(file(args)?, config, index(args, "index")?).await?
        }
        Some(("move", args)) => {
            let (from, to) = (index(args, "from")?, index(args, "to")?);
            commands::move_field(file(args)?, config, from, to).await?
        }
        Some(("check", args)) => {
            let answers = args.get_one::<PathBuf>("answers");
            let outcome = commands::check(file(args)?, answers.map(PathBuf::as_path)).await?;
            print!("{}", outcome.report);
            std::process::exit(i32::from(!outcome.passed));
        }
        Some(("types", _)) => commands::types(),
        _ => String::new(),
    };

    print!("{report}");
    Ok(())
}
