use log::{debug, error, info};
use proxyref::config::{Config, OutputFormat, OUTPUT_FORMAT_NAMES, SOURCE_TYPE_NAMES};
use proxyref::script::Script;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn command() -> Command {
    Command::new("proxyref")
        .about("Run proxy reference scripts over typed storage cells")
        .arg(
            Arg::new("input")
                .help("Input script file")
                .short('i')
                .long("input")
                .action(ArgAction::Set)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config TOML file")
                .action(ArgAction::Set)
                .value_name("TOML_FILE"),
        )
        .arg(
            Arg::new("source_type")
                .long("source-type")
                .help("Script format (defaults to the input file extension)")
                .action(ArgAction::Set)
                .value_parser(SOURCE_TYPE_NAMES.to_vec()),
        )
        .arg(
            Arg::new("output_format")
                .long("output-format")
                .help("Report format")
                .action(ArgAction::Set)
                .value_parser(OUTPUT_FORMAT_NAMES.to_vec()),
        )
        .arg(
            Arg::new("log_level")
                .long("log")
                .short('l')
                .help(format!(
                    "Choose which messages to log (overrides {})",
                    env_logger::DEFAULT_FILTER_ENV
                ))
                .action(ArgAction::Set)
                .value_parser(LOG_LEVELS.to_vec()),
        )
        .version(concat!(
            env!("CARGO_PKG_VERSION"),
            include_str!(concat!(env!("OUT_DIR"), "/commit-info.txt"))
        ))
}

fn run() -> Result<()> {
    use irx_config::parsers::{cmd, toml};
    use irx_config::ConfigBuilder;

    let irxconfig = ConfigBuilder::default()
        .append_parser(
            cmd::ParserBuilder::new(command())
                .exit_on_error(true)
                .build()?,
        )
        .append_parser(
            toml::ParserBuilder::default()
                .default_path("proxyref.toml")
                .path_option("config")
                .ignore_missing_file(true)
                .build()?,
        )
        .load()?;

    let config: Config = irxconfig.get()?;

    setup_logging(config.log_level.as_deref());
    debug!("{config:?}");

    let source_type = config.source_type();
    let text = &mut String::new();
    match config.input.as_deref() {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("couldn't open the script file {}", path.display()))?
                .read_to_string(text)
                .context("couldn't read the script file")?;
        }
        None => {
            let stdin = std::io::stdin();
            stdin
                .lock()
                .read_to_string(text)
                .context("couldn't read from stdin")?;
        }
    }

    let script = Script::parse(text, source_type).context("couldn't parse the script")?;
    info!(
        "{} cells, {} proxies, {} operations",
        script.cells.len(),
        script.proxies.len(),
        script.ops.len()
    );
    let report = script.run().context("script failed")?;

    let rendered = match config.output_format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("couldn't write the report")?;

    Ok(())
}

fn setup_logging(log_level: Option<&str>) {
    // * Log at info by default.
    // * Allow users the option of setting complex logging filters using
    //   env_logger's `RUST_LOG` environment variable.
    // * Override both of those if the logging level is set via the `--log`
    //   command line argument.
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);

    let log_lvl_from_env = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    if log_lvl_from_env {
        log::set_max_level(log::LevelFilter::Trace);
    } else {
        let level = match log_level {
            Some(lvl) => lvl.parse().unwrap_or(log::LevelFilter::Info),
            None => log::LevelFilter::Info,
        };
        log::set_max_level(level);
        builder.filter_level(level);
    }

    builder.init();
}

fn main() {
    if let Err(ref e) = run() {
        error!("{e:?}");

        process::exit(1);
    }
}
