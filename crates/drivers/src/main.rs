mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use config::AppConfig;
use partial_pages_adapters::{
    present_check_outcome, present_outcome_json, FsPageFileStore, FsPagePathResolver,
    ImageCrateDecoder, JsonlTelemetrySink, LogTelemetrySink, SqliteSettingsStore, SystemClock,
};
use partial_pages_application::{
    CheckOutcome, CheckPagesCommand, PartialPageChecker, SettingsStore, TelemetrySink,
};
use partial_pages_domain::WidthTag;
use tracing::warn;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config_path = config::config_path();
    let loaded = AppConfig::load_from(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::init_logging(&config.log_level);
    if let Err(error) = loaded {
        warn!("{error}; using default configuration");
    }

    let command = parse_command(&args);
    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn open_settings(config: &AppConfig) -> Result<SqliteSettingsStore, CommandError> {
    let settings = SqliteSettingsStore::new(&config.settings_path, Box::new(SystemClock));
    settings
        .initialize()
        .map_err(|error| CommandError::Runtime(format!("failed to open settings: {error}")))?;
    Ok(settings)
}

fn build_checker(config: &AppConfig) -> Result<PartialPageChecker, CommandError> {
    let telemetry: Box<dyn TelemetrySink> = match &config.telemetry_path {
        Some(path) => Box::new(JsonlTelemetrySink::new(path, Box::new(SystemClock))),
        None => Box::new(LogTelemetrySink),
    };

    Ok(PartialPageChecker::new(
        Box::new(open_settings(config)?),
        Box::new(FsPagePathResolver::new(
            config.images_root.as_ref().map(PathBuf::from),
        )),
        Box::new(FsPageFileStore),
        Box::new(ImageCrateDecoder),
        telemetry,
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CheckArgs {
    total_pages: Option<u32>,
    width: Option<String>,
    second_width: Option<String>,
    json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Check(CheckArgs),
    Status,
    Reset,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Check(CheckArgs::default()));
    }

    match args[1].as_str() {
        "check" => parse_check_args(&args[2..]).map(Command::Check),
        "status" => Ok(Command::Status),
        "reset" => Ok(Command::Reset),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_check_args(args: &[String]) -> Result<CheckArgs, CommandError> {
    let mut parsed = CheckArgs::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--pages" => {
                let value = flag_value(&mut iter, flag)?;
                let total_pages = value
                    .parse::<u32>()
                    .map_err(|_| CommandError::Usage(format!("invalid page count: {value}")))?;
                parsed.total_pages = Some(total_pages);
            }
            "--width" => parsed.width = Some(flag_value(&mut iter, flag)?.clone()),
            "--second-width" => parsed.second_width = Some(flag_value(&mut iter, flag)?.clone()),
            "--json" => parsed.json = true,
            other => return Err(CommandError::Usage(format!("unknown flag: {other}"))),
        }
    }
    Ok(parsed)
}

fn flag_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String, CommandError> {
    iter.next()
        .ok_or_else(|| CommandError::Usage(format!("missing value for {flag}")))
}

fn width_tag(value: &str) -> Result<WidthTag, CommandError> {
    WidthTag::new(value)
        .map_err(|error| CommandError::Usage(format!("invalid width {value:?}: {error}")))
}

fn run_command(
    command: Result<Command, CommandError>,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Check(args) => {
            let primary_width = width_tag(args.width.as_deref().unwrap_or(&config.primary_width))?;
            let secondary_width = width_tag(
                args.second_width
                    .as_deref()
                    .unwrap_or(&config.secondary_width),
            )?;
            let checker = build_checker(config)?;
            let outcome = checker.check_pages(CheckPagesCommand {
                total_pages: args.total_pages.unwrap_or(config.total_pages),
                primary_width,
                secondary_width,
            });

            if args.json {
                let json = present_outcome_json(&outcome)
                    .map_err(|error| CommandError::Runtime(error.to_string()))?;
                println!("{json}");
            } else if matches!(outcome, CheckOutcome::Failed(_)) {
                eprintln!("{}", present_check_outcome(&outcome));
            } else {
                println!("{}", present_check_outcome(&outcome));
            }
            Ok(())
        }
        Command::Status => {
            let checked = open_settings(config)?
                .did_check_partial_images()
                .map_err(|error| CommandError::Runtime(format!("status failed: {error}")))?;
            if checked {
                println!("partial page check: done");
            } else {
                println!("partial page check: pending");
            }
            Ok(())
        }
        Command::Reset => {
            let cleared = open_settings(config)?
                .clear_checked_partial_images()
                .map_err(|error| CommandError::Runtime(format!("reset failed: {error}")))?;
            if cleared {
                println!("partial page check will run again");
            } else {
                println!("partial page check was not recorded; nothing to reset");
            }
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  partial-page-checker check [--pages N] [--width W] [--second-width W] [--json]");
    println!("  partial-page-checker status");
    println!("  partial-page-checker reset");
}
