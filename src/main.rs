use clap::{Arg, Command as ClapCommand, ArgAction, ArgGroup};
use std::process;
use log::error;

use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory, FIELD_FLAGS};

fn build_cli() -> ClapCommand {
    let mut cli = ClapCommand::new("exifkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write, strip and inspect EXIF metadata in PNG files")
        .arg(
            Arg::new("input")
                .help("Input PNG file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("write")
                .short('w')
                .long("write")
                .help("Write metadata into the input files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strip")
                .short('s')
                .long("strip")
                .help("Remove all EXIF metadata from the input files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("chunks")
                .short('c')
                .long("chunks")
                .help("List PNG chunks (default)")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("mode")
                .args(["write", "strip", "chunks"])
                .multiple(false),
        )
        .arg(
            Arg::new("fields")
                .short('f')
                .long("fields")
                .help("TOML file with field values; flags below override it")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (single input only)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files, keeping input file names")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("ascending-tags")
                .long("ascending-tags")
                .help("Sort directory entries by tag number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show the directories that would be written without writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Record one line per processed file in this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        );

    for (_, flag, help) in FIELD_FLAGS {
        cli = cli.arg(
            Arg::new(flag)
                .long(flag)
                .help(help)
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .required(false),
        );
    }

    cli
}

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let logger = match matches.get_one::<String>("log-file") {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = ExifkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_field_flags_accept_negative_values() {
        let matches = build_cli()
            .try_get_matches_from(["exifkit", "a.png", "--write", "--latitude", "-33.86", "--longitude", "151.2"])
            .unwrap();

        assert!(matches.get_flag("write"));
        assert_eq!(matches.get_one::<String>("latitude").map(String::as_str), Some("-33.86"));
    }

    #[test]
    fn test_modes_are_exclusive() {
        let result = build_cli().try_get_matches_from(["exifkit", "a.png", "--write", "--strip"]);
        assert!(result.is_err());
    }
}
