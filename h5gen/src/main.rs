mod args;

use std::{fs, io::{self, Write}, path::Path, process::ExitCode};

use args::Args;
use clap::Parser;
use libh5gen::{error::Error, generator::{config::{FileConfig, FormatVersionPolicy, GeneratorConfig, LayoutPolicy}, GenerationSummary, Generator}};
use log::{debug, error, info};

const DEFAULT_CONFIG_PATH: &str = "H5Gen.toml";

fn main() -> ExitCode {
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.format(|f, record| {
			let level_style = f.default_level_style(record.level());
			writeln!(f, "[{} {}/{}{}{}]: {}", f.timestamp(), record.target(), level_style.render(), record.level(), level_style.render_reset(), record.args())
		})
		.init();

	debug!("Args: {:?}", args);

	ExitCode::from(report(run(&args)))
}

/// Logs the outcome of a run and returns the process exit code: 0 on success, 1 on any generator error. Argument
/// errors never get this far, clap exits with 2 for those
fn report(result: Result<GenerationSummary, Error>) -> u8 {
	match result {
		Ok(summary) => {
			info!(
				"Finished writing {} datasets of {} elements to \"{}\" ({} layout, {} file format) in {}",
				summary.datasets,
				summary.dataset_len,
				summary.path.display(),
				summary.layout,
				summary.format,
				humantime::format_duration(summary.elapsed)
			);
			0
		}
		Err(e) => {
			error!("{}", e);
			1
		}
	}
}

fn run(args: &Args) -> Result<GenerationSummary, Error> {
	let file_config = load_file_config(args.config.as_deref())?;
	let config = build_config(args, file_config);

	debug!("Config: {:?}", config);

	Generator::new(config)?.generate()
}

/// Reads the config file at `path`, or at `DEFAULT_CONFIG_PATH` if no path was given. A missing default config file is not
/// an error, and results in the built-in defaults
fn load_file_config(path: Option<&str>) -> Result<FileConfig, Error> {
	let path = match path {
		Some(path) => path,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
		None => return Ok(FileConfig::default())
	};

	let config_string = fs::read_to_string(path).map_err(|e| io::Error::new(e.kind(), format!("Could not open config file \"{}\": {}", path, e)))?;

	toml::from_str(&config_string).map_err(|e| Error::ConfigParseError(format!("Error processing config file \"{}\": {}", path, e)))
}

fn build_config(args: &Args, file_config: FileConfig) -> GeneratorConfig {
	let mut config = GeneratorConfig::new(&args.file).with_file_config(file_config);

	config.layout = LayoutPolicy::from_flag(args.chunked);
	config.format = FormatVersionPolicy::from_flag(args.latest_format);
	if let Some(len) = args.len {
		config.dataset_len = len;
	}

	config
}
