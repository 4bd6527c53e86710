use clap::Parser;
use clap_verbosity_flag::InfoLevel;

#[derive(Debug, Parser)]
#[command(version, about = "Create a test file for HDF5 dataset read profiling", long_about = None)]
pub struct Args {
	#[command(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity<InfoLevel>,
	/// The name of the file to create. An existing file is overwritten
	pub file: String,
	/// Create chunked datasets (10 elements per chunk unless the config file says otherwise) instead of contiguous ones
	#[arg(short = 'c')]
	pub chunked: bool,
	/// Use the latest file format
	#[arg(short = 'F')]
	pub latest_format: bool,
	/// Path to the TOML config file. Defaults to "H5Gen.toml" in the current working directory if it exists, otherwise built-in defaults are used
	#[arg(long)]
	pub config: Option<String>,
	/// Number of elements in each dataset. Overrides the config file. Defaults to 67108864 (64 Mi)
	#[arg(long)]
	pub len: Option<usize>
}
