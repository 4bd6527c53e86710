use std::path::PathBuf;

use serde::Deserialize;
use strum::Display;

use crate::error::Error;

/// 64 Mi elements, 512 MiB of `i64` per dataset
pub const DEFAULT_DATASET_LEN: usize = 64 * 1024 * 1024;
pub const DEFAULT_CHUNK_LEN: usize = 10;
pub const DEFAULT_DATASET_NAMES: [&str; 8] = [ "a", "b", "c", "d", "e", "f", "g", "h" ];

/// How each dataset is stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LayoutPolicy {
	Contiguous,
	Chunked
}

/// Which HDF5 library version bounds the output file is created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FormatVersionPolicy {
	/// The library's default, earliest-compatible bounds
	Default,
	/// Newest revision for both the low and high bound
	Latest
}

/// Contents of the optional TOML config file
#[derive(Deserialize, Debug, PartialEq, Default)]
pub struct FileConfig {
	#[serde(default)]
	pub dataset: DatasetSection,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct DatasetSection {
	#[serde(default = "default_dataset_len")]
	pub len: usize,
	#[serde(default = "default_chunk_len")]
	pub chunk_len: usize,
	#[serde(default = "default_dataset_names")]
	pub names: Vec<String>,
}

/// Everything the generator needs to produce one file
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
	pub path: PathBuf,
	pub layout: LayoutPolicy,
	pub format: FormatVersionPolicy,
	pub dataset_len: usize,
	/// Only used when `layout` is `LayoutPolicy::Chunked`
	pub chunk_len: usize,
	pub dataset_names: Vec<String>,
}

impl LayoutPolicy {
	pub fn from_flag(chunked: bool) -> Self {
		if chunked { LayoutPolicy::Chunked } else { LayoutPolicy::Contiguous }
	}
}

impl FormatVersionPolicy {
	pub fn from_flag(latest: bool) -> Self {
		if latest { FormatVersionPolicy::Latest } else { FormatVersionPolicy::Default }
	}
}

impl GeneratorConfig {
	/// Creates a config for the standard fixture: eight contiguous datasets `a`..`h` of `DEFAULT_DATASET_LEN` elements,
	/// using the default file format
	pub fn new(path: impl Into<PathBuf>) -> Self {
		GeneratorConfig {
			path: path.into(),
			layout: LayoutPolicy::Contiguous,
			format: FormatVersionPolicy::Default,
			dataset_len: DEFAULT_DATASET_LEN,
			chunk_len: DEFAULT_CHUNK_LEN,
			dataset_names: default_dataset_names(),
		}
	}

	/// Replaces the dataset parameters with those from a parsed config file
	pub fn with_file_config(mut self, file_config: FileConfig) -> Self {
		self.dataset_len = file_config.dataset.len;
		self.chunk_len = file_config.dataset.chunk_len;
		self.dataset_names = file_config.dataset.names;
		self
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.path.as_os_str().is_empty() {
			return Err(Error::InvalidArgumentError("No output file path was given".to_string()));
		}
		if self.dataset_len == 0 {
			return Err(Error::ConfigValidationError("Dataset length must be at least 1".to_string()));
		}
		if self.layout == LayoutPolicy::Chunked {
			if self.chunk_len == 0 {
				return Err(Error::ConfigValidationError("Chunk length must be at least 1".to_string()));
			}
			// Fixed-size datasets can't have chunks larger than themselves
			if self.chunk_len > self.dataset_len {
				return Err(Error::ConfigValidationError(format!("Chunk length {} is larger than the dataset length {}", self.chunk_len, self.dataset_len)));
			}
		}
		if self.dataset_names.is_empty() {
			return Err(Error::ConfigValidationError("At least one dataset name is required".to_string()));
		}
		if self.dataset_names.iter().any(|name| name.is_empty()) {
			return Err(Error::ConfigValidationError("Dataset names must not be empty".to_string()));
		}

		Ok(())
	}
}

impl Default for DatasetSection {
	fn default() -> Self {
		DatasetSection {
			len: DEFAULT_DATASET_LEN,
			chunk_len: DEFAULT_CHUNK_LEN,
			names: default_dataset_names(),
		}
	}
}

fn default_dataset_len() -> usize {
	DEFAULT_DATASET_LEN
}

fn default_chunk_len() -> usize {
	DEFAULT_CHUNK_LEN
}

fn default_dataset_names() -> Vec<String> {
	DEFAULT_DATASET_NAMES.iter().map(|s| s.to_string()).collect()
}
