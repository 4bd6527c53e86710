pub mod config;
pub mod container;

use std::{path::PathBuf, time::{Duration, Instant}};

use crate::{error::Error, utils::source_array};

use self::{config::{FormatVersionPolicy, GeneratorConfig, LayoutPolicy}, container::OutputContainer};

/// Produces one fixture file from a validated `GeneratorConfig`
pub struct Generator {
	config: GeneratorConfig,
}

/// What a successful `Generator::generate` call wrote
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
	pub path: PathBuf,
	pub datasets: usize,
	pub dataset_len: usize,
	pub layout: LayoutPolicy,
	pub format: FormatVersionPolicy,
	pub elapsed: Duration,
}

impl Generator {
	/// Creates a new `Generator` with the specified config, validating it and returning an error if it
	/// did not successfully validate
	pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
		match config.validate() {
			Ok(_) => Ok(Generator {
				config
			}),
			Err(e) => Err(e)
		}
	}

	/// Creates the output file, fills every configured dataset with `0..dataset_len` in order, and closes the file.
	///
	/// Stops at the first error. Whatever was written up to that point is left on disk
	pub fn generate(&self) -> Result<GenerationSummary, Error> {
		let start = Instant::now();

		let container = OutputContainer::create(&self.config.path, self.config.format)?;

		let source = source_array(self.config.dataset_len);

		for name in &self.config.dataset_names {
			container.write_dataset(name, &source, self.config.layout, self.config.chunk_len)?;
		}

		container.close()?;

		Ok(GenerationSummary {
			path: self.config.path.clone(),
			datasets: self.config.dataset_names.len(),
			dataset_len: self.config.dataset_len,
			layout: self.config.layout,
			format: self.config.format,
			elapsed: start.elapsed(),
		})
	}
}

#[cfg(test)]
mod test {
	use hdf5::File;

	use crate::{error::Error, utils::init_test_logger};

	use super::{config::{FormatVersionPolicy, GeneratorConfig, LayoutPolicy}, Generator};

	fn small_config(path: impl Into<std::path::PathBuf>) -> GeneratorConfig {
		let mut config = GeneratorConfig::new(path);
		config.dataset_len = 1000;
		config
	}

	#[test]
	fn test_generate_writes_every_dataset() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("test.dat");

		let mut config = small_config(&path);
		config.layout = LayoutPolicy::Chunked;

		let summary = Generator::new(config).unwrap().generate().unwrap();
		assert_eq!(summary.path, path);
		assert_eq!(summary.datasets, 8);
		assert_eq!(summary.dataset_len, 1000);
		assert_eq!(summary.layout, LayoutPolicy::Chunked);
		assert_eq!(summary.format, FormatVersionPolicy::Default);

		let file = File::open(&path).unwrap();
		assert_eq!(file.member_names().unwrap(), vec![ "a", "b", "c", "d", "e", "f", "g", "h" ]);

		let expected: Vec<i64> = (0..1000).collect();
		for name in file.member_names().unwrap() {
			let ds = file.dataset(&name).unwrap();
			assert_eq!(ds.chunk(), Some(vec![10]));
			assert_eq!(ds.read_raw::<i64>().unwrap(), expected);
		}
	}

	#[test]
	fn test_new_rejects_invalid_config() {
		assert!(matches!(Generator::new(GeneratorConfig::new("")), Err(Error::InvalidArgumentError(_))));

		let mut config = small_config("out.h5");
		config.dataset_len = 0;
		assert!(matches!(Generator::new(config), Err(Error::ConfigValidationError(_))));
	}

	#[test]
	fn test_duplicate_name_aborts_after_partial_write() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("dupe.h5");

		let mut config = small_config(&path);
		config.dataset_names = vec![ "a".to_string(), "b".to_string(), "a".to_string(), "c".to_string() ];

		match Generator::new(config).unwrap().generate() {
			Err(Error::DatasetCreationError(name, _)) => assert_eq!(name, "a"),
			other => panic!("Expected DatasetCreationError, got {:?}", other)
		}

		// The half-written file stays behind, without the datasets after the failure
		let file = File::open(&path).unwrap();
		assert_eq!(file.member_names().unwrap(), vec![ "a", "b" ]);
	}
}
