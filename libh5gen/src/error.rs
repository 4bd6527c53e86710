use std::{fmt::Display, io, path::PathBuf};

macro_rules! impl_from_for_variant {
	($variant: path, $contained_type: ty) => {
		impl From<$contained_type> for Error {
			fn from(value: $contained_type) -> Self {
				$variant(value)
			}
		}
	};
}

#[derive(Debug)]
pub enum Error {
	/// The output file could not be created or truncated
	ContainerCreationError(PathBuf, String),
	/// A dataset could not be created or its contents could not be written. Holds the dataset name
	DatasetCreationError(String, String),
	/// Flushing or closing the output file failed
	FlushError(String),
	InvalidArgumentError(String),
	ConfigValidationError(String),
	ConfigParseError(String),
	IoError(io::Error),
}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::ContainerCreationError(path, e) => write!(f, "Could not create output file \"{}\": {}", path.display(), e),
			Error::DatasetCreationError(name, e) => write!(f, "Could not create dataset \"{}\": {}", name, e),
			Error::FlushError(e) => write!(f, "Could not flush and close output file: {}", e),
			Error::InvalidArgumentError(e) => write!(f, "Invalid argument: {}", e),
			Error::ConfigValidationError(e) => write!(f, "Config validation error: {}", e),
			Error::ConfigParseError(e) => write!(f, "Config parse error: {}", e),
			Error::IoError(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::IoError(e) => Some(e),
			_ => None
		}
	}
}

impl_from_for_variant!(Error::IoError, io::Error);
