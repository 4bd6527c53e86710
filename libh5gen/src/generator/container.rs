use std::path::{Path, PathBuf};

use hdf5::File;
use log::{debug, info};

use crate::error::Error;

use super::config::{FormatVersionPolicy, LayoutPolicy};

/// The HDF5 file being generated. Owns the only handle to the file; if the container is dropped without calling
/// `close` (e.g. on an error path), the handle is released as part of the drop
pub struct OutputContainer {
	file: File,
	path: PathBuf,
}

impl OutputContainer {
	/// Creates the file at `path`, truncating it if it already exists
	pub fn create(path: impl AsRef<Path>, format: FormatVersionPolicy) -> Result<Self, Error> {
		let path = path.as_ref();

		let mut builder = File::with_options();
		if format == FormatVersionPolicy::Latest {
			builder.with_fapl(|fapl| fapl.libver_latest());
		}

		let file = builder.create(path).map_err(|e| Error::ContainerCreationError(path.to_path_buf(), e.to_string()))?;

		info!("Created \"{}\" ({} file format)", path.display(), format);

		Ok(OutputContainer {
			file,
			path: path.to_path_buf(),
		})
	}

	/// Creates a one-dimensional `i64` dataset called `name` with the same length as `data` and writes `data` into it.
	/// `chunk_len` is ignored unless `layout` is `LayoutPolicy::Chunked`
	pub fn write_dataset(&self, name: &str, data: &[i64], layout: LayoutPolicy, chunk_len: usize) -> Result<(), Error> {
		if self.file.link_exists(name) {
			return Err(Error::DatasetCreationError(name.to_string(), "An object with this name already exists in the file".to_string()));
		}

		let builder = self.file.new_dataset::<i64>().shape(data.len());
		let builder = match layout {
			LayoutPolicy::Contiguous => builder,
			LayoutPolicy::Chunked => builder.chunk((chunk_len,)),
		};

		let dataset = builder.create(name).map_err(|e| Error::DatasetCreationError(name.to_string(), e.to_string()))?;
		dataset.write_raw(data).map_err(|e| Error::DatasetCreationError(name.to_string(), e.to_string()))?;

		debug!("Wrote dataset \"{}\" ({} elements, {} layout)", name, data.len(), layout);

		Ok(())
	}

	/// Flushes all pending writes and closes the file
	pub fn close(self) -> Result<(), Error> {
		self.file.flush().map_err(|e| Error::FlushError(e.to_string()))?;
		self.file.close().map_err(|e| Error::FlushError(e.to_string()))?;

		info!("Closed \"{}\"", self.path.display());

		Ok(())
	}
}
