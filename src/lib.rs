//! Sorts declarations inside CSS rule blocks into a canonical order.
//!
//! ```
//! use hel_css_alphabetizer::{alphabetize, Options};
//!
//! let css = "a { width: 50%; -webkit-width: 50%; _width: 50%; color: red }";
//!
//! assert_eq!(
//! 	alphabetize(css, &Options::default()),
//! 	"a { color: red; -webkit-width: 50%; width: 50%; _width: 50%; }"
//! );
//! ```

use std::path::PathBuf;

pub use css::{alphabetize, Direction};
pub use options::Options;

#[derive(thiserror::Error)]
#[allow(clippy::upper_case_acronyms)]
pub enum Error {
	#[error("Input is empty")]
	EmptyInput,
	#[error("Invalid config: {0}")]
	Config(#[from] serde_json::Error),
	#[error("{} not alphabetized: {:?}", .0.len(), .0)]
	Unsorted(Vec<PathBuf>),
	#[error(transparent)]
	IO(#[from] std::io::Error),
}

// `main` returns this error, so its `Debug` is what the user reads
impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(self, f)
	}
}

/// Alphabetizes `input` and writes the result into `output`
pub fn alphabetize_into<S: AsRef<str>>(
	input: S,
	options: &Options,
	output: &mut impl std::io::Write,
) -> Result<(), Error> {
	let input = input.as_ref();

	if input.is_empty() {
		return Err(Error::EmptyInput);
	};

	output.write_all(alphabetize(input, options).as_bytes())?;

	Ok(())
}

pub(crate) mod consts;
pub(crate) mod css;
mod options;
mod utils;
