use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info, warn};
use rayon::prelude::*;

use hel_css_alphabetizer::{alphabetize, alphabetize_into, Error, Options};

/// Sorts declarations inside CSS rule blocks.
///
/// Reads stdin when neither `--input` nor files are given. Logging is set up with `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Stylesheet text to alphabetize
	#[arg(long, conflicts_with = "files")]
	input: Option<String>,
	/// Stylesheets to alphabetize
	files: Vec<PathBuf>,
	/// Sort Z to A
	#[arg(long)]
	descending: bool,
	/// JSON file with options, e.g. `{ "ascending": false }`
	#[arg(long)]
	config: Option<PathBuf>,
	/// Rewrite files in place
	#[arg(long, requires = "files")]
	write: bool,
	/// Fail if anything is not alphabetized, print nothing
	#[arg(long, conflicts_with = "write")]
	check: bool,
}

impl Args {
	fn options(&self) -> Result<Options, Error> {
		let mut options = match &self.config {
			Some(path) => Options::from_json(&std::fs::read_to_string(path)?)?,
			None => Options::default(),
		};

		if self.descending {
			options.ascending = false;
		}

		Ok(options)
	}
}

struct File<'a> {
	path: &'a Path,
	before: String,
	after: String,
}

impl<'a> File<'a> {
	fn read(path: &'a Path, options: &Options) -> Result<Self, Error> {
		let before = std::fs::read_to_string(path)?;
		let after = alphabetize(&before, options);

		Ok(Self {
			path,
			before,
			after,
		})
	}

	#[inline]
	fn is_sorted(&self) -> bool {
		self.before == self.after
	}
}

fn main() -> Result<(), Error> {
	env_logger::init();

	let args = Args::parse();
	let options = args.options()?;

	debug!("{options:?}");

	let mut writer = BufWriter::new(std::io::stdout());

	if !args.files.is_empty() {
		return files(&args, &options, &mut writer);
	}

	let input = match args.input {
		Some(input) => input,
		None => {
			let mut input = String::new();
			std::io::stdin().read_to_string(&mut input)?;
			input
		}
	};

	if args.check {
		if input.is_empty() {
			return Err(Error::EmptyInput);
		}

		if alphabetize(&input, &options) != input {
			return Err(Error::Unsorted(vec![PathBuf::from("<stdin>")]));
		}

		return Ok(());
	}

	alphabetize_into(input, &options, &mut writer)?;

	Ok(writer.flush()?)
}

fn files(args: &Args, options: &Options, writer: &mut impl Write) -> Result<(), Error> {
	// Every stylesheet is independent, output order follows arguments
	let files = args
		.files
		.par_iter()
		.map(|path| File::read(path, options))
		.collect::<Result<Vec<_>, _>>()?;

	let mut unsorted = Vec::new();

	for file in files {
		if args.check {
			if !file.is_sorted() {
				warn!("{} is not alphabetized", file.path.display());
				unsorted.push(file.path.to_owned());
			}
		} else if args.write {
			if !file.is_sorted() {
				std::fs::write(file.path, &file.after)?;
				info!("alphabetized {}", file.path.display());
			}
		} else {
			writer.write_all(file.after.as_bytes())?;
		}
	}

	writer.flush()?;

	if !unsorted.is_empty() {
		return Err(Error::Unsorted(unsorted));
	}

	Ok(())
}
