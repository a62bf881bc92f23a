use hel_css_alphabetizer::Options;

pub struct Case {
	pub complexity: usize,
	pub order: usize,

	pub name: String,

	pub options: Options,

	pub before: String,
	pub after: String,
}

impl std::fmt::Debug for Case {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"c: {}, o: {}, name: {}",
			self.complexity, self.order, self.name
		)
	}
}

/// Reads `tests/css/<complexity>-<group>/<order>-<name>/` directories, each holding
/// `before.css`, `after.css` and optionally `options.json`
pub fn get_test_cases() -> impl Iterator<Item = Case> {
	let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/css");

	let mut cases: Vec<_> = std::fs::read_dir(root)
		.expect("Cannot find css dir in tests")
		.flatten()
		// filter non directories
		.filter(|dir| dir.file_type().unwrap().is_dir())
		// read each directory by complexity
		.flat_map(|dir| {
			let dir_name = dir.file_name().into_string().unwrap();

			let complexity = dir_name
				.split_once('-')
				.unwrap()
				.0
				.parse::<usize>()
				.unwrap();

			std::fs::read_dir(dir.path())
				.unwrap()
				.flatten()
				.map(move |order_dir| (complexity, order_dir))
		})
		.flat_map(|(complexity, dir)| {
			let dir_name = dir.file_name().into_string().ok()?;
			let split = dir_name.split_once('-')?;

			let order = split.0.parse::<usize>().unwrap_or(0);
			let name = split.1.to_owned();

			let path = dir.path();
			let read = |file: &str| std::fs::read_to_string(path.join(file));

			let options = match read("options.json") {
				Ok(json) => Options::from_json(&json).expect("Invalid options.json"),
				Err(_) => Options::default(),
			};

			Some(Case {
				complexity,
				order,

				name,

				options,

				before: read("before.css").ok()?,
				after: read("after.css").ok()?,
			})
		})
		.collect();

	cases.sort_by_key(|case| (case.complexity, case.order));

	cases.into_iter()
}

#[derive(Debug)]
pub struct Difference<'a> {
	pub row: usize,
	pub col: usize,
	pub actual: &'a str,
	pub expected: &'a str,
}

pub fn differentiate<'a>(result: &'a str, should_be: &'a str) -> Result<(), Difference<'a>> {
	if result == should_be {
		return Ok(());
	}

	for (row, (actual, expected)) in result.lines().zip(should_be.lines()).enumerate() {
		if actual == expected {
			continue;
		}

		let col = actual
			.bytes()
			.zip(expected.bytes())
			.position(|(a, b)| a != b)
			.unwrap_or_else(|| actual.len().min(expected.len()));

		return Err(Difference {
			row,
			col,
			actual,
			expected,
		});
	}

	let (actual, expected) = (result.lines().count(), should_be.lines().count());

	if actual != expected {
		return Err(Difference {
			row: actual.min(expected),
			col: 0,
			actual: result.lines().nth(expected).unwrap_or_default(),
			expected: should_be.lines().nth(actual).unwrap_or_default(),
		});
	}

	// CRLF vs LF difference ignored
	Ok(())
}

/// Expected lines around the difference, with the mismatching line shown both ways
pub fn format_error_message(should_be: &str, diff: Difference<'_>) -> String {
	use hel_colored::Colored;
	use std::fmt::Write;

	const CONTEXT: usize = 3;

	let first = diff.row.saturating_sub(CONTEXT);
	let width = (diff.row + CONTEXT + 1).to_string().len();

	let mut res = String::new();
	let mut shown = false;

	let mismatch = |res: &mut String, num: usize| {
		let expected = format!("{num:>width$} > {}", diff.expected);
		let actual = format!("{num:>width$} x {}", diff.actual);

		writeln!(res, "{}", expected.on_rgb(0, 60, 0)).unwrap();
		writeln!(res, "{}", actual.on_rgb(60, 0, 0)).unwrap();
	};

	for (row, line) in should_be
		.lines()
		.enumerate()
		.skip(first)
		.take(diff.row - first + CONTEXT + 1)
	{
		if row == diff.row {
			mismatch(&mut res, row + 1);
			shown = true;
		} else {
			writeln!(res, "{:>width$} | {line}", row + 1).unwrap();
		}
	}

	if !shown {
		mismatch(&mut res, diff.row + 1);
	}

	res
}
