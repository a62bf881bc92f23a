use super::scanner::find_top_level;
use crate::consts::{ASCII, HACK_SUFFIXES, OSX};
use crate::utils::Helper;

/// A single unit of a block, either `property: value;` or a standalone comment
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Declaration<'a> {
	/// Source text, leading whitespace included
	unit: &'a str,
	/// Property name without hack marker and vendor prefix
	property: Option<&'a str>,
	/// Property name without hack marker
	original: Option<&'a str>,
	value: Option<&'a str>,

	comment: bool,
	hacked: bool,
	vendor: bool,
}

impl<'a> Declaration<'a> {
	/// Classifies a unit. Never fails, fields that could not be found are [`None`].
	pub fn new(unit: &'a str) -> Self {
		let raw = trim(unit);

		if is_comment(raw) {
			return Self {
				unit,
				comment: true,
				..Default::default()
			};
		}

		let bytes = raw.as_bytes();
		let hack = bytes.first().is_some_and(|byte| byte.is_hack_marker());

		let (original, value) = match find_top_level(raw, ASCII::COLON) {
			Some(colon) => {
				let name = &raw[hack as usize..colon];
				let rest = &raw[colon + 1..];
				let end = find_top_level(rest, ASCII::SEMICOLON).unwrap_or(rest.len());

				(Some(trim(name)), Some(trim(&rest[..end])))
			}
			None => (None, None),
		};

		let property = original.map(|name| match vendor_prefix_len(name.as_bytes()) {
			Some(len) => &name[len..],
			None => name,
		});

		let hacked =
			hack || value.is_some_and(|value| HACK_SUFFIXES.iter().any(|s| value.ends_with(s)));

		Self {
			unit,
			property,
			original,
			value,

			comment: false,
			hacked,
			vendor: vendor_prefix_len(bytes).is_some(),
		}
	}

	/// Exactly the text the declaration was built from
	#[inline(always)]
	pub fn unit(&self) -> &'a str {
		self.unit
	}

	#[inline(always)]
	pub fn property(&self) -> Option<&'a str> {
		self.property
	}

	#[inline(always)]
	pub fn original(&self) -> Option<&'a str> {
		self.original
	}

	#[inline(always)]
	pub fn value(&self) -> Option<&'a str> {
		self.value
	}

	#[inline(always)]
	pub fn is_comment(&self) -> bool {
		self.comment
	}

	/// `_width`, `*zoom` or `width: 50%\9`
	#[inline(always)]
	pub fn is_hacked(&self) -> bool {
		self.hacked
	}

	/// `-webkit-border-radius`
	#[inline(always)]
	pub fn is_vendor_prefixed(&self) -> bool {
		self.vendor
	}
}

#[inline]
fn trim(s: &str) -> &str {
	s.trim_matches(|c: char| c.is_ascii() && (c as u8).is_whitespace())
}

/// Whole unit is exactly one `/* ... */`
#[inline]
fn is_comment(raw: &str) -> bool {
	raw.len() >= 4
		&& raw.starts_with("/*")
		&& raw.ends_with("*/")
		&& raw[2..].find("*/") == Some(raw.len() - 4)
}

/// Length of a leading `-moz-` like prefix, `-moz-osx-` included
#[inline]
fn vendor_prefix_len(bytes: &[u8]) -> Option<usize> {
	if bytes.first() != Some(&ASCII::DASH) {
		return None;
	}

	let word = bytes[1..].iter().take_while(|byte| byte.is_word()).count();

	if word == 0 || bytes.get(word + 1) != Some(&ASCII::DASH) {
		return None;
	}

	let len = word + 2;

	match bytes[len..].starts_with(OSX) {
		true => Some(len + OSX.len()),
		false => Some(len),
	}
}
