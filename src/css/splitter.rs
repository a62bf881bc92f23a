use std::borrow::Cow;

use super::scanner::{last_significant, Scanner};
use crate::consts::ASCII;
use crate::utils::Helper;

/// A block broken into sortable units
#[derive(Debug, Default, PartialEq)]
pub struct Units<'a> {
	/// Each unit keeps its leading whitespace, so joining them back restores the block
	pub units: Vec<&'a str>,
	/// Whitespace before the closing curly bracket
	pub trailing: &'a str,
}

/// Makes sure the last declaration of a block ends with a semicolon.
///
/// The semicolon goes right after the last significant byte, before any trailing comments and
/// whitespace. Blocks with nothing but whitespace and comments are left as is.
#[inline]
pub fn normalize(block: &str) -> Cow<'_, str> {
	match last_significant(block) {
		Some((end, cur)) if cur != ASCII::SEMICOLON => {
			let mut res = String::with_capacity(block.len() + 1);

			res.push_str(&block[..end]);
			res.push(ASCII::SEMICOLON as char);
			res.push_str(&block[end..]);

			Cow::Owned(res)
		}
		_ => Cow::Borrowed(block),
	}
}

/// Splits a block into declarations and standalone comments.
///
/// A declaration runs up to the first `;` outside strings, comments and parens, and takes a
/// comment that follows it on the same line along. A declaration missing its semicolon swallows
/// the rest of the block, call [`normalize`] first.
pub fn split(block: &str) -> Units<'_> {
	let content_len = block
		.as_bytes()
		.iter()
		.rposition(|byte| !byte.is_whitespace())
		.map_or(0, |last| last + 1);

	let (body, trailing) = block.split_at(content_len);

	let mut units = Vec::new();
	let mut scanner = Scanner::new(body);

	while !scanner.is_eof() {
		let start = scanner.pos();

		scanner.skip_whitespace();

		if scanner.at_comment() {
			scanner.skip_comment();
		} else if scanner.skip_past(ASCII::SEMICOLON).is_some() {
			let mut ahead = scanner.clone();
			ahead.skip_horizontal_whitespace();

			if ahead.at_comment() {
				ahead.skip_comment();
				scanner = ahead;
			}
		}

		units.push(&body[start..scanner.pos()]);
	}

	Units { units, trailing }
}
