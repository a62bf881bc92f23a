use std::borrow::Cow;

use log::trace;

use super::declaration::Declaration;
use super::order::compare;
use super::splitter::{self, Units};
use crate::Options;

/// Rewrites the inner text of one `{...}` block with its declarations sorted.
///
/// Blocks holding nothing but whitespace come back untouched.
pub fn rewrite<'a>(block: &'a str, options: &Options) -> Cow<'a, str> {
	let normalized = splitter::normalize(block);
	let Units { units, trailing } = splitter::split(&normalized);

	if units.is_empty() {
		return Cow::Borrowed(block);
	}

	trace!(
		"sorting {} units{}",
		units.len(),
		if matches!(normalized, Cow::Owned(_)) {
			", semicolon inserted"
		} else {
			""
		}
	);

	let direction = options.direction();

	let mut decls: Vec<_> = units.into_iter().map(Declaration::new).collect();

	// Stable, equal units keep their order
	decls.sort_by(|a, b| compare(a, b, direction));

	let mut res = String::with_capacity(normalized.len());

	for decl in decls {
		res.push_str(decl.unit());
	}

	res.push_str(trailing);

	Cow::Owned(res)
}
