use std::cmp::Ordering;

use super::declaration::Declaration;

/// Sort direction of property names and values
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
	/// A to Z
	#[default]
	Ascending,
	/// Z to A
	Descending,
}

impl Direction {
	#[inline(always)]
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Direction::Ascending => ordering,
			Direction::Descending => ordering.reverse(),
		}
	}
}

impl From<bool> for Direction {
	#[inline]
	fn from(ascending: bool) -> Self {
		if ascending {
			Direction::Ascending
		} else {
			Direction::Descending
		}
	}
}

/// Orders two units of the same block.
///
/// Comments go after declarations and keep their relative order. Declarations are ordered by
/// property name. Units sharing a property keep standard before hack and vendor before standard
/// no matter the direction, then fall back to value and prefixed name. Strings are compared
/// byte by byte.
pub fn compare(a: &Declaration<'_>, b: &Declaration<'_>, direction: Direction) -> Ordering {
	match (a.is_comment(), b.is_comment()) {
		(true, true) => return Ordering::Equal,
		(true, false) => return Ordering::Greater,
		(false, true) => return Ordering::Less,
		(false, false) => {}
	}

	if a.property() != b.property() {
		return direction.apply(a.property().cmp(&b.property()));
	}

	// width -> _width
	a.is_hacked()
		.cmp(&b.is_hacked())
		// -webkit-border-radius -> border-radius
		.then_with(|| b.is_vendor_prefixed().cmp(&a.is_vendor_prefixed()))
		.then_with(|| direction.apply(a.value().cmp(&b.value())))
		// -moz-border-radius -> -webkit-border-radius
		.then_with(|| direction.apply(a.original().cmp(&b.original())))
}
