use crate::consts::ASCII;

pub trait Helper {
	fn is_whitespace(&self) -> bool;
	fn is_horizontal_whitespace(&self) -> bool;
	fn is_word(&self) -> bool;
	fn is_hack_marker(&self) -> bool;
}

pub trait CharHelper {
	/// Length of UTF-8 sequence starting with this byte
	fn char_len(&self) -> usize;
}

impl CharHelper for u8 {
	#[inline(always)]
	fn char_len(&self) -> usize {
		match *self {
			0xF0.. => 4,
			0xE0.. => 3,
			0xC0.. => 2,
			_ => 1,
		}
	}
}

impl Helper for u8 {
	#[inline(always)]
	fn is_whitespace(&self) -> bool {
		matches!(
			*self,
			ASCII::SPACE | ASCII::TAB | ASCII::LF | ASCII::CR | ASCII::FF
		)
	}

	#[inline(always)]
	fn is_horizontal_whitespace(&self) -> bool {
		matches!(*self, ASCII::SPACE | ASCII::TAB)
	}

	/// Same as regex `\w`
	#[inline(always)]
	fn is_word(&self) -> bool {
		matches!(self, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
	}

	#[inline(always)]
	fn is_hack_marker(&self) -> bool {
		matches!(*self, ASCII::UNDERSCORE | ASCII::ASTERISK)
	}
}
