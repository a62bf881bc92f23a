use crate::consts::ASCII;
use crate::utils::{CharHelper, Helper};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
	Normal,
	/// Inside a string opened with the contained quote byte
	Quoted(u8),
	Comment,
}

/// A byte cursor that knows whether it is inside a string, a comment or a parenthesized group.
///
/// Only ASCII bytes drive transitions and other chars are stepped over whole, so every position
/// it stops at is a char boundary.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
	buf: &'a [u8],
	// Current position (index)
	pos: usize,
	mode: Mode,
	depth: u32,
}

impl<'a> Scanner<'a> {
	#[inline]
	pub fn new(input: &'a str) -> Self {
		Self {
			buf: input.as_bytes(),
			pos: 0,
			mode: Mode::Normal,
			depth: 0,
		}
	}

	#[inline(always)]
	pub fn advance(&mut self, amount: usize) {
		self.pos += amount
	}

	#[inline(always)]
	pub fn is_eof(&self) -> bool {
		self.pos() >= self.buf.len()
	}

	#[inline(always)]
	pub fn pos(&self) -> usize {
		self.pos
	}

	#[inline(always)]
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Neither inside a string, a comment nor parens
	#[inline(always)]
	pub fn is_top_level(&self) -> bool {
		self.mode == Mode::Normal && self.depth == 0
	}

	#[inline(always)]
	pub fn peek(&self) -> Option<u8> {
		self.buf.get(self.pos()).copied()
	}

	#[inline(always)]
	fn peek_at(&self, offset: usize) -> Option<u8> {
		self.buf.get(self.pos() + offset).copied()
	}

	/// Steps over one token-ish piece of input and returns the byte it started at.
	///
	/// Comment openers/closers and escape sequences are consumed whole, so a `;` or `:` escaped
	/// with a backslash is never reported on its own.
	#[inline]
	pub fn step(&mut self) -> Option<u8> {
		let cur = self.peek()?;
		let next = self.peek_at(1);

		match self.mode {
			Mode::Comment => {
				if cur == ASCII::ASTERISK && next == Some(ASCII::FORWARD_SLASH) {
					self.mode = Mode::Normal;
					self.advance(2);
				} else {
					self.advance(cur.char_len());
				}
			}

			Mode::Quoted(quote) => match cur {
				ASCII::BACK_SLASH => self.skip_escape(),
				// Unescaped newline - bad string, recover on the next line
				ASCII::LF => {
					self.mode = Mode::Normal;
					self.advance(1);
				}
				_ => {
					if cur == quote {
						self.mode = Mode::Normal;
					}

					self.advance(cur.char_len());
				}
			},

			Mode::Normal => match cur {
				ASCII::FORWARD_SLASH if next == Some(ASCII::ASTERISK) => {
					self.mode = Mode::Comment;
					self.advance(2);
				}
				ASCII::BACK_SLASH => self.skip_escape(),
				_ => {
					match cur {
						ASCII::SINGLE_QUOTE | ASCII::DOUBLE_QUOTE => self.mode = Mode::Quoted(cur),
						ASCII::PAREN_OPEN => self.depth += 1,
						ASCII::PAREN_CLOSE => self.depth = self.depth.saturating_sub(1),
						_ => {}
					}

					self.advance(cur.char_len());
				}
			},
		}

		// Truncated input
		self.pos = self.pos.min(self.buf.len());

		Some(cur)
	}

	/// Steps over a backslash and the char it escapes
	#[inline(always)]
	fn skip_escape(&mut self) {
		self.advance(1);

		if let Some(escaped) = self.peek() {
			self.advance(escaped.char_len());
		}
	}

	/// Steps until `byte` is found at top level and stops right after it.
	///
	/// Returns the position of that byte, or [`None`] when input ran out first.
	#[inline]
	pub fn skip_past(&mut self, byte: u8) -> Option<usize> {
		loop {
			let at = self.pos();
			let top_level = self.is_top_level();

			let cur = self.step()?;

			if top_level && cur == byte {
				return Some(at);
			}
		}
	}

	/// Steps over any whitespace
	#[inline]
	pub fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|x| x.is_whitespace()) {
			self.advance(1);
		}
	}

	/// Steps over any spaces and tabs
	#[inline]
	pub fn skip_horizontal_whitespace(&mut self) {
		while self.peek().is_some_and(|x| x.is_horizontal_whitespace()) {
			self.advance(1);
		}
	}

	/// Checks if a comment starts at the current position
	#[inline(always)]
	pub fn at_comment(&self) -> bool {
		self.mode == Mode::Normal
			&& self.peek() == Some(ASCII::FORWARD_SLASH)
			&& self.peek_at(1) == Some(ASCII::ASTERISK)
	}

	/// Steps over a whole comment, the cursor must be [`at_comment`](Self::at_comment).
	///
	/// An unterminated comment swallows the rest of the input.
	#[inline]
	pub fn skip_comment(&mut self) {
		debug_assert!(self.at_comment());

		self.step();

		while self.mode == Mode::Comment && self.step().is_some() {}
	}
}

/// Position of the first `byte` outside strings, comments and parens
#[inline]
pub fn find_top_level(text: &str, byte: u8) -> Option<usize> {
	Scanner::new(text).skip_past(byte)
}

/// End of the last piece of input that is neither whitespace nor part of a comment,
/// along with the byte that piece ends with.
///
/// An escape is a single piece, so `\;` ends with a semicolon.
#[inline]
pub fn last_significant(text: &str) -> Option<(usize, u8)> {
	let mut scanner = Scanner::new(text);
	let mut last = None;

	loop {
		let in_comment = scanner.mode() == Mode::Comment || scanner.at_comment();

		let Some(cur) = scanner.step() else {
			break;
		};

		if in_comment || cur.is_whitespace() {
			continue;
		}

		let end = scanner.pos();

		last = Some((end, text.as_bytes()[end - 1]));
	}

	last
}
