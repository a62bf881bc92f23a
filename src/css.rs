use log::debug;

use crate::consts::ASCII;
use crate::Options;

pub use order::Direction;

/// Sorts declarations of every innermost `{...}` block, everything else is copied as is.
///
/// A block is a `{` followed by the first `}` with no other `{` in between, so only the deepest
/// level of nested rules gets sorted. Unmatched brackets are left alone.
pub fn alphabetize(input: &str, options: &Options) -> String {
	let mut res = String::with_capacity(input.len() + input.len() / 64);

	// `input[..copied]` is already in `res`
	let mut copied = 0;
	let mut open = None;
	let mut blocks = 0usize;

	for (pos, byte) in input.bytes().enumerate() {
		match byte {
			ASCII::CURLY_OPEN => open = Some(pos),
			ASCII::CURLY_CLOSE => {
				let Some(start) = open.take() else {
					continue;
				};

				res.push_str(&input[copied..=start]);
				res.push_str(&block::rewrite(&input[start + 1..pos], options));

				copied = pos;
				blocks += 1;
			}
			_ => {}
		}
	}

	res.push_str(&input[copied..]);

	debug!("alphabetized {blocks} blocks in {} bytes", input.len());

	res
}

mod block;
mod declaration;
mod order;
mod scanner;
mod splitter;
