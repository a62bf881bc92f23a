use serde::Deserialize;

use crate::css::Direction;
use crate::Error;

/// Alphabetizer settings, built once and passed into every block rewrite
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Options {
	/// `false` sorts property names and values Z to A
	pub ascending: bool,
}

impl Default for Options {
	#[inline]
	fn default() -> Self {
		Self { ascending: true }
	}
}

impl Options {
	#[inline]
	pub fn descending() -> Self {
		Self { ascending: false }
	}

	#[inline(always)]
	pub fn direction(&self) -> Direction {
		Direction::from(self.ascending)
	}

	/// Reads options from a JSON object. Missing keys take defaults, unknown keys are ignored.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		Ok(serde_json::from_str(json)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		assert_eq!(Options::default().direction(), Direction::Ascending);
		assert_eq!(Options::descending().direction(), Direction::Descending);
	}

	#[test]
	fn json() {
		assert_eq!(Options::from_json("{}").ok(), Some(Options::default()));
		assert_eq!(
			Options::from_json(r#"{ "ascending": false }"#).ok(),
			Some(Options::descending())
		);
		assert_eq!(
			Options::from_json(r#"{ "delimeter": "```", "ascending": true }"#).ok(),
			Some(Options::default())
		);
	}

	#[test]
	fn bad_json() {
		assert!(matches!(
			Options::from_json(r#"{ "ascending": "yes" }"#),
			Err(Error::Config(_))
		));
		assert!(Options::from_json("[").is_err());
	}
}
