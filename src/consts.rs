#[allow(clippy::upper_case_acronyms)]
pub struct ASCII {}

impl ASCII {
	pub const ASTERISK: u8 = b'*';
	pub const BACK_SLASH: u8 = b'\\';
	pub const COLON: u8 = b':';
	pub const CR: u8 = b'\r';
	pub const CURLY_CLOSE: u8 = b'}';
	pub const CURLY_OPEN: u8 = b'{';
	pub const DASH: u8 = b'-';
	pub const DOUBLE_QUOTE: u8 = b'"';
	pub const FF: u8 = b'\x0C';
	pub const FORWARD_SLASH: u8 = b'/';
	pub const LF: u8 = b'\n';
	pub const PAREN_CLOSE: u8 = b')';
	pub const PAREN_OPEN: u8 = b'(';
	pub const SEMICOLON: u8 = b';';
	pub const SINGLE_QUOTE: u8 = b'\'';
	pub const SPACE: u8 = b' ';
	pub const TAB: u8 = b'\t';
	pub const UNDERSCORE: u8 = b'_';
}

/// Vendor sub-prefix, as in `-moz-osx-font-smoothing`
pub const OSX: &[u8] = b"osx-";

/// IE hack suffixes, as in `width: 50%\9;`
pub const HACK_SUFFIXES: [&str; 2] = ["\\9", "\\0"];
