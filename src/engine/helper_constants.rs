// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15.
pub const MAX_LENGTH_FOR_NSN: usize = 15;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Plus signs accepted at the start of an input: ASCII and fullwidth.
pub const PLUS_CHARS: &str = "+\u{FF0B}";
pub const PLUS_SIGN: &str = "+";

// Punctuation accepted between digit groups of formatted output. This
// consists of dash characters, white space characters, full stops, slashes,
// square brackets, parentheses and tildes, with fullwidth variants.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const RFC3966_PREFIX: &str = "tel:";
