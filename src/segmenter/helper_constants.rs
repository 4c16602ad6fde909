/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

// Characters callers commonly put between digit groups. They are dropped by
// input normalization. Full-width and non-breaking variants are included.
pub const VALID_PUNCTUATION: &'static str = "-.()[]/~ \u{00A0}\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\
\u{2015}\u{2212}\u{3000}\u{FF08}\u{FF09}\u{FF0D}\u{FF0E}\u{FF0F}";

/// Rule table compiled into the crate, see `rules::declarations` for the format.
pub const BUILTIN_RULES: &'static str = include_str!("../../resources/countries.json");
