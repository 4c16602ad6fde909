mod regexp_cache;
pub mod normalize;
pub mod registry;
pub mod rules;
pub mod segmenter;
pub mod regex_util;

#[cfg(test)]
mod tests;

pub use regex_util::{Anchoring, Pattern};
pub use regexp_cache::InvalidRegexError;
pub use registry::CountryRegistry;
pub use rules::{
    CountryRule, DisplayOptions, NdcAlternative, NdcMatcher, OneOf, SplitSpec, TrunkPrefix,
    TrunkSpec,
    errors::{RuleLoadError, RuleTableError},
};
pub use segmenter::{InputError, SEGMENTER, SegmentError, SegmentedNumber, segmenter::Segmenter};
