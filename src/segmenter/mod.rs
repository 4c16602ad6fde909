mod cascade;
mod local_splitter;
mod segmented_number;
pub(crate) mod helper_constants;
pub mod errors;
pub mod segmenter;

use std::sync::LazyLock;

pub use errors::{InputError, SegmentError};
pub use segmented_number::SegmentedNumber;
use crate::{rules::declarations::load_builtin_rules, segmenter::segmenter::Segmenter};

/// Segmenter over the compiled-in rule table, built on first use.
pub static SEGMENTER: LazyLock<Segmenter> = LazyLock::new(|| {
    match load_builtin_rules() {
        Ok(registry) => Segmenter::new(registry),
        Err(err) => panic!("Compiled-in rule table is invalid: {}", err),
    }
});
