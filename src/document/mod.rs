//! Document utilities: statistics, headings and table of contents

pub mod outline;
pub mod stats;

pub use outline::{extract_headings, generate_toc, Heading};
pub use stats::{
    count_words, estimate_reading_time, format_size, TextStats, DEFAULT_WORDS_PER_MINUTE,
};
