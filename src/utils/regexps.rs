use once_cell::sync::Lazy;
use regex::Regex;

/// Positive integer, no sign, no leading zeros.
pub static RE_POSITIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d*$").expect("invalid positive regex"));
