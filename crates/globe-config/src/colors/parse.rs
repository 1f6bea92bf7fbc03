//! Color format patterns.

use regex::Regex;
use std::sync::LazyLock;

/// `#RGB` or `#RRGGBB`.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());
