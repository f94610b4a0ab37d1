//! Filename matching
//!
//! All matching is locale-independent ASCII case folding, the same
//! comparison the original tool applied. The substring scan is the naive
//! every-offset one; filenames are short enough that anything cleverer
//! would not pay for itself.

/// Immutable match criteria, shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    /// Case-insensitive substring to look for (empty matches everything)
    pub needle: String,

    /// Extension allow-list, already parsed from CSV (None = no filter)
    pub extensions: Option<Vec<String>>,

    /// Match against the full path instead of the file name
    pub match_full_path: bool,
}

impl MatchCriteria {
    /// Build criteria from the raw CLI inputs
    pub fn new(needle: String, ext_csv: &str, match_full_path: bool) -> Self {
        Self {
            needle,
            extensions: parse_ext_filter(ext_csv),
            match_full_path,
        }
    }

    /// Full match decision for one file: extension filter first, then the
    /// substring predicate against the name or the full path.
    pub fn matches_file(&self, name: &str, full_path: &str) -> bool {
        if !extension_allowed(name, self.extensions.as_deref()) {
            return false;
        }
        let target = if self.match_full_path { full_path } else { name };
        contains_ignore_case(target, &self.needle)
    }
}

/// Parse a comma-separated extension list ("c,h,cpp", no dots).
///
/// Tokens are trimmed; empty tokens are dropped. An empty or all-empty
/// list means "no filter" and is represented as `None`.
pub fn parse_ext_filter(csv: &str) -> Option<Vec<String>> {
    let tokens: Vec<String> = csv
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens)
    }
}

/// True if `needle` occurs anywhere in `haystack` under ASCII case folding.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let hay = haystack.as_bytes();
    let ndl = needle.as_bytes();
    if ndl.len() > hay.len() {
        return false;
    }

    hay.windows(ndl.len()).any(|w| w.eq_ignore_ascii_case(ndl))
}

/// True if `name`'s extension is allowed by the filter.
///
/// The extension is the suffix after the last `.`. With an active filter,
/// a name with no dot or an empty suffix is rejected.
pub fn extension_allowed(name: &str, filter: Option<&[String]>) -> bool {
    let Some(allowed) = filter else {
        return true;
    };

    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => {
            allowed.iter().any(|a| a.eq_ignore_ascii_case(ext))
        }
        _ => false,
    }
}
