//! `Link` header parsing.
//!
//! The API signals pagination through a `Link` header of the form
//! `<URL>; rel="first", <URL>; rel="next"`. [`LinkMap`] maps every
//! relation label in one header value to its URL.

use crate::error::LinkError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Relation label of the first page.
pub const REL_FIRST: &str = "first";

/// Relation label of the following page.
pub const REL_NEXT: &str = "next";

/// Mapping from relation label to URL, parsed from one `Link` header value.
///
/// Labels are unique: a header naming the same relation twice is rejected
/// rather than silently overwritten.
///
/// # Examples
///
/// ```
/// use fetch_zone::link::LinkMap;
///
/// let links = LinkMap::parse(r#"<https://x/a>; rel="first", <https://x/b>; rel="next""#).unwrap();
/// assert_eq!(links.get("first"), Some("https://x/a"));
/// assert_eq!(links.next(), Some("https://x/b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: BTreeMap<String, String>,
}

impl LinkMap {
    /// Parses a raw `Link` header value.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MalformedSegment`] for a segment that is not
    /// `<URL>; params`, [`LinkError::MissingRelation`] when a segment has no
    /// `rel` parameter and [`LinkError::DuplicateRelation`] when a label
    /// repeats.
    pub fn parse(header: &str) -> Result<Self, LinkError> {
        let mut links = BTreeMap::new();

        for segment in split_segments(header) {
            let (url, rel) = parse_segment(segment)?;
            if links.contains_key(&rel) {
                return Err(LinkError::DuplicateRelation { rel });
            }
            links.insert(rel, url);
        }

        Ok(Self { links })
    }

    /// Returns the URL for a relation label.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    /// Returns the URL for a relation label that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingLink`] if the label is absent.
    pub fn require(&self, rel: &str) -> Result<&str, LinkError> {
        self.get(rel).ok_or_else(|| LinkError::MissingLink {
            rel: rel.to_string(),
        })
    }

    /// URL of the next page, if any.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.get(REL_NEXT)
    }
}

#[allow(clippy::expect_used)]
fn rel_regex() -> &'static Regex {
    static REL: OnceLock<Regex> = OnceLock::new();
    REL.get_or_init(|| Regex::new(r#"(?:^|;)\s*rel\s*=\s*"([^"]*)""#).expect("valid regex"))
}

/// Splits a header value on commas that sit outside `<...>`.
fn split_segments(header: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut in_url = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => in_url = true,
            '>' => in_url = false,
            ',' if !in_url => {
                segments.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&header[start..]);

    segments
}

fn parse_segment(segment: &str) -> Result<(String, String), LinkError> {
    let trimmed = segment.trim();
    let malformed = || LinkError::MalformedSegment {
        segment: trimmed.to_string(),
    };

    let rest = trimmed.strip_prefix('<').ok_or_else(malformed)?;
    let (url, params) = rest.split_once('>').ok_or_else(malformed)?;
    let params = params.trim_start();
    if url.is_empty() || !params.starts_with(';') {
        return Err(malformed());
    }

    let rel = rel_regex()
        .captures(params)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| LinkError::MissingRelation {
            segment: trimmed.to_string(),
        })?;

    Ok((url.to_string(), rel.as_str().to_string()))
}
