//! JSON span extraction from free-form model output.
//!
//! The default rule takes everything between the first `{` and the last `}`
//! of the whole response. It assumes the response carries at most one JSON
//! object: stray braces in surrounding prose, or a second object, break it.
//! Callers depend only on [`JsonExtractor`], so the stricter rules below can
//! be swapped in through configuration.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::bail;

pub trait JsonExtractor: Send + Sync {
    /// Returns the candidate JSON text, or `None` if there is nothing to parse.
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// First `{` through last `}` of the entire text, inclusive.
pub struct FirstLastBrace;

impl JsonExtractor for FirstLastBrace {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

/// First brace-balanced object, ignoring braces inside string literals.
pub struct BalancedSpan;

impl JsonExtractor for BalancedSpan {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, byte) in text[start..].bytes().enumerate() {
            if in_string {
                match byte {
                    _ if escaped => escaped = false,
                    b'\\' => escaped = true,
                    b'"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match byte {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=start + offset]);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// The whole trimmed response must be the object, optionally inside one code fence.
pub struct WholeResponse;

impl JsonExtractor for WholeResponse {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let text = strip_json_fences(text);
        (text.starts_with('{') && text.ends_with('}')).then_some(text)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Configurable choice of extractor (`JSON_EXTRACTION`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    #[default]
    FirstLast,
    Balanced,
    Strict,
}

impl ExtractionMode {
    pub fn extractor(self) -> Arc<dyn JsonExtractor> {
        match self {
            ExtractionMode::FirstLast => Arc::new(FirstLastBrace),
            ExtractionMode::Balanced => Arc::new(BalancedSpan),
            ExtractionMode::Strict => Arc::new(WholeResponse),
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-last" | "first_last" => Ok(ExtractionMode::FirstLast),
            "balanced" => Ok(ExtractionMode::Balanced),
            "strict" => Ok(ExtractionMode::Strict),
            other => bail!(
                "JSON_EXTRACTION must be one of first-last, balanced, strict; got '{other}'"
            ),
        }
    }
}
