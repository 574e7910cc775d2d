//! Word segmentation for mixed CJK / Latin text.
//!
//! Two tiers sit behind the [`Segmenter`] trait:
//!
//! - [`UnicodeSegmenter`] walks the text once and classifies every character,
//!   emitting word-like runs (letters, digits, underscores, CJK ideographs)
//!   interleaved with non-word segments (whitespace, punctuation, symbols).
//! - [`RegexSegmenter`] is the reduced fallback: it only extracts runs of CJK
//!   ideographs followed by runs of ASCII letters, every one word-like.
//!
//! Both tiers treat a run of consecutive ideographs as a single token. The
//! per-character CJK rule used for word *counting* lives in
//! [`count_words`](super::helpers::count_words).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static CJK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}\x{3400}-\x{4dbf}]+").expect("valid regex"));
static LATIN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid regex"));

/// A slice of the input text and whether it reads as a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_word_like: bool,
}

impl<'a> Segment<'a> {
    fn word(text: &'a str) -> Self {
        Self {
            text,
            is_word_like: true,
        }
    }

    fn other(text: &'a str) -> Self {
        Self {
            text,
            is_word_like: false,
        }
    }
}

/// Splits text into ordered segments.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>>;

    /// Only the word-like segments, in order.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.segment(text)
            .into_iter()
            .filter(|s| s.is_word_like)
            .map(|s| s.text)
            .collect()
    }
}

/// CJK Unified Ideographs plus Extension A.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
}

fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_') && !is_cjk_ideograph(c)
}

/// Characters that join two word characters without breaking the word
/// ("don't", "user.name").
fn is_mid_word(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Cjk,
    Word,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if is_cjk_ideograph(c) {
        CharClass::Cjk
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Other
    }
}

/// Primary single-pass segmenter.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (start, c) = chars[i];
            let class = classify(c);
            let mut j = i + 1;

            match class {
                CharClass::Space | CharClass::Cjk => {
                    while j < chars.len() && classify(chars[j].1) == class {
                        j += 1;
                    }
                }
                CharClass::Word => {
                    while j < chars.len() {
                        let next = chars[j].1;
                        if is_word_char(next) {
                            j += 1;
                        } else if is_mid_word(next)
                            && chars.get(j + 1).is_some_and(|&(_, after)| is_word_char(after))
                        {
                            j += 2;
                        } else {
                            break;
                        }
                    }
                }
                CharClass::Other => {}
            }

            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            let slice = &text[start..end];
            segments.push(match class {
                CharClass::Cjk | CharClass::Word => Segment::word(slice),
                CharClass::Space | CharClass::Other => Segment::other(slice),
            });
            i = j;
        }

        segments
    }
}

/// Fallback segmenter: CJK runs first, then ASCII letter runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSegmenter;

impl Segmenter for RegexSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        CJK_RUN_RE
            .find_iter(text)
            .chain(LATIN_RUN_RE.find_iter(text))
            .map(|m| Segment::word(m.as_str()))
            .collect()
    }
}

static UNICODE_SEGMENTER: UnicodeSegmenter = UnicodeSegmenter;
static REGEX_SEGMENTER: RegexSegmenter = RegexSegmenter;

/// Which segmenter tier to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Unicode,
    Regex,
}

impl SegmenterKind {
    pub fn segmenter(self) -> &'static dyn Segmenter {
        match self {
            SegmenterKind::Unicode => &UNICODE_SEGMENTER,
            SegmenterKind::Regex => &REGEX_SEGMENTER,
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmenterKind::Unicode => write!(f, "unicode"),
            SegmenterKind::Regex => write!(f, "regex"),
        }
    }
}

impl FromStr for SegmenterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" => Ok(SegmenterKind::Unicode),
            "regex" => Ok(SegmenterKind::Regex),
            other => Err(format!(
                "Unknown segmenter '{}'. Valid: unicode, regex",
                other
            )),
        }
    }
}
