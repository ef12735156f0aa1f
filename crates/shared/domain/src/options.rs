use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How translated segments are stitched back into the target text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcatStrategy {
    /// Target text follows the layout of the source text.
    #[default]
    Faithful,
    /// Target segments are joined with a single space.
    Space,
}

impl ConcatStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Faithful => "faithful",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for ConcatStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; the caller reports unknown names.
impl FromStr for ConcatStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "space" => Ok(Self::Space),
            _ => Err(()),
        }
    }
}

/// Sub-options of HTML mode: how markup is stripped from the source and reinserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Elements that never have a closing tag.
    pub void_tags: BTreeSet<String>,
    /// Elements that do not break up sentences.
    pub inline_tags: BTreeSet<String>,
    /// Characters after which a word is not continued across a tag.
    pub continuation_delimiters: String,
    /// Replace inline tags with a space when they separate words.
    pub substitute_inline_tags_with_spaces: bool,
}

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const INLINE_TAGS: &[&str] = &[
    "abbr", "a", "b", "em", "i", "kbd", "mark", "math", "output", "q", "ruby", "small", "span",
    "strong", "sub", "sup", "time", "u", "var", "wbr", "ins", "del", "img",
];

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            void_tags: VOID_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            inline_tags: INLINE_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            continuation_delimiters: "\n ,.(){}[]".to_owned(),
            substitute_inline_tags_with_spaces: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_strategy_parses_any_case() {
        assert_eq!("FAITHFUL".parse::<ConcatStrategy>(), Ok(ConcatStrategy::Faithful));
        assert_eq!(" space ".parse::<ConcatStrategy>(), Ok(ConcatStrategy::Space));
        assert_eq!("newline".parse::<ConcatStrategy>(), Err(()));
    }

    #[test]
    fn html_defaults_cover_common_tags() {
        let html = HtmlOptions::default();
        assert!(html.void_tags.contains("br"));
        assert!(html.inline_tags.contains("span"));
        assert!(!html.inline_tags.contains("div"));
        assert!(html.substitute_inline_tags_with_spaces);
        assert!(html.continuation_delimiters.contains('\n'));
    }
}
