//! Names shared by the typed model and the untyped host boundary.

/// Separator for set-valued options crossing the boundary.
pub const SET_DELIMITER: char = ',';

/// Prefix for environment overrides of the options config (`OPHUB__RESPONSE__HTML=true`).
pub const ENV_PREFIX: &str = "OPHUB";

pub const QUALITY_SCORES: &str = "qualityScores";
pub const ALIGNMENT: &str = "alignment";
pub const HTML: &str = "html";
pub const SENTENCE_MAPPINGS: &str = "sentenceMappings";
pub const CONCAT_STRATEGY: &str = "concatStrategy";
pub const VOID_TAGS: &str = "voidTags";
pub const INLINE_TAGS: &str = "inlineTags";
pub const CONTINUATION_DELIMITERS: &str = "continuationDelimiters";
pub const SUBSTITUTE_INLINE_TAGS_WITH_SPACES: &str = "substituteInlineTagsWithSpaces";

/// Every first-class response field, in the order the host lists them.
pub const RESPONSE_FIELDS: &[&str] = &[
    QUALITY_SCORES,
    ALIGNMENT,
    HTML,
    VOID_TAGS,
    INLINE_TAGS,
    CONTINUATION_DELIMITERS,
    SUBSTITUTE_INLINE_TAGS_WITH_SPACES,
    SENTENCE_MAPPINGS,
    CONCAT_STRATEGY,
];
