//! Configuration for a single extraction.
//!
//! An [`ExtractionConfig`] is built once and handed to [`crate::Readability`];
//! it is never mutated by the pipeline.

use dom_query::Document;

use crate::result::Comment;

/// A user-supplied comment extractor.
///
/// When set on the config, it replaces the built-in selector-driven comment
/// extraction entirely. The returned comments are still deduplicated and
/// bounded like built-in ones.
pub type CommentExtractorFn = fn(&Document) -> Vec<Comment>;

/// Behavior flags for the extraction pipeline.
///
/// Any combination is valid; the default enables all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Remove known non-content elements (headers, ads, share widgets,
    /// cookie banners) and short navigation anchors before scoring.
    pub strip_unlikelies: bool,

    /// Bias candidate scores by class name ("article" up, "comment" down).
    pub weight_classes: bool,

    /// Run the post-merge noise stripper over the selected content.
    pub clean_conditionally: bool,
}

impl Flags {
    /// All flags enabled.
    #[must_use]
    pub fn all() -> Self {
        Self { strip_unlikelies: true, weight_classes: true, clean_conditionally: true }
    }

    /// All flags disabled.
    #[must_use]
    pub fn none() -> Self {
        Self { strip_unlikelies: false, weight_classes: false, clean_conditionally: false }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use rs_readability::{ExtractionConfig, Flags};
///
/// let config = ExtractionConfig {
///     flags: Flags { weight_classes: false, ..Flags::all() },
///     include_comments: false,
///     ..ExtractionConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Pipeline behavior flags.
    ///
    /// Default: all enabled.
    pub flags: Flags,

    /// Emit diagnostic events through `tracing` while extracting.
    ///
    /// Default: `false`
    pub verbose_logging: bool,

    /// Extract reader comments alongside the article.
    ///
    /// Default: `true`
    pub include_comments: bool,

    /// Replacement for the built-in comment extractor.
    ///
    /// Default: `None`
    pub comment_extractor: Option<CommentExtractorFn>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            flags: Flags::default(),
            verbose_logging: false,
            include_comments: true,
            comment_extractor: None,
        }
    }
}
