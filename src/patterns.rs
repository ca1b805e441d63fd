//! Compiled regex patterns and the CSS selector surface.
//!
//! Regexes are compiled once per process via `LazyLock`. The selector
//! strings are part of the public contract; downstream consumers match on
//! them, so they must not drift.

use std::sync::LazyLock;

use regex::Regex;

/// Id of the synthetic container wrapping extracted content. Downstream
/// consumers style and query by it.
pub const CONTENT_CONTAINER_ID: &str = "readability-content";

// =============================================================================
// Pruning
// =============================================================================

/// Non-content elements removed eagerly before scoring: site chrome, ads,
/// social widgets, cookie banners, overlays, pagers, recommendation units
/// and a handful of vendor-specific blocks.
pub const PRUNE_SELECTORS: &str = "header, nav, footer, aside, .advertisement, .sponsored, \
    .subscribe, .related, .breadcrumbs, .combx, .community, .cover-wrap, .disqus, .extra, \
    .gdpr, .legends, .menu, .remark, .replies, .rss, .shoutbox, .sidebar, .skyscraper, \
    .social, .sponsor, .supplemental, .ad-break, .agegate, .pagination, .pager, .popup, \
    .yom-remote, .newsletter, .cookie, .cookie-banner, .modal, .overlay, .promo, .trending, \
    .signup, .cta, .outbrain, .taboola, [data-component='header'], [data-component='footer']";

/// Anchors with trimmed text shorter than this are removed outright.
pub const SHORT_LINK_MAX_LEN: usize = 20;

// =============================================================================
// Scoring and merging
// =============================================================================

/// Block elements considered as article candidates.
pub const CANDIDATE_SELECTOR: &str = "article, div, section, p";

/// Minimum trimmed text length for an element to be scored or merged.
pub const MIN_CANDIDATE_TEXT_LEN: usize = 25;

/// Inline media that lets a short sibling into the merged container.
pub const INLINE_MEDIA_SELECTOR: &str = "img, picture img";

// =============================================================================
// Noise stripping
// =============================================================================

/// Matches class/id/aria-label values of share and comment widgets.
pub static SHARE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\b|_)(share|sharedaddy|coral|comments-link)(\b|_)")
        .expect("SHARE_CLASS regex")
});

/// Containers checked for high link density after merging.
pub const UTILITY_BLOCK_SELECTOR: &str = "ul, ol, nav, section, div";

/// Headings and short blocks checked for noise-marker labels.
pub const NOISE_MARKER_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, div";

/// Short labels that mark a block as an advertisement slot.
pub const AD_LABELS: &[&str] = &["advertisement", "sponsored", "sponsored content", "ad"];

/// Phrases that mark a link-heavy block as a recommendation unit.
pub const RELATED_PHRASES: &[&str] =
    &["recommended", "related", "more stories", "read more", "you may also like"];

/// Labels that, alone or as a prefix, mark an element as a noise marker.
pub const NOISE_MARKER_LABELS: &[&str] = &[
    "advertisement",
    "recommended",
    "recommended stories",
    "related stories",
    "more stories",
    "sponsored",
];

/// List-like tags that may be removed when they follow a noise marker.
pub const NOISE_SIBLING_TAGS: &[&str] = &["ul", "ol", "section", "div"];

// =============================================================================
// Metadata selectors (ranked, order matters)
// =============================================================================

pub const TITLE_META: &[&str] =
    &["meta[property='og:title']", "meta[name='twitter:title']", "meta[name='title']"];

pub const DESCRIPTION_META: &[&str] = &[
    "meta[name='description']",
    "meta[property='og:description']",
    "meta[name='twitter:description']",
];

pub const KEYWORDS_META: &[&str] = &[
    "meta[name='keywords']",
    "meta[name='news_keywords']",
    "meta[name='parsely-tags']",
    "meta[name='article:tag']",
];

pub const AUTHOR_META: &[&str] = &[
    "meta[name='author']",
    "meta[property='article:author']",
    "meta[name='byl']",
    "meta[name='sailthru.author']",
    "meta[name='parsely-author']",
    "meta[property='og:article:author']",
];

pub const DATE_META: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[name='pubdate']",
    "meta[name='date']",
    "meta[name='parsely-pub-date']",
    "meta[name='DC.date']",
    "meta[itemprop='datePublished']",
];

pub const IMAGE_META: &[&str] = &[
    "meta[property='og:image']",
    "meta[name='twitter:image']",
    "meta[property='og:image:url']",
];

pub const VIDEO_META: &[&str] = &["meta[property='og:video:url']"];

/// Titles so generic that the first `<h1>` is preferred over them.
pub const GENERIC_TITLES: &[&str] = &["home", "menu", "index", "untitled", "page not found"];

/// Byline fallback when no author meta tag matched.
pub const BYLINE_SELECTOR: &str =
    ".byline, .by-author, .author, [rel='author'], .posted-by, .article-author, [itemprop='author']";

/// Lazy-loading image source attributes, probed in order after `src`.
pub const IMAGE_SRC_ATTRS: &[&str] = &["src", "data-src", "data-original", "data-lazy-src"];

// =============================================================================
// Comment selectors
// =============================================================================

pub const COMMENT_PRIMARY_SELECTORS: &[&str] = &[
    ".comment-list .comment",
    ".comments .comment",
    ".comment",
    "li.comment",
    "[itemprop='comment']",
];

pub const COMMENT_SECONDARY_SELECTORS: &[&str] = &[
    "[class*=comment]",
    "[id*=comment]",
    "[class*=reply]",
    "[id*=reply]",
    "[class*=discussion]",
    "[id*=discussion]",
    ".comment-list",
    ".comment-body",
    ".comment-content",
    "#disqus_thread",
    ".fb-comments",
];

pub const COMMENT_FALLBACK_SELECTOR: &str = "div.comment, li.comment";

pub const COMMENT_CONTENT_SELECTOR: &str =
    "div.post-body, p, .comment-content, .comment-body, .content";

pub const COMMENT_AUTHOR_SELECTOR: &str =
    ".author, .user, .username, span.post-author, .comment-author, [itemprop='author'], .fn";

pub const COMMENT_DATE_SELECTOR: &str =
    "time[datetime], time, [data-datetime], .comment-date, .date, [itemprop='datePublished']";

/// Upper bound on extracted comments.
pub const MAX_COMMENTS: usize = 50;

// =============================================================================
// Text cleanup
// =============================================================================

/// Collapses whitespace runs when rendering plain text.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
