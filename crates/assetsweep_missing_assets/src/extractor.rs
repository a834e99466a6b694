//! Asset path extraction from raw file text.
//!
//! Extraction is a best-effort static scan. Each [`RuleKind`] is an
//! independent pattern run over the whole content; results are unioned with
//! no precedence between rules. A string constant that merely ends in `.png`
//! is reported like any other reference.

use indexmap::IndexSet;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// `src="/images/hero.png"`: attribute values rooted at `/`
static SRC_ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"src=['"]/([^'"]+\.(?i:jpg|jpeg|png|gif|svg|webp))['"]"#)
        .expect("src attribute pattern is valid")
});

/// `'images/hero.png'` or `"/images/hero.png"`: any quoted path without whitespace
static QUOTED_STRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"['"]/?([^'"\s]+\.(?i:jpg|jpeg|png|gif|svg|webp))['"]"#)
        .expect("quoted string pattern is valid")
});

/// `import hero from "/images/hero.png"`
static IMPORT_STATEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*?from\s+['"]/?([^'"\s]+\.(?i:jpg|jpeg|png|gif|svg|webp))['"]"#)
        .expect("import statement pattern is valid")
});

/// Candidates with these prefixes are remote or inline, never local assets.
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "data:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    SrcAttribute,
    QuotedString,
    ImportStatement,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] =
        [RuleKind::SrcAttribute, RuleKind::QuotedString, RuleKind::ImportStatement];

    fn pattern(self) -> &'static Regex {
        match self {
            RuleKind::SrcAttribute => &*SRC_ATTRIBUTE_RE,
            RuleKind::QuotedString => &*QUOTED_STRING_RE,
            RuleKind::ImportStatement => &*IMPORT_STATEMENT_RE,
        }
    }
}

/// Extract every candidate asset path referenced by `content`.
///
/// The returned set iterates in discovery order: all matches of the first
/// rule by position, then new matches of the second, and so on.
pub fn extract(content: &str) -> IndexSet<String> {
    extract_with_rules(content, &RuleKind::ALL)
}

pub fn extract_with_rules(content: &str, rules: &[RuleKind]) -> IndexSet<String> {
    let mut found = IndexSet::new();
    for rule in rules {
        for caps in rule.pattern().captures_iter(content) {
            let Some(m) = caps.get(1) else { continue };
            let candidate = m.as_str();
            if EXTERNAL_PREFIXES.iter().any(|p| candidate.starts_with(p)) {
                trace!("Skipping external reference: '{}'", candidate);
                continue;
            }
            if found.insert(candidate.to_string()) {
                trace!("{:?} matched '{}'", rule, candidate);
            }
        }
    }
    found
}

/// Strip a single leading `/`. Case, `..` segments and repeated separators are kept.
pub fn normalize_asset_path(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}
