use std::fmt;

/// The admonition kinds recognised by the MkDocs output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmonitionKind {
    Info,
    Tip,
    Warning,
    Question,
}

impl AdmonitionKind {
    /// Get the lowercase name used in the `!!! <kind>` block header
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmonitionKind::Info => "info",
            AdmonitionKind::Tip => "tip",
            AdmonitionKind::Warning => "warning",
            AdmonitionKind::Question => "question",
        }
    }
}

impl fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single substitution rule: a Leanpub marker token and the admonition
/// kind its blocks become in the output dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    marker: String,
    kind: AdmonitionKind,
}

impl Rule {
    pub fn new(marker: impl Into<String>, kind: AdmonitionKind) -> Self {
        Self {
            marker: marker.into(),
            kind,
        }
    }

    /// The literal marker token as it appears in the manuscript (without the
    /// trailing space)
    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn kind(&self) -> AdmonitionKind {
        self.kind
    }
}

/// An ordered list of substitution rules, applied in order against the
/// progressively updated text.
///
/// Markers are distinct strings with no overlap, so rule order carries no
/// semantic weight; it is kept stable anyway so conversion is reproducible.
/// Several markers may map to the same kind (`W>` and `E>` both become
/// warnings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    /// The fixed Leanpub marker table
    fn default() -> Self {
        Self::new(vec![
            Rule::new("I>", AdmonitionKind::Info),
            Rule::new("T>", AdmonitionKind::Tip),
            Rule::new("W>", AdmonitionKind::Warning),
            Rule::new("E>", AdmonitionKind::Warning),
            Rule::new("Q>", AdmonitionKind::Question),
        ])
    }
}
