//! Catalog query builder.
//!
//! Maps raw search text to a `Filter` using a small prefix grammar:
//!
//! | Input            | Filter                                    |
//! |------------------|-------------------------------------------|
//! | `#base1-4`       | set id `base1` and number `4`             |
//! | `#base1`         | set id `base1`                            |
//! | `@Scarlet`       | set name or series contains `Scarlet`     |
//! | `$VMAX`          | fixed name/subtype patterns for the tag   |
//! | `pikachu`        | name contains `pikachu`                   |
//!
//! `Filter::render` produces the catalog's `q` parameter syntax.

use serde::{Deserialize, Serialize};

/// Catalog filter expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Matches everything. Rendered as an empty query.
    Any,
    /// Field equals value.
    Exact { field: String, value: String },
    /// Field contains value (wildcards on both sides).
    Contains { field: String, value: String },
    /// Field matches a wildcard pattern verbatim (`*` allowed).
    Pattern { field: String, pattern: String },
    /// All filters must match.
    And(Vec<Filter>),
    /// Any filter may match.
    Or(Vec<Filter>),
    /// Filter must not match.
    Not(Box<Filter>),
}

impl Filter {
    /// Field equals value.
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Exact {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field contains value.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field matches a wildcard pattern.
    pub fn pattern(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Filter::Pattern {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Negate a filter.
    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: Filter) -> Self {
        Filter::Not(Box::new(filter))
    }

    /// Check if this filter matches everything.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Filter::Any)
    }

    /// Render in the catalog's query syntax.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Filter::Any => String::new(),
            Filter::Exact { field, value } => format!("{field}:{}", quote(value)),
            Filter::Contains { field, value } => {
                format!("{field}:\"*{}*\"", strip_quotes(value))
            }
            Filter::Pattern { field, pattern } => format!("{field}:\"{pattern}\""),
            Filter::And(parts) => parts
                .iter()
                .filter(|p| !p.is_any())
                .map(Filter::render)
                .collect::<Vec<_>>()
                .join(" "),
            Filter::Or(parts) => {
                let rendered: Vec<_> = parts.iter().map(Filter::render).collect();
                format!("({})", rendered.join(" OR "))
            }
            Filter::Not(inner) => format!("-{}", inner.render()),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Quote values containing spaces.
fn quote(value: &str) -> String {
    let value = strip_quotes(value);
    if value.contains(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value
    }
}

/// User text cannot close the phrase it is rendered into.
fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Rarity tags understood after a `$` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RarityTag {
    V,
    Gx,
    Ex,
    Vstar,
    Vmax,
    Prism,
    AceSpec,
}

impl RarityTag {
    /// Parse a tag, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "V" => Some(RarityTag::V),
            "GX" => Some(RarityTag::Gx),
            "EX" => Some(RarityTag::Ex),
            "VSTAR" => Some(RarityTag::Vstar),
            "VMAX" => Some(RarityTag::Vmax),
            "PRISM" => Some(RarityTag::Prism),
            "ACESPEC" => Some(RarityTag::AceSpec),
            _ => None,
        }
    }

    /// Fixed filter for the tag.
    #[must_use]
    pub fn filter(self) -> Filter {
        match self {
            // Plain V must not also pick up VMAX / VSTAR cards.
            RarityTag::V => Filter::And(vec![
                Filter::Or(vec![
                    Filter::pattern("name", "* V"),
                    Filter::exact("subtypes", "V"),
                ]),
                Filter::not(Filter::exact("subtypes", "VMAX")),
                Filter::not(Filter::exact("subtypes", "VSTAR")),
            ]),
            RarityTag::Gx => Filter::Or(vec![
                Filter::pattern("name", "*-GX"),
                Filter::pattern("name", "* GX"),
                Filter::exact("subtypes", "GX"),
            ]),
            RarityTag::Ex => Filter::Or(vec![
                Filter::pattern("name", "*-EX"),
                Filter::pattern("name", "* ex"),
                Filter::exact("subtypes", "EX"),
                Filter::exact("subtypes", "ex"),
            ]),
            RarityTag::Vstar => Filter::Or(vec![
                Filter::contains("name", "VSTAR"),
                Filter::exact("subtypes", "VSTAR"),
            ]),
            RarityTag::Vmax => Filter::Or(vec![
                Filter::contains("name", "VMAX"),
                Filter::exact("subtypes", "VMAX"),
            ]),
            RarityTag::Prism => Filter::Or(vec![
                Filter::contains("name", "◇"),
                Filter::contains("name", "Prism Star"),
                Filter::exact("subtypes", "Prism Star"),
            ]),
            RarityTag::AceSpec => Filter::Or(vec![
                Filter::exact("subtypes", "ACE SPEC"),
                Filter::contains("rules", "ACE SPEC"),
            ]),
        }
    }
}

/// Build a catalog filter from raw search text.
///
/// Empty input yields `Filter::Any`; callers should not submit it.
///
/// ```
/// use tcg_deckbuilder::catalog::{build_query, Filter};
///
/// assert_eq!(build_query("#base1-4").render(), "set.id:base1 number:4");
/// assert_eq!(build_query("pikachu").render(), "name:\"*pikachu*\"");
/// assert_eq!(build_query("   "), Filter::Any);
/// ```
#[must_use]
pub fn build_query(raw: &str) -> Filter {
    let query = raw.trim();
    if query.is_empty() {
        return Filter::Any;
    }

    if let Some(rest) = query.strip_prefix('#') {
        let rest = rest.trim();
        if rest.is_empty() {
            return Filter::Any;
        }
        return match rest.split_once('-') {
            Some((set_id, number)) if !set_id.is_empty() && !number.is_empty() => {
                Filter::And(vec![
                    Filter::exact("set.id", set_id),
                    Filter::exact("number", number),
                ])
            }
            _ => Filter::exact("set.id", rest.trim_end_matches('-')),
        };
    }

    if let Some(rest) = query.strip_prefix('@') {
        let rest = rest.trim();
        if rest.is_empty() {
            return Filter::Any;
        }
        return Filter::Or(vec![
            Filter::contains("set.name", rest),
            Filter::contains("set.series", rest),
        ]);
    }

    if let Some(rest) = query.strip_prefix('$') {
        let rest = rest.trim();
        if rest.is_empty() {
            return Filter::Any;
        }
        return match RarityTag::parse(rest) {
            Some(tag) => tag.filter(),
            None => Filter::contains("name", rest),
        };
    }

    Filter::contains("name", query)
}
