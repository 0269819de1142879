//! Structured card details for a detail panel.
//!
//! Sections are built from whatever the card carries. Items with empty
//! values are dropped, and a section with no items is omitted entirely.

use super::definition::Card;

/// One labelled (or unlabelled) line of a detail section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailItem {
    pub label: Option<String>,
    pub value: String,
}

/// A titled group of detail items. The summary section has no title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSection {
    pub title: Option<&'static str>,
    pub items: Vec<DetailItem>,
}

/// Everything shown in a card's detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetails {
    pub name: String,
    pub sections: Vec<DetailSection>,
}

impl CardDetails {
    /// Build details for a card.
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        let summary = vec![
            item(Some("Type"), card.supertype.clone()),
            item(Some("Subtypes"), Some(card.subtypes.join(", "))),
            item(Some("HP"), card.hp.clone()),
            item(Some("Types"), Some(card.types.join(", "))),
            item(Some("Evolves From"), card.evolves_from.clone()),
        ];

        let abilities: Vec<Option<DetailItem>> = card
            .abilities
            .iter()
            .map(|a| item(Some(a.name.as_str()), a.text.clone()))
            .collect();

        let attacks: Vec<Option<DetailItem>> = card
            .attacks
            .iter()
            .map(|a| {
                let damage = a.damage.as_deref().filter(|d| !d.is_empty()).unwrap_or("0");
                let text = a.text.as_deref().unwrap_or("");
                item(Some(a.name.as_str()), Some(format!("Damage: {damage}\n{text}")))
            })
            .collect();

        let rules: Vec<Option<DetailItem>> = card.rules.iter().map(|r| item(None, Some(r.clone()))).collect();

        let sections = [
            (None::<&'static str>, summary),
            (Some("Abilities"), abilities),
            (Some("Attacks"), attacks),
            (Some("Rules"), rules),
        ]
        .into_iter()
        .filter_map(|(title, items)| {
            let items: Vec<DetailItem> = items.into_iter().flatten().collect();
            (!items.is_empty()).then_some(DetailSection { title, items })
        })
        .collect();

        Self {
            name: card.name.clone(),
            sections,
        }
    }

    /// Find a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.title == Some(title))
    }
}

fn item(label: Option<&str>, value: Option<String>) -> Option<DetailItem> {
    let value = value.filter(|v| !v.trim().is_empty())?;
    Some(DetailItem {
        label: label.filter(|l| !l.is_empty()).map(str::to_string),
        value,
    })
}

impl std::fmt::Display for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for section in &self.sections {
            if let Some(title) = section.title {
                writeln!(f, "\n{title}")?;
            }
            for entry in &section.items {
                match &entry.label {
                    Some(label) => writeln!(f, "  {label}: {}", entry.value)?,
                    None => writeln!(f, "  {}", entry.value)?,
                }
            }
        }
        Ok(())
    }
}
