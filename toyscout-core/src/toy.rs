//! Toy info data model
//!
//! `ToyInfo` is the four-field answer the model is instructed to emit.
//! Wire keys are camelCase to match the JSON shape requested in the
//! prompt; field text is carried verbatim with no trimming or markup
//! handling.

use serde::{Deserialize, Serialize};

/// Structured answer for one toy query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyInfo {
    /// Detailed description of the toy
    pub description: String,
    /// Price comparison across retailers
    pub price_comparison: String,
    /// Developmental benefits for children
    pub developmental_benefits: String,
    /// Review summary
    pub reviews: String,
}

impl ToyInfo {
    /// All `(label, text)` pairs in display order
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (InfoTab::Description.label(), &self.description),
            (InfoTab::Price.label(), &self.price_comparison),
            (InfoTab::Benefits.label(), &self.developmental_benefits),
            (InfoTab::Reviews.label(), &self.reviews),
        ]
    }

    /// Text for a single tab
    pub fn field(&self, tab: InfoTab) -> &str {
        match tab {
            InfoTab::Description => &self.description,
            InfoTab::Price => &self.price_comparison,
            InfoTab::Benefits => &self.developmental_benefits,
            InfoTab::Reviews => &self.reviews,
        }
    }
}

/// Presentation tab for one `ToyInfo` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Description,
    Price,
    Benefits,
    Reviews,
}

impl InfoTab {
    /// All tabs in display order
    pub const ALL: [InfoTab; 4] = [
        InfoTab::Description,
        InfoTab::Price,
        InfoTab::Benefits,
        InfoTab::Reviews,
    ];

    /// Display label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            InfoTab::Description => "Description",
            InfoTab::Price => "Price Comparison",
            InfoTab::Benefits => "Developmental Benefits",
            InfoTab::Reviews => "Reviews",
        }
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping at the end
    pub fn next(&self) -> InfoTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping at the start
    pub fn prev(&self) -> InfoTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToyInfo {
        ToyInfo {
            description: "A red ball".to_string(),
            price_comparison: "$5-$10".to_string(),
            developmental_benefits: "Hand-eye coordination".to_string(),
            reviews: "4.5 stars".to_string(),
        }
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("description"));
        assert!(obj.contains_key("priceComparison"));
        assert!(obj.contains_key("developmentalBenefits"));
        assert!(obj.contains_key("reviews"));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let info = sample();
        let encoded = serde_json::to_string(&info).unwrap();
        let decoded: ToyInfo = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn test_field_text_is_verbatim() {
        let mut info = sample();
        info.reviews = "  spaced  and **marked up**  ".to_string();
        assert_eq!(info.field(InfoTab::Reviews), "  spaced  and **marked up**  ");
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(InfoTab::Description.next(), InfoTab::Price);
        assert_eq!(InfoTab::Reviews.next(), InfoTab::Description);
        assert_eq!(InfoTab::Description.prev(), InfoTab::Reviews);
        assert_eq!(InfoTab::Benefits.index(), 2);
    }

    #[test]
    fn test_fields_order_matches_tabs() {
        let info = sample();
        let fields = info.fields();
        assert_eq!(fields[0], ("Description", "A red ball"));
        assert_eq!(fields[1], ("Price Comparison", "$5-$10"));
        assert_eq!(fields[2], ("Developmental Benefits", "Hand-eye coordination"));
        assert_eq!(fields[3], ("Reviews", "4.5 stars"));
    }
}
