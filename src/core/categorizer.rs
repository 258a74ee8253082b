//! Categorizer
//!
//! Assigns a category to an item name: exact lexicon match, then the first
//! canonical name contained in the text, then keyword rules.

use std::sync::Arc;

use crate::lexicon::{CategoryId, Lexicon};

/// Names this short never take part in substring matching
const MIN_SUBSTRING_LEN: usize = 2;

const PANTRY_KEYWORDS: &[&str] = &["rice", "dal", "lentil", "flour", "spice", "masala", "powder"];
const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "yogurt", "cream"];
const PRODUCE_KEYWORDS: &[&str] = &["vegetable", "green", "leaf", "leaves"];
const MEAT_KEYWORDS: &[&str] = &["meat", "chicken", "fish", "seafood"];

/// Rule-based category assignment
pub struct Categorizer {
    lexicon: Arc<Lexicon>,
}

impl Categorizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn categorize(&self, text: &str) -> CategoryId {
        let text = text.trim().to_lowercase();

        if let Some(category) = self.lexicon.category_of(&text) {
            return category;
        }

        if text.chars().count() > MIN_SUBSTRING_LEN {
            let contained = self.lexicon.entries().iter().find(|entry| {
                let name = entry.canonical_name.to_lowercase();
                name.chars().count() > MIN_SUBSTRING_LEN && text.contains(&name)
            });
            if let Some(entry) = contained {
                return entry.category;
            }
        }

        keyword_category(&text)
    }
}

/// Fixed-order keyword fallback; `Other` when nothing applies
fn keyword_category(text: &str) -> CategoryId {
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if has_any(PANTRY_KEYWORDS) {
        if text.contains("rice") {
            CategoryId::AsianPantry
        } else {
            CategoryId::IndianPantry
        }
    } else if has_any(DAIRY_KEYWORDS) {
        CategoryId::Dairy
    } else if has_any(PRODUCE_KEYWORDS) {
        CategoryId::Produce
    } else if has_any(MEAT_KEYWORDS) {
        CategoryId::MeatSeafood
    } else {
        CategoryId::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;

    fn categorizer() -> Categorizer {
        Categorizer::new(Arc::new(Lexicon::builtin().unwrap()))
    }

    #[test]
    fn test_exact_match() {
        let c = categorizer();
        assert_eq!(c.categorize("Basmati Rice"), CategoryId::AsianPantry);
        assert_eq!(c.categorize("turmeric"), CategoryId::IndianPantry);
        assert_eq!(c.categorize("milk"), CategoryId::Dairy);
    }

    #[test]
    fn test_substring_match_uses_lexicon_order() {
        let c = categorizer();
        assert_eq!(c.categorize("organic bananas"), CategoryId::Produce);
        assert_eq!(c.categorize("2 apples"), CategoryId::Produce);
        // first contained name in lexicon order wins
        assert_eq!(c.categorize("apples juice"), CategoryId::Produce);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(keyword_category("wild rice blend"), CategoryId::AsianPantry);
        assert_eq!(keyword_category("sambar dal mix"), CategoryId::IndianPantry);
        assert_eq!(keyword_category("oat creamer"), CategoryId::Dairy);
        assert_eq!(keyword_category("mixed greens"), CategoryId::Produce);
        assert_eq!(keyword_category("seafood mix"), CategoryId::MeatSeafood);
        assert_eq!(keyword_category("zorblax"), CategoryId::Other);
    }

    #[test]
    fn test_keyword_order_pantry_first() {
        // "masala" beats "milk"
        assert_eq!(keyword_category("masala milk"), CategoryId::IndianPantry);
    }

    #[test]
    fn test_unknown_alias_is_other() {
        let c = categorizer();
        assert_eq!(c.categorize("jeera"), CategoryId::Other);
        assert_eq!(c.categorize(""), CategoryId::Other);
    }

    #[test]
    fn test_short_names_skip_substring_step() {
        let lexicon = Lexicon::from_parts(
            vec![LexiconEntry {
                canonical_name: "ox".to_string(),
                category: CategoryId::MeatSeafood,
            }],
            vec![],
            vec![],
        )
        .unwrap();
        let c = Categorizer::new(Arc::new(lexicon));
        assert_eq!(c.categorize("ox"), CategoryId::MeatSeafood);
        assert_eq!(c.categorize("boxes"), CategoryId::Other);
    }
}
