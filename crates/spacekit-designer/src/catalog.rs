//! Built-in furniture catalog.

use serde::{Deserialize, Serialize};

/// A catalog template from which furniture items are instantiated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub default_color: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

impl CatalogEntry {
    pub fn new(id: &str, name: &str, category: &str, price: f64, default_color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            default_color: default_color.to_string(),
            item_type: name.to_string(),
        }
    }
}

/// An ordered collection of catalog entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The twelve stock pieces offered in the furniture panel.
    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogEntry::new("1", "Modern Sofa", "Seating", 1299.0, "#8B4513"),
            CatalogEntry::new("2", "Coffee Table", "Tables", 599.0, "#D2691E"),
            CatalogEntry::new("3", "Floor Lamp", "Lighting", 299.0, "#FFD700"),
            CatalogEntry::new("4", "Bookshelf", "Storage", 799.0, "#8B4513"),
            CatalogEntry::new("5", "Dining Chair", "Seating", 199.0, "#654321"),
            CatalogEntry::new("6", "Bed Frame", "Bedroom", 899.0, "#8B4513"),
            CatalogEntry::new("7", "Wardrobe", "Storage", 1199.0, "#696969"),
            CatalogEntry::new("8", "Desk", "Tables", 699.0, "#8B4513"),
            CatalogEntry::new("9", "Armchair", "Seating", 799.0, "#A0522D"),
            CatalogEntry::new("10", "Side Table", "Tables", 299.0, "#D2691E"),
            CatalogEntry::new("11", "Table Lamp", "Lighting", 149.0, "#FFA500"),
            CatalogEntry::new("12", "Dresser", "Storage", 899.0, "#8B4513"),
        ])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Case-insensitive substring match on the entry name.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .collect()
    }
}
