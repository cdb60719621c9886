//! Item and achievement master data, and the inventory view sent on login

use serde::{Deserialize, Serialize};

/// Icon shown for inventory entries with no catalog item
pub const MISSING_ICON: &str = "rbxassetid://0";

/// A tool or cosmetic in the item catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub price: i64,
    /// Listed in the shop
    #[serde(default = "default_true")]
    pub is_buyable: bool,
    #[serde(default = "default_rarity")]
    pub rarity: String,
}

fn default_category() -> String {
    "General".to_string()
}

fn default_rarity() -> String {
    "Common".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub achieve_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_count: Option<i32>,
    #[serde(default)]
    pub reward_gold: Option<i64>,
    #[serde(rename = "rewardXP", default)]
    pub reward_xp: Option<i64>,
}

/// An owned item merged with its catalog details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub item_id: String,
    pub item_name: String,
    pub icon: String,
    pub description: String,
    pub category: String,
}

impl InventoryEntry {
    /// Merge an owned item id with its catalog entry.
    ///
    /// Items missing from the catalog still show up, named by their id.
    pub fn from_catalog(item_id: String, item: Option<&Item>) -> Self {
        match item {
            Some(item) => Self {
                item_name: item.display_name.clone().unwrap_or_else(|| item_id.clone()),
                icon: item.icon.clone().unwrap_or_else(|| MISSING_ICON.to_string()),
                description: item.description.clone().unwrap_or_default(),
                category: item.category.clone(),
                item_id,
            },
            None => Self {
                item_name: item_id.clone(),
                icon: MISSING_ICON.to_string(),
                description: String::new(),
                category: String::new(),
                item_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sonde() -> Item {
        serde_json::from_value(serde_json::json!({
            "itemId": "Sonde Half",
            "displayName": "Sonde Half (Standard)",
            "description": "Alat diagnostik utama",
            "icon": "rbxassetid://123",
            "category": "Diagnostic",
            "price": 250
        }))
        .unwrap()
    }

    #[test]
    fn item_defaults() {
        let item: Item = serde_json::from_str(r#"{"itemId":"Masker"}"#).unwrap();
        assert_eq!(item.category, "General");
        assert_eq!(item.price, 0);
        assert!(item.is_buyable);
        assert_eq!(item.rarity, "Common");
    }

    #[test]
    fn inventory_entry_uses_catalog_details() {
        let item = sonde();
        let entry = InventoryEntry::from_catalog("Sonde Half".into(), Some(&item));
        assert_eq!(entry.item_name, "Sonde Half (Standard)");
        assert_eq!(entry.icon, "rbxassetid://123");
        assert_eq!(entry.category, "Diagnostic");
    }

    #[test]
    fn inventory_entry_without_catalog_item() {
        let entry = InventoryEntry::from_catalog("Retired Tool".into(), None);
        assert_eq!(entry.item_id, "Retired Tool");
        assert_eq!(entry.item_name, "Retired Tool");
        assert_eq!(entry.icon, MISSING_ICON);
        assert_eq!(entry.description, "");
        assert_eq!(entry.category, "");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["itemName"], "Retired Tool");
    }

    #[test]
    fn achievement_reward_xp_key() {
        let a: Achievement = serde_json::from_str(
            r#"{"achieveId":"first_case","rewardGold":10,"rewardXP":5}"#,
        )
        .unwrap();
        assert_eq!(a.reward_xp, Some(5));
        assert_eq!(a.reward_gold, Some(10));
    }
}
