//! Frontend Models
//!
//! Data structures matching the packing REST API.

use serde::{Deserialize, Serialize};

/// A single line of a packing list (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackItem {
    /// Store-assigned id; absent until the item has been saved once
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Label shown in the table
    pub item: String,
    /// Units already packed
    #[serde(default)]
    pub packed: u32,
    /// Units to pack
    #[serde(rename = "toPack", default)]
    pub to_pack: u32,
}

impl PackItem {
    /// A fresh, unsaved item
    pub fn unsaved(label: impl Into<String>, to_pack: u32) -> Self {
        Self {
            id: None,
            item: label.into(),
            packed: 0,
            to_pack,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.packed >= self.to_pack
    }

    /// "packed / toPack" as displayed in the table
    pub fn ratio(&self) -> String {
        format!("{} / {}", self.packed, self.to_pack)
    }
}

/// A whole packing list (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<PackItem>,
}

/// Body for creating a list; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPackList {
    pub name: String,
    pub items: Vec<PackItem>,
}

/// Row of the lists overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackListSummary {
    pub id: String,
    pub name: String,
    pub packed: u64,
    #[serde(rename = "toPack")]
    pub to_pack: u64,
}

impl PackListSummary {
    pub fn ratio(&self) -> String {
        format!("{} / {}", self.packed, self.to_pack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsaved_item_omits_id() {
        let item = PackItem::unsaved("socks", 1);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "item": "socks", "packed": 0, "toPack": 1 }));
    }

    #[test]
    fn test_stored_item_wire_names() {
        let item: PackItem = serde_json::from_value(json!({
            "_id": "a1",
            "item": "food",
            "packed": 2,
            "toPack": 3
        }))
        .unwrap();
        assert_eq!(item.id.as_deref(), Some("a1"));
        assert_eq!(item.to_pack, 3);
        assert!(!item.is_complete());
        assert_eq!(item.ratio(), "2 / 3");
    }

    #[test]
    fn test_summary_parses_list_overview_row() {
        let summary: PackListSummary = serde_json::from_value(json!({
            "id": "l1",
            "name": "Beach",
            "packed": 4,
            "toPack": 9
        }))
        .unwrap();
        assert_eq!(summary.ratio(), "4 / 9");
    }
}
