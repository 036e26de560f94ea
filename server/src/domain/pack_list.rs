//! Pack List Entity
//!
//! A named list of items, stored and replaced as one document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// A line of a pack list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackItem {
    /// Store-assigned id; clients omit it for new items
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item: String,
    #[serde(default)]
    pub packed: u32,
    #[serde(rename = "toPack", default)]
    pub to_pack: u32,
}

impl PackItem {
    pub fn new(item: impl Into<String>, packed: u32, to_pack: u32) -> Self {
        Self {
            id: None,
            item: item.into(),
            packed,
            to_pack,
        }
    }
}

/// A stored pack list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<PackItem>,
}

/// POST body: a list without an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPackList {
    pub name: String,
    #[serde(default)]
    pub items: Vec<PackItem>,
}

/// PUT body: the full list; `id` may be repeated from the path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacePackList {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub items: Vec<PackItem>,
}

/// Row of GET /api/packing/. Totals are widened so any number of
/// `u32` counts adds up without overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackListSummary {
    pub id: String,
    pub name: String,
    pub packed: u64,
    #[serde(rename = "toPack")]
    pub to_pack: u64,
}

fn check_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput("name is required".to_string()));
    }
    Ok(())
}

impl PackList {
    /// Build an unsaved list from a POST body. The store assigns the id.
    pub fn from_new(body: NewPackList) -> DomainResult<Self> {
        check_name(&body.name)?;
        Ok(Self {
            id: String::new(),
            name: body.name,
            items: body.items,
        })
    }

    /// Build the replacement for list `id` from a PUT body
    pub fn from_replace(id: &str, body: ReplacePackList) -> DomainResult<Self> {
        if let Some(body_id) = &body.id {
            if body_id != id {
                return Err(DomainError::InvalidInput(format!(
                    "body id {} does not match path id {}",
                    body_id, id
                )));
            }
        }
        check_name(&body.name)?;
        Ok(Self {
            id: id.to_string(),
            name: body.name,
            items: body.items,
        })
    }

    /// Give every item without an id a fresh one
    pub fn assign_item_ids(&mut self) {
        for item in self.items.iter_mut().filter(|i| i.id.is_none()) {
            item.id = Some(Uuid::new_v4().to_string());
        }
    }

    pub fn summary(&self) -> PackListSummary {
        PackListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            packed: self.items.iter().map(|i| u64::from(i.packed)).sum(),
            to_pack: self.items.iter().map(|i| u64::from(i.to_pack)).sum(),
        }
    }
}

impl Entity for PackList {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sums_counts() {
        let list = PackList {
            id: "l1".to_string(),
            name: "Beach".to_string(),
            items: vec![PackItem::new("towel", 1, 2), PackItem::new("hat", 0, 1)],
        };
        let summary = list.summary();
        assert_eq!(summary.packed, 1);
        assert_eq!(summary.to_pack, 3);
        assert_eq!(list.id(), "l1");
    }

    #[test]
    fn test_summary_of_huge_counts_does_not_wrap() {
        let list = PackList {
            id: "l1".to_string(),
            name: "big".to_string(),
            items: vec![
                PackItem::new("a", u32::MAX, 3_000_000_000),
                PackItem::new("b", u32::MAX, 3_000_000_000),
            ],
        };
        let summary = list.summary();
        assert_eq!(summary.packed, 2 * u64::from(u32::MAX));
        assert_eq!(summary.to_pack, 6_000_000_000);
    }

    #[test]
    fn test_assign_item_ids_keeps_existing() {
        let mut list = PackList {
            id: "l1".to_string(),
            name: "Beach".to_string(),
            items: vec![
                PackItem {
                    id: Some("keep".to_string()),
                    ..PackItem::new("towel", 0, 1)
                },
                PackItem::new("hat", 0, 1),
            ],
        };
        list.assign_item_ids();
        assert_eq!(list.items[0].id.as_deref(), Some("keep"));
        assert!(list.items[1].id.is_some());
    }

    #[test]
    fn test_replace_rejects_mismatched_id() {
        let body = ReplacePackList {
            id: Some("other".to_string()),
            name: "x".to_string(),
            items: vec![],
        };
        assert!(matches!(
            PackList::from_replace("l1", body),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_list_requires_name() {
        let body = NewPackList {
            name: "  ".to_string(),
            items: vec![],
        };
        assert!(PackList::from_new(body).is_err());
    }
}
