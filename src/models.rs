//! Frontend Models
//!
//! Data structures matching the REST API's JSON (camelCase on the wire).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type ItemId = i64;

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub tenant_id: String,
    pub name: String,
    pub memo: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Reduced projection used by the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<&Item> for ListEntry {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            is_completed: item.is_completed,
        }
    }
}

/// Split entries into (to do, done), preserving order
pub fn partition_by_completion(entries: &[ListEntry]) -> (Vec<ListEntry>, Vec<ListEntry>) {
    entries.iter().cloned().partition(|entry| !entry.is_completed)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemDto {
    pub name: String,
}

impl CreateItemDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Presence-aware field for partial updates.
///
/// `Unchanged` is omitted from the JSON body. For nullable fields use
/// `Patch<Option<T>>`: `Set(None)` serializes as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unchanged => None,
        }
    }

    /// `Set` only when `value` differs from `current`
    pub fn if_changed(current: &T, value: T) -> Self
    where
        T: PartialEq,
    {
        if *current == value {
            Patch::Unchanged
        } else {
            Patch::Set(value)
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Unchanged => serializer.serialize_none(),
        }
    }
}

// Paired with `#[serde(default)]`: a missing field stays `Unchanged`, a present one
// (including `null`) becomes `Set`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// Partial update body; only `Set` fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub memo: Patch<Option<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub image_url: Patch<Option<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub is_completed: Patch<bool>,
}

impl UpdateItemDto {
    /// Patch that only flips the completion flag
    pub fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Patch::Set(is_completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.memo.is_unchanged()
            && self.image_url.is_unchanged()
            && self.is_completed.is_unchanged()
    }
}

/// Editable copy of an item held by the detail page until saved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub memo: String,
    pub image_url: Option<String>,
    pub is_completed: bool,
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            memo: item.memo.clone().unwrap_or_default(),
            image_url: item.image_url.clone(),
            is_completed: item.is_completed,
        }
    }
}

impl ItemDraft {
    /// Patch containing only the fields that differ from `original`.
    ///
    /// Both sides are compared normalized: names trimmed, blank memo text
    /// read as "no memo". Clearing the textarea sends an explicit `null`.
    pub fn changes(&self, original: &Item) -> UpdateItemDto {
        UpdateItemDto {
            name: Patch::if_changed(
                &original.name.trim().to_string(),
                self.name.trim().to_string(),
            ),
            memo: Patch::if_changed(
                &non_blank(original.memo.as_deref()),
                non_blank(Some(&self.memo)),
            ),
            image_url: Patch::if_changed(&original.image_url, self.image_url.clone()),
            is_completed: Patch::if_changed(&original.is_completed, self.is_completed),
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).map(str::to_string)
}

/// File picked for upload, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Item {
        Item {
            id: 7,
            tenant_id: "demo".into(),
            name: "Buy milk".into(),
            memo: Some("2 liters".into()),
            image_url: None,
            is_completed: false,
        }
    }

    #[test]
    fn test_item_wire_names() {
        let value = serde_json::to_value(item()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "tenantId": "demo",
                "name": "Buy milk",
                "memo": "2 liters",
                "imageUrl": null,
                "isCompleted": false
            })
        );
    }

    #[test]
    fn test_update_dto_distinguishes_absent_from_null() {
        let dto = UpdateItemDto {
            memo: Patch::Set(None),
            is_completed: Patch::Set(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({ "memo": null, "isCompleted": true }));

        let parsed: UpdateItemDto = serde_json::from_value(json!({ "imageUrl": null })).unwrap();
        assert_eq!(parsed.image_url, Patch::Set(None));
        assert_eq!(parsed.memo, Patch::Unchanged);
        assert_eq!(parsed.name, Patch::Unchanged);
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let dto = UpdateItemDto::default();
        assert!(dto.is_empty());
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({}));
    }

    #[test]
    fn test_draft_changes_only_modified_fields() {
        let original = item();
        let mut draft = ItemDraft::from(&original);
        assert!(draft.changes(&original).is_empty());

        draft.is_completed = true;
        draft.name = "  Buy milk  ".into();
        let dto = draft.changes(&original);
        assert_eq!(dto, UpdateItemDto::completion(true));
    }

    #[test]
    fn test_clearing_memo_sends_null() {
        let original = item();
        let mut draft = ItemDraft::from(&original);
        draft.memo = "   ".into();
        let dto = draft.changes(&original);
        assert_eq!(dto.memo, Patch::Set(None));
        assert!(dto.name.is_unchanged());
    }

    #[test]
    fn test_untouched_draft_of_unnormalized_item_is_empty() {
        let original = Item {
            name: "  Buy milk ".into(),
            memo: Some("  ".into()),
            ..item()
        };
        let draft = ItemDraft::from(&original);
        assert!(draft.changes(&original).is_empty());

        let empty_memo = Item { memo: Some(String::new()), ..item() };
        assert!(ItemDraft::from(&empty_memo).changes(&empty_memo).is_empty());
    }

    #[test]
    fn test_renaming_unnormalized_item_sends_trimmed_name() {
        let original = Item { name: " Buy milk".into(), ..item() };
        let mut draft = ItemDraft::from(&original);
        draft.name = " Buy oat milk ".into();
        let dto = draft.changes(&original);
        assert_eq!(dto.name, Patch::Set("Buy oat milk".to_string()));
        assert!(dto.memo.is_unchanged());
    }

    #[test]
    fn test_partition_keeps_order() {
        let entries = vec![
            ListEntry { id: 1, name: "a".into(), is_completed: false },
            ListEntry { id: 2, name: "b".into(), is_completed: true },
            ListEntry { id: 3, name: "c".into(), is_completed: false },
        ];
        let (todo, done) = partition_by_completion(&entries);
        assert_eq!(todo.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(done.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    }
}
