// Copyright 2026 the railprep authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::Value;

use crate::db::Database;
use crate::error::Fallible;
use crate::error::fail;
use crate::keys::BOOKMARKED_QUESTIONS_KEY;
use crate::types::item::ItemKind;
use crate::types::item::QuestionItem;

/// The single source of truth for "is item X of kind K bookmarked". The whole
/// collection lives under one key as a JSON array and is read, modified, and
/// rewritten on every mutation. Call sites never touch the raw blob.
pub struct BookmarkStore {
    db: Database,
}

impl BookmarkStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the persisted collection. An absent blob is an empty collection.
    /// Malformed entries are dropped with a warning, never fatal.
    pub fn load_all(&self) -> Fallible<Vec<QuestionItem>> {
        match self.db.get_value(BOOKMARKED_QUESTIONS_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                let values: Vec<Value> = serde_json::from_str(&raw)?;
                Ok(normalize_entries(values))
            }
        }
    }

    /// Add the item to the collection, or remove it if an entry with the same
    /// `(id, kind)` is already present. Returns the resulting collection.
    pub fn toggle(&self, item: &QuestionItem) -> Fallible<Vec<QuestionItem>> {
        if item.id().is_empty() {
            return fail("cannot bookmark an item with no identifier.");
        }
        // Always re-read the persisted collection before mutating. Each
        // screen holds only entries of its own kind in memory; writing back
        // a filtered subset would delete the other kind's bookmarks.
        let mut items = self.load_all()?;
        match position_of(&items, item.id(), item.kind()) {
            Some(index) => {
                items.remove(index);
            }
            None => items.push(item.clone()),
        }
        self.write_all(&items)?;
        Ok(items)
    }

    /// Remove the entry matching `(id, kind)`, if present. Same
    /// read-the-global-blob-first discipline as `toggle`.
    pub fn remove(&self, id: &str, kind: ItemKind) -> Fallible<Vec<QuestionItem>> {
        let mut items = self.load_all()?;
        items.retain(|item| !(item.id() == id && item.kind() == kind));
        self.write_all(&items)?;
        Ok(items)
    }

    fn write_all(&self, items: &[QuestionItem]) -> Fallible<()> {
        let raw = serde_json::to_string(items)?;
        self.db.set_value(BOOKMARKED_QUESTIONS_KEY, &raw)
    }
}

/// Membership test on the `(id, kind)` pair.
pub fn is_bookmarked(items: &[QuestionItem], id: &str, kind: ItemKind) -> bool {
    position_of(items, id, kind).is_some()
}

fn position_of(items: &[QuestionItem], id: &str, kind: ItemKind) -> Option<usize> {
    items
        .iter()
        .position(|item| item.id() == id && item.kind() == kind)
}

/// Turn the raw persisted records into a tagged collection. Collections
/// written before the `kind` tag was introduced carry untagged entries;
/// those are reclassified by shape. Records matching neither shape, and
/// records without a usable id, are dropped with a warning.
pub fn normalize_entries(values: Vec<Value>) -> Vec<QuestionItem> {
    let mut items = Vec::new();
    for mut value in values {
        if value.get("kind").is_none() {
            match inferred_kind(&value) {
                Some(kind) => {
                    value["kind"] = Value::String(kind.as_str().to_string());
                }
                None => {
                    log::warn!("Dropping bookmark entry of unrecognizable shape: {value}");
                    continue;
                }
            }
        }
        match serde_json::from_value::<QuestionItem>(value) {
            Ok(item) if item.id().is_empty() => {
                log::warn!("Dropping bookmark entry with an empty id.");
            }
            Ok(item) => items.push(item),
            Err(e) => {
                log::warn!("Dropping malformed bookmark entry: {e}");
            }
        }
    }
    items
}

fn inferred_kind(value: &Value) -> Option<ItemKind> {
    if value.get("options").is_some()
        && value.get("correctOptionIndex").is_some_and(Value::is_number)
    {
        Some(ItemKind::Quiz)
    } else if value.get("answer").is_some() && value.get("question").is_some_and(Value::is_string) {
        Some(ItemKind::OneLiner)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;
    use crate::types::item::OneLinerItem;
    use crate::types::item::QuizItem;

    fn open_test_store() -> (tempfile::TempDir, BookmarkStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railprep.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (dir, BookmarkStore::new(db))
    }

    fn quiz_item(id: &str) -> QuestionItem {
        QuestionItem::Quiz(QuizItem {
            id: id.to_string(),
            question: "Which year did the first Indian train run?".to_string(),
            options: vec!["1853".to_string(), "1857".to_string()],
            correct_option_index: 0,
            exam_reference: Some("RRB NTPC 2019".to_string()),
        })
    }

    fn one_liner_item(id: &str) -> QuestionItem {
        QuestionItem::OneLiner(OneLinerItem {
            id: id.to_string(),
            question: "Which is the longest railway platform in India?".to_string(),
            answer: "Hubballi Junction".to_string(),
            subject: Some("Geography".to_string()),
        })
    }

    #[test]
    fn test_load_all_absent_is_empty() -> Fallible<()> {
        let (_dir, store) = open_test_store();
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_toggle_adds_then_removes() -> Fallible<()> {
        let (_dir, store) = open_test_store();
        let item = quiz_item("q1");

        let items = store.toggle(&item)?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "q1");
        assert_eq!(items[0].kind(), ItemKind::Quiz);
        assert!(is_bookmarked(&items, "q1", ItemKind::Quiz));

        let items = store.toggle(&item)?;
        assert!(items.is_empty());
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_even_toggles_restore_odd_toggles_flip() -> Fallible<()> {
        let (_dir, store) = open_test_store();
        let item = one_liner_item("ol1");
        for _ in 0..4 {
            store.toggle(&item)?;
        }
        assert!(store.load_all()?.is_empty());
        for _ in 0..3 {
            store.toggle(&item)?;
        }
        assert_eq!(store.load_all()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_same_id_different_kind_coexist() -> Fallible<()> {
        let (_dir, store) = open_test_store();
        store.toggle(&one_liner_item("a1"))?;
        store.toggle(&quiz_item("a1"))?;

        let items = store.load_all()?;
        assert_eq!(items.len(), 2);
        assert!(is_bookmarked(&items, "a1", ItemKind::Quiz));
        assert!(is_bookmarked(&items, "a1", ItemKind::OneLiner));

        // Removing the quiz entry leaves the one-liner intact.
        let items = store.remove("a1", ItemKind::Quiz)?;
        assert_eq!(items.len(), 1);
        assert!(!is_bookmarked(&items, "a1", ItemKind::Quiz));
        assert!(is_bookmarked(&items, "a1", ItemKind::OneLiner));
        Ok(())
    }

    #[test]
    fn test_toggle_never_clobbers_the_other_kind() -> Fallible<()> {
        let (_dir, store) = open_test_store();
        // The one-liner screen bookmarks a few items...
        store.toggle(&one_liner_item("ol1"))?;
        store.toggle(&one_liner_item("ol2"))?;
        // ...then the quiz screen, which never loaded them, toggles its own.
        store.toggle(&quiz_item("q1"))?;
        store.toggle(&quiz_item("q1"))?;
        store.toggle(&quiz_item("q2"))?;

        let items = store.load_all()?;
        assert!(is_bookmarked(&items, "ol1", ItemKind::OneLiner));
        assert!(is_bookmarked(&items, "ol2", ItemKind::OneLiner));
        assert!(is_bookmarked(&items, "q2", ItemKind::Quiz));
        assert!(!is_bookmarked(&items, "q1", ItemKind::Quiz));
        Ok(())
    }

    #[test]
    fn test_toggle_rejects_empty_id() {
        let (_dir, store) = open_test_store();
        let item = quiz_item("");
        assert!(store.toggle(&item).is_err());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_normalize_drops_entry_missing_id() {
        let values = vec![
            json!({
                "kind": "Quiz",
                "question": "No id on this one",
                "options": ["a", "b"],
                "correctOptionIndex": 0,
            }),
            json!({
                "kind": "OneLiner",
                "id": "ol1",
                "question": "Fine entry",
                "answer": "Yes",
            }),
        ];
        let items = normalize_entries(values);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "ol1");
    }

    #[test]
    fn test_normalize_infers_untagged_kinds() {
        let values = vec![
            // Written before the kind tag existed: quiz-shaped.
            json!({
                "id": "q9",
                "question": "Untagged quiz entry",
                "options": ["a", "b", "c"],
                "correctOptionIndex": 2,
            }),
            // One-liner-shaped.
            json!({
                "id": "ol9",
                "question": "Untagged one-liner entry",
                "answer": "Still loads",
            }),
            // Matches neither shape.
            json!({ "id": "junk", "note": "not a question at all" }),
            json!("not even an object"),
        ];
        let items = normalize_entries(values);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind(), ItemKind::Quiz);
        assert_eq!(items[0].id(), "q9");
        assert_eq!(items[1].kind(), ItemKind::OneLiner);
        assert_eq!(items[1].id(), "ol9");
    }
}
