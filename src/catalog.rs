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

use std::collections::HashSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::item::ItemKind;
use crate::types::item::OneLinerItem;
use crate::types::item::QuestionItem;
use crate::types::item::QuizItem;

/// The static question content: every `*.json` file under the content
/// directory holds a JSON array of tagged question items. Read-only input;
/// bookmarks copy items out of it verbatim.
pub struct Catalog {
    pub quiz_items: Vec<QuizItem>,
    pub one_liners: Vec<OneLinerItem>,
}

pub fn load_catalog(directory: &Path) -> Fallible<Catalog> {
    let mut quiz_items = Vec::new();
    let mut one_liners = Vec::new();
    for entry in WalkDir::new(directory) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            let contents = std::fs::read_to_string(path)?;
            let items: Vec<QuestionItem> = serde_json::from_str(&contents)
                .map_err(|e| ErrorReport::new(format!("{}: {e}", path.display())))?;
            for item in items {
                match item {
                    QuestionItem::Quiz(item) => quiz_items.push(item),
                    QuestionItem::OneLiner(item) => one_liners.push(item),
                }
            }
        }
    }
    let catalog = Catalog {
        quiz_items,
        one_liners,
    };
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Content files are authored, so a bad item is an error, unlike persisted
/// user data which degrades gracefully.
fn validate_catalog(catalog: &Catalog) -> Fallible<()> {
    let mut seen: HashSet<(&str, ItemKind)> = HashSet::new();
    for item in &catalog.quiz_items {
        if item.id.trim().is_empty() {
            return fail(format!("quiz item {:?} has an empty id.", item.question));
        }
        if item.options.len() < 2 {
            return fail(format!("quiz item {:?} has fewer than two options.", item.id));
        }
        if item.correct_option_index >= item.options.len() {
            return fail(format!(
                "quiz item {:?} has correct option index {} but only {} options.",
                item.id,
                item.correct_option_index,
                item.options.len()
            ));
        }
        if !seen.insert((&item.id, ItemKind::Quiz)) {
            return fail(format!("duplicate quiz item id {:?}.", item.id));
        }
    }
    for item in &catalog.one_liners {
        if item.id.trim().is_empty() {
            return fail(format!("one-liner {:?} has an empty id.", item.question));
        }
        if !seen.insert((&item.id, ItemKind::OneLiner)) {
            return fail(format!("duplicate one-liner id {:?}.", item.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    const QUIZ_FILE: &str = r#"[
        {
            "kind": "Quiz",
            "id": "q1",
            "question": "Which zone is headquartered at Gorakhpur?",
            "options": ["North Eastern Railway", "Northeast Frontier Railway", "Northern Railway"],
            "correctOptionIndex": 0,
            "examReference": "RRB NTPC 2016"
        },
        {
            "kind": "OneLiner",
            "id": "ol1",
            "question": "Which is the longest railway platform in India?",
            "answer": "Hubballi Junction",
            "subject": "Geography"
        }
    ]"#;

    #[test]
    fn test_load_catalog() -> Fallible<()> {
        let dir = tempdir().unwrap();
        write(dir.path().join("railway_gk.json"), QUIZ_FILE).unwrap();
        write(dir.path().join("notes.txt"), "not content").unwrap();

        let catalog = load_catalog(dir.path())?;
        assert_eq!(catalog.quiz_items.len(), 1);
        assert_eq!(catalog.one_liners.len(), 1);
        assert_eq!(catalog.quiz_items[0].id, "q1");
        assert_eq!(catalog.quiz_items[0].options.len(), 3);
        assert_eq!(catalog.one_liners[0].answer, "Hubballi Junction");
        Ok(())
    }

    #[test]
    fn test_empty_directory_is_an_empty_catalog() -> Fallible<()> {
        let dir = tempdir().unwrap();
        let catalog = load_catalog(dir.path())?;
        assert!(catalog.quiz_items.is_empty());
        assert!(catalog.one_liners.is_empty());
        Ok(())
    }

    #[test]
    fn test_out_of_range_correct_index_rejected() {
        let dir = tempdir().unwrap();
        let content = r#"[{
            "kind": "Quiz",
            "id": "q1",
            "question": "Broken",
            "options": ["a", "b"],
            "correctOptionIndex": 2
        }]"#;
        write(dir.path().join("bad.json"), content).unwrap();
        assert!(load_catalog(dir.path()).is_err());
    }

    #[test]
    fn test_duplicate_id_within_kind_rejected() {
        let dir = tempdir().unwrap();
        let content = r#"[
            {"kind": "OneLiner", "id": "a1", "question": "First", "answer": "x"},
            {"kind": "OneLiner", "id": "a1", "question": "Second", "answer": "y"}
        ]"#;
        write(dir.path().join("dupes.json"), content).unwrap();
        assert!(load_catalog(dir.path()).is_err());
    }

    #[test]
    fn test_same_id_across_kinds_allowed() -> Fallible<()> {
        let dir = tempdir().unwrap();
        let content = r#"[
            {"kind": "Quiz", "id": "a1", "question": "Pick one", "options": ["a", "b"], "correctOptionIndex": 1},
            {"kind": "OneLiner", "id": "a1", "question": "Recall one", "answer": "x"}
        ]"#;
        write(dir.path().join("mixed.json"), content).unwrap();
        let catalog = load_catalog(dir.path())?;
        assert_eq!(catalog.quiz_items.len(), 1);
        assert_eq!(catalog.one_liners.len(), 1);
        Ok(())
    }
}
