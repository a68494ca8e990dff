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

use crate::bookmarks::BookmarkStore;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::item::ItemKind;
use crate::types::item::QuestionItem;

pub fn run(
    directory: Option<String>,
    remove: Option<String>,
    kind: Option<ItemKind>,
) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let store = BookmarkStore::new(collection.db.clone());

    if let Some(id) = remove {
        let Some(kind) = kind else {
            return fail("--kind is required with --remove.");
        };
        let items = store.remove(&id, kind)?;
        println!("Removed {kind} bookmark {id:?}. {} bookmark(s) remain.", items.len());
        return Ok(());
    }

    let items = store.load_all()?;
    if items.is_empty() {
        println!("No bookmarks yet.");
        return Ok(());
    }
    println!("{} bookmark(s):", items.len());
    for item in &items {
        println!();
        match item {
            QuestionItem::Quiz(item) => {
                println!("[Quiz] {} — {}", item.id, item.question);
                for (i, option) in item.options.iter().enumerate() {
                    let marker = if i == item.correct_option_index {
                        " (correct)"
                    } else {
                        ""
                    };
                    println!("  {}) {}{marker}", i + 1, option);
                }
                if let Some(exam) = &item.exam_reference {
                    println!("  asked in: {exam}");
                }
            }
            QuestionItem::OneLiner(item) => {
                println!("[OneLiner] {} — {}", item.id, item.question);
                println!("  answer: {}", item.answer);
                if let Some(subject) = &item.subject {
                    println!("  subject: {subject}");
                }
            }
        }
    }
    Ok(())
}
