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
use crate::bookmarks::is_bookmarked;
use crate::cmd::read_line;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::item::ItemKind;
use crate::types::item::OneLinerItem;
use crate::types::item::QuestionItem;

pub fn run(directory: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    if collection.catalog.one_liners.is_empty() {
        return fail("no one-liners found in this directory.");
    }
    let items = collection.catalog.one_liners.clone();
    let bookmark_store = BookmarkStore::new(collection.db.clone());

    let mut index = 0;
    while index < items.len() {
        let item = &items[index];
        println!();
        println!("Card {}/{}: {}", index + 1, items.len(), item.question);
        if let Some(subject) = &item.subject {
            println!("  (subject: {subject})");
        }
        println!("[enter reveal, b bookmark, q quit]");
        match read_line()?.as_str() {
            "q" => break,
            "b" => toggle_bookmark(&bookmark_store, item),
            _ => {
                println!("Answer: {}", item.answer);
                println!("[enter next, b bookmark, q quit]");
                match read_line()?.as_str() {
                    "q" => break,
                    "b" => {
                        toggle_bookmark(&bookmark_store, item);
                        index += 1;
                    }
                    _ => index += 1,
                }
            }
        }
    }
    println!("Done.");
    Ok(())
}

fn toggle_bookmark(store: &BookmarkStore, item: &OneLinerItem) {
    match store.toggle(&QuestionItem::OneLiner(item.clone())) {
        Ok(all) => {
            if is_bookmarked(&all, &item.id, ItemKind::OneLiner) {
                println!("Bookmarked.");
            } else {
                println!("Bookmark removed.");
            }
        }
        // Non-fatal: keep flipping cards with the previous state.
        Err(e) => println!("Could not update bookmarks: {e}"),
    }
}
