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

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::bookmarks::BookmarkStore;
use crate::bookmarks::is_bookmarked;
use crate::cmd::confirm;
use crate::cmd::read_line;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::session::Outcome;
use crate::session::QuizSession;
use crate::session::SessionRecorder;
use crate::session::SessionResult;
use crate::types::item::ItemKind;
use crate::types::item::QuestionItem;

pub fn run(directory: Option<String>, count: usize) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    if collection.catalog.quiz_items.is_empty() {
        return fail("no quiz questions found in this directory.");
    }

    let mut items = collection.catalog.quiz_items.clone();
    items.shuffle(&mut thread_rng());
    if count > 0 {
        items.truncate(count);
    }

    let bookmark_store = BookmarkStore::new(collection.db.clone());
    let recorder = SessionRecorder::new(collection.db.clone());
    let mut session = QuizSession::new(items);
    let started = Instant::now();

    loop {
        let Some(item) = session.current().cloned() else {
            break;
        };
        println!();
        println!(
            "Question {}/{}: {}",
            session.position() + 1,
            session.len(),
            item.question
        );
        if let Some(exam) = &item.exam_reference {
            println!("  (asked in: {exam})");
        }
        for (i, option) in item.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        let bookmarked = match bookmark_store.load_all() {
            Ok(all) => is_bookmarked(&all, &item.id, ItemKind::Quiz),
            Err(e) => {
                println!("Could not read bookmarks: {e}");
                false
            }
        };
        let marker = if bookmarked { " [bookmarked]" } else { "" };
        println!(
            "[1-{} answer, enter next, b bookmark{marker}, q submit early]",
            item.options.len()
        );

        let input = read_line()?;
        match input.as_str() {
            "q" => {
                if confirm("Submit early? Unanswered questions count as skipped.")? {
                    break;
                }
            }
            "b" => match bookmark_store.toggle(&QuestionItem::Quiz(item.clone())) {
                Ok(all) => {
                    if is_bookmarked(&all, &item.id, ItemKind::Quiz) {
                        println!("Bookmarked.");
                    } else {
                        println!("Bookmark removed.");
                    }
                }
                // Non-fatal: the session carries on with the previous state.
                Err(e) => println!("Could not update bookmarks: {e}"),
            },
            "" => session.advance(),
            other => match other.parse::<usize>() {
                Ok(choice) if (1..=item.options.len()).contains(&choice) => {
                    match session.answer(choice - 1) {
                        Some(Outcome::Correct) => println!("Correct!"),
                        Some(Outcome::Wrong) => println!(
                            "Wrong. The answer is: {}",
                            item.options[item.correct_option_index]
                        ),
                        None => println!("Already answered. Press enter for the next question."),
                    }
                }
                _ => println!("Enter a number between 1 and {}.", item.options.len()),
            },
        }
    }

    let result = recorder.finalize(session, started.elapsed().as_secs());
    print_summary(&result);
    Ok(())
}

fn print_summary(result: &SessionResult) {
    println!();
    println!("Quiz finished!");
    println!("Time taken: {}", result.time_label());
    println!("Your final score: {}", result.score);
    println!(
        "Correct: {}, Wrong: {}, Skipped: {}",
        result.correct, result.wrong, result.skipped
    );
}
