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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::bookmarks::BookmarkStore;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::keys::LAST_QUIZ_ATTEMPTED_KEY;
use crate::keys::LAST_QUIZ_CORRECT_KEY;
use crate::keys::LAST_QUIZ_SKIPPED_KEY;
use crate::keys::LAST_QUIZ_TIME_KEY;
use crate::keys::LAST_QUIZ_WRONG_KEY;
use crate::keys::USER_HIGH_SCORE_KEY;
use crate::keys::USER_LAST_SCORE_KEY;
use crate::profile::Profile;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let profile = Profile::new(collection.db.clone());
    let bookmark_store = BookmarkStore::new(collection.db.clone());

    let stats = Stats {
        display_name: profile.display_name()?,
        high_score: collection.db.get_value(USER_HIGH_SCORE_KEY)?,
        last_score: collection.db.get_value(USER_LAST_SCORE_KEY)?,
        last_correct: collection.db.get_value(LAST_QUIZ_CORRECT_KEY)?,
        last_wrong: collection.db.get_value(LAST_QUIZ_WRONG_KEY)?,
        last_skipped: collection.db.get_value(LAST_QUIZ_SKIPPED_KEY)?,
        last_attempted: collection.db.get_value(LAST_QUIZ_ATTEMPTED_KEY)?,
        last_time: collection.db.get_value(LAST_QUIZ_TIME_KEY)?,
        bookmark_count: bookmark_store.load_all()?.len(),
        share_count: profile.share_count()?,
    };

    match format {
        StatsFormat::Text => {
            print_line("Name", stats.display_name.as_deref());
            print_line("High score", stats.high_score.as_deref());
            print_line("Last score", stats.last_score.as_deref());
            print_line("Last correct", stats.last_correct.as_deref());
            print_line("Last wrong", stats.last_wrong.as_deref());
            print_line("Last skipped", stats.last_skipped.as_deref());
            print_line("Last attempted", stats.last_attempted.as_deref());
            print_line("Last time", stats.last_time.as_deref());
            println!("Bookmarks: {}", stats.bookmark_count);
            println!("Shares: {}", stats.share_count);
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

fn print_line(label: &str, value: Option<&str>) {
    println!("{label}: {}", value.unwrap_or("-"));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    display_name: Option<String>,
    high_score: Option<String>,
    last_score: Option<String>,
    last_correct: Option<String>,
    last_wrong: Option<String>,
    last_skipped: Option<String>,
    last_attempted: Option<String>,
    last_time: Option<String>,
    bookmark_count: usize,
    share_count: u32,
}
