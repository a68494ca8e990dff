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

use clap::Parser;

use crate::cmd;
use crate::cmd::stats::StatsFormat;
use crate::error::Fallible;
use crate::types::item::ItemKind;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Run a multiple-choice quiz session.
    Quiz {
        /// Optional path to the content directory.
        directory: Option<String>,
        /// How many questions to draw (0 for the whole catalog).
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Flip through the one-liner flashcards.
    OneLiners {
        /// Optional path to the content directory.
        directory: Option<String>,
    },
    /// List bookmarked items, or remove one.
    Bookmarks {
        /// Optional path to the content directory.
        directory: Option<String>,
        /// Remove the bookmark with this id (requires --kind).
        #[arg(long)]
        remove: Option<String>,
        /// The kind of the bookmark to remove.
        #[arg(long)]
        kind: Option<ItemKind>,
    },
    /// Show saved scores and statistics.
    Stats {
        /// Optional path to the content directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// View or edit the user profile.
    Profile {
        /// Optional path to the content directory.
        directory: Option<String>,
        /// Set the display name.
        #[arg(long)]
        name: Option<String>,
        /// Record one share action.
        #[arg(long)]
        share: bool,
    },
    /// Register the ten daily study reminders.
    Remind {
        /// Optional path to the content directory.
        directory: Option<String>,
        /// Grant reminder permission before scheduling.
        #[arg(long, conflicts_with = "deny")]
        grant: bool,
        /// Deny reminder permission.
        #[arg(long)]
        deny: bool,
        /// List the registered reminders instead of scheduling.
        #[arg(long)]
        list: bool,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Quiz { directory, count } => cmd::quiz::run(directory, count),
        Command::OneLiners { directory } => cmd::oneliner::run(directory),
        Command::Bookmarks {
            directory,
            remove,
            kind,
        } => cmd::bookmarks::run(directory, remove, kind),
        Command::Stats { directory, format } => cmd::stats::print_stats(directory, format),
        Command::Profile {
            directory,
            name,
            share,
        } => cmd::profile::run(directory, name, share),
        Command::Remind {
            directory,
            grant,
            deny,
            list,
        } => cmd::remind::run(directory, grant, deny, list),
    }
}
