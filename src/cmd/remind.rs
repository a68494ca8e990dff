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

use chrono::Local;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::notify::StoreGateway;
use crate::notify::schedule_daily_reminders;

pub fn run(directory: Option<String>, grant: bool, deny: bool, list: bool) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let gateway = StoreGateway::new(collection.db.clone());

    if grant {
        gateway.set_permission(true)?;
        println!("Reminder permission granted.");
    } else if deny {
        gateway.set_permission(false)?;
        println!("Reminder permission denied; reminders will not be scheduled.");
        if !list {
            return Ok(());
        }
    }

    if list {
        let triggers = gateway.list_triggers()?;
        if triggers.is_empty() {
            println!("No reminders registered.");
        }
        for trigger in triggers {
            println!("{}  {}  {}", trigger.trigger_id, trigger.fire_at, trigger.title);
        }
        return Ok(());
    }

    // Scheduling is best-effort and never fails the command.
    let now = Local::now().naive_local();
    match schedule_daily_reminders(&gateway, now) {
        Ok(0) => {
            println!("Reminders not scheduled (permission not granted). Run with --grant to enable.")
        }
        Ok(count) => println!("Scheduled {count} daily reminders."),
        Err(e) => log::error!("Failed to schedule reminders: {e}"),
    }
    Ok(())
}
