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

use chrono::Duration;
use chrono::NaiveDateTime;

use crate::db::Database;
use crate::error::Fallible;
use crate::keys::NOTIFICATION_PERMISSION_KEY;
use crate::types::trigger::TriggerRegistration;

/// A fixed daily reminder anchor.
#[derive(Clone, Copy)]
pub struct Reminder {
    pub hour: u32,
    pub minute: u32,
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// The ten daily study reminders.
pub const DAILY_REMINDERS: [Reminder; 10] = [
    Reminder {
        hour: 7,
        minute: 0,
        id: "GK_0700",
        title: "Good morning!",
        body: "Your first fact of the day is waiting. Open the app and learn!",
    },
    Reminder {
        hour: 8,
        minute: 30,
        id: "GK_0830",
        title: "Start the day strong!",
        body: "Have you read today's current affairs yet? Check them now!",
    },
    Reminder {
        hour: 10,
        minute: 0,
        id: "GK_1000",
        title: "Charge your brain!",
        body: "Test your memory with a quick quiz. Are you ready?",
    },
    Reminder {
        hour: 11,
        minute: 30,
        id: "GK_1130",
        title: "Did you know?",
        body: "An interesting railway exam fact, just for you!",
    },
    Reminder {
        hour: 13,
        minute: 0,
        id: "GK_1300",
        title: "Lunch-break learning!",
        body: "Revise a few important one-liners in five minutes.",
    },
    Reminder {
        hour: 15,
        minute: 0,
        id: "GK_1500",
        title: "Challenge time!",
        body: "Get ready to face today's hardest question.",
    },
    Reminder {
        hour: 17,
        minute: 0,
        id: "GK_1700",
        title: "Check your progress!",
        body: "Are you close to today's learning target? Take a look.",
    },
    Reminder {
        hour: 19,
        minute: 0,
        id: "GK_1900",
        title: "Evening study session!",
        body: "Wind down the day with a little more practice.",
    },
    Reminder {
        hour: 20,
        minute: 30,
        id: "GK_2030",
        title: "Hit the target!",
        body: "A quick revision of today's key topics before bed.",
    },
    Reminder {
        hour: 22,
        minute: 0,
        id: "GK_2200",
        title: "Great effort today!",
        body: "You did well. Rest up for tomorrow's challenges. Good night!",
    },
];

/// Compute the next fire instant for a daily anchor: today at `hour:minute`,
/// or the same time tomorrow if that has already passed. Evaluated once at
/// scheduling time; the daily repeat re-fires from the computed anchor.
pub fn next_trigger(now: NaiveDateTime, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let anchor = now.date().and_hms_opt(hour, minute, 0)?;
    if anchor < now {
        Some(anchor + Duration::days(1))
    } else {
        Some(anchor)
    }
}

/// The seam to the platform notification service: queryable pending trigger
/// ids, bulk cancellation, and registration.
pub trait NotificationGateway {
    fn permission_granted(&self) -> Fallible<bool>;
    fn trigger_ids(&self) -> Fallible<Vec<String>>;
    fn cancel_triggers(&self, trigger_ids: &[String]) -> Fallible<()>;
    fn register(&self, registration: &TriggerRegistration) -> Fallible<()>;
}

/// Gateway backed by the local store's trigger registry, with the permission
/// flag persisted in the key-value table.
pub struct StoreGateway {
    db: Database,
}

impl StoreGateway {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn set_permission(&self, granted: bool) -> Fallible<()> {
        let value = if granted { "granted" } else { "denied" };
        self.db.set_value(NOTIFICATION_PERMISSION_KEY, value)
    }

    pub fn list_triggers(&self) -> Fallible<Vec<TriggerRegistration>> {
        self.db.list_triggers()
    }
}

impl NotificationGateway for StoreGateway {
    fn permission_granted(&self) -> Fallible<bool> {
        let permission = self.db.get_value(NOTIFICATION_PERMISSION_KEY)?;
        Ok(permission.as_deref() == Some("granted"))
    }

    fn trigger_ids(&self) -> Fallible<Vec<String>> {
        self.db.trigger_ids()
    }

    fn cancel_triggers(&self, trigger_ids: &[String]) -> Fallible<()> {
        self.db.cancel_triggers(trigger_ids)
    }

    fn register(&self, registration: &TriggerRegistration) -> Fallible<()> {
        self.db.register_trigger(registration)
    }
}

/// Register the ten daily reminders, cancelling any previously registered
/// triggers first so reruns never accumulate duplicates. Skipped entirely
/// when permission is not granted. Returns the number of triggers
/// registered.
pub fn schedule_daily_reminders(
    gateway: &dyn NotificationGateway,
    now: NaiveDateTime,
) -> Fallible<usize> {
    if !gateway.permission_granted()? {
        log::info!("Notification permission not granted; skipping reminder scheduling.");
        return Ok(0);
    }
    let previous = gateway.trigger_ids()?;
    if !previous.is_empty() {
        log::debug!("Cancelling {} previously scheduled triggers.", previous.len());
        gateway.cancel_triggers(&previous)?;
    }
    let mut registered = 0;
    for reminder in DAILY_REMINDERS {
        let Some(fire_at) = next_trigger(now, reminder.hour, reminder.minute) else {
            log::warn!(
                "Skipping reminder {} with invalid anchor {:02}:{:02}.",
                reminder.id,
                reminder.hour,
                reminder.minute
            );
            continue;
        };
        gateway.register(&TriggerRegistration {
            trigger_id: reminder.id.to_string(),
            title: reminder.title.to_string(),
            body: reminder.body.to_string(),
            fire_at,
            repeat_daily: true,
        })?;
        log::debug!("Scheduled {} for {}.", reminder.id, fire_at);
        registered += 1;
    }
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn open_test_gateway() -> (tempfile::TempDir, StoreGateway) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railprep.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (dir, StoreGateway::new(db))
    }

    #[test]
    fn test_future_anchor_fires_today() {
        let fire_at = next_trigger(at(20, 0), 20, 30).unwrap();
        assert_eq!(fire_at, at(20, 30));
    }

    #[test]
    fn test_past_anchor_rolls_to_tomorrow() {
        // Scheduling at 21:00 for a 20:30 anchor lands on 20:30 tomorrow.
        let fire_at = next_trigger(at(21, 0), 20, 30).unwrap();
        assert_eq!(fire_at, at(20, 30) + Duration::days(1));
    }

    #[test]
    fn test_permission_denied_registers_nothing() -> Fallible<()> {
        let (_dir, gateway) = open_test_gateway();
        gateway.set_permission(false)?;
        assert_eq!(schedule_daily_reminders(&gateway, at(12, 0))?, 0);
        assert!(gateway.trigger_ids()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_permission_never_asked_registers_nothing() -> Fallible<()> {
        let (_dir, gateway) = open_test_gateway();
        assert_eq!(schedule_daily_reminders(&gateway, at(12, 0))?, 0);
        assert!(gateway.trigger_ids()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_schedules_all_ten() -> Fallible<()> {
        let (_dir, gateway) = open_test_gateway();
        gateway.set_permission(true)?;
        assert_eq!(schedule_daily_reminders(&gateway, at(12, 0))?, 10);
        let ids = gateway.trigger_ids()?;
        assert_eq!(ids.len(), 10);
        assert!(ids.contains(&"GK_0700".to_string()));
        assert!(ids.contains(&"GK_2200".to_string()));

        // Anchors before noon rolled to tomorrow, the rest stay today.
        for trigger in gateway.list_triggers()? {
            assert!(trigger.repeat_daily);
            if trigger.trigger_id == "GK_0700" {
                assert_eq!(trigger.fire_at, at(7, 0) + Duration::days(1));
            }
            if trigger.trigger_id == "GK_2200" {
                assert_eq!(trigger.fire_at, at(22, 0));
            }
        }
        Ok(())
    }

    #[test]
    fn test_rescheduling_is_idempotent() -> Fallible<()> {
        let (_dir, gateway) = open_test_gateway();
        gateway.set_permission(true)?;
        schedule_daily_reminders(&gateway, at(9, 0))?;
        schedule_daily_reminders(&gateway, at(18, 0))?;
        assert_eq!(gateway.trigger_ids()?.len(), 10);
        Ok(())
    }
}
