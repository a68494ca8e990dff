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

use crate::db::Database;
use crate::error::Fallible;
use crate::error::fail;
use crate::keys::USER_NAME_KEY;
use crate::keys::USER_SHARE_COUNT_KEY;

/// The user profile: an optional display name and a share counter. Both
/// persist indefinitely until overwritten.
pub struct Profile {
    db: Database,
}

impl Profile {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn display_name(&self) -> Fallible<Option<String>> {
        self.db.get_value(USER_NAME_KEY)
    }

    pub fn set_display_name(&self, name: &str) -> Fallible<()> {
        let name = name.trim();
        if name.is_empty() {
            return fail("display name cannot be empty.");
        }
        self.db.set_value(USER_NAME_KEY, name)
    }

    /// How many times the user has shared the app. An absent or unreadable
    /// counter reads as zero.
    pub fn share_count(&self) -> Fallible<u32> {
        match self.db.get_value(USER_SHARE_COUNT_KEY)? {
            None => Ok(0),
            Some(raw) => match raw.parse::<u32>() {
                Ok(count) => Ok(count),
                Err(e) => {
                    log::warn!("Ignoring unreadable share count {raw:?}: {e}");
                    Ok(0)
                }
            },
        }
    }

    /// Record one successful share action. Returns the new count.
    pub fn record_share(&self) -> Fallible<u32> {
        let count = self.share_count()? + 1;
        self.db
            .set_value(USER_SHARE_COUNT_KEY, &count.to_string())?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn open_test_profile() -> (tempfile::TempDir, Profile) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railprep.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (dir, Profile::new(db))
    }

    #[test]
    fn test_display_name() -> Fallible<()> {
        let (_dir, profile) = open_test_profile();
        assert_eq!(profile.display_name()?, None);
        profile.set_display_name("  Asha  ")?;
        assert_eq!(profile.display_name()?, Some("Asha".to_string()));
        Ok(())
    }

    #[test]
    fn test_empty_display_name_rejected() {
        let (_dir, profile) = open_test_profile();
        assert!(profile.set_display_name("   ").is_err());
    }

    #[test]
    fn test_share_count_increments() -> Fallible<()> {
        let (_dir, profile) = open_test_profile();
        assert_eq!(profile.share_count()?, 0);
        assert_eq!(profile.record_share()?, 1);
        assert_eq!(profile.record_share()?, 2);
        assert_eq!(profile.share_count()?, 2);
        Ok(())
    }

    #[test]
    fn test_unreadable_share_count_reads_as_zero() -> Fallible<()> {
        let (_dir, profile) = open_test_profile();
        profile.db.set_value(USER_SHARE_COUNT_KEY, "lots")?;
        assert_eq!(profile.share_count()?, 0);
        assert_eq!(profile.record_share()?, 1);
        Ok(())
    }
}
