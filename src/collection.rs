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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::catalog::load_catalog;
use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Everything a command needs: the content directory, the store, and the
/// question catalog.
pub struct Collection {
    pub directory: PathBuf,
    pub db: Database,
    pub catalog: Catalog,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let db_path: PathBuf = directory.join("railprep.db");
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let db: Database = Database::new(db_path)?;

        let catalog = {
            log::debug!("Loading catalog...");
            let start = Instant::now();
            let catalog = load_catalog(&directory)?;
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!(
                "Catalog loaded in {duration}ms: {} quiz items, {} one-liners.",
                catalog.quiz_items.len(),
                catalog.one_liners.len()
            );
            catalog
        };

        Ok(Self {
            directory,
            db,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_existent_directory() {
        assert!(Collection::new(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let dir = tempfile::tempdir().unwrap();
        let collection = Collection::new(Some(dir.path().display().to_string()))?;
        assert!(collection.catalog.quiz_items.is_empty());
        assert!(collection.directory.exists());
        Ok(())
    }
}
