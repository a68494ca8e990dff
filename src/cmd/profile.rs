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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::profile::Profile;

pub fn run(directory: Option<String>, name: Option<String>, share: bool) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let profile = Profile::new(collection.db.clone());

    let editing = name.is_some() || share;
    if let Some(name) = name {
        profile.set_display_name(&name)?;
        println!("Saved display name {:?}.", name.trim());
    }
    if share {
        let count = profile.record_share()?;
        println!("Share recorded. Total shares: {count}.");
    }
    if !editing {
        match profile.display_name()? {
            Some(name) => println!("Name: {name}"),
            None => println!("Name: (not set)"),
        }
        println!("Shares: {}", profile.share_count()?);
    }
    Ok(())
}
