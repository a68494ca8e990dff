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

use chrono::NaiveDateTime;

/// A notification trigger as handed to the notification service: a stable
/// identifier, display content, the next fire instant, and whether the
/// service should re-fire it every 24 hours from that anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerRegistration {
    pub trigger_id: String,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
    pub repeat_daily: bool,
}
