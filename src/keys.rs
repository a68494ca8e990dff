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

//! Well-known keys in the key-value store. Values are UTF-8 text; structured
//! values are JSON-encoded.

/// The user's display name, a plain string.
pub const USER_NAME_KEY: &str = "UserNameKey";

/// The best score ever recorded, as `"{correct}/{attempted}"`.
pub const USER_HIGH_SCORE_KEY: &str = "UserHighScoreKey";

/// The most recent session's score, as `"{correct}/{attempted}"`.
pub const USER_LAST_SCORE_KEY: &str = "UserLastScoreKey";

/// How many times the user has shared the app, a decimal integer string.
pub const USER_SHARE_COUNT_KEY: &str = "UserShareCountKey";

/// The bookmark collection, a JSON array of tagged question items.
pub const BOOKMARKED_QUESTIONS_KEY: &str = "BookmarkedQuestionsKey";

/// Breakdown of the most recent session, decimal integer strings.
pub const LAST_QUIZ_CORRECT_KEY: &str = "LastQuizCorrectKey";
pub const LAST_QUIZ_WRONG_KEY: &str = "LastQuizWrongKey";
pub const LAST_QUIZ_SKIPPED_KEY: &str = "LastQuizSkippedKey";
pub const LAST_QUIZ_ATTEMPTED_KEY: &str = "LastQuizAttemptedKey";

/// Elapsed time of the most recent session, as `"mm:ss"`.
pub const LAST_QUIZ_TIME_KEY: &str = "LastQuizTimeKey";

/// Whether the user granted reminder notifications: `granted` or `denied`.
/// Absent means the user was never asked.
pub const NOTIFICATION_PERMISSION_KEY: &str = "NotificationPermissionKey";
