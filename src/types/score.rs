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
use std::str::FromStr;

use crate::error::ErrorReport;
use crate::error::fail;

/// A score as shown to the user and as persisted: `"{correct}/{attempted}"`.
/// High-score comparison is on the raw correct count, not the fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLabel {
    correct: u32,
    attempted: u32,
}

impl ScoreLabel {
    pub fn new(correct: u32, attempted: u32) -> Self {
        Self { correct, attempted }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }
}

impl Display for ScoreLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.attempted)
    }
}

impl FromStr for ScoreLabel {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((correct, attempted)) = s.split_once('/') else {
            return fail(format!("Invalid score label: {}", s));
        };
        let correct = correct
            .trim()
            .parse::<u32>()
            .map_err(|e| ErrorReport::new(format!("Invalid score label {s:?}: {e}")))?;
        let attempted = attempted
            .trim()
            .parse::<u32>()
            .map_err(|e| ErrorReport::new(format!("Invalid score label {s:?}: {e}")))?;
        Ok(Self { correct, attempted })
    }
}

/// Format a duration in seconds as `mm:ss`, zero-padded. Sessions are bounded
/// to minutes, so there is no hour rollover.
pub fn format_mm_ss(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ScoreLabel::new(7, 10).to_string(), "7/10");
        assert_eq!(ScoreLabel::new(0, 0).to_string(), "0/0");
    }

    #[test]
    fn test_parse() -> crate::error::Fallible<()> {
        let label: ScoreLabel = "7/10".parse()?;
        assert_eq!(label, ScoreLabel::new(7, 10));
        Ok(())
    }

    #[test]
    fn test_parse_malformed() {
        assert!("".parse::<ScoreLabel>().is_err());
        assert!("7".parse::<ScoreLabel>().is_err());
        assert!("seven/ten".parse::<ScoreLabel>().is_err());
        assert!("7/".parse::<ScoreLabel>().is_err());
    }

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(600), "10:00");
    }
}
