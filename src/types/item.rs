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
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_reference: Option<String>,
}

/// A one-liner flashcard: a question with a short answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneLinerItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// A catalog entry of either kind. The `kind` tag is written into the JSON
/// representation, so bookmarks stay self-describing on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum QuestionItem {
    Quiz(QuizItem),
    OneLiner(OneLinerItem),
}

impl QuestionItem {
    pub fn id(&self) -> &str {
        match self {
            QuestionItem::Quiz(item) => &item.id,
            QuestionItem::OneLiner(item) => &item.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            QuestionItem::Quiz(_) => ItemKind::Quiz,
            QuestionItem::OneLiner(_) => ItemKind::OneLiner,
        }
    }
}

/// The two item kinds. Bookmark uniqueness is on the `(id, kind)` pair: the
/// same id may exist once per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ItemKind {
    Quiz,
    OneLiner,
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Quiz => "Quiz",
            ItemKind::OneLiner => "OneLiner",
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for ItemKind {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Quiz" => Ok(ItemKind::Quiz),
            "OneLiner" => Ok(ItemKind::OneLiner),
            _ => fail(format!("Invalid item kind: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_round_trip() {
        let item = QuestionItem::Quiz(QuizItem {
            id: "q1".to_string(),
            question: "Which zone is headquartered at Gorakhpur?".to_string(),
            options: vec!["NER".to_string(), "NFR".to_string()],
            correct_option_index: 0,
            exam_reference: None,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "Quiz");
        assert_eq!(json["correctOptionIndex"], 0);
        assert!(json.get("examReference").is_none());
        let back: QuestionItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_one_liner_tag() {
        let item = QuestionItem::OneLiner(OneLinerItem {
            id: "ol1".to_string(),
            question: "Who is the current prime minister of India?".to_string(),
            answer: "Shri Narendra Modi".to_string(),
            subject: Some("Polity".to_string()),
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "OneLiner");
        assert_eq!(item.kind(), ItemKind::OneLiner);
        assert_eq!(item.id(), "ol1");
    }

    #[test]
    fn test_missing_id_fails_to_parse() {
        let json = serde_json::json!({
            "kind": "Quiz",
            "question": "Broken entry",
            "options": ["a", "b"],
            "correctOptionIndex": 1,
        });
        assert!(serde_json::from_value::<QuestionItem>(json).is_err());
    }

    #[test]
    fn test_item_kind_strings() {
        assert_eq!(ItemKind::try_from("Quiz".to_string()).unwrap(), ItemKind::Quiz);
        assert_eq!(
            ItemKind::try_from("OneLiner".to_string()).unwrap(),
            ItemKind::OneLiner
        );
        assert!(ItemKind::try_from("Essay".to_string()).is_err());
    }
}
