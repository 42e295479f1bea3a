use crate::error::{Invalid, Result};
use alloc::{collections::BTreeSet, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// One of the possible answers to a question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    /// Identifier of the answer. Unique within its quiz.
    pub answer_id: u32,
    /// Text to be displayed on the answer button.
    pub text: String,
    /// Whether this is the right answer.
    pub is_right: bool,
}

/// Unvalidated schema of a quiz, as found on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawQuiz {
    pub id: u64,
    /// Question to be displayed before answering.
    pub question: String,
    /// URL of the illustration revealed alongside the results.
    pub image: String,
    /// Explanatory text revealed alongside the results.
    pub description: String,
    /// Possible answers in display order.
    pub answers: Vec<Answer>,
}

/// A validated quiz. There is at least one answer, all answer identifiers are
/// distinct, and exactly one answer is right.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawQuiz", into = "RawQuiz")]
pub struct Quiz {
    raw: RawQuiz,
    /// Index of the right answer in `raw.answers`.
    right: usize,
}

impl TryFrom<RawQuiz> for Quiz {
    type Error = Invalid;

    fn try_from(raw: RawQuiz) -> Result<Self> {
        if raw.answers.is_empty() {
            return Err(Invalid::NoAnswers);
        }

        let mut seen = BTreeSet::new();
        if let Some(dup) = raw.answers.iter().find(|answer| !seen.insert(answer.answer_id)) {
            return Err(Invalid::DuplicateAnswer(dup.answer_id));
        }

        let mut rights = raw.answers.iter().enumerate().filter(|(_, answer)| answer.is_right).map(|(i, _)| i);
        let right = rights.next().ok_or(Invalid::NoRightAnswer)?;
        if rights.next().is_some() {
            return Err(Invalid::ManyRightAnswers);
        }

        Ok(Self { raw, right })
    }
}

impl From<Quiz> for RawQuiz {
    fn from(quiz: Quiz) -> Self {
        quiz.raw
    }
}

impl Quiz {
    pub const fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn question(&self) -> &str {
        &self.raw.question
    }

    pub fn image(&self) -> &str {
        &self.raw.image
    }

    pub fn description(&self) -> &str {
        &self.raw.description
    }

    pub fn answers(&self) -> &[Answer] {
        &self.raw.answers
    }

    /// Looks up an answer by its identifier.
    pub fn answer(&self, answer_id: u32) -> Option<&Answer> {
        self.raw.answers.iter().find(|answer| answer.answer_id == answer_id)
    }

    pub fn right_answer(&self) -> &Answer {
        &self.raw.answers[self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(answer_id: u32, text: &str, is_right: bool) -> Answer {
        Answer { answer_id, text: text.into(), is_right }
    }

    fn raw(answers: Vec<Answer>) -> RawQuiz {
        RawQuiz {
            id: 42,
            question: "Who wrote The Overcoat?".into(),
            image: "https://example.com/overcoat.jpg".into(),
            description: "Published in 1842.".into(),
            answers,
        }
    }

    #[test]
    fn accepts_single_right_answer() {
        let quiz = Quiz::try_from(raw(vec![answer(1, "Pushkin", false), answer(2, "Gogol", true)])).unwrap();
        assert_eq!(quiz.id(), 42);
        assert_eq!(quiz.answers().len(), 2);
        assert_eq!(quiz.right_answer().answer_id, 2);
        assert_eq!(quiz.answer(1).map(|a| a.text.as_str()), Some("Pushkin"));
        assert!(quiz.answer(3).is_none());
    }

    #[test]
    fn rejects_empty_answers() {
        assert_eq!(Quiz::try_from(raw(Vec::new())), Err(Invalid::NoAnswers));
    }

    #[test]
    fn rejects_missing_right_answer() {
        let result = Quiz::try_from(raw(vec![answer(1, "Pushkin", false), answer(2, "Tolstoy", false)]));
        assert_eq!(result, Err(Invalid::NoRightAnswer));
    }

    #[test]
    fn rejects_several_right_answers() {
        let result = Quiz::try_from(raw(vec![answer(1, "Gogol", true), answer(2, "Also Gogol", true)]));
        assert_eq!(result, Err(Invalid::ManyRightAnswers));
    }

    #[test]
    fn rejects_duplicate_answer_ids() {
        let result = Quiz::try_from(raw(vec![answer(1, "Pushkin", false), answer(1, "Gogol", true)]));
        assert_eq!(result, Err(Invalid::DuplicateAnswer(1)));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let json = r#"{
            "id": 7,
            "question": "?",
            "image": "https://example.com/a.png",
            "description": "",
            "answers": [{ "answer_id": 1, "text": "x", "is_right": false }]
        }"#;
        let err = serde_json::from_str::<Quiz>(json).unwrap_err();
        assert!(err.to_string().contains("no right answer"));

        let json = json.replace("\"is_right\": false", "\"is_right\": true");
        let quiz: Quiz = serde_json::from_str(&json).unwrap();
        assert_eq!(quiz.right_answer().text, "x");
    }
}
