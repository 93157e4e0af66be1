use serde::{Deserialize, Serialize};

use quiz_core::model::{AppSettings, Category, Question};

/// On-disk shape of a question.
///
/// Written `PascalCase`; reads also accept `camelCase` and `snake_case`
/// spellings so hand-edited files keep loading. An empty `ImagePath` means
/// the question has no image, mirroring the domain `Option`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionRecord {
    #[serde(alias = "text")]
    pub text: String,

    #[serde(alias = "answers")]
    pub answers: Vec<String>,

    #[serde(alias = "correctAnswerIndex", alias = "correct_answer_index")]
    pub correct_answer_index: usize,

    #[serde(default, alias = "imagePath", alias = "image_path")]
    pub image_path: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            text: question.text().to_owned(),
            answers: question.answers().to_vec(),
            correct_answer_index: question.correct_answer_index(),
            image_path: question.image_path().unwrap_or_default().to_owned(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if text, answers, or the correct index
    /// fail the domain rules.
    pub fn into_question(self) -> Result<Question, quiz_core::Error> {
        let question = Question::new(
            self.text,
            self.answers,
            self.correct_answer_index,
            Some(self.image_path),
        )?;
        Ok(question)
    }
}

/// On-disk shape of a category: the file name doubles as its identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryRecord {
    #[serde(alias = "name")]
    pub name: String,

    #[serde(alias = "questions")]
    pub questions: Vec<QuestionRecord>,
}

impl CategoryRecord {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name().to_owned(),
            questions: category
                .questions()
                .iter()
                .map(QuestionRecord::from_question)
                .collect(),
        }
    }

    /// Convert the record back into a domain `Category`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the name or any question fails the
    /// domain rules.
    pub fn into_category(self) -> Result<Category, quiz_core::Error> {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        let category = Category::new(self.name, questions)?;
        Ok(category)
    }
}

/// On-disk shape of the settings record.
///
/// Field order is declaration order, kept stable for human readability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsRecord {
    #[serde(alias = "maxQuestions", alias = "max_questions")]
    pub max_questions: u32,
}

impl SettingsRecord {
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            max_questions: settings.max_questions(),
        }
    }

    /// Convert the record back into validated `AppSettings`.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an out-of-range bound.
    pub fn into_settings(self) -> Result<AppSettings, quiz_core::Error> {
        let settings = AppSettings::new(self.max_questions)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_record_round_trip() {
        let question = Question::new(
            "What is the chemical symbol for water?",
            vec!["H2O".into(), "O2".into(), "CO2".into(), "NaCl".into()],
            0,
            Some("img/water.png".into()),
        )
        .unwrap();

        let record = QuestionRecord::from_question(&question);
        assert_eq!(record.image_path, "img/water.png");

        let back = record.into_question().unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn question_record_empty_image_path_means_none() {
        let record = QuestionRecord {
            text: "Q".into(),
            answers: vec!["a".into(), "b".into()],
            correct_answer_index: 1,
            image_path: String::new(),
        };
        assert_eq!(record.into_question().unwrap().image_path(), None);
    }

    #[test]
    fn question_record_rejects_bad_index() {
        let record = QuestionRecord {
            text: "Q".into(),
            answers: vec!["a".into(), "b".into()],
            correct_answer_index: 5,
            image_path: String::new(),
        };
        assert!(record.into_question().is_err());
    }

    #[test]
    fn category_record_serializes_pascal_case() {
        let question = Question::new("Q", vec!["a".into(), "b".into()], 0, None).unwrap();
        let category = Category::new("Science", vec![question]).unwrap();
        let json = serde_json::to_string_pretty(&CategoryRecord::from_category(&category)).unwrap();

        assert!(json.contains("\"Name\""));
        assert!(json.contains("\"Questions\""));
        assert!(json.contains("\"CorrectAnswerIndex\""));
        assert!(json.contains("\"ImagePath\""));
    }

    #[test]
    fn category_record_reads_relaxed_field_case() {
        let json = r#"{
            "name": "Science",
            "questions": [{
                "text": "Q",
                "answers": ["a", "b"],
                "correctAnswerIndex": 1,
                "imagePath": ""
            }]
        }"#;
        let record: CategoryRecord = serde_json::from_str(json).unwrap();
        let category = record.into_category().unwrap();
        assert_eq!(category.name(), "Science");
        assert_eq!(category.questions()[0].correct_answer_index(), 1);
    }

    #[test]
    fn settings_record_round_trip() {
        let settings = AppSettings::new(9).unwrap();
        let json = serde_json::to_string_pretty(&SettingsRecord::from_settings(&settings)).unwrap();
        assert!(json.contains("\"MaxQuestions\": 9"));

        let back: SettingsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_settings().unwrap(), settings);
    }

    #[test]
    fn settings_record_rejects_zero() {
        let record: SettingsRecord = serde_json::from_str(r#"{"MaxQuestions": 0}"#).unwrap();
        assert!(record.into_settings().is_err());
    }
}
