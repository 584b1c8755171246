use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: i16, // index into options
}

impl QuizQuestion {
    pub fn new(prompt: &str, options: Vec<String>, correct_answer: i16) -> Self {
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.to_string(),
            options,
            correct_answer,
        }
    }
}
