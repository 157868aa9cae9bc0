//! Answer Set - the user's yes/no responses for one session.

use serde::Serialize;
use std::collections::BTreeMap;

use super::catalog::{Catalog, Category, Question};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Mapping from question id to answer.
///
/// Unanswered questions count as "No" everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<&'static str, bool>,
}

/// A question answered "No", surfaced as an improvement opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissedItem {
    pub category: Category,
    pub question: &'static str,
    pub question_id: &'static str,
    pub icon: &'static str,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer set with every question answered the same way.
    pub fn uniform(value: bool) -> Self {
        let mut set = Self::new();
        for question in Catalog::questions() {
            set.record(question, value);
        }
        set
    }

    /// Records an answer for a known question.
    pub fn record(&mut self, question: &'static Question, value: bool) {
        self.answers.insert(question.id, value);
    }

    /// Records an answer by question id or text.
    ///
    /// # Errors
    /// `QuestionNotFound` when the key matches no catalog question.
    pub fn set(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        let question = Catalog::find(key).ok_or_else(|| {
            DomainError::new(ErrorCode::QuestionNotFound, format!("Unknown question: {}", key))
        })?;
        self.record(question, value);
        Ok(())
    }

    /// The answer for a question, `false` when unanswered.
    pub fn get(&self, question: &Question) -> bool {
        self.answers.get(question.id).copied().unwrap_or(false)
    }

    /// Whether the question has an explicit answer.
    pub fn is_answered(&self, question: &Question) -> bool {
        self.answers.contains_key(question.id)
    }

    /// Number of explicitly answered questions.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of "Yes" answers across the questionnaire.
    pub fn yes_count(&self) -> usize {
        self.answers.values().filter(|v| **v).count()
    }

    /// Number of "Yes" answers within one category.
    pub fn yes_count_in(&self, category: Category) -> usize {
        category.questions().filter(|q| self.get(q)).count()
    }

    /// Every question not answered "Yes", in catalog order.
    pub fn missed_items(&self) -> Vec<MissedItem> {
        Catalog::questions()
            .iter()
            .filter(|q| !self.get(q))
            .map(|q| MissedItem {
                category: q.category,
                question: q.text,
                question_id: q.id,
                icon: q.category.icon(),
            })
            .collect()
    }
}
