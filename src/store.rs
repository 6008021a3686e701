// src/store.rs

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::submission::Submission;

pub const WELCOME_QUIZ: &str = "<h1>Welcome</h1><p>Waiting for a challenge...</p>";

/// In-memory quiz document and submission log.
///
/// Nothing is persisted; a restart brings back the welcome page and an empty log.
/// A single mutex covers both halves so that replacing the quiz and clearing the
/// log happen as one step. Concurrent writers still race: the last `set_quiz` wins.
#[derive(Debug)]
pub struct QuizStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    quiz_html: String,
    // newest first
    submissions: VecDeque<Submission>,
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new(WELCOME_QUIZ)
    }
}

impl QuizStore {
    pub fn new(initial_html: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                quiz_html: initial_html.into(),
                submissions: VecDeque::new(),
            }),
        }
    }

    /// Replaces the quiz document and drops every recorded submission.
    pub fn set_quiz(&self, html: String) {
        let mut inner = self.lock();
        inner.quiz_html = html;
        inner.submissions.clear();
    }

    pub fn quiz(&self) -> String {
        self.lock().quiz_html.clone()
    }

    pub fn add_submission(&self, submission: Submission) {
        self.lock().submissions.push_front(submission);
    }

    /// Snapshot of the log, newest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().submissions.iter().cloned().collect()
    }

    // A panic while holding the lock cannot leave the strings half-written,
    // so a poisoned mutex is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
