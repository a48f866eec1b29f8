use serde::{Deserialize, Serialize};

/// Player-visible progression of a single clue.
///
/// Only ever advances `Hidden -> Question -> Answer`; there is no
/// transition out of `Answer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// Successor in the forward-only progression, `None` from the
    /// terminal state.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One question/answer pair together with its reveal state.
///
/// The texts are fixed at load time; `reveal` changes only through
/// `Board::transition`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::default(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// Text currently on display, `None` while the clue is hidden.
    pub fn visible_text(&self) -> Option<&str> {
        match self.reveal {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    pub(crate) fn set_reveal(&mut self, reveal: RevealState) {
        self.reveal = reveal;
    }
}
