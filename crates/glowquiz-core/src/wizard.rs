//! Quiz wizard state machine.
//!
//! Pure state transitions, no I/O. Every user action is a [`QuizIntent`]
//! consumed by [`WizardState::apply`], which keeps the flow testable
//! without any rendering framework.

use crate::photo::PhotoFile;
use crate::types::{QuizAnswers, QuizField};

/// One screen of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Step 1: choose a selfie.
    Photo,
    /// Step 2: preferred makeup style.
    Style,
    /// Step 3: skin type.
    Skin,
    /// Step 4: preferred finish.
    Finish,
    /// Step 5: review and submit. Terminal for navigation.
    Review,
}

impl QuizStep {
    /// Total number of screens.
    pub const COUNT: u8 = 5;

    /// Screen number, 1 through 5.
    pub fn number(self) -> u8 {
        match self {
            QuizStep::Photo => 1,
            QuizStep::Style => 2,
            QuizStep::Skin => 3,
            QuizStep::Finish => 4,
            QuizStep::Review => 5,
        }
    }

    /// The following screen. `Review` stays put; the step never decreases.
    pub fn next(self) -> Self {
        match self {
            QuizStep::Photo => QuizStep::Style,
            QuizStep::Style => QuizStep::Skin,
            QuizStep::Skin => QuizStep::Finish,
            QuizStep::Finish => QuizStep::Review,
            QuizStep::Review => QuizStep::Review,
        }
    }
}

/// A discrete user action fed to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizIntent {
    /// A photo was chosen on step 1. Does not advance the step.
    PhotoChosen(PhotoFile),
    /// Explicit "Next". Unconditional; photo presence is only checked at
    /// submission.
    Next,
    /// An option button was picked on steps 2-4. Records the value and
    /// advances by exactly one step.
    Answer { field: QuizField, value: String },
}

/// In-memory wizard state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: QuizStep,
    pub photo: Option<PhotoFile>,
    pub answers: QuizAnswers,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Photo,
            photo: None,
            answers: QuizAnswers::default(),
        }
    }

    /// Feed one user action through the transition function.
    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::PhotoChosen(photo) => {
                self.photo = Some(photo);
            }
            QuizIntent::Next => {
                self.step = self.step.next();
            }
            QuizIntent::Answer { field, value } => {
                self.answers.set(field, value);
                self.step = self.step.next();
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> PhotoFile {
        PhotoFile::new("selfie.png", vec![0x89, b'P', b'N', b'G'])
    }

    #[test]
    fn test_starts_on_photo_step() {
        let state = WizardState::new();
        assert_eq!(state.step, QuizStep::Photo);
        assert_eq!(state.step.number(), 1);
        assert!(state.photo.is_none());
    }

    #[test]
    fn test_photo_chosen_does_not_advance() {
        let mut state = WizardState::new();
        state.apply(QuizIntent::PhotoChosen(photo()));

        assert_eq!(state.step, QuizStep::Photo);
        assert!(state.photo.is_some());
    }

    #[test]
    fn test_next_advances_without_a_photo() {
        let mut state = WizardState::new();
        state.apply(QuizIntent::Next);

        assert_eq!(state.step, QuizStep::Style);
        assert!(state.photo.is_none());
    }

    #[test]
    fn test_answer_records_and_advances_by_one() {
        let mut state = WizardState::new();
        state.apply(QuizIntent::Next);

        state.apply(QuizIntent::Answer {
            field: QuizField::MakeupStyle,
            value: "glam".to_string(),
        });
        assert_eq!(state.answers.makeup_style.as_deref(), Some("glam"));
        assert_eq!(state.step, QuizStep::Skin);

        state.apply(QuizIntent::Answer {
            field: QuizField::SkinType,
            value: "oily".to_string(),
        });
        assert_eq!(state.answers.skin_type.as_deref(), Some("oily"));
        assert_eq!(state.step, QuizStep::Finish);

        state.apply(QuizIntent::Answer {
            field: QuizField::Finish,
            value: "matte".to_string(),
        });
        assert_eq!(state.answers.finish.as_deref(), Some("matte"));
        assert_eq!(state.step, QuizStep::Review);
        assert!(state.answers.is_complete());
    }

    #[test]
    fn test_review_is_terminal_for_navigation() {
        let mut state = WizardState::new();
        for _ in 0..10 {
            state.apply(QuizIntent::Next);
        }
        assert_eq!(state.step, QuizStep::Review);
        assert_eq!(state.step.number(), QuizStep::COUNT);
    }

    #[test]
    fn test_re_answer_keeps_last_value() {
        // Not reachable from the UI, but the machine must not corrupt state.
        let mut state = WizardState::new();
        state.apply(QuizIntent::Answer {
            field: QuizField::Finish,
            value: "matte".to_string(),
        });
        state.apply(QuizIntent::Answer {
            field: QuizField::Finish,
            value: "dewy".to_string(),
        });

        assert_eq!(state.answers.finish.as_deref(), Some("dewy"));
        assert_eq!(state.step, QuizStep::Skin);
    }
}
