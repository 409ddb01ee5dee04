//! Glowquiz Core Library
//!
//! Quiz wizard state machine and recommendation service client.
//!
//! ## Overview
//!
//! Glowquiz walks the user through a five-step makeup quiz: upload a selfie,
//! pick a makeup style, a skin type, and a finish, then submit. Submission
//! sends the selfie to an external detection service, feeds the detected
//! skin tone plus the quiz answers to a recommendation endpoint, and hands
//! back an ordered list of products.
//!
//! The crate is deliberately split from the desktop front end: every user
//! action is a [`QuizIntent`] consumed by [`WizardState::apply`], and the
//! whole submission flow lives in [`run_submission`], so the quiz logic is
//! testable without any rendering framework.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glowquiz_core::{
//!     run_submission, PhotoFile, QuizField, QuizIntent, RecommendClient, WizardState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecommendClient::new("http://127.0.0.1:5000")?;
//!
//!     let mut wizard = WizardState::new();
//!     wizard.apply(QuizIntent::PhotoChosen(PhotoFile::new("selfie.png", std::fs::read("selfie.png")?)));
//!     wizard.apply(QuizIntent::Next);
//!     wizard.apply(QuizIntent::Answer { field: QuizField::MakeupStyle, value: "natural".into() });
//!     wizard.apply(QuizIntent::Answer { field: QuizField::SkinType, value: "oily".into() });
//!     wizard.apply(QuizIntent::Answer { field: QuizField::Finish, value: "matte".into() });
//!
//!     let results = run_submission(&client, wizard.photo.as_ref(), &wizard.answers).await?;
//!     for product in results.recommendations {
//!         println!("{}: {}", product.name, product.link);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod photo;
pub mod submit;
pub mod types;
pub mod wizard;

// Re-exports
pub use api::{
    RecommendClient, RecommendRequest, RecommendResponse, SkinToneReport, DEFAULT_SERVICE_URL,
};
pub use error::{QuizError, QuizResult};
pub use photo::PhotoFile;
pub use submit::{run_submission, QuizResults, SubmitError};
pub use types::{Finish, MakeupStyle, Product, QuizAnswers, QuizField, SkinType};
pub use wizard::{QuizIntent, QuizStep, WizardState};
