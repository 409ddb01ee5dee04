//! The two-call submission flow.
//!
//! Strictly sequential: the recommendation call depends on the skin tone
//! returned by the upload call. No retry, no timeout, no cancellation.

use thiserror::Error;

use crate::api::{RecommendClient, RecommendRequest};
use crate::error::QuizError;
use crate::photo::PhotoFile;
use crate::types::{Product, QuizAnswers};

/// Result of a completed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub skin_tone: String,
    pub recommendations: Vec<Product>,
}

/// Failure modes of the submission flow.
///
/// A recommendation failure still carries the tone detected by the first
/// call, so the UI can keep showing it while recommendations stay empty.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submission attempted with no photo chosen. No request is issued.
    #[error("no photo selected")]
    MissingPhoto,

    /// The upload / detection call failed. Nothing was detected.
    #[error("skin tone detection failed")]
    Detect(#[source] QuizError),

    /// Detection succeeded but the recommendation call failed.
    #[error("recommendation lookup failed (detected tone {skin_tone:?})")]
    Recommend {
        skin_tone: String,
        #[source]
        source: QuizError,
    },
}

/// Run the full submission: upload the selfie, then fetch recommendations.
///
/// Answer fields left unset are sent as empty strings; the service applies
/// its own defaults for those.
pub async fn run_submission(
    client: &RecommendClient,
    photo: Option<&PhotoFile>,
    answers: &QuizAnswers,
) -> Result<QuizResults, SubmitError> {
    let photo = photo.ok_or(SubmitError::MissingPhoto)?;

    let report = client
        .detect_skin_tone(photo)
        .await
        .map_err(SubmitError::Detect)?;

    let request = RecommendRequest {
        skin_tone: report.skin_tone.clone(),
        makeup_style: answers.makeup_style.clone().unwrap_or_default(),
        skin_type: answers.skin_type.clone().unwrap_or_default(),
        finish: answers.finish.clone().unwrap_or_default(),
    };

    let recommendations = match client.recommend(&request).await {
        Ok(products) => products,
        Err(source) => {
            return Err(SubmitError::Recommend {
                skin_tone: report.skin_tone,
                source,
            })
        }
    };

    Ok(QuizResults {
        skin_tone: report.skin_tone,
        recommendations,
    })
}
