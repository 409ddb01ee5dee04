//! The quiz page - five sequential screens ending in submission.
//!
//! Each user action becomes a QuizIntent dispatched into the wizard state
//! machine; the two service calls run in a spawned task on submit.

use dioxus::prelude::*;

use glowquiz_core::{
    run_submission, Finish, MakeupStyle, PhotoFile, Product, QuizField, QuizIntent, QuizStep,
    SkinType, SubmitError, WizardState,
};

use crate::components::{OptionButton, PhotoPicker, ProductCard, StepProgress};
use crate::context::{use_client, use_client_ready};

/// User-facing notices, word for word what the service's front end shows.
const MSG_MISSING_PHOTO: &str = "Please select an image!";
const MSG_REQUEST_FAILED: &str = "Something went wrong. Please try again!";

/// Quiz page component.
#[component]
pub fn Quiz() -> Element {
    let client = use_client();
    let client_ready = use_client_ready();

    let mut wizard = use_signal(WizardState::new);
    let mut skin_tone = use_signal(|| Option::<String>::None);
    let mut recommendations = use_signal(Vec::<Product>::new);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let on_photo = move |photo: PhotoFile| {
        wizard.write().apply(QuizIntent::PhotoChosen(photo));
    };

    let on_submit = move |_| {
        // Presence check happens synchronously, before any network work
        if wizard.read().photo.is_none() {
            notice.set(Some(MSG_MISSING_PHOTO.to_string()));
            return;
        }
        if submitting() {
            return;
        }

        submitting.set(true);
        notice.set(None);

        spawn(async move {
            let (photo, answers) = {
                let state = wizard.read();
                (state.photo.clone(), state.answers.clone())
            };

            let shared = client();
            let guard = shared.read().await;
            let Some(ref service) = *guard else {
                tracing::error!("Submit before the service client was ready");
                notice.set(Some(MSG_REQUEST_FAILED.to_string()));
                submitting.set(false);
                return;
            };

            match run_submission(service, photo.as_ref(), &answers).await {
                Ok(results) => {
                    skin_tone.set(Some(results.skin_tone));
                    recommendations.set(results.recommendations);
                }
                Err(SubmitError::MissingPhoto) => {
                    notice.set(Some(MSG_MISSING_PHOTO.to_string()));
                }
                Err(SubmitError::Recommend { skin_tone: tone, source }) => {
                    // Partial success: keep the detected tone visible,
                    // recommendations stay empty
                    tracing::error!("Recommendation call failed: {}", source);
                    skin_tone.set(Some(tone));
                    notice.set(Some(MSG_REQUEST_FAILED.to_string()));
                }
                Err(SubmitError::Detect(e)) => {
                    tracing::error!("Skin tone detection failed: {}", e);
                    notice.set(Some(MSG_REQUEST_FAILED.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let step = wizard.read().step;
    let on_photo_step = step == QuizStep::Photo;
    let on_style_step = step == QuizStep::Style;
    let on_skin_step = step == QuizStep::Skin;
    let on_finish_step = step == QuizStep::Finish;
    let on_review_step = step == QuizStep::Review;

    rsx! {
        main { class: "quiz",
            header { class: "quiz-header",
                h1 { class: "page-title", "Personalized Makeup Quiz" }
                StepProgress { step: step.number(), total: QuizStep::COUNT }
            }

            if on_photo_step {
                section { class: "quiz-step",
                    h2 { class: "step-title", "Upload a Selfie" }
                    PhotoPicker {
                        on_select: on_photo,
                        selected: wizard.read().photo.clone(),
                    }
                    button {
                        class: "btn-next",
                        onclick: move |_| wizard.write().apply(QuizIntent::Next),
                        "Next →"
                    }
                }
            }

            if on_style_step {
                section { class: "quiz-step",
                    h2 { class: "step-title", "What's your preferred makeup style?" }
                    div { class: "option-group",
                        for style in MakeupStyle::all() {
                            OptionButton {
                                key: "{style.as_str()}",
                                label: style.label().to_string(),
                                value: style.as_str().to_string(),
                                on_pick: move |value: String| {
                                    wizard.write().apply(QuizIntent::Answer {
                                        field: QuizField::MakeupStyle,
                                        value,
                                    });
                                },
                            }
                        }
                    }
                }
            }

            if on_skin_step {
                section { class: "quiz-step",
                    h2 { class: "step-title", "What's your skin type?" }
                    div { class: "option-group",
                        for skin in SkinType::all() {
                            OptionButton {
                                key: "{skin.as_str()}",
                                label: skin.label().to_string(),
                                value: skin.as_str().to_string(),
                                on_pick: move |value: String| {
                                    wizard.write().apply(QuizIntent::Answer {
                                        field: QuizField::SkinType,
                                        value,
                                    });
                                },
                            }
                        }
                    }
                }
            }

            if on_finish_step {
                section { class: "quiz-step",
                    h2 { class: "step-title", "What type of finish do you prefer?" }
                    div { class: "option-group",
                        for finish in Finish::all() {
                            OptionButton {
                                key: "{finish.as_str()}",
                                label: finish.label().to_string(),
                                value: finish.as_str().to_string(),
                                on_pick: move |value: String| {
                                    wizard.write().apply(QuizIntent::Answer {
                                        field: QuizField::Finish,
                                        value,
                                    });
                                },
                            }
                        }
                    }
                }
            }

            if on_review_step {
                section { class: "quiz-step",
                    button {
                        class: "btn-submit",
                        onclick: on_submit,
                        disabled: submitting() || !client_ready(),
                        if submitting() {
                            "Working our magic..."
                        } else {
                            "✨ Get Recommendations! ✨"
                        }
                    }
                }
            }

            if let Some(msg) = notice() {
                div { class: "quiz-notice", "⚠️ {msg}" }
            }

            if let Some(tone) = skin_tone() {
                h2 { class: "tone-line",
                    "Detected Skin Tone: "
                    span { class: "tone-value", "{tone}" }
                }
            }

            if !recommendations().is_empty() {
                section { class: "results",
                    h2 { class: "section-header", "💄 Recommended Products:" }
                    div { class: "product-grid",
                        for product in recommendations() {
                            ProductCard { key: "{product.id}", product: product.clone() }
                        }
                    }
                }
            }
        }
    }
}
