//! Step progress indicator.

use dioxus::prelude::*;

/// Row of dots showing how far along the quiz the user is.
#[component]
pub fn StepProgress(step: u8, total: u8) -> Element {
    rsx! {
        div { class: "step-progress",
            for n in 1..=total {
                span {
                    key: "{n}",
                    class: if n <= step { "step-dot step-dot--done" } else { "step-dot" },
                }
            }
            span { class: "step-progress__label", "step {step} of {total}" }
        }
    }
}
