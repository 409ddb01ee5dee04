//! Answer option button for the quiz steps.

use dioxus::prelude::*;

/// One selectable answer. Picking it reports the wire value upward; the
/// page dispatches it into the state machine.
#[component]
pub fn OptionButton(label: String, value: String, on_pick: EventHandler<String>) -> Element {
    let pick_value = value.clone();
    rsx! {
        button {
            class: "option-btn",
            r#type: "button",
            onclick: move |_| on_pick.call(pick_value.clone()),
            "{label}"
        }
    }
}
