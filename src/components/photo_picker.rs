//! Photo Picker Component
//!
//! File dialog plus an inline preview of the chosen selfie.

use base64::Engine;
use dioxus::prelude::*;
use glowquiz_core::PhotoFile;
use rfd::FileDialog;

/// Photo picker button with preview
///
/// # Examples
///
/// ```rust
/// rsx! {
///     PhotoPicker {
///         on_select: move |photo| {
///             // Handle the chosen file
///             println!("Picked: {}", photo.file_name);
///         },
///     }
/// }
/// ```
#[component]
pub fn PhotoPicker(
    /// Callback with the chosen photo
    on_select: EventHandler<PhotoFile>,
    /// Currently selected photo, if any
    #[props(default = None)]
    selected: Option<PhotoFile>,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn_blocking so the UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select a Selfie")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let file_name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("selfie")
                            .to_string();
                        picking.set(false);
                        on_select.call(PhotoFile::new(file_name, bytes));
                    }
                    Err(e) => {
                        error.set(Some(format!("Failed to read file: {:?}", e)));
                        picking.set(false);
                    }
                },
                Ok(None) => {
                    // User cancelled
                    picking.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {:?}", e)));
                    picking.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "photo-picker",
            button {
                class: "photo-picker-btn",
                onclick: handle_pick,
                disabled: picking(),
                if picking() {
                    "Opening..."
                } else if selected.is_some() {
                    "Change Photo"
                } else {
                    "📷 Choose a Photo"
                }
            }

            if let Some(ref photo) = selected {
                {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&photo.bytes);
                    let data_uri = format!("data:{};base64,{}", photo.mime, encoded);
                    rsx! {
                        div { class: "photo-preview",
                            img {
                                class: "photo-preview__img",
                                src: "{data_uri}",
                                alt: "Selected selfie",
                            }
                            span { class: "photo-preview__name", "{photo.file_name}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "photo-picker__error",
                    "⚠️ {err}"
                }
            }
        }
    }
}
