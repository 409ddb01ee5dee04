//! UI Components for Glowquiz.

mod option_button;
mod photo_picker;
mod product_card;
mod step_progress;

pub use option_button::OptionButton;
pub use photo_picker::PhotoPicker;
pub use product_card::ProductCard;
pub use step_progress::StepProgress;
