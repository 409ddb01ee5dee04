//! Quiz domain types.

use serde::{Deserialize, Serialize};

/// Preferred makeup style, offered on step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakeupStyle {
    Natural,
    Glam,
    Bold,
}

impl MakeupStyle {
    /// Wire value sent to the service.
    pub fn as_str(self) -> &'static str {
        match self {
            MakeupStyle::Natural => "natural",
            MakeupStyle::Glam => "glam",
            MakeupStyle::Bold => "bold",
        }
    }

    /// Display label for the option button.
    pub fn label(self) -> &'static str {
        match self {
            MakeupStyle::Natural => "Natural",
            MakeupStyle::Glam => "Glam",
            MakeupStyle::Bold => "Bold",
        }
    }

    pub fn all() -> &'static [MakeupStyle] {
        &[MakeupStyle::Natural, MakeupStyle::Glam, MakeupStyle::Bold]
    }
}

/// Skin type, offered on step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
}

impl SkinType {
    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
        }
    }

    pub fn all() -> &'static [SkinType] {
        &[SkinType::Oily, SkinType::Dry, SkinType::Combination]
    }
}

/// Preferred finish, offered on step 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Matte,
    Dewy,
}

impl Finish {
    pub fn as_str(self) -> &'static str {
        match self {
            Finish::Matte => "matte",
            Finish::Dewy => "dewy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Finish::Matte => "Matte",
            Finish::Dewy => "Dewy",
        }
    }

    pub fn all() -> &'static [Finish] {
        &[Finish::Matte, Finish::Dewy]
    }
}

/// Which answer slot a picked option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    MakeupStyle,
    SkinType,
    Finish,
}

/// Answers collected across steps 2-4.
///
/// Each field stays unset until its step completes. Values are stored as
/// plain strings and accepted as-is; the option enums above enumerate what
/// the UI actually offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizAnswers {
    pub makeup_style: Option<String>,
    pub skin_type: Option<String>,
    pub finish: Option<String>,
}

impl QuizAnswers {
    pub fn set(&mut self, field: QuizField, value: impl Into<String>) {
        let slot = match field {
            QuizField::MakeupStyle => &mut self.makeup_style,
            QuizField::SkinType => &mut self.skin_type,
            QuizField::Finish => &mut self.finish,
        };
        *slot = Some(value.into());
    }

    pub fn get(&self, field: QuizField) -> Option<&str> {
        match field {
            QuizField::MakeupStyle => self.makeup_style.as_deref(),
            QuizField::SkinType => self.skin_type.as_deref(),
            QuizField::Finish => self.finish.as_deref(),
        }
    }

    /// True once all three steps have been answered.
    pub fn is_complete(&self) -> bool {
        self.makeup_style.is_some() && self.skin_type.is_some() && self.finish.is_some()
    }
}

/// One recommended product returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub link: String,
}
