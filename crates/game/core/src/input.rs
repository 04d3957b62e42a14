//! Button symbols accepted by the action executor.
//!
//! The decoder never presses buttons itself; this module only defines the
//! closed symbol set and parses free-form sequences such as `"up up a"`.

use std::str::FromStr;

use crate::error::{DecoderError, ErrorSeverity};

/// One Game Boy button.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Button {
    A,
    B,
    Start,
    Select,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::A,
        Button::B,
        Button::Start,
        Button::Select,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Button::Up | Button::Down | Button::Left | Button::Right
        )
    }
}

/// Errors from parsing a button sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// No recognized button symbol in the input.
    #[error("no valid button in {input:?}")]
    Empty { input: String },
}

impl DecoderError for InputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "INPUT_EMPTY",
        }
    }
}

/// Ordered, non-empty list of button presses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ButtonSequence(Vec<Button>);

impl ButtonSequence {
    /// Parses whitespace- or comma-separated symbols; unknown symbols are
    /// skipped with a warning.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let buttons: Vec<Button> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|symbol| !symbol.is_empty())
            .filter_map(|symbol| match Button::from_str(symbol) {
                Ok(button) => Some(button),
                Err(_) => {
                    tracing::warn!(symbol, "ignoring unknown button symbol");
                    None
                }
            })
            .collect();

        if buttons.is_empty() {
            return Err(InputError::Empty {
                input: input.to_owned(),
            });
        }
        Ok(Self(buttons))
    }

    pub fn buttons(&self) -> &[Button] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ButtonSequence {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl IntoIterator for ButtonSequence {
    type Item = Button;
    type IntoIter = std::vec::IntoIter<Button>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
