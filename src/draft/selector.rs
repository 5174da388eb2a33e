use super::DraftError;
use serde::{Deserialize, Serialize};

/// A fixed, enumerable set of options addressed by small numeric ids.
pub trait ChoiceOption: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn id(self) -> u8;

    fn from_id(id: u8) -> Result<Self, DraftError> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.id() == id)
            .ok_or(DraftError::InvalidOption(id))
    }
}

/// At most one option is selected. Reselecting the selected option clears it.
///
/// `is_selectable` is advisory for rendering; `select` accepts any option at any time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SingleChoiceSelector<T> {
    selected: Option<T>,
}

impl<T> Default for SingleChoiceSelector<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T: ChoiceOption> SingleChoiceSelector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<T> {
        self.selected
    }

    pub fn select(&mut self, option: T) -> Option<T> {
        self.selected = if self.selected == Some(option) {
            None
        } else {
            Some(option)
        };
        self.selected
    }

    pub fn select_id(&mut self, id: u8) -> Result<Option<T>, DraftError> {
        let option = T::from_id(id)?;
        Ok(self.select(option))
    }

    pub fn is_selectable(&self, option: T) -> bool {
        match self.selected {
            None => true,
            Some(selected) => selected == option,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackOption {
    AiApology,
    BypassToNextStep,
    ConfigureCustom,
}

impl ChoiceOption for FallbackOption {
    const ALL: &'static [Self] = &[
        FallbackOption::AiApology,
        FallbackOption::BypassToNextStep,
        FallbackOption::ConfigureCustom,
    ];

    fn id(self) -> u8 {
        match self {
            Self::AiApology => 1,
            Self::BypassToNextStep => 2,
            Self::ConfigureCustom => 3,
        }
    }
}

impl FallbackOption {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiApology => "ai_apology",
            Self::BypassToNextStep => "bypass_to_next_step",
            Self::ConfigureCustom => "configure_custom",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::AiApology => "Send AI-powered apology",
            Self::BypassToNextStep => "Bypass workflow and move to next step",
            Self::ConfigureCustom => "Configure fallback",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::AiApology => {
                "If the workflow fails, an AI-powered apology is automatically sent to the customer."
            }
            Self::BypassToNextStep => "Executes the fallback configured for super agent",
            Self::ConfigureCustom => {
                "Set up a custom fallback to execute when the main workflow fails"
            }
        }
    }
}

impl std::fmt::Display for FallbackOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
