use serde::{Deserialize, Serialize};

/// Display theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to the default.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            _ => Theme::default(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Interface language preference. Indonesian is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Id,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to the default.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "en" => Language::En,
            "id" => Language::Id,
            _ => Language::default(),
        }
    }
}
