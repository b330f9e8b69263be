use std::str::FromStr;

use clap::Subcommand;
use wcag_core::Theme;

#[derive(Clone, Debug, Subcommand)]
pub enum PrefsCommands {
    /// Show the current preferences.
    Show,
    /// Switch theme: light, dark, high-contrast.
    Theme { theme: Theme },
    /// Change the root font size: increase, decrease, reset, or a size in px.
    Font { change: FontChange },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontChange {
    Increase,
    Decrease,
    Reset,
    Set(u8),
}

impl FromStr for FontChange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increase" | "+" => Ok(Self::Increase),
            "decrease" | "-" => Ok(Self::Decrease),
            "reset" => Ok(Self::Reset),
            other => other
                .trim_end_matches("px")
                .parse()
                .map(Self::Set)
                .map_err(|_| format!("expected increase, decrease, reset or a size in px, got '{s}'")),
        }
    }
}
