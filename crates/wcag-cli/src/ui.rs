use std::io::IsTerminal;

use wcag_core::Theme;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// How this invocation renders: output format, terminal capabilities and the
/// theme from the user's preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ui {
    pub format: OutputFormat,
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
    pub theme: Theme,
}

impl Ui {
    /// No colour, no spinner, no width limit.
    #[must_use]
    pub fn plain(format: OutputFormat) -> Self {
        Self {
            format,
            table_color: false,
            progress: false,
            term_width: None,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn detect(flags: &GlobalFlags, theme: Theme) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let table_color = match flags.color {
            ColorMode::Always => flags.format == OutputFormat::Table,
            ColorMode::Never => false,
            ColorMode::Auto => {
                is_tty
                    && flags.format == OutputFormat::Table
                    && !flags.quiet
                    && std::env::var_os("NO_COLOR").is_none()
            }
        };

        let progress =
            std::io::stderr().is_terminal() && !flags.quiet && flags.format == OutputFormat::Table;

        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            format: flags.format,
            table_color,
            progress,
            term_width,
            theme,
        }
    }

    /// Same terminal, different theme. Used right after a theme change.
    #[must_use]
    pub const fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    #[must_use]
    pub const fn table_options(&self) -> TableOptions {
        TableOptions {
            max_width: self.term_width,
            color: self.table_color,
            theme: self.theme,
        }
    }
}
