use serde::Serialize;
use wcag_config::{FontSize, PreferenceStore, Preferences};
use wcag_core::Theme;

use crate::cli::subcommands::{FontChange, PrefsCommands};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PrefsView {
    theme: Theme,
    theme_label: &'static str,
    /// Root font size of the presentation state.
    font_size: String,
    can_increase: bool,
    can_decrease: bool,
    path: String,
}

impl PrefsView {
    fn new(prefs: Preferences, path: &std::path::Path) -> Self {
        Self {
            theme: prefs.theme,
            theme_label: prefs.theme.label(),
            font_size: prefs.font_size.to_string(),
            can_increase: !prefs.font_size.is_max(),
            can_decrease: !prefs.font_size.is_min(),
            path: path.display().to_string(),
        }
    }
}

pub fn handle(action: &PrefsCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let mut store = ctx.preferences()?;
    let prefs = apply(action, &mut store)?;
    // A theme change applies to this confirmation already.
    let ui = ctx.ui.with_theme(prefs.theme);
    output(&PrefsView::new(prefs, store.path()), &ui)
}

fn apply(action: &PrefsCommands, store: &mut PreferenceStore) -> anyhow::Result<Preferences> {
    let prefs = match action {
        PrefsCommands::Show => store.get(),
        PrefsCommands::Theme { theme } => store.set_theme(*theme)?,
        PrefsCommands::Font { change } => match change {
            FontChange::Increase => store.increase_font()?,
            FontChange::Decrease => store.decrease_font()?,
            FontChange::Reset => store.reset_font()?,
            FontChange::Set(px) => {
                let size = FontSize::clamped(i64::from(*px));
                if size.px() != *px {
                    tracing::warn!(
                        requested = px,
                        applied = size.px(),
                        "font size limited to {}..={}px",
                        FontSize::MIN,
                        FontSize::MAX
                    );
                }
                store.set_font(size)?
            }
        },
    };
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reports_font_bounds() {
        let prefs = Preferences {
            theme: Theme::Dark,
            font_size: FontSize::clamped(18),
        };
        let view = PrefsView::new(prefs, std::path::Path::new("/tmp/preferences.toml"));
        assert_eq!(view.font_size, "18px");
        assert!(!view.can_increase);
        assert!(view.can_decrease);
        assert_eq!(view.theme_label, "Dark theme");
    }

    #[test]
    fn theme_change_is_persisted_and_styles_the_confirmation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        let mut config = wcag_config::WcagConfig::default();
        config.general.preferences_path = path.display().to_string();
        let ctx = AppContext::new(config);
        let mut store = ctx.preferences().expect("store");

        let prefs = apply(&PrefsCommands::Theme { theme: Theme::Dark }, &mut store).expect("apply");

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(ctx.ui.with_theme(prefs.theme).theme, Theme::Dark);
        assert_eq!(ctx.preferences().expect("reload").get().theme, Theme::Dark);
        assert_eq!(ctx.startup_preferences().theme, Theme::Dark);
    }

    #[test]
    fn oversized_font_is_clamped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = PreferenceStore::load(dir.path().join("preferences.toml")).expect("store");
        let prefs = apply(
            &PrefsCommands::Font {
                change: FontChange::Set(40),
            },
            &mut store,
        )
        .expect("apply");
        assert_eq!(prefs.font_size, FontSize::clamped(18));
    }
}
