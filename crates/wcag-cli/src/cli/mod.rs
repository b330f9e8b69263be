use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wcag` binary.
#[derive(Debug, Parser)]
#[command(
    name = "wcag",
    version,
    about = "WCAG Consulta - browse WCAG 2.1/2.2 success criteria"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table colours: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use wcag_core::{Level, Theme};

    use super::subcommands::{AdminCommands, AuthCommands, FontChange, PrefsCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["wcag", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["wcag", "health", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Health(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["wcag", "--format", "xml", "list"]).is_err());
    }

    #[test]
    fn search_is_an_alias_of_list_and_joins_words() {
        let cli = Cli::try_parse_from(["wcag", "search", "focus", "visible", "--offline"])
            .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.query(), "focus visible");
        assert!(args.offline);
    }

    #[test]
    fn prefs_theme_and_font_parse() {
        let cli = Cli::try_parse_from(["wcag", "prefs", "theme", "high-contrast"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Prefs {
                action: PrefsCommands::Theme { theme: Theme::HighContrast }
            }
        ));

        let cli = Cli::try_parse_from(["wcag", "prefs", "font", "17"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Prefs {
                action: PrefsCommands::Font { change: FontChange::Set(17) }
            }
        ));
        assert!(Cli::try_parse_from(["wcag", "prefs", "font", "huge"]).is_err());
    }

    #[test]
    fn login_requires_a_password_source() {
        assert!(Cli::try_parse_from(["wcag", "auth", "login", "--email", "a@b.c"]).is_err());
        let cli = Cli::try_parse_from([
            "wcag",
            "auth",
            "login",
            "--email",
            "a@b.c",
            "--password-stdin",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Login(ref args)
            } if args.password.password_stdin
        ));
    }

    #[test]
    fn admin_create_collects_repeated_keywords() {
        let cli = Cli::try_parse_from([
            "wcag",
            "admin",
            "create",
            "--criterion-id",
            "9.9.9",
            "--title",
            "Custom",
            "--level",
            "aa",
            "-k",
            "one",
            "-k",
            "two",
        ])
        .expect("cli should parse");
        let Commands::Admin {
            action: AdminCommands::Create(args),
        } = cli.command
        else {
            panic!("expected admin create");
        };
        assert_eq!(args.level, Level::Aa);
        assert_eq!(args.keywords, vec!["one", "two"]);
        assert_eq!(args.principle, "");
    }

    #[test]
    fn admin_delete_accepts_yes() {
        let cli = Cli::try_parse_from(["wcag", "admin", "delete", "1700000000000", "--yes"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::Delete { yes: true, .. }
            }
        ));
    }
}
