pub mod panel;

use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;

use serde::Serialize;
use wcag_core::CardPatch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::cli::subcommands::admin::{CreateCardArgs, UpdateCardArgs};
use crate::context::AppContext;
use crate::output::{output, output_records};
use crate::progress::Progress;
use crate::ui::Ui;

use self::panel::{AdminPanel, CardDraft, PanelError};

const CARD_COLUMNS: &[&str] = &["id", "criterion_id", "level", "title", "updated_at"];

#[derive(Serialize)]
struct AdminDeleteResponse {
    deleted: bool,
    id: String,
}

pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut sessions = ctx.sessions()?;
    sessions.restore().await;
    let token = sessions.access_token().await?;
    let panel = AdminPanel::open(Arc::clone(sessions.client()), sessions.user(), token)?;

    match run(&panel, action, &ctx.ui, flags).await {
        Err(error) if is_rejected_session(&error) => {
            sessions.invalidate();
            anyhow::bail!("the card store rejected your session: run `wcag auth login`")
        }
        other => other,
    }
}

fn is_rejected_session(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<PanelError>()
        .is_some_and(PanelError::is_unauthorized)
}

async fn run(
    panel: &AdminPanel,
    action: &AdminCommands,
    ui: &Ui,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::List => {
            let progress = Progress::spinner(ui, "loading cards");
            if let Err(error) = panel.refresh().await {
                progress.finish_err("could not load cards");
                return Err(error.into());
            }
            progress.finish_clear();
            output_records(&panel.cards(), CARD_COLUMNS, ui)
        }
        AdminCommands::Create(args) => {
            let mut draft = CardDraft::from(args);
            let card = panel.submit(&mut draft).await?;
            output(&card, ui)
        }
        AdminCommands::Update(args) => {
            let patch = patch_from(args);
            if patch.is_empty() {
                anyhow::bail!("nothing to update: pass at least one field flag");
            }
            let card = panel.update(&args.id, &patch).await?;
            output(&card, ui)
        }
        AdminCommands::Delete { id, yes } => {
            let deleted = panel.delete(id, |id| *yes || confirm_delete(id)).await?;
            if !deleted && !flags.quiet {
                eprintln!("Deletion cancelled.");
            }
            output(
                &AdminDeleteResponse {
                    deleted,
                    id: id.clone(),
                },
                ui,
            )
        }
    }
}

impl From<&CreateCardArgs> for CardDraft {
    fn from(args: &CreateCardArgs) -> Self {
        let mut draft = Self::default();
        draft.criterion_id.clone_from(&args.criterion_id);
        draft.title.clone_from(&args.title);
        draft.level = args.level;
        draft.principle.clone_from(&args.principle);
        draft.category.clone_from(&args.category);
        draft.description.clone_from(&args.description);
        draft.url.clone_from(&args.url);
        for keyword in &args.keywords {
            draft.add_keyword(keyword);
        }
        draft
    }
}

fn patch_from(args: &UpdateCardArgs) -> CardPatch {
    CardPatch {
        criterion_id: args.criterion_id.clone(),
        title: args.title.clone(),
        level: args.level,
        principle: args.principle.clone(),
        category: args.category.clone(),
        description: args.description.clone(),
        keywords: args.keywords.as_ref().map(|keywords| {
            keywords
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        }),
        url: args.url.clone(),
    }
}

/// Ask on stderr. Without a terminal on stdin the answer is no.
fn confirm_delete(id: &str) -> bool {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        tracing::warn!(id, "no terminal to confirm deletion; pass --yes");
        return false;
    }
    eprint!("Delete card {id}? [y/N] ");
    let _ = std::io::stderr().flush();
    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wcag_core::Level;

    use super::*;

    #[test]
    fn create_args_become_draft_with_clean_keywords() {
        let args = CreateCardArgs {
            criterion_id: "9.9.9".into(),
            title: "Custom".into(),
            level: Level::Aaa,
            principle: "Robust".into(),
            category: "Compatible".into(),
            description: "d".into(),
            keywords: vec![" focus ".into(), "focus".into(), String::new()],
            url: String::new(),
        };
        let draft = CardDraft::from(&args);
        assert_eq!(draft.criterion_id, "9.9.9");
        assert_eq!(draft.category, "Compatible");
        assert_eq!(draft.level, Level::Aaa);
        assert_eq!(draft.keywords(), ["focus"]);
        assert!(draft.to_new_card().url.is_none());
    }

    #[test]
    fn update_args_only_patch_given_fields() {
        let args = UpdateCardArgs {
            id: "1700000000000".into(),
            criterion_id: None,
            title: Some("Renamed".into()),
            level: None,
            principle: None,
            category: None,
            description: None,
            keywords: Some(vec!["a".into(), "  ".into()]),
            url: None,
        };
        let patch = patch_from(&args);
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.keywords, Some(vec!["a".to_string()]));
        assert!(patch.level.is_none());

        let empty = UpdateCardArgs {
            title: None,
            keywords: None,
            ..args
        };
        assert!(patch_from(&empty).is_empty());
    }

    #[test]
    fn only_unauthorized_store_errors_reject_the_session() {
        let rejected = anyhow::Error::from(PanelError::Store(
            wcag_client::StoreError::Unauthorized("expired".into()),
        ));
        assert!(is_rejected_session(&rejected));
        assert!(!is_rejected_session(&anyhow::Error::from(PanelError::Busy)));
        assert!(!is_rejected_session(&anyhow::anyhow!("other")));
    }
}
