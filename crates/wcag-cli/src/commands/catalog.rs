//! Building the displayed criterion list from the static catalog and the
//! card store.

use serde::Serialize;
use wcag_core::Criterion;
use wcag_search::{CatalogCounts, CriteriaIndex};

use crate::context::AppContext;
use crate::progress::Progress;

/// Where the displayed list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSource {
    /// `--offline`: the card store was not contacted.
    Offline,
    /// Static catalog merged with the store's cards.
    Merged,
    /// The store was unreachable; static catalog only.
    Fallback,
}

pub struct LoadedIndex {
    pub index: CriteriaIndex,
    pub source: ListSource,
}

impl LoadedIndex {
    pub fn counts(&self) -> CatalogCounts {
        self.index.counts()
    }
}

/// Load the merged index. Never fails: any card-store problem degrades to
/// the static catalog with a warning.
pub async fn load_index(ctx: &AppContext, offline: bool) -> LoadedIndex {
    let standard = wcag_catalog::criteria();
    if offline {
        return static_only(&standard, ListSource::Offline);
    }

    let client = match ctx.client() {
        Ok(client) => client,
        Err(error) => {
            tracing::warn!("{error:#}; showing the standard catalog only");
            return static_only(&standard, ListSource::Fallback);
        }
    };

    let spinner = Progress::spinner(&ctx.ui, "loading custom criteria");
    let (init, listed) = tokio::join!(client.init(), client.list_cards());
    spinner.finish_clear();

    if let Err(error) = init {
        tracing::warn!(%error, "card store initialization failed; continuing");
    }
    match listed {
        Ok(cards) => {
            tracing::debug!(cards = cards.len(), "custom criteria loaded");
            LoadedIndex {
                index: CriteriaIndex::build(&standard, &cards),
                source: ListSource::Merged,
            }
        }
        Err(error) => {
            tracing::warn!(%error, "could not load custom criteria; showing the standard catalog only");
            static_only(&standard, ListSource::Fallback)
        }
    }
}

fn static_only(standard: &[Criterion], source: ListSource) -> LoadedIndex {
    LoadedIndex {
        index: CriteriaIndex::offline(standard),
        source,
    }
}
