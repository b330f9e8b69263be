use serde::Serialize;
use wcag_core::Criterion;
use wcag_search::CatalogCounts;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::catalog::{ListSource, load_index};
use crate::context::AppContext;
use crate::output::{output, output_records};

const COLUMNS: &[&str] = &["id", "level", "title", "principle", "category"];
const LONG_COLUMNS: &[&str] = &[
    "id",
    "level",
    "title",
    "principle",
    "category",
    "description",
    "keywords",
    "url",
];

#[derive(Serialize)]
struct CriterionRow<'a> {
    id: &'a str,
    level: &'static str,
    title: &'a str,
    principle: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> CriterionRow<'a> {
    fn new(criterion: &'a Criterion, long: bool) -> Self {
        Self {
            id: &criterion.id,
            level: criterion.level.as_str(),
            title: &criterion.title,
            principle: &criterion.principle,
            category: &criterion.category,
            description: long.then_some(criterion.description.as_str()),
            keywords: long.then_some(criterion.keywords.as_slice()),
            url: long.then_some(criterion.url.as_str()),
        }
    }
}

#[derive(Serialize)]
struct ListResponse<'a> {
    query: &'a str,
    showing: usize,
    counts: CatalogCounts,
    source: ListSource,
    criteria: Vec<CriterionRow<'a>>,
}

pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = load_index(ctx, args.offline).await;
    let query = args.query();
    let matches = loaded.index.search(&query);
    let rows = matches
        .iter()
        .map(|criterion| CriterionRow::new(criterion, args.long))
        .collect::<Vec<_>>();

    if flags.format != OutputFormat::Table {
        return output(
            &ListResponse {
                query: query.trim(),
                showing: rows.len(),
                counts: loaded.counts(),
                source: loaded.source,
                criteria: rows,
            },
            &ctx.ui,
        );
    }

    if rows.is_empty() {
        println!("no criteria match '{}'", query.trim());
    } else {
        let columns = if args.long { LONG_COLUMNS } else { COLUMNS };
        output_records(&rows, columns, &ctx.ui)?;
    }
    if !flags.quiet {
        println!();
        println!("{}", footer(rows.len(), loaded.counts()));
    }
    Ok(())
}

fn footer(showing: usize, counts: CatalogCounts) -> String {
    format!(
        "showing {showing} of {} criteria ({} standard + {} custom)",
        counts.merged, counts.standard, counts.custom
    )
}
