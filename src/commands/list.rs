//! List command handler

use anyhow::Result;

use pokedeck::theme::{current_theme, Theme};
use pokedeck::{get_page, CatalogFilter, Entity, Page, ProgressReporter};

use super::{open_session, print_notices, render_row, runtime};

/// Show one page of the Pokédex, optionally filtered.
///
/// A type filter needs details for every entity, so the whole catalog is
/// warmed first in that case. Otherwise only the rows on the shown page
/// have their details loaded.
#[cfg(not(tarpaulin_include))]
pub fn handle(page: usize, search: Option<&str>, type_name: Option<&str>) -> Result<()> {
    let mut session = open_session()?;
    let theme = current_theme();

    let mut filter = CatalogFilter::new();
    if let Some(search) = search {
        filter = filter.with_search(search);
    }
    if let Some(type_name) = type_name {
        filter = filter.with_type(type_name);
    }

    runtime()?.block_on(async {
        session.load_catalog().await;
        print_notices(&mut session);

        if filter.needs_details() {
            session.warm(&ProgressReporter::new()).await;
        }
        let entities = session.filtered(&filter);
        let page_size = session.config().catalog.page_size;
        let page = get_page(&entities, page, page_size);
        let rows = session.with_details(page.items).await;
        let page = Page {
            items: &rows,
            has_more: page.has_more,
            range_label: page.range_label,
        };

        for line in render_page(&theme, &page) {
            println!("{}", line);
        }
        Ok(())
    })
}

/// Rows, range label and the "more" hint for one page.
pub fn render_page(theme: &Theme, page: &Page<'_, Entity>) -> Vec<String> {
    if page.items.is_empty() {
        return vec![
            theme.primary_text("No Pokémon found."),
            theme.secondary_text(&page.range_label),
        ];
    }

    let mut lines: Vec<String> = page.items.iter().map(|e| render_row(theme, e)).collect();
    lines.push(String::new());
    lines.push(theme.secondary_text(&page.range_label));
    if page.has_more {
        lines.push(theme.secondary_text("More on the next page (--page N)"));
    }
    lines
}
