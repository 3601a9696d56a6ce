use super::ui;
use crate::App;
use crate::core::Route;
use crate::core::format::format_currency;
use crate::core::search::{SearchResults, SearchStatus, search_funds};
use anyhow::{Result, bail};
use comfy_table::Cell;

impl SearchResults {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("#"),
            ui::header_cell("Scheme Code"),
            ui::header_cell("Fund"),
            ui::header_cell("NAV"),
            ui::header_cell("As of"),
        ]);

        for (i, fund) in self.funds.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(fund.scheme_code),
                Cell::new(&fund.scheme_name),
                ui::amount_cell(&format_currency(&fund.nav)),
                Cell::new(if fund.date.is_empty() {
                    "N/A"
                } else {
                    fund.date.as_str()
                }),
            ]);
        }

        table.to_string()
    }
}

/// Search view. Optionally opens the `open`th result (1-based) afterwards.
pub async fn run(app: &App, query: &str, open: Option<usize>) -> Result<Option<Route>> {
    ui::print_header(Some("Search Mutual Funds"));

    let pb = ui::new_spinner("Searching funds...");
    let results = search_funds(app.provider(), query).await;
    pb.finish_and_clear();

    if results.status == SearchStatus::Skipped {
        println!(
            "{}",
            ui::style_text(
                "Enter a fund name, category, or fund house to search.",
                ui::StyleType::Subtle
            )
        );
        return Ok(None);
    }

    println!(
        "Results for {}",
        ui::style_text(&results.query, ui::StyleType::Label)
    );
    if let Some(message) = results.error_message() {
        println!("{}", ui::style_text(message, ui::StyleType::Error));
    }
    if results.is_degraded() {
        println!(
            "{}",
            ui::style_text(
                "Showing sample funds while the fund service is unavailable.",
                ui::StyleType::Subtle
            )
        );
    }
    if !results.funds.is_empty() {
        println!("{}", results.display_as_table());
    }

    match open {
        None => Ok(None),
        Some(n) => match n.checked_sub(1).and_then(|i| results.funds.get(i)) {
            Some(fund) => Ok(Some(Route::fund(fund))),
            None => bail!(
                "No search result #{n}; {} results shown",
                results.funds.len()
            ),
        },
    }
}
