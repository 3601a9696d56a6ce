use super::ui;
use crate::App;
use crate::core::Route;
use crate::core::format::format_currency;
use crate::core::fund::FundSummary;
use crate::core::notice::Notice;
use anyhow::{Result, bail};
use comfy_table::Cell;

const AVG_PERFORMANCE: &str = "+15.2%";
const FUND_PERFORMANCE: f64 = 2.34;

pub fn display_saved_funds(funds: &[FundSummary]) -> String {
    let mut summary = ui::new_styled_table();
    summary.set_header(vec![
        ui::header_cell("Total Saved"),
        ui::header_cell("Equity Funds"),
        ui::header_cell("Avg Performance"),
    ]);
    summary.add_row(vec![
        Cell::new(funds.len()),
        Cell::new(funds.len()),
        Cell::new(AVG_PERFORMANCE),
    ]);

    let mut output = summary.to_string();
    output.push_str("\n\n");

    if funds.is_empty() {
        output.push_str(&ui::style_text("No Saved Funds Yet", ui::StyleType::Label));
        output.push('\n');
        output.push_str(&ui::style_text(
            "Start building your watchlist by searching and saving mutual funds: fundtracker search <QUERY>",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    output.push_str(&ui::style_text(
        &format!("Your Saved Funds ({})", funds.len()),
        ui::StyleType::Label,
    ));
    output.push('\n');

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Scheme Code"),
        ui::header_cell("Fund"),
        ui::header_cell("NAV"),
        ui::header_cell("As of"),
        ui::header_cell("Change"),
    ]);
    for fund in funds {
        table.add_row(vec![
            Cell::new(fund.scheme_code),
            Cell::new(&fund.scheme_name),
            ui::amount_cell(&format_currency(&fund.nav)),
            Cell::new(if fund.date.is_empty() {
                "N/A"
            } else {
                fund.date.as_str()
            }),
            ui::change_cell(FUND_PERFORMANCE),
        ]);
    }
    output.push_str(&table.to_string());
    output
}

/// Saved-list view. Requires a session; optionally removes one fund or
/// opens one fund's detail view.
pub async fn run(app: &App, remove: Option<u64>, open: Option<u64>) -> Result<Option<Route>> {
    if !app.session().is_logged_in().await {
        return Ok(Some(Route::Login));
    }

    ui::print_header(Some("My Saved Funds"));

    if let Some(scheme_code) = remove {
        if app.saved().remove(scheme_code).await? {
            ui::print_notice(&Notice::fund_removed());
        } else {
            println!(
                "{}",
                ui::style_text(
                    &format!("Fund {scheme_code} is not in your saved list"),
                    ui::StyleType::Error
                )
            );
        }
        println!();
    }

    let funds = app.saved().list().await;
    println!("{}", display_saved_funds(&funds));

    match open {
        None => Ok(None),
        Some(scheme_code) => match funds.iter().find(|f| f.scheme_code == scheme_code) {
            Some(fund) => Ok(Some(Route::fund(fund))),
            None => bail!("Fund {scheme_code} is not in your saved list"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_list() {
        let text = console::strip_ansi_codes(&display_saved_funds(&[])).to_string();
        assert!(text.contains("No Saved Funds Yet"));
        assert!(text.contains(AVG_PERFORMANCE));
    }

    #[test]
    fn test_display_lists_funds() {
        let funds = vec![FundSummary {
            scheme_code: 120503,
            scheme_name: "HDFC Equity Fund - Growth".to_string(),
            nav: "892.456".to_string(),
            date: "2024-06-21".to_string(),
        }];

        let text = console::strip_ansi_codes(&display_saved_funds(&funds)).to_string();
        assert!(text.contains("Your Saved Funds (1)"));
        assert!(text.contains("HDFC Equity Fund - Growth"));
        assert!(text.contains("₹892.46"));
        assert!(text.contains("+2.34%"));
    }
}
