use super::ui;
use crate::App;
use crate::core::Route;
use crate::core::detail::FundPage;
use crate::core::format::format_currency;
use crate::core::fund::FundSummary;
use anyhow::Result;
use comfy_table::Cell;

// Shown for every fund until real category and return data is wired in.
const FUND_INFORMATION: [(&str, &str); 5] = [
    ("Fund Type", "Equity Fund"),
    ("Category", "Large Cap"),
    ("Risk Level", "High"),
    ("Expense Ratio", "1.25%"),
    ("Exit Load", "1% if redeemed within 365 days"),
];

const PERFORMANCE_METRICS: [(&str, f64); 4] = [
    ("1 Month", 3.24),
    ("3 Months", 8.45),
    ("6 Months", 15.23),
    ("1 Year", 22.67),
];

impl FundPage {
    pub fn display(&self, fund: &FundSummary) -> String {
        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(&fund.scheme_name, ui::StyleType::Title),
            ui::style_text(
                &format!("Scheme Code: {}", fund.scheme_code),
                ui::StyleType::Subtle
            )
        );

        let as_of = if fund.date.is_empty() {
            "N/A"
        } else {
            fund.date.as_str()
        };
        output.push_str(&format!(
            "NAV: {}  {}\n",
            ui::style_text(&format_currency(&fund.nav), ui::StyleType::Value),
            ui::style_text(&format!("as of {as_of}"), ui::StyleType::Subtle)
        ));
        output.push_str(&format!(
            "Status: {}\n\n",
            if self.is_saved { "Saved" } else { "Not saved" }
        ));

        let mut info = ui::new_styled_table();
        info.set_header(vec![
            ui::header_cell("Fund Information"),
            ui::header_cell(""),
        ]);
        if let Some(meta) = &self.meta {
            for (label, value) in [
                ("Fund House", &meta.fund_house),
                ("Scheme Type", &meta.scheme_type),
                ("Scheme Category", &meta.scheme_category),
            ] {
                if let Some(value) = value {
                    info.add_row(vec![Cell::new(label), Cell::new(value)]);
                }
            }
        }
        for (label, value) in FUND_INFORMATION {
            info.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
        output.push_str(&info.to_string());
        output.push_str("\n\n");

        let mut performance = ui::new_styled_table();
        performance.set_header(vec![
            ui::header_cell("Performance Metrics"),
            ui::header_cell("Return"),
        ]);
        for (label, change) in PERFORMANCE_METRICS {
            performance.add_row(vec![Cell::new(label), ui::change_cell(change)]);
        }
        output.push_str(&performance.to_string());
        output.push_str("\n\n");

        output.push_str(&ui::style_text("NAV History", ui::StyleType::Label));
        output.push('\n');
        if self.history.is_empty() {
            output.push_str(&ui::style_text(
                "NAV history not available",
                ui::StyleType::Subtle,
            ));
        } else {
            let mut history = ui::new_styled_table();
            history.set_header(vec![ui::header_cell("Date"), ui::header_cell("NAV")]);
            for point in &self.history {
                history.add_row(vec![
                    Cell::new(&point.date),
                    ui::amount_cell(&format_currency(&point.nav)),
                ]);
            }
            output.push_str(&history.to_string());
        }

        output
    }
}

/// Detail view for one fund, optionally flipping its saved state.
pub async fn run(
    app: &App,
    scheme_code: u64,
    prefetched: Option<FundSummary>,
    toggle_save: bool,
) -> Result<Option<Route>> {
    ui::print_header(Some("Fund Details"));

    let pb = ui::new_spinner("Loading fund details...");
    let mut page = FundPage::load(app.provider(), app.saved(), scheme_code, prefetched).await;
    pb.finish_and_clear();

    if let Some(notice) = page.notice.take() {
        ui::print_notice(&notice);
    }

    let Some(fund) = page.fund.clone() else {
        println!("{}", ui::style_text("Fund not found", ui::StyleType::Error));
        println!("Search for funds with `fundtracker search <QUERY>`.");
        return Ok(None);
    };

    let mut redirect = None;
    if toggle_save {
        redirect = page.toggle_saved(app.session(), app.saved()).await?;
        if let Some(notice) = &page.notice {
            ui::print_notice(notice);
            println!();
        }
    }

    if redirect.is_none() {
        println!("{}", page.display(&fund));
    }
    Ok(redirect)
}
