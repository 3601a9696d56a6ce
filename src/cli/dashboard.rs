use super::ui;
use crate::App;
use crate::core::Route;
use comfy_table::Cell;

const SECTIONS: [(&str, &str, &str); 3] = [
    (
        "Search Funds",
        "Discover new mutual funds to invest in",
        "fundtracker search <QUERY>",
    ),
    (
        "Saved Funds",
        "View your bookmarked mutual funds",
        "fundtracker saved",
    ),
    (
        "Portfolio",
        "Track your investment performance",
        "coming soon",
    ),
];

/// Post-login hub. Redirects to login without a session.
pub async fn run(app: &App) -> Option<Route> {
    if !app.session().is_logged_in().await {
        return Some(Route::Login);
    }

    let user = app.session().user().await;
    ui::print_header(Some(&format!("Welcome, {}", user.display_name())));

    println!("{}", ui::style_text("Dashboard", ui::StyleType::Label));
    println!("Manage your mutual fund investments\n");

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Section"),
        ui::header_cell("Description"),
        ui::header_cell("Command"),
    ]);
    for (name, description, command) in SECTIONS {
        table.add_row(vec![Cell::new(name), Cell::new(description), Cell::new(command)]);
    }
    println!("{table}");

    None
}
