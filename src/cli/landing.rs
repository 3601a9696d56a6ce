use super::ui;
use crate::core::Route;

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Search",
        "Find mutual funds quickly with our advanced search functionality",
    ),
    (
        "Performance Tracking",
        "Track and analyze fund performance with detailed insights",
    ),
    (
        "Secure Platform",
        "Your investments and data are protected with enterprise-grade security",
    ),
    (
        "Expert Guidance",
        "Get access to expert recommendations and market insights",
    ),
];

pub fn display() -> String {
    let mut output = format!(
        "Discover the Perfect {}\n",
        ui::style_text("Mutual Funds", ui::StyleType::Value)
    );
    output.push_str("Make informed investment decisions with real-time data and insights.\n\n");
    output.push_str(&ui::style_text(
        "Why Choose FundTracker?",
        ui::StyleType::Label,
    ));
    output.push('\n');
    for (title, description) in FEATURES {
        output.push_str(&format!(
            "  {} {}\n",
            ui::style_text(&format!("{title}:"), ui::StyleType::Label),
            description
        ));
    }
    output.push('\n');
    output.push_str(&ui::style_text(
        "Search mutual funds by name, category, or fund house: fundtracker search <QUERY>",
        ui::StyleType::Subtle,
    ));
    output
}

/// Landing view. A non-blank query redirects to the search view.
pub fn run(query: Option<&str>) -> Option<Route> {
    if let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) {
        return Some(Route::Search {
            query: Some(query.to_string()),
        });
    }

    ui::print_header(None);
    println!("{}", display());
    None
}
