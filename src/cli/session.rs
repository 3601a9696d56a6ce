use super::ui;
use crate::App;
use crate::core::Route;
use crate::core::session::UserProfile;
use anyhow::{Result, bail};

/// Creates the local session record and moves on to the dashboard.
pub async fn login(
    app: &App,
    name: &str,
    email: Option<&str>,
    token: Option<&str>,
) -> Result<Option<Route>> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Name must not be empty");
    }

    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        Some(_) => bail!("Token must not be empty"),
        None => format!("local-{}", chrono::Utc::now().timestamp_millis()),
    };
    let user = UserProfile {
        name: Some(name.to_string()),
        email: email.map(str::to_string),
        ..UserProfile::default()
    };

    app.session().login(&token, &user).await?;
    Ok(Some(Route::Dashboard))
}

/// Clears the session record and returns to the landing view.
pub async fn logout(app: &App) -> Result<Option<Route>> {
    app.session().logout().await?;
    println!("{}\n", ui::style_text("Logged out.", ui::StyleType::Subtle));
    Ok(Some(Route::Landing))
}

/// Stand-in for the login and register views.
pub fn print_login_required(route: &Route) {
    let message = if *route == Route::Register {
        "Accounts are local to this machine."
    } else {
        "Please log in to continue."
    };
    println!("{}", ui::style_text(message, ui::StyleType::Error));
    println!("Run `fundtracker login --name <NAME>` to start a session.");
}
