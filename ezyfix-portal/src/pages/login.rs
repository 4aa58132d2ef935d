//! Vendor login page

use crate::session::VendorSession;
use crate::{App, ui};

pub async fn run(app: &mut App) {
    ui::heading("Vendor Login");

    let email = ui::prompt("Email");
    let password = ui::prompt("Password");
    if email.is_empty() || password.is_empty() {
        ui::alert("Please enter both email and password.");
        return;
    }

    match app.client.login(&email, &password).await {
        Ok(response) => {
            let session = VendorSession {
                email: email.clone(),
                ..VendorSession::from_login(response.access_token, response.vendor.id)
            };
            if let Err(e) = app.install_session(session) {
                tracing::error!(error = %e, "Failed to persist session");
                ui::alert("Login succeeded but the session could not be saved.");
                return;
            }
            ui::notice(ui::NoticeKind::Success, "Login successful!");
        }
        Err(e) => {
            tracing::error!(error = %e, "Login failed");
            ui::alert(&e.user_message());
        }
    }
}
