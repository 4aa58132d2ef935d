//! Vendor profile page
//!
//! View and edit the account record, cache a profile image locally, and
//! log out. Saving sends the full snake_case update payload the backend
//! expects.

use crate::{App, ui};
use shared::models::VendorProfile;
use shared::types::BUSINESS_TYPES;

pub async fn run(app: &mut App) {
    let Some(vendor_id) = app.vendor_id().cloned() else {
        ui::alert("No vendor id in this session. Please log in again.");
        return;
    };

    let mut profile = match app.client.profile(&vendor_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch vendor profile");
            ui::alert(&e.user_message());
            return;
        }
    };

    loop {
        render(&profile, app);
        println!("e) Edit profile    i) Set profile image    l) Logout    b) Back");

        match ui::prompt("Action").as_str() {
            "e" => save_changes(app, &vendor_id, &mut profile).await,
            "i" => set_image(app),
            "l" => {
                if ui::confirm("Log out?") {
                    match app.logout() {
                        Ok(()) => {
                            ui::notice(ui::NoticeKind::Info, "Logged out.");
                            return;
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Logout failed");
                            ui::alert("Could not clear the session.");
                        }
                    }
                }
            }
            "b" => return,
            _ => {}
        }
    }
}

fn render(profile: &VendorProfile, app: &App) {
    ui::heading("Vendor Profile");
    ui::table(
        &["Field", "Value"],
        &[
            vec!["Contact Person".into(), profile.contact_person.clone()],
            vec!["Email".into(), profile.email.clone()],
            vec!["Phone".into(), profile.phone.clone()],
            vec!["Business".into(), profile.business_name.clone()],
            vec!["Business Type".into(), profile.business_type.clone()],
            vec!["Description".into(), profile.description.clone()],
            vec!["Address".into(), profile.address.clone()],
            vec!["Maps Link".into(), profile.maps_link.clone()],
        ],
    );
    let cached = app
        .session()
        .map(|s| !s.profile_image.is_empty())
        .unwrap_or(false);
    if cached || !profile.profile_image.is_empty() {
        println!("Profile image: set");
    }
}

async fn save_changes(app: &mut App, vendor_id: &shared::response::VendorId, profile: &mut VendorProfile) {
    let mut edited = profile.clone();
    edited.contact_person = ui::prompt_default("Contact Person", &profile.contact_person);
    edited.email = ui::prompt_default("Email", &profile.email);
    edited.phone = ui::prompt_default("Phone", &profile.phone);
    edited.business_name = ui::prompt_default("Business Name", &profile.business_name);
    edited.business_type = ui::select("Business Type", BUSINESS_TYPES, &profile.business_type);
    edited.description = ui::prompt_default("Description", &profile.description);
    edited.address = ui::prompt_default("Address", &profile.address);
    edited.maps_link = ui::prompt_default("Maps Link", &profile.maps_link);

    // The cached image rides along with the update, as the old portal
    // sent it.
    if let Some(session) = app.session() {
        if !session.profile_image.is_empty() {
            edited.profile_image = session.profile_image.clone();
        }
    }

    match app.client.update_profile(vendor_id, &edited.to_update()).await {
        Ok(_) => {
            *profile = edited;
            if let Err(e) = app.update_session(|s| {
                s.name = profile.contact_person.clone();
                s.email = profile.email.clone();
                s.phone = profile.phone.clone();
                s.business = profile.business_name.clone();
                s.business_type = profile.business_type.clone();
                s.address = profile.address.clone();
                s.google_maps_link = profile.maps_link.clone();
                s.description = profile.description.clone();
            }) {
                tracing::warn!(error = %e, "Failed to refresh session profile fields");
            }
            ui::notice(ui::NoticeKind::Success, "Profile updated successfully!");
        }
        Err(e) => {
            tracing::error!(error = %e, "Profile update failed");
            ui::alert("Something went wrong!");
        }
    }
}

fn set_image(app: &mut App) {
    let path = ui::prompt("Image path (PNG or JPG)");
    if path.is_empty() {
        return;
    }
    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            ui::notice(ui::NoticeKind::Error, &format!("Could not read image: {e}"));
            return;
        }
    };
    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    if content_type.type_() != mime_guess::mime::IMAGE {
        ui::notice(ui::NoticeKind::Error, "Please pick an image file.");
        return;
    }
    if let Err(e) =
        app.update_session(|s| s.cache_profile_image(content_type.as_ref(), &data))
    {
        tracing::error!(error = %e, "Failed to cache profile image");
        ui::alert("Could not save the profile image.");
        return;
    }
    ui::notice(ui::NoticeKind::Success, "Profile image saved.");
}
