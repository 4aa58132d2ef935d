//! Registration wizard page
//!
//! Drives [`RegistrationWizard`] through its three steps. The wizard
//! state is transient: cancelling or finishing the page discards it.

use crate::core::registration::{self, RegistrationWizard, Step, SubmitBlocked};
use crate::session::VendorSession;
use crate::{App, ui};
use portal_client::{HostedCheckout, PaymentCallback, VerifyOutcome};
use shared::types::{BUSINESS_TYPES, PROVINCES};
use std::time::Instant;

pub async fn run(app: &mut App) {
    ui::heading("Register Your Business");
    println!("Join EzyFix and start attracting new customers with amazing deals!");

    let mut wizard = RegistrationWizard::new();

    loop {
        let step = wizard.step();
        ui::heading(&format!("Step {} of 3: {}", step.number(), step.label()));
        if !wizard.errors().is_empty() {
            ui::print_errors(wizard.errors());
        }

        match step {
            Step::BusinessInfo => {
                edit_business_info(&mut wizard);
                println!("n) Next    q) Cancel registration");
                match ui::prompt("Action").as_str() {
                    "n" => {
                        if !wizard.next() {
                            ui::print_errors(wizard.errors());
                        }
                    }
                    "q" => {
                        if confirm_cancel() {
                            return;
                        }
                    }
                    _ => {}
                }
            }
            Step::ContactInfo => {
                edit_contact_info(&mut wizard);
                if !step_two_actions(app, &mut wizard).await {
                    return;
                }
            }
            Step::AccountSetup => {
                edit_account_setup(&mut wizard);
                match step_three_actions(app, &mut wizard).await {
                    StepOutcome::Stay => {}
                    StepOutcome::Cancelled => return,
                    StepOutcome::Submitted => return,
                }
            }
        }
    }
}

fn confirm_cancel() -> bool {
    ui::confirm("Discard this registration?")
}

fn edit_business_info(wizard: &mut RegistrationWizard) {
    let form = &mut wizard.form;
    form.business_name = ui::prompt_default("Business Name", &form.business_name);
    form.business_type = ui::select("Business Type", BUSINESS_TYPES, &form.business_type);
    form.business_description =
        ui::prompt_default("Business Description", &form.business_description);
}

fn edit_contact_info(wizard: &mut RegistrationWizard) {
    wizard.form.contact_person = ui::prompt_default("Contact Person", &wizard.form.contact_person);
    wizard.form.email = ui::prompt_default("Email", &wizard.form.email);

    let phone = ui::prompt_default("Phone Number (+91)", &wizard.form.phone);
    wizard.set_phone(&phone);

    wizard.form.street_address =
        ui::prompt_default("Street Address", &wizard.form.street_address);
    wizard.form.city = ui::prompt_default("City", &wizard.form.city);
    wizard.form.province = ui::select("Province/State", PROVINCES, &wizard.form.province);

    let postal = ui::prompt_default("Postal/Zip Code", &wizard.form.postal_code);
    wizard.set_postal_code(&postal);

    wizard.form.google_maps_link =
        ui::prompt_default("Google Maps Link", &wizard.form.google_maps_link);
}

fn edit_account_setup(wizard: &mut RegistrationWizard) {
    wizard.form.username = ui::prompt_default("Username", &wizard.form.username);
    wizard.form.password = ui::prompt_default("Password", &wizard.form.password);
}

/// Step-2 action menu. Returns false when the vendor cancelled.
async fn step_two_actions(app: &App, wizard: &mut RegistrationWizard) -> bool {
    loop {
        let now = Instant::now();
        if wizard.otp_verified() {
            println!("Email verified.");
        } else if let Some(secs) = wizard.resend_remaining(now) {
            println!("Resend OTP available in {secs}s.");
        }
        println!("s) Send OTP    v) Verify OTP    n) Next    p) Previous    q) Cancel");

        match ui::prompt("Action").as_str() {
            "s" => send_otp(app, wizard).await,
            "v" => verify_otp(app, wizard).await,
            "n" => {
                if !wizard.next() {
                    ui::print_errors(wizard.errors());
                    continue;
                }
                return true;
            }
            "p" => {
                wizard.back();
                return true;
            }
            "q" => {
                if confirm_cancel() {
                    return false;
                }
            }
            _ => {}
        }
    }
}

async fn send_otp(app: &App, wizard: &mut RegistrationWizard) {
    let now = Instant::now();
    if wizard.otp_verified() {
        ui::notice(ui::NoticeKind::Info, "Email is already verified.");
        return;
    }
    if !wizard.can_send_otp(now) {
        match wizard.resend_remaining(now) {
            Some(secs) => ui::notice(
                ui::NoticeKind::Info,
                &format!("Resend OTP in {secs} seconds."),
            ),
            None => ui::alert("Please enter a valid email address."),
        }
        return;
    }

    match app.verify.send_code(wizard.form.email.trim()).await {
        Ok(()) => {
            wizard.mark_otp_sent(Instant::now());
            ui::notice(ui::NoticeKind::Success, "OTP sent to your email.");
        }
        Err(e) => {
            tracing::error!(error = %e, "OTP send failed");
            ui::alert(&e.user_message());
        }
    }
}

async fn verify_otp(app: &App, wizard: &mut RegistrationWizard) {
    if wizard.otp_verified() {
        ui::notice(ui::NoticeKind::Info, "Email is already verified.");
        return;
    }
    let code = registration::sanitize_otp(&ui::prompt("Enter OTP"));
    if !wizard.can_verify_otp(&code) {
        ui::alert("Send the OTP first and enter at least 4 characters.");
        return;
    }

    match app.verify.check_code(wizard.form.email.trim(), &code).await {
        Ok(VerifyOutcome::Complete) => {
            wizard.mark_otp_verified();
            ui::notice(ui::NoticeKind::Success, "Email verified successfully!");
        }
        Ok(VerifyOutcome::Failed { message }) => ui::alert(&message),
        Err(e) => {
            tracing::error!(error = %e, "OTP verification failed");
            ui::alert(&e.user_message());
        }
    }
}

enum StepOutcome {
    Stay,
    Cancelled,
    Submitted,
}

async fn step_three_actions(app: &mut App, wizard: &mut RegistrationWizard) -> StepOutcome {
    loop {
        if wizard.payment_done() {
            println!("Registration fee paid.");
        }
        println!("pay) Pay registration fee    r) Register your business    p) Previous    q) Cancel");

        match ui::prompt("Action").as_str() {
            "pay" => collect_payment(app, wizard),
            "r" => {
                if submit(app, wizard).await {
                    return StepOutcome::Submitted;
                }
            }
            "p" => {
                wizard.back();
                return StepOutcome::Stay;
            }
            "q" => {
                if confirm_cancel() {
                    return StepOutcome::Cancelled;
                }
            }
            _ => {}
        }
    }
}

/// Hosted checkout: hand the vendor the gateway URL and trust the
/// callback they relay. No server-side verification happens here.
fn collect_payment(app: &App, wizard: &mut RegistrationWizard) {
    if wizard.payment_done() {
        ui::notice(ui::NoticeKind::Info, "Payment already completed.");
        return;
    }

    let checkout = HostedCheckout::registration_fee(&app.config.payment_key);
    println!(
        "Pay ₹{:.0} ({}) at:\n  {}",
        checkout.amount_rupees(),
        checkout.description,
        checkout.checkout_url()
    );

    let payment_id = ui::prompt("Payment id from the gateway (empty if cancelled)");
    let callback = if payment_id.is_empty() {
        PaymentCallback::cancelled()
    } else {
        PaymentCallback::succeeded(payment_id)
    };

    if callback.success {
        wizard.mark_payment_done();
        ui::notice(
            ui::NoticeKind::Success,
            "Payment successful! Your request is being sent to admin...",
        );
    } else {
        ui::alert("Payment was not completed.");
    }
}

/// Final submission: confirmation modal, then the register call.
/// Returns true when the wizard reached its terminal state.
async fn submit(app: &mut App, wizard: &mut RegistrationWizard) -> bool {
    let payload = match wizard.submit_payload() {
        Ok(payload) => payload,
        Err(SubmitBlocked::Invalid(errors)) => {
            ui::print_errors(&errors);
            return false;
        }
        Err(SubmitBlocked::EmailNotVerified) => {
            ui::alert("Please verify your email address first (step 2).");
            return false;
        }
        Err(SubmitBlocked::PaymentPending) => {
            ui::alert("Please pay the registration fee first.");
            return false;
        }
    };

    println!(
        "Your request will be submitted and sent to admin. Access will be granted only after approval."
    );
    if !ui::confirm("Submit request?") {
        return false;
    }

    match app.client.register(&payload).await {
        Ok(response) => {
            if response.id.is_none() {
                tracing::warn!("Registration response carried no vendor id");
            }
            let session =
                VendorSession::from_registration(response.token, response.id, &payload);
            if let Err(e) = app.install_session(session) {
                tracing::error!(error = %e, "Failed to persist session");
                ui::alert("Registered, but the session could not be saved.");
                return true;
            }
            ui::notice(
                ui::NoticeKind::Success,
                "Registration successful! Welcome to EzyFix!",
            );
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            ui::alert(&e.user_message());
            false
        }
    }
}
