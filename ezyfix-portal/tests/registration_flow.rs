//! End-to-end walk of the registration wizard state machine, from the
//! first empty step through the released submission payload.

use ezyfix_portal::core::registration::{
    RESEND_COOLDOWN, RegistrationWizard, Step, SubmitBlocked,
};
use std::time::Instant;

#[test]
fn full_registration_walkthrough() {
    let mut wizard = RegistrationWizard::new();
    let now = Instant::now();

    // Step 1: blocked until the business fields are in.
    assert!(!wizard.next());
    assert_eq!(wizard.step(), Step::BusinessInfo);
    wizard.form.business_name = "Khor Darwaja Cafe".into();
    wizard.form.business_type = "Restaurants/cafe/Dining".into();
    wizard.form.business_description = "Rooftop cafe near the fort".into();
    assert!(wizard.next());

    // Step 2: fill contact details, normalizing phone and postal code.
    assert_eq!(wizard.step(), Step::ContactInfo);
    wizard.form.contact_person = "Ravi Sharma".into();
    wizard.form.email = "ravi@khordarwaja.in".into();
    wizard.set_phone("98290 12345");
    wizard.form.street_address = "Fort Road".into();
    wizard.form.city = "Jawad".into();
    wizard.form.province = "Madhya Pradesh".into();
    wizard.set_postal_code("4585510000");
    wizard.form.google_maps_link = "https://www.google.com/maps/place/Khor+Darwaja".into();

    assert_eq!(wizard.form.phone, "+919829012345");
    assert_eq!(wizard.form.postal_code, "458551");

    // OTP sequencing: send, cooldown, verify.
    assert!(wizard.can_send_otp(now));
    wizard.mark_otp_sent(now);
    assert!(!wizard.can_send_otp(now));
    assert!(wizard.can_send_otp(now + RESEND_COOLDOWN));
    assert!(wizard.can_verify_otp("482913"));
    wizard.mark_otp_verified();

    assert!(wizard.next());

    // Step 3: account fields, then the payment gate.
    assert_eq!(wizard.step(), Step::AccountSetup);
    wizard.form.username = "khordarwaja".into();
    wizard.form.password = "rooftop#2026".into();

    assert_eq!(wizard.submit_payload(), Err(SubmitBlocked::PaymentPending));
    wizard.mark_payment_done();

    let payload = wizard.submit_payload().expect("all gates passed");
    assert_eq!(payload.business_name, "Khor Darwaja Cafe");
    assert_eq!(payload.contact_person, "Ravi Sharma");
    assert_eq!(payload.phone, "+919829012345");
    assert_eq!(payload.postal_code, "458551");
    assert_eq!(payload.username, "khordarwaja");

    // The wire payload keeps the wizard's camelCase field names.
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["businessName"], "Khor Darwaja Cafe");
    assert_eq!(json["googleMapsLink"], "https://www.google.com/maps/place/Khor+Darwaja");
}

#[test]
fn going_back_preserves_entered_values() {
    let mut wizard = RegistrationWizard::new();
    wizard.form.business_name = "Chai Point".into();
    wizard.form.business_type = "Fashion".into();
    assert!(wizard.next());

    wizard.form.contact_person = "Asha".into();
    assert!(wizard.back());
    assert_eq!(wizard.step(), Step::BusinessInfo);
    assert_eq!(wizard.form.business_name, "Chai Point");
    assert_eq!(wizard.form.contact_person, "Asha");
}
