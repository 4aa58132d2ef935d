//! Registration wizard state machine
//!
//! Three steps, forward/backward only. A forward transition is gated by
//! the current step's validation; failures keep the wizard where it is
//! and record field-level errors. Terminal success additionally requires
//! a verified email (OTP) and a completed payment callback before the
//! submission payload is released. Network effects stay outside: the
//! wizard only tracks what has been confirmed so far, so a failed OTP
//! send or submit leaves its state untouched.

use shared::FieldErrors;
use shared::models::VendorRegistration;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Cooldown between OTP sends to the same address.
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

/// OTP input is truncated at this length.
pub const OTP_MAX_LEN: usize = 6;

/// Verification is offered once this many characters are typed.
pub const OTP_MIN_LEN: usize = 4;

pub const PASSWORD_MIN_LEN: usize = 6;

/// Fixed country-code prefix of every vendor phone number.
pub const PHONE_PREFIX: &str = "+91";

pub const PHONE_MAX_DIGITS: usize = 10;

pub const POSTAL_MAX_LEN: usize = 6;

static EMAIL_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static MAPS_PLACE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^https://(www\.)?google\.(com|co\.in|[a-z]{2,})/maps/").expect("valid regex")
});

static MAPS_QUERY_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^https://(www\.)?google\.[a-z]+/maps\?q=(-?\d+(\.\d+)?),(-?\d+(\.\d+)?)$")
        .expect("valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A shared Google Maps location link: either a `/maps/place/...` (or
/// other `/maps/...?...` variant) page URL, or the `maps?q=lat,lng`
/// coordinate form.
pub fn is_valid_maps_link(link: &str) -> bool {
    let link = link.trim();
    if MAPS_QUERY_RE.is_match(link) {
        return true;
    }
    MAPS_PLACE_RE.is_match(link) && (link.contains("/maps/place") || link.contains('?'))
}

/// Normalize a phone input to `+91` plus at most 10 digits; non-digit
/// characters contribute nothing.
pub fn normalize_phone(input: &str) -> String {
    let rest = input.strip_prefix(PHONE_PREFIX).unwrap_or(input);
    let digits: String = rest
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect();
    format!("{PHONE_PREFIX}{digits}")
}

/// Apply a postal-code edit: edits containing non-digits are ignored
/// (the previous value stands), and the result is truncated at 6.
pub fn apply_postal_edit(current: &str, input: &str) -> String {
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return current.to_string();
    }
    input.chars().take(POSTAL_MAX_LEN).collect()
}

/// Truncate an OTP input at its maximum length.
pub fn sanitize_otp(input: &str) -> String {
    input.trim().chars().take(OTP_MAX_LEN).collect()
}

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    BusinessInfo,
    ContactInfo,
    AccountSetup,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Self::BusinessInfo => 1,
            Self::ContactInfo => 2,
            Self::AccountSetup => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessInfo => "Business Info",
            Self::ContactInfo => "Contact Details",
            Self::AccountSetup => "Account Setup",
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            Self::BusinessInfo => Some(Self::ContactInfo),
            Self::ContactInfo => Some(Self::AccountSetup),
            Self::AccountSetup => None,
        }
    }

    fn prev(&self) -> Option<Self> {
        match self {
            Self::BusinessInfo => None,
            Self::ContactInfo => Some(Self::BusinessInfo),
            Self::AccountSetup => Some(Self::ContactInfo),
        }
    }
}

/// Raw field values, exactly as typed (phone/postal already normalized
/// by their setters).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub business_name: String,
    pub business_type: String,
    pub business_description: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub google_maps_link: String,
    pub username: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn to_payload(&self) -> VendorRegistration {
        VendorRegistration {
            business_name: self.business_name.clone(),
            business_type: self.business_type.clone(),
            business_description: self.business_description.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            street_address: self.street_address.clone(),
            city: self.city.clone(),
            province: self.province.clone(),
            postal_code: self.postal_code.clone(),
            google_maps_link: self.google_maps_link.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Why a submission attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Step-3 validation failed; the map holds the offending fields.
    Invalid(FieldErrors),
    /// The email address has not been OTP-verified yet.
    EmailNotVerified,
    /// The payment callback has not reported success yet.
    PaymentPending,
}

/// The wizard itself: current step, field values, error map, and the
/// OTP/payment progress flags.
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: Step,
    pub form: RegistrationForm,
    errors: FieldErrors,
    otp_sent: bool,
    otp_verified: bool,
    payment_done: bool,
    resend_deadline: Option<Instant>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: Step::BusinessInfo,
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            otp_sent: false,
            otp_verified: false,
            payment_done: false,
            resend_deadline: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    pub fn otp_verified(&self) -> bool {
        self.otp_verified
    }

    pub fn payment_done(&self) -> bool {
        self.payment_done
    }

    // ---- field setters with input normalization ----

    pub fn set_phone(&mut self, input: &str) {
        self.form.phone = normalize_phone(input);
        self.errors.clear_field("phone");
    }

    pub fn set_postal_code(&mut self, input: &str) {
        self.form.postal_code = apply_postal_edit(&self.form.postal_code, input);
        self.errors.clear_field("postalCode");
    }

    // ---- step validation and transitions ----

    /// Validate one step. The key set is exactly the fields the user
    /// still has to fix.
    pub fn validate_step(&self, step: Step) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let form = &self.form;

        match step {
            Step::BusinessInfo => {
                if form.business_name.trim().is_empty() {
                    errors.insert("businessName", "Business name is required");
                }
                if form.business_type.trim().is_empty() {
                    errors.insert("businessType", "Business type is required");
                }
            }
            Step::ContactInfo => {
                if form.contact_person.trim().is_empty() {
                    errors.insert("contactPerson", "Contact person is required");
                }
                if form.email.trim().is_empty() {
                    errors.insert("email", "Email is required");
                } else if !is_valid_email(form.email.trim()) {
                    errors.insert("email", "Invalid email format");
                }
                if form.phone.trim().is_empty() {
                    errors.insert("phone", "Phone number is required");
                }
                if form.street_address.trim().is_empty() {
                    errors.insert("streetAddress", "Street address is required");
                }
                if form.city.trim().is_empty() {
                    errors.insert("city", "City is required");
                }
                if form.postal_code.trim().is_empty() {
                    errors.insert("postalCode", "Postal code is required");
                }
                if form.google_maps_link.trim().is_empty() {
                    errors.insert("googleMapsLink", "Google Maps link is required");
                } else if !is_valid_maps_link(&form.google_maps_link) {
                    errors.insert("googleMapsLink", "Enter a valid Google Maps link");
                }
            }
            Step::AccountSetup => {
                if form.username.trim().is_empty() {
                    errors.insert("username", "Username is required");
                }
                if form.password.trim().is_empty() {
                    errors.insert("password", "Password is required");
                } else if form.password.len() < PASSWORD_MIN_LEN {
                    errors.insert("password", "Password must be at least 6 characters");
                }
            }
        }

        errors
    }

    /// Advance to the next step if the current one validates. Returns
    /// whether the wizard moved; on failure the error map is populated
    /// and the step is unchanged.
    pub fn next(&mut self) -> bool {
        self.errors = self.validate_step(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Never validates, never fails on step 2/3.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                self.errors = FieldErrors::new();
                true
            }
            None => false,
        }
    }

    // ---- email OTP sequencing ----

    /// Whether an OTP send may be issued now: the email must look valid
    /// and the resend cooldown must have elapsed.
    pub fn can_send_otp(&self, now: Instant) -> bool {
        if self.otp_verified || !is_valid_email(self.form.email.trim()) {
            return false;
        }
        match self.resend_deadline {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// Record a successful OTP send and start the resend countdown.
    pub fn mark_otp_sent(&mut self, now: Instant) {
        self.otp_sent = true;
        self.resend_deadline = Some(now + RESEND_COOLDOWN);
    }

    /// Seconds left on the resend countdown, if it is still running.
    pub fn resend_remaining(&self, now: Instant) -> Option<u64> {
        let deadline = self.resend_deadline?;
        if now >= deadline {
            None
        } else {
            Some((deadline - now).as_secs().max(1))
        }
    }

    /// Whether a verification attempt may be issued for `code`.
    pub fn can_verify_otp(&self, code: &str) -> bool {
        self.otp_sent && !self.otp_verified && code.len() >= OTP_MIN_LEN
    }

    /// Record a confirmed email verification.
    pub fn mark_otp_verified(&mut self) {
        self.otp_verified = true;
    }

    // ---- payment ----

    /// Record a successful payment callback.
    pub fn mark_payment_done(&mut self) {
        self.payment_done = true;
    }

    // ---- submission ----

    /// Release the submission payload, or say why it is blocked. The
    /// wizard state is unchanged either way; a failed network submit
    /// can simply try again.
    pub fn submit_payload(&mut self) -> Result<VendorRegistration, SubmitBlocked> {
        let errors = self.validate_step(Step::AccountSetup);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }
        if !self.otp_verified {
            return Err(SubmitBlocked::EmailNotVerified);
        }
        if !self.payment_done {
            return Err(SubmitBlocked::PaymentPending);
        }
        Ok(self.form.to_payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        wizard.form.business_name = "Chai Point".into();
        wizard.form.business_type = "Restaurants/cafe/Dining".into();
        wizard.form.contact_person = "Asha Rao".into();
        wizard.form.email = "asha@chaipoint.in".into();
        wizard.set_phone("+919876543210");
        wizard.form.street_address = "12 MG Road".into();
        wizard.form.city = "Bengaluru".into();
        wizard.form.province = "Karnataka".into();
        wizard.set_postal_code("560001");
        wizard.form.google_maps_link =
            "https://www.google.com/maps/place/Chai+Point".into();
        wizard.form.username = "chaipoint".into();
        wizard.form.password = "s3cret!pw".into();
        wizard
    }

    #[test]
    fn step1_flags_exactly_the_missing_fields() {
        let wizard = RegistrationWizard::new();
        let errors = wizard.validate_step(Step::BusinessInfo);
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["businessName", "businessType"]);
    }

    #[test]
    fn step2_flags_exactly_the_missing_fields() {
        let wizard = RegistrationWizard::new();
        let errors = wizard.validate_step(Step::ContactInfo);
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                "city",
                "contactPerson",
                "email",
                "googleMapsLink",
                "phone",
                "postalCode",
                "streetAddress",
            ]
        );
    }

    #[test]
    fn step2_rejects_malformed_email_and_maps_link() {
        let mut wizard = filled_wizard();
        wizard.form.email = "not-an-email".into();
        wizard.form.google_maps_link = "https://example.com/maps".into();
        let errors = wizard.validate_step(Step::ContactInfo);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(
            errors.get("googleMapsLink"),
            Some("Enter a valid Google Maps link")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn maps_link_accepts_place_and_coordinate_forms() {
        assert!(is_valid_maps_link(
            "https://www.google.com/maps/place/Khor+Darwaja"
        ));
        assert!(is_valid_maps_link("https://google.co.in/maps/search/chai?hl=en"));
        assert!(is_valid_maps_link("https://www.google.com/maps?q=24.6005,74.8770"));
        assert!(!is_valid_maps_link("https://www.google.com/search?q=maps"));
        assert!(!is_valid_maps_link("http://www.google.com/maps/place/x"));
    }

    #[test]
    fn wizard_does_not_advance_past_invalid_step() {
        let mut wizard = RegistrationWizard::new();
        assert!(!wizard.next());
        assert_eq!(wizard.step(), Step::BusinessInfo);
        assert!(wizard.errors().contains("businessName"));

        wizard.form.business_name = "Chai Point".into();
        wizard.form.business_type = "Fashion".into();
        assert!(wizard.next());
        assert_eq!(wizard.step(), Step::ContactInfo);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn back_never_validates() {
        let mut wizard = filled_wizard();
        assert!(wizard.next());
        wizard.form.contact_person.clear();
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::BusinessInfo);
        assert!(!wizard.back());
    }

    #[test]
    fn phone_normalizes_to_prefix_plus_ten_digits() {
        assert_eq!(normalize_phone("9876543210"), "+919876543210");
        assert_eq!(normalize_phone("+91 98765-43210"), "+919876543210");
        assert_eq!(normalize_phone("+919876543210999"), "+919876543210");
        assert_eq!(normalize_phone("abc"), "+91");
    }

    #[test]
    fn postal_code_accepts_digits_only_and_truncates() {
        assert_eq!(apply_postal_edit("5600", "56001"), "56001");
        assert_eq!(apply_postal_edit("5600", "5600a"), "5600");
        assert_eq!(apply_postal_edit("", "1234567890"), "123456");
    }

    #[test]
    fn otp_send_requires_valid_email_and_cooldown() {
        let now = Instant::now();
        let mut wizard = RegistrationWizard::new();
        assert!(!wizard.can_send_otp(now));

        wizard.form.email = "asha@chaipoint.in".into();
        assert!(wizard.can_send_otp(now));

        wizard.mark_otp_sent(now);
        assert!(!wizard.can_send_otp(now + Duration::from_secs(59)));
        assert!(wizard.can_send_otp(now + RESEND_COOLDOWN));
        assert_eq!(wizard.resend_remaining(now + Duration::from_secs(30)), Some(30));
        assert_eq!(wizard.resend_remaining(now + Duration::from_secs(61)), None);
    }

    #[test]
    fn otp_verify_gate_needs_send_and_minimum_length() {
        let mut wizard = RegistrationWizard::new();
        assert!(!wizard.can_verify_otp("1234"));

        wizard.mark_otp_sent(Instant::now());
        assert!(!wizard.can_verify_otp("123"));
        assert!(wizard.can_verify_otp("1234"));

        assert_eq!(sanitize_otp(" 12345678 "), "123456");
    }

    #[test]
    fn submit_requires_validity_then_otp_then_payment() {
        let mut wizard = filled_wizard();

        wizard.form.password = "short".into();
        match wizard.submit_payload() {
            Err(SubmitBlocked::Invalid(errors)) => {
                assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
            }
            other => panic!("unexpected: {other:?}"),
        }

        wizard.form.password = "s3cret!pw".into();
        assert_eq!(wizard.submit_payload(), Err(SubmitBlocked::EmailNotVerified));

        wizard.mark_otp_verified();
        assert_eq!(wizard.submit_payload(), Err(SubmitBlocked::PaymentPending));

        wizard.mark_payment_done();
        let payload = wizard.submit_payload().unwrap();
        assert_eq!(payload.business_name, "Chai Point");
        assert_eq!(payload.phone, "+919876543210");
    }
}
