//! Static legal pages

use crate::ui;

pub fn terms() {
    ui::heading("Terms & Conditions");
    println!(
        "By registering a business on EzyFix you agree that coupon offers you\n\
         publish are accurate, honored at redemption, and comply with local\n\
         consumer law. Vendor accounts are activated only after admin approval\n\
         of the registration request. EzyFix may suspend accounts that publish\n\
         misleading offers or repeatedly fail redemption verification."
    );
    pause();
}

pub fn policy() {
    ui::heading("Privacy Policy");
    println!(
        "Information we may collect: business details, contact person, email,\n\
         phone and address as entered during registration.\n\
         What we do with it: operate your vendor account, verify your email,\n\
         process the registration fee and show your offers to customers.\n\
         Security: your password is never stored by this portal; sessions use\n\
         a backend-issued token kept on your device until you log out.\n\
         You may correct your information at any time from the profile page."
    );
    pause();
}

pub fn refund() {
    ui::heading("Cancellation & Refund");
    println!(
        "Cancellation window: registration fees are refundable within 7 days\n\
         if the request has not yet been approved.\n\
         Non-cancellable: fees for approved, active vendor accounts.\n\
         Refund timeline: 5-7 business days back to the original payment\n\
         method. Need help? Contact support (see Contact page)."
    );
    pause();
}

pub fn contact() {
    ui::heading("Contact Us");
    println!("Merchant legal entity: MEBIT EZYFIX PVT LTD");
    println!("Registered address: P.N. D-155-A/G-1, Taranagar-D, Jaipur, Rajasthan 302012");
    println!("Telephone: +91-7615930145");
    println!("Email: support@ezyfix.in");
    pause();
}

fn pause() {
    let _ = ui::prompt("Press Enter to continue");
}
