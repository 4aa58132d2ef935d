//! Portal pages
//!
//! One module per route of the original portal. The router below plays
//! the role of the app shell: it shows the right menu for the auth
//! state and dispatches to the page the vendor picked. Every page owns
//! its own fetch lifecycle; nothing is shared between pages except the
//! [`crate::App`] context.

pub mod coupons;
pub mod dashboard;
pub mod legal;
pub mod login;
pub mod profile;
pub mod redeem;
pub mod registration;

use crate::{App, ui};

/// Where the vendor can go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Registration,
    Login,
    Dashboard,
    CreateCoupon,
    ManageCoupons,
    RedeemCoupon,
    Profile,
    Terms,
    Policy,
    Refund,
    Contact,
    Quit,
}

fn entry_menu() -> Route {
    ui::heading("EzyFix Vendor Portal");
    println!("1. Register your business");
    println!("2. Login");
    println!("3. Terms    4. Policy    5. Refund    6. Contact");
    println!("0. Exit");

    match ui::prompt("Enter choice").as_str() {
        "1" => Route::Registration,
        "2" => Route::Login,
        "3" => Route::Terms,
        "4" => Route::Policy,
        "5" => Route::Refund,
        "6" => Route::Contact,
        "0" => Route::Quit,
        _ => {
            ui::notice(ui::NoticeKind::Error, "Invalid choice");
            entry_menu()
        }
    }
}

fn main_menu(app: &App) -> Route {
    let name = app
        .session()
        .map(|s| s.business.clone())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "your business".to_string());
    ui::heading(&format!("EzyFix Vendor Portal - {name}"));
    println!("1. Dashboard");
    println!("2. Manage Coupons");
    println!("3. Create Coupon");
    println!("4. Redeem Coupon");
    println!("5. Profile");
    println!("6. Terms    7. Policy    8. Refund    9. Contact");
    println!("0. Exit");

    match ui::prompt("Enter choice").as_str() {
        "1" => Route::Dashboard,
        "2" => Route::ManageCoupons,
        "3" => Route::CreateCoupon,
        "4" => Route::RedeemCoupon,
        "5" => Route::Profile,
        "6" => Route::Terms,
        "7" => Route::Policy,
        "8" => Route::Refund,
        "9" => Route::Contact,
        "0" => Route::Quit,
        _ => {
            ui::notice(ui::NoticeKind::Error, "Invalid choice");
            main_menu(app)
        }
    }
}

/// Run the portal until the vendor exits.
pub async fn run(app: &mut App) -> anyhow::Result<()> {
    loop {
        let route = if app.is_logged_in() {
            main_menu(app)
        } else {
            entry_menu()
        };

        match route {
            Route::Registration => registration::run(app).await,
            Route::Login => login::run(app).await,
            Route::Dashboard => dashboard::run(app).await,
            Route::CreateCoupon => coupons::create(app).await,
            Route::ManageCoupons => coupons::manage(app).await,
            Route::RedeemCoupon => redeem::run(app).await,
            Route::Profile => profile::run(app).await,
            Route::Terms => legal::terms(),
            Route::Policy => legal::policy(),
            Route::Refund => legal::refund(),
            Route::Contact => legal::contact(),
            Route::Quit => break,
        }
    }
    Ok(())
}
