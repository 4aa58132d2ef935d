//! Vendor dashboard page
//!
//! Summary counters, recent activity and the performance table all
//! derive from one `my-coupons` fetch; the coupon table below them is
//! searchable and paginated client-side.

use crate::core::pagination::{DASHBOARD_PAGE_SIZE, Paginator};
use crate::core::stats::{self, DashboardStats};
use crate::{App, ui};
use shared::models::CouponSummary;

pub async fn run(app: &mut App) {
    let mut coupons = match app.client.my_coupons().await {
        Ok(coupons) => coupons,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load coupons");
            ui::alert(&e.user_message());
            return;
        }
    };
    stats::sort_newest_first(&mut coupons);

    render_stats(&DashboardStats::from_coupons(&coupons));
    render_recent_activity(&coupons);
    render_performance(&coupons);

    let mut pager = Paginator::new(DASHBOARD_PAGE_SIZE);
    let mut search = String::new();

    loop {
        let filtered: Vec<&CouponSummary> = stats::filter_by_title(&coupons, &search);
        let total_pages = pager.total_pages(filtered.len());

        ui::heading("Your Coupons");
        if !search.is_empty() {
            println!("Search: \"{search}\"");
        }
        render_coupon_table(pager.slice(&filtered));
        println!("Page {} of {}", pager.page(), total_pages.max(1));
        println!("n) Next page    p) Previous page    /) Search    e) Edit a coupon    b) Back");

        match ui::prompt("Action").as_str() {
            "n" => pager.next(filtered.len()),
            "p" => pager.prev(),
            "/" => {
                search = ui::prompt("Search coupons");
                pager.reset();
            }
            "e" => {
                // The dashboard navigates to the editor by display id.
                if let Some(coupon) = pick_row(pager.slice(&filtered)) {
                    let id = coupon.display_id().to_string();
                    super::coupons::edit(app, &id).await;
                    return;
                }
            }
            "b" => return,
            _ => {}
        }
    }
}

fn render_stats(stats: &DashboardStats) {
    ui::heading("Dashboard");
    ui::table(
        &["Total Coupons", "Active Offers", "Total Redeemed", "Revenue Generated"],
        &[vec![
            stats.total_coupons.to_string(),
            stats.active_offers.to_string(),
            stats.total_redeemed.to_string(),
            format!("₹{}", stats.revenue),
        ]],
    );
}

fn render_recent_activity(coupons: &[CouponSummary]) {
    ui::heading("Recent Activity");
    let recent = stats::recent_activity(coupons);
    if recent.is_empty() {
        println!("(no activity yet)");
    }
    for coupon in recent {
        println!("  {} - {}", coupon.title_or_default(), coupon.discount_label());
    }
}

fn render_performance(coupons: &[CouponSummary]) {
    ui::heading("Coupon Performance");
    let rows: Vec<Vec<String>> = stats::performance_series(coupons)
        .into_iter()
        .map(|(title, redeemed, purchased)| {
            vec![title, redeemed.to_string(), purchased.to_string()]
        })
        .collect();
    ui::table(&["Coupon", "Redeemed", "Purchased"], &rows);
}

fn render_coupon_table(rows: &[&CouponSummary]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                c.title_or_default().to_string(),
                c.discount_label(),
                c.category_or_default().to_string(),
                c.status_label().to_string(),
                c.redeemed.to_string(),
                format!("₹{}", c.price),
                c.display_id().to_string(),
            ]
        })
        .collect();
    ui::table(
        &["#", "Coupon Name", "Discount", "Category", "Status", "Redeemed", "Price", "Coupon ID"],
        &cells,
    );
}

/// Pick a row (1-based) from the currently displayed page.
fn pick_row<'a>(rows: &[&'a CouponSummary]) -> Option<&'a CouponSummary> {
    if rows.is_empty() {
        ui::notice(ui::NoticeKind::Info, "Nothing on this page.");
        return None;
    }
    let input = ui::prompt(&format!("Row number (1-{})", rows.len()));
    match input.parse::<usize>() {
        Ok(n) if (1..=rows.len()).contains(&n) => Some(rows[n - 1]),
        _ => {
            ui::notice(ui::NoticeKind::Error, "Invalid row");
            None
        }
    }
}
