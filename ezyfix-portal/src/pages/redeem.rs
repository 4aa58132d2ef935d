//! Coupon redemption page
//!
//! Two-field code verification plus the list of prior redemptions. The
//! backend is the sole arbiter: nothing is marked redeemed locally until
//! it says so, and a successful verification triggers a full refresh of
//! the redeemed list.

use crate::{App, ui};
use shared::models::{RedemptionRecord, VerifyRedeemRequest};

/// Both inputs must be present before a verification request may be
/// issued.
fn can_submit_redemption(coupon_id: &str, code: &str) -> bool {
    !coupon_id.trim().is_empty() && !code.trim().is_empty()
}

/// Append `record` unless a redemption for the same coupon id is
/// already in the success list.
fn append_unique(list: &mut Vec<RedemptionRecord>, record: RedemptionRecord) {
    if list
        .iter()
        .any(|r| r.original_coupon_id == record.original_coupon_id)
    {
        return;
    }
    list.push(record);
}

pub async fn run(app: &mut App) {
    ui::heading("Redeem Coupons");

    let mut all = fetch_redeemed(app).await;
    let mut successful: Vec<RedemptionRecord> =
        all.iter().filter(|r| r.is_successful()).cloned().collect();

    loop {
        println!("1. Redeem client coupon");
        println!("2. Redeemed coupons");
        println!("3. Successfully redeemed coupons");
        println!("0. Back");

        match ui::prompt("Enter choice").as_str() {
            "1" => confirm_redemption(app, &mut all, &mut successful).await,
            "2" => list_redeemed(&all),
            "3" => list_successful(&successful),
            "0" => return,
            _ => {}
        }
    }
}

async fn fetch_redeemed(app: &App) -> Vec<RedemptionRecord> {
    match app.client.redeemed_coupons().await {
        Ok(records) => records,
        Err(e) => {
            // The page still works for fresh verifications; the history
            // just shows empty.
            tracing::error!(error = %e, "Failed to fetch redeemed coupons");
            ui::notice(ui::NoticeKind::Error, &e.user_message());
            Vec::new()
        }
    }
}

async fn confirm_redemption(
    app: &App,
    all: &mut Vec<RedemptionRecord>,
    successful: &mut Vec<RedemptionRecord>,
) {
    let coupon_id = ui::prompt("Enter Coupon ID");
    let code = ui::prompt("Enter Coupon Code");

    if !can_submit_redemption(&coupon_id, &code) {
        ui::alert("Please enter both Coupon ID and Code");
        return;
    }

    let request = VerifyRedeemRequest {
        redeemed_coupon_id: coupon_id,
        redemption_code: code,
    };

    match app.client.verify_redeem(&request).await {
        Ok(response) if response.is_successful() => {
            ui::notice(ui::NoticeKind::Success, "Coupon redeemed successfully!");
            if let Some(data) = response.coupon_data {
                append_unique(successful, data);
            }
            *all = fetch_redeemed(app).await;
        }
        Ok(response) => {
            let message = response
                .message
                .unwrap_or_else(|| "Verification failed".to_string());
            ui::alert(&message);
        }
        Err(e) => {
            tracing::error!(error = %e, "Redemption verification failed");
            ui::alert("Something went wrong while redeeming the coupon.");
        }
    }
}

fn list_redeemed(all: &[RedemptionRecord]) {
    ui::heading("Redeemed Coupons");
    let search = ui::prompt("Search by Coupon ID (empty for all)");
    let needle = search.trim().to_lowercase();

    let rows: Vec<Vec<String>> = all
        .iter()
        .filter(|r| r.original_coupon_id.to_lowercase().contains(&needle))
        .map(|r| {
            vec![
                r.original_coupon_id.clone(),
                r.redemption_code.clone(),
                r.source_label().to_string(),
                format!("₹{}", r.price),
                r.redeemed_time.clone().unwrap_or_else(|| "-".to_string()),
                r.status.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    ui::table(
        &["Coupon ID", "Coupon Code", "Category/Business", "Price", "Redeemed At", "Status"],
        &rows,
    );
}

fn list_successful(successful: &[RedemptionRecord]) {
    ui::heading("Successfully Redeemed Coupons");
    if successful.is_empty() {
        println!("No successful redemptions yet.");
        return;
    }
    let rows: Vec<Vec<String>> = successful
        .iter()
        .map(|r| {
            vec![
                r.original_coupon_id.clone(),
                r.redemption_code.clone(),
                format!("₹{}", r.price),
                r.redeemed_time.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    ui::table(&["Coupon ID", "Coupon Code", "Price", "Redeemed At"], &rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> RedemptionRecord {
        RedemptionRecord {
            original_coupon_id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_inputs_never_reach_the_network() {
        assert!(!can_submit_redemption("", "1234"));
        assert!(!can_submit_redemption("EZY-AAA111", ""));
        assert!(!can_submit_redemption("  ", "  "));
        assert!(can_submit_redemption("EZY-AAA111", "1234"));
    }

    #[test]
    fn success_list_dedupes_by_coupon_id() {
        let mut list = vec![record("EZY-AAA111")];
        append_unique(&mut list, record("EZY-AAA111"));
        assert_eq!(list.len(), 1);

        append_unique(&mut list, record("EZY-BBB222"));
        assert_eq!(list.len(), 2);
    }
}
