//! Dashboard aggregation
//!
//! All counters derive from the fetched coupon list; there is no
//! aggregation endpoint.

use shared::models::CouponSummary;

/// Revenue attributed to each redemption (₹). The backend exposes a
/// `redeemed` counter but no revenue figure; until it does, the
/// dashboard estimates with this flat amount.
pub const REVENUE_PER_REDEMPTION: f64 = 5.0;

/// How many coupons the recent-activity strip shows.
pub const RECENT_ACTIVITY_COUNT: usize = 3;

/// Summary counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_coupons: usize,
    pub active_offers: usize,
    pub total_redeemed: u64,
    pub revenue: f64,
}

impl DashboardStats {
    pub fn from_coupons(coupons: &[CouponSummary]) -> Self {
        let total_redeemed: u64 = coupons.iter().map(|c| c.redeemed).sum();
        Self {
            total_coupons: coupons.len(),
            active_offers: coupons.iter().filter(|c| c.is_active()).count(),
            total_redeemed,
            revenue: total_redeemed as f64 * REVENUE_PER_REDEMPTION,
        }
    }
}

/// Newest-first ordering by backend id, applied right after fetch.
pub fn sort_newest_first(coupons: &mut [CouponSummary]) {
    coupons.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Case-insensitive title search.
pub fn filter_by_title<'a>(coupons: &'a [CouponSummary], term: &str) -> Vec<&'a CouponSummary> {
    let needle = term.trim().to_lowercase();
    coupons
        .iter()
        .filter(|c| c.title_or_default().to_lowercase().contains(&needle))
        .collect()
}

/// One bar-chart row per coupon: (title, redeemed, purchased).
pub fn performance_series(coupons: &[CouponSummary]) -> Vec<(String, u64, u64)> {
    coupons
        .iter()
        .map(|c| (c.title_or_default().to_string(), c.redeemed, c.purchased))
        .collect()
}

/// The recent-activity strip: the first few coupons of the (already
/// newest-first) list.
pub fn recent_activity(coupons: &[CouponSummary]) -> &[CouponSummary] {
    &coupons[..coupons.len().min(RECENT_ACTIVITY_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(id: i64, title: &str, status: Option<&str>, redeemed: u64) -> CouponSummary {
        CouponSummary {
            id,
            title: Some(title.to_string()),
            status: status.map(String::from),
            redeemed,
            ..Default::default()
        }
    }

    #[test]
    fn stats_derive_from_the_list_alone() {
        let coupons = vec![
            coupon(1, "Coffee", Some("Active"), 4),
            coupon(2, "Thali", Some("Expired"), 10),
            coupon(3, "Spa Day", None, 6),
        ];
        let stats = DashboardStats::from_coupons(&coupons);
        assert_eq!(stats.total_coupons, 3);
        // Missing status counts as active, like the listing display.
        assert_eq!(stats.active_offers, 2);
        assert_eq!(stats.total_redeemed, 20);
        assert_eq!(stats.revenue, 100.0);
    }

    #[test]
    fn empty_list_is_all_zeroes() {
        let stats = DashboardStats::from_coupons(&[]);
        assert_eq!(stats.total_coupons, 0);
        assert_eq!(stats.revenue, 0.0);
    }

    #[test]
    fn sorting_is_newest_first_by_id() {
        let mut coupons = vec![
            coupon(2, "b", None, 0),
            coupon(9, "c", None, 0),
            coupon(4, "a", None, 0),
        ];
        sort_newest_first(&mut coupons);
        let ids: Vec<_> = coupons.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 4, 2]);
    }

    #[test]
    fn title_filter_is_case_insensitive() {
        let coupons = vec![
            coupon(1, "Masala Chai", None, 0),
            coupon(2, "Filter Coffee", None, 0),
        ];
        let hits = filter_by_title(&coupons, "chai");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert_eq!(filter_by_title(&coupons, "").len(), 2);
    }

    #[test]
    fn recent_activity_caps_at_three() {
        let coupons: Vec<_> = (0..5).map(|i| coupon(i, "x", None, 0)).collect();
        assert_eq!(recent_activity(&coupons).len(), 3);
        assert_eq!(recent_activity(&coupons[..1]).len(), 1);
    }
}
