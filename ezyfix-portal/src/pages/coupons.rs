//! Coupon pages: create, edit, manage
//!
//! Create and edit share the [`CouponForm`]; manage is the paginated
//! table with delete-with-confirmation. A row disappears locally only
//! after the backend confirmed the delete.

use crate::core::coupon_form::CouponForm;
use crate::core::pagination::{MANAGE_PAGE_SIZE, Paginator};
use crate::{App, ui};
use shared::models::{CouponImage, CouponSummary};
use shared::types::{COUPON_CATEGORIES, display_coupon_id};

/// Create-coupon page.
pub async fn create(app: &mut App) {
    ui::heading("Create Coupon");
    let mut form = CouponForm::for_create();

    loop {
        edit_fields(&mut form, true);
        render_preview(&form);
        println!("s) Save coupon    e) Edit again    q) Cancel");

        match ui::prompt("Action").as_str() {
            "s" => {
                let errors = form.validate_today();
                if !errors.is_empty() {
                    ui::print_errors(&errors);
                    continue;
                }
                let display_id = display_coupon_id();
                match app.client.create_coupon(&form.to_input(), &display_id).await {
                    Ok(created) => {
                        let coupon_id = created.coupon_id;
                        if let Err(e) = app.update_session(|s| {
                            s.last_created_coupon_id = Some(coupon_id.clone());
                        }) {
                            tracing::warn!(error = %e, "Failed to remember last coupon id");
                        }
                        ui::notice(
                            ui::NoticeKind::Success,
                            &format!("Coupon saved! Coupon ID: {coupon_id}"),
                        );
                        return;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to create coupon");
                        ui::alert("Failed to create coupon.");
                    }
                }
            }
            "e" => {}
            "q" => return,
            _ => {}
        }
    }
}

/// Edit-coupon page. `id` is whatever identifier the caller navigated
/// with (numeric backend id or display id; the backend accepts both).
pub async fn edit(app: &mut App, id: &str) {
    ui::heading("Edit Coupon");

    let coupon = match app.client.coupon(id).await {
        Ok(coupon) => coupon,
        Err(e) => {
            tracing::error!(error = %e, coupon = id, "Failed to load coupon");
            ui::alert("Failed to load coupon details.");
            return;
        }
    };
    let mut form = CouponForm::for_edit(&coupon);

    loop {
        edit_fields(&mut form, false);
        render_preview(&form);
        println!("s) Save changes    e) Edit again    q) Cancel");

        match ui::prompt("Action").as_str() {
            "s" => {
                let errors = form.validate_today();
                if !errors.is_empty() {
                    ui::print_errors(&errors);
                    continue;
                }
                match app.client.update_coupon(id, &form.to_input()).await {
                    Ok(()) => {
                        ui::notice(ui::NoticeKind::Success, "Coupon updated successfully!");
                        return;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, coupon = id, "Failed to update coupon");
                        ui::alert("Failed to update coupon.");
                    }
                }
            }
            "e" => {}
            "q" => return,
            _ => {}
        }
    }
}

/// Manage-coupons page: paginated table with edit and delete.
pub async fn manage(app: &mut App) {
    ui::heading("Manage Coupons");
    println!("Manage your active, pending, and expired coupons.");

    let mut coupons = match app.client.my_coupons().await {
        Ok(coupons) => coupons,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load coupons");
            ui::alert(&e.user_message());
            return;
        }
    };

    let mut pager = Paginator::new(MANAGE_PAGE_SIZE);

    loop {
        let total_pages = pager.total_pages(coupons.len());
        render_table(pager.slice(&coupons));
        println!("Page {} of {}", pager.page(), total_pages.max(1));
        println!("n) Next page    p) Previous page    e) Edit    d) Delete    b) Back");

        match ui::prompt("Action").as_str() {
            "n" => pager.next(coupons.len()),
            "p" => pager.prev(),
            "e" => {
                if let Some(index) = pick_index(&pager, &coupons) {
                    let id = coupons[index].id.to_string();
                    edit(app, &id).await;
                    return;
                }
            }
            "d" => {
                if let Some(index) = pick_index(&pager, &coupons) {
                    delete_row(app, &mut coupons, index).await;
                    pager.set_page(pager.page(), coupons.len());
                }
            }
            "b" => return,
            _ => {}
        }
    }
}

/// Confirmed backend delete, then the local row removal.
async fn delete_row(app: &App, coupons: &mut Vec<CouponSummary>, index: usize) {
    if !ui::confirm("Are you sure you want to delete this coupon?") {
        return;
    }
    let id = coupons[index].id;
    match app.client.delete_coupon(id).await {
        Ok(()) => {
            coupons.remove(index);
            ui::notice(ui::NoticeKind::Success, "Coupon deleted successfully!");
        }
        Err(e) => {
            tracing::error!(error = %e, coupon = id, "Failed to delete coupon");
            ui::alert("Failed to delete coupon.");
        }
    }
}

fn render_table(rows: &[CouponSummary]) {
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

/// Map a 1-based row number on the current page to an index into the
/// full list.
fn pick_index(pager: &Paginator, coupons: &[CouponSummary]) -> Option<usize> {
    let page = pager.slice(coupons);
    if page.is_empty() {
        ui::notice(ui::NoticeKind::Info, "Nothing on this page.");
        return None;
    }
    let input = ui::prompt(&format!("Row number (1-{})", page.len()));
    match input.parse::<usize>() {
        Ok(n) if (1..=page.len()).contains(&n) => {
            Some((pager.page() - 1) * pager.per_page() + (n - 1))
        }
        _ => {
            ui::notice(ui::NoticeKind::Error, "Invalid row");
            None
        }
    }
}

fn edit_fields(form: &mut CouponForm, is_create: bool) {
    form.title = ui::prompt_default("Coupon Title", &form.title);
    form.category = ui::select("Category", COUPON_CATEGORIES, &form.category);
    form.description = ui::prompt_default("Description", &form.description);
    form.discount_type = ui::select(
        "Discount Type",
        &["Percentage (%)", "Fixed Amount"],
        &form.discount_type,
    );
    form.discount_value = ui::prompt_default("Discount Value", &form.discount_value);
    form.price = ui::prompt_default("Original Price (MRP) (₹)", &form.price);
    form.minimum_purchase =
        ui::prompt_default("Minimum Purchase (₹, optional)", &form.minimum_purchase);
    form.terms_and_conditions =
        ui::prompt_default("Terms & Conditions", &form.terms_and_conditions);
    form.activation_date =
        ui::prompt_default("Activation Date (YYYY-MM-DD)", &form.activation_date);
    form.expiration_date =
        ui::prompt_default("Expiration Date (YYYY-MM-DD)", &form.expiration_date);

    let image_label = if is_create {
        "Coupon image path (PNG or JPG)"
    } else {
        "Replacement image path (optional)"
    };
    let current = form
        .image
        .as_ref()
        .map(|i| i.file_name.clone())
        .unwrap_or_default();
    let path = ui::prompt_default(image_label, &current);
    if !path.is_empty() && path != current {
        match load_image(&path) {
            Ok(image) => form.image = Some(image),
            Err(e) => {
                tracing::warn!(error = %e, path, "Could not read image");
                ui::notice(ui::NoticeKind::Error, &format!("Could not read image: {e}"));
            }
        }
    }
}

fn load_image(path: &str) -> std::io::Result<CouponImage> {
    let data = std::fs::read(path)?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
    Ok(CouponImage {
        file_name,
        content_type,
        data,
    })
}

fn render_preview(form: &CouponForm) {
    ui::heading("Live Preview");
    let display_price: f64 = form.price.trim().parse().unwrap_or(0.0);
    match form.discounted_price() {
        Some(discounted) if discounted < display_price => {
            println!(
                "  {}  ₹{discounted:.2}  (was ₹{display_price:.2})",
                preview_title(form)
            );
        }
        _ => println!("  {}  ₹{display_price:.2}", preview_title(form)),
    }
    let valid_till = if form.expiration_date.is_empty() {
        "YYYY-MM-DD"
    } else {
        &form.expiration_date
    };
    println!("  Valid till: {valid_till}");
}

fn preview_title(form: &CouponForm) -> &str {
    if form.title.is_empty() {
        "Coupon Title"
    } else {
        &form.title
    }
}
