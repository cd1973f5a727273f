//! Email footprint estimation.

use crate::domain::EmailProfile;
use crate::impact::calculator::finite_or_zero;

/// Daily email footprint in kg CO2e.
///
/// A weighted grams-per-email blend of plain and attachment-carrying mail.
/// Always a cost; netting it against device savings is the aggregator's job.
pub fn daily_email_kg(profile: &EmailProfile) -> f64 {
    let emails_per_day = finite_or_zero(profile.emails_per_day);
    let pct_with_attachments = finite_or_zero(profile.pct_with_attachments);
    let base_grams = finite_or_zero(profile.base_grams);
    let attach_grams = finite_or_zero(profile.attach_grams);

    let avg_grams =
        base_grams * (1.0 - pct_with_attachments) + attach_grams * pct_with_attachments;
    // Always a cost. An out-of-range attachment share from an imported
    // profile must not turn the footprint into a saving.
    (emails_per_day * avg_grams / 1000.0).max(0.0)
}
