//! Display formatting for engagement counters.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Formats a counter the way the feed shows it: plain below a thousand,
/// otherwise one decimal in thousands (`K`) or millions (`M`).
///
/// The quotient is rounded as a binary float to one decimal, so `1150` is
/// `"1.1K"` (1.15 sits just below the midpoint) while the exact tie `1250`
/// rounds up to `"1.3K"`.
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= MILLION {
        scaled(n, MILLION, 'M')
    } else if n >= THOUSAND {
        scaled(n, THOUSAND, 'K')
    } else {
        n.to_string()
    }
}

#[allow(clippy::cast_precision_loss)]
fn scaled(n: u64, unit: u64, suffix: char) -> String {
    format!("{}{suffix}", to_fixed_one(n as f64 / unit as f64))
}

/// Nearest one-decimal rendering of `value`. Values exactly halfway between
/// two tenths are always quarters (`x.25`, `x.75`) and round up.
#[allow(clippy::float_cmp)]
fn to_fixed_one(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        format!("{:.1}", value + 0.05)
    } else {
        format!("{value:.1}")
    }
}

#[must_use]
pub fn likes_label(likes: u64) -> String {
    format!("{} likes", format_count(likes))
}

#[must_use]
pub fn comments_label(comments: u64) -> String {
    format!("View all {comments} comments")
}
