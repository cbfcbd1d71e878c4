use rust_decimal::{Decimal, RoundingStrategy};

/// Signed amount with exactly two decimals: `-4.5` → `"-4.50"`.
///
/// Exact ties round away from zero (`0.125` → `"0.13"`), and the sign comes
/// from the original value, so `-0.0` renders as `"0.00"`.
pub fn format_amount(amount: f64) -> String {
    let formatted = round_cents(amount.abs());
    if amount < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn round_cents(abs: f64) -> String {
    match Decimal::from_f64_retain(abs) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        // Out of Decimal's range, or not finite.
        None => format!("{:.2}", abs),
    }
}
