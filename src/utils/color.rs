use egui::Color32;

/// `#dc3545`
pub const DEBIT_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
/// `#28a745`
pub const CREDIT_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

pub const ERROR_TEXT: Color32 = Color32::from_rgb(204, 0, 0);
pub const ERROR_FILL: Color32 = Color32::from_rgb(255, 238, 238);
pub const ACCENT: Color32 = Color32::from_rgb(0, 123, 255);

pub fn amount_color(amount: f64) -> Color32 {
    if amount < 0.0 {
        DEBIT_COLOR
    } else {
        CREDIT_COLOR
    }
}
