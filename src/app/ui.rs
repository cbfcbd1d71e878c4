use super::StatementUploader;
use crate::upload::Transaction;
use crate::utils::amount::format_amount;
use crate::utils::color::{amount_color, ACCENT, ERROR_FILL, ERROR_TEXT};
use egui::{Align, Color32, Layout, RichText};

impl StatementUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.heading("Bank Statement Uploader");
                    ui.add_space(3.0);
                    ui.label(
                        RichText::new("Upload an .xls, .xlsx or .csv statement to see its transactions")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );

                    ui.add_space(20.0);
                    self.render_controls(ui, ctx);

                    if let Some(error) = &self.state.error {
                        ui.add_space(20.0);
                        render_error(ui, error);
                    }

                    if self.state.has_transactions() {
                        ui.add_space(20.0);
                        render_transactions(ui, &self.state.transactions);
                    }

                    ui.add_space(20.0);
                });
        });

        if self.state.loading {
            ctx.request_repaint();
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📁 Choose File").clicked() {
                    if let Some(path) = self.file_input.browse() {
                        self.choose_file(&path);
                    }
                }
                ui.label(self.file_input.label());

                ui.add_space(10.0);

                let can_upload = self.state.can_upload();
                let text = if self.state.loading {
                    "⏳ Uploading..."
                } else {
                    "📤 Upload"
                };
                let fill = if can_upload {
                    ACCENT
                } else {
                    Color32::from_gray(204)
                };
                let button = egui::Button::new(RichText::new(text).color(Color32::WHITE))
                    .fill(fill)
                    .min_size(egui::vec2(120.0, 32.0));

                if ui.add_enabled(can_upload, button).clicked() {
                    self.start_upload(ctx);
                }
            });
            ui.label(
                RichText::new("You can also drop a statement onto this window")
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
        });
    }
}

fn render_error(ui: &mut egui::Ui, error: &str) {
    egui::Frame::none()
        .fill(ERROR_FILL)
        .rounding(4.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(ERROR_TEXT, format!("Error: {}", error));
        });
}

fn render_transactions(ui: &mut egui::Ui, transactions: &[Transaction]) {
    ui.heading("Transactions");
    ui.add_space(10.0);

    egui::Grid::new("transactions")
        .striped(true)
        .num_columns(4)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Date").strong());
            ui.label(RichText::new("Description").strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("Amount").strong());
            });
            ui.label(RichText::new("Category").strong());
            ui.end_row();

            for transaction in transactions {
                ui.label(&transaction.date);
                ui.label(&transaction.description);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format_amount(transaction.amount))
                            .color(amount_color(transaction.amount))
                            .strong(),
                    );
                });
                ui.label(&transaction.category);
                ui.end_row();
            }
        });
}
