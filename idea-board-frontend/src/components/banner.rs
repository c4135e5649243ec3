/// Error line under the form.
pub fn error_banner(ui: &mut egui::Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(color, message);
        });
}
