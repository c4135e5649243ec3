pub fn header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading("💡 Idea Board");
        ui.label("Share your ideas and see what others are thinking!");
    });
}
