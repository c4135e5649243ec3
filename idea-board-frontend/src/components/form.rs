/// Draft editor and submit button. Returns true when the user submitted.
///
/// The editor is read-only while a request is outstanding; the button also
/// stays disabled while the draft is blank.
pub fn idea_form(ui: &mut egui::Ui, draft: &mut String, loading: bool, can_submit: bool) -> bool {
    let editor = egui::TextEdit::multiline(draft)
        .hint_text("What's your idea?")
        .desired_rows(3)
        .desired_width(f32::INFINITY);
    ui.add_enabled(!loading, editor);

    ui.add_space(4.0);
    ui.add_enabled(can_submit, egui::Button::new(submit_label(loading)))
        .clicked()
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Submitting..." } else { "Submit Idea" }
}
