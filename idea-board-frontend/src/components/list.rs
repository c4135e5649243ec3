use chrono::Local;
use idea_board::{CreatedAt, Idea};

/// What the list section shows below its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaListBody {
    Loading,
    Empty,
    Ideas,
}

impl IdeaListBody {
    pub fn of(ideas: &[Idea], loading: bool) -> Self {
        match (ideas.is_empty(), loading) {
            (true, true) => IdeaListBody::Loading,
            (true, false) => IdeaListBody::Empty,
            (false, _) => IdeaListBody::Ideas,
        }
    }
}

pub fn ideas_heading(count: usize) -> String {
    format!("All Ideas ({count})")
}

/// Creation time in the viewer's local zone, or the raw value when the
/// service sent something unparseable.
pub fn format_created_at(created_at: &CreatedAt) -> String {
    match created_at.parse() {
        Some(at) => at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => created_at.to_string(),
    }
}

pub fn ideas_section(ui: &mut egui::Ui, ideas: &[Idea], loading: bool) {
    ui.heading(ideas_heading(ideas.len()));
    ui.add_space(8.0);

    match IdeaListBody::of(ideas, loading) {
        IdeaListBody::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading ideas...");
            });
        }
        IdeaListBody::Empty => {
            ui.weak("No ideas yet. Be the first to share!");
        }
        IdeaListBody::Ideas => {
            for (index, idea) in ideas.iter().enumerate() {
                ui.push_id(card_key(index, idea), |ui| idea_card(ui, idea));
                ui.add_space(6.0);
            }
        }
    }
}

/// Widget id salt for the card at `index`. The service may repeat ids, so
/// the position is part of the key.
pub fn card_key(index: usize, idea: &Idea) -> egui::Id {
    egui::Id::new((index, &idea.id))
}

pub fn idea_card(ui: &mut egui::Ui, idea: &Idea) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(&idea.content);
        ui.label(
            egui::RichText::new(format_created_at(&idea.created_at))
                .small()
                .weak(),
        );
    });
}
