mod banner;
mod form;
mod header;
mod list;

pub use banner::error_banner;
pub use form::{idea_form, submit_label};
pub use header::header;
pub use list::{
    IdeaListBody, card_key, format_created_at, idea_card, ideas_heading, ideas_section,
};
