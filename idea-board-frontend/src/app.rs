use crate::components::{error_banner, header, idea_form, ideas_section};
use egui::Context;
use futures::task::LocalSpawn;
use idea_board::{Controller, IdeaApi};

/// The whole page: header, form, error banner, list.
pub struct IdeaBoardApp<A, S> {
    controller: Controller<A, S>,
}

impl<A, S> IdeaBoardApp<A, S>
where
    A: IdeaApi + Clone + 'static,
    S: LocalSpawn,
{
    /// Hook the controller up to `ctx` repaints and start the initial fetch.
    pub fn new(ctx: &Context, mut controller: Controller<A, S>) -> Self {
        let repaint = ctx.clone();
        controller.set_notify(move || repaint.request_repaint());
        controller.mount();
        Self { controller }
    }

    pub fn controller(&self) -> &Controller<A, S> {
        &self.controller
    }

    /// Draw one frame.
    pub fn show(&mut self, ctx: &Context) {
        self.controller.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    header(ui);
                    ui.add_space(12.0);

                    let loading = self.controller.board().loading();
                    let can_submit = self.controller.board().can_submit();
                    if idea_form(ui, self.controller.draft_mut(), loading, can_submit) {
                        // Validation errors are already on the board.
                        let _ = self.controller.submit();
                    }

                    let board = self.controller.board();
                    if let Some(message) = board.error_message() {
                        ui.add_space(8.0);
                        error_banner(ui, message);
                    }

                    ui.add_space(16.0);
                    ideas_section(ui, board.ideas(), board.loading());
                });
        });
    }
}

#[cfg(target_arch = "wasm32")]
impl<A, S> eframe::App for IdeaBoardApp<A, S>
where
    A: IdeaApi + Clone + 'static,
    S: LocalSpawn,
{
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::{LocalPool, LocalSpawner};
    use idea_board::{ApiError, CreatedAt, Idea, IdeaId};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Serves a fixed list; remembers what was created.
    #[derive(Clone, Default)]
    struct StaticApi {
        ideas: Rc<RefCell<Vec<Idea>>>,
        fetches: Rc<RefCell<usize>>,
    }

    impl IdeaApi for StaticApi {
        async fn fetch_ideas(&self) -> Result<Vec<Idea>, ApiError> {
            *self.fetches.borrow_mut() += 1;
            Ok(self.ideas.borrow().clone())
        }

        async fn create_idea(&self, content: &str) -> Result<Idea, ApiError> {
            let idea = Idea {
                id: IdeaId::from(self.ideas.borrow().len() as i64 + 1),
                content: content.to_owned(),
                created_at: CreatedAt::new("2024-03-01T09:30:00"),
            };
            self.ideas.borrow_mut().insert(0, idea.clone());
            Ok(idea)
        }
    }

    fn frame(ctx: &Context, app: &mut IdeaBoardApp<StaticApi, LocalSpawner>) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
    }

    #[test]
    fn creating_the_app_fetches_once() {
        let mut pool = LocalPool::new();
        let api = StaticApi::default();
        let ctx = Context::default();
        let mut app = IdeaBoardApp::new(&ctx, Controller::new(api.clone(), pool.spawner()));

        assert!(app.controller().board().loading());
        frame(&ctx, &mut app);
        pool.run_until_stalled();
        frame(&ctx, &mut app);
        frame(&ctx, &mut app);

        assert_eq!(*api.fetches.borrow(), 1);
        assert!(!app.controller().board().loading());
        assert!(app.controller().board().ideas().is_empty());
    }

    #[test]
    fn frames_render_with_ideas_and_errors() {
        let mut pool = LocalPool::new();
        let api = StaticApi::default();
        api.ideas.borrow_mut().push(Idea {
            id: IdeaId::from("x"),
            content: "</script> and emoji 💡".into(),
            created_at: CreatedAt::new("not a date"),
        });
        let ctx = Context::default();
        let mut app = IdeaBoardApp::new(&ctx, Controller::new(api, pool.spawner()));

        pool.run_until_stalled();
        frame(&ctx, &mut app);
        assert_eq!(app.controller().board().ideas().len(), 1);

        // Blank submit surfaces a validation error; the next frame draws it.
        app.controller.submit().unwrap_err();
        frame(&ctx, &mut app);
        assert_eq!(
            app.controller().board().error_message(),
            Some("Please enter an idea")
        );
    }
}
