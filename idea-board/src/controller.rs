//! Drives a [`Board`] with a real (or fake) [`IdeaApi`].
//!
//! Requests run as local futures on whatever executor the caller hands in
//! (`wasm_bindgen_futures` in the browser, a `LocalPool` in tests). Each
//! finished call sends an [`Outcome`] over a channel; [`Controller::poll`]
//! drains that channel once per frame and applies the outcomes.

use crate::api::IdeaApi;
use crate::error::{ApiError, BoardError};
use crate::state::{Board, Outcome, Request};
use futures::task::{LocalSpawn, LocalSpawnExt};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, channel};

pub struct Controller<A, S> {
    board: Board,
    api: A,
    spawner: S,
    mounted: bool,
    notify: Option<Rc<dyn Fn()>>,
    outcome_tx: Sender<Outcome>,
    outcome_rx: Receiver<Outcome>,
}

impl<A, S> Controller<A, S>
where
    A: IdeaApi + Clone + 'static,
    S: LocalSpawn,
{
    pub fn new(api: A, spawner: S) -> Self {
        let (tx, rx) = channel();
        Self {
            board: Board::new(),
            api,
            spawner,
            mounted: false,
            notify: None,
            outcome_tx: tx,
            outcome_rx: rx,
        }
    }

    /// Call `notify` whenever an operation finishes (e.g. to request a
    /// repaint).
    pub fn set_notify(&mut self, notify: impl Fn() + 'static) {
        self.notify = Some(Rc::new(notify));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn draft_mut(&mut self) -> &mut String {
        self.board.draft_mut()
    }

    /// Load the list. Only the first call does anything.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let request = self.board.begin_fetch();
        self.dispatch(request);
    }

    /// Submit the current draft.
    ///
    /// Validation failures are recorded on the board and returned; nothing
    /// is sent in that case.
    pub fn submit(&mut self) -> Result<(), BoardError> {
        let request = self.board.submit()?;
        self.dispatch(request);
        Ok(())
    }

    /// Apply every finished operation. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if let Err(e) = self.board.apply(outcome) {
                log::error!("{e}");
            }
            applied += 1;
        }
        applied
    }

    fn dispatch(&mut self, request: Request) {
        log::debug!("Dispatching {}", request.operation());

        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let notify = self.notify.clone();
        let task_request = request.clone();

        let spawned = self.spawner.spawn_local(async move {
            let outcome = match task_request {
                Request::FetchIdeas => Outcome::Fetched(api.fetch_ideas().await),
                Request::CreateIdea { content } => Outcome::Created(api.create_idea(&content).await),
            };
            let _ = tx.send(outcome);
            if let Some(notify) = notify {
                notify();
            }
        });

        if let Err(e) = spawned {
            let outcome = Outcome::failed(&request, ApiError::Request(e.to_string()));
            let _ = self.outcome_tx.send(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::model::{CreatedAt, Idea, IdeaId};
    use futures::executor::LocalPool;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Fetch,
        Create(String),
    }

    /// Records calls and answers from scripted queues.
    #[derive(Clone, Default)]
    struct FakeApi {
        calls: Rc<RefCell<Vec<Call>>>,
        lists: Rc<RefCell<VecDeque<Result<Vec<Idea>, ApiError>>>>,
        created: Rc<RefCell<VecDeque<Result<Idea, ApiError>>>>,
    }

    impl FakeApi {
        fn serve_list(&self, result: Result<Vec<Idea>, ApiError>) {
            self.lists.borrow_mut().push_back(result);
        }

        fn serve_create(&self, result: Result<Idea, ApiError>) {
            self.created.borrow_mut().push_back(result);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl IdeaApi for FakeApi {
        async fn fetch_ideas(&self) -> Result<Vec<Idea>, ApiError> {
            self.calls.borrow_mut().push(Call::Fetch);
            self.lists
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Request("no scripted list".into())))
        }

        async fn create_idea(&self, content: &str) -> Result<Idea, ApiError> {
            self.calls.borrow_mut().push(Call::Create(content.to_owned()));
            self.created
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Request("no scripted idea".into())))
        }
    }

    fn idea(id: i64, content: &str) -> Idea {
        Idea {
            id: IdeaId::from(id),
            content: content.into(),
            created_at: CreatedAt::new("2024-03-01T09:30:00"),
        }
    }

    fn setup() -> (LocalPool, FakeApi, Controller<FakeApi, futures::executor::LocalSpawner>) {
        let pool = LocalPool::new();
        let api = FakeApi::default();
        let controller = Controller::new(api.clone(), pool.spawner());
        (pool, api, controller)
    }

    fn settle(
        pool: &mut LocalPool,
        controller: &mut Controller<FakeApi, futures::executor::LocalSpawner>,
    ) -> usize {
        pool.run_until_stalled();
        controller.poll()
    }

    #[test]
    fn mount_fetches_once() {
        let (mut pool, api, mut controller) = setup();
        api.serve_list(Ok(vec![idea(1, "a")]));

        controller.mount();
        assert!(controller.board().loading());
        controller.mount();

        assert_eq!(settle(&mut pool, &mut controller), 1);
        assert_eq!(api.calls(), vec![Call::Fetch]);
        assert_eq!(controller.board().ideas(), &[idea(1, "a")]);
        assert!(!controller.board().loading());
    }

    #[test]
    fn submit_sends_one_trimmed_create() {
        let (mut pool, api, mut controller) = setup();
        api.serve_create(Ok(idea(5, "Buy milk")));

        controller.draft_mut().push_str("   Buy milk  ");
        controller.submit().unwrap();
        settle(&mut pool, &mut controller);

        assert_eq!(api.calls(), vec![Call::Create("Buy milk".into())]);
    }

    #[test]
    fn blank_submit_makes_no_calls() {
        let (mut pool, api, mut controller) = setup();

        controller.draft_mut().push_str(" \t ");
        assert_eq!(controller.submit(), Err(BoardError::Validation));
        settle(&mut pool, &mut controller);

        assert!(api.calls().is_empty());
        assert_eq!(
            controller.board().error_message(),
            Some("Please enter an idea")
        );
    }

    #[test]
    fn valid_submit_after_validation_error_clears_it_while_pending() {
        let (mut pool, api, mut controller) = setup();
        api.serve_create(Ok(idea(1, "Buy milk")));

        controller.submit().unwrap_err();
        assert_eq!(controller.board().error(), Some(&BoardError::Validation));

        controller.draft_mut().push_str("Buy milk");
        controller.submit().unwrap();
        assert_eq!(controller.board().error(), None);
        assert!(controller.board().is_pending(Operation::Create));

        settle(&mut pool, &mut controller);
        assert_eq!(controller.board().error(), None);
        assert_eq!(api.calls(), vec![Call::Create("Buy milk".into())]);
    }

    #[test]
    fn empty_board_then_first_idea() {
        let (mut pool, api, mut controller) = setup();
        api.serve_list(Ok(vec![]));
        api.serve_create(Ok(idea(1, "Buy milk")));

        controller.mount();
        settle(&mut pool, &mut controller);
        assert!(controller.board().ideas().is_empty());

        controller.draft_mut().push_str("Buy milk");
        controller.submit().unwrap();
        settle(&mut pool, &mut controller);

        let board = controller.board();
        assert_eq!(board.ideas(), &[idea(1, "Buy milk")]);
        assert_eq!(board.draft(), "");
        assert_eq!(board.error(), None);
    }

    #[test]
    fn fetch_failure_leaves_usable_board() {
        let (mut pool, api, mut controller) = setup();
        api.serve_list(Err(ApiError::Request("network down".into())));

        controller.mount();
        settle(&mut pool, &mut controller);

        let board = controller.board();
        assert!(board.ideas().is_empty());
        assert!(!board.loading());
        assert_eq!(
            board.error(),
            Some(&BoardError::network(
                Operation::Fetch,
                ApiError::Request("network down".into())
            ))
        );
    }

    #[test]
    fn create_failure_keeps_prior_list() {
        let (mut pool, api, mut controller) = setup();
        api.serve_list(Ok(vec![idea(1, "a"), idea(2, "b")]));
        api.serve_create(Err(ApiError::ServerError {
            status: 500,
            body: String::new(),
        }));

        controller.mount();
        settle(&mut pool, &mut controller);
        controller.draft_mut().push_str("c");
        controller.submit().unwrap();
        settle(&mut pool, &mut controller);

        let board = controller.board();
        assert_eq!(board.ideas(), &[idea(1, "a"), idea(2, "b")]);
        assert_eq!(board.draft(), "c");
        assert!(!board.loading());
        assert_eq!(
            board.error_message(),
            Some("Failed to submit idea. Please try again.")
        );
    }

    #[test]
    fn notifies_when_operation_finishes() {
        let (mut pool, api, mut controller) = setup();
        api.serve_list(Ok(vec![]));
        let repaints = Rc::new(Cell::new(0));
        let counter = repaints.clone();
        controller.set_notify(move || counter.set(counter.get() + 1));

        controller.mount();
        assert_eq!(repaints.get(), 0);
        settle(&mut pool, &mut controller);

        assert_eq!(repaints.get(), 1);
    }

    #[test]
    fn poll_without_results_is_noop() {
        let (_pool, _api, mut controller) = setup();
        assert_eq!(controller.poll(), 0);
    }

    #[test]
    fn spawn_failure_becomes_network_error() {
        struct Refuse;

        impl LocalSpawn for Refuse {
            fn spawn_local_obj(
                &self,
                _future: futures::task::LocalFutureObj<'static, ()>,
            ) -> Result<(), futures::task::SpawnError> {
                Err(futures::task::SpawnError::shutdown())
            }
        }

        let api = FakeApi::default();
        let mut controller = Controller::new(api.clone(), Refuse);

        controller.mount();
        assert_eq!(controller.poll(), 1);

        let board = controller.board();
        assert!(!board.loading());
        assert_eq!(
            board.error_message(),
            Some("Failed to fetch ideas. Please try again.")
        );
        assert!(api.calls().is_empty());
    }
}
