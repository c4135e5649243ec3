//! View state of the board and its transitions.
//!
//! [`Board`] never talks to the network. Starting an operation returns a
//! [`Request`] for someone else to run; the result comes back as an
//! [`Outcome`] through [`Board::apply`]. Fetch and create each have their
//! own in-flight flag:
//!
//! ```text
//! Idle --begin_fetch/submit--> Loading --Ok--> Ready
//!                                      \--Err-> Failed (list untouched)
//! ```

use crate::error::{ApiError, BoardError, Operation};
use crate::model::Idea;

/// A network call the board wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchIdeas,
    /// `content` is already trimmed and non-empty.
    CreateIdea { content: String },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::FetchIdeas => Operation::Fetch,
            Request::CreateIdea { .. } => Operation::Create,
        }
    }
}

/// Result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched(Result<Vec<Idea>, ApiError>),
    Created(Result<Idea, ApiError>),
}

impl Outcome {
    /// Failed outcome for `request`, used when it could not even be started.
    pub fn failed(request: &Request, error: ApiError) -> Self {
        match request {
            Request::FetchIdeas => Outcome::Fetched(Err(error)),
            Request::CreateIdea { .. } => Outcome::Created(Err(error)),
        }
    }
}

/// The client's session-local view of the ideas.
#[derive(Debug, Clone, Default)]
pub struct Board {
    ideas: Vec<Idea>,
    draft: String,
    error: Option<BoardError>,
    fetching: bool,
    creating: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ideas in display order.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mutable draft, for binding to a text editor.
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// True while any network operation is outstanding.
    pub fn loading(&self) -> bool {
        self.fetching || self.creating
    }

    pub fn is_pending(&self, operation: Operation) -> bool {
        match operation {
            Operation::Fetch => self.fetching,
            Operation::Create => self.creating,
        }
    }

    pub fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }

    /// Message to show the user, if the last operation failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(BoardError::user_message)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading() && !self.draft.trim().is_empty()
    }

    /// Start loading the list.
    pub fn begin_fetch(&mut self) -> Request {
        self.error = None;
        self.fetching = true;
        Request::FetchIdeas
    }

    /// Validate the draft and start creating an idea from it.
    ///
    /// An empty draft (after trimming) records a validation error and
    /// returns it; no request is produced.
    pub fn submit(&mut self) -> Result<Request, BoardError> {
        let content = self.draft.trim();
        if content.is_empty() {
            self.error = Some(BoardError::Validation);
            return Err(BoardError::Validation);
        }

        let content = content.to_owned();
        self.error = None;
        self.creating = true;
        Ok(Request::CreateIdea { content })
    }

    /// Fold a finished operation into the state.
    ///
    /// The list is only touched on success, so a failure needs no rollback.
    pub fn apply(&mut self, outcome: Outcome) -> Result<(), BoardError> {
        match outcome {
            Outcome::Fetched(result) => {
                self.fetching = false;
                match result {
                    Ok(ideas) => {
                        self.ideas = ideas;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(BoardError::network(Operation::Fetch, e)),
                }
            }
            Outcome::Created(result) => {
                self.creating = false;
                match result {
                    Ok(idea) => {
                        self.ideas.insert(0, idea);
                        self.draft.clear();
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(BoardError::network(Operation::Create, e)),
                }
            }
        }
    }

    fn fail(&mut self, error: BoardError) -> Result<(), BoardError> {
        self.error = Some(error.clone());
        Err(error)
    }
}
