use crate::error::Result;
use crate::types::{Repository, UserProfile};
use clap::ValueEnum;
use tracing::{debug, error};

/// The two-valued search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Users,
    Repos,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Users => "User",
            Category::Repos => "Repo",
        }
    }

    pub fn toggled(&self) -> Category {
        match self {
            Category::Users => Category::Repos,
            Category::Repos => Category::Users,
        }
    }
}

/// A complete search request. Replaced wholesale on every submit, never
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub category: Category,
    pub query: String,
}

impl SearchParams {
    pub fn new(category: Category, query: impl Into<String>) -> Self {
        SearchParams { category, query: query.into() }
    }
}

/// Payload of a completed fetch, tagged so the rendered shape can never
/// desynchronize from the category that produced it.
#[derive(Debug, Clone)]
pub enum FetchPayload {
    User(UserProfile),
    Repos(Vec<Repository>),
}

/// What the result pane shows.
#[derive(Debug, Clone)]
pub enum FetchState {
    /// A fetch is in flight (or the first one has not completed yet).
    Pending,
    /// The most recent fetch failed.
    Failed(String),
    User(UserProfile),
    Repos(Vec<Repository>),
}

impl From<FetchPayload> for FetchState {
    fn from(payload: FetchPayload) -> Self {
        match payload {
            FetchPayload::User(user) => FetchState::User(user),
            FetchPayload::Repos(repos) => FetchState::Repos(repos),
        }
    }
}

/// Everything that can happen to the application: translated key presses
/// and completed fetches.
#[derive(Debug)]
pub enum Message {
    InsertChar(char),
    Backspace,
    ToggleCategory,
    Submit,
    FetchDone { request_id: u64, result: Result<FetchPayload> },
    Quit,
}

/// Work the event loop must run on behalf of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { params: SearchParams, request_id: u64 },
}

pub struct App {
    /// Parameters of the most recently issued search.
    pub params: SearchParams,
    pub state: FetchState,
    /// The query field's text. Single source of truth: submission reads
    /// this buffer directly.
    pub input: String,
    /// Selector position, folded into `params` only on submit.
    pub selected_category: Category,
    /// Id of the latest issued fetch; responses carrying an older id are
    /// discarded (fetch-generation guard).
    latest_request_id: u64,
    pub should_quit: bool,
}

impl App {
    /// Creates the app and the initial fetch for the default parameters.
    pub fn new(params: SearchParams) -> (Self, Effect) {
        let app = App {
            input: params.query.clone(),
            selected_category: params.category,
            params,
            state: FetchState::Pending,
            latest_request_id: 1,
            should_quit: false,
        };
        let effect = Effect::Fetch { params: app.params.clone(), request_id: 1 };
        (app, effect)
    }

    /// Whether the action control accepts a submit.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::InsertChar(c) => {
                self.input.push(c);
                None
            }
            Message::Backspace => {
                self.input.pop();
                None
            }
            Message::ToggleCategory => {
                self.selected_category = self.selected_category.toggled();
                None
            }
            Message::Submit => self.submit(),
            Message::FetchDone { request_id, result } => {
                self.apply_fetch(request_id, result);
                None
            }
            Message::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Issues a new search from the current panel values. No-op while the
    /// input is empty (the control is disabled).
    fn submit(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }

        self.params = SearchParams::new(self.selected_category, self.input.clone());
        self.state = FetchState::Pending;
        self.latest_request_id += 1;

        Some(Effect::Fetch {
            params: self.params.clone(),
            request_id: self.latest_request_id,
        })
    }

    /// Applies a completed fetch, dropping responses from superseded
    /// requests so a slow fetch can never overwrite a newer one.
    fn apply_fetch(&mut self, request_id: u64, result: Result<FetchPayload>) {
        if request_id != self.latest_request_id {
            debug!(request_id, latest = self.latest_request_id, "discarding stale fetch result");
            return;
        }

        match result {
            Ok(payload) => {
                self.state = payload.into();
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.state = FetchState::Failed(e.to_string());
            }
        }
    }
}
