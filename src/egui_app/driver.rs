//! Command Driver
//!
//! Executes controller [`Command`]s as tokio tasks and hands their results
//! back as [`Action`]s. Each task sends exactly one envelope. Starting a new
//! recommendations fetch aborts the previous one; an envelope from a task
//! that was aborted after it had already sent is discarded on receipt.

use std::collections::HashSet;

use futures_util::future;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::egui_app::api::ApiClient;
use crate::egui_app::state::{Action, AppState, Command, FetchRequest, RecommendationSource};
use crate::shared::ClientError;

struct Envelope {
    task: u64,
    action: Action,
}

pub struct Driver {
    api: ApiClient,
    handle: Handle,
    _runtime: Option<Runtime>,
    tx: UnboundedSender<Envelope>,
    rx: UnboundedReceiver<Envelope>,
    next_task: u64,
    outstanding: HashSet<u64>,
    view_fetch: Option<(u64, JoinHandle<()>)>,
}

impl Driver {
    /// Driver with its own multi-threaded runtime, for the desktop front-end
    pub fn new(api: ApiClient) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("shop-io")
            .enable_all()
            .build()
            .map_err(ClientError::runtime)?;
        let handle = runtime.handle().clone();
        Ok(Self::build(api, handle, Some(runtime)))
    }

    /// Driver spawning onto the runtime it is created in
    pub fn on_current(api: ApiClient) -> Self {
        Self::build(api, Handle::current(), None)
    }

    fn build(api: ApiClient, handle: Handle, runtime: Option<Runtime>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            api,
            handle,
            _runtime: runtime,
            tx,
            rx,
            next_task: 0,
            outstanding: HashSet::new(),
            view_fetch: None,
        }
    }

    /// Number of tasks whose result has not been received yet
    pub fn pending(&self) -> usize {
        self.outstanding.len()
    }

    pub fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    fn spawn(&mut self, command: Command) {
        self.next_task += 1;
        let task = self.next_task;
        let api = self.api.clone();
        let tx = self.tx.clone();
        let is_view_fetch = matches!(command, Command::FetchRecommendations(_));
        debug!(task, command = command.name(), "spawning");

        let join = self.handle.spawn(async move {
            let action = run(&api, command).await;
            let _ = tx.send(Envelope { task, action });
        });
        self.outstanding.insert(task);

        if is_view_fetch {
            if let Some((previous, join)) = self.view_fetch.replace((task, join)) {
                if self.outstanding.remove(&previous) {
                    debug!(task = previous, "aborting superseded fetch");
                }
                join.abort();
            }
        }
    }

    fn accept(&mut self, envelope: Envelope) -> Option<Action> {
        if !self.outstanding.remove(&envelope.task) {
            trace!(task = envelope.task, "discarding result of aborted task");
            return None;
        }
        if matches!(&self.view_fetch, Some((task, _)) if *task == envelope.task) {
            self.view_fetch = None;
        }
        Some(envelope.action)
    }

    /// Results received so far, without waiting
    pub fn drain(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(envelope) = self.rx.try_recv() {
            actions.extend(self.accept(envelope));
        }
        actions
    }

    /// Feed every available result into `state`, executing follow-up commands.
    /// Returns the number of actions applied.
    pub fn pump(&mut self, state: &mut AppState) -> usize {
        let actions = self.drain();
        let count = actions.len();
        for action in actions {
            let commands = state.dispatch(action);
            self.execute(commands);
        }
        count
    }

    /// Dispatch `action`, then keep applying results until no task is left
    pub async fn settle(&mut self, state: &mut AppState, action: Action) {
        let commands = state.dispatch(action);
        self.execute(commands);
        self.run_until_idle(state).await;
    }

    pub async fn run_until_idle(&mut self, state: &mut AppState) {
        while !self.outstanding.is_empty() {
            let Some(envelope) = self.rx.recv().await else {
                break;
            };
            if let Some(action) = self.accept(envelope) {
                let commands = state.dispatch(action);
                self.execute(commands);
            }
        }
    }
}

/// Perform one command against the API
pub async fn run(api: &ApiClient, command: Command) -> Action {
    match command {
        Command::LoadStaticData => {
            let (demo_users, products) =
                future::join(api.list_demo_users(), api.list_products()).await;
            Action::StaticDataLoaded { demo_users, products }
        }
        Command::ValidateSession { token, seq } => Action::SessionChecked {
            seq,
            result: api.me(&token).await,
        },
        Command::Login(credentials) => Action::LoginFinished(api.login(&credentials).await),
        Command::Register(user) => Action::RegisterFinished(api.register(&user).await),
        Command::FetchRecommendations(request) => fetch_recommendations(api, request).await,
    }
}

async fn fetch_recommendations(api: &ApiClient, request: FetchRequest) -> Action {
    let FetchRequest { ticket, token } = request;
    let result = match ticket.source {
        RecommendationSource::Personal => match token {
            Some(token) => api.my_recommendations(&token).await,
            None => Err(ClientError::Unauthorized("Not authenticated".to_string())),
        },
        RecommendationSource::Demo(user_id) => api.demo_recommendations(user_id).await,
    };
    Action::RecommendationsFetched { ticket, result }
}
