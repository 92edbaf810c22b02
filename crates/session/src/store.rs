use crate::error::{Result, SessionError};
use crate::session::{ChatTurn, Role, Session, SessionId};
use carmatch_catalog::DimensionVector;
use carmatch_engine::{FilterHints, MatchEngine, MatchResult};
use chrono::Utc;
use getrandom::getrandom;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Owns every live session and mediates re-scoring.
///
/// The session map sits behind an `RwLock`; each session lives in its own
/// `Arc` slot behind a `Mutex`. Operations clone the slot handle out of the
/// map and release the map lock before locking the slot, so long re-scores on
/// one session never block the others. The per-session mutex is the
/// serialization boundary the ranking consistency guarantee relies on.
pub struct SessionStore {
    engine: Arc<MatchEngine>,
    sessions: RwLock<HashMap<SessionId, Arc<SessionSlot>>>,
    fallback_counter: AtomicU64,
}

struct SessionSlot {
    state: Mutex<Session>,
}

fn random_id_best_effort() -> Option<String> {
    let mut bytes = [0u8; 16];
    getrandom(&mut bytes).ok()?;
    Some(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

impl SessionStore {
    pub fn new(engine: Arc<MatchEngine>) -> Self {
        Self {
            engine,
            sessions: RwLock::new(HashMap::new()),
            fallback_counter: AtomicU64::new(1),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Create a session for a completed questionnaire. Called exactly once
    /// per questionnaire; the returned id is the handle for every later
    /// operation.
    pub fn create(&self, profile: DimensionVector) -> SessionId {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let id = loop {
            let candidate = SessionId::new(self.allocate_raw_id());
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        let session = Session::new(id.clone(), profile);
        sessions.insert(
            id.clone(),
            Arc::new(SessionSlot {
                state: Mutex::new(session),
            }),
        );
        log::info!("Created session {id} ({} live)", sessions.len());
        id
    }

    fn allocate_raw_id(&self) -> String {
        random_id_best_effort().unwrap_or_else(|| {
            let seq = self.fallback_counter.fetch_add(1, Ordering::Relaxed);
            format!("local-{seq:016x}")
        })
    }

    fn slot(&self, id: &SessionId) -> Result<Arc<SessionSlot>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSession(id.clone()))
    }

    fn with_session<T>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let slot = self.slot(id)?;
        let mut session = slot.state.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut session))
    }

    /// Append a conversation turn
    pub fn record_turn(&self, id: &SessionId, role: Role, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.with_session(id, |session| {
            session.history.push(ChatTurn {
                role,
                text,
                timestamp: Utc::now(),
            });
            session.revision += 1;
        })
    }

    /// Convenience for the chat collaborator's replies
    pub fn record_assistant_turn(&self, id: &SessionId, text: impl Into<String>) -> Result<()> {
        self.record_turn(id, Role::Assistant, text)
    }

    /// Set or clear the budget. `None` means unconstrained.
    pub fn set_budget(&self, id: &SessionId, budget: Option<u64>) -> Result<()> {
        self.with_session(id, |session| {
            session.budget = budget;
            session.revision += 1;
        })
    }

    pub fn budget(&self, id: &SessionId) -> Result<Option<u64>> {
        self.with_session(id, |session| session.budget)
    }

    pub fn history(&self, id: &SessionId) -> Result<Vec<ChatTurn>> {
        self.with_session(id, |session| session.history.clone())
    }

    /// The ranking from the most recent re-score; empty before the first
    pub fn current_results(&self, id: &SessionId) -> Result<Vec<MatchResult>> {
        self.with_session(id, |session| session.results.clone())
    }

    /// Full copy of the session at its current revision
    pub fn snapshot(&self, id: &SessionId) -> Result<Session> {
        self.with_session(id, |session| session.clone())
    }

    /// Re-rank the catalog for this session and replace its stored results.
    ///
    /// Idempotent given identical inputs: without an intervening state
    /// change, repeated calls store and return an identical ordering. The
    /// session lock is held across the whole engine call, so two concurrent
    /// re-scores on the same id cannot interleave their writes.
    pub fn rescore(&self, id: &SessionId, hints: Option<&FilterHints>) -> Result<Vec<MatchResult>> {
        let slot = self.slot(id)?;
        let mut session = slot.state.lock().unwrap_or_else(PoisonError::into_inner);

        let results = self
            .engine
            .rank(&session.profile, session.budget, hints)?;
        session.results = results.clone();
        session.revision += 1;

        log::debug!(
            "Rescored session {id}: {} result(s), revision {}",
            results.len(),
            session.revision
        );
        Ok(results)
    }

    /// One chat turn applied atomically: record the user's message, update
    /// the budget if the collaborator extracted one, and re-score, all under
    /// a single session lock, so a concurrent turn sees either none or all of
    /// it.
    pub fn apply_user_turn(
        &self,
        id: &SessionId,
        text: impl Into<String>,
        budget: Option<u64>,
        hints: Option<&FilterHints>,
    ) -> Result<Vec<MatchResult>> {
        let slot = self.slot(id)?;
        let mut session = slot.state.lock().unwrap_or_else(PoisonError::into_inner);

        session.history.push(ChatTurn {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
        });
        if let Some(budget) = budget {
            session.budget = Some(budget);
        }

        let results = self
            .engine
            .rank(&session.profile, session.budget, hints)?;
        session.results = results.clone();
        session.revision += 1;
        Ok(results)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
