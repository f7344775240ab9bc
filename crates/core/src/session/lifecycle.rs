//! Session lifecycle
//!
//! ```text
//! Created -> Gated -> Scanning -> Ready -> TornDown
//!    \________________________________________/^
//!              (gate failure)
//! ```
//!
//! Every document seen by a ready session moves through `Matching` to
//! `Idle` exactly once. Injection runs two turns of the task queue after the
//! document is seen and is skipped if the session was torn down meanwhile.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use super::SessionContext;
use crate::{
    error::GateFailure,
    registry::{Registry, RegistryLease, SessionKey},
    types::{DocumentContext, DocumentId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Gated,
    Scanning,
    Ready,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPhase {
    /// Seen, injection still deferred
    Matching,
    /// Injection done
    Idle,
}

/// State shared with deferred injection tasks
#[derive(Debug, Default)]
struct Liveness {
    alive: Cell<bool>,
    watching: Cell<bool>,
    documents: RefCell<HashMap<DocumentId, DocumentPhase>>,
}

/// Loader state for one top-level host window and its auxiliary documents
pub struct Session {
    key: SessionKey,
    document: DocumentContext,
    context: SessionContext,
    state: SessionState,
    lease: Option<RegistryLease>,
    shared: Rc<Liveness>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("document", &self.document)
            .field("state", &self.state)
            .field("shared", &self.shared)
            .finish()
    }
}

impl Session {
    /// Open a session for the window showing `document`
    ///
    /// On a gate failure nothing is scanned and no watcher is installed.
    pub fn open(
        key: SessionKey,
        document: DocumentContext,
        context: SessionContext,
    ) -> Result<Self, GateFailure> {
        let mut session = Self {
            key,
            document,
            context,
            state: SessionState::Created,
            lease: None,
            shared: Rc::new(Liveness::default()),
        };

        if let Err(failure) = session.check_gate() {
            tracing::debug!("Session '{}' gated: {}", session.key, failure);
            session.state = SessionState::TornDown;
            return Err(failure);
        }
        session.transition(SessionState::Gated);

        session.transition(SessionState::Scanning);
        session.lease = Some(session.context.pool.acquire(&session.key));
        session.shared.alive.set(true);

        session.transition(SessionState::Ready);
        session.shared.watching.set(true);
        session.schedule(session.document.clone());

        Ok(session)
    }

    fn check_gate(&self) -> Result<(), GateFailure> {
        if let Some(required) = &self.context.min_host_version {
            if !self.context.host.host_version_satisfies(required) {
                return Err(GateFailure::HostVersion {
                    required: required.clone(),
                });
            }
        }

        if self.context.block_policy.is_blocked(&self.document.url) {
            return Err(GateFailure::Blocked {
                url: self.document.url.clone(),
            });
        }

        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!("Session '{}': {:?} -> {:?}", self.key, self.state, next);
        self.state = next;
    }

    /// Watcher entry point for an auxiliary document appearing in the window
    ///
    /// Returns whether an injection was scheduled.
    pub fn observe_document(&self, document: DocumentContext) -> bool {
        if self.context.block_policy.is_blocked(&document.url) {
            tracing::debug!("Ignoring block-listed document {}", document.url);
            return false;
        }
        self.schedule(document)
    }

    fn schedule(&self, document: DocumentContext) -> bool {
        if !self.shared.watching.get() {
            return false;
        }
        let Some(lease) = &self.lease else {
            return false;
        };

        {
            let mut documents = self.shared.documents.borrow_mut();
            if documents.contains_key(&document.id) {
                tracing::debug!("{} already handled, not injecting twice", document.id);
                return false;
            }
            documents.insert(document.id, DocumentPhase::Matching);
        }

        let shared = Rc::clone(&self.shared);
        let registry = Arc::clone(lease.registry());
        let host = Rc::clone(&self.context.host);
        let loader = Rc::clone(&self.context.loader);

        // First turn lets the session finish starting up, the second lets
        // the document finish its own load sequence
        self.context.queue.defer(move |queue| {
            if !shared.alive.get() {
                tracing::debug!("Session gone, dropping injection for {}", document.id);
                return;
            }
            queue.defer(move |_| {
                if !shared.alive.get() {
                    tracing::debug!("Session gone, dropping injection for {}", document.id);
                    return;
                }
                let summary = loader.apply(host.as_ref(), &registry, &document);
                tracing::debug!(
                    "Injected into {} ({}): {} executed, {} overlaid",
                    document.id,
                    document.url,
                    summary.executed,
                    summary.overlaid
                );
                shared
                    .documents
                    .borrow_mut()
                    .insert(document.id, DocumentPhase::Idle);
            });
        });

        true
    }

    /// Detach the watcher and release the registry; idempotent
    pub fn teardown(&mut self) {
        if self.state == SessionState::TornDown {
            return;
        }
        self.shared.alive.set(false);
        self.shared.watching.set(false);
        if let Some(lease) = self.lease.take() {
            self.context.pool.release(lease);
        }
        self.transition(SessionState::TornDown);
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn document(&self) -> &DocumentContext {
        &self.document
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_watching(&self) -> bool {
        self.shared.watching.get()
    }

    pub fn registry(&self) -> Option<&Arc<Registry>> {
        self.lease.as_ref().map(RegistryLease::registry)
    }

    /// Whether this session's acquire performed the scan
    pub fn owns_registry(&self) -> bool {
        self.lease.as_ref().is_some_and(RegistryLease::is_owner)
    }

    pub fn document_phase(&self, id: DocumentId) -> Option<DocumentPhase> {
        self.shared.documents.borrow().get(&id).copied()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}
