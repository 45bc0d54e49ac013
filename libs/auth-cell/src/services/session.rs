use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::Session;

/// The injected persistence seam for session state. The embedding
/// application decides where sessions actually live; the cells only
/// ever talk to this interface.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Session;
    async fn store(&self, session: Session);
    /// Logout is defined as clearing the store.
    async fn clear(&self);
}

/// Default store backed by process memory. Suitable for tests and for
/// embeddings that keep their own persistence outside the cells.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Session {
        self.inner.read().await.clone()
    }

    async fn store(&self, session: Session) {
        *self.inner.write().await = session;
    }

    async fn clear(&self) {
        debug!("Clearing session store");
        *self.inner.write().await = Session::default();
    }
}
