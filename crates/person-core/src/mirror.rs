//! Local mirror of the remote person collection.
//!
//! Every operation is spawned onto the Tokio runtime and returns at once with
//! a [`PendingOperation`]. When the remote call succeeds the local list is
//! changed and the caller's notification function is invoked, both while the
//! list lock is held, so completions that race each other are applied one at
//! a time and none is lost. When the call fails the list is left alone, the
//! notification function is dropped without being called, and the error is
//! logged and returned through the handle.

use crate::config::MirrorConfig;
use crate::models::{Person, PersonSortingOptions};
use crate::network::{HttpPersonApi, PersonApi};
use crate::{MirrorError, Result};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Which mirror operation a [`PendingOperation`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
    ListAll,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Create => "create",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
            OperationKind::ListAll => "list",
        };
        f.write_str(name)
    }
}

/// Handle to an in-flight mirror operation.
///
/// Dropping the handle does not cancel anything; the operation still runs to
/// completion in the background.
#[derive(Debug)]
pub struct PendingOperation {
    kind: OperationKind,
    handle: JoinHandle<Result<()>>,
}

impl PendingOperation {
    /// The operation this handle tracks.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Whether the operation has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the operation and report how it ended.
    ///
    /// `Ok(())` means the local list was updated and the notification
    /// function has already run.
    pub async fn wait(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(MirrorError::Runtime {
                message: format!("{} task did not complete: {}", self.kind, e),
            }),
        }
    }
}

/// Client-side mirror of the remote person collection.
pub struct PersonMirror {
    api: Arc<dyn PersonApi>,
    persons: Arc<Mutex<Vec<Person>>>,
    runtime: Handle,
}

impl PersonMirror {
    /// Create a mirror on the current Tokio runtime.
    ///
    /// Fails when called outside a runtime.
    pub fn new(api: Arc<dyn PersonApi>) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| MirrorError::Runtime {
            message: format!("PersonMirror needs a Tokio runtime: {}", e),
        })?;
        Ok(Self::with_runtime(api, runtime))
    }

    /// Create a mirror whose operations run on the given runtime.
    pub fn with_runtime(api: Arc<dyn PersonApi>, runtime: Handle) -> Self {
        Self {
            api,
            persons: Arc::new(Mutex::new(Vec::new())),
            runtime,
        }
    }

    /// Create a mirror talking HTTP to the endpoint in `config`.
    pub fn from_config(config: &MirrorConfig) -> Result<Self> {
        info!("Mirroring persons from {}", config.base_url);
        let api = HttpPersonApi::new(config)?;
        Self::new(Arc::new(api))
    }

    /// Snapshot of the local list.
    pub async fn persons(&self) -> Vec<Person> {
        self.persons.lock().await.clone()
    }

    /// Create `person` remotely and append the stored copy.
    pub fn create<F>(&self, person: Person, notify: F) -> PendingOperation
    where
        F: FnOnce(&[Person]) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let persons = Arc::clone(&self.persons);

        self.spawn(OperationKind::Create, async move {
            let created = api.create(&person).await?;

            let mut persons = persons.lock().await;
            info!("Created person {:?} ({})", created.id, created.name);
            persons.push(created);
            notify(persons.as_slice());
            Ok(())
        })
    }

    /// Update `person` remotely and replace the local entry with the same id.
    pub fn update<F>(&self, person: Person, notify: F) -> PendingOperation
    where
        F: FnOnce(&[Person]) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let persons = Arc::clone(&self.persons);

        self.spawn(OperationKind::Update, async move {
            let updated = api.update(&person).await?;

            let mut persons = persons.lock().await;
            let mut replaced = 0usize;
            for slot in persons.iter_mut().filter(|p| p.same_identity(&updated)) {
                *slot = updated.clone();
                replaced += 1;
            }
            if replaced == 0 {
                debug!("Updated person {:?} is not in the local list", updated.id);
            }
            info!("Updated person {:?} ({})", updated.id, updated.name);
            notify(persons.as_slice());
            Ok(())
        })
    }

    /// Delete `person` remotely and remove the first equal local entry.
    pub fn delete<F>(&self, person: Person, notify: F) -> PendingOperation
    where
        F: FnOnce(&[Person]) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let persons = Arc::clone(&self.persons);

        self.spawn(OperationKind::Delete, async move {
            api.delete(&person).await?;

            let mut persons = persons.lock().await;
            match persons.iter().position(|p| *p == person) {
                Some(index) => {
                    persons.remove(index);
                }
                None => debug!("Deleted person {:?} is not in the local list", person.id),
            }
            info!("Deleted person {:?}", person.id);
            notify(persons.as_slice());
            Ok(())
        })
    }

    /// Fetch the whole collection and replace the local list with it.
    pub fn list_all<F>(&self, sorting_options: PersonSortingOptions, notify: F) -> PendingOperation
    where
        F: FnOnce(&[Person]) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let persons = Arc::clone(&self.persons);

        self.spawn(OperationKind::ListAll, async move {
            let fetched = api.list(&sorting_options).await?;

            let mut persons = persons.lock().await;
            persons.clear();
            persons.extend(fetched);
            info!("Refreshed local list with {} persons", persons.len());
            notify(persons.as_slice());
            Ok(())
        })
    }

    fn spawn<Fut>(&self, kind: OperationKind, operation: Fut) -> PendingOperation
    where
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        debug!("Starting person {}", kind);
        let handle = self.runtime.spawn(async move {
            let result = operation.await;
            if let Err(e) = &result {
                warn!("Person {} failed, local list unchanged: {}", kind, e);
            }
            result
        });
        PendingOperation { kind, handle }
    }
}
