//! Single-writer actor for SQLite.
//!
//! SQLite allows many concurrent readers but only one writer. Instead of
//! letting every repository compete for the write lock, all mutations are
//! funneled through one background task that owns a dedicated connection and
//! applies jobs serially, each inside an immediate transaction.

use std::any::Any;

use diesel::SqliteConnection;
use log::error;
use pawkeeper_core::errors::Result;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;

// A write job takes the actor's connection and returns a core Result. The
// return type is erased so one channel can carry jobs of any result type.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Cloneable handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection, inside a transaction, and
    /// returns its result.
    ///
    /// Panics only if the actor task has died, which means the process is
    /// already shutting down or the database is unusable.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("database writer actor has stopped");

        reply_rx
            .await
            .expect("database writer actor dropped the reply channel")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor returned an unexpected result type"))
            })
    }
}

/// Spawns the writer task and returns a handle to it.
///
/// The actor holds one connection from `pool` for its whole lifetime and
/// terminates when every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            // Immediate transactions take the write lock up front, so a job
            // never fails halfway through because a reader got there first.
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // The caller may have been cancelled; a dropped receiver is fine.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
