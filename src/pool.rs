use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crossbeam_deque::{Injector, Steal};
use serde_json::Value;

use crate::dispatch::query::{Id, IntoId};
use crate::network::Connection;
use crate::records::Record;

/// Build records from json objects on a bounded pool of worker threads
///
/// Every object is identified by its `id` key and the built record is stored
/// under that id, so completion order doesn't matter. Failed builds
/// are logged and left out of the result
#[tracing::instrument(level = "debug", skip(objects, connection), fields(objects = objects.len()))]
pub fn build_concurrently<R: Record>(objects: Vec<Value>, connection: &Connection, workers: usize) -> HashMap<Id, R> {
    let queue = Injector::new();

    for object in objects {
        match object.get("id").map(IntoId::into_id) {
            Some(Ok(id)) => queue.push((id, object)),

            _ => tracing::warn!(?object, "Object has no usable id, skipping it")
        }
    }

    let workers = workers.clamp(1, queue.len().max(1));

    let records = Mutex::new(HashMap::new());

    tracing::debug!(workers, tasks = queue.len(), "Spawning worker threads");

    std::thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                loop {
                    match queue.steal() {
                        Steal::Success((id, object)) => match R::from_json(object, connection) {
                            Ok(record) => {
                                records.lock()
                                    .unwrap_or_else(PoisonError::into_inner)
                                    .insert(id, record);
                            }

                            Err(err) => tracing::warn!(%id, %err, "Failed to build record, skipping it")
                        }

                        Steal::Retry => continue,
                        Steal::Empty => break
                    }
                }
            });
        }
    });

    records.into_inner().unwrap_or_else(PoisonError::into_inner)
}
