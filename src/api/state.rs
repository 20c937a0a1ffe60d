//! In-memory state for the reference task API.
//!
//! Tasks live only as long as the process. Ids are integers handed out in
//! increasing order starting at 1 and never reused.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{NewTask, Task, TaskId};

#[derive(Debug)]
struct StoreInner {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Shared task collection behind the HTTP handlers
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// All tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        self.read().tasks.clone()
    }

    /// Insert a task and assign the next id
    pub fn create(&self, body: NewTask) -> Task {
        let mut inner = self.write();
        let task = Task {
            id: TaskId::Int(inner.next_id),
            title: body.title,
            completed: body.completed,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// Overwrite title and completion of `id`.
    ///
    /// Returns the record as sent, with the path id. An unknown id changes
    /// nothing but still echoes the record back.
    pub fn update(&self, id: i64, body: NewTask) -> Task {
        let updated = Task {
            id: TaskId::Int(id),
            title: body.title,
            completed: body.completed,
        };
        let mut inner = self.write();
        if let Some(existing) = inner.tasks.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated.clone();
        }
        updated
    }

    /// Remove `id`; returns whether a task was removed
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.write();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != TaskId::Int(id));
        inner.tasks.len() != before
    }

    pub fn len(&self) -> usize {
        self.read().tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.create(NewTask::new("a"));
        let b = store.create(NewTask::new("b"));
        assert_eq!(a.id, TaskId::Int(1));
        assert_eq!(b.id, TaskId::Int(2));
        assert!(!a.completed);
        assert_eq!(store.list(), vec![a, b]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        store.create(NewTask::new("a"));
        let b = store.create(NewTask::new("b"));
        assert!(store.delete(2));
        let c = store.create(NewTask::new("c"));
        assert_ne!(c.id, b.id);
        assert_eq!(c.id, TaskId::Int(3));
    }

    #[test]
    fn test_update_existing_and_unknown() {
        let store = MemoryStore::new();
        store.create(NewTask::new("a"));

        let updated = store.update(
            1,
            NewTask {
                title: "a".to_string(),
                completed: true,
            },
        );
        assert!(updated.completed);
        assert!(store.list()[0].completed);

        let ghost = store.update(99, NewTask::new("ghost"));
        assert_eq!(ghost.id, TaskId::Int(99));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let store = MemoryStore::new();
        store.create(NewTask::new("a"));
        assert!(!store.delete(5));
        assert_eq!(store.len(), 1);
        assert!(store.delete(1));
        assert!(store.is_empty());
    }
}
