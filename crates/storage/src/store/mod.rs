#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod task;

use backend::Backend;
use error::StoreError;
use task::Task;
use time::OffsetDateTime;
use tt_core::status::Status;

/// Whole-document task collection bound to one storage backend.
///
/// `open` loads every task up front, mutators edit the in-memory list, and
/// `save` renumbers ids to 1..N before rewriting the document. Ids are
/// positions, not durable keys: any size-changing operation shifts them on
/// the next save.
#[derive(Debug)]
pub struct TaskStore {
    backend: Box<dyn Backend>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loads the collection. A missing or blank document yields an empty
    /// store; a malformed one is a parse error, never silently dropped.
    pub fn open(backend: Box<dyn Backend>) -> Result<Self, StoreError> {
        let tasks = match backend.read()? {
            None => Vec::new(),
            Some(document) if document.trim().is_empty() => Vec::new(),
            Some(document) => serde_json::from_str(&document)?,
        };
        Ok(Self { backend, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task with status `todo` and both timestamps set to the same
    /// instant. The id written here is provisional (the pre-append length);
    /// `save` renumbers the whole list.
    pub fn add(&mut self, description: impl Into<String>) -> &Task {
        let id = self.tasks.len();
        self.tasks
            .push(Task::new(id, description.into(), OffsetDateTime::now_utc()));
        &self.tasks[id]
    }

    /// Replaces the description of the task at `id` and touches `updated_at`.
    pub fn update_description(
        &mut self,
        id: usize,
        description: impl Into<String>,
    ) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.description = description.into();
        task.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }

    /// Removes the task at `id`, shifting later tasks down one position.
    pub fn delete(&mut self, id: usize) -> Result<Task, StoreError> {
        let index = self.index_of(id)?;
        Ok(self.tasks.remove(index))
    }

    /// Writes `status` over whatever the task at `id` held and touches
    /// `updated_at`. There is no transition guard.
    pub fn set_status(&mut self, id: usize, status: Status) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.status = status;
        task.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }

    pub fn list(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn list_by_status(&self, status: Status) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status == status)
    }

    /// Renumbers ids to 1..N in current order. Runs on every save, which is
    /// what keeps the stored document dense after deletions.
    pub fn reindex(&mut self) {
        for (position, task) in self.tasks.iter_mut().enumerate() {
            task.id = position + 1;
        }
    }

    /// Reindexes, then rewrites the whole document through the backend.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.reindex();
        let mut document = serde_json::to_string_pretty(&self.tasks)?;
        document.push('\n');
        self.backend.write(&document)
    }

    /// Hands the backend back, e.g. to reopen the same document in tests.
    pub fn into_backend(self) -> Box<dyn Backend> {
        self.backend
    }

    // Ids are 1-based; anything outside [1, len] is rejected with the
    // collection size so callers can report it.
    fn index_of(&self, id: usize) -> Result<usize, StoreError> {
        if id == 0 || id > self.tasks.len() {
            return Err(StoreError::IdOutOfRange {
                id,
                len: self.tasks.len(),
            });
        }
        Ok(id - 1)
    }
}
