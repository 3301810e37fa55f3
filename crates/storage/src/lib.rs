#![forbid(unsafe_code)]

mod store;

pub use store::TaskStore;
pub use store::backend::{Backend, FileBackend, MemoryBackend};
pub use store::error::StoreError;
pub use store::task::Task;
