#![forbid(unsafe_code)]

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tt_core::status::Status;
use tt_storage::{Task, TaskStore};

/// Prints tasks in stored order, one four-line block per task. Ids render as
/// loaded, so a document that predates the current save shows its old ids.
pub(crate) fn print_tasks(store: &TaskStore, filter: Option<Status>) {
    match filter {
        None => {
            for task in store.list() {
                print_task(task);
            }
        }
        Some(status) => {
            for task in store.list_by_status(status) {
                print_task(task);
            }
        }
    }
}

fn print_task(task: &Task) {
    println!("{}. {}", task.id, task.description);
    println!("created - {}", rfc3339(task.created_at));
    println!("updated - {}", rfc3339(task.updated_at));
    println!("status - {}", task.status.as_str());
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
