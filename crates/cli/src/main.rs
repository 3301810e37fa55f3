#![forbid(unsafe_code)]

mod command;
mod config;
mod render;

use command::{Command, UsageError};
use tt_core::status::Status;
use tt_storage::{FileBackend, StoreError, TaskStore};

fn usage() -> &'static str {
    "tasktrack — file-backed task tracker (one JSON document)\n\n\
USAGE:\n\
  tasktrack [--file PATH] COMMAND [ARGS]\n\
\n\
COMMANDS:\n\
  add TEXT                      append a task, starting at todo\n\
  update ID TEXT                replace a task's description\n\
  delete ID                     remove a task (ids close up on save)\n\
  mark-in-progress ID           set a task's status to in-progress\n\
  mark-done ID                  set a task's status to done\n\
  list [todo|in-progress|done]  print tasks in stored order, optionally one status\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
NOTES:\n\
  - Ids are 1-based positions; every save renumbers them to stay dense.\n\
  - The document lives in tasks.json; override with --file or TASKTRACK_FILE.\n"
}

fn version_line() -> String {
    format!("tasktrack {}", env!("CARGO_PKG_VERSION"))
}

// Rejections and usage mistakes report on stdout and exit 0; only a storage
// failure (unreadable, unwritable or unparseable document) exits nonzero.
enum Outcome {
    Completed,
    Usage(UsageError),
    Rejected(StoreError),
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return;
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return;
    }

    match run(&args) {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Usage(err)) => {
            println!("{err}");
            print!("{}", usage());
        }
        Ok(Outcome::Rejected(err)) => {
            println!("{err}");
        }
        Err(err) => {
            eprintln!("tasktrack: {err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<Outcome, StoreError> {
    let (tasks_file, rest) = match config::split_tasks_file(args) {
        Ok(split) => split,
        Err(err) => return Ok(Outcome::Usage(err)),
    };
    let command = match Command::parse(&rest) {
        Ok(command) => command,
        Err(err) => return Ok(Outcome::Usage(err)),
    };

    let mut store = TaskStore::open(Box::new(FileBackend::new(tasks_file)))?;

    let applied = match command {
        Command::Add { description } => {
            store.add(description);
            Ok(())
        }
        Command::Update { id, description } => store.update_description(id, description),
        Command::Delete { id } => store.delete(id).map(|_| ()),
        Command::MarkInProgress { id } => store.set_status(id, Status::InProgress),
        Command::MarkDone { id } => store.set_status(id, Status::Done),
        Command::List { filter } => {
            render::print_tasks(&store, filter);
            Ok(())
        }
    };

    match applied {
        Ok(()) => {}
        // Range rejections skip the save; the document keeps its pre-command ids.
        Err(err @ StoreError::IdOutOfRange { .. }) => return Ok(Outcome::Rejected(err)),
        Err(err) => return Err(err),
    }

    store.save()?;
    Ok(Outcome::Completed)
}
