#![forbid(unsafe_code)]

use crate::command::UsageError;
use std::path::PathBuf;

pub(crate) const TASKS_FILE_ENV: &str = "TASKTRACK_FILE";
pub(crate) const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Pulls `--file PATH` out of the arguments and resolves the backing file:
/// flag first, then the environment, then `tasks.json` in the working
/// directory. Everything else passes through for command parsing.
pub(crate) fn split_tasks_file(args: &[String]) -> Result<(PathBuf, Vec<String>), UsageError> {
    let mut tasks_file: Option<PathBuf> = None;
    let mut rest = Vec::with_capacity(args.len());

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg.as_str() == "--file" {
            let Some(value) = args.next() else {
                return Err(UsageError::MissingFileValue);
            };
            tasks_file = Some(PathBuf::from(value));
            continue;
        }
        rest.push(arg.clone());
    }

    let tasks_file = tasks_file
        .or_else(|| env_var(TASKS_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE));

    Ok((tasks_file, rest))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn file_flag_is_removed_from_the_command_arguments() {
        let (file, rest) =
            split_tasks_file(&args(&["--file", "/tmp/t.json", "add", "x"])).expect("split");
        assert_eq!(file, PathBuf::from("/tmp/t.json"));
        assert_eq!(rest, args(&["add", "x"]));
    }

    #[test]
    fn file_flag_may_follow_the_command() {
        let (file, rest) =
            split_tasks_file(&args(&["list", "--file", "other.json"])).expect("split");
        assert_eq!(file, PathBuf::from("other.json"));
        assert_eq!(rest, args(&["list"]));
    }

    #[test]
    fn file_flag_without_a_value_is_a_usage_error() {
        assert_eq!(
            split_tasks_file(&args(&["add", "x", "--file"])),
            Err(UsageError::MissingFileValue)
        );
    }
}
