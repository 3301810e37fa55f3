#![forbid(unsafe_code)]

use tt_core::status::Status;

/// One parsed invocation of the command surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Add { description: String },
    Update { id: usize, description: String },
    Delete { id: usize },
    MarkInProgress { id: usize },
    MarkDone { id: usize },
    List { filter: Option<Status> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum UsageError {
    MissingCommand,
    UnknownCommand(String),
    WrongArgCount(&'static str),
    InvalidId(String),
    UnknownFilter(String),
    MissingFileValue,
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCommand => write!(f, "missing command"),
            Self::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            Self::WrongArgCount(shape) => {
                write!(f, "wrong number of arguments, expected: {shape}")
            }
            Self::InvalidId(raw) => write!(f, "task id must be a positive integer, got: {raw}"),
            Self::UnknownFilter(label) => {
                write!(f, "list filter must be one of: todo|in-progress|done, got: {label}")
            }
            Self::MissingFileValue => write!(f, "--file needs a path"),
        }
    }
}

impl Command {
    pub(crate) fn parse(args: &[String]) -> Result<Self, UsageError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(UsageError::MissingCommand);
        };
        match name.as_str() {
            "add" => match rest {
                [description] => Ok(Self::Add {
                    description: description.clone(),
                }),
                _ => Err(UsageError::WrongArgCount("add TEXT")),
            },
            "update" => match rest {
                [id, description] => Ok(Self::Update {
                    id: parse_id(id)?,
                    description: description.clone(),
                }),
                _ => Err(UsageError::WrongArgCount("update ID TEXT")),
            },
            "delete" => match rest {
                [id] => Ok(Self::Delete { id: parse_id(id)? }),
                _ => Err(UsageError::WrongArgCount("delete ID")),
            },
            "mark-in-progress" => match rest {
                [id] => Ok(Self::MarkInProgress { id: parse_id(id)? }),
                _ => Err(UsageError::WrongArgCount("mark-in-progress ID")),
            },
            "mark-done" => match rest {
                [id] => Ok(Self::MarkDone { id: parse_id(id)? }),
                _ => Err(UsageError::WrongArgCount("mark-done ID")),
            },
            "list" => match rest {
                [] => Ok(Self::List { filter: None }),
                [label] => match Status::from_str(label) {
                    Some(status) => Ok(Self::List {
                        filter: Some(status),
                    }),
                    None => Err(UsageError::UnknownFilter(label.clone())),
                },
                _ => Err(UsageError::WrongArgCount("list [todo|in-progress|done]")),
            },
            _ => Err(UsageError::UnknownCommand(name.clone())),
        }
    }
}

// Ids are positions, so signs and garbage are usage mistakes; zero parses
// fine here and gets rejected by the store's range check instead.
fn parse_id(raw: &str) -> Result<usize, UsageError> {
    raw.parse::<usize>()
        .map_err(|_| UsageError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(
            Command::parse(&args(&["add", "buy milk"])),
            Ok(Command::Add {
                description: "buy milk".to_string()
            })
        );
        assert_eq!(
            Command::parse(&args(&["update", "2", "buy oat milk"])),
            Ok(Command::Update {
                id: 2,
                description: "buy oat milk".to_string()
            })
        );
        assert_eq!(
            Command::parse(&args(&["delete", "3"])),
            Ok(Command::Delete { id: 3 })
        );
        assert_eq!(
            Command::parse(&args(&["mark-in-progress", "1"])),
            Ok(Command::MarkInProgress { id: 1 })
        );
        assert_eq!(
            Command::parse(&args(&["mark-done", "1"])),
            Ok(Command::MarkDone { id: 1 })
        );
        assert_eq!(
            Command::parse(&args(&["list"])),
            Ok(Command::List { filter: None })
        );
        assert_eq!(
            Command::parse(&args(&["list", "done"])),
            Ok(Command::List {
                filter: Some(Status::Done)
            })
        );
    }

    #[test]
    fn rejects_missing_and_unknown_commands() {
        assert_eq!(Command::parse(&[]), Err(UsageError::MissingCommand));
        assert_eq!(
            Command::parse(&args(&["frobnicate"])),
            Err(UsageError::UnknownCommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_argument_counts() {
        assert_eq!(
            Command::parse(&args(&["add"])),
            Err(UsageError::WrongArgCount("add TEXT"))
        );
        assert_eq!(
            Command::parse(&args(&["add", "a", "b"])),
            Err(UsageError::WrongArgCount("add TEXT"))
        );
        assert_eq!(
            Command::parse(&args(&["update", "1"])),
            Err(UsageError::WrongArgCount("update ID TEXT"))
        );
        assert_eq!(
            Command::parse(&args(&["delete"])),
            Err(UsageError::WrongArgCount("delete ID"))
        );
        assert_eq!(
            Command::parse(&args(&["list", "done", "extra"])),
            Err(UsageError::WrongArgCount("list [todo|in-progress|done]"))
        );
    }

    #[test]
    fn rejects_unparseable_ids() {
        assert_eq!(
            Command::parse(&args(&["delete", "abc"])),
            Err(UsageError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["mark-done", "-1"])),
            Err(UsageError::InvalidId("-1".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["update", "1.5", "text"])),
            Err(UsageError::InvalidId("1.5".to_string()))
        );
    }

    #[test]
    fn zero_id_parses_and_is_left_to_the_range_check() {
        assert_eq!(
            Command::parse(&args(&["delete", "0"])),
            Ok(Command::Delete { id: 0 })
        );
    }

    #[test]
    fn rejects_unknown_list_filters() {
        assert_eq!(
            Command::parse(&args(&["list", "finished"])),
            Err(UsageError::UnknownFilter("finished".to_string()))
        );
        assert_eq!(
            Command::parse(&args(&["list", "Done"])),
            Err(UsageError::UnknownFilter("Done".to_string()))
        );
    }
}
