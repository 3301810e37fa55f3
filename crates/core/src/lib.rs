#![forbid(unsafe_code)]

pub mod status {
    /// Lifecycle label of a task. The usual flow is todo, then in-progress,
    /// then done, but no transition is enforced: any status may overwrite
    /// any other.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Status {
        Todo,
        InProgress,
        Done,
    }

    impl Status {
        pub fn as_str(self) -> &'static str {
            match self {
                Status::Todo => "todo",
                Status::InProgress => "in-progress",
                Status::Done => "done",
            }
        }

        pub fn from_str(value: &str) -> Option<Self> {
            match value {
                "todo" => Some(Status::Todo),
                "in-progress" => Some(Status::InProgress),
                "done" => Some(Status::Done),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::status::Status;

    #[test]
    fn status_labels_round_trip() {
        for status in [Status::Todo, Status::InProgress, Status::Done] {
            assert_eq!(
                Status::from_str(status.as_str()),
                Some(status),
                "label {} must parse back to its status",
                status.as_str()
            );
        }
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        assert_eq!(Status::from_str("doing"), None);
        assert_eq!(Status::from_str("TODO"), None);
        assert_eq!(Status::from_str("in progress"), None);
        assert_eq!(Status::from_str(""), None);
    }
}
