//! Transient acknowledgments, such as the "Task deleted" toast.

/// One acknowledgment. Every call to [`Notices::show`] yields a fresh `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Holds the acknowledgment currently on screen, if any.
///
/// Dismissals name the notice they were scheduled for, so a timer started for an older
/// notice cannot hide the one that replaced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    next_id: u64,
    current: Option<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replaces the current notice with a new one.
    pub fn show(&mut self, message: impl Into<String>) -> &Notice {
        let id = self.next_id;
        self.next_id += 1;
        self.current.insert(Notice {
            id,
            message: message.into(),
        })
    }

    /// Hides the notice with the given id. Ids of replaced notices are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}
