//! Submitted-command history with arrow-key recall.

use crate::utils::BoundedBuffer;

/// Where the input line stands relative to history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Recall {
    /// Not recalling; the input holds freely typed text.
    #[default]
    Live,
    /// Showing the entry this many steps back from the newest (0 = newest).
    Recalling(usize),
}

/// Bounded command history plus the recall cursor.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: BoundedBuffer<String>,
    recall: Recall,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedBuffer::new(capacity),
            recall: Recall::Live,
        }
    }

    /// Record a submitted line and return to [`Recall::Live`].
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.recall = Recall::Live;
    }

    pub fn recall(&self) -> Recall {
        self.recall
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Step to an older entry.
    ///
    /// Returns the line to show, or `None` when history is empty or the
    /// oldest entry is already showing.
    pub fn previous(&mut self) -> Option<String> {
        let next_index = match self.recall {
            Recall::Live => 0,
            Recall::Recalling(i) => i + 1,
        };
        let line = self.entries.get_from_back(next_index)?.clone();
        self.recall = Recall::Recalling(next_index);
        Some(line)
    }

    /// Step to a newer entry.
    ///
    /// Leaving the newest entry returns to [`Recall::Live`] with an empty
    /// line. Returns `None` when not recalling.
    pub fn next(&mut self) -> Option<String> {
        match self.recall {
            Recall::Live => None,
            Recall::Recalling(0) => {
                self.recall = Recall::Live;
                Some(String::new())
            }
            Recall::Recalling(i) => {
                let line = self.entries.get_from_back(i - 1)?.clone();
                self.recall = Recall::Recalling(i - 1);
                Some(line)
            }
        }
    }
}
