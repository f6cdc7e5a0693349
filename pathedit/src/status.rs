//! Editor status messages.

/// Kind of a status entry, mapped to display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A single status entry.
#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub text: String,
    pub kind: StatusKind,
    pub dups: i32,
}

/// A bounded message log; the frontend shows the most recent entry.
pub struct StatusLog {
    entries: Vec<StatusEntry>,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a message. Consecutive identical messages fold into one entry
    /// with a repeat count.
    pub fn push(&mut self, text: impl Into<String>, kind: StatusKind) {
        let text = text.into();
        if let Some(last) = self.entries.last_mut() {
            if last.text == text && last.kind == kind {
                last.dups += 1;
                return;
            }
        }
        self.entries.push(StatusEntry {
            text,
            kind,
            dups: 0,
        });
        if self.entries.len() > 1000 {
            self.entries.drain(0..100);
        }
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&StatusEntry> {
        self.entries.last()
    }

    /// The most recent entry formatted for display, with a repeat marker.
    pub fn last_line(&self) -> Option<(String, StatusKind)> {
        self.entries.last().map(|e| {
            let text = if e.dups > 0 {
                format!("{} ({}×)", e.text, e.dups + 1)
            } else {
                e.text.clone()
            };
            (text, e.kind)
        })
    }
}
