//! Error list shown next to the seed phrase inputs

/// Error messages plus a revision counter
///
/// The revision is bumped on every failed submission so the input widget
/// re-runs its validation display even when the message text is unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorChannel {
    messages: Vec<String>,
    revision: u64,
}

impl ErrorChannel {
    /// Replace the list with a single message
    pub fn fail(&mut self, message: String) {
        self.messages = vec![message];
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
