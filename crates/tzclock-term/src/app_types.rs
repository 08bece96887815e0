/// Internal message type for the main clock thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum AppMsg {
    /// A line typed at the prompt.
    Input(String),
    /// 1-second tick for refreshing the time and date.
    Tick,
    /// Stdin reached end of file or failed.
    InputClosed,
}

/// What the loop should do after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}
