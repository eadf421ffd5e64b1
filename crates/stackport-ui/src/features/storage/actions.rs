//! Storage page actions.

/// State transitions of the storage page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageAction {
    /// The token text box changed.
    Input(String),
    /// The form was rejected before any request.
    Rejected(String),
    /// The driver configuration request was sent.
    Started,
    /// The request finished with the outcome text or the failure message.
    Finished(Result<String, String>),
}
