/// Login form contents, retained across failed submissions.
#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    /// Username field contents.
    pub username: String,
    /// Password field contents.
    pub password: String,
    /// Inline error from the last rejected submission.
    pub error: Option<String>,
}
