use crate::features::schemas::UserOut;

impl UserOut {
    /// The fixed user served by `/api/v1/users`.
    pub fn placeholder() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        }
    }
}
