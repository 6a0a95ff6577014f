//! Authenticated user identity.

/// The signed-in user. Passed explicitly to anything that needs an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: i64,
    pub display_name: Option<String>,
}

impl UserSession {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            display_name: None,
        }
    }

    /// Name shown in the header; falls back to the numeric id.
    pub fn greeting_name(&self) -> String {
        match &self.display_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("user #{}", self.user_id),
        }
    }
}
