//! User domain model.

/// Authenticated caller, as attached to a request by the auth guard.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Whether the user may use the admin write path.
    pub is_admin: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_admin: entity.is_admin,
        }
    }
}
