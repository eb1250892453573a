use serde::Deserialize;

use crate::users::repo_types::User;

/// Request body for `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserPayload {
    /// Builds the public user for a stored id. The password stays behind.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_to_user_drops_password() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@x.com","password":"secret"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(payload.into_user(1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ana", "email": "ana@x.com"})
        );
    }

    #[test]
    fn payload_requires_all_fields() {
        let res = serde_json::from_str::<UserPayload>(r#"{"name":"Ana","email":"ana@x.com"}"#);
        assert!(res.is_err());
    }
}
