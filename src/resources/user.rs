use serde::{Deserialize, Serialize};

use crate::store::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub surname: String,
}

/// Fields required to create or replace a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub surname: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "super::non_empty")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::non_empty")]
    pub surname: Option<String>,
}

impl Resource for User {
    type Fields = UserFields;
    type Patch = UserPatch;

    const NAME: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            tracing::info!(id = self.id, %name, "Updated user name");
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            tracing::info!(id = self.id, %surname, "Updated user surname");
            self.surname = surname;
        }
    }

    fn seed() -> Vec<Self> {
        let user = |id, name: &str, surname: &str| User {
            id,
            name: name.to_string(),
            surname: surname.to_string(),
        };
        vec![
            user(1, "John", "Doe"),
            user(2, "Jane", "Doe"),
            user(3, "Jim", "Beam"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_from_query_ignores_empty_values() {
        let patch: UserPatch = serde_json::from_value(serde_json::json!({
            "name": "",
            "surname": "Roe",
        }))
        .unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.surname.as_deref(), Some("Roe"));
    }

    #[test]
    fn test_missing_field_rejected() {
        let res: Result<UserFields, _> =
            serde_json::from_value(serde_json::json!({ "name": "ana" }));
        assert!(res.is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let user = User::seed().remove(0);
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({ "id": 1, "name": "John", "surname": "Doe" })
        );
    }
}
