use serde::{Deserialize, Serialize};

use crate::store::Resource;

/// A short text attributed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub id: u64,
    pub owner_id: u64,
    pub value: String,
}

/// Fields required to create or replace a statement.
///
/// `UserId` is accepted for clients still using the older query key.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementFields {
    #[serde(rename = "ownerId", alias = "UserId")]
    pub owner_id: u64,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementPatch {
    #[serde(
        default,
        rename = "ownerId",
        alias = "UserId",
        deserialize_with = "super::non_empty"
    )]
    pub owner_id: Option<u64>,
    #[serde(default, deserialize_with = "super::non_empty")]
    pub value: Option<String>,
}

impl Resource for Statement {
    type Fields = StatementFields;
    type Patch = StatementPatch;

    const NAME: &'static str = "statements";
    const LABEL: &'static str = "Statement";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_fields(id: u64, fields: StatementFields) -> Self {
        Self {
            id,
            owner_id: fields.owner_id,
            value: fields.value,
        }
    }

    fn apply_patch(&mut self, patch: StatementPatch) {
        if let Some(owner_id) = patch.owner_id {
            tracing::info!(id = self.id, owner_id, "Updated statement owner");
            self.owner_id = owner_id;
        }
        if let Some(value) = patch.value {
            tracing::info!(id = self.id, %value, "Updated statement value");
            self.value = value;
        }
    }

    fn seed() -> Vec<Self> {
        let statement = |id, owner_id, value: &str| Statement {
            id,
            owner_id,
            value: value.to_string(),
        };
        vec![
            statement(1, 1, "This is a statement."),
            statement(2, 1, "This is a statement from the same user."),
            statement(3, 2, "This is a statement from a different user."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ResourceStore;

    #[test]
    fn test_legacy_owner_key_accepted() {
        let fields: StatementFields = serde_json::from_value(serde_json::json!({
            "UserId": 7,
            "value": "hi",
        }))
        .unwrap();
        assert_eq!(fields.owner_id, 7);
    }

    #[test]
    fn test_patch_value_keeps_owner() {
        let store = ResourceStore::<Statement>::seeded();
        let patched = store
            .patch(
                3,
                StatementPatch {
                    owner_id: None,
                    value: Some("edited".into()),
                },
            )
            .unwrap();
        assert_eq!(patched.owner_id, 2);
        assert_eq!(patched.value, "edited");
    }

    #[test]
    fn test_serialized_shape() {
        let statement = Statement::seed().remove(0);
        assert_eq!(
            serde_json::to_value(&statement).unwrap(),
            serde_json::json!({ "id": 1, "ownerId": 1, "value": "This is a statement." })
        );
    }
}
