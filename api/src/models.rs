use serde::{Deserialize, Serialize};
use shared::validation::{FieldSpec, FieldValue, RequestSchema, Rule, Validatable};

/// Incoming body for user creation. Fields are optional at decode time so
/// absent keys reach the validator as `Absent` instead of failing the parse;
/// presence is the validator's job, not serde's.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

pub static CREATE_USER_SCHEMA: RequestSchema = RequestSchema {
    name: "CreateUserRequest",
    fields: &[
        FieldSpec {
            ident: "name",
            wire: None,
            rules: &[Rule::Required, Rule::Min(2), Rule::Max(100)],
        },
        FieldSpec {
            ident: "email",
            wire: None,
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSpec {
            ident: "age",
            wire: None,
            rules: &[Rule::Required],
        },
    ],
};

impl Validatable for CreateUserRequest {
    fn schema() -> &'static RequestSchema {
        &CREATE_USER_SCHEMA
    }

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::from_opt_str(&self.name),
            FieldValue::from_opt_str(&self.email),
            FieldValue::from_opt_int(self.age),
        ]
    }
}

/// Created user as echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub age: i64,
}
