//! Contact-submission flow: declarative validation, then a single insert.
//!
//! Every rule lives in one table so the rule set and its coverage stay
//! centralized. Validation runs before any network call; a failed rule means
//! the insert never happens. There is no idempotency key on submissions, so a
//! retry after an ambiguous network failure can create a duplicate row; the
//! back office deduplicates by phone when scheduling.

use async_trait::async_trait;
use chrono::Utc;
use models::contact_submission::{self, STATUS_NEW};
use models::APPLIANCE_TYPES;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{FieldError, ServiceError};

/// The six fields collected by the booking form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub appliance_type: String,
    pub message: String,
    pub location: String,
}

/// One validation rule: field name, predicate, user-facing message.
pub struct Rule {
    pub field: &'static str,
    pub check: fn(&ContactInput) -> bool,
    pub message: &'static str,
}

pub static RULES: [Rule; 6] = [
    Rule {
        field: "name",
        check: |i| i.name.trim().chars().count() >= 2,
        message: "Name must be at least 2 characters",
    },
    Rule {
        field: "email",
        check: |i| is_valid_email(&i.email),
        message: "Please enter a valid email",
    },
    Rule {
        field: "phone",
        check: |i| i.phone.trim().chars().count() >= 10,
        message: "Phone number must be at least 10 digits",
    },
    Rule {
        field: "appliance_type",
        check: |i| APPLIANCE_TYPES.contains(&i.appliance_type.as_str()),
        message: "Please select an appliance type",
    },
    Rule {
        field: "message",
        check: |i| i.message.trim().chars().count() >= 10,
        message: "Message must be at least 10 characters",
    },
    Rule {
        field: "location",
        check: |i| i.location.trim().chars().count() >= 5,
        message: "Please provide your location",
    },
];

/// Evaluate every rule; empty result means the input is acceptable.
pub fn validate(input: &ContactInput) -> Vec<FieldError> {
    RULES
        .iter()
        .filter(|r| !(r.check)(input))
        .map(|r| FieldError { field: r.field, message: r.message })
        .collect()
}

/// `local@domain` with a dotted, non-edge domain and no whitespace.
pub fn is_valid_email(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else { return false };
    if local.is_empty() || domain.len() < 3 || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Write side of the flow, behind a trait so tests can count insert calls.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert_submission(
        &self,
        input: &ContactInput,
    ) -> Result<contact_submission::Model, ServiceError>;
}

/// SeaORM-backed repository. Assigns id, created_at and the `new` status at
/// insert time; the caller never supplies identity.
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert_submission(
        &self,
        input: &ContactInput,
    ) -> Result<contact_submission::Model, ServiceError> {
        let am = contact_submission::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            email: Set(input.email.trim().to_string()),
            phone: Set(input.phone.trim().to_string()),
            appliance_type: Set(input.appliance_type.clone()),
            message: Set(input.message.trim().to_string()),
            location: Set(input.location.trim().to_string()),
            status: Set(STATUS_NEW.to_string()),
            created_at: Set(Utc::now().into()),
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        tracing::info!(id = %created.id, appliance = %created.appliance_type, "contact submission created");
        Ok(created)
    }
}

/// Validate, then issue exactly one insert. On validation failure the
/// repository is never touched and the caller keeps the entered values.
pub async fn submit(
    repo: &dyn ContactRepository,
    input: &ContactInput,
) -> Result<contact_submission::Model, ServiceError> {
    let errors = validate(input);
    if !errors.is_empty() {
        return Err(ServiceError::Invalid(errors));
    }
    repo.insert_submission(input).await
}
