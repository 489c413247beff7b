//! Two-step delete confirmation.
//!
//! Destructive actions are gated behind an explicit confirmation: the
//! first step issues a signed, short-lived ticket for one employee id,
//! the second verifies it and performs the backend delete. This keeps
//! the protocol testable without any modal dialog.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::api::EmployeeWriter;
use crate::services::{ServiceError, ServiceResult};

/// Confirmation tickets expire after five minutes.
const TICKET_TTL_SECS: u64 = 300;

#[derive(Debug, Serialize, Deserialize)]
struct DeleteClaims {
    sub: i64,
    exp: u64,
}

/// Pending confirmation for deleting one employee.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTicket {
    pub employee_id: i64,
    pub token: String,
}

/// First step: issue a ticket the confirmation form posts back.
pub fn request_delete(employee_id: i64, secret: &str) -> ServiceResult<DeleteTicket> {
    let claims = DeleteClaims {
        sub: employee_id,
        exp: jsonwebtoken::get_current_timestamp() + TICKET_TTL_SECS,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        log::error!("Failed to issue delete ticket for employee {employee_id}: {err}");
        ServiceError::Confirmation(err.to_string())
    })?;

    Ok(DeleteTicket { employee_id, token })
}

/// Second step: verify the ticket and delete the employee. The ticket
/// must address the same employee the request names.
pub async fn confirm_delete<A>(
    api: &A,
    employee_id: i64,
    token: &str,
    secret: &str,
) -> ServiceResult<()>
where
    A: EmployeeWriter + ?Sized,
{
    let validation = Validation::new(Algorithm::HS256);
    let ticket = jsonwebtoken::decode::<DeleteClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|err| ServiceError::Confirmation(err.to_string()))?;

    if ticket.claims.sub != employee_id {
        return Err(ServiceError::Confirmation(
            "ticket does not match the addressed employee".to_string(),
        ));
    }

    api.delete_employee(employee_id).await.map_err(|err| {
        log::error!("Failed to delete employee {employee_id}: {err}");
        ServiceError::from(err)
    })
}
