//! Customer contact/shipping detail types.

use serde::Serialize;

use peppercorn_core::{CustomerDetailId, CustomerName, MobileNumber};

/// A stored customer detail record. Immutable after creation; no uniqueness
/// is enforced, so several records may share a name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerDetail {
    /// Storage-assigned ID.
    pub id: CustomerDetailId,
    pub name: CustomerName,
    pub mobile: MobileNumber,
    pub address: String,
}

/// Insert payload for a validated customer detail submission.
#[derive(Debug, Clone)]
pub struct NewCustomerDetail {
    pub name: CustomerName,
    pub mobile: MobileNumber,
    pub address: String,
}
