use soroban_sdk::contracterror;

/// Errors shared by every contract in the workspace.
///
/// Ordinary denial is never an error: `authorize` returns `false` and the
/// CRUD wrappers surface denied object access as `RecordNotFound` so callers
/// cannot distinguish "does not exist" from "exists but hidden".
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum AccessError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    RecordNotFound = 4,
    /// Role name outside the closed enumeration.
    UnknownRole = 5,
    /// Write linking a record to a profile of the wrong role.
    InvalidAssignment = 6,
    MissingProfile = 7,
    /// License number required for medical staff.
    LicenseRequired = 8,
    /// Patients must not carry a license number.
    LicenseForbidden = 9,
    DepartmentRequired = 10,
    DuplicateRecord = 11,
    InvalidInput = 12,
    /// Group reconciliation could not run; logged, never propagated to the
    /// write that triggered it.
    GroupSyncFailure = 13,
}
