//! Write-time validation for profiles, patients, and contacts.

use soroban_sdk::{Env, String};

use common::access::Role;
use common::error::AccessError;

const MAX_DEPARTMENT_LENGTH: u32 = 100;
const MAX_LICENSE_LENGTH: u32 = 50;
const MAX_PHONE_LENGTH: u32 = 20;
const MAX_NAME_LENGTH: u32 = 100;
const MAX_RELATIONSHIP_LENGTH: u32 = 50;

/// Role invariants for a profile write:
/// patients carry no license; medical staff require one; doctors and nurses
/// additionally require a department.
pub fn validate_profile(
    role: Role,
    department: &String,
    license_number: &String,
    phone: &String,
) -> Result<(), AccessError> {
    if department.len() > MAX_DEPARTMENT_LENGTH
        || license_number.len() > MAX_LICENSE_LENGTH
        || phone.len() > MAX_PHONE_LENGTH
    {
        return Err(AccessError::InvalidInput);
    }

    match role {
        Role::Patient => {
            if !license_number.is_empty() {
                return Err(AccessError::LicenseForbidden);
            }
        }
        Role::Doctor | Role::Nurse | Role::Pharmacy => {
            if license_number.is_empty() {
                return Err(AccessError::LicenseRequired);
            }
            if matches!(role, Role::Doctor | Role::Nurse) && department.is_empty() {
                return Err(AccessError::DepartmentRequired);
            }
        }
        Role::Admin => {}
    }
    Ok(())
}

/// A birth date may be unset (0, as on auto-provisioned records) but never
/// in the future.
pub fn validate_birth_date(env: &Env, date_of_birth: u64) -> Result<(), AccessError> {
    if date_of_birth > env.ledger().timestamp() {
        return Err(AccessError::InvalidInput);
    }
    Ok(())
}

pub fn validate_contact(
    name: &String,
    relationship: &String,
    phone: &String,
) -> Result<(), AccessError> {
    if name.is_empty() || relationship.is_empty() {
        return Err(AccessError::InvalidInput);
    }
    if name.len() > MAX_NAME_LENGTH
        || relationship.len() > MAX_RELATIONSHIP_LENGTH
        || phone.len() > MAX_PHONE_LENGTH
    {
        return Err(AccessError::InvalidInput);
    }
    Ok(())
}
