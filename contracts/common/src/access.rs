//! Role registry: the closed role enumeration and its static capability
//! table. Everything here is a pure, total function over the enums below,
//! with no storage and no side effects. Each role's capabilities are defined
//! exactly once, in [`capabilities_of`].

use soroban_sdk::{contracttype, Env, String, Vec};

use crate::error::AccessError;

/// User roles in the hospital records system. Closed set.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Patient,
    Doctor,
    Nurse,
    Pharmacy,
    Admin,
}

/// Actions governed by the permission engine.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    View,
    Add,
    Change,
    Delete,
    /// Module-level visibility: may the principal see the listing page at
    /// all, before any specific record is involved.
    ListModule,
}

/// Record kinds governed by the permission engine.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Profile,
    Patient,
    EmergencyContact,
}

/// Role-derived groups consumed by secondary permission systems. A principal
/// belongs to exactly one group, the one derived from its current role.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Group {
    Patients,
    Doctors,
    Nurses,
    Pharmacy,
    Administrators,
}

/// Static capability tuple for one role, independent of any record.
/// Display-only for UI callers; `authorize` is always the final gate.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapabilitySet {
    pub is_medical_staff: bool,
    pub can_access_patient_records: bool,
    pub can_prescribe: bool,
    pub can_manage_users: bool,
    pub can_assign_patients: bool,
}

/// The capability table. Total over [`Role`].
pub fn capabilities_of(role: Role) -> CapabilitySet {
    match role {
        Role::Patient => CapabilitySet {
            is_medical_staff: false,
            can_access_patient_records: false,
            can_prescribe: false,
            can_manage_users: false,
            can_assign_patients: false,
        },
        Role::Doctor => CapabilitySet {
            is_medical_staff: true,
            can_access_patient_records: true,
            can_prescribe: true,
            can_manage_users: false,
            can_assign_patients: false,
        },
        Role::Nurse => CapabilitySet {
            is_medical_staff: true,
            can_access_patient_records: true,
            can_prescribe: false,
            can_manage_users: false,
            can_assign_patients: false,
        },
        Role::Pharmacy => CapabilitySet {
            is_medical_staff: true,
            can_access_patient_records: true,
            can_prescribe: false,
            can_manage_users: false,
            can_assign_patients: false,
        },
        Role::Admin => CapabilitySet {
            is_medical_staff: false,
            can_access_patient_records: true,
            can_prescribe: false,
            can_manage_users: true,
            can_assign_patients: true,
        },
    }
}

/// Canonical lowercase name for a role, as UI layers and scripts spell it.
pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Patient => "patient",
        Role::Doctor => "doctor",
        Role::Nurse => "nurse",
        Role::Pharmacy => "pharmacy",
        Role::Admin => "admin",
    }
}

/// Parse a role name held as text at the boundary (UI, scripts). Any name
/// outside the closed set fails with `UnknownRole`; callers fail closed.
pub fn parse_role(env: &Env, name: &String) -> Result<Role, AccessError> {
    for role in ALL_ROLES {
        if *name == String::from_str(env, role_name(role)) {
            return Ok(role);
        }
    }
    Err(AccessError::UnknownRole)
}

/// The group derived from a role. Total over [`Role`].
pub fn role_to_group(role: Role) -> Group {
    match role {
        Role::Patient => Group::Patients,
        Role::Doctor => Group::Doctors,
        Role::Nurse => Group::Nurses,
        Role::Pharmacy => Group::Pharmacy,
        Role::Admin => Group::Administrators,
    }
}

/// Display name of a group.
pub fn group_name(group: Group) -> &'static str {
    match group {
        Group::Patients => "Patients",
        Group::Doctors => "Doctors",
        Group::Nurses => "Nurses",
        Group::Pharmacy => "Pharmacy",
        Group::Administrators => "Administrators",
    }
}

/// Every role, for reconciliation loops and boundary parsing.
pub const ALL_ROLES: [Role; 5] = [
    Role::Patient,
    Role::Doctor,
    Role::Nurse,
    Role::Pharmacy,
    Role::Admin,
];

/// Every group, for reconciliation loops.
pub const ALL_GROUPS: [Group; 5] = [
    Group::Patients,
    Group::Doctors,
    Group::Nurses,
    Group::Pharmacy,
    Group::Administrators,
];

/// Patient-form fields a role may see, computed fresh per call. Only roles
/// that may assign patients see `assigned_doctor` as an editable field.
pub fn display_fields_for(env: &Env, role: Role) -> Vec<String> {
    let mut fields = Vec::new(env);
    fields.push_back(String::from_str(env, "date_of_birth"));
    fields.push_back(String::from_str(env, "blood_type"));
    if capabilities_of(role).can_access_patient_records {
        fields.push_back(String::from_str(env, "emergency_contacts"));
    }
    if capabilities_of(role).can_assign_patients {
        fields.push_back(String::from_str(env, "assigned_doctor"));
    }
    fields
}
