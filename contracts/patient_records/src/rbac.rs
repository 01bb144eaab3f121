//! Ownership resolution and the authorization decision function.
//!
//! The decision chain is evaluated in order, first match wins:
//! missing/inactive principal → deny; superuser → allow; admin role → allow;
//! missing profile → deny; then one enum-keyed dispatch over
//! `(RecordKind, Action)`. Anything the table does not name is denied.

use soroban_sdk::{contracttype, Address, Env};

use common::access::{Action, RecordKind, Role};

/// A record (or record module) an action is evaluated against.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    /// The profile listing as a whole, with no specific record.
    ProfileModule,
    PatientModule,
    ContactModule,
    Profile(Address),
    Patient(u64),
    Contact(u64),
}

impl Target {
    pub fn kind(&self) -> RecordKind {
        match self {
            Target::ProfileModule | Target::Profile(_) => RecordKind::Profile,
            Target::PatientModule | Target::Patient(_) => RecordKind::Patient,
            Target::ContactModule | Target::Contact(_) => RecordKind::EmergencyContact,
        }
    }

    pub fn is_module(&self) -> bool {
        matches!(
            self,
            Target::ProfileModule | Target::PatientModule | Target::ContactModule
        )
    }
}

/// How a principal relates to a specific record. Assignment is a distinct
/// relation from ownership: it grants view/list, never owner rights.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    Owner,
    AssignedDoctor,
    None,
}

/// Resolve the relation between a principal and a target. Fails closed:
/// module targets and missing records relate as `None`.
pub fn relation_to(env: &Env, principal: &Address, target: &Target) -> Relation {
    match target {
        Target::Profile(user) => {
            if user == principal && crate::get_profile_opt(env, user).is_some() {
                Relation::Owner
            } else {
                Relation::None
            }
        }
        Target::Patient(id) => match crate::get_patient_opt(env, *id) {
            Some(patient) => patient_relation(principal, &patient),
            None => Relation::None,
        },
        Target::Contact(id) => match crate::emergency::get_contact_opt(env, *id) {
            // Ownership is inherited transitively through the parent patient.
            Some(contact) => match crate::get_patient_opt(env, contact.patient_id) {
                Some(patient) => patient_relation(principal, &patient),
                None => Relation::None,
            },
            None => Relation::None,
        },
        _ => Relation::None,
    }
}

fn patient_relation(principal: &Address, patient: &crate::Patient) -> Relation {
    if patient.owner == *principal {
        Relation::Owner
    } else if patient.assigned_doctor == Some(principal.clone()) {
        Relation::AssignedDoctor
    } else {
        Relation::None
    }
}

fn target_exists(env: &Env, target: &Target) -> bool {
    match target {
        Target::Profile(user) => crate::get_profile_opt(env, user).is_some(),
        Target::Patient(id) => crate::get_patient_opt(env, *id).is_some(),
        Target::Contact(id) => crate::emergency::get_contact_opt(env, *id).is_some(),
        _ => false,
    }
}

/// The authorization decision function. Denial is a normal `false`, never an
/// error; decisions are computed against current storage on every call.
pub fn authorize(env: &Env, principal: &Address, target: &Target, action: Action) -> bool {
    let identity = match crate::get_principal_opt(env, principal) {
        Some(p) => p,
        None => return false,
    };
    if !identity.is_active {
        return false;
    }
    if identity.is_superuser {
        return true;
    }

    let profile = match crate::get_profile_opt(env, principal) {
        Some(p) => p,
        None => return false,
    };
    if profile.role == Role::Admin {
        return true;
    }
    let role = profile.role;

    // Module-level actions carry no record to relate to.
    match action {
        Action::ListModule => return target.is_module(),
        Action::Add => {
            // Only contact creation is open below the admin tier: patients
            // add contacts to their own record, enforced at save time.
            return *target == Target::ContactModule && role == Role::Patient;
        }
        _ => {}
    }

    // View/Change/Delete require an existing record; a missing one denies
    // rather than revealing anything.
    if !target_exists(env, target) {
        return false;
    }
    let relation = relation_to(env, principal, target);

    match (target.kind(), action) {
        (RecordKind::Profile, Action::View | Action::Change) => relation == Relation::Owner,
        (RecordKind::Patient, Action::View | Action::Change)
        | (RecordKind::EmergencyContact, Action::View | Action::Change) => match relation {
            Relation::Owner | Relation::AssignedDoctor => true,
            // Nurses and pharmacy staff have open object-level access to
            // patient data; doctors and patients need a relation.
            Relation::None => matches!(role, Role::Nurse | Role::Pharmacy),
        },
        (RecordKind::EmergencyContact, Action::Delete) => relation == Relation::Owner,
        // Patient and profile records are never deleted below the admin
        // tier; an owning patient cannot delete their own record.
        _ => false,
    }
}
