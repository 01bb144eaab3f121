//! Listing-level visibility: narrow a collection to the rows a principal may
//! see. The filters here are written independently of `rbac::authorize`, and
//! the two must agree row-for-row on `View`; that equivalence is covered by
//! property tests rather than by one calling the other.

use soroban_sdk::{Address, Env, Vec};

use common::access::Role;

use crate::{emergency, get_principal_opt, get_profile_opt, patient_index, profile_index, Principal};

enum Tier {
    Unfiltered,
    Role(Role),
}

/// Shared preamble: missing or inactive principals see nothing; superusers
/// and admins see everything; everyone else is filtered by role.
fn tier_of(env: &Env, principal: &Address) -> Option<Tier> {
    let identity: Principal = get_principal_opt(env, principal)?;
    if !identity.is_active {
        return None;
    }
    if identity.is_superuser {
        return Some(Tier::Unfiltered);
    }
    let profile = get_profile_opt(env, principal)?;
    if profile.role == Role::Admin {
        return Some(Tier::Unfiltered);
    }
    Some(Tier::Role(profile.role))
}

/// Profile rows visible to the principal: all for the admin tier, the own
/// row for every other role.
pub fn scope_profiles(env: &Env, principal: &Address) -> Vec<Address> {
    match tier_of(env, principal) {
        None => Vec::new(env),
        Some(Tier::Unfiltered) => profile_index(env),
        Some(Tier::Role(_)) => {
            let mut own = Vec::new(env);
            own.push_back(principal.clone());
            own
        }
    }
}

/// Patient rows visible to the principal.
pub fn scope_patients(env: &Env, principal: &Address) -> Vec<u64> {
    match tier_of(env, principal) {
        None => Vec::new(env),
        Some(Tier::Unfiltered) => patient_index(env),
        Some(Tier::Role(role)) => {
            let mut visible = Vec::new(env);
            match role {
                Role::Patient => {
                    if let Some(id) = crate::patient_of_owner(env, principal) {
                        visible.push_back(id);
                    }
                }
                Role::Doctor => {
                    for id in patient_index(env).iter() {
                        if let Some(patient) = crate::get_patient_opt(env, id) {
                            if patient.assigned_doctor == Some(principal.clone()) {
                                visible.push_back(id);
                            }
                        }
                    }
                }
                // Admin is already mapped to the unfiltered tier above.
                Role::Nurse | Role::Pharmacy | Role::Admin => return patient_index(env),
            }
            visible
        }
    }
}

/// Emergency-contact rows visible to the principal: the contacts of every
/// visible patient.
pub fn scope_contacts(env: &Env, principal: &Address) -> Vec<u64> {
    let mut visible = Vec::new(env);
    for patient_id in scope_patients(env, principal).iter() {
        for contact_id in emergency::contacts_of(env, patient_id).iter() {
            visible.push_back(contact_id);
        }
    }
    visible
}
