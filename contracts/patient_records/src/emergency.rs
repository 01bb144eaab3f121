//! Emergency contacts owned by a patient record. Among one patient's
//! contacts at most one may be primary; promoting a contact demotes the
//! previous holder inside the same invocation.

use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol, Vec};

use common::error::AccessError;

const CONTACT_COUNTER: Symbol = symbol_short!("CNT_CTR");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyContact {
    pub id: u64,
    pub patient_id: u64,
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub is_primary_contact: bool,
    pub created_at: u64,
}

pub(crate) fn contact_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("CONTACT"), id)
}

pub(crate) fn patient_contacts_key(patient_id: u64) -> (Symbol, u64) {
    (symbol_short!("PAT_CNT"), patient_id)
}

pub fn get_contact_opt(env: &Env, id: u64) -> Option<EmergencyContact> {
    env.storage().persistent().get(&contact_key(id))
}

/// Contact ids belonging to one patient.
pub fn contacts_of(env: &Env, patient_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&patient_contacts_key(patient_id))
        .unwrap_or(Vec::new(env))
}

fn save_contact(env: &Env, contact: &EmergencyContact) {
    env.storage().persistent().set(&contact_key(contact.id), contact);
}

fn next_contact_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&CONTACT_COUNTER)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(&CONTACT_COUNTER, &id);
    id
}

/// Demote whichever of the patient's contacts currently holds the primary
/// flag.
fn demote_primary(env: &Env, patient_id: u64) {
    for id in contacts_of(env, patient_id).iter() {
        if let Some(mut contact) = get_contact_opt(env, id) {
            if contact.is_primary_contact {
                contact.is_primary_contact = false;
                save_contact(env, &contact);
            }
        }
    }
}

pub(crate) fn insert_contact(
    env: &Env,
    patient_id: u64,
    name: String,
    relationship: String,
    phone: String,
    is_primary_contact: bool,
) -> u64 {
    if is_primary_contact {
        demote_primary(env, patient_id);
    }

    let id = next_contact_id(env);
    let contact = EmergencyContact {
        id,
        patient_id,
        name,
        relationship,
        phone,
        is_primary_contact,
        created_at: env.ledger().timestamp(),
    };
    save_contact(env, &contact);

    let mut index = contacts_of(env, patient_id);
    index.push_back(id);
    env.storage()
        .persistent()
        .set(&patient_contacts_key(patient_id), &index);
    id
}

pub(crate) fn update_contact(
    env: &Env,
    id: u64,
    name: String,
    relationship: String,
    phone: String,
    is_primary_contact: bool,
) -> Result<(), AccessError> {
    let mut contact = get_contact_opt(env, id).ok_or(AccessError::RecordNotFound)?;
    if is_primary_contact && !contact.is_primary_contact {
        demote_primary(env, contact.patient_id);
    }
    contact.name = name;
    contact.relationship = relationship;
    contact.phone = phone;
    contact.is_primary_contact = is_primary_contact;
    save_contact(env, &contact);
    Ok(())
}

pub(crate) fn remove_contact(env: &Env, id: u64) -> Result<(), AccessError> {
    let contact = get_contact_opt(env, id).ok_or(AccessError::RecordNotFound)?;

    let index = contacts_of(env, contact.patient_id);
    let mut kept = Vec::new(env);
    for entry in index.iter() {
        if entry != id {
            kept.push_back(entry);
        }
    }
    env.storage()
        .persistent()
        .set(&patient_contacts_key(contact.patient_id), &kept);
    env.storage().persistent().remove(&contact_key(id));
    Ok(())
}

/// Cascade: delete every contact of a patient along with the index.
pub(crate) fn remove_contacts_of(env: &Env, patient_id: u64) {
    for id in contacts_of(env, patient_id).iter() {
        env.storage().persistent().remove(&contact_key(id));
    }
    env.storage()
        .persistent()
        .remove(&patient_contacts_key(patient_id));
}
