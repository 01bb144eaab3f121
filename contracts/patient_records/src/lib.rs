#![no_std]

#[cfg(test)]
extern crate std;

pub mod audit;
pub mod emergency;
pub mod groups;
pub mod rbac;
pub mod scope;
pub mod validation;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use common::access::{capabilities_of, parse_role, Action, CapabilitySet, Group, RecordKind, Role};
use common::error::AccessError;

pub use emergency::EmergencyContact;
pub use rbac::{Relation, Target};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PATIENT_COUNTER: Symbol = symbol_short!("PAT_CTR");
const PATIENT_INDEX: Symbol = symbol_short!("PAT_IDX");
const PROFILE_INDEX: Symbol = symbol_short!("PRF_IDX");

/// An authenticated identity known to the system. Created at provisioning;
/// `is_superuser` bypasses every rule, `is_active == false` denies everything.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Principal {
    pub address: Address,
    pub is_superuser: bool,
    pub is_active: bool,
    pub provisioned_at: u64,
}

/// Role-and-credentials record attached 1:1 to a principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub user: Address,
    pub role: Role,
    pub department: String,
    pub license_number: String,
    pub phone: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Blood type of a patient. `Unknown` is the auto-provisioned default.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BloodType {
    Unknown,
    APos,
    ANeg,
    BPos,
    BNeg,
    AbPos,
    AbNeg,
    OPos,
    ONeg,
}

/// Patient record, owned by exactly one patient-role profile. The optional
/// doctor assignment is a scoped-viewer relation, not ownership: deleting the
/// referenced doctor profile clears the assignment instead of cascading.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: u64,
    pub owner: Address,
    pub date_of_birth: u64,
    pub blood_type: BloodType,
    pub assigned_doctor: Option<Address>,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn principal_key(user: &Address) -> (Symbol, Address) {
    (symbol_short!("USER"), user.clone())
}

pub(crate) fn profile_key(user: &Address) -> (Symbol, Address) {
    (symbol_short!("PROFILE"), user.clone())
}

pub(crate) fn patient_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("PATIENT"), id)
}

pub(crate) fn patient_owner_key(owner: &Address) -> (Symbol, Address) {
    (symbol_short!("PAT_OWN"), owner.clone())
}

pub(crate) fn get_principal_opt(env: &Env, user: &Address) -> Option<Principal> {
    env.storage().persistent().get(&principal_key(user))
}

pub(crate) fn get_profile_opt(env: &Env, user: &Address) -> Option<Profile> {
    env.storage().persistent().get(&profile_key(user))
}

pub(crate) fn get_patient_opt(env: &Env, id: u64) -> Option<Patient> {
    env.storage().persistent().get(&patient_key(id))
}

pub(crate) fn patient_of_owner(env: &Env, owner: &Address) -> Option<u64> {
    env.storage().persistent().get(&patient_owner_key(owner))
}

pub(crate) fn profile_index(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PROFILE_INDEX)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn patient_index(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&PATIENT_INDEX)
        .unwrap_or(Vec::new(env))
}

fn save_patient(env: &Env, patient: &Patient) {
    env.storage().persistent().set(&patient_key(patient.id), patient);
}

fn save_profile(env: &Env, profile: &Profile) {
    env.storage().persistent().set(&profile_key(&profile.user), profile);
}

/// True when the user is an active superuser or holds a user-management role.
pub(crate) fn is_admin_or_super(env: &Env, user: &Address) -> bool {
    let principal = match get_principal_opt(env, user) {
        Some(p) => p,
        None => return false,
    };
    if !principal.is_active {
        return false;
    }
    if principal.is_superuser {
        return true;
    }
    match get_profile_opt(env, user) {
        Some(profile) => capabilities_of(profile.role).can_manage_users,
        None => false,
    }
}

/// The contract admin address may administer before any principal exists;
/// afterwards the usual superuser/admin-role paths apply.
fn can_administer(env: &Env, user: &Address) -> bool {
    if let Some(admin) = env.storage().instance().get::<_, Address>(&ADMIN) {
        if admin == *user {
            return true;
        }
    }
    is_admin_or_super(env, user)
}

fn can_assign_patients(env: &Env, user: &Address) -> bool {
    if let Some(admin) = env.storage().instance().get::<_, Address>(&ADMIN) {
        if admin == *user {
            return true;
        }
    }
    let principal = match get_principal_opt(env, user) {
        Some(p) => p,
        None => return false,
    };
    if !principal.is_active {
        return false;
    }
    if principal.is_superuser {
        return true;
    }
    match get_profile_opt(env, user) {
        Some(profile) => capabilities_of(profile.role).can_assign_patients,
        None => false,
    }
}

fn next_patient_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&PATIENT_COUNTER)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(&PATIENT_COUNTER, &id);
    id
}

fn push_unique_address(env: &Env, key: &Symbol, value: &Address) {
    let mut index: Vec<Address> = env
        .storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env));
    if !index.contains(value) {
        index.push_back(value.clone());
        env.storage().persistent().set(key, &index);
    }
}

fn remove_address(env: &Env, key: &Symbol, value: &Address) {
    let index: Vec<Address> = env
        .storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env));
    let mut kept = Vec::new(env);
    for entry in index.iter() {
        if entry != *value {
            kept.push_back(entry);
        }
    }
    env.storage().persistent().set(key, &kept);
}

fn remove_patient_id(env: &Env, id: u64) {
    let index = patient_index(env);
    let mut kept = Vec::new(env);
    for entry in index.iter() {
        if entry != id {
            kept.push_back(entry);
        }
    }
    env.storage().persistent().set(&PATIENT_INDEX, &kept);
}

/// Auto-provision the Patient row owned by a patient-role profile.
fn ensure_patient_record(env: &Env, owner: &Address) {
    if patient_of_owner(env, owner).is_some() {
        return;
    }
    let id = next_patient_id(env);
    let now = env.ledger().timestamp();
    let patient = Patient {
        id,
        owner: owner.clone(),
        date_of_birth: 0,
        blood_type: BloodType::Unknown,
        assigned_doctor: None,
        created_at: now,
        updated_at: now,
    };
    save_patient(env, &patient);
    env.storage().persistent().set(&patient_owner_key(owner), &id);
    let mut index = patient_index(env);
    index.push_back(id);
    env.storage().persistent().set(&PATIENT_INDEX, &index);
}

/// Run group reconciliation for a principal; failures are logged and
/// swallowed so they never abort the write that triggered them.
fn sync_group_best_effort(env: &Env, user: &Address) {
    if groups::sync_group(env, user).is_err() {
        audit::group_sync_failed(env, user);
    }
}

fn delete_patient_cascade(env: &Env, patient: &Patient) {
    emergency::remove_contacts_of(env, patient.id);
    env.storage().persistent().remove(&patient_key(patient.id));
    env.storage()
        .persistent()
        .remove(&patient_owner_key(&patient.owner));
    remove_patient_id(env, patient.id);
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct PatientRecordsContract;

#[contractimpl]
impl PatientRecordsContract {
    /// Initialize the contract with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), AccessError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(AccessError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        Ok(())
    }

    /// Get the admin address.
    pub fn get_admin(env: Env) -> Result<Address, AccessError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(AccessError::NotInitialized)
    }

    /// Check if the contract is initialized.
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Principals ───────────────────────────────────────────────────────────

    /// Provision an authenticated identity. Admin-gated.
    pub fn provision_principal(
        env: Env,
        caller: Address,
        user: Address,
        is_superuser: bool,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !can_administer(&env, &caller) {
            return Err(AccessError::Unauthorized);
        }
        if get_principal_opt(&env, &user).is_some() {
            return Err(AccessError::DuplicateRecord);
        }
        let principal = Principal {
            address: user.clone(),
            is_superuser,
            is_active: true,
            provisioned_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&principal_key(&user), &principal);
        Ok(())
    }

    /// Activate or deactivate a principal. Inactive principals are denied
    /// every action without their data being removed.
    pub fn set_active(
        env: Env,
        caller: Address,
        user: Address,
        active: bool,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !can_administer(&env, &caller) {
            return Err(AccessError::Unauthorized);
        }
        let mut principal =
            get_principal_opt(&env, &user).ok_or(AccessError::RecordNotFound)?;
        principal.is_active = active;
        env.storage().persistent().set(&principal_key(&user), &principal);
        Ok(())
    }

    // ── Profiles ─────────────────────────────────────────────────────────────

    /// Create a profile for a provisioned principal. Admin-gated; validates
    /// the role invariants, auto-creates the owned Patient row for
    /// patient-role profiles, and reconciles group membership before
    /// returning.
    pub fn create_profile(
        env: Env,
        caller: Address,
        user: Address,
        role: Role,
        department: String,
        license_number: String,
        phone: String,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !can_administer(&env, &caller)
            && !rbac::authorize(&env, &caller, &Target::ProfileModule, Action::Add)
        {
            return Err(AccessError::Unauthorized);
        }
        if get_principal_opt(&env, &user).is_none() {
            return Err(AccessError::RecordNotFound);
        }
        if get_profile_opt(&env, &user).is_some() {
            return Err(AccessError::DuplicateRecord);
        }
        validation::validate_profile(role, &department, &license_number, &phone)?;

        let now = env.ledger().timestamp();
        let profile = Profile {
            user: user.clone(),
            role,
            department,
            license_number,
            phone,
            created_at: now,
            updated_at: now,
        };
        save_profile(&env, &profile);
        push_unique_address(&env, &PROFILE_INDEX, &user);

        if role == Role::Patient {
            ensure_patient_record(&env, &user);
        }

        sync_group_best_effort(&env, &user);
        Ok(())
    }

    /// Update a profile's non-role fields. Owner or admin.
    pub fn update_profile(
        env: Env,
        caller: Address,
        user: Address,
        department: String,
        license_number: String,
        phone: String,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Profile(user.clone()), Action::Change) {
            audit::write_denied(&env, &caller, RecordKind::Profile);
            return Err(AccessError::RecordNotFound);
        }
        let mut profile = get_profile_opt(&env, &user).ok_or(AccessError::RecordNotFound)?;
        validation::validate_profile(profile.role, &department, &license_number, &phone)?;
        profile.department = department;
        profile.license_number = license_number;
        profile.phone = phone;
        profile.updated_at = env.ledger().timestamp();
        save_profile(&env, &profile);
        Ok(())
    }

    /// Mutate a profile's role. The full role invariants are re-validated
    /// against the new role, and group membership is reconciled before the
    /// write is considered complete.
    pub fn set_role(
        env: Env,
        caller: Address,
        user: Address,
        new_role: Role,
        department: String,
        license_number: String,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Profile(user.clone()), Action::Change) {
            audit::write_denied(&env, &caller, RecordKind::Profile);
            return Err(AccessError::RecordNotFound);
        }
        let mut profile = get_profile_opt(&env, &user).ok_or(AccessError::RecordNotFound)?;
        validation::validate_profile(new_role, &department, &license_number, &profile.phone)?;

        let old_role = profile.role;
        profile.role = new_role;
        profile.department = department;
        profile.license_number = license_number;
        profile.updated_at = env.ledger().timestamp();
        save_profile(&env, &profile);

        if new_role == Role::Patient {
            ensure_patient_record(&env, &user);
        }

        sync_group_best_effort(&env, &user);
        audit::role_changed(&env, &caller, &user, old_role, new_role);
        Ok(())
    }

    /// Delete a profile. Admin-gated via the engine. Cascades to the owned
    /// Patient row and its contacts; doctor assignments referencing the
    /// deleted profile are cleared, not cascaded.
    pub fn delete_profile(env: Env, caller: Address, user: Address) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Profile(user.clone()), Action::Delete) {
            audit::write_denied(&env, &caller, RecordKind::Profile);
            return Err(AccessError::RecordNotFound);
        }
        let profile = get_profile_opt(&env, &user).ok_or(AccessError::RecordNotFound)?;

        if let Some(patient_id) = patient_of_owner(&env, &user) {
            if let Some(patient) = get_patient_opt(&env, patient_id) {
                delete_patient_cascade(&env, &patient);
            }
        }

        // Set-null semantics for doctor assignments.
        if profile.role == Role::Doctor {
            for id in patient_index(&env).iter() {
                if let Some(mut patient) = get_patient_opt(&env, id) {
                    if patient.assigned_doctor == Some(user.clone()) {
                        patient.assigned_doctor = None;
                        patient.updated_at = env.ledger().timestamp();
                        save_patient(&env, &patient);
                    }
                }
            }
        }

        groups::remove_from_all_groups(&env, &user);
        env.storage().persistent().remove(&profile_key(&user));
        remove_address(&env, &PROFILE_INDEX, &user);
        Ok(())
    }

    /// Fetch a profile. Denied access reads as not-found.
    pub fn get_profile(env: Env, caller: Address, user: Address) -> Result<Profile, AccessError> {
        if !rbac::authorize(&env, &caller, &Target::Profile(user.clone()), Action::View) {
            return Err(AccessError::RecordNotFound);
        }
        get_profile_opt(&env, &user).ok_or(AccessError::RecordNotFound)
    }

    /// Profile addresses visible to the caller.
    pub fn list_profiles(env: Env, caller: Address) -> Vec<Address> {
        scope::scope_profiles(&env, &caller)
    }

    // ── Patients ─────────────────────────────────────────────────────────────

    /// Create a patient record for an owner profile. Admin-gated; linking a
    /// non-patient-role profile is rejected at write time.
    pub fn create_patient(
        env: Env,
        caller: Address,
        owner: Address,
        date_of_birth: u64,
        blood_type: BloodType,
    ) -> Result<u64, AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::PatientModule, Action::Add) {
            audit::write_denied(&env, &caller, RecordKind::Patient);
            return Err(AccessError::Unauthorized);
        }
        let owner_profile =
            get_profile_opt(&env, &owner).ok_or(AccessError::InvalidAssignment)?;
        if owner_profile.role != Role::Patient {
            return Err(AccessError::InvalidAssignment);
        }
        if patient_of_owner(&env, &owner).is_some() {
            return Err(AccessError::DuplicateRecord);
        }
        validation::validate_birth_date(&env, date_of_birth)?;

        let id = next_patient_id(&env);
        let now = env.ledger().timestamp();
        let patient = Patient {
            id,
            owner: owner.clone(),
            date_of_birth,
            blood_type,
            assigned_doctor: None,
            created_at: now,
            updated_at: now,
        };
        save_patient(&env, &patient);
        env.storage().persistent().set(&patient_owner_key(&owner), &id);
        let mut index = patient_index(&env);
        index.push_back(id);
        env.storage().persistent().set(&PATIENT_INDEX, &index);
        Ok(id)
    }

    /// Fetch a patient record. Denied access reads as not-found.
    pub fn get_patient(env: Env, caller: Address, id: u64) -> Result<Patient, AccessError> {
        if !rbac::authorize(&env, &caller, &Target::Patient(id), Action::View) {
            return Err(AccessError::RecordNotFound);
        }
        get_patient_opt(&env, id).ok_or(AccessError::RecordNotFound)
    }

    /// Update a patient's medical fields. Owner, assigned doctor,
    /// nurse/pharmacy, or admin.
    pub fn update_patient(
        env: Env,
        caller: Address,
        id: u64,
        date_of_birth: u64,
        blood_type: BloodType,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Patient(id), Action::Change) {
            audit::write_denied(&env, &caller, RecordKind::Patient);
            return Err(AccessError::RecordNotFound);
        }
        let mut patient = get_patient_opt(&env, id).ok_or(AccessError::RecordNotFound)?;
        validation::validate_birth_date(&env, date_of_birth)?;
        patient.date_of_birth = date_of_birth;
        patient.blood_type = blood_type;
        patient.updated_at = env.ledger().timestamp();
        save_patient(&env, &patient);
        Ok(())
    }

    /// Delete a patient record and its contacts. Admin-gated via the engine;
    /// an owning patient can never delete their own record.
    pub fn delete_patient(env: Env, caller: Address, id: u64) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Patient(id), Action::Delete) {
            audit::write_denied(&env, &caller, RecordKind::Patient);
            return Err(AccessError::RecordNotFound);
        }
        let patient = get_patient_opt(&env, id).ok_or(AccessError::RecordNotFound)?;
        delete_patient_cascade(&env, &patient);
        Ok(())
    }

    /// Assign (or clear) the doctor for a patient. Requires the
    /// patient-assignment capability; the referenced profile must hold the
    /// doctor role.
    pub fn assign_doctor(
        env: Env,
        caller: Address,
        patient_id: u64,
        doctor: Option<Address>,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !can_assign_patients(&env, &caller) {
            audit::write_denied(&env, &caller, RecordKind::Patient);
            return Err(AccessError::Unauthorized);
        }
        let mut patient =
            get_patient_opt(&env, patient_id).ok_or(AccessError::RecordNotFound)?;
        if let Some(ref doctor_addr) = doctor {
            let doctor_profile =
                get_profile_opt(&env, doctor_addr).ok_or(AccessError::InvalidAssignment)?;
            if doctor_profile.role != Role::Doctor {
                return Err(AccessError::InvalidAssignment);
            }
        }
        patient.assigned_doctor = doctor;
        patient.updated_at = env.ledger().timestamp();
        save_patient(&env, &patient);
        Ok(())
    }

    /// Patient ids visible to the caller.
    pub fn list_patients(env: Env, caller: Address) -> Vec<u64> {
        scope::scope_patients(&env, &caller)
    }

    // ── Emergency contacts ───────────────────────────────────────────────────

    /// Add an emergency contact to a patient. Owning patient or admin;
    /// setting a new primary demotes the previous holder in the same write.
    pub fn add_emergency_contact(
        env: Env,
        caller: Address,
        patient_id: u64,
        name: String,
        relationship: String,
        phone: String,
        is_primary_contact: bool,
    ) -> Result<u64, AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::ContactModule, Action::Add) {
            audit::write_denied(&env, &caller, RecordKind::EmergencyContact);
            return Err(AccessError::Unauthorized);
        }
        let patient = get_patient_opt(&env, patient_id).ok_or(AccessError::RecordNotFound)?;
        if !is_admin_or_super(&env, &caller) && patient.owner != caller {
            audit::write_denied(&env, &caller, RecordKind::EmergencyContact);
            return Err(AccessError::RecordNotFound);
        }
        validation::validate_contact(&name, &relationship, &phone)?;
        let id = emergency::insert_contact(
            &env,
            patient_id,
            name,
            relationship,
            phone,
            is_primary_contact,
        );
        Ok(id)
    }

    /// Update an emergency contact. Same access rule as viewing the parent
    /// patient; primary-contact uniqueness is preserved in the same write.
    pub fn update_emergency_contact(
        env: Env,
        caller: Address,
        contact_id: u64,
        name: String,
        relationship: String,
        phone: String,
        is_primary_contact: bool,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Contact(contact_id), Action::Change) {
            audit::write_denied(&env, &caller, RecordKind::EmergencyContact);
            return Err(AccessError::RecordNotFound);
        }
        validation::validate_contact(&name, &relationship, &phone)?;
        emergency::update_contact(
            &env,
            contact_id,
            name,
            relationship,
            phone,
            is_primary_contact,
        )
    }

    /// Delete an emergency contact. Owning patient or admin: contacts,
    /// unlike the Patient record itself, are fully managed by their owner.
    pub fn delete_emergency_contact(
        env: Env,
        caller: Address,
        contact_id: u64,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        if !rbac::authorize(&env, &caller, &Target::Contact(contact_id), Action::Delete) {
            audit::write_denied(&env, &caller, RecordKind::EmergencyContact);
            return Err(AccessError::RecordNotFound);
        }
        emergency::remove_contact(&env, contact_id)
    }

    /// Fetch an emergency contact. Denied access reads as not-found.
    pub fn get_emergency_contact(
        env: Env,
        caller: Address,
        contact_id: u64,
    ) -> Result<EmergencyContact, AccessError> {
        if !rbac::authorize(&env, &caller, &Target::Contact(contact_id), Action::View) {
            return Err(AccessError::RecordNotFound);
        }
        emergency::get_contact_opt(&env, contact_id).ok_or(AccessError::RecordNotFound)
    }

    /// Contact ids visible to the caller.
    pub fn list_contacts(env: Env, caller: Address) -> Vec<u64> {
        scope::scope_contacts(&env, &caller)
    }

    // ── Engine surface ───────────────────────────────────────────────────────

    /// The authorization decision function. Denial is a normal return value.
    pub fn authorize(env: Env, caller: Address, target: Target, action: Action) -> bool {
        rbac::authorize(&env, &caller, &target, action)
    }

    /// Static capability tuple for a role. Display-only; `authorize` is the
    /// final gate.
    pub fn capabilities_of(role: Role) -> CapabilitySet {
        common::access::capabilities_of(role)
    }

    /// Capability lookup for callers that hold the role as text. Fails with
    /// `UnknownRole` for any name outside the closed set.
    pub fn role_capabilities(env: Env, name: String) -> Result<CapabilitySet, AccessError> {
        let role = parse_role(&env, &name)?;
        Ok(capabilities_of(role))
    }

    /// Patient-form fields visible to a role, computed fresh per call.
    pub fn display_fields_for(env: Env, role: Role) -> Vec<String> {
        common::access::display_fields_for(&env, role)
    }

    /// Reconcile a principal's group membership with its current role.
    /// Admin-gated operational entry point; the same reconciliation runs
    /// automatically after every profile create and role mutation.
    pub fn sync_group(env: Env, caller: Address, user: Address) -> Result<(), AccessError> {
        caller.require_auth();
        if !can_administer(&env, &caller) {
            return Err(AccessError::Unauthorized);
        }
        groups::sync_group(&env, &user)
    }

    /// Groups a principal currently belongs to.
    pub fn groups_of(env: Env, user: Address) -> Vec<Group> {
        groups::groups_of(&env, &user)
    }

    /// Members of a group.
    pub fn group_members(env: Env, group: Group) -> Vec<Address> {
        groups::members_of(&env, &group)
    }

    /// Number of group reconciliations that failed and were swallowed.
    pub fn sync_failure_count(env: Env) -> u64 {
        audit::sync_failure_count(&env)
    }
}
