#![cfg(test)]

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address, Env, String};

use common::access::{Action, Group, Role};
use common::error::AccessError;

use crate::rbac::Target;
use crate::{BloodType, PatientRecordsContract, PatientRecordsContractClient};

pub(crate) fn setup() -> (Env, PatientRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = 1_700_000_000);

    let contract_id = env.register(PatientRecordsContract, ());
    let client = PatientRecordsContractClient::new(&env, &contract_id);

    let root = Address::generate(&env);
    client.initialize(&root);
    // The contract admin doubles as a superuser principal in tests.
    client.provision_principal(&root, &root, &true);
    (env, client, root)
}

pub(crate) fn staff_fields(env: &Env, role: Role) -> (String, String) {
    match role {
        Role::Doctor => (
            String::from_str(env, "Cardiology"),
            String::from_str(env, "MD-100"),
        ),
        Role::Nurse => (String::from_str(env, "ICU"), String::from_str(env, "RN-200")),
        Role::Pharmacy => (String::from_str(env, ""), String::from_str(env, "PH-300")),
        Role::Patient | Role::Admin => {
            (String::from_str(env, ""), String::from_str(env, ""))
        }
    }
}

pub(crate) fn mk_user(
    env: &Env,
    client: &PatientRecordsContractClient<'static>,
    root: &Address,
    role: Role,
) -> Address {
    let user = Address::generate(env);
    client.provision_principal(root, &user, &false);
    let (department, license) = staff_fields(env, role);
    client.create_profile(
        root,
        &user,
        &role,
        &department,
        &license,
        &String::from_str(env, ""),
    );
    user
}

pub(crate) fn own_patient_id(
    client: &PatientRecordsContractClient<'static>,
    user: &Address,
) -> u64 {
    client.list_patients(user).get(0).unwrap()
}

#[test]
fn initialize_only_once() {
    let (env, client, _root) = setup();
    let other = Address::generate(&env);
    assert_eq!(
        client.try_initialize(&other),
        Err(Ok(AccessError::AlreadyInitialized))
    );
}

#[test]
fn scenario_a_patient_rights_on_own_record() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let other = mk_user(&env, &client, &root, Role::Patient);
    let own_id = own_patient_id(&client, &patient);
    let other_id = own_patient_id(&client, &other);

    assert!(client.authorize(&patient, &Target::Patient(own_id), &Action::View));
    assert!(client.authorize(&patient, &Target::Patient(own_id), &Action::Change));
    // Patients may never delete their own record.
    assert!(!client.authorize(&patient, &Target::Patient(own_id), &Action::Delete));
    assert!(!client.authorize(&patient, &Target::Patient(other_id), &Action::View));

    assert_eq!(
        client.try_delete_patient(&patient, &own_id),
        Err(Ok(AccessError::RecordNotFound))
    );
}

#[test]
fn scenario_b_doctor_scope_follows_assignment() {
    let (env, client, root) = setup();
    let d1 = mk_user(&env, &client, &root, Role::Doctor);
    let d2 = mk_user(&env, &client, &root, Role::Doctor);
    let p1 = mk_user(&env, &client, &root, Role::Patient);
    let p2 = mk_user(&env, &client, &root, Role::Patient);
    let p1_id = own_patient_id(&client, &p1);
    let p2_id = own_patient_id(&client, &p2);

    client.assign_doctor(&root, &p1_id, &Some(d1.clone()));
    client.assign_doctor(&root, &p2_id, &Some(d2.clone()));

    assert_eq!(client.list_patients(&d1), vec![&env, p1_id]);
    assert_eq!(client.list_patients(&d2), vec![&env, p2_id]);

    // Object-level decisions agree with the listing.
    assert!(client.authorize(&d1, &Target::Patient(p1_id), &Action::View));
    assert!(client.authorize(&d1, &Target::Patient(p1_id), &Action::Change));
    assert!(!client.authorize(&d1, &Target::Patient(p2_id), &Action::View));

    // Unassigning shrinks the scope again.
    client.assign_doctor(&root, &p1_id, &None);
    assert_eq!(client.list_patients(&d1).len(), 0);
}

#[test]
fn scenario_c_role_mutation_moves_group() {
    let (env, client, root) = setup();
    let user = mk_user(&env, &client, &root, Role::Patient);
    assert_eq!(client.groups_of(&user), vec![&env, Group::Patients]);

    client.set_role(
        &root,
        &user,
        &Role::Nurse,
        &String::from_str(&env, "ICU"),
        &String::from_str(&env, "RN-42"),
    );

    assert_eq!(client.groups_of(&user), vec![&env, Group::Nurses]);
    assert!(!client.group_members(&Group::Patients).contains(&user));
    assert!(client.group_members(&Group::Nurses).contains(&user));
}

#[test]
fn scenario_d_new_primary_contact_demotes_previous() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    let c1 = client.add_emergency_contact(
        &patient,
        &pid,
        &String::from_str(&env, "Ada"),
        &String::from_str(&env, "spouse"),
        &String::from_str(&env, "555-0101"),
        &true,
    );
    let c2 = client.add_emergency_contact(
        &patient,
        &pid,
        &String::from_str(&env, "Grace"),
        &String::from_str(&env, "parent"),
        &String::from_str(&env, "555-0102"),
        &true,
    );

    assert!(!client.get_emergency_contact(&patient, &c1).is_primary_contact);
    assert!(client.get_emergency_contact(&patient, &c2).is_primary_contact);

    // Promoting the first one back flips both again.
    client.update_emergency_contact(
        &patient,
        &c1,
        &String::from_str(&env, "Ada"),
        &String::from_str(&env, "spouse"),
        &String::from_str(&env, "555-0101"),
        &true,
    );
    assert!(client.get_emergency_contact(&patient, &c1).is_primary_contact);
    assert!(!client.get_emergency_contact(&patient, &c2).is_primary_contact);
}

#[test]
fn scenario_e_license_validation_by_role() {
    let (env, client, root) = setup();
    let user = Address::generate(&env);
    client.provision_principal(&root, &user, &false);

    assert_eq!(
        client.try_create_profile(
            &root,
            &user,
            &Role::Doctor,
            &String::from_str(&env, "Cardiology"),
            &String::from_str(&env, ""),
            &String::from_str(&env, ""),
        ),
        Err(Ok(AccessError::LicenseRequired))
    );

    // The same profile saves fine as a patient.
    client.create_profile(
        &root,
        &user,
        &Role::Patient,
        &String::from_str(&env, ""),
        &String::from_str(&env, ""),
        &String::from_str(&env, ""),
    );
    assert_eq!(client.get_profile(&user, &user).role, Role::Patient);
}

#[test]
fn superuser_bypasses_every_rule() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert!(client.authorize(&root, &Target::Patient(pid), &Action::Delete));
    assert!(client.authorize(&root, &Target::Profile(patient.clone()), &Action::Change));
    assert_eq!(client.list_patients(&root), vec![&env, pid]);
}

#[test]
fn inactive_principal_is_denied_everything() {
    let (env, client, root) = setup();
    let nurse = mk_user(&env, &client, &root, Role::Nurse);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert!(client.authorize(&nurse, &Target::Patient(pid), &Action::View));
    client.set_active(&root, &nurse, &false);
    assert!(!client.authorize(&nurse, &Target::Patient(pid), &Action::View));
    assert_eq!(client.list_patients(&nurse).len(), 0);
    assert_eq!(client.list_profiles(&nurse).len(), 0);

    client.set_active(&root, &nurse, &true);
    assert!(client.authorize(&nurse, &Target::Patient(pid), &Action::View));
}

#[test]
fn principal_without_profile_is_denied() {
    let (env, client, root) = setup();
    let bare = Address::generate(&env);
    client.provision_principal(&root, &bare, &false);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert!(!client.authorize(&bare, &Target::Patient(pid), &Action::View));
    assert!(!client.authorize(&bare, &Target::PatientModule, &Action::ListModule));
    assert_eq!(client.list_patients(&bare).len(), 0);
    assert_eq!(client.list_contacts(&bare).len(), 0);
    assert_eq!(client.list_profiles(&bare).len(), 0);
}

#[test]
fn nurse_and_pharmacy_see_all_patients_but_delete_nothing() {
    let (env, client, root) = setup();
    let nurse = mk_user(&env, &client, &root, Role::Nurse);
    let pharmacy = mk_user(&env, &client, &root, Role::Pharmacy);
    let p1 = mk_user(&env, &client, &root, Role::Patient);
    let p2 = mk_user(&env, &client, &root, Role::Patient);
    let p1_id = own_patient_id(&client, &p1);
    let p2_id = own_patient_id(&client, &p2);

    for staff in [&nurse, &pharmacy] {
        assert_eq!(client.list_patients(staff), vec![&env, p1_id, p2_id]);
        assert!(client.authorize(staff, &Target::Patient(p2_id), &Action::Change));
        assert!(!client.authorize(staff, &Target::Patient(p2_id), &Action::Delete));
        // Profile listing stays scoped to the own row.
        assert_eq!(client.list_profiles(staff), vec![&env, staff.clone()]);
    }

    assert_eq!(
        client.try_delete_patient(&nurse, &p1_id),
        Err(Ok(AccessError::RecordNotFound))
    );
}

#[test]
fn admin_role_sees_and_manages_everything() {
    let (env, client, root) = setup();
    let admin = mk_user(&env, &client, &root, Role::Admin);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert!(client.authorize(&admin, &Target::Patient(pid), &Action::Delete));
    assert!(client.authorize(&admin, &Target::Profile(patient.clone()), &Action::View));
    assert_eq!(client.list_patients(&admin), vec![&env, pid]);
    assert_eq!(client.list_profiles(&admin).len(), 2);

    client.delete_patient(&admin, &pid);
    assert_eq!(client.list_patients(&admin).len(), 0);
}

#[test]
fn assigning_a_non_doctor_is_rejected() {
    let (env, client, root) = setup();
    let nurse = mk_user(&env, &client, &root, Role::Nurse);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert_eq!(
        client.try_assign_doctor(&root, &pid, &Some(nurse.clone())),
        Err(Ok(AccessError::InvalidAssignment))
    );
    // Unknown profile is rejected the same way.
    let stranger = Address::generate(&env);
    assert_eq!(
        client.try_assign_doctor(&root, &pid, &Some(stranger)),
        Err(Ok(AccessError::InvalidAssignment))
    );
    // Prior state is unchanged.
    assert_eq!(client.get_patient(&root, &pid).assigned_doctor, None);
}

#[test]
fn patient_record_requires_patient_role_owner() {
    let (env, client, root) = setup();
    let doctor = mk_user(&env, &client, &root, Role::Doctor);
    assert_eq!(
        client.try_create_patient(&root, &doctor, &0, &BloodType::OPos),
        Err(Ok(AccessError::InvalidAssignment))
    );
}

#[test]
fn doctors_may_not_assign_patients() {
    let (env, client, root) = setup();
    let doctor = mk_user(&env, &client, &root, Role::Doctor);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    assert_eq!(
        client.try_assign_doctor(&doctor, &pid, &Some(doctor.clone())),
        Err(Ok(AccessError::Unauthorized))
    );
}

#[test]
fn deleting_a_doctor_clears_assignments() {
    let (env, client, root) = setup();
    let doctor = mk_user(&env, &client, &root, Role::Doctor);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);
    client.assign_doctor(&root, &pid, &Some(doctor.clone()));

    client.delete_profile(&root, &doctor);

    // Set-null, not cascade: the patient record survives unassigned.
    let record = client.get_patient(&root, &pid);
    assert_eq!(record.assigned_doctor, None);
}

#[test]
fn deleting_a_patient_profile_cascades() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);
    let cid = client.add_emergency_contact(
        &patient,
        &pid,
        &String::from_str(&env, "Ada"),
        &String::from_str(&env, "spouse"),
        &String::from_str(&env, ""),
        &true,
    );

    client.delete_profile(&root, &patient);

    assert_eq!(
        client.try_get_patient(&root, &pid),
        Err(Ok(AccessError::RecordNotFound))
    );
    assert_eq!(
        client.try_get_emergency_contact(&root, &cid),
        Err(Ok(AccessError::RecordNotFound))
    );
    assert_eq!(client.groups_of(&patient).len(), 0);
}

#[test]
fn denial_is_indistinguishable_from_absence() {
    let (env, client, root) = setup();
    let doctor = mk_user(&env, &client, &root, Role::Doctor);
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    // Unassigned doctor reading an existing record and anyone reading a
    // nonexistent one get the same answer.
    let hidden = client.try_get_patient(&doctor, &pid);
    let missing = client.try_get_patient(&doctor, &9999);
    assert_eq!(hidden, Err(Ok(AccessError::RecordNotFound)));
    assert_eq!(hidden, missing);

    let foreign_profile = client.try_get_profile(&doctor, &patient);
    assert_eq!(foreign_profile, Err(Ok(AccessError::RecordNotFound)));
}

#[test]
fn contact_rights_follow_the_parent_patient() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let other = mk_user(&env, &client, &root, Role::Patient);
    let nurse = mk_user(&env, &client, &root, Role::Nurse);
    let doctor = mk_user(&env, &client, &root, Role::Doctor);
    let pid = own_patient_id(&client, &patient);

    let cid = client.add_emergency_contact(
        &patient,
        &pid,
        &String::from_str(&env, "Ada"),
        &String::from_str(&env, "spouse"),
        &String::from_str(&env, "555-0101"),
        &false,
    );

    // Another patient cannot attach contacts to someone else's record, and
    // the answer does not reveal that the record exists.
    assert_eq!(
        client.try_add_emergency_contact(
            &other,
            &pid,
            &String::from_str(&env, "Eve"),
            &String::from_str(&env, "friend"),
            &String::from_str(&env, ""),
            &false,
        ),
        Err(Ok(AccessError::RecordNotFound))
    );

    // Medical staff may view; only the owner may delete.
    assert!(client.authorize(&nurse, &Target::Contact(cid), &Action::View));
    assert!(!client.authorize(&nurse, &Target::Contact(cid), &Action::Delete));
    assert!(!client.authorize(&doctor, &Target::Contact(cid), &Action::View));
    assert!(!client.authorize(&other, &Target::Contact(cid), &Action::View));

    // An assigned doctor gains visibility transitively.
    client.assign_doctor(&root, &pid, &Some(doctor.clone()));
    assert!(client.authorize(&doctor, &Target::Contact(cid), &Action::View));
    assert_eq!(client.list_contacts(&doctor), vec![&env, cid]);
    assert!(!client.list_contacts(&other).contains(cid));

    client.delete_emergency_contact(&patient, &cid);
    assert_eq!(client.list_contacts(&patient).len(), 0);
}

#[test]
fn module_visibility_requires_a_role() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);

    assert!(client.authorize(&patient, &Target::PatientModule, &Action::ListModule));
    assert!(client.authorize(&patient, &Target::ProfileModule, &Action::ListModule));
    assert!(client.authorize(&patient, &Target::ContactModule, &Action::ListModule));
    // Below the admin tier nobody adds patients or profiles.
    assert!(!client.authorize(&patient, &Target::PatientModule, &Action::Add));
    assert!(!client.authorize(&patient, &Target::ProfileModule, &Action::Add));
    // Contacts are the one record patients create themselves.
    assert!(client.authorize(&patient, &Target::ContactModule, &Action::Add));

    let unknown = Address::generate(&env);
    assert!(!client.authorize(&unknown, &Target::PatientModule, &Action::ListModule));
}

#[test]
fn explicit_sync_group_reports_missing_profile() {
    let (env, client, root) = setup();
    let bare = Address::generate(&env);
    client.provision_principal(&root, &bare, &false);

    assert_eq!(
        client.try_sync_group(&root, &bare),
        Err(Ok(AccessError::GroupSyncFailure))
    );
    assert_eq!(client.sync_failure_count(), 0);
}

#[test]
fn sync_group_is_idempotent() {
    let (env, client, root) = setup();
    let nurse = mk_user(&env, &client, &root, Role::Nurse);

    client.sync_group(&root, &nurse);
    client.sync_group(&root, &nurse);

    assert_eq!(client.groups_of(&nurse), vec![&env, Group::Nurses]);
    let members = client.group_members(&Group::Nurses);
    assert_eq!(members.len(), 1);
}

#[test]
fn role_capabilities_parse_boundary() {
    let (env, client, _root) = setup();
    let caps = client.role_capabilities(&String::from_str(&env, "doctor"));
    assert!(caps.can_prescribe);
    assert!(caps.is_medical_staff);

    assert_eq!(
        client.try_role_capabilities(&String::from_str(&env, "surgeon")),
        Err(Ok(AccessError::UnknownRole))
    );
}

#[test]
fn update_patient_respects_validation() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);
    let pid = own_patient_id(&client, &patient);

    client.update_patient(&patient, &pid, &631_152_000, &BloodType::AbPos);
    let record = client.get_patient(&patient, &pid);
    assert_eq!(record.blood_type, BloodType::AbPos);
    assert_eq!(record.date_of_birth, 631_152_000);

    // A birth date in the future is rejected.
    let future = env.ledger().timestamp() + 1;
    assert_eq!(
        client.try_update_patient(&patient, &pid, &future, &BloodType::AbPos),
        Err(Ok(AccessError::InvalidInput))
    );
}

#[test]
fn profile_updates_keep_role_invariants() {
    let (env, client, root) = setup();
    let patient = mk_user(&env, &client, &root, Role::Patient);

    assert_eq!(
        client.try_update_profile(
            &patient,
            &patient,
            &String::from_str(&env, ""),
            &String::from_str(&env, "MD-1"),
            &String::from_str(&env, ""),
        ),
        Err(Ok(AccessError::LicenseForbidden))
    );

    client.update_profile(
        &patient,
        &patient,
        &String::from_str(&env, ""),
        &String::from_str(&env, ""),
        &String::from_str(&env, "555-0123"),
    );
    assert_eq!(
        client.get_profile(&patient, &patient).phone,
        String::from_str(&env, "555-0123")
    );
}
