//! Group/role synchronization. Group membership is a derived, single-valued
//! projection of the current role, consumed by secondary permission systems;
//! it is never edited directly and the engine itself never reads it.

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use common::access::{role_to_group, Group, ALL_GROUPS};
use common::error::AccessError;

pub fn member_key(group: &Group) -> (Symbol, Group) {
    (symbol_short!("GRP_MEM"), *group)
}

pub fn user_groups_key(user: &Address) -> (Symbol, Address) {
    (symbol_short!("USR_GRP"), user.clone())
}

/// Groups the principal currently belongs to. Exactly one after any sync.
pub fn groups_of(env: &Env, user: &Address) -> Vec<Group> {
    env.storage()
        .persistent()
        .get(&user_groups_key(user))
        .unwrap_or(Vec::new(env))
}

/// Members of a group; the group is created lazily on first insertion.
pub fn members_of(env: &Env, group: &Group) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&member_key(group))
        .unwrap_or(Vec::new(env))
}

fn remove_member(env: &Env, group: &Group, user: &Address) {
    let members = members_of(env, group);
    if !members.contains(user) {
        return;
    }
    let mut kept = Vec::new(env);
    for member in members.iter() {
        if member != *user {
            kept.push_back(member);
        }
    }
    env.storage().persistent().set(&member_key(group), &kept);
}

fn add_member(env: &Env, group: &Group, user: &Address) {
    let mut members = members_of(env, group);
    if !members.contains(user) {
        members.push_back(user.clone());
        env.storage().persistent().set(&member_key(group), &members);
    }
}

/// Strip a principal from every group; used by profile deletion.
pub fn remove_from_all_groups(env: &Env, user: &Address) {
    for group in ALL_GROUPS {
        remove_member(env, &group, user);
    }
    env.storage().persistent().remove(&user_groups_key(user));
}

/// Reconcile a principal's membership to exactly the group derived from its
/// current role. Idempotent; runs inside the invocation that mutated the
/// role, so a reader never observes zero or two memberships.
pub fn sync_group(env: &Env, user: &Address) -> Result<(), AccessError> {
    let profile = crate::get_profile_opt(env, user).ok_or(AccessError::GroupSyncFailure)?;
    let target = role_to_group(profile.role);

    for group in ALL_GROUPS {
        if group != target {
            remove_member(env, &group, user);
        }
    }
    add_member(env, &target, user);

    let mut memberships = Vec::new(env);
    memberships.push_back(target);
    env.storage()
        .persistent()
        .set(&user_groups_key(user), &memberships);

    crate::audit::group_synced(env, user, target);
    Ok(())
}
