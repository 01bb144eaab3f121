//! Audit trail published as contract events. Group-sync failures are also
//! counted in storage so operators can query how many reconciliations were
//! swallowed.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use common::access::{RecordKind, Role};

const SYNC_FAILURES: Symbol = symbol_short!("SYNC_ERR");

pub fn role_changed(env: &Env, actor: &Address, subject: &Address, from: Role, to: Role) {
    env.events().publish(
        (symbol_short!("role_chg"), subject.clone()),
        (actor.clone(), from, to),
    );
}

pub fn group_synced(env: &Env, user: &Address, group: common::access::Group) {
    env.events()
        .publish((symbol_short!("grp_sync"), user.clone()), group);
}

/// A reconciliation failed and was swallowed; the triggering write still
/// completed.
pub fn group_sync_failed(env: &Env, user: &Address) {
    let count: u64 = env
        .storage()
        .instance()
        .get(&SYNC_FAILURES)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(&SYNC_FAILURES, &count);
    env.events()
        .publish((symbol_short!("grp_sync"), symbol_short!("fail")), user.clone());
}

pub fn sync_failure_count(env: &Env) -> u64 {
    env.storage().instance().get(&SYNC_FAILURES).unwrap_or(0)
}

pub fn write_denied(env: &Env, actor: &Address, kind: RecordKind) {
    env.events()
        .publish((symbol_short!("denied"), actor.clone()), kind);
}
