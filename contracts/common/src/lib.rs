#![no_std]

pub mod access;
pub mod error;

pub use access::{
    capabilities_of, display_fields_for, parse_role, role_name, role_to_group, Action,
    CapabilitySet, Group, RecordKind, Role,
};
pub use error::AccessError;
