//! Platform configuration map for the ZTE NP05J (Kaanapali platform)
//!
//! The entries live in `config_map.toml` next to this crate. The build
//! script validates them and generates a constant array with the terminator
//! appended, so the table is fixed when the firmware image is built and is
//! never mutated afterwards.
//!
//! Two views are exported:
//!
//! - [`get_configuration_map`] for Rust callers
//! - [`GetPlatformConfigurationMap`] for C callers, returning a pointer to a
//!   terminator-ended [`ConfigurationDescriptorEx`] array

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub use platform_config_core::{ConfigurationDescriptorEx, ConfigurationEntry, ConfigurationTable};

use platform_config_core::{is_terminated, TERMINATOR};

include!(concat!(env!("OUT_DIR"), "/config_map.rs"));

const _: () = assert!(is_terminated(&ENTRIES), "configuration map must end with the terminator");

static CONFIGURATION_MAP: ConfigurationTable = ConfigurationTable::new(&ENTRIES);

static DESCRIPTORS: [ConfigurationDescriptorEx; ENTRIES.len()] =
    ConfigurationDescriptorEx::from_entries(&ENTRIES);

/// Get the board configuration map
///
/// Always the same static table, ending with the terminator entry.
pub fn get_configuration_map() -> &'static ConfigurationTable {
    &CONFIGURATION_MAP
}

/// Get the board configuration map in C layout, terminator included
pub fn descriptors() -> &'static [ConfigurationDescriptorEx] {
    &DESCRIPTORS
}

/// C entry point for platform initialization code
///
/// The returned array is static and ends with the terminator record.
#[allow(unsafe_code)] // no_mangle
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn GetPlatformConfigurationMap() -> *const ConfigurationDescriptorEx {
    DESCRIPTORS.as_ptr()
}
