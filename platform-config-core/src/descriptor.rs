//! C-layout configuration descriptors
//!
//! Firmware written in C consumes the table as an array of fixed-size
//! records:
//!
//! ```text
//! ┌──────────────────────────────┬──────────┐
//! │ NAME (NUL-padded ASCII)      │ VALUE    │
//! │ 64B                          │ 8B (LE)  │
//! └──────────────────────────────┴──────────┘
//! ```
//!
//! The array ends with the terminator record, exactly like the Rust table.

use crate::entry::{ConfigValue, ConfigurationEntry, TERMINATOR_NAME, TERMINATOR_VALUE};
use crate::table::ScanResult;

/// Size of the inline name field, NUL terminator included
pub const MAX_NAME_LEN: usize = 64;

/// One entry in C layout
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ConfigurationDescriptorEx {
    name: [u8; MAX_NAME_LEN],
    value: ConfigValue,
}

impl ConfigurationDescriptorEx {
    /// Record with an empty name and zero value
    pub const EMPTY: Self = Self {
        name: [0; MAX_NAME_LEN],
        value: 0,
    };

    /// Render an entry
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) if the name does not
    /// fit with its NUL terminator.
    pub const fn from_entry(entry: &ConfigurationEntry) -> Self {
        let bytes = entry.name.as_bytes();
        assert!(bytes.len() < MAX_NAME_LEN, "configuration name too long");

        let mut name = [0u8; MAX_NAME_LEN];
        let mut i = 0;
        while i < bytes.len() {
            name[i] = bytes[i];
            i += 1;
        }

        Self {
            name,
            value: entry.value,
        }
    }

    /// Render a whole entry array, keeping order
    pub const fn from_entries<const N: usize>(entries: &[ConfigurationEntry; N]) -> [Self; N] {
        let mut out = [Self::EMPTY; N];
        let mut i = 0;
        while i < N {
            out[i] = Self::from_entry(&entries[i]);
            i += 1;
        }
        out
    }

    /// Name bytes up to the first NUL
    pub fn name_bytes(&self) -> &[u8] {
        let len = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_NAME_LEN);
        &self.name[..len]
    }

    /// Name as text, if it is valid UTF-8
    pub fn name(&self) -> Option<&str> {
        core::str::from_utf8(self.name_bytes()).ok()
    }

    /// Configured value
    pub const fn value(&self) -> ConfigValue {
        self.value
    }

    /// Check whether this is the terminator record
    pub fn is_terminator(&self) -> bool {
        self.value == TERMINATOR_VALUE && self.name_bytes() == TERMINATOR_NAME.as_bytes()
    }
}

impl core::fmt::Debug for ConfigurationDescriptorEx {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigurationDescriptorEx")
            .field("name", &self.name().unwrap_or("<invalid>"))
            .field("value", &format_args!("{:#x}", self.value))
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigurationDescriptorEx {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=[u8]:a} = {=u64:#x}",
            self.name_bytes(),
            self.value
        );
    }
}

/// Scan a descriptor array the way C consumers do
///
/// Stops at the first match or at the terminator record.
pub fn scan_descriptors(descriptors: &[ConfigurationDescriptorEx], name: &str) -> ScanResult {
    for descriptor in descriptors {
        if descriptor.is_terminator() {
            break;
        }
        if descriptor.name_bytes() == name.as_bytes() {
            return ScanResult::Found(descriptor.value);
        }
    }

    ScanResult::NotFound
}
