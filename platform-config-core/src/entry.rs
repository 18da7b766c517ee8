//! Configuration entries and the terminator sentinel

/// Value type carried by every entry
///
/// Authored values are all 32-bit; the field is 64 bits wide to match the
/// extended descriptor layout.
pub type ConfigValue = u64;

/// Name of the reserved entry that ends every table
pub const TERMINATOR_NAME: &str = "Terminator";

/// Value of the reserved entry that ends every table
pub const TERMINATOR_VALUE: ConfigValue = 0xFFFF_FFFF;

/// The terminator entry itself
pub const TERMINATOR: ConfigurationEntry = ConfigurationEntry::new(TERMINATOR_NAME, TERMINATOR_VALUE);

/// A single named configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationEntry {
    /// Case-sensitive identifier, unique within its table
    pub name: &'static str,
    /// Configured value
    pub value: ConfigValue,
}

impl ConfigurationEntry {
    /// Create a new entry
    pub const fn new(name: &'static str, value: ConfigValue) -> Self {
        Self { name, value }
    }

    /// Check whether this is the terminator sentinel
    ///
    /// Both the name and the value must match.
    pub const fn is_terminator(&self) -> bool {
        self.value == TERMINATOR_VALUE && str_eq(self.name, TERMINATOR_NAME)
    }
}

/// Byte-wise string equality usable in const context
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}
