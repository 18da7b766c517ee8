//! Terminator-ended configuration tables
//!
//! A table is an ordered slice of entries whose last element is the
//! [`TERMINATOR`](crate::TERMINATOR). Order is authoring order and nothing
//! after the terminator is ever consulted.

use crate::entry::{str_eq, ConfigValue, ConfigurationEntry, TERMINATOR_NAME, TERMINATOR_VALUE};

/// Outcome of a linear scan for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanResult {
    /// Key matched; carries the entry value
    Found(ConfigValue),
    /// Terminator (or end of slice) reached without a match
    NotFound,
}

impl ScanResult {
    /// Convert into an `Option`
    pub fn value(self) -> Option<ConfigValue> {
        match self {
            ScanResult::Found(value) => Some(value),
            ScanResult::NotFound => None,
        }
    }
}

/// Table invariant violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Table has no entries at all
    Empty,
    /// Last entry is not the terminator
    MissingTerminator,
    /// Reserved terminator name used before the end
    EarlyTerminator { index: usize },
    /// Reserved sentinel value used before the end
    SentinelValue { index: usize },
    /// Two entries share a name
    DuplicateName { first: usize, second: usize },
}

/// Check that a slice ends with the terminator entry
///
/// Usable in const assertions on statically authored tables.
pub const fn is_terminated(entries: &[ConfigurationEntry]) -> bool {
    match entries.last() {
        Some(last) => last.is_terminator(),
        None => false,
    }
}

/// Read-only view over a static configuration table
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationTable {
    entries: &'static [ConfigurationEntry],
}

impl ConfigurationTable {
    /// Wrap a static, terminator-ended entry slice
    pub const fn new(entries: &'static [ConfigurationEntry]) -> Self {
        Self { entries }
    }

    /// Raw entries, terminator included
    ///
    /// This is the view sentinel-scanning consumers work from.
    pub const fn entries(&self) -> &'static [ConfigurationEntry] {
        self.entries
    }

    /// Entries before the first terminator
    pub fn body(&self) -> &'static [ConfigurationEntry] {
        let end = self
            .entries
            .iter()
            .position(ConfigurationEntry::is_terminator)
            .unwrap_or(self.entries.len());
        &self.entries[..end]
    }

    /// Iterate over the configured entries, stopping at the terminator
    pub fn iter(&self) -> core::slice::Iter<'static, ConfigurationEntry> {
        self.body().iter()
    }

    /// Number of configured entries (terminator excluded)
    pub fn len(&self) -> usize {
        self.body().len()
    }

    /// Check if the table configures nothing
    pub fn is_empty(&self) -> bool {
        self.body().is_empty()
    }

    /// Scan from the start for `name`
    ///
    /// Stops at the first exact match or at the terminator. A table that
    /// lacks a terminator is bounded by its slice length instead.
    pub fn scan(&self, name: &str) -> ScanResult {
        for entry in self.entries {
            if entry.is_terminator() {
                break;
            }
            if entry.name == name {
                return ScanResult::Found(entry.value);
            }
        }

        ScanResult::NotFound
    }

    /// Look up a value by name
    pub fn get(&self, name: &str) -> Option<ConfigValue> {
        let value = self.scan(name).value();

        #[cfg(feature = "defmt")]
        if value.is_none() {
            defmt::debug!("Configuration key not found: {}", name);
        }

        value
    }

    /// Check if a key is configured
    pub fn contains(&self, name: &str) -> bool {
        self.scan(name) != ScanResult::NotFound
    }

    /// Check every table invariant
    ///
    /// The terminator must be last and unique, the sentinel value must not
    /// appear anywhere else, and names must be unique.
    pub fn validate(&self) -> Result<(), TableError> {
        let (last, body) = self.entries.split_last().ok_or(TableError::Empty)?;

        if !last.is_terminator() {
            return Err(TableError::MissingTerminator);
        }

        for (index, entry) in body.iter().enumerate() {
            if str_eq(entry.name, TERMINATOR_NAME) {
                return Err(TableError::EarlyTerminator { index });
            }
            if entry.value == TERMINATOR_VALUE {
                return Err(TableError::SentinelValue { index });
            }
        }

        for (first, a) in body.iter().enumerate() {
            for (offset, b) in body[first + 1..].iter().enumerate() {
                if a.name == b.name {
                    return Err(TableError::DuplicateName {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        Ok(())
    }

    /// Log a summary of the table
    #[cfg(feature = "defmt")]
    pub fn log_summary(&self) {
        defmt::info!("Configuration map: {} entries", self.len());
        for entry in self.iter() {
            defmt::debug!("  {} = {=u64:#x}", entry.name, entry.value);
        }
    }
}

impl IntoIterator for &ConfigurationTable {
    type Item = &'static ConfigurationEntry;
    type IntoIter = core::slice::Iter<'static, ConfigurationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::TERMINATOR;
    use proptest::prelude::*;

    static SAMPLE: [ConfigurationEntry; 4] = [
        ConfigurationEntry::new("NumCpus", 8),
        ConfigurationEntry::new("EnableShell", 0x1),
        ConfigurationEntry::new("SharedIMEMBaseAddr", 0x14680000),
        TERMINATOR,
    ];

    static SAMPLE_TABLE: ConfigurationTable = ConfigurationTable::new(&SAMPLE);

    #[test]
    fn test_scan_found() {
        assert_eq!(SAMPLE_TABLE.scan("NumCpus"), ScanResult::Found(8));
        assert_eq!(SAMPLE_TABLE.get("SharedIMEMBaseAddr"), Some(0x14680000));
        assert!(SAMPLE_TABLE.contains("EnableShell"));
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        assert_eq!(SAMPLE_TABLE.scan("numcpus"), ScanResult::NotFound);
        assert_eq!(SAMPLE_TABLE.get("NumCpus "), None);
    }

    #[test]
    fn test_terminator_is_not_a_key() {
        assert_eq!(SAMPLE_TABLE.scan(TERMINATOR_NAME), ScanResult::NotFound);
        assert!(!SAMPLE_TABLE.contains("Terminator"));
    }

    #[test]
    fn test_scan_stops_at_terminator() {
        static TRAILING: [ConfigurationEntry; 3] = [
            ConfigurationEntry::new("NumCpus", 8),
            TERMINATOR,
            ConfigurationEntry::new("Hidden", 1),
        ];
        let table = ConfigurationTable::new(&TRAILING);

        assert_eq!(table.get("Hidden"), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries().len(), 3);
    }

    #[test]
    fn test_scan_without_terminator_is_bounded() {
        static UNTERMINATED: [ConfigurationEntry; 1] = [ConfigurationEntry::new("NumCpus", 8)];
        let table = ConfigurationTable::new(&UNTERMINATED);

        assert_eq!(table.get("Missing"), None);
        assert_eq!(table.get("NumCpus"), Some(8));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iter_excludes_terminator() {
        let names: heapless::Vec<&str, 8> = SAMPLE_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.as_slice(), &["NumCpus", "EnableShell", "SharedIMEMBaseAddr"]);
        assert_eq!(SAMPLE_TABLE.len(), 3);
        assert!(!SAMPLE_TABLE.is_empty());
        assert_eq!((&SAMPLE_TABLE).into_iter().count(), 3);
    }

    #[test]
    fn test_is_terminated() {
        const OK: bool = is_terminated(&SAMPLE);
        assert!(OK);
        assert!(!is_terminated(&[]));
        assert!(!is_terminated(&SAMPLE[..3]));
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(SAMPLE_TABLE.validate(), Ok(()));
    }

    #[test]
    fn test_validate_terminator_only() {
        static ONLY: [ConfigurationEntry; 1] = [TERMINATOR];
        let table = ConfigurationTable::new(&ONLY);

        assert_eq!(table.validate(), Ok(()));
        assert!(table.is_empty());
    }

    #[test]
    fn test_validate_empty() {
        let table = ConfigurationTable::new(&[]);
        assert_eq!(table.validate(), Err(TableError::Empty));
    }

    #[test]
    fn test_validate_missing_terminator() {
        let table = ConfigurationTable::new(&SAMPLE[..2]);
        assert_eq!(table.validate(), Err(TableError::MissingTerminator));
    }

    #[test]
    fn test_validate_early_terminator() {
        static EARLY: [ConfigurationEntry; 3] = [
            ConfigurationEntry::new("NumCpus", 8),
            ConfigurationEntry::new("Terminator", 0),
            TERMINATOR,
        ];
        let table = ConfigurationTable::new(&EARLY);
        assert_eq!(table.validate(), Err(TableError::EarlyTerminator { index: 1 }));
    }

    #[test]
    fn test_validate_sentinel_value() {
        static SENTINEL: [ConfigurationEntry; 2] = [
            ConfigurationEntry::new("MaxLogFileSize", TERMINATOR_VALUE),
            TERMINATOR,
        ];
        let table = ConfigurationTable::new(&SENTINEL);
        assert_eq!(table.validate(), Err(TableError::SentinelValue { index: 0 }));
    }

    #[test]
    fn test_validate_duplicate_name() {
        static DUPLICATE: [ConfigurationEntry; 4] = [
            ConfigurationEntry::new("NumCpus", 8),
            ConfigurationEntry::new("EnableShell", 1),
            ConfigurationEntry::new("NumCpus", 4),
            TERMINATOR,
        ];
        let table = ConfigurationTable::new(&DUPLICATE);
        assert_eq!(
            table.validate(),
            Err(TableError::DuplicateName { first: 0, second: 2 })
        );
        // First match wins for scanning consumers
        assert_eq!(table.get("NumCpus"), Some(8));
    }

    proptest! {
        #[test]
        fn prop_unknown_keys_not_found(name in "[a-z][A-Za-z0-9_]{0,31}") {
            // Every sample key starts with an uppercase letter
            prop_assert_eq!(SAMPLE_TABLE.scan(&name), ScanResult::NotFound);
            prop_assert_eq!(SAMPLE_TABLE.get(&name), None);
        }

        #[test]
        fn prop_every_entry_is_reachable(index in 0usize..3) {
            let entry = &SAMPLE[index];
            prop_assert_eq!(SAMPLE_TABLE.get(entry.name), Some(entry.value));
        }
    }
}
