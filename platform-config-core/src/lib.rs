//! Board-agnostic platform configuration map
//!
//! Platform firmware looks up named integer settings (memory thresholds,
//! GPIO settings, core counts, debug cookie addresses) in a table that is
//! fixed when the image is built. This crate holds the types every board
//! table is made of:
//!
//! - [`ConfigurationEntry`] - one `(name, value)` pair
//! - [`ConfigurationTable`] - the ordered, terminator-ended sequence
//! - [`ConfigurationDescriptorEx`] - the C-layout rendering of an entry
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┬──────────────┬─────┬──────────────────────────┐
//! │ entry 0      │ entry 1      │ ... │ ("Terminator", 0xFFFFFFFF)│
//! └──────────────┴──────────────┴─────┴──────────────────────────┘
//! ```
//!
//! Scanning consumers walk from the start and stop at the terminator.
//! Rust callers should prefer [`ConfigurationTable::get`], which is bounded
//! by the slice length and reports a miss as `None`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod descriptor;
pub mod entry;
pub mod table;

pub use descriptor::{scan_descriptors, ConfigurationDescriptorEx, MAX_NAME_LEN};
pub use entry::{ConfigValue, ConfigurationEntry, TERMINATOR, TERMINATOR_NAME, TERMINATOR_VALUE};
pub use table::{is_terminated, ConfigurationTable, ScanResult, TableError};
