//! Port discovery abstraction.
//!
//! This module provides a `PortEnumerator` trait that abstracts over the
//! platform's device-enumeration facility:
//!
//! - **Native platforms** (Linux, macOS, Windows): uses the `serialport` crate
//! - **Fixed**: an in-memory list, for tests and embedding
//!
//! ## Architecture
//!
//! Enumeration is a read-only query. The enumerator is passed around as a
//! value, so callers (the report formatter, the CLI) never reach for a global
//! OS handle and can be exercised against a fixed port list.
//!
//! ```text
//! +------------------+     +------------------+
//! |  Report / CLI    |     |  Report / CLI    |
//! +--------+---------+     +--------+---------+
//!          |                        |
//!          v                        v
//! +--------+---------+     +--------+---------+
//! | PortEnumerator   |     | PortEnumerator   |
//! +--------+---------+     +--------+---------+
//!          |                        |
//!          v                        v
//! +--------+---------+     +--------+---------+
//! | NativeEnumerator |     | FixedEnumerator  |
//! |   (serialport)   |     |   (Vec<PortInfo>)|
//! +------------------+     +------------------+
//!       Desktop                 Tests
//! ```
//!
//! ## Example
//!
//! ```rust
//! use listserial::port::{FixedPortEnumerator, PortEnumerator, PortInfo};
//!
//! let enumerator = FixedPortEnumerator::new(vec![PortInfo::new("COM3", Some("Arduino Uno"))]);
//! let ports = enumerator.list_ports().unwrap();
//! assert_eq!(ports[0].identifier, "COM3");
//! ```

#[cfg(feature = "native")]
pub mod native;

use crate::error::Result;

/// Description used when the OS supplies no label for a port.
pub const DESCRIPTION_FALLBACK: &str = "n/a";

/// Transport class the OS reported for a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PortKind {
    /// USB serial adapter or CDC device.
    Usb,
    /// PCI/PCIe serial card.
    Pci,
    /// Bluetooth serial link.
    Bluetooth,
    /// Built-in UART or anything the OS did not classify.
    #[default]
    Unknown,
}

impl PortKind {
    /// Get a human-readable name for the port kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Usb => "USB",
            Self::Pci => "PCI",
            Self::Bluetooth => "Bluetooth",
            Self::Unknown => "Unknown",
        }
    }
}

/// One discovered serial device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortInfo {
    /// OS-assigned device name (e.g., "COM3", "/dev/ttyUSB0").
    pub identifier: String,
    /// Human-readable label, or [`DESCRIPTION_FALLBACK`].
    pub description: String,
    /// Transport class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: PortKind,
}

impl PortInfo {
    /// Create port information, substituting the fallback marker for a
    /// missing or blank description. A present description is kept verbatim.
    ///
    /// `identifier` must be non-empty; enumerators drop nameless entries
    /// before constructing a `PortInfo`.
    pub fn new(identifier: impl Into<String>, description: Option<&str>) -> Self {
        let identifier = identifier.into();
        debug_assert!(!identifier.is_empty(), "port identifier must not be empty");

        let description = description
            .filter(|d| {
                !d.trim()
                    .is_empty()
            })
            .unwrap_or(DESCRIPTION_FALLBACK)
            .to_string();

        Self {
            identifier,
            description,
            kind: PortKind::Unknown,
        }
    }

    /// Set the transport class.
    #[must_use]
    pub fn with_kind(mut self, kind: PortKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether the OS supplied no description for this port.
    pub fn has_fallback_description(&self) -> bool {
        self.description == DESCRIPTION_FALLBACK
    }
}

/// Trait for listing available serial ports.
///
/// Implementations perform a read-only query; no device is opened.
pub trait PortEnumerator {
    /// List all serial ports currently present, in the order the OS reports
    /// them. An empty list is a normal result.
    fn list_ports(&self) -> Result<Vec<PortInfo>>;
}

impl<E: PortEnumerator + ?Sized> PortEnumerator for &E {
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        (**self).list_ports()
    }
}

/// Enumerator returning a fixed list of ports.
#[derive(Debug, Clone, Default)]
pub struct FixedPortEnumerator {
    ports: Vec<PortInfo>,
}

impl FixedPortEnumerator {
    /// Create an enumerator that always reports `ports`.
    pub fn new(ports: Vec<PortInfo>) -> Self {
        Self { ports }
    }
}

impl PortEnumerator for FixedPortEnumerator {
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        Ok(self
            .ports
            .clone())
    }
}

#[cfg(feature = "native")]
pub use native::NativePortEnumerator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_info_keeps_description() {
        let port = PortInfo::new("COM3", Some("USB Serial Device"));
        assert_eq!(port.identifier, "COM3");
        assert_eq!(port.description, "USB Serial Device");
        assert_eq!(port.kind, PortKind::Unknown);
        assert!(!port.has_fallback_description());
    }

    #[test]
    fn test_port_info_missing_description_uses_fallback() {
        let port = PortInfo::new("/dev/ttyUSB0", None);
        assert_eq!(port.description, DESCRIPTION_FALLBACK);
        assert!(port.has_fallback_description());
    }

    #[test]
    fn test_port_info_blank_description_uses_fallback() {
        assert_eq!(PortInfo::new("/dev/ttyUSB0", Some("")).description, "n/a");
        assert_eq!(PortInfo::new("/dev/ttyUSB0", Some("   ")).description, "n/a");
    }

    #[test]
    fn test_port_info_keeps_description_verbatim() {
        let port = PortInfo::new("COM4", Some("  Arduino Uno\n"));
        assert_eq!(port.description, "  Arduino Uno\n");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "port identifier must not be empty")]
    fn test_port_info_rejects_empty_identifier() {
        let _ = PortInfo::new("", Some("USB Serial Device"));
    }

    #[test]
    fn test_port_info_with_kind() {
        let port = PortInfo::new("COM4", Some("Arduino Uno")).with_kind(PortKind::Usb);
        assert_eq!(port.kind, PortKind::Usb);
        assert_eq!(port.kind.name(), "USB");
    }

    #[test]
    fn test_fixed_enumerator_preserves_order() {
        let enumerator = FixedPortEnumerator::new(vec![
            PortInfo::new("/dev/ttyS2", Some("Serial Port 2")),
            PortInfo::new("/dev/ttyS0", Some("Serial Port 0")),
            PortInfo::new("/dev/ttyS1", Some("Serial Port 1")),
        ]);

        let names: Vec<String> = enumerator
            .list_ports()
            .unwrap()
            .into_iter()
            .map(|p| p.identifier)
            .collect();
        assert_eq!(names, ["/dev/ttyS2", "/dev/ttyS0", "/dev/ttyS1"]);
    }

    #[test]
    fn test_fixed_enumerator_empty() {
        let enumerator = FixedPortEnumerator::default();
        assert!(enumerator
            .list_ports()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_enumerator_by_reference() {
        fn count<E: PortEnumerator>(enumerator: E) -> usize {
            enumerator
                .list_ports()
                .map(|p| p.len())
                .unwrap_or_default()
        }

        let enumerator = FixedPortEnumerator::new(vec![PortInfo::new("COM1", None)]);
        assert_eq!(count(&enumerator), 1);
        assert_eq!(count(&enumerator), 1);
    }
}
