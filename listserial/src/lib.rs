//! # listserial
//!
//! A library for enumerating the serial ports present on the host.
//!
//! This crate provides:
//!
//! - Port enumeration behind the [`PortEnumerator`] trait
//! - A native enumerator backed by the `serialport` crate
//! - Pure report formatting ([`format_report`])
//!
//! ## Supported Platforms
//!
//! - **Native** (default): Linux, macOS, Windows via the `serialport` crate
//!
//! ## Features
//!
//! - `native` (default): Native serial port enumeration
//! - `serde`: Serialization support and the JSON report
//!
//! ## Example
//!
//! ```rust,no_run
//! use listserial::format_report;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     #[cfg(feature = "native")]
//!     {
//!         let ports = listserial::discover_ports()?;
//!         println!("{}", format_report(&ports));
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod port;
pub mod report;

// Re-exports for convenience
#[cfg(feature = "native")]
pub use port::NativePortEnumerator;
#[cfg(feature = "serde")]
pub use report::format_report_json;
pub use {
    error::{Error, Result},
    port::{DESCRIPTION_FALLBACK, FixedPortEnumerator, PortEnumerator, PortInfo, PortKind},
    report::{NO_PORTS_MESSAGE, REPORT_HEADER, format_port_line, format_report},
};

/// Discover all serial ports using the native enumerator.
#[cfg(feature = "native")]
pub fn discover_ports() -> Result<Vec<PortInfo>> {
    NativePortEnumerator.list_ports()
}
