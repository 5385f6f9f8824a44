//! Rendering of port lists for display.
//!
//! The text report is the stable, human-facing output:
//!
//! ```text
//! Available serial ports:
//!
//! * COM3 - USB Serial Device
//! * COM4 - Arduino Uno
//! ```
//!
//! All functions here are pure; printing is left to the caller.

use crate::port::PortInfo;

/// Message rendered when no ports were found.
pub const NO_PORTS_MESSAGE: &str = "No serial port is being used";

/// Header line of a non-empty report.
pub const REPORT_HEADER: &str = "Available serial ports:";

/// Format a single report line: `* <identifier> - <description>`.
pub fn format_port_line(port: &PortInfo) -> String {
    format!("* {} - {}", port.identifier, port.description)
}

/// Format the text report for `ports`, in the given order.
///
/// The result has no trailing newline.
pub fn format_report(ports: &[PortInfo]) -> String {
    if ports.is_empty() {
        return NO_PORTS_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(ports.len() + 2);
    lines.push(REPORT_HEADER.to_string());
    lines.push(String::new());
    lines.extend(
        ports
            .iter()
            .map(format_port_line),
    );
    lines.join("\n")
}

/// Format `ports` as a pretty-printed JSON array.
#[cfg(feature = "serde")]
pub fn format_report_json(ports: &[PortInfo]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(ports)?)
}
