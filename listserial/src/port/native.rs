//! Native port enumeration using the `serialport` crate.
//!
//! This module queries the platform's device metadata (udev/sysfs on Linux,
//! IOKit on macOS, SetupAPI on Windows) through `serialport`.

use {
    crate::{
        error::Result,
        port::{PortEnumerator, PortInfo, PortKind},
    },
    log::{debug, trace},
    serialport::{SerialPortInfo, SerialPortType},
};

/// Native port enumerator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePortEnumerator;

impl PortEnumerator for NativePortEnumerator {
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        let ports = serialport::available_ports()?;
        debug!("OS reported {} serial port(s)", ports.len());

        Ok(ports
            .into_iter()
            .filter_map(|p| {
                if p.port_name
                    .is_empty()
                {
                    debug!("Skipping port with empty name ({:?})", p.port_type);
                    return None;
                }

                let info = PortInfo::from(p);
                trace!(
                    "Found {} port: {} ({})",
                    info.kind
                        .name(),
                    info.identifier,
                    info.description
                );
                Some(info)
            })
            .collect())
    }
}

impl From<SerialPortInfo> for PortInfo {
    fn from(port: SerialPortInfo) -> Self {
        match port.port_type {
            SerialPortType::UsbPort(usb) => {
                let description = usb
                    .product
                    .as_deref()
                    .filter(|s| {
                        !s.trim()
                            .is_empty()
                    })
                    .or(usb
                        .manufacturer
                        .as_deref());
                Self::new(port.port_name, description).with_kind(PortKind::Usb)
            },
            SerialPortType::PciPort => Self::new(port.port_name, None).with_kind(PortKind::Pci),
            SerialPortType::BluetoothPort => {
                Self::new(port.port_name, None).with_kind(PortKind::Bluetooth)
            },
            SerialPortType::Unknown => Self::new(port.port_name, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::port::DESCRIPTION_FALLBACK, serialport::UsbPortInfo};

    fn usb(product: Option<&str>, manufacturer: Option<&str>) -> SerialPortType {
        SerialPortType::UsbPort(UsbPortInfo {
            vid: 0x2341,
            pid: 0x0043,
            serial_number: None,
            manufacturer: manufacturer.map(str::to_string),
            product: product.map(str::to_string),
        })
    }

    fn info(name: &str, port_type: SerialPortType) -> SerialPortInfo {
        SerialPortInfo {
            port_name: name.to_string(),
            port_type,
        }
    }

    #[test]
    fn test_list_ports() {
        // Only verifies that enumeration doesn't panic on this host
        let _ = NativePortEnumerator.list_ports();
    }

    #[test]
    fn test_usb_port_uses_product() {
        let port = PortInfo::from(info(
            "/dev/ttyACM0",
            usb(Some("Arduino Uno"), Some("Arduino (www.arduino.cc)")),
        ));
        assert_eq!(port.identifier, "/dev/ttyACM0");
        assert_eq!(port.description, "Arduino Uno");
        assert_eq!(port.kind, PortKind::Usb);
    }

    #[test]
    fn test_usb_port_falls_back_to_manufacturer() {
        let port = PortInfo::from(info("COM5", usb(None, Some("FTDI"))));
        assert_eq!(port.description, "FTDI");

        let port = PortInfo::from(info("COM5", usb(Some(" "), Some("wch.cn"))));
        assert_eq!(port.description, "wch.cn");
    }

    #[test]
    fn test_usb_port_without_strings_uses_marker() {
        let port = PortInfo::from(info("/dev/ttyUSB0", usb(None, None)));
        assert_eq!(port.description, DESCRIPTION_FALLBACK);
        assert_eq!(port.kind, PortKind::Usb);
    }

    #[test]
    fn test_non_usb_ports_use_marker() {
        let pci = PortInfo::from(info("/dev/ttyS4", SerialPortType::PciPort));
        assert_eq!(pci.kind, PortKind::Pci);
        assert_eq!(pci.description, DESCRIPTION_FALLBACK);

        let bt = PortInfo::from(info("/dev/rfcomm0", SerialPortType::BluetoothPort));
        assert_eq!(bt.kind, PortKind::Bluetooth);
        assert_eq!(bt.description, DESCRIPTION_FALLBACK);

        let uart = PortInfo::from(info("/dev/ttyS0", SerialPortType::Unknown));
        assert_eq!(uart.kind, PortKind::Unknown);
        assert_eq!(uart.description, DESCRIPTION_FALLBACK);
    }
}
