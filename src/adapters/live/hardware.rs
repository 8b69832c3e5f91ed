//! Live adapter for the `HardwareAddressSource` port.

use crate::ports::{HardwareAddressSource, NodeAddressError};

/// Reads the MAC address of the host's first active interface.
pub struct LiveHardwareAddress;

impl HardwareAddressSource for LiveHardwareAddress {
    fn hardware_address(&self) -> Result<[u8; 6], NodeAddressError> {
        let mac = mac_address::get_mac_address()
            .map_err(|e| NodeAddressError::Lookup(e.to_string()))?
            .ok_or(NodeAddressError::NotFound)?;
        Ok(mac.bytes())
    }
}
