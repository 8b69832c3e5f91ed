//! Hardware address port used to default a generator's node address.

/// Errors from looking up the host's hardware address.
#[derive(Debug, thiserror::Error)]
pub enum NodeAddressError {
    /// The host has no interface with a hardware address.
    #[error("no network interface with a hardware address")]
    NotFound,
    /// The interface reported the all-zero address.
    #[error("hardware address is all zeros")]
    Unassigned,
    /// The platform lookup itself failed.
    #[error("hardware address lookup failed: {0}")]
    Lookup(String),
}

/// Looks up the host's 6-byte hardware (MAC) address.
pub trait HardwareAddressSource: Send + Sync {
    /// Returns the address bytes in network order.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable address could be found.
    fn hardware_address(&self) -> Result<[u8; 6], NodeAddressError>;
}
