//! Default node address resolution.

use crate::adapters::live::hardware::LiveHardwareAddress;
use crate::ports::{HardwareAddressSource, NodeAddressError};

/// Resolves the node address a generator uses when none is configured.
///
/// Reads the host's hardware address; on any failure draws a random one.
/// Never fails.
#[must_use]
pub fn resolve_default_node_address() -> i64 {
    resolve_node_address_with(&LiveHardwareAddress)
}

/// Resolves a node address from the given hardware source, falling back to a
/// random value when the source has nothing usable. The all-zero address
/// counts as unusable.
#[must_use]
pub fn resolve_node_address_with(source: &dyn HardwareAddressSource) -> i64 {
    let bytes = source.hardware_address().and_then(|bytes| {
        if bytes == [0; 6] {
            Err(NodeAddressError::Unassigned)
        } else {
            Ok(bytes)
        }
    });
    match bytes {
        Ok(bytes) => address_from_bytes(bytes),
        Err(e) => {
            let fallback = rand::random::<i64>();
            tracing::debug!(error = %e, fallback, "using random node address");
            fallback
        }
    }
}

/// Reads the bytes as a signed big-endian integer, sign-extended to 64 bits.
#[must_use]
pub fn address_from_bytes(bytes: [u8; 6]) -> i64 {
    let init: i64 = if bytes[0] & 0x80 == 0 { 0 } else { -1 };
    bytes.iter().fold(init, |acc, &b| (acc << 8) | i64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHardware(Option<[u8; 6]>);

    impl HardwareAddressSource for FixedHardware {
        fn hardware_address(&self) -> Result<[u8; 6], NodeAddressError> {
            self.0.ok_or(NodeAddressError::NotFound)
        }
    }

    #[test]
    fn positive_address_reads_big_endian() {
        let bytes = [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e];
        assert_eq!(address_from_bytes(bytes), 0x001a_2b3c_4d5e);
    }

    #[test]
    fn high_bit_sign_extends() {
        assert_eq!(address_from_bytes([0xff; 6]), -1);
        assert_eq!(address_from_bytes([0x80, 0, 0, 0, 0, 0]), -(1 << 47));
    }

    #[test]
    fn uses_hardware_address_when_available() {
        let source = FixedHardware(Some([0, 0, 0, 0, 0, 42]));
        assert_eq!(resolve_node_address_with(&source), 42);
    }

    #[test]
    fn falls_back_to_random_on_failure() {
        let source = FixedHardware(None);
        let a = resolve_node_address_with(&source);
        let b = resolve_node_address_with(&source);
        // Two 64-bit draws colliding is not a realistic outcome.
        assert_ne!(a, b);
    }

    #[test]
    fn all_zero_address_falls_back_to_random() {
        let source = FixedHardware(Some([0; 6]));
        let a = resolve_node_address_with(&source);
        let b = resolve_node_address_with(&source);
        assert_ne!(a, b);
    }

    #[test]
    fn default_resolution_never_panics() {
        let _ = resolve_default_node_address();
    }
}
