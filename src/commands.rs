//! DDC/CI request construction.

use std::{fmt, iter};

use log::debug;

use crate::{DDC_CI_ADDRESS, SUB_ADDRESS_DDC_CI};

/// Set VCP Feature opcode
const OP_SET_VCP_FEATURE: u8 = 0x03;

/// VCP feature code of the backlight luminance control
pub const FEATURE_BRIGHTNESS: u8 = 0x10;

/// Longest payload representable in the single-byte length field.
const MAX_PAYLOAD: usize = 32;

/// A framed DDC/CI request, ready to be written to the bus as one
/// transaction.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Packet {
    data: [u8; 2 + MAX_PAYLOAD],
    len: u8,
}

impl Packet {
    /// The wire representation of the request.
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Packet")
            .field("bytes", &self.bytes())
            .finish()
    }
}

/// A Set VCP Feature request.
#[derive(Copy, Clone, Debug)]
pub struct SetVcpFeature {
    /// VCP feature code to write
    pub code: u8,
    /// New value for the feature
    pub value: u8,
}

impl SetVcpFeature {
    /// Request a new backlight luminance.
    pub fn brightness(value: u8) -> Self {
        SetVcpFeature {
            code: FEATURE_BRIGHTNESS,
            value,
        }
    }

    /// Frame the request for transmission.
    pub fn encode(&self) -> Packet {
        encode(&[
            SUB_ADDRESS_DDC_CI,
            OP_SET_VCP_FEATURE,
            self.code,
            0x00,
            self.value,
        ])
    }
}

/// Frame a raw command payload.
///
/// The payload is prefixed with its length (high bit set) and suffixed with a
/// checksum such that a receiver XOR-ing the slave address with every byte it
/// saw on the wire ends up with zero.
fn encode(payload: &[u8]) -> Packet {
    assert!(payload.len() <= MAX_PAYLOAD);

    let mut data = [0u8; 2 + MAX_PAYLOAD];
    data[0] = 0x80 | payload.len() as u8;
    data[1..1 + payload.len()].copy_from_slice(payload);
    // The slave address is handled by bus addressing rather than payload
    // framing, so it participates in the checksum as a virtual first byte.
    data[1 + payload.len()] = checksum(
        iter::once(0x80 ^ DDC_CI_ADDRESS as u8)
            .chain(data[..1 + payload.len()].iter().cloned()),
    );
    debug!("framed packet: {:02x?}", &data[..2 + payload.len()]);

    Packet {
        data,
        len: (2 + payload.len()) as u8,
    }
}

fn checksum<II: IntoIterator<Item = u8>>(iter: II) -> u8 {
    iter.into_iter().fold(0u8, |sum, v| sum ^ v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_packet_layout() {
        let packet = SetVcpFeature::brightness(75).encode();
        assert_eq!(packet.bytes(), [0x85, 0x51, 0x03, 0x10, 0x00, 0x4b, 0x3b]);
    }

    #[test]
    fn checksum_folds_to_zero() {
        for value in 0..=255u8 {
            let packet = SetVcpFeature::brightness(value).encode();
            assert_eq!(packet.bytes().len(), 7);
            let folded = packet
                .bytes()
                .iter()
                .copied()
                .fold(0x80 ^ DDC_CI_ADDRESS as u8, |sum, v| sum ^ v);
            assert_eq!(folded, 0, "checksum mismatch for value {}", value);
        }
    }
}
