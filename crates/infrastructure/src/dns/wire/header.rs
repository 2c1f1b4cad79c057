use ferrous_query_domain::{Header, WireError, NIBBLE_MAX};

/// Size of the header section on the wire.
pub const HEADER_LEN: usize = 12;

const QR: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const AA: u16 = 1 << 10;
const TC: u16 = 1 << 9;
const RD: u16 = 1 << 8;
const RA: u16 = 1 << 7;

/// Serializes the DNS header section
pub struct HeaderEncoder;

impl HeaderEncoder {
    /// Pack the flags word.
    ///
    /// Layout, most significant bit first:
    /// `QR | Opcode(4) | AA | TC | RD | RA | Z | AD | CD | RCODE(4)`.
    /// `Z`, `AD` and `CD` are always 0.
    pub fn flags(header: &Header) -> Result<u16, WireError> {
        check_nibble("opcode", header.opcode)?;
        check_nibble("rcode", header.rcode)?;

        let mut flags = (u16::from(header.opcode) << OPCODE_SHIFT) | u16::from(header.rcode);
        if header.qr {
            flags |= QR;
        }
        if header.aa {
            flags |= AA;
        }
        if header.tc {
            flags |= TC;
        }
        if header.rd {
            flags |= RD;
        }
        if header.ra {
            flags |= RA;
        }
        Ok(flags)
    }

    /// Encode the header into its 12 bytes, every field big-endian.
    pub fn encode(header: &Header) -> Result<[u8; HEADER_LEN], WireError> {
        let flags = Self::flags(header)?;

        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&header.id.to_be_bytes());
        buf[2..4].copy_from_slice(&flags.to_be_bytes());
        buf[4..6].copy_from_slice(&header.qdcount.to_be_bytes());
        buf[6..8].copy_from_slice(&header.ancount.to_be_bytes());
        buf[8..10].copy_from_slice(&header.nscount.to_be_bytes());
        buf[10..12].copy_from_slice(&header.arcount.to_be_bytes());
        Ok(buf)
    }
}

fn check_nibble(field: &'static str, value: u8) -> Result<(), WireError> {
    if value > NIBBLE_MAX {
        return Err(WireError::FieldOverflow { field, value });
    }
    Ok(())
}
