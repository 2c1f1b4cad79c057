//! Reference decoder built from the RFC 1035 layout, used only to check
//! encoder output field by field.

use ferrous_query_domain::Header;

pub fn decode_header(bytes: &[u8]) -> Header {
    assert!(bytes.len() >= 12, "header needs 12 bytes, got {}", bytes.len());

    let flags = u16::from_be_bytes([bytes[2], bytes[3]]);
    assert_eq!(flags & 0x0070, 0, "Z/AD/CD must be zero");

    Header {
        id: u16::from_be_bytes([bytes[0], bytes[1]]),
        qr: flags & 0x8000 != 0,
        opcode: ((flags >> 11) & 0x0F) as u8,
        aa: flags & 0x0400 != 0,
        tc: flags & 0x0200 != 0,
        rd: flags & 0x0100 != 0,
        ra: flags & 0x0080 != 0,
        rcode: (flags & 0x000F) as u8,
        qdcount: u16::from_be_bytes([bytes[4], bytes[5]]),
        ancount: u16::from_be_bytes([bytes[6], bytes[7]]),
        nscount: u16::from_be_bytes([bytes[8], bytes[9]]),
        arcount: u16::from_be_bytes([bytes[10], bytes[11]]),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DecodedQuestion {
    pub labels: Vec<String>,
    pub qtype: u16,
    pub qclass: u16,
    /// Bytes consumed from the input.
    pub len: usize,
}

pub fn decode_question(bytes: &[u8]) -> DecodedQuestion {
    let mut labels = Vec::new();
    let mut pos = 0;

    loop {
        let len = bytes[pos] as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        assert!(len <= 63, "label length {} at offset {}", len, pos - 1);
        labels.push(String::from_utf8(bytes[pos..pos + len].to_vec()).unwrap());
        pos += len;
    }

    let qtype = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]);
    let qclass = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]);

    DecodedQuestion {
        labels,
        qtype,
        qclass,
        len: pos + 4,
    }
}
