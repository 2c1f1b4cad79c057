use std::fmt;

/// Largest value a 4-bit header field can hold.
pub const NIBBLE_MAX: u8 = 0x0F;

/// The 12-byte DNS header section (RFC 1035 §4.1.1).
///
/// `opcode` and `rcode` are kept as raw integers so callers can set any
/// value; the encoder rejects anything that does not fit in 4 bits. The
/// reserved `Z`, `AD` and `CD` bits are not exposed and always go out as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// A header with every flag clear and every count zero.
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Standard query with recursion desired, the shape every stub resolver sends.
    pub fn recursive_query(id: u16, qdcount: u16) -> Self {
        Self {
            id,
            rd: true,
            qdcount,
            ..Default::default()
        }
    }

    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcode = opcode.into();
        self
    }

    pub fn with_rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode.into();
        self
    }

    pub fn is_query(&self) -> bool {
        !self.qr
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_query() { "query" } else { "response" };
        write!(
            f,
            "id={} {} opcode={} rcode={} rd={} qd={} an={} ns={} ar={}",
            self.id,
            kind,
            self.opcode,
            self.rcode,
            self.rd,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount
        )
    }
}

/// Named header opcodes. Values 3 and 6–15 are unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        match opcode {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
        }
    }
}

/// Named response codes from RFC 1035 §4.1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
}

impl From<ResponseCode> for u8 {
    fn from(rcode: ResponseCode) -> u8 {
        match rcode {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
        }
    }
}
