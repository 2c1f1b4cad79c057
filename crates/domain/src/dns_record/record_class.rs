use std::fmt;
use std::str::FromStr;

/// Record classes from the RFC 1035 CLASS and QCLASS tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    /// The Internet.
    IN,
    /// CSNET, obsolete.
    CS,
    /// CHAOS.
    CH,
    /// Hesiod.
    HS,
    /// QCLASS `*`, any class.
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CS => "CS",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
        }
    }

    pub fn from_u16(value: u16) -> Option<Self> {
        Self::all().iter().copied().find(|rc| rc.to_u16() == value)
    }

    pub fn all() -> &'static [RecordClass] {
        &[
            RecordClass::IN,
            RecordClass::CS,
            RecordClass::CH,
            RecordClass::HS,
            RecordClass::ANY,
        ]
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" | "INET" => Ok(RecordClass::IN),
            "CS" => Ok(RecordClass::CS),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "ANY" | "*" => Ok(RecordClass::ANY),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
