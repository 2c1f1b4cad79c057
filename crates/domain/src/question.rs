use std::fmt;
use std::sync::Arc;

/// One entry of the question section.
///
/// Type and class are symbolic names; they are resolved to wire codes by the
/// registry at encode time, so an unknown mnemonic surfaces as an error there
/// instead of silently becoming code 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Arc<str>,
    pub qtype: Arc<str>,
    pub qclass: Arc<str>,
}

impl Question {
    pub fn new(
        qname: impl Into<Arc<str>>,
        qtype: impl Into<Arc<str>>,
        qclass: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            qname: qname.into(),
            qtype: qtype.into(),
            qclass: qclass.into(),
        }
    }

    /// Question in the Internet class.
    pub fn internet(qname: impl Into<Arc<str>>, qtype: impl Into<Arc<str>>) -> Self {
        Self::new(qname, qtype, "IN")
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}
