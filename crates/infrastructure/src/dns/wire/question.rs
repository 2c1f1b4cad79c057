use ferrous_query_domain::{Question, TypeClassRegistry, WireError};
use smallvec::SmallVec;
use tracing::trace;

/// Longest label allowed by RFC 1035 §2.3.4.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name (length bytes, labels and terminator).
pub const MAX_NAME_LEN: usize = 255;

/// QTYPE + QCLASS.
const TYPE_CLASS_LEN: usize = 4;

type Labels<'q> = SmallVec<[&'q str; 8]>;

/// Serializes question entries, resolving type and class through the registry.
pub struct QuestionEncoder<'r> {
    registry: &'r TypeClassRegistry,
}

/// A question that passed validation, with its codes resolved and its exact
/// wire size known.
pub(crate) struct PreparedQuestion<'q> {
    labels: Labels<'q>,
    qtype: u16,
    qclass: u16,
    len: usize,
}

impl<'r> QuestionEncoder<'r> {
    pub fn new(registry: &'r TypeClassRegistry) -> Self {
        Self { registry }
    }

    /// Encode one question entry:
    /// `[len][label]... 0x00 [QTYPE:2] [QCLASS:2]`.
    pub fn encode(&self, question: &Question) -> Result<Vec<u8>, WireError> {
        let prepared = self.prepare(question)?;
        let mut buf = vec![0u8; prepared.len()];
        prepared.write(&mut buf);

        trace!(qname = %question.qname, bytes = buf.len(), "Encoded question");
        Ok(buf)
    }

    /// Number of bytes `encode` would produce, after full validation.
    pub fn encoded_len(&self, question: &Question) -> Result<usize, WireError> {
        Ok(self.prepare(question)?.len())
    }

    pub(crate) fn prepare<'q>(
        &self,
        question: &'q Question,
    ) -> Result<PreparedQuestion<'q>, WireError> {
        let labels = split_labels(&question.qname)?;

        let name_len = labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1;
        if name_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong {
                name: question.qname.to_string(),
                length: name_len,
            });
        }

        let qtype = self.registry.lookup_type(&question.qtype)?;
        let qclass = self.registry.lookup_class(&question.qclass)?;

        Ok(PreparedQuestion {
            labels,
            qtype,
            qclass,
            len: name_len + TYPE_CLASS_LEN,
        })
    }
}

impl PreparedQuestion<'_> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Write the entry at the start of `buf`, which must be exactly `len()` bytes.
    pub(crate) fn write(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), self.len);

        let mut pos = 0;
        for label in &self.labels {
            buf[pos] = label.len() as u8;
            pos += 1;
            buf[pos..pos + label.len()].copy_from_slice(label.as_bytes());
            pos += label.len();
        }
        buf[pos] = 0;
        pos += 1;

        buf[pos..pos + 2].copy_from_slice(&self.qtype.to_be_bytes());
        buf[pos + 2..pos + 4].copy_from_slice(&self.qclass.to_be_bytes());
    }
}

/// Split a dotted name into validated labels.
///
/// One trailing dot is the explicit root and is dropped. Over-long labels are
/// reported before any other label problem.
fn split_labels(qname: &str) -> Result<Labels<'_>, WireError> {
    let relative = qname.strip_suffix('.').unwrap_or(qname);
    if relative.is_empty() {
        return Err(WireError::EmptyDomainName);
    }

    if let Some(label) = relative.split('.').find(|l| l.len() > MAX_LABEL_LEN) {
        return Err(WireError::LabelTooLong {
            label: label.to_string(),
            length: label.len(),
        });
    }

    relative
        .split('.')
        .map(|label| {
            if label.is_empty() {
                return Err(WireError::EmptyLabel(qname.to_string()));
            }
            if let Some(&byte) = label.as_bytes().iter().find(|b| !b.is_ascii_graphic()) {
                return Err(WireError::InvalidLabelChar {
                    label: label.to_string(),
                    byte,
                });
            }
            Ok(label)
        })
        .collect()
}
