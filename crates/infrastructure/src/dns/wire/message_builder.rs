//! DNS Message Builder
//!
//! Composes a header and its questions into one query message in wire format.
//! Every question is validated and sized before anything is written, so a
//! failed build never hands back a partial buffer.

use super::header::{HeaderEncoder, HEADER_LEN};
use super::question::{PreparedQuestion, QuestionEncoder};
use ferrous_query_domain::{Header, Question, TypeClassRegistry, WireError};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

/// Builds DNS query messages in wire format
#[derive(Clone)]
pub struct MessageBuilder {
    registry: Arc<TypeClassRegistry>,
}

impl MessageBuilder {
    pub fn new(registry: Arc<TypeClassRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeClassRegistry {
        &self.registry
    }

    /// Build a message from a header and its questions
    ///
    /// `header.qdcount` must equal `questions.len()`. The result is the
    /// 12 header bytes followed by each question in order, with no framing.
    pub fn build(&self, header: &Header, questions: &[Question]) -> Result<Vec<u8>, WireError> {
        let header_bytes = HeaderEncoder::encode(header)?;
        let prepared = self.prepare_questions(header, questions)?;

        let total = HEADER_LEN + prepared.iter().map(PreparedQuestion::len).sum::<usize>();
        let mut buf = vec![0u8; total];
        buf[..HEADER_LEN].copy_from_slice(&header_bytes);

        let mut offset = HEADER_LEN;
        for question in &prepared {
            let end = offset + question.len();
            question.write(&mut buf[offset..end]);
            offset = end;
        }
        debug_assert_eq!(offset, total);

        debug!(
            id = header.id,
            questions = questions.len(),
            bytes = total,
            "Built DNS message"
        );
        Ok(buf)
    }

    /// Size of the message `build` would produce, after the same validation
    pub fn encoded_len(&self, header: &Header, questions: &[Question]) -> Result<usize, WireError> {
        HeaderEncoder::flags(header)?;
        let prepared = self.prepare_questions(header, questions)?;
        Ok(HEADER_LEN + prepared.iter().map(PreparedQuestion::len).sum::<usize>())
    }

    /// Build a recursive single-question query in the Internet class
    ///
    /// Uses a random transaction ID and returns it with the bytes so the
    /// caller can match the response.
    pub fn build_query(&self, domain: &str, qtype: &str) -> Result<(u16, Vec<u8>), WireError> {
        let id = fastrand::u16(..);
        let header = Header::recursive_query(id, 1);
        let question = Question::internet(domain, qtype);

        let bytes = self.build(&header, std::slice::from_ref(&question))?;
        Ok((id, bytes))
    }

    fn prepare_questions<'q>(
        &self,
        header: &Header,
        questions: &'q [Question],
    ) -> Result<SmallVec<[PreparedQuestion<'q>; 2]>, WireError> {
        if usize::from(header.qdcount) != questions.len() {
            return Err(WireError::CountMismatch {
                declared: header.qdcount,
                supplied: questions.len(),
            });
        }

        let encoder = QuestionEncoder::new(&self.registry);
        questions.iter().map(|q| encoder.prepare(q)).collect()
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new(Arc::new(TypeClassRegistry::rfc1035()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_a_query() {
        let builder = MessageBuilder::default();
        let (id, bytes) = builder.build_query("google.com", "A").unwrap();

        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
        // RD is the low bit of the first flags byte
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        assert_eq!(bytes.len(), HEADER_LEN + 12 + 4);
    }

    #[test]
    fn test_count_checked_before_questions() {
        let builder = MessageBuilder::default();
        let header = Header::recursive_query(1, 2);
        let questions = [Question::internet("", "BOGUS")];

        assert_eq!(
            builder.build(&header, &questions),
            Err(WireError::CountMismatch {
                declared: 2,
                supplied: 1
            })
        );
    }

    #[test]
    fn test_encoded_len_matches_build() {
        let builder = MessageBuilder::default();
        let header = Header::recursive_query(9, 2);
        let questions = [
            Question::internet("example.com", "A"),
            Question::internet("example.org", "AAAA"),
        ];

        let len = builder.encoded_len(&header, &questions).unwrap();
        let bytes = builder.build(&header, &questions).unwrap();
        assert_eq!(len, bytes.len());
    }
}
