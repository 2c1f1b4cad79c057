#![allow(dead_code)]
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct QuestionFixture {
    pub domain: String,
    pub qtype: String,
    pub qclass: String,
    pub expected: Vec<u8>,
    pub description: String,
}

pub fn load_question_fixtures() -> HashMap<String, QuestionFixture> {
    let mut fixtures = HashMap::new();

    fixtures.insert(
        "example_a_inet".to_string(),
        QuestionFixture {
            domain: "example.com".to_string(),
            qtype: "A".to_string(),
            qclass: "inet".to_string(),
            expected: vec![
                0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00,
                0x00, 0x01, 0x00, 0x01,
            ],
            description: "A record for example.com in the Internet class".to_string(),
        },
    );

    fixtures.insert(
        "example_a_fqdn".to_string(),
        QuestionFixture {
            domain: "example.com.".to_string(),
            qtype: "A".to_string(),
            qclass: "IN".to_string(),
            expected: vec![
                0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00,
                0x00, 0x01, 0x00, 0x01,
            ],
            description: "Trailing root dot encodes the same as the relative name".to_string(),
        },
    );

    fixtures.insert(
        "northeastern_a".to_string(),
        QuestionFixture {
            domain: "www.northeastern.edu".to_string(),
            qtype: "A".to_string(),
            qclass: "IN".to_string(),
            expected: vec![
                0x03, b'w', b'w', b'w', 0x0c, b'n', b'o', b'r', b't', b'h', b'e', b'a', b's',
                b't', b'e', b'r', b'n', 0x03, b'e', b'd', b'u', 0x00, 0x00, 0x01, 0x00, 0x01,
            ],
            description: "Three-label name".to_string(),
        },
    );

    fixtures.insert(
        "mx_record".to_string(),
        QuestionFixture {
            domain: "mail.example.org".to_string(),
            qtype: "MX".to_string(),
            qclass: "IN".to_string(),
            expected: vec![
                0x04, b'm', b'a', b'i', b'l', 0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
                0x03, b'o', b'r', b'g', 0x00, 0x00, 0x0f, 0x00, 0x01,
            ],
            description: "MX query".to_string(),
        },
    );

    fixtures.insert(
        "aaaa_record".to_string(),
        QuestionFixture {
            domain: "ipv6.test".to_string(),
            qtype: "AAAA".to_string(),
            qclass: "IN".to_string(),
            expected: vec![
                0x04, b'i', b'p', b'v', b'6', 0x04, b't', b'e', b's', b't', 0x00, 0x00, 0x1c,
                0x00, 0x01,
            ],
            description: "AAAA query".to_string(),
        },
    );

    fixtures.insert(
        "srv_underscore".to_string(),
        QuestionFixture {
            domain: "_sip._tcp.example.com".to_string(),
            qtype: "SRV".to_string(),
            qclass: "IN".to_string(),
            expected: vec![
                0x04, b'_', b's', b'i', b'p', 0x04, b'_', b't', b'c', b'p', 0x07, b'e', b'x',
                b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, 0x00, 0x21, 0x00,
                0x01,
            ],
            description: "SRV query with underscore labels".to_string(),
        },
    );

    fixtures.insert(
        "chaos_txt".to_string(),
        QuestionFixture {
            domain: "version.bind".to_string(),
            qtype: "TXT".to_string(),
            qclass: "CH".to_string(),
            expected: vec![
                0x07, b'v', b'e', b'r', b's', b'i', b'o', b'n', 0x04, b'b', b'i', b'n', b'd',
                0x00, 0x00, 0x10, 0x00, 0x03,
            ],
            description: "CHAOS class TXT query".to_string(),
        },
    );

    fixtures
}
