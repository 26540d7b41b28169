//! Canonical block hashing
//!
//! A block is rendered as JSON with its keys sorted lexicographically (records
//! included), then hashed with SHA-256. Two structurally equal blocks always
//! produce the same digest no matter how they were built.

use crate::core::Block;
use crate::utils::{canonical_json, sha256_hex};

/// Lowercase hex SHA-256 of the block's canonical encoding
pub fn digest(block: &Block) -> String {
    sha256_hex(canonical_encoding(block).as_bytes())
}

/// Canonical JSON text of a block, as produced by its serde representation
pub fn canonical_encoding(block: &Block) -> String {
    // Strings, integers, floats and lists only: nothing in a block can fail to serialize
    canonical_json(block).expect("Block serialization should never fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;
    use crate::utils::SHA256_HEX_LEN;

    fn sample_block() -> Block {
        Block::new_test_block(
            2,
            1_700_000_000.25,
            vec![Transaction::new(
                "UniversityXYZ",
                "Student123",
                "Bachelor's Degree Certificate",
            )],
            35293,
            "1",
        )
    }

    #[test]
    fn test_digest_is_deterministic() {
        let block = sample_block();
        assert_eq!(digest(&block), digest(&block));
        assert_eq!(digest(&block), digest(&block.clone()));
        assert_eq!(digest(&block).len(), SHA256_HEX_LEN);
    }

    #[test]
    fn test_encoding_is_sorted() {
        let block = Block::new_test_block(1, 2.5, Vec::new(), 100, "1");
        assert_eq!(
            canonical_encoding(&block),
            r#"{"index": 1, "previous_hash": "1", "proof": 100, "timestamp": 2.5, "transactions": []}"#
        );
    }

    // Reference digests from sha256(json.dumps(block, sort_keys=True))
    #[test]
    fn test_digest_matches_json_dumps() {
        let empty = Block::new_test_block(1, 2.5, Vec::new(), 100, "1");
        assert_eq!(
            digest(&empty),
            "c127c2898568e3a353b75270dc89ac143597bb72b64560cbab8614f8af698ae6"
        );

        assert_eq!(
            canonical_encoding(&sample_block()),
            "{\"index\": 2, \"previous_hash\": \"1\", \"proof\": 35293, \"timestamp\": 1700000000.25, \
             \"transactions\": [{\"certificate_data\": \"Bachelor's Degree Certificate\", \
             \"recipient\": \"Student123\", \"sender\": \"UniversityXYZ\"}]}"
        );
        assert_eq!(
            digest(&sample_block()),
            "e2a5c12fb39fa012eb577df11c6b13e4815fb176bfd91a8b5928ff30bcc17994"
        );
    }

    #[test]
    fn test_digest_matches_json_dumps_for_non_ascii_records() {
        let block = Block::new_test_block(
            3,
            1_700_000_001.5,
            vec![Transaction::new(
                "Universit\u{e9}\u{7f}",
                "Tab\there \"q\" \\ \u{1F600}",
                "Dipl\u{f4}me \u{2713}",
            )],
            35089,
            "abc",
        );
        assert_eq!(
            digest(&block),
            "965bff37e0edc79b99aa5820e9e27a29ebc24197d655783116a49ee5e71558dd"
        );
    }

    #[test]
    fn test_every_field_changes_digest() {
        let base = sample_block();
        let records = base.get_records().to_vec();
        let original = digest(&base);

        let variants = vec![
            Block::new_test_block(3, 1_700_000_000.25, records.clone(), 35293, "1"),
            Block::new_test_block(2, 1_700_000_000.5, records.clone(), 35293, "1"),
            Block::new_test_block(2, 1_700_000_000.25, Vec::new(), 35293, "1"),
            Block::new_test_block(2, 1_700_000_000.25, records.clone(), 35294, "1"),
            Block::new_test_block(2, 1_700_000_000.25, records, 35293, "2"),
            Block::new_test_block(
                2,
                1_700_000_000.25,
                vec![Transaction::new(
                    "UniversityXYZ",
                    "Student123",
                    "Master's Degree Certificate",
                )],
                35293,
                "1",
            ),
        ];

        for variant in variants {
            assert_ne!(digest(&variant), original);
        }
    }
}
