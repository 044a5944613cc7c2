pub mod translate;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

/// Maximum encoded size of a text memo, in bytes.
pub const MAX_TEXT_BYTES: usize = 28;
/// Exact size of a hash or return memo digest.
pub const HASH_BYTES: usize = 32;

/// Ledger memo kinds, discriminants as on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(i32)]
pub enum MemoTypeTag {
    None = 0,
    Text = 1,
    Id = 2,
    Hash = 3,
    Return = 4,
}

impl MemoTypeTag {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Text),
            2 => Some(Self::Id),
            3 => Some(Self::Hash),
            4 => Some(Self::Return),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

pub fn memo_type_tag_to_string(tag: MemoTypeTag) -> &'static str {
    match tag {
        MemoTypeTag::None => "none",
        MemoTypeTag::Text => "text",
        MemoTypeTag::Id => "id",
        MemoTypeTag::Hash => "hash",
        MemoTypeTag::Return => "return",
    }
}

/// Name for a raw wire discriminant; `"unknown"` outside the enumeration.
pub fn memo_type_name_from_code(code: i32) -> &'static str {
    MemoTypeTag::from_code(code).map_or("unknown", memo_type_tag_to_string)
}

/// Text payload no longer than [`MAX_TEXT_BYTES`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoText(String);

impl MemoText {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (text.len() <= MAX_TEXT_BYTES).then_some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Exactly [`HASH_BYTES`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoHash([u8; HASH_BYTES]);

impl MemoHash {
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; HASH_BYTES]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_BYTES] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.0)
    }
}

impl From<[u8; HASH_BYTES]> for MemoHash {
    fn from(bytes: [u8; HASH_BYTES]) -> Self {
        Self(bytes)
    }
}

/// The ledger-native memo attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalMemo {
    None,
    Id(u64),
    Text(MemoText),
    Hash(MemoHash),
    Return(MemoHash),
}

impl CanonicalMemo {
    pub fn tag(&self) -> MemoTypeTag {
        match self {
            Self::None => MemoTypeTag::None,
            Self::Id(_) => MemoTypeTag::Id,
            Self::Text(_) => MemoTypeTag::Text,
            Self::Hash(_) => MemoTypeTag::Hash,
            Self::Return(_) => MemoTypeTag::Return,
        }
    }

    /// Payload rendered as a string: decimal ids, raw text, base64 digests.
    pub fn value_string(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Id(id) => Some(id.to_string()),
            Self::Text(text) => Some(text.as_str().to_string()),
            Self::Hash(hash) | Self::Return(hash) => Some(hash.to_base64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tag_names_match_request_tokens() {
        for tag in MemoTypeTag::iter() {
            let name = memo_type_tag_to_string(tag);
            assert_eq!(name, tag.as_ref());
            assert_eq!(name.parse::<MemoTypeTag>().ok(), Some(tag));
        }
        assert_eq!("ID".parse::<MemoTypeTag>().ok(), None);
        assert_eq!("bogus".parse::<MemoTypeTag>().ok(), None);
    }

    #[test]
    fn tag_names_are_injective() {
        let mut names: Vec<&str> = MemoTypeTag::iter().map(memo_type_tag_to_string).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MemoTypeTag::iter().count());
        assert!(!names.contains(&"unknown"));
    }

    #[test]
    fn codes_round_trip_and_unknown_codes_name_unknown() {
        for tag in MemoTypeTag::iter() {
            assert_eq!(MemoTypeTag::from_code(tag.code()), Some(tag));
            assert_eq!(memo_type_name_from_code(tag.code()), memo_type_tag_to_string(tag));
        }
        assert_eq!(memo_type_name_from_code(5), "unknown");
        assert_eq!(memo_type_name_from_code(-1), "unknown");
        assert_eq!(memo_type_name_from_code(i32::MAX), "unknown");
    }

    #[test]
    fn text_limit_counts_bytes_not_chars() {
        assert!(MemoText::new("a".repeat(MAX_TEXT_BYTES)).is_some());
        assert!(MemoText::new("a".repeat(MAX_TEXT_BYTES + 1)).is_none());
        // 10 chars, 30 bytes
        assert!(MemoText::new("€".repeat(10)).is_none());
        assert!(MemoText::new("€".repeat(9)).is_some());
    }

    #[test]
    fn hash_requires_exact_length() {
        assert!(MemoHash::from_slice(&[0u8; 31]).is_none());
        assert!(MemoHash::from_slice(&[0u8; 33]).is_none());
        let hash = MemoHash::from_slice(&[7u8; HASH_BYTES]);
        assert_eq!(hash.map(|h| *h.as_bytes()), Some([7u8; HASH_BYTES]));
    }

    #[test]
    fn value_strings() {
        assert_eq!(CanonicalMemo::None.value_string(), None);
        assert_eq!(CanonicalMemo::Id(42).value_string().as_deref(), Some("42"));
        assert_eq!(
            CanonicalMemo::Hash(MemoHash::from([0u8; HASH_BYTES]))
                .value_string()
                .as_deref(),
            Some("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=")
        );
        assert_eq!(
            CanonicalMemo::Return(MemoHash::from([0u8; HASH_BYTES])).tag(),
            MemoTypeTag::Return
        );
    }
}
