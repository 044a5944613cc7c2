use std::collections::BTreeMap;

use serde::Serialize;

pub const KEY_TYPE_MISSING: &str = "shared_lang.error.request.memo.type_missing";
pub const KEY_TYPE_INVALID: &str = "shared_lang.error.request.memo.type_invalid";
pub const KEY_TYPE_UNSUPPORTED: &str = "shared_lang.error.request.memo.type_unsupported";
pub const KEY_INVALID_BY_ID: &str = "shared_lang.error.request.memo.invalid_by_id";
pub const KEY_INVALID_BY_TEXT: &str = "shared_lang.error.request.memo.invalid_by_text";
pub const KEY_INVALID_BY_HASH: &str = "shared_lang.error.request.memo.invalid_by_hash";

/// Classification of a memo validation failure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    MissingMemoType,
    InvalidMemoType,
    UnsupportedMemoType,
    InvalidMemoValue,
}

/// Which memo type was being validated when the value was rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemoValueKind {
    Id,
    Text,
    Hash,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    #[error("memo type is required when a memo is present")]
    MissingMemoType { memo: String },

    #[error("invalid memo type: {memo_type}")]
    InvalidMemoType { memo_type: String },

    #[error("unsupported memo type: {memo_type}")]
    UnsupportedMemoType { memo_type: String },

    #[error("invalid memo {memo} for type {kind}")]
    InvalidMemoValue { kind: MemoValueKind, memo: String },
}

impl MemoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMemoType { .. } => ErrorKind::MissingMemoType,
            Self::InvalidMemoType { .. } => ErrorKind::InvalidMemoType,
            Self::UnsupportedMemoType { .. } => ErrorKind::UnsupportedMemoType,
            Self::InvalidMemoValue { .. } => ErrorKind::InvalidMemoValue,
        }
    }

    /// Stable localization key for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::MissingMemoType { .. } => KEY_TYPE_MISSING,
            Self::InvalidMemoType { .. } => KEY_TYPE_INVALID,
            Self::UnsupportedMemoType { .. } => KEY_TYPE_UNSUPPORTED,
            Self::InvalidMemoValue { kind, .. } => match kind {
                MemoValueKind::Id => KEY_INVALID_BY_ID,
                MemoValueKind::Text => KEY_INVALID_BY_TEXT,
                MemoValueKind::Hash => KEY_INVALID_BY_HASH,
            },
        }
    }

    /// Substitution values for the localized message.
    pub fn message_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        match self {
            Self::MissingMemoType { memo } | Self::InvalidMemoValue { memo, .. } => {
                params.insert("memo".to_string(), memo.clone());
            }
            Self::InvalidMemoType { memo_type } | Self::UnsupportedMemoType { memo_type } => {
                params.insert("memo_type".to_string(), memo_type.clone());
            }
        }
        params
    }

    pub fn failure(&self) -> ValidationFailure {
        ValidationFailure {
            kind: self.kind(),
            message_key: self.message_key().to_string(),
            message_params: self.message_params(),
        }
    }
}

/// Transport form of a [`MemoError`], handed to the response layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub kind: ErrorKind,
    pub message_key: String,
    pub message_params: BTreeMap<String, String>,
}

impl From<&MemoError> for ValidationFailure {
    fn from(err: &MemoError) -> Self {
        err.failure()
    }
}
