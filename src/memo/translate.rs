use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tracing::Level;

use crate::error::{MemoError, MemoValueKind};
use crate::log::{LogSink, LogValue, NOOP_SINK};
use crate::memo::{CanonicalMemo, MemoHash, MemoText, MemoTypeTag};
use crate::types::MemoInput;

/// Which attempt produced a hash digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HashSource {
    Base64,
    RawBytes,
}

/// Converts request memo fields into a [`CanonicalMemo`].
///
/// Stateless apart from the borrowed log sink, so one translator can be
/// shared across request handlers.
#[derive(Clone, Copy)]
pub struct MemoTranslator<'a> {
    sink: &'a dyn LogSink,
}

impl Default for MemoTranslator<'_> {
    fn default() -> Self {
        Self { sink: &NOOP_SINK }
    }
}

impl<'a> MemoTranslator<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self { sink }
    }

    /// `Ok(None)` means no memo was supplied, which differs from an explicit
    /// `none` memo (`Ok(Some(CanonicalMemo::None))`).
    pub fn translate(
        &self,
        memo: &str,
        memo_type: &str,
    ) -> Result<Option<CanonicalMemo>, MemoError> {
        self.sink.log(
            Level::DEBUG,
            "parsing memo",
            &[
                ("memo", LogValue::Str(memo)),
                ("memo_type", LogValue::Str(memo_type)),
            ],
        );

        if memo.is_empty() {
            self.sink.log(Level::DEBUG, "memo is empty", &[]);
            return Ok(None);
        }

        if memo_type.is_empty() {
            self.sink.log(
                Level::WARN,
                "memo type is empty",
                &[("memo", LogValue::Str(memo))],
            );
            return Err(MemoError::MissingMemoType {
                memo: memo.to_string(),
            });
        }

        let Ok(tag) = memo_type.parse::<MemoTypeTag>() else {
            self.sink.log(
                Level::WARN,
                "invalid memo type",
                &[("memo_type", LogValue::Str(memo_type))],
            );
            return Err(MemoError::InvalidMemoType {
                memo_type: memo_type.to_string(),
            });
        };

        let result = match tag {
            MemoTypeTag::Id => parse_id(memo).map(CanonicalMemo::Id),
            MemoTypeTag::Text => MemoText::new(memo)
                .map(CanonicalMemo::Text)
                .ok_or_else(|| invalid_value(MemoValueKind::Text, memo)),
            MemoTypeTag::None => Ok(CanonicalMemo::None),
            MemoTypeTag::Hash => self.parse_hash(memo).map(CanonicalMemo::Hash),
            MemoTypeTag::Return => Err(MemoError::UnsupportedMemoType {
                memo_type: memo_type.to_string(),
            }),
        };

        if let Err(err) = &result {
            self.sink.log(
                Level::WARN,
                "memo rejected",
                &[
                    ("memo", LogValue::Str(memo)),
                    ("memo_type", LogValue::Str(memo_type)),
                    ("error", LogValue::Error(err)),
                ],
            );
        }

        result.map(Some)
    }

    pub fn translate_input(
        &self,
        input: &MemoInput,
    ) -> Result<Option<CanonicalMemo>, MemoError> {
        self.translate(&input.memo, &input.memo_type)
    }

    fn parse_hash(&self, memo: &str) -> Result<MemoHash, MemoError> {
        let (hash, source) =
            decode_hash(memo).ok_or_else(|| invalid_value(MemoValueKind::Hash, memo))?;
        self.sink.log(
            Level::DEBUG,
            "hash memo accepted",
            &[("source", LogValue::Str(source.as_ref()))],
        );
        Ok(hash)
    }
}

/// Translates with no log sink attached.
pub fn translate(memo: &str, memo_type: &str) -> Result<Option<CanonicalMemo>, MemoError> {
    MemoTranslator::default().translate(memo, memo_type)
}

pub fn translate_input(input: &MemoInput) -> Result<Option<CanonicalMemo>, MemoError> {
    MemoTranslator::default().translate_input(input)
}

/// Strict base64 first, then the raw bytes; whichever is exactly 32 bytes wins.
pub fn decode_hash(memo: &str) -> Option<(MemoHash, HashSource)> {
    if let Some(hash) = BASE64_STANDARD
        .decode(memo)
        .ok()
        .and_then(|bytes| MemoHash::from_slice(&bytes))
    {
        return Some((hash, HashSource::Base64));
    }
    // TODO: drop the raw-bytes attempt once callers are confirmed to send base64 only
    MemoHash::from_slice(memo.as_bytes()).map(|hash| (hash, HashSource::RawBytes))
}

fn parse_id(memo: &str) -> Result<u64, MemoError> {
    if !memo.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_value(MemoValueKind::Id, memo));
    }
    memo.parse::<u64>()
        .map_err(|_| invalid_value(MemoValueKind::Id, memo))
}

fn invalid_value(kind: MemoValueKind, memo: &str) -> MemoError {
    MemoError::InvalidMemoValue {
        kind,
        memo: memo.to_string(),
    }
}
