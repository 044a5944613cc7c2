#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod i18n;
pub mod log;
pub mod memo;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ErrorKind, MemoError, MemoValueKind, ValidationFailure};
pub use i18n::{Localizer, MessageCatalog, localize_failure};
pub use log::{LogSink, LogValue, NoopSink, TracingSink};
pub use memo::translate::{HashSource, MemoTranslator, decode_hash, translate, translate_input};
pub use memo::{
    CanonicalMemo, HASH_BYTES, MAX_TEXT_BYTES, MemoHash, MemoText, MemoTypeTag,
    memo_type_name_from_code, memo_type_tag_to_string,
};
pub use types::MemoInput;
