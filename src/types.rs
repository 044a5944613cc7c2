/// Untrusted memo fields as extracted from a deposit or withdrawal request.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct MemoInput {
    /// Memo value; its interpretation depends on `memo_type`.
    #[serde(default)]
    pub memo: String,
    /// One of `id`, `text`, `none`, `hash`, `return`.
    #[serde(default)]
    pub memo_type: String,
}

impl MemoInput {
    pub fn new(memo: impl Into<String>, memo_type: impl Into<String>) -> Self {
        Self {
            memo: memo.into(),
            memo_type: memo_type.into(),
        }
    }
}
