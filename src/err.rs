use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PipeErr {
    #[error("[Skip] Expected to skip `{expected}` elements, but only `{skipped}` remained")]
    Exhausted { expected: usize, skipped: usize },

    #[error("[{op}] Empty sequence and no default value was given")]
    EmptySequence { op: &'static str },
}

impl PipeErr {
    pub(crate) fn empty(op: &'static str) -> PipeErr {
        tracing::debug!(op, "terminal operation on empty pipe");
        PipeErr::EmptySequence { op }
    }

    /// 是否由于元素数量不足导致的错误。
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PipeErr::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_message() {
        assert_eq!(
            PipeErr::Exhausted { expected: 3, skipped: 1 }.to_string(),
            "[Skip] Expected to skip `3` elements, but only `1` remained"
        );
        assert_eq!(PipeErr::empty("max").to_string(), "[max] Empty sequence and no default value was given");
    }

    #[test]
    fn test_is_exhausted() {
        assert!(PipeErr::Exhausted { expected: 1, skipped: 0 }.is_exhausted());
        assert!(!PipeErr::empty("reduce").is_exhausted());
    }
}
