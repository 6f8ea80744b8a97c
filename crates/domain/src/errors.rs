use thiserror::Error;

/// ドメイン層のバリデーションエラー
///
/// すべて呼び出し側の入力に起因するエラーであり、システム障害ではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid hour: {0}")]
    InvalidHour(u32),

    #[error("Invalid minute: {0}")]
    InvalidMinute(u32),

    #[error("Invalid ReminderId: {0}")]
    InvalidReminderId(String),
}

impl DomainError {
    /// エラーが指すリクエストフィールド名を取得
    ///
    /// 呼び出し側がフィールド単位のフィードバックを表示するために使う。
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidTitle(_) => "title",
            DomainError::InvalidTimeFormat(_)
            | DomainError::InvalidHour(_)
            | DomainError::InvalidMinute(_) => "time",
            DomainError::InvalidReminderId(_) => "id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_classification() {
        assert_eq!(DomainError::InvalidTitle("empty".to_string()).field(), "title");
        assert_eq!(
            DomainError::InvalidTimeFormat("9:30".to_string()).field(),
            "time"
        );
        assert_eq!(DomainError::InvalidHour(24).field(), "time");
        assert_eq!(DomainError::InvalidMinute(75).field(), "time");
        assert_eq!(
            DomainError::InvalidReminderId("empty".to_string()).field(),
            "id"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::InvalidTimeFormat("9:30".to_string()).to_string(),
            "Invalid time format: 9:30"
        );
        assert_eq!(DomainError::InvalidHour(24).to_string(), "Invalid hour: 24");
        assert_eq!(
            DomainError::InvalidMinute(75).to_string(),
            "Invalid minute: 75"
        );
    }
}
