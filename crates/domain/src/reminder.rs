use crate::errors::DomainError;
use crate::requests::NewReminder;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// リマインダーID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(String);

impl ReminderId {
    /// 新しいリマインダーIDを生成
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// 文字列からリマインダーIDを作成
    pub fn from_string(id: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidReminderId(
                "Reminder ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// リマインダーIDを文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// リマインダーIDが有効かチェック
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// リマインダーのタイトル
///
/// 前後の空白を取り除いた上で、空でないことを保証する。
/// 最大長は設けない。必要なら埋め込み先のシステムが制限する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTitle(String);

impl ReminderTitle {
    /// 入力文字列からタイトルを作成
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Title cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// タイトルを文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReminderTitle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ReminderTitle> for String {
    fn from(title: ReminderTitle) -> Self {
        title.0
    }
}

impl std::fmt::Display for ReminderTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// リマインダーの発火時刻（"HH:MM" 形式の壁時計時刻）
///
/// 日付とタイムゾーンは持たない。時は 0〜23、分は 0〜59。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    /// 時と分からリマインダー時刻を作成
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(DomainError::InvalidMinute(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// "HH:MM" 形式の文字列からリマインダー時刻を作成
    pub fn from_string(time: &str) -> Result<Self, DomainError> {
        time.parse()
    }

    /// 時を取得
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// 分を取得
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// chrono の NaiveTime に変換
    ///
    /// スケジューラーなど chrono の時刻を扱うコラボレーター向け。
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .expect("hour and minute are range-checked on construction")
    }
}

impl FromStr for ReminderTime {
    type Err = DomainError;

    /// 厳密に "HH:MM" 形式のみ受け付ける
    ///
    /// 前後の空白、一桁表記、秒付きの表記はすべて形式エラーとする。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[2] == b':'
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit();
        if !well_formed {
            return Err(DomainError::InvalidTimeFormat(s.to_string()));
        }

        let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for ReminderTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReminderTime> for String {
    fn from(time: ReminderTime) -> Self {
        time.to_string()
    }
}

impl std::fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// リマインダー
///
/// 検証済みの作成リクエストから生成されるエンティティ。
/// 永続化とスケジューリングは外部のコラボレーターが担う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: ReminderTitle,
    pub time: ReminderTime,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub last_notified: Option<DateTime<Utc>>,
}

impl Reminder {
    /// 検証済みリクエストから新しいリマインダーを作成
    pub fn create(request: NewReminder) -> Self {
        let (title, time) = request.into_parts();
        Self {
            id: ReminderId::new(),
            title,
            time,
            created_at: Utc::now(),
            is_active: true,
            last_notified: None,
        }
    }
}
