use crate::errors::DomainError;
use crate::reminder::{ReminderTime, ReminderTitle};
use serde::{Deserialize, Serialize};

/// リマインダー作成リクエスト（未検証のワイヤ形式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReminderRequest {
    pub title: String,
    pub time: String, // "HH:MM" 形式
}

/// 検証済みのリマインダー作成リクエスト
///
/// 構築できた時点でタイトルと時刻の両方が正当であることを保証する。
/// 検証後の値は変更できない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    title: ReminderTitle,
    time: ReminderTime,
}

impl NewReminder {
    /// 生のタイトルと時刻文字列を検証してリクエストを作成
    ///
    /// 検証はタイトル → 時刻の形式 → 時 → 分の順で行い、
    /// 最初に違反した規則のエラーを返す。
    pub fn new(title: &str, time: &str) -> Result<Self, DomainError> {
        let title = ReminderTitle::new(title)?;
        let time = ReminderTime::from_string(time)?;
        Ok(Self { title, time })
    }

    /// タイトルを取得
    pub fn title(&self) -> &ReminderTitle {
        &self.title
    }

    /// 時刻を取得
    pub fn time(&self) -> ReminderTime {
        self.time
    }

    /// タイトルと時刻に分解
    pub fn into_parts(self) -> (ReminderTitle, ReminderTime) {
        (self.title, self.time)
    }
}

impl TryFrom<CreateReminderRequest> for NewReminder {
    type Error = DomainError;

    fn try_from(request: CreateReminderRequest) -> Result<Self, Self::Error> {
        Self::new(&request.title, &request.time)
    }
}
