use chrono::{DateTime, Utc};

use super::{Fine, Loan, loan::is_overdue};

/// 1日あたりの延滞金（デフォルト）
pub const DEFAULT_DAILY_RATE: f64 = 1.0;

/// 延滞金ポリシー
///
/// 貸出の日時から延滞金を計算する純粋な関数の抽象。
/// 呼び出し側を変えずに計算方法（段階料金など）を差し替えられる。
pub trait FinePolicy: Send + Sync {
    /// 延滞金を計算する
    ///
    /// `now` は未返却の貸出で基準時刻として使われる。
    /// 戻り値は常に0以上。
    fn compute_fine(&self, loan: &Loan, now: DateTime<Utc>) -> Fine;
}

/// 日額制の延滞金ポリシー
///
/// ビジネスルール：
/// - 延滞していなければ0
/// - 基準時刻 = 返却日時（未返却ならnow）
/// - 延滞金 = 延滞日数（端数切り捨て） × 日額
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRateFinePolicy {
    daily_rate: f64,
}

impl DailyRateFinePolicy {
    pub fn new(daily_rate: f64) -> Self {
        Self { daily_rate }
    }
}

impl Default for DailyRateFinePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_RATE)
    }
}

impl FinePolicy for DailyRateFinePolicy {
    fn compute_fine(&self, loan: &Loan, now: DateTime<Utc>) -> Fine {
        if !is_overdue(loan, now) {
            return Fine::ZERO;
        }

        let reference = loan.returned_at.unwrap_or(now);
        let whole_days = (reference - loan.due_date).num_days();

        Fine::new(whole_days as f64 * self.daily_rate)
    }
}
