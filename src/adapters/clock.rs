use crate::ports::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 壁時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 手動で進める時計
///
/// テストとデモで時刻を固定・前進させるために使う。
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    // 汚染されたロックでも最後に設定された時刻を使う
    fn guard(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 時刻を指定した時間だけ進め、進めた後の時刻を返す
    ///
    /// 表現可能な範囲を超える場合は時刻を変えずにNoneを返す。
    pub fn advance(&self, by: Duration) -> Option<DateTime<Utc>> {
        let mut now = self.guard();
        let advanced = now.checked_add_signed(by)?;
        *now = advanced;
        Some(advanced)
    }

    /// 時刻を指定した値に設定する
    pub fn set(&self, to: DateTime<Utc>) {
        *self.guard() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.guard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::days(10));
        assert_eq!(clock.now(), start + Duration::days(10));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_manual_clock_refuses_to_advance_out_of_range() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        let far = Duration::try_days(200_000_000).unwrap();
        assert_eq!(clock.advance(far), None);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_manual_clock_recovers_from_poisoned_lock() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let clock = std::sync::Arc::new(ManualClock::new(start));

        let poisoner = clock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.now.lock().unwrap();
            panic!("poison the clock");
        })
        .join();
        assert!(clock.now.is_poisoned());

        // 汚染後も進める・設定するが効く
        assert_eq!(clock.advance(Duration::days(1)), Some(start + Duration::days(1)));
        assert_eq!(clock.now(), start + Duration::days(1));
        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
