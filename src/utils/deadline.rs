//! 截止策略
//!
//! 所有时刻统一存储为 UTC 再比较。窗口结束时刻即截止时刻，没有单独的
//! 宽限期。

use chrono::{DateTime, Utc};

use crate::errors::{ReportSysError, Result};

/// 上传时刻是否仍在提交窗口内（恰好等于截止时刻也接受）
pub fn is_within_window(now: DateTime<Utc>, end_at: DateTime<Utc>) -> bool {
    now <= end_at
}

/// 校验提交窗口：开始必须严格早于结束，创建和编辑报告时调用
pub fn validate_window(begin_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Result<()> {
    if begin_at >= end_at {
        return Err(ReportSysError::validation(format!(
            "begin_at ({begin_at}) must be strictly earlier than end_at ({end_at})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_before_deadline_accepted() {
        let end = utc(2024, 3, 8, 23, 59);
        assert!(is_within_window(utc(2024, 3, 8, 23, 58), end));
    }

    #[test]
    fn test_exactly_at_deadline_accepted() {
        let end = utc(2024, 3, 8, 23, 59);
        assert!(is_within_window(end, end));
    }

    #[test]
    fn test_after_deadline_rejected() {
        let end = utc(2024, 3, 8, 23, 59);
        assert!(!is_within_window(utc(2024, 3, 9, 0, 0), end));
    }

    #[test]
    fn test_window_validation() {
        let begin = utc(2024, 3, 1, 0, 0);
        let end = utc(2024, 3, 8, 23, 59);
        assert!(validate_window(begin, end).is_ok());
        assert!(validate_window(end, begin).is_err());
        assert!(validate_window(end, end).is_err());
    }
}
