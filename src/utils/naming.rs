//! 命名引擎
//!
//! 为提交工件推导规范文件名。文件名编码了年级、班级、去掉首位的学号、
//! 姓名、报告次序的中文序数词以及（代码工件的）区分后缀，便于助教
//! 直接按文件名归档。
//!
//! 同一输入必须推导出同一文件名：替换旧文件时会重新推导一次来定位待
//! 删除的旧文件。

use crate::errors::{ReportSysError, Result};
use crate::models::submissions::entities::ArtifactKind;
use crate::models::users::entities::StudentProfile;

/// 报告次序 -> 中文序数词。下标即次序号。
pub const ORDINAL_WORDS: [&str; 21] = [
    "零", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二", "十三",
    "十四", "十五", "十六", "十七", "十八", "十九", "二十",
];

/// 课程命名策略注册表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPolicy {
    /// 报告与代码使用同一格式（数据结构报告课程）
    Unified,
    /// 代码工件带 "-代码" 区分后缀（数据结构课设）
    PerArtifact,
}

impl NamingPolicy {
    /// 已知课程的命名策略；未注册课程返回 None，调用方保留原始文件名
    pub fn for_course(course_id: i64) -> Option<Self> {
        match course_id {
            0 => Some(NamingPolicy::Unified),
            3 => Some(NamingPolicy::PerArtifact),
            _ => None,
        }
    }
}

/// 次序号是否在序数词表覆盖范围内（创建/编辑报告时校验）
pub fn ordinal_in_domain(seq: i64) -> bool {
    (0..ORDINAL_WORDS.len() as i64).contains(&seq)
}

/// 查询次序号的中文序数词
///
/// 表外取值说明报告数据与词表脱节，是致命的配置错误，不做静默回退。
pub fn ordinal_word(seq: i64) -> Result<&'static str> {
    usize::try_from(seq)
        .ok()
        .and_then(|i| ORDINAL_WORDS.get(i))
        .copied()
        .ok_or_else(|| {
            ReportSysError::naming_table(format!(
                "报告次序 {seq} 超出序数词表范围 0..={}",
                ORDINAL_WORDS.len() - 1
            ))
        })
}

/// 推导提交工件的规范文件名
///
/// 返回 Ok(None) 表示课程未注册命名策略（"不改名"），调用方应退回原始
/// 上传文件名。扩展名原样拼接，白名单校验由提交流程负责。
pub fn derive_name(
    course_id: i64,
    kind: ArtifactKind,
    student: &StudentProfile,
    seq: i64,
    extension: &str,
) -> Result<Option<String>> {
    let policy = match NamingPolicy::for_course(course_id) {
        Some(p) => p,
        None => return Ok(None),
    };

    let ordinal = ordinal_word(seq)?;
    // 学号去掉首位（"20221234" -> "0221234"）
    let stripped_id: String = student.id.to_string().chars().skip(1).collect();
    let base = format!(
        "{:02}.{}-{}-{}-实验{}",
        student.year.rem_euclid(100),
        student.class_label,
        stripped_id,
        student.name,
        ordinal
    );

    let name = match (policy, kind) {
        (NamingPolicy::PerArtifact, ArtifactKind::Code) => format!("{base}-代码.{extension}"),
        _ => format!("{base}.{extension}"),
    };

    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentProfile {
        StudentProfile {
            id: 20221234,
            name: "Li".to_string(),
            year: 22,
            class_label: "3".to_string(),
        }
    }

    #[test]
    fn test_derive_name_code_artifact() {
        let name = derive_name(3, ArtifactKind::Code, &student(), 2, "zip")
            .unwrap()
            .unwrap();
        assert_eq!(name, "22.3-0221234-Li-实验二-代码.zip");
    }

    #[test]
    fn test_derive_name_report_artifact() {
        let name = derive_name(3, ArtifactKind::Report, &student(), 2, "pdf")
            .unwrap()
            .unwrap();
        assert_eq!(name, "22.3-0221234-Li-实验二.pdf");
    }

    #[test]
    fn test_unified_course_ignores_kind() {
        let report = derive_name(0, ArtifactKind::Report, &student(), 1, "pdf")
            .unwrap()
            .unwrap();
        let code = derive_name(0, ArtifactKind::Code, &student(), 1, "pdf")
            .unwrap()
            .unwrap();
        assert_eq!(report, code);
    }

    #[test]
    fn test_deterministic() {
        let a = derive_name(3, ArtifactKind::Code, &student(), 2, "zip").unwrap();
        let b = derive_name(3, ArtifactKind::Code, &student(), 2, "zip").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_course_is_no_rename() {
        for course_id in [-1, 1, 2, 4, 99] {
            let result = derive_name(course_id, ArtifactKind::Report, &student(), 2, "pdf");
            assert!(matches!(result, Ok(None)), "course {course_id}");
        }
    }

    #[test]
    fn test_four_digit_year_truncates() {
        let mut s = student();
        s.year = 2022;
        let name = derive_name(3, ArtifactKind::Report, &s, 2, "pdf")
            .unwrap()
            .unwrap();
        assert!(name.starts_with("22."));
    }

    #[test]
    fn test_ordinal_table_miss_is_fatal() {
        assert!(derive_name(3, ArtifactKind::Report, &student(), 21, "pdf").is_err());
        assert!(derive_name(3, ArtifactKind::Report, &student(), -1, "pdf").is_err());
    }

    #[test]
    fn test_ordinal_domain() {
        assert!(ordinal_in_domain(0));
        assert!(ordinal_in_domain(20));
        assert!(!ordinal_in_domain(21));
        assert!(!ordinal_in_domain(-1));
        assert_eq!(ordinal_word(2).unwrap(), "二");
        assert_eq!(ordinal_word(12).unwrap(), "十二");
    }
}
