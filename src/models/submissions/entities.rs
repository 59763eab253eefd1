use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 工件槽位：报告文档或代码压缩包
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum ArtifactKind {
    Report,
    Code,
}

impl ArtifactKind {
    /// 各槽位允许的文件扩展名（小写比较）
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            ArtifactKind::Report => &["pdf", "doc", "docx"],
            ArtifactKind::Code => &["zip"],
        }
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        let lower = extension.to_lowercase();
        self.allowed_extensions().contains(&lower.as_str())
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Report => write!(f, "report"),
            ArtifactKind::Code => write!(f, "code"),
        }
    }
}

// 提交记录：一个 (报告, 学生) 对的两个可空槽位
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub report_id: i64,
    pub student_id: i64,
    pub report_file: Option<String>,
    pub code_file: Option<String>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 读取某一槽位当前的文件名
    pub fn slot(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Report => self.report_file.as_deref(),
            ArtifactKind::Code => self.code_file.as_deref(),
        }
    }

    /// 已占用的槽位文件名，导出时逐一打包
    pub fn stored_files(&self) -> impl Iterator<Item = &str> {
        self.report_file
            .as_deref()
            .into_iter()
            .chain(self.code_file.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(ArtifactKind::Report.accepts_extension("pdf"));
        assert!(ArtifactKind::Report.accepts_extension("DOCX"));
        assert!(!ArtifactKind::Report.accepts_extension("zip"));
        assert!(ArtifactKind::Code.accepts_extension("zip"));
        assert!(!ArtifactKind::Code.accepts_extension("rar"));
    }
}
