//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_reportsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ReportSysError {
            $($variant(String),)*
        }

        impl ReportSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ReportSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ReportSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ReportSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ReportSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ReportSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_reportsys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    SubmissionClosed("E009", "Submission Closed"),
    UnsupportedFileType("E010", "Unsupported File Type"),
    NoFileProvided("E011", "No File Provided"),
    CorruptSubmission("E012", "Corrupt Submission"),
    NamingTable("E013", "Naming Table Error"),
    Archive("E014", "Archive Error"),
}

impl ReportSysError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ReportSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ReportSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ReportSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        ReportSysError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ReportSysError {
    fn from(err: std::io::Error) -> Self {
        ReportSysError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ReportSysError {
    fn from(err: serde_json::Error) -> Self {
        ReportSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ReportSysError {
    fn from(err: chrono::ParseError) -> Self {
        ReportSysError::DateParse(err.to_string())
    }
}

impl From<zip::result::ZipError> for ReportSysError {
    fn from(err: zip::result::ZipError) -> Self {
        ReportSysError::Archive(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ReportSysError::database_config("test").code(), "E001");
        assert_eq!(ReportSysError::validation("test").code(), "E005");
        assert_eq!(ReportSysError::submission_closed("test").code(), "E009");
        assert_eq!(ReportSysError::corrupt_submission("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ReportSysError::submission_closed("test").error_type(),
            "Submission Closed"
        );
        assert_eq!(
            ReportSysError::unsupported_file_type("test").error_type(),
            "Unsupported File Type"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ReportSysError::no_file_provided("Neither report nor code supplied");
        assert_eq!(err.message(), "Neither report nor code supplied");
    }

    #[test]
    fn test_format_simple() {
        let err = ReportSysError::validation("begin_at must precede end_at");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("begin_at"));
    }
}
