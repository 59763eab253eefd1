//! 归档写入器
//!
//! 把多个已存储文件打进一个 zip。条目统一使用固定时间戳和 unix 权限，
//! 保证同样的输入在不同平台产出字节一致的归档。

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::{ReportSysError, Result};

/// 导出响应的媒体类型
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    entry_count: usize,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            // 固定修改时间（1980-01-01）+ 固定权限，跨平台可复现
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(zip::DateTime::default())
                .unix_permissions(0o644),
            entry_count: 0,
        }
    }

    /// 追加一个内存中的条目
    pub fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.writer.start_file(name, self.options)?;
        self.writer.write_all(bytes)?;
        self.entry_count += 1;
        Ok(())
    }

    /// 追加存储目录下的一个已存储文件，条目名即存储名
    ///
    /// 元数据引用了磁盘上不存在的文件说明提交记录已经损坏，整批导出
    /// 失败，不产出静默缺项的归档。
    pub fn add_stored_file(&mut self, data_dir: &Path, name: &str) -> Result<()> {
        let path = data_dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReportSysError::corrupt_submission(format!(
                    "提交记录引用的文件不存在: {name}"
                )));
            }
            Err(e) => return Err(e.into()),
        };
        self.add_entry(name, &bytes)
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// 结束写入，返回完整的归档字节
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_archive_roundtrip() {
        let mut builder = ArchiveBuilder::new();
        builder.add_entry("22.3-0221234-Li-实验二.pdf", b"report bytes").unwrap();
        builder.add_entry("22.3-0221234-Li-实验二-代码.zip", b"code bytes").unwrap();
        assert_eq!(builder.entry_count(), 2);

        let bytes = builder.finish().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("22.3-0221234-Li-实验二.pdf")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "report bytes");
    }

    #[test]
    fn test_reproducible_output() {
        let build = || {
            let mut b = ArchiveBuilder::new();
            b.add_entry("a.pdf", b"same bytes").unwrap();
            b.finish().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_missing_stored_file_is_corrupt_submission() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = ArchiveBuilder::new();
        let err = builder
            .add_stored_file(dir.path(), "nope.pdf")
            .unwrap_err();
        assert_eq!(err.code(), crate::errors::ReportSysError::corrupt_submission("").code());
    }

    #[test]
    fn test_stored_file_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.zip"), b"stored").unwrap();
        let mut builder = ArchiveBuilder::new();
        builder.add_stored_file(dir.path(), "a.zip").unwrap();
        let bytes = builder.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = Vec::new();
        archive
            .by_name("a.zip")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"stored");
    }
}
