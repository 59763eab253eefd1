//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod reports;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ReportSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::from_url(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 从给定 URL 创建存储实例并运行迁移
    pub async fn from_url(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存库必须保持单连接，否则每个池连接各自是一个独立的库
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = if in_memory { 1 } else { pool_size };

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ReportSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(if in_memory {
                SqliteJournalMode::Memory
            } else {
                SqliteJournalMode::Wal
            })
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(None)
            .connect_with(opt)
            .await
            .map_err(|e| ReportSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ReportSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ReportSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    reports::{
        entities::Report,
        requests::{CreateReportRequest, UpdateReportRequest},
    },
    submissions::entities::{ArtifactKind, Submission},
    users::{
        entities::User,
        requests::{CreateUserRequest, StudentFilter},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn find_students(&self, filter: StudentFilter) -> Result<Vec<User>> {
        self.find_students_impl(filter).await
    }

    // 报告模块
    async fn create_report(&self, report: CreateReportRequest) -> Result<Report> {
        self.create_report_impl(report).await
    }

    async fn get_report_by_id(&self, id: i64) -> Result<Option<Report>> {
        self.get_report_by_id_impl(id).await
    }

    async fn update_report(
        &self,
        id: i64,
        update: UpdateReportRequest,
    ) -> Result<Option<Report>> {
        self.update_report_impl(id, update).await
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        self.list_reports_impl().await
    }

    // 提交模块
    async fn get_submission(
        &self,
        report_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(report_id, student_id).await
    }

    async fn upsert_submission_slot(
        &self,
        report_id: i64,
        student_id: i64,
        kind: ArtifactKind,
        file_name: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Submission> {
        self.upsert_submission_slot_impl(report_id, student_id, kind, file_name, uploaded_at)
            .await
    }

    async fn list_submissions_by_report(&self, report_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_report_impl(report_id).await
    }

    async fn list_submissions_for_students(
        &self,
        report_id: i64,
        student_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        self.list_submissions_for_students_impl(report_id, student_ids)
            .await
    }
}
