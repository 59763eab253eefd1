//! ReportSys - 实验报告提交与归档后端服务
//!
//! 基于 Actix Web 构建的实验报告收发系统后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（命名引擎、截止策略、提交与导出）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数（命名、归档、JWT）

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
