//! StudentDash - 学生仪表盘聚合后端服务
//!
//! 基于 Actix Web 构建的学业数据聚合服务：把成绩、选课、作业、测验、
//! 日历事件、课表、考试与会议录像汇总为一份 JSON 文档，供外部单页
//! 仪表盘消费，并提供个人待办与会议录像的写入接口。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话校验中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 聚合与业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

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
