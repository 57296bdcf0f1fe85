//! Power Commands

/// 更新能力描述命令
///
/// `description` 为 `None` 表示请求体中未提供该字段（或为假值）
#[derive(Debug, Clone)]
pub struct UpdatePower {
    pub power_id: i64,
    pub description: Option<String>,
}
