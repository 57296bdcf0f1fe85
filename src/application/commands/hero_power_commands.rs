//! HeroPower Commands

/// 创建英雄能力关联命令
///
/// 字段保持可选，由 handler 统一做存在性与取值校验（`None`、0、空字符串均为缺失）
#[derive(Debug, Clone, Default)]
pub struct CreateHeroPower {
    pub hero_id: Option<i64>,
    pub power_id: Option<i64>,
    pub strength: Option<String>,
}
