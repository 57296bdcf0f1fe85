//! Power Queries

/// 获取能力详情查询
#[derive(Debug, Clone)]
pub struct GetPower {
    pub power_id: i64,
}

/// 列出所有能力查询
#[derive(Debug, Clone)]
pub struct ListPowers;
