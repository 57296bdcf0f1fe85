//! Hero Queries

/// 获取英雄详情查询
#[derive(Debug, Clone)]
pub struct GetHero {
    pub hero_id: i64,
}

/// 列出所有英雄查询
#[derive(Debug, Clone)]
pub struct ListHeroes;
