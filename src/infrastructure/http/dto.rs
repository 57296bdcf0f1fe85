//! Data Transfer Objects
//!
//! 请求体字段先解码为原始 JSON 值：假值（`null`、`false`、`0`、`""`、`[]`、`{}`）
//! 一律视为缺失，其余值再做类型转换，存在性与取值校验由应用层完成

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::application as app;
use crate::domain::Strength;
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// Request DTOs
// ============================================================================

/// 过滤假值
fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

/// 类型不符时返回与解码器一致的 400 消息
fn typed_field<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::bad_request(format!(
            "Failed to deserialize the JSON body into the target type: {}: {}",
            field, e
        ))
    })
}

/// PATCH /powers/{id}
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePowerRequest {
    pub description: Option<Value>,
}

impl UpdatePowerRequest {
    /// 提取描述，假值为 `None`
    pub fn into_description(self) -> Result<Option<String>, ApiError> {
        present(self.description)
            .map(|v| typed_field("description", v))
            .transpose()
    }
}

/// POST /hero_powers
#[derive(Debug, Default, Deserialize)]
pub struct CreateHeroPowerRequest {
    pub hero_id: Option<Value>,
    pub power_id: Option<Value>,
    pub strength: Option<Value>,
}

impl TryFrom<CreateHeroPowerRequest> for app::CreateHeroPower {
    type Error = ApiError;

    fn try_from(req: CreateHeroPowerRequest) -> Result<Self, Self::Error> {
        let (Some(hero_id), Some(power_id), Some(strength)) = (
            present(req.hero_id),
            present(req.power_id),
            present(req.strength),
        ) else {
            // 任一字段缺失时不做类型转换，交给应用层报告缺失
            return Ok(Self::default());
        };

        // 非字符串的 strength 按字面值参与枚举校验
        let strength = match strength {
            Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(Self {
            hero_id: Some(typed_field("hero_id", hero_id)?),
            power_id: Some(typed_field("power_id", power_id)?),
            strength: Some(strength),
        })
    }
}

// ============================================================================
// Power DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PowerResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<app::PowerResponse> for PowerResponse {
    fn from(p: app::PowerResponse) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
        }
    }
}

// ============================================================================
// Hero DTOs
// ============================================================================

/// 英雄详情中的能力条目
#[derive(Debug, Serialize)]
pub struct HeroPowerItemResponse {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub power: PowerResponse,
}

impl From<app::HeroPowerItem> for HeroPowerItemResponse {
    fn from(item: app::HeroPowerItem) -> Self {
        Self {
            id: item.id,
            hero_id: item.hero_id,
            power_id: item.power_id,
            strength: item.strength,
            power: item.power.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerItemResponse>,
}

impl From<app::HeroResponse> for HeroResponse {
    fn from(h: app::HeroResponse) -> Self {
        Self {
            id: h.id,
            name: h.name,
            super_name: h.super_name,
            hero_powers: h.hero_powers.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// HeroPower DTOs
// ============================================================================

/// 关联响应中嵌套的英雄（不含能力列表）
#[derive(Debug, Serialize)]
pub struct HeroSummaryResponse {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Serialize)]
pub struct HeroPowerResponse {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroSummaryResponse,
    pub power: PowerResponse,
}

impl From<app::CreateHeroPowerResponse> for HeroPowerResponse {
    fn from(r: app::CreateHeroPowerResponse) -> Self {
        Self {
            id: r.id,
            hero_id: r.hero_id,
            power_id: r.power_id,
            strength: r.strength,
            hero: HeroSummaryResponse {
                id: r.hero.id,
                name: r.hero.name,
                super_name: r.hero.super_name,
            },
            power: r.power.into(),
        }
    }
}
