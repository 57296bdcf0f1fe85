//! Power Context - Value Objects

use super::PowerError;

/// 能力描述
///
/// 不变量:
/// - 不能为空字符串（空白字符串视为有效内容，不做裁剪）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerDescription(String);

impl PowerDescription {
    pub fn new(description: impl Into<String>) -> Result<Self, PowerError> {
        let description = description.into();
        if description.is_empty() {
            return Err(PowerError::EmptyDescription);
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PowerDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_rejected() {
        assert_eq!(PowerDescription::new(""), Err(PowerError::EmptyDescription));
    }

    #[test]
    fn test_description_kept_verbatim() {
        let description = PowerDescription::new("  gives the wielder flight ").unwrap();
        assert_eq!(description.as_str(), "  gives the wielder flight ");
    }
}
