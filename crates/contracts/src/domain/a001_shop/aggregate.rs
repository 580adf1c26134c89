use serde::{Deserialize, Serialize};

/// Магазин (точка проката), в контексте которого работает пользователь
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopDto {
    pub id: String,
    pub name: String,
}

impl ShopDto {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
