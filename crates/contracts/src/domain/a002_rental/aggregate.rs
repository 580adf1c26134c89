use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Имя коллекции документов проката
pub const COLLECTION_NAME: &str = "rentals";

/// Точечные пути к полям документа проката.
///
/// Используются и в фильтрах запроса, и в accessor-ах колонок таблицы.
pub mod fields {
    pub const ID: &str = "id";
    pub const SHOP_ID: &str = "shopId";
    pub const RENTAL_STATE: &str = "rentalState";
    pub const END_DATE: &str = "endDate";
    pub const FIRST_NAME: &str = "responsiblePerson.firstName";
    pub const LAST_NAME: &str = "responsiblePerson.lastName";
    pub const CHARGE_AMOUNT: &str = "charge.amount";
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Состояние жизненного цикла проката
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalState {
    Created,
    Active,
    Completed,
    Cancelled,
}

impl RentalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalState::Created => "CREATED",
            RentalState::Active => "ACTIVE",
            RentalState::Completed => "COMPLETED",
            RentalState::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(RentalState::Created),
            "ACTIVE" => Some(RentalState::Active),
            "COMPLETED" => Some(RentalState::Completed),
            "CANCELLED" => Some(RentalState::Cancelled),
            _ => None,
        }
    }
}

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiblePerson {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Документ проката в том виде, в каком его отдаёт шлюз запросов.
///
/// Только для чтения: создаётся и изменяется процессом выдачи/возврата.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDto {
    pub id: String,
    pub shop_id: String,
    pub rental_state: RentalState,
    pub responsible_person: ResponsiblePerson,
    pub end_date: DateTime<Utc>,
    pub charge: Charge,
}
