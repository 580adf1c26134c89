use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a002_rental::{Charge, RentalDto, RentalState, ResponsiblePerson};
use contracts::shared::query::SortDirection;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use super::query_plan::RentalQueryPlan;
use crate::shared::query_error::QueryError;

/// Документ проката, разложенный по колонкам
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_rental")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub shop_id: String,
    pub rental_state: String,
    pub first_name: String,
    pub last_name: String,
    /// RFC 3339, UTC, всегда 9 знаков долей секунды: строковая сортировка
    /// совпадает с хронологической, дата восстанавливается без потерь
    pub end_date: String,
    pub charge_amount: f64,
    pub charge_currency: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn format_end_date(end_date: &DateTime<Utc>) -> String {
    end_date.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl Model {
    pub fn into_dto(self) -> Result<RentalDto, QueryError> {
        let rental_state =
            RentalState::parse(&self.rental_state).ok_or_else(|| QueryError::InvalidRecord {
                id: self.id.clone(),
                reason: format!("unknown rental state '{}'", self.rental_state),
            })?;
        let end_date = DateTime::parse_from_rfc3339(&self.end_date)
            .map_err(|e| QueryError::InvalidRecord {
                id: self.id.clone(),
                reason: format!("bad end date '{}': {}", self.end_date, e),
            })?
            .with_timezone(&Utc);

        Ok(RentalDto {
            id: self.id,
            shop_id: self.shop_id,
            rental_state,
            responsible_person: ResponsiblePerson {
                first_name: self.first_name,
                last_name: self.last_name,
            },
            end_date,
            charge: Charge {
                amount: self.charge_amount,
                currency: self.charge_currency,
            },
        })
    }
}

/// Выборка по плану запроса. При равных ключах сортировки порядок стабилен по id.
pub async fn list_by_plan(
    db: &DatabaseConnection,
    plan: &RentalQueryPlan,
) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find();

    for (column, value) in &plan.filters {
        query = query.filter(column.eq(value.as_str()));
    }

    if let Some((column, direction)) = plan.order {
        query = match direction {
            SortDirection::Asc => query.order_by_asc(column),
            SortDirection::Desc => query.order_by_desc(column),
        };
    }

    query.order_by_asc(Column::Id).all(db).await
}

pub async fn insert(db: &DatabaseConnection, rental: &RentalDto) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(rental.id.clone()),
        shop_id: Set(rental.shop_id.clone()),
        rental_state: Set(rental.rental_state.as_str().to_string()),
        first_name: Set(rental.responsible_person.first_name.clone()),
        last_name: Set(rental.responsible_person.last_name.clone()),
        end_date: Set(format_end_date(&rental.end_date)),
        charge_amount: Set(rental.charge.amount),
        charge_currency: Set(rental.charge.currency.clone()),
    };
    active.insert(db).await?;
    Ok(())
}
