use contracts::domain::a001_shop::ShopDto;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_shop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ShopDto {
    fn from(m: Model) -> Self {
        ShopDto {
            id: m.id,
            name: m.name,
        }
    }
}

/// Все действующие магазины, по имени
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<ShopDto>, DbErr> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Name)
        .all(db)
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

pub async fn insert(db: &DatabaseConnection, shop: &ShopDto) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(shop.id.clone()),
        name: Set(shop.name.clone()),
        is_deleted: Set(false),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}
