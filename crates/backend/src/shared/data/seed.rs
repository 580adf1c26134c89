use chrono::{Duration, Utc};
use contracts::domain::a001_shop::ShopDto;
use contracts::domain::a002_rental::{Charge, RentalDto, RentalState, ResponsiblePerson};
use sea_orm::DatabaseConnection;

use crate::domain::{a001_shop, a002_rental};

const PEOPLE: &[(&str, &str)] = &[
    ("Anna", "Berg"),
    ("Jonas", "Keller"),
    ("Mia", "Novak"),
    ("Lukas", "Fischer"),
    ("Sofia", "Marin"),
    ("Elias", "Horvat"),
    ("Lea", "Schmid"),
];

/// Демонстрационные данные для пустой базы: два магазина и прокаты во всех состояниях.
///
/// Возвращает количество вставленных прокатов (0, если магазины уже есть).
pub async fn seed_demo_data(db: &DatabaseConnection) -> anyhow::Result<usize> {
    if a001_shop::repository::count(db).await? > 0 {
        tracing::info!("Demo seed skipped: shops already present");
        return Ok(0);
    }

    let shops = [
        ShopDto::new(uuid::Uuid::new_v4().to_string(), "Harbour Bikes"),
        ShopDto::new(uuid::Uuid::new_v4().to_string(), "Summit Ski Rental"),
    ];
    for shop in &shops {
        a001_shop::repository::insert(db, shop).await?;
    }

    let states = [
        RentalState::Completed,
        RentalState::Completed,
        RentalState::Active,
        RentalState::Completed,
        RentalState::Cancelled,
        RentalState::Created,
    ];
    let now = Utc::now();
    let mut inserted = 0;

    for (shop_index, shop) in shops.iter().enumerate() {
        // Первый магазин получает больше одной страницы отчёта
        let rentals_per_shop = if shop_index == 0 { 60 } else { 12 };
        for i in 0..rentals_per_shop {
            let (first_name, last_name) = PEOPLE[i % PEOPLE.len()];
            let rental = RentalDto {
                id: uuid::Uuid::new_v4().to_string(),
                shop_id: shop.id.clone(),
                rental_state: states[i % states.len()],
                responsible_person: ResponsiblePerson {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                },
                end_date: now - Duration::hours(7 * (i as i64 + 1)),
                charge: Charge {
                    amount: 15.0 + (i % 9) as f64 * 7.5,
                    currency: Some("EUR".to_string()),
                },
            };
            a002_rental::repository::insert(db, &rental).await?;
            inserted += 1;
        }
    }

    tracing::info!("Demo seed inserted {} shops and {} rentals", shops.len(), inserted);
    Ok(inserted)
}
