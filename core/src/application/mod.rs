use sea_orm::DatabaseConnection;

use crate::domain::common::{FoodbootConfig, services::Service};
use crate::infrastructure::{
    calendar::PostgresCalendarRepository,
    calendar_event::PostgresCalendarEventRepository,
    client::PostgresClientRepository,
    customer::PostgresCustomerRepository,
    db::postgres::{Postgres, PostgresConfig},
    food_combination::PostgresFoodCombinationRepository,
    food_option::PostgresFoodOptionRepository,
    food_preference::PostgresFoodPreferenceRepository,
    meal_plan::PostgresMealPlanRepository,
    medical_history::PostgresMedicalHistoryRepository,
};

pub type FoodbootService = Service<
    PostgresClientRepository,
    PostgresMedicalHistoryRepository,
    PostgresFoodPreferenceRepository,
    PostgresFoodOptionRepository,
    PostgresCalendarRepository,
    PostgresCalendarEventRepository,
    PostgresMealPlanRepository,
    PostgresFoodCombinationRepository,
    PostgresCustomerRepository,
>;

pub async fn create_service(config: FoodbootConfig) -> Result<FoodbootService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url,
        max_connections: config.database.max_connections,
    })
    .await?;

    Ok(service_from_connection(postgres.get_db()))
}

/// Wires every repository onto an already connected database.
pub fn service_from_connection(db: DatabaseConnection) -> FoodbootService {
    Service::new(
        PostgresClientRepository::new(db.clone()),
        PostgresMedicalHistoryRepository::new(db.clone()),
        PostgresFoodPreferenceRepository::new(db.clone()),
        PostgresFoodOptionRepository::new(db.clone()),
        PostgresCalendarRepository::new(db.clone()),
        PostgresCalendarEventRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        PostgresFoodCombinationRepository::new(db.clone()),
        PostgresCustomerRepository::new(db),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{
        calendar::ports::CalendarService,
        calendar_event::{ports::CalendarEventService, value_objects::CreateCalendarEventInput},
        client::{
            entities::Client,
            ports::ClientService,
            value_objects::{CreateClientInput, UpdateClientInput},
        },
        common::{entities::app_errors::CoreError, value_objects::ListQuery},
        food_combination::{
            ports::FoodCombinationService, value_objects::FoodCombinationPatch,
        },
        food_preference::{ports::FoodPreferenceService, value_objects::FoodPreferencePatch},
        meal_plan::{ports::MealPlanService, value_objects::MealPlanPatch},
        medical_history::{ports::MedicalHistoryService, value_objects::MedicalHistoryPatch},
    };
    use crate::infrastructure::db::testing::sqlite_memory;

    async fn service() -> FoodbootService {
        service_from_connection(sqlite_memory().await)
    }

    async fn client(service: &FoodbootService, email: &str) -> Client {
        service
            .create_client(CreateClientInput {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                dob: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
                gender: "female".to_string(),
                email: email.to_string(),
                phone: "555-0100".to_string(),
                address: "1 Analytical Way".to_string(),
                food_allergies: "none".to_string(),
            })
            .await
            .unwrap()
    }

    fn history_patch(client_id: i32, height: &str) -> MedicalHistoryPatch {
        MedicalHistoryPatch {
            client_id: Some(client_id),
            date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            height: Some(height.to_string()),
            weight: Some("68".to_string()),
        }
    }

    #[tokio::test]
    async fn second_client_with_same_email_conflicts() {
        let service = service().await;
        client(&service, "ada@example.com").await;

        let err = service
            .create_client(CreateClientInput {
                first_name: "Augusta".to_string(),
                last_name: "King".to_string(),
                dob: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
                gender: "female".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0101".to_string(),
                address: "2 Analytical Way".to_string(),
                food_allergies: "none".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::DuplicateKey("Client with this email already exists!".to_string())
        );
        assert_eq!(service.count_clients().await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn update_with_empty_values_keeps_the_client() {
        let service = service().await;
        let created = client(&service, "ada@example.com").await;

        let updated = service
            .update_client(
                created.id,
                UpdateClientInput {
                    first_name: Some(String::new()),
                    phone: Some("555-0199".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.phone.as_deref(), Some("555-0199"));
    }

    #[tokio::test]
    async fn deleting_twice_reports_not_found() {
        let service = service().await;
        let created = client(&service, "ada@example.com").await;

        assert_eq!(service.delete_client(created.id).await.unwrap(), created);
        assert!(matches!(
            service.delete_client(created.id).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn medical_history_upsert_creates_then_updates() {
        let service = service().await;
        let created = client(&service, "ada@example.com").await;

        let first = service
            .upsert_medical_history(7, history_patch(created.id, "170"))
            .await
            .unwrap();
        assert!(first.is_created());

        let second = service
            .upsert_medical_history(7, history_patch(created.id, "171"))
            .await
            .unwrap();
        assert!(!second.is_created());

        let histories = service.get_medical_histories(created.id).await.unwrap();
        assert_eq!(histories.len(), 1);
        assert_eq!(histories[0].id, 7);
        assert_eq!(histories[0].height.as_deref(), Some("171"));
    }

    #[tokio::test]
    async fn medical_history_for_unknown_client_is_not_found() {
        let service = service().await;

        let err = service
            .upsert_medical_history(7, history_patch(404, "170"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::NotFound("Invalid client for id: 404!".to_string())
        );
    }

    #[tokio::test]
    async fn incomplete_medical_history_is_rejected_before_lookup() {
        let service = service().await;

        let err = service
            .upsert_medical_history(
                7,
                MedicalHistoryPatch {
                    height: None,
                    ..history_patch(404, "170")
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::missing_fields());
    }

    #[tokio::test]
    async fn food_preferences_hold_one_row_per_client() {
        let service = service().await;
        let created = client(&service, "ada@example.com").await;

        for value in ["vegetarian", "vegan", ""] {
            service
                .upsert_food_preference(
                    created.id,
                    FoodPreferencePatch {
                        value: Some(value.to_string()),
                    },
                )
                .await
                .unwrap();
        }

        let preferences = service.get_food_preferences(created.id).await.unwrap();
        assert_eq!(preferences.len(), 1);
        assert_eq!(preferences[0].value.as_deref(), Some("vegan"));
    }

    #[tokio::test]
    async fn food_combination_needs_an_existing_meal_plan() {
        let service = service().await;
        let created = client(&service, "ada@example.com").await;

        let patch = |meal_plan_id| FoodCombinationPatch {
            meal_plan_id: Some(meal_plan_id),
            title: Some("Oats".to_string()),
            portion: Some("1 bowl".to_string()),
            start: Some("08:00".to_string()),
            end: Some("08:30".to_string()),
            type_of_meal: Some("breakfast".to_string()),
            day: Some("monday".to_string()),
        };

        assert!(matches!(
            service
                .upsert_food_combination("fc-1".to_string(), patch(1))
                .await,
            Err(CoreError::NotFound(_))
        ));

        let plan = service
            .upsert_meal_plan(
                created.id,
                MealPlanPatch {
                    client_first_name: Some("Ada".to_string()),
                    client_last_name: Some("Lovelace".to_string()),
                    date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .into_inner();

        service
            .upsert_food_combination("fc-1".to_string(), patch(plan.id))
            .await
            .unwrap();
        assert_eq!(
            service.get_food_combinations(plan.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn calendar_event_requires_its_calendar() {
        let service = service().await;
        let input = CreateCalendarEventInput {
            id: "evt-1".to_string(),
            user_email: "nutri@example.com".to_string(),
            title: "Weigh-in".to_string(),
            start: None,
            end: None,
            all_day: None,
        };

        assert!(matches!(
            service.create_calendar_event(input.clone()).await,
            Err(CoreError::NotFound(_))
        ));

        service
            .create_calendar("nutri@example.com".to_string())
            .await
            .unwrap();
        service.create_calendar_event(input.clone()).await.unwrap();

        let duplicate = service.create_calendar_event(input).await.unwrap_err();
        assert!(matches!(duplicate, CoreError::DuplicateKey(_)));

        let counted = service
            .count_calendar_events("nutri@example.com".to_string())
            .await
            .unwrap();
        assert_eq!(counted.count, 1);
        assert_eq!(
            service.get_calendars(ListQuery::default()).await.unwrap().len(),
            1
        );
    }
}
