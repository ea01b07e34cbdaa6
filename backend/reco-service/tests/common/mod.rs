#![allow(dead_code)]

use chrono::NaiveDate;
use reco_service::security::users::{DEMO_PASSWORD, DEMO_USERNAME};
use reco_service::security::{JwtKeys, User, UserDirectory};
use reco_service::services::{Interaction, ModelRegistry, PopularRecommender, POPULAR_MODEL};
use reco_service::AppState;

pub const TEST_SECRET: &str = "test-secret";
pub const K_RECS: usize = 10;

pub fn interaction(item_id: i64, y: i32, m: u32, d: u32) -> Interaction {
    Interaction {
        item_id,
        event_date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

pub fn fitted_popular() -> PopularRecommender {
    let mut model = PopularRecommender::new(10, 7, "item_id", "date");
    model.fit(&[
        interaction(1, 2023, 1, 1),
        interaction(1, 2023, 1, 2),
        interaction(2, 2023, 1, 2),
        // outside the window
        interaction(3, 2022, 12, 1),
        interaction(3, 2022, 12, 1),
        interaction(3, 2022, 12, 1),
    ]);
    model
}

pub fn users() -> UserDirectory {
    let mut directory = UserDirectory::demo().unwrap();
    directory
        .insert(
            User {
                username: "retired".to_string(),
                email: None,
                full_name: None,
                disabled: Some(true),
            },
            "pw",
        )
        .unwrap();
    directory
}

pub fn state_with(models: ModelRegistry) -> AppState {
    AppState::new(
        models,
        K_RECS,
        JwtKeys::from_secret(TEST_SECRET, 30),
        users(),
    )
}

pub fn state() -> AppState {
    state_with(
        ModelRegistry::builder()
            .register(POPULAR_MODEL, fitted_popular())
            .build(),
    )
}

pub fn bearer(username: &str) -> (&'static str, String) {
    let token = JwtKeys::from_secret(TEST_SECRET, 30)
        .create_access_token(username)
        .unwrap();
    ("Authorization", format!("Bearer {token}"))
}

pub fn demo_bearer() -> (&'static str, String) {
    bearer(DEMO_USERNAME)
}

pub fn demo_credentials() -> (&'static str, &'static str) {
    (DEMO_USERNAME, DEMO_PASSWORD)
}
