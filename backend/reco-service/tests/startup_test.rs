use std::io::Write;

use reco_service::config::{Config, LogFormat};
use reco_service::services::POPULAR_MODEL;
use reco_service::startup::{build_state, fit_popular_model};
use reco_service::AppError;

const INTERACTIONS: &str = "\
user_id,item_id,last_watch_dt,total_dur,watched_pct
1,100,2021-08-20,10,5.0
2,100,2021-08-21,10,5.0
3,200,2021-08-22,10,5.0
4,300,2021-08-01,10,5.0
5,300,2021-08-01,10,5.0
6,300,2021-08-01,10,5.0
";

fn config_for(path: &str) -> Config {
    Config {
        service_name: "reco_service".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        k_recs: 10,
        interactions_path: path.to_string(),
        popular_days: 7,
        popular_max_k: 10,
        popular_item_column: "item_id".to_string(),
        popular_dt_column: "last_watch_dt".to_string(),
        jwt_secret: "test-secret".to_string(),
        access_token_expire_minutes: 30,
        log_format: LogFormat::Text,
        openapi_dump_path: String::new(),
    }
}

fn interactions_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(INTERACTIONS.as_bytes()).unwrap();
    file
}

#[test]
fn fits_popular_model_from_csv() {
    let file = interactions_file();
    let config = config_for(file.path().to_str().unwrap());

    let model = fit_popular_model(&config).unwrap();

    // item 300 is outside the 7-day window ending 2021-08-22
    assert_eq!(model.recommend(10).unwrap(), vec![100, 200]);
}

#[test]
fn state_registers_popular_model() {
    let file = interactions_file();
    let config = config_for(file.path().to_str().unwrap());

    let state = build_state(&config).unwrap();

    assert_eq!(state.models.names().collect::<Vec<_>>(), vec![POPULAR_MODEL]);
    assert_eq!(state.k_recs, 10);
    let items = state
        .models
        .get(POPULAR_MODEL)
        .unwrap()
        .recommend(1)
        .unwrap();
    assert_eq!(items, vec![100]);
}

#[test]
fn missing_interactions_file_fails_startup() {
    let config = config_for("/nonexistent/interactions.csv");

    assert!(matches!(build_state(&config), Err(AppError::DataLoad(_))));
}
