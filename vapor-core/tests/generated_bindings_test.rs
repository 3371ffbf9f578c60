use mock_webapi::{MOCK_API_KEY, SCHEMA};
use vapor_core::client::{ClientConfig, VaporClient};
use vapor_core::schema::SchemaStore;

#[allow(dead_code)]
mod bindings {
    include!("bindings/mock_webapi.rs");
}

use bindings::{
    ICheatReportingService, ICheatReportingServiceReportPlayerCheatingV1Params, ISteamNews,
    ISteamNewsGetNewsForAppV2Params, ISteamWebAPIUtil, ISteamWebAPIUtilGetServerInfoV1Params,
};

async fn setup_client() -> VaporClient {
    let base_url = mock_webapi::spawn().await.expect("Failed to spawn mock service");
    let schema: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();

    let config = ClientConfig::new(MOCK_API_KEY).with_base_url(&base_url).unwrap();

    VaporClient::new(&schema, config).expect("Failed to build client")
}

#[test]
fn test_bindings_match_generator_output() {
    let index = SchemaStore::from_slice(SCHEMA.as_bytes())
        .unwrap()
        .index()
        .unwrap();

    assert_eq!(
        vapor_core::codegen::generate(&index),
        include_str!("bindings/mock_webapi.rs"),
        "bindings are stale, regenerate them with `vapor --schema <mock schema> generate --out <file>`"
    );
}

#[tokio::test]
async fn test_generated_get_wrapper() {
    let client = setup_client().await;

    let res = ISteamNews::new(&client)
        .get_news_for_app_v2(ISteamNewsGetNewsForAppV2Params {
            appid: 440,
            count: 3,
            maxlength: None,
        })
        .await
        .unwrap();

    assert_eq!(res["method"], "GET");
    assert_eq!(res["path"], "/ISteamNews/GetNewsForApp/v2/");
    assert_eq!(
        res["query"],
        serde_json::json!({ "appid": "440", "count": "3", "key": MOCK_API_KEY })
    );
}

#[tokio::test]
async fn test_generated_post_wrapper() {
    let client = setup_client().await;

    let res = ICheatReportingService::new(&client)
        .report_player_cheating_v1(ICheatReportingServiceReportPlayerCheatingV1Params {
            steamid: 76561197960287930,
            appid: 440,
            heuristic: Some(true),
        })
        .await
        .unwrap();

    assert_eq!(res["method"], "POST");
    assert_eq!(
        res["form"],
        serde_json::json!({
            "appid": "440",
            "heuristic": "true",
            "key": MOCK_API_KEY,
            "steamid": "76561197960287930",
        })
    );
    assert_eq!(res["query"], serde_json::json!({}));
}

#[tokio::test]
async fn test_generated_wrapper_without_parameters() {
    let client = setup_client().await;

    let res = ISteamWebAPIUtil::new(&client)
        .get_server_info_v1(ISteamWebAPIUtilGetServerInfoV1Params::default())
        .await
        .unwrap();

    assert_eq!(res["path"], "/ISteamWebAPIUtil/GetServerInfo/v1/");
    assert_eq!(res["query"], serde_json::json!({ "key": MOCK_API_KEY }));
}
