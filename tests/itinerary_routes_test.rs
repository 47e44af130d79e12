mod common;

use actix_web::test;
use serde_json::json;

use common::{paris_trip, TestApp};

#[actix_rt::test]
async fn test_optimize_paris_two_days() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&paris_trip("2023-06-01", "2023-06-03"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");

    let data = &body["data"];
    assert_eq!(data["summary"]["total_destinations"], 1);
    assert_eq!(data["summary"]["total_days"], 2);
    assert_eq!(data["itinerary"][0]["destination"], "Paris");

    let day = &data["itinerary"][0]["daily_itineraries"][0];
    assert_eq!(day["date"], "2023-06-01");
    assert_eq!(day["day_of_week"], "Thursday");

    let first = &day["activities"][0];
    assert_eq!(first["id"], "p1");
    assert_eq!(first["start_time"], "09:00");
    assert_eq!(first["end_time"], "12:30");
    assert_eq!(first["travel_time"], 0.0);
    assert_eq!(first["preference_score"], 9.5);
    assert_eq!(first["coordinates"]["lat"], 48.8584);
}

#[actix_rt::test]
async fn test_optimize_unknown_location() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&json!({
            "destinations": [
                {"location": "Atlantis", "startDate": "2023-06-01", "endDate": "2023-06-03"}
            ]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["itinerary"], json!([]));
    assert_eq!(data["summary"]["total_destinations"], 0);
    assert_eq!(data["summary"]["total_days"], 0);
    assert_eq!(data["summary"]["estimated_cost"], 0.0);
    assert_eq!(data["skipped_locations"], json!(["Atlantis"]));
}

#[actix_rt::test]
async fn test_optimize_with_category_filter() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&json!({
            "destinations": [
                {"location": "Bali", "startDate": "2023-06-01", "endDate": "2023-06-02"}
            ],
            "preferences": {"categories": ["nature"]}
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    let activities = body["data"]["itinerary"][0]["daily_itineraries"][0]["activities"]
        .as_array()
        .unwrap();
    assert!(!activities.is_empty());
    for activity in activities {
        assert_eq!(activity["category"], "nature");
    }
}

#[actix_rt::test]
async fn test_optimize_invalid_date_is_bad_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&paris_trip("01/06/2023", "2023-06-03"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("startDate"));
}

#[actix_rt::test]
async fn test_optimize_overlong_trip_is_bad_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&paris_trip("0001-01-01", "9999-12-31"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("Paris"));
}

#[actix_rt::test]
async fn test_optimize_malformed_body_is_bad_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/optimize-itinerary")
        .set_json(&json!({"destinations": "Paris"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
}

#[actix_rt::test]
async fn test_optimize_is_repeatable() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/optimize-itinerary")
            .set_json(&paris_trip("2023-06-01", "2023-06-04"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
}
