mod common;

use common::{date, student_request, TestApp};
use tutor_scheduling::domain::services::slots::SlotStatus;

async fn seed_standard(app: &TestApp) {
    app.seed_tutor("T1", "Dana Rivera").await;
    app.seed_course("C1", "Calculus I").await;
    app.seed_window(
        "AV1",
        "T1",
        "Monday",
        "13:00:00",
        "17:00:00",
        "2025-01-01",
        "2025-12-31",
        "available",
    )
    .await;
}

#[tokio::test]
async fn test_week_normalizes_to_sunday_and_spans_six_days() {
    let app = TestApp::new().await;
    seed_standard(&app).await;

    // 2025-06-04 is a Wednesday; the window snaps back to Sunday 06-01.
    let grid = app.scheduler.build_week(date("2025-06-04"), None).await.unwrap();

    assert_eq!(
        grid.dates,
        vec![
            "2025-06-01", "2025-06-02", "2025-06-03",
            "2025-06-04", "2025-06-05", "2025-06-06",
        ]
    );
    // Saturday 06-07 is excluded by the 6-day window.
    assert_eq!(
        grid.hours,
        vec!["13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00", "20:00"]
    );
}

#[tokio::test]
async fn test_sunday_start_is_left_alone() {
    let app = TestApp::new().await;
    seed_standard(&app).await;

    let grid = app.scheduler.build_week(date("2025-06-01"), None).await.unwrap();
    assert_eq!(grid.dates[0], "2025-06-01");
}

#[tokio::test]
async fn test_non_working_dates_are_omitted_not_marked() {
    let app = TestApp::new().await;
    seed_standard(&app).await;

    let grid = app.scheduler.build_week(date("2025-06-01"), None).await.unwrap();

    assert_eq!(grid.tutors.len(), 1);
    let tutor = &grid.tutors[0];
    assert_eq!(tutor.tutor_id, "T1");
    assert_eq!(tutor.tutor_name, "Dana Rivera");

    // Only Monday appears; the other five dates are dropped entirely.
    assert_eq!(tutor.available_days, vec!["2025-06-02"]);
    assert_eq!(tutor.slots.len(), 1);
    assert!(tutor.slots.contains_key("2025-06-02"));
}

#[tokio::test]
async fn test_tutor_with_no_availability_is_omitted() {
    let app = TestApp::new().await;
    seed_standard(&app).await;
    app.seed_tutor("T2", "Sam Ortiz").await;
    // A window outside the requested week contributes nothing.
    app.seed_window(
        "AV2",
        "T2",
        "Monday",
        "13:00:00",
        "17:00:00",
        "2026-01-01",
        "2026-12-31",
        "available",
    )
    .await;
    // A blocked-out window never counts as availability.
    app.seed_tutor("T3", "Kim Doyle").await;
    app.seed_window(
        "AV3",
        "T3",
        "Tuesday",
        "13:00:00",
        "17:00:00",
        "2025-01-01",
        "2025-12-31",
        "unavailable",
    )
    .await;

    let grid = app.scheduler.build_week(date("2025-06-01"), None).await.unwrap();

    let ids: Vec<&str> = grid.tutors.iter().map(|t| t.tutor_id.as_str()).collect();
    assert_eq!(ids, vec!["T1"]);
}

#[tokio::test]
async fn test_tutor_filter() {
    let app = TestApp::new().await;
    seed_standard(&app).await;
    app.seed_tutor("T2", "Sam Ortiz").await;
    app.seed_window(
        "AV2",
        "T2",
        "Tuesday",
        "13:00:00",
        "17:00:00",
        "2025-01-01",
        "2025-12-31",
        "available",
    )
    .await;

    let filter = vec!["T2".to_string()];
    let grid = app
        .scheduler
        .build_week(date("2025-06-01"), Some(&filter))
        .await
        .unwrap();

    assert_eq!(grid.tutors.len(), 1);
    assert_eq!(grid.tutors[0].tutor_id, "T2");
}

#[tokio::test]
async fn test_grid_serializes_to_wire_format() {
    let app = TestApp::new().await;
    seed_standard(&app).await;

    app.scheduler
        .book(student_request("T1", "a@b.com", "C1", "2025-06-02", "14:00:00", "15:00:00"))
        .await
        .unwrap();

    let grid = app.scheduler.build_week(date("2025-06-01"), None).await.unwrap();
    let json = serde_json::to_value(&grid).unwrap();

    assert_eq!(json["hours"][0], "13:00");
    assert_eq!(json["tutors"][0]["tutor_name"], "Dana Rivera");
    assert_eq!(json["tutors"][0]["slots"]["2025-06-02"]["13:00"], "available");
    assert_eq!(json["tutors"][0]["slots"]["2025-06-02"]["14:00"], "pending");
    assert_eq!(json["tutors"][0]["available_days"][0], "2025-06-02");
}

#[tokio::test]
async fn test_grid_reflects_slot_statuses() {
    let app = TestApp::new().await;
    seed_standard(&app).await;

    app.scheduler
        .book(student_request("T1", "a@b.com", "C1", "2025-06-02", "14:00:00", "15:00:00"))
        .await
        .unwrap();

    let grid = app.scheduler.build_week(date("2025-06-01"), None).await.unwrap();
    let monday = &grid.tutors[0].slots["2025-06-02"];

    assert_eq!(monday["13:00"], SlotStatus::Available);
    assert_eq!(monday["14:00"], SlotStatus::Pending);
    assert_eq!(monday["15:00"], SlotStatus::Available);
    // Display hours past the tutor's window read unavailable.
    assert_eq!(monday["17:00"], SlotStatus::Unavailable);
    assert_eq!(monday["20:00"], SlotStatus::Unavailable);
    assert_eq!(monday.len(), 8);
}
