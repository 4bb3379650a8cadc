use axum::http::StatusCode;

use super::{repo, status::PickupStatus};
use crate::test_utils::{body_text, location, session_cookie, TestApp};

const LAPTOP: &str = "name=A&email=a%40x.com&address=1+St&item=Laptop&date=2024-01-01";

async fn first_pickup_id(app: &TestApp) -> i64 {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM pickups ORDER BY id LIMIT 1")
        .fetch_one(&app.state.db)
        .await
        .unwrap();
    id
}

#[tokio::test]
async fn schedule_scenario_end_to_end() {
    let app = TestApp::new().await;
    app.register("a@x.com", "pw1", false).await;
    let res = app.post_form("/login", "email=a%40x.com&password=pw1", None).await;
    let cookie = session_cookie(&res).unwrap();

    let res = app.post_form("/schedule", LAPTOP, Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let id = first_pickup_id(&app).await;
    assert!(body_text(res)
        .await
        .contains(&format!("Pickup request #{id} created for A")));

    let admin = app.register("admin@x.com", "pw", true).await;
    let res = app.get("/requests", Some(&admin)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page = body_text(res).await;
    assert_eq!(page.matches(r#"action="/requests/"#).count(), 1);
    assert!(page.contains(r#"<td class="py-2 pr-6">Scheduled</td>"#));

    let all = repo::list_all(&app.state.db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, PickupStatus::Scheduled);
    assert_eq!(all[0].address, "1 St");
}

#[tokio::test]
async fn anonymous_schedule_is_redirected_and_writes_nothing() {
    let app = TestApp::new().await;
    let res = app.post_form("/schedule", LAPTOP, None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));
    assert_eq!(app.count("pickups").await, 0);
}

#[tokio::test]
async fn schedule_form_is_public() {
    let app = TestApp::new().await;
    let res = app.get("/schedule", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains(r#"id="scheduleSubmit""#));
}

#[tokio::test]
async fn schedule_trims_and_accepts_empty_fields() {
    let app = TestApp::new().await;
    let cookie = app.register("a@x.com", "pw", false).await;

    let res = app
        .post_form("/schedule", "name=++Bo++&item=%09Phone%0A", Some(&cookie))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let p = repo::find(&app.state.db, first_pickup_id(&app).await)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(p.name, "Bo");
    assert_eq!(p.item, "Phone");
    assert_eq!(p.email, "");
    assert_eq!(p.date, "");
}

#[tokio::test]
async fn my_pickups_only_lists_own_rows() {
    let app = TestApp::new().await;
    let a = app.register("a@x.com", "pw", false).await;
    let b = app.register("b@x.com", "pw", false).await;

    app.post_form("/schedule", "name=A&item=Laptop", Some(&a)).await;
    app.post_form("/schedule", "name=B&item=Fridge", Some(&b)).await;

    let page_b = body_text(app.get("/my-pickups", Some(&b)).await).await;
    assert!(page_b.contains("Fridge"));
    assert!(!page_b.contains("Laptop"));

    let page_a = body_text(app.get("/my-pickups", Some(&a)).await).await;
    assert!(page_a.contains("Laptop"));
    assert!(!page_a.contains("Fridge"));
}

#[tokio::test]
async fn my_pickups_requires_session() {
    let app = TestApp::new().await;
    let res = app.get("/my-pickups", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));
}

#[tokio::test]
async fn non_admin_is_redirected_home_and_nothing_changes() {
    let app = TestApp::new().await;
    let user = app.register("a@x.com", "pw", false).await;
    app.post_form("/schedule", LAPTOP, Some(&user)).await;
    let id = first_pickup_id(&app).await;

    let res = app.get("/requests", Some(&user)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));

    let res = app
        .post_form(&format!("/requests/{id}/status"), "status=Recycled", Some(&user))
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));

    let p = repo::find(&app.state.db, id).await.unwrap().unwrap();
    assert_eq!(p.status, PickupStatus::Scheduled);
    assert_eq!(app.count("pickups").await, 1);
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn anonymous_admin_list_goes_to_login() {
    let app = TestApp::new().await;
    let res = app.get("/requests", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));
}

#[tokio::test]
async fn admin_updates_status_and_listing_reflects_it() {
    let app = TestApp::new().await;
    let user = app.register("a@x.com", "pw", false).await;
    app.post_form("/schedule", LAPTOP, Some(&user)).await;
    let id = first_pickup_id(&app).await;

    let admin = app.register("admin@x.com", "pw", true).await;
    let res = app
        .post_form(&format!("/requests/{id}/status"), "status=Recycled", Some(&admin))
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/requests"));

    let page = body_text(app.get("/requests", Some(&admin)).await).await;
    assert!(page.contains(r#"<td class="py-2 pr-6">Recycled</td>"#));
    assert!(page.contains(r#"<option value="Recycled" selected>Recycled</option>"#));

    let own = body_text(app.get("/my-pickups", Some(&user)).await).await;
    assert!(own.contains("Recycled"));
}

#[tokio::test]
async fn unknown_status_is_rejected_and_row_unchanged() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com", "pw", true).await;
    app.post_form("/schedule", LAPTOP, Some(&admin)).await;
    let id = first_pickup_id(&app).await;

    let res = app
        .post_form(&format!("/requests/{id}/status"), "status=Lost", Some(&admin))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let p = repo::find(&app.state.db, id).await.unwrap().unwrap();
    assert_eq!(p.status, PickupStatus::Scheduled);
}

#[tokio::test]
async fn empty_status_is_a_no_op() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com", "pw", true).await;
    app.post_form("/schedule", LAPTOP, Some(&admin)).await;
    let id = first_pickup_id(&app).await;

    let res = app
        .post_form(&format!("/requests/{id}/status"), "status=++", Some(&admin))
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/requests"));
    let p = repo::find(&app.state.db, id).await.unwrap().unwrap();
    assert_eq!(p.status, PickupStatus::Scheduled);
}

#[tokio::test]
async fn missing_pickup_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com", "pw", true).await;
    let res = app
        .post_form("/requests/999/status", "status=Recycled", Some(&admin))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_list_is_newest_first() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com", "pw", true).await;
    app.post_form("/schedule", "name=First&item=Old+TV", Some(&admin)).await;
    app.post_form("/schedule", "name=Second&item=New+TV", Some(&admin)).await;

    let page = body_text(app.get("/requests", Some(&admin)).await).await;
    let second = page.find("Second").unwrap();
    let first = page.find("First").unwrap();
    assert!(second < first);
}

#[tokio::test]
async fn user_input_is_escaped_in_listings() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com", "pw", true).await;
    app.post_form("/schedule", "name=%3Cscript%3Ex%3C%2Fscript%3E", Some(&admin))
        .await;

    let page = body_text(app.get("/requests", Some(&admin)).await).await;
    assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!page.contains("<script>x</script>"));
}
