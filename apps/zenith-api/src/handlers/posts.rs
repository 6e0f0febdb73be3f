//! Planner handlers: list view, calendar view and post scheduling.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use zenith_core::DomainError;
use zenith_core::planner;
use zenith_core::ports::{BaseRepository, ScheduledPostRepository};
use zenith_shared::ApiResponse;
use zenith_shared::dto::{
    CalendarQuery, CalendarResponse, PostListQuery, SchedulePostRequest, ScheduledPostResponse,
};

use super::viewer_offset;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users/{user_id}/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let query = query.into_inner();
    let now = Utc::now().with_timezone(&viewer_offset(query.tz_offset_minutes)?);

    let posts = state.posts.find_by_user_id(user_id).await?;
    let visible: Vec<ScheduledPostResponse> =
        planner::filter_and_sort(&posts, query.status, query.time, &now)
            .into_iter()
            .map(ScheduledPostResponse::from)
            .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(visible)))
}

/// GET /api/users/{user_id}/posts/calendar
pub async fn calendar(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<CalendarQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let query = query.into_inner();
    let offset = viewer_offset(query.tz_offset_minutes)?;
    let view_date = query
        .date
        .unwrap_or_else(|| planner::today(&Utc::now().with_timezone(&offset)));

    // Both neighbours must exist for the period itself to be complete.
    let (Some(previous), Some(next)) = (
        planner::previous_period(view_date, query.mode),
        planner::next_period(view_date, query.mode),
    ) else {
        return Err(AppError::BadRequest(format!(
            "date {view_date} is too close to the end of the calendar"
        )));
    };

    let posts = state.posts.find_by_user_id(user_id).await?;
    let grid = planner::bucket_for_calendar(&posts, view_date, query.mode, &offset);

    let calendar = CalendarResponse::new(query.mode, &grid, previous, next);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(calendar)))
}

/// POST /api/users/{user_id}/posts
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<SchedulePostRequest>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let req = body.into_inner();
    let offset = viewer_offset(req.tz_offset_minutes)?;

    let post = req.draft.validate(&offset)?.into_post(user_id);
    let saved = state.posts.save(post).await?;

    tracing::info!(
        post_id = %saved.id,
        user_id = %user_id,
        platform = %saved.platform,
        "Post scheduled"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        ScheduledPostResponse::from(&saved),
        "Post scheduled",
    )))
}

/// PUT /api/users/{user_id}/posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<SchedulePostRequest>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let req = body.into_inner();
    let offset = viewer_offset(req.tz_offset_minutes)?;

    // Someone else's post is reported as missing.
    let existing = state
        .posts
        .find_by_id(post_id)
        .await?
        .filter(|post| post.user_id == user_id)
        .ok_or(DomainError::NotFound {
            entity_type: "ScheduledPost",
            id: post_id,
        })?;

    let updated = req.draft.validate(&offset)?.apply_to(existing);
    let saved = state.posts.save(updated).await?;

    tracing::info!(post_id = %saved.id, status = %saved.status, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        ScheduledPostResponse::from(&saved),
        "Post updated",
    )))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use zenith_core::domain::PostStatus;

    use super::*;
    use crate::handlers::{configure_routes, json_config};

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::in_memory())
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(json_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn draft(status: &str, date: &str, time: &str) -> Value {
        json!({
            "platform": "Facebook",
            "content": format!("{status} post"),
            "date": date,
            "time": time,
            "status": status,
        })
    }

    #[actix_web::test]
    async fn test_create_then_list_ranks_errors_first() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();
        let uri = format!("/api/users/{user}/posts");

        for body in [
            draft("Scheduled", "2024-01-03", "09:00"),
            draft("Error", "2024-01-05", "09:00"),
            draft("Draft", "2024-01-01", "09:00"),
        ] {
            let req = test::TestRequest::post().uri(&uri).set_json(body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: ApiResponse<Vec<ScheduledPostResponse>> =
            test::call_and_read_body_json(&app, req).await;

        let statuses: Vec<_> = body.data.unwrap().iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![PostStatus::Error, PostStatus::Scheduled, PostStatus::Draft]
        );
    }

    #[actix_web::test]
    async fn test_list_filters_by_status() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();
        let uri = format!("/api/users/{user}/posts");

        for body in [
            draft("Scheduled", "2024-01-03", "09:00"),
            draft("Published", "2024-01-04", "09:00"),
        ] {
            let req = test::TestRequest::post().uri(&uri).set_json(body).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri(&format!("{uri}?status=Published"))
            .to_request();
        let body: ApiResponse<Vec<ScheduledPostResponse>> =
            test::call_and_read_body_json(&app, req).await;

        let posts = body.data.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[actix_web::test]
    async fn test_list_accepts_the_all_filters() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();
        let uri = format!("/api/users/{user}/posts");

        for body in [
            draft("Draft", "2024-01-03", "09:00"),
            draft("Error", "2024-01-04", "09:00"),
        ] {
            let req = test::TestRequest::post().uri(&uri).set_json(body).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri(&format!("{uri}?status=All&time=All"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ApiResponse<Vec<ScheduledPostResponse>> = test::read_body_json(resp).await;
        assert_eq!(body.data.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_unknown_status_filter_is_a_bad_request() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}/posts?status=Archived", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_calendar_at_the_end_of_the_calendar_is_a_bad_request() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();

        for mode in ["week", "month"] {
            let req = test::TestRequest::get()
                .uri(&format!(
                    "/api/users/{user}/posts/calendar?date={}&mode={mode}",
                    NaiveDate::MAX.format("%Y-%m-%d").to_string().replace('+', "%2B")
                ))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{mode}");
        }

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/users/{user}/posts/calendar?date=%2B262142-12-31&mode=week"
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_invalid_draft_lists_every_problem() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{}/posts", Uuid::new_v4()))
            .set_json(json!({
                "platform": "LinkedIn",
                "content": "  ",
                "date": "",
                "time": "25:99",
                "status": "Scheduled",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_a_bad_request() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{}/posts", Uuid::new_v4()))
            .set_json(json!({ "platform": "MySpace" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_month_calendar_with_navigation() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{user}/posts"))
            .set_json(draft("Scheduled", "2024-01-20", "10:30"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/users/{user}/posts/calendar?date=2024-01-15&mode=month"
            ))
            .to_request();
        let body: ApiResponse<CalendarResponse> = test::call_and_read_body_json(&app, req).await;
        let calendar = body.data.unwrap();

        assert_eq!(calendar.days.len(), 31);
        assert_eq!(calendar.leading_empty_slots, 1);
        assert_eq!(calendar.days[19].posts.len(), 1);
        assert_eq!(calendar.previous, NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        assert_eq!(calendar.next, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    }

    #[actix_web::test]
    async fn test_week_calendar_has_seven_days() {
        let state = app_state();
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/users/{}/posts/calendar?date=2024-02-01&mode=week",
                Uuid::new_v4()
            ))
            .to_request();
        let body: ApiResponse<CalendarResponse> = test::call_and_read_body_json(&app, req).await;
        let calendar = body.data.unwrap();

        assert_eq!(calendar.days.len(), 7);
        assert_eq!(calendar.days[0].date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
        assert_eq!(calendar.next, NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
    }

    #[actix_web::test]
    async fn test_update_replaces_the_post() {
        let state = app_state();
        let app = init_app!(state);
        let user = Uuid::new_v4();

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{user}/posts"))
            .set_json(draft("Draft", "2024-01-03", "09:00"))
            .to_request();
        let created: ApiResponse<ScheduledPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        let id = created.data.unwrap().id;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{user}/posts/{id}"))
            .set_json(draft("Published", "2024-01-04", "12:00"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let posts = state.posts.find_by_user_id(user).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, id);
        assert_eq!(posts[0].status, PostStatus::Published);
        assert_eq!(posts[0].content, "Published post");
    }

    #[actix_web::test]
    async fn test_update_of_another_users_post_is_not_found() {
        let state = app_state();
        let app = init_app!(state);
        let owner = Uuid::new_v4();

        let req = test::TestRequest::post()
            .uri(&format!("/api/users/{owner}/posts"))
            .set_json(draft("Draft", "2024-01-03", "09:00"))
            .to_request();
        let created: ApiResponse<ScheduledPostResponse> =
            test::call_and_read_body_json(&app, req).await;
        let id = created.data.unwrap().id;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/posts/{id}", Uuid::new_v4()))
            .set_json(draft("Published", "2024-01-04", "12:00"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
