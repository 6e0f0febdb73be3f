//! Auto-post history handler.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use zenith_core::history::auto_post_history;
use zenith_core::ports::ArticleRepository;
use zenith_shared::ApiResponse;
use zenith_shared::dto::{AutoPostEntryResponse, AutoPostHistoryQuery};

use super::viewer_offset;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{user_id}/auto-posts
pub async fn history(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<AutoPostHistoryQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let query = query.into_inner();
    let now = Utc::now().with_timezone(&viewer_offset(query.tz_offset_minutes)?);

    let articles = state.articles.find_by_user_id(user_id).await?;
    let entries: Vec<AutoPostEntryResponse> =
        auto_post_history(&articles, query.status, query.date, &now)
            .into_iter()
            .map(AutoPostEntryResponse::from)
            .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use chrono::TimeDelta;
    use zenith_core::domain::{Article, AutoPostStatus, Platform};
    use zenith_core::ports::BaseRepository;

    use super::*;
    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn test_history_lists_attempted_articles_newest_first() {
        let state = web::Data::new(AppState::in_memory());
        let user = Uuid::new_v4();
        let now = Utc::now();

        let older = Article::new(user, "Older".to_string()).auto_posted(
            AutoPostStatus::Success,
            Platform::WordPress,
            now - TimeDelta::hours(2),
        );
        let newer = Article::new(user, "Newer".to_string()).auto_posted(
            AutoPostStatus::Error,
            Platform::Facebook,
            now - TimeDelta::hours(1),
        );
        let untouched = Article::new(user, "Untouched".to_string());
        let foreign = Article::new(Uuid::new_v4(), "Foreign".to_string()).auto_posted(
            AutoPostStatus::Success,
            Platform::LinkedIn,
            now,
        );
        for article in [older, newer, untouched, foreign] {
            state.articles.save(article).await.unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user}/auto-posts"))
            .to_request();
        let body: ApiResponse<Vec<AutoPostEntryResponse>> =
            test::call_and_read_body_json(&app, req).await;
        let titles: Vec<_> = body.data.unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{user}/auto-posts?status=SUCCESS"))
            .to_request();
        let body: ApiResponse<Vec<AutoPostEntryResponse>> =
            test::call_and_read_body_json(&app, req).await;
        let entries = body.data.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].platform, Some(Platform::WordPress));
    }
}
