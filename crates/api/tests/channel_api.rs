//! HTTP-level integration tests for the read-side channel views.

mod common;

use axum::http::StatusCode;
use common::{assert_envelope, body_json, create_test_user, get_auth, login_token, patch_auth};
use sqlx::PgPool;

use clipstream_db::models::video::CreateVideo;
use clipstream_db::repositories::VideoRepo;

/// Subscribe/unsubscribe scenario: profile counts and `is_subscribed`
/// track the toggle in both directions.
#[sqlx::test(migrations = "../../migrations")]
async fn test_subscription_reflected_in_profile(pool: PgPool) {
    create_test_user(&pool, "viewer").await;
    let channel = create_test_user(&pool, "channel").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "viewer").await;

    let profile_uri = format!("/api/v1/channels/{}/profile", channel.id);
    let toggle_uri = format!("/api/v1/engagement/subscriptions/{}", channel.id);

    // Before subscribing.
    let json = body_json(get_auth(app.clone(), &profile_uri, &token).await).await;
    assert_eq!(json["data"]["subscriber_count"], 0);
    assert_eq!(json["data"]["is_subscribed"], false);

    // Toggle on.
    let json = body_json(patch_auth(app.clone(), &toggle_uri, &token).await).await;
    assert_eq!(json["data"]["state"], "on");

    let json = body_json(get_auth(app.clone(), &profile_uri, &token).await).await;
    assert_eq!(json["data"]["subscriber_count"], 1);
    assert_eq!(json["data"]["is_subscribed"], true);
    assert_eq!(json["data"]["handle"], "channel");

    // Toggle off: count returns to zero.
    let json = body_json(patch_auth(app.clone(), &toggle_uri, &token).await).await;
    assert_eq!(json["data"]["state"], "off");

    let json = body_json(get_auth(app, &profile_uri, &token).await).await;
    assert_eq!(json["data"]["subscriber_count"], 0);
    assert_eq!(json["data"]["is_subscribed"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_profile_counts_both_directions(pool: PgPool) {
    let hub_id = create_test_user(&pool, "hub").await.id;
    let fan_id = create_test_user(&pool, "fan").await.id;
    let app = common::build_test_app(pool);

    let hub_token = login_token(app.clone(), "hub").await;
    let fan_token = login_token(app.clone(), "fan").await;

    let uri = format!("/api/v1/engagement/subscriptions/{fan_id}");
    patch_auth(app.clone(), &uri, &hub_token).await;
    let uri = format!("/api/v1/engagement/subscriptions/{hub_id}");
    patch_auth(app.clone(), &uri, &fan_token).await;

    let json = body_json(
        get_auth(
            app,
            &format!("/api/v1/channels/{hub_id}/profile"),
            &hub_token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["subscriber_count"], 1);
    assert_eq!(json["data"]["subscribed_to_count"], 1);
    // The hub does not subscribe to itself.
    assert_eq!(json["data"]["is_subscribed"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_profile_unknown_user_is_not_found(pool: PgPool) {
    create_test_user(&pool, "seeker").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "seeker").await;

    let response = get_auth(app, "/api/v1/channels/999999/profile", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_envelope(&json, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_channel_stats_totals(pool: PgPool) {
    let channel = create_test_user(&pool, "creator").await;
    create_test_user(&pool, "fanone").await;
    create_test_user(&pool, "fantwo").await;

    let mut video_ids = Vec::new();
    for i in 0..3 {
        let video = VideoRepo::create(
            &pool,
            &CreateVideo {
                owner_id: channel.id,
                title: format!("video {i}"),
                description: String::new(),
                video_url: "https://cdn.test/v.mp4".to_string(),
                thumbnail_url: "https://cdn.test/t.jpg".to_string(),
                duration_secs: 10.0,
            },
        )
        .await
        .unwrap();
        video_ids.push(video.id);
    }

    let app = common::build_test_app(pool);
    let creator_token = login_token(app.clone(), "creator").await;
    let fanone_token = login_token(app.clone(), "fanone").await;
    let fantwo_token = login_token(app.clone(), "fantwo").await;

    // Two subscribers, three likes across the channel's videos, five views.
    let sub_uri = format!("/api/v1/engagement/subscriptions/{}", channel.id);
    patch_auth(app.clone(), &sub_uri, &fanone_token).await;
    patch_auth(app.clone(), &sub_uri, &fantwo_token).await;

    for &id in &video_ids {
        let uri = format!("/api/v1/engagement/likes/video/{id}");
        patch_auth(app.clone(), &uri, &fanone_token).await;
    }
    for _ in 0..5 {
        let uri = format!("/api/v1/videos/{}", video_ids[0]);
        get_auth(app.clone(), &uri, &fanone_token).await;
    }

    let json = body_json(
        get_auth(
            app,
            &format!("/api/v1/channels/{}/stats", channel.id),
            &creator_token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["total_videos"], 3);
    assert_eq!(json["data"]["total_views"], 5);
    assert_eq!(json["data"]["total_subscribers"], 2);
    assert_eq!(json["data"]["total_likes"], 3);
}
