//! Integration tests for the engagement edge toggles.
//!
//! Exercises the toggle contract against a real database: on/off flips,
//! uniqueness under sequential and concurrent calls, independence of likes
//! and dislikes, and the live counts the read side depends on.

use sqlx::PgPool;

use clipstream_core::engagement::{TargetKind, ToggleState};
use clipstream_db::models::user::CreateUser;
use clipstream_db::repositories::{DislikeRepo, LikeRepo, SubscriptionRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(handle: &str) -> CreateUser {
    CreateUser {
        handle: handle.to_string(),
        email: format!("{handle}@test.com"),
        password_hash: "$argon2id$dummy".to_string(),
        display_name: handle.to_string(),
        avatar_url: None,
        cover_image_url: None,
    }
}

async fn create_user(pool: &PgPool, handle: &str) -> i64 {
    UserRepo::create(pool, &new_user(handle))
        .await
        .expect("user creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Subscription toggle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_subscription_toggle_on_then_off(pool: PgPool) {
    let subscriber = create_user(&pool, "alice").await;
    let channel = create_user(&pool, "bob").await;

    let first = SubscriptionRepo::toggle(&pool, subscriber, channel)
        .await
        .expect("toggle should succeed");
    assert_eq!(first.state, ToggleState::On);
    assert_eq!(first.edge.subscriber_id, subscriber);
    assert_eq!(first.edge.channel_id, channel);
    assert!(SubscriptionRepo::exists(&pool, subscriber, channel)
        .await
        .unwrap());

    let second = SubscriptionRepo::toggle(&pool, subscriber, channel)
        .await
        .expect("toggle should succeed");
    assert_eq!(second.state, ToggleState::Off);
    // The deleted edge is the one the first call created.
    assert_eq!(second.edge.id, first.edge.id);
    assert!(!SubscriptionRepo::exists(&pool, subscriber, channel)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_subscription_never_duplicates(pool: PgPool) {
    let subscriber = create_user(&pool, "carol").await;
    let channel = create_user(&pool, "dave").await;

    // Odd number of sequential toggles ends on; at no point more than one
    // edge exists for the pair.
    for _ in 0..3 {
        SubscriptionRepo::toggle(&pool, subscriber, channel)
            .await
            .expect("toggle should succeed");
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2",
        )
        .bind(subscriber)
        .bind(channel)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(count <= 1, "at most one edge may exist per pair");
    }
    assert!(SubscriptionRepo::exists(&pool, subscriber, channel)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_self_subscription_permitted(pool: PgPool) {
    let user = create_user(&pool, "narcissus").await;

    let outcome = SubscriptionRepo::toggle(&pool, user, user)
        .await
        .expect("self-subscription is permitted");
    assert_eq!(outcome.state, ToggleState::On);
    assert_eq!(SubscriptionRepo::subscriber_count(&pool, user).await.unwrap(), 1);
}

/// Concurrent toggles for the same pair: every call performs exactly one
/// flip, so an even number of calls starting from "absent" ends absent and
/// an odd number ends present. At no interleaving do two edges exist.
#[sqlx::test(migrations = "../../migrations")]
async fn test_concurrent_toggles_preserve_parity(pool: PgPool) {
    let subscriber = create_user(&pool, "racer").await;
    let channel = create_user(&pool, "raced").await;

    for (n, expected_present) in [(4, false), (5, true)] {
        // Reset to absent.
        sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2")
            .bind(subscriber)
            .bind(channel)
            .execute(&pool)
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..n {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                SubscriptionRepo::toggle(&pool, subscriber, channel).await
            }));
        }
        let mut on_count = 0;
        let mut off_count = 0;
        for handle in handles {
            let outcome = handle
                .await
                .expect("task should not panic")
                .expect("toggle should succeed");
            match outcome.state {
                ToggleState::On => on_count += 1,
                ToggleState::Off => off_count += 1,
            }
        }

        assert_eq!(on_count + off_count, n);
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2",
        )
        .bind(subscriber)
        .bind(channel)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(count <= 1, "uniqueness constraint must hold");
        assert_eq!(
            count == 1,
            expected_present,
            "{n} toggles from absent must end present={expected_present}"
        );
        // Creates and deletes alternate, so they differ by at most one.
        assert_eq!(on_count - off_count, i32::from(expected_present));
    }
}

// ---------------------------------------------------------------------------
// Like / dislike toggles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_like_toggle_per_kind(pool: PgPool) {
    let user = create_user(&pool, "liker").await;
    let target_id = 99;

    // Same target id under different kinds is three distinct edges.
    for kind in [TargetKind::Video, TargetKind::Comment, TargetKind::Tweet] {
        let outcome = LikeRepo::toggle(&pool, user, kind, target_id)
            .await
            .expect("toggle should succeed");
        assert_eq!(outcome.state, ToggleState::On);
        assert_eq!(outcome.edge.target_kind, kind.as_str());
        assert_eq!(
            LikeRepo::count_for_target(&pool, kind, target_id)
                .await
                .unwrap(),
            1
        );
    }

    let off = LikeRepo::toggle(&pool, user, TargetKind::Video, target_id)
        .await
        .unwrap();
    assert_eq!(off.state, ToggleState::Off);
    assert_eq!(
        LikeRepo::count_for_target(&pool, TargetKind::Video, target_id)
            .await
            .unwrap(),
        0
    );
    // Other kinds untouched.
    assert_eq!(
        LikeRepo::count_for_target(&pool, TargetKind::Comment, target_id)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_like_and_dislike_are_independent(pool: PgPool) {
    let user = create_user(&pool, "ambivalent").await;
    let target_id = 7;

    let like = LikeRepo::toggle(&pool, user, TargetKind::Video, target_id)
        .await
        .unwrap();
    let dislike = DislikeRepo::toggle(&pool, user, TargetKind::Video, target_id)
        .await
        .unwrap();
    assert_eq!(like.state, ToggleState::On);
    assert_eq!(dislike.state, ToggleState::On);

    // Both edges coexist; setting one never cleared the other.
    assert_eq!(
        LikeRepo::count_for_target(&pool, TargetKind::Video, target_id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        DislikeRepo::count_for_target(&pool, TargetKind::Video, target_id)
            .await
            .unwrap(),
        1
    );

    // Toggling the dislike off leaves the like in place.
    let off = DislikeRepo::toggle(&pool, user, TargetKind::Video, target_id)
        .await
        .unwrap();
    assert_eq!(off.state, ToggleState::Off);
    assert_eq!(
        LikeRepo::count_for_target(&pool, TargetKind::Video, target_id)
            .await
            .unwrap(),
        1
    );
}
