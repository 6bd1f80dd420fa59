mod common;

use common::*;
use juicebox::db;
use juicebox::models::PostTag;

#[tokio::test]
async fn create_tags_with_empty_list_returns_nothing() {
    let pool = test_pool().await;
    assert!(db::create_tags(&pool, &[]).await.unwrap().is_empty());
    assert_eq!(count(&pool, "tags").await, 0);
}

#[tokio::test]
async fn create_tags_is_idempotent_across_overlapping_calls() {
    let pool = test_pool().await;

    let first = db::create_tags(&pool, &names(&["#a", "#b"])).await.unwrap();
    assert_eq!(first.len(), 2);

    let second = db::create_tags(&pool, &names(&["#b", "#c", "#c"])).await.unwrap();
    let mut second_names: Vec<&str> = second.iter().map(|t| t.name.as_str()).collect();
    second_names.sort();
    assert_eq!(second_names, vec!["#b", "#c"]);

    // #b는 처음 만든 행 그대로 반환됩니다.
    let b_first = first.iter().find(|t| t.name == "#b").unwrap();
    let b_second = second.iter().find(|t| t.name == "#b").unwrap();
    assert_eq!(b_first, b_second);

    assert_eq!(count(&pool, "tags").await, 3);

    let again = db::create_tags(&pool, &names(&["#a", "#b", "#c"])).await.unwrap();
    assert_eq!(again.len(), 3);
    assert_eq!(count(&pool, "tags").await, 3);
}

#[tokio::test]
async fn create_tags_handles_lists_past_the_sqlite_bind_limit() {
    let pool = test_pool().await;
    let many: Vec<String> = (0..33_000).map(|i| format!("#t{i}")).collect();

    let created = db::create_tags(&pool, &many).await.unwrap();
    assert_eq!(created.len(), 33_000);
    assert!(created.windows(2).all(|w| w[0].id < w[1].id));

    let again = db::create_tags(&pool, &many[..1_000]).await.unwrap();
    assert_eq!(again.len(), 1_000);
    assert_eq!(count(&pool, "tags").await, 33_000);
}

#[tokio::test]
async fn get_tag_by_id_returns_none_for_unknown_id() {
    let pool = test_pool().await;
    assert!(db::get_tag_by_id(&pool, 404).await.unwrap().is_none());

    let created = db::create_tags(&pool, &names(&["#found"])).await.unwrap();
    let found = db::get_tag_by_id(&pool, created[0].id).await.unwrap();
    assert_eq!(found.as_ref(), created.first());
}

#[tokio::test]
async fn list_tags_returns_every_tag() {
    let pool = test_pool().await;
    let created = db::create_tags(&pool, &names(&["#x", "#y", "#z"])).await.unwrap();

    let listed = db::list_tags(&pool).await.unwrap();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn create_post_tag_skips_existing_pair() {
    let pool = test_pool().await;
    let albert = create_user(&pool, "albert").await;
    let post = db::create_post(&pool, &post_request(albert.id, "T", &["#a"]))
        .await
        .unwrap();
    let tag_id = post.tags[0].id;

    // create_post가 이미 연결했으므로 다시 연결해도 건너뜁니다.
    assert!(db::create_post_tag(&pool, post.id, tag_id).await.unwrap().is_none());

    let other = db::create_tags(&pool, &names(&["#b"])).await.unwrap();
    let link = db::create_post_tag(&pool, post.id, other[0].id).await.unwrap();
    assert_eq!(
        link,
        Some(PostTag {
            post_id: post.id,
            tag_id: other[0].id
        })
    );
    assert!(db::create_post_tag(&pool, post.id, other[0].id).await.unwrap().is_none());

    assert_eq!(count(&pool, "post_tags").await, 2);
}

#[tokio::test]
async fn add_tags_to_post_links_and_hydrates() {
    let pool = test_pool().await;
    let albert = create_user(&pool, "albert").await;
    let post = db::create_post(&pool, &post_request(albert.id, "T", &["#a"]))
        .await
        .unwrap();
    let extra = db::create_tags(&pool, &names(&["#a", "#b", "#c"])).await.unwrap();

    let hydrated = db::add_tags_to_post(&pool, post.id, &extra).await.unwrap();

    assert_eq!(sorted_tag_names(&hydrated), vec!["#a", "#b", "#c"]);
    assert_eq!(count(&pool, "post_tags").await, 3);
    assert_eq!(hydrated.author.username, "albert");
}

#[tokio::test]
async fn post_tags_query_joins_through_association() {
    let pool = test_pool().await;
    let albert = create_user(&pool, "albert").await;
    let post = db::create_post(&pool, &post_request(albert.id, "T", &["#one", "#two"]))
        .await
        .unwrap();
    db::create_tags(&pool, &names(&["#unrelated"])).await.unwrap();

    let tags = db::get_post_tags(&pool, post.id).await.unwrap();
    assert_eq!(tags, post.tags);
}
