mod common;

use common::*;
use juicebox::{db, seed};

#[tokio::test]
async fn demo_data_is_seeded_once() {
    let pool = test_pool().await;

    assert!(seed::seed_demo_data(&pool).await.unwrap());
    assert!(!seed::seed_demo_data(&pool).await.unwrap());

    assert_eq!(db::list_users(&pool).await.unwrap().len(), 3);
    assert_eq!(db::list_posts(&pool).await.unwrap().len(), 3);
    assert_eq!(db::list_tags(&pool).await.unwrap().len(), 4);

    let happy = db::list_posts_by_tag_name(&pool, "#happy").await.unwrap();
    let authors: Vec<&str> = happy.iter().map(|p| p.author.username.as_str()).collect();
    assert_eq!(authors, vec!["albert", "glamgal"]);
}
