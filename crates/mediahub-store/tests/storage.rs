//! Repository behaviour through the `Storage` trait object.

use std::sync::Arc;

use mediahub_core::{NewMedia, NewTopDownload, NewUser};
use mediahub_store::{MemStorage, Storage, StoreError};

fn new_media(title: &str, media_type: &str, category: &str, featured: bool) -> NewMedia {
    NewMedia {
        title: title.to_string(),
        artist: "Test Artist".to_string(),
        media_type: media_type.to_string(),
        category: category.to_string(),
        duration: "2:30".to_string(),
        downloads: 100,
        featured,
        image_url: "/img.png".to_string(),
        file_url: format!("/downloads/{}.bin", title.to_lowercase()),
    }
}

fn sample_store() -> Arc<dyn Storage> {
    Arc::new(MemStorage::with_sample_data().unwrap())
}

#[tokio::test]
async fn test_ids_start_at_one_and_increase() {
    let store = MemStorage::empty();

    let mut last = 0;
    for title in ["a", "b", "c"] {
        let media = store
            .create_media(new_media(title, "music", "Pop", false))
            .await
            .unwrap();
        assert!(media.id > last);
        last = media.id;
    }
    assert_eq!(last, 3);

    let user = store
        .create_user(NewUser {
            username: "first".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, 1);

    let second = store
        .create_user(NewUser {
            username: "second".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_user_lookups() {
    let store = MemStorage::empty();
    let created = store
        .create_user(NewUser {
            username: "carol".to_string(),
            password: "plain-text".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(store.get_user(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        store.get_user_by_username("carol").await.unwrap(),
        Some(created.clone())
    );
    assert_eq!(created.password, "plain-text");

    assert_eq!(store.get_user(99).await.unwrap(), None);
    assert_eq!(store.get_user_by_username("Carol").await.unwrap(), None);
}

#[tokio::test]
async fn test_all_media_in_insertion_order() {
    let store = sample_store();
    let all = store.get_all_media().await.unwrap();

    let ids: Vec<i32> = all.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(all[0].title, "Trending Hits 2024");
    assert_eq!(all[3].title, "Live Concert Highlights");
}

#[tokio::test]
async fn test_featured_is_ordered_subset() {
    let store = MemStorage::empty();
    store.create_media(new_media("One", "music", "Pop", true)).await.unwrap();
    store.create_media(new_media("Two", "video", "Pop", false)).await.unwrap();
    store.create_media(new_media("Three", "music", "Rock", true)).await.unwrap();
    store.create_media(new_media("Four", "video", "Rock", true)).await.unwrap();

    let all = store.get_all_media().await.unwrap();
    let expected: Vec<_> = all.into_iter().filter(|m| m.featured).collect();
    let featured = store.get_featured_media().await.unwrap();

    assert_eq!(featured, expected);
    let titles: Vec<&str> = featured.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Three", "Four"]);
}

#[tokio::test]
async fn test_media_by_type_is_exact() {
    let store = sample_store();

    let music = store.get_media_by_type("music").await.unwrap();
    assert_eq!(music.len(), 2);
    assert!(music.iter().all(|m| m.media_type == "music"));

    assert_eq!(store.get_media_by_type("video").await.unwrap().len(), 2);
    assert!(store.get_media_by_type("Music").await.unwrap().is_empty());
    assert!(store.get_media_by_type("podcast").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = sample_store();

    let results = store.search_media("ELECTRONIC").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, "Electronic");

    // "various artists" appears as artist on two records
    let results = store.search_media("various").await.unwrap();
    assert_eq!(results.len(), 2);

    // Matches category "Concert" and title "Live Concert Highlights" on one record
    let results = store.search_media("concert").await.unwrap();
    assert_eq!(results.len(), 1);

    assert!(store.search_media("no such thing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_increment_downloads_n_times() {
    let store = sample_store();
    let before = store.get_media_by_id(2).await.unwrap().unwrap().downloads;

    for _ in 0..5 {
        store.increment_downloads(2).await.unwrap();
    }

    let after = store.get_media_by_id(2).await.unwrap().unwrap().downloads;
    assert_eq!(after, before + 5);
}

#[tokio::test]
async fn test_increment_missing_media_is_noop() {
    let store = sample_store();
    let before = store.get_all_media().await.unwrap();

    store.increment_downloads(999).await.unwrap();

    assert_eq!(store.get_all_media().await.unwrap(), before);
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let store = sample_store();
    let before = store.get_media_by_id(1).await.unwrap().unwrap().downloads;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.increment_downloads(1).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let after = store.get_media_by_id(1).await.unwrap().unwrap().downloads;
    assert_eq!(after, before + 50);
}

#[tokio::test]
async fn test_sample_top_downloads() {
    let store = sample_store();
    let top = store.get_top_downloads().await.unwrap();

    assert_eq!(top.len(), 3);
    for (i, row) in top.iter().enumerate() {
        assert_eq!(row.entry.rank, i as i32 + 1);
        assert_eq!(row.entry.media_id, i as i32 + 1);
        assert_eq!(row.entry.downloads, row.media.downloads);
    }
}

#[tokio::test]
async fn test_top_downloads_sorted_by_rank() {
    let store = MemStorage::empty();
    for title in ["a", "b", "c"] {
        store.create_media(new_media(title, "music", "Pop", false)).await.unwrap();
    }

    for (media_id, rank) in [(1, 3), (2, 1), (3, 2)] {
        store
            .create_top_download(NewTopDownload {
                media_id,
                rank,
                downloads: 0,
            })
            .await
            .unwrap();
    }

    let top = store.get_top_downloads().await.unwrap();
    let ranks: Vec<i32> = top.iter().map(|r| r.entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    for row in &top {
        let media = store.get_media_by_id(row.entry.media_id).await.unwrap();
        assert_eq!(Some(row.media.clone()), media);
    }
}

#[tokio::test]
async fn test_tied_ranks_keep_insertion_order() {
    let store = MemStorage::empty();
    for title in ["a", "b", "c"] {
        store.create_media(new_media(title, "music", "Pop", false)).await.unwrap();
    }

    for (media_id, rank) in [(1, 2), (2, 1), (3, 1)] {
        store
            .create_top_download(NewTopDownload {
                media_id,
                rank,
                downloads: 0,
            })
            .await
            .unwrap();
    }

    let top = store.get_top_downloads().await.unwrap();
    let ids: Vec<i32> = top.iter().map(|r| r.entry.id).collect();
    let media_ids: Vec<i32> = top.iter().map(|r| r.media.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(media_ids, vec![2, 3, 1]);
}

#[tokio::test]
async fn test_top_download_snapshot_does_not_track_counter() {
    let store = sample_store();
    store.increment_downloads(1).await.unwrap();

    let top = store.get_top_downloads().await.unwrap();
    assert_eq!(top[0].entry.downloads, 1_200_000);
    assert_eq!(top[0].media.downloads, 1_200_001);
}

#[tokio::test]
async fn test_dangling_top_download_fails() {
    let store = MemStorage::empty();
    store
        .create_top_download(NewTopDownload {
            media_id: 42,
            rank: 1,
            downloads: 10,
        })
        .await
        .unwrap();

    let err = store.get_top_downloads().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::DanglingReference {
            top_download_id: 1,
            media_id: 42
        }
    ));
}
