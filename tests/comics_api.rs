// =====================================================
// 만화 / 챕터 통합 테스트
// =====================================================

mod common;
use common::*;

use nwt_api_server::domains::comics::models::{ChapterCreate, ComicUpdate, CreateComicRequest};
use nwt_api_server::shared::errors::ComicError;

fn create_request(title: &str) -> CreateComicRequest {
    CreateComicRequest {
        title: title.to_string(),
        description: Some("A test comic".to_string()),
        cover_url: None,
    }
}

/// 테스트: 만화 생성
///
/// 슬러그가 제목에서 파생되고, 초기 상태는 draft여야 합니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_comic() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 0).await;

    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Space Cats"))
        .await
        .expect("Failed to create comic");

    assert_eq!(comic.title, "Space Cats");
    assert!(comic.slug.starts_with("space-cats-"));
    assert_eq!(comic.status, "draft");
    assert_eq!(comic.creator_profile_id, profile_id);

    teardown_test(&db).await;
}

/// 테스트: 목록에는 published 만화만 노출
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_list_comics_only_published() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 0).await;

    let draft = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Draft Comic"))
        .await
        .expect("Failed to create comic");

    let published = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Published Comic"))
        .await
        .expect("Failed to create comic");

    // 한 권만 공개로 전환
    app_state
        .comic_state
        .comic_service
        .update_comic(
            published.id,
            &profile_id,
            ComicUpdate {
                title: None,
                description: None,
                cover_url: None,
                status: Some("published".to_string()),
            },
        )
        .await
        .expect("Failed to publish comic");

    let comics = app_state
        .comic_state
        .comic_service
        .list_comics()
        .await
        .expect("Failed to list comics");

    assert_eq!(comics.len(), 1);
    assert_eq!(comics[0].id, published.id);
    assert!(comics.iter().all(|c| c.id != draft.id));

    teardown_test(&db).await;
}

/// 테스트: 작성자가 아니면 수정 거부
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_comic_not_owner() {
    let (app_state, db) = setup_test().await;
    let owner = seed_wallet(&db, 0).await;
    let stranger = seed_wallet(&db, 0).await;

    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&owner, create_request("Owned Comic"))
        .await
        .expect("Failed to create comic");

    let result = app_state
        .comic_state
        .comic_service
        .update_comic(
            comic.id,
            &stranger,
            ComicUpdate {
                title: Some("Hijacked".to_string()),
                description: None,
                cover_url: None,
                status: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ComicError::NotComicOwner)));

    teardown_test(&db).await;
}

/// 테스트: 없는 만화 조회
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_comic_not_found() {
    let (app_state, db) = setup_test().await;

    let result = app_state.comic_state.comic_service.get_comic(999999).await;
    assert!(matches!(result, Err(ComicError::ComicNotFound { .. })));

    teardown_test(&db).await;
}

/// 테스트: 챕터 생성 및 조회
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_and_get_chapter() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 0).await;

    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Chaptered Comic"))
        .await
        .expect("Failed to create comic");

    let chapter = app_state
        .comic_state
        .chapter_service
        .create_chapter(
            comic.id,
            &profile_id,
            ChapterCreate {
                chapter_number: 1,
                title: "First Contact".to_string(),
                content_url: None,
                published: None,
            },
        )
        .await
        .expect("Failed to create chapter");

    assert_eq!(chapter.comic_id, comic.id);
    assert_eq!(chapter.chapter_number, 1);
    assert!(!chapter.published); // 기본값은 비공개

    let fetched = app_state
        .comic_state
        .chapter_service
        .get_chapter(comic.id, 1)
        .await
        .expect("Failed to get chapter");
    assert_eq!(fetched.id, chapter.id);

    teardown_test(&db).await;
}

/// 테스트: 챕터 번호 중복 거부
///
/// 같은 만화에 같은 번호의 챕터를 두 번 만들 수 없습니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_chapter_number_rejected() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 0).await;

    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Dup Chapters"))
        .await
        .expect("Failed to create comic");

    let request = || ChapterCreate {
        chapter_number: 1,
        title: "First Contact".to_string(),
        content_url: None,
        published: None,
    };

    app_state
        .comic_state
        .chapter_service
        .create_chapter(comic.id, &profile_id, request())
        .await
        .expect("Failed to create chapter");

    let result = app_state
        .comic_state
        .chapter_service
        .create_chapter(comic.id, &profile_id, request())
        .await;
    assert!(matches!(
        result,
        Err(ComicError::ChapterNumberTaken { chapter_number: 1 })
    ));

    teardown_test(&db).await;
}

/// 테스트: 챕터 목록 정렬
///
/// 챕터는 번호 오름차순으로 반환됩니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_list_chapters_ordered() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 0).await;

    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&profile_id, create_request("Ordered Comic"))
        .await
        .expect("Failed to create comic");

    // 역순으로 생성
    for n in [3, 1, 2] {
        app_state
            .comic_state
            .chapter_service
            .create_chapter(
                comic.id,
                &profile_id,
                ChapterCreate {
                    chapter_number: n,
                    title: format!("Chapter {}", n),
                    content_url: None,
                    published: None,
                },
            )
            .await
            .expect("Failed to create chapter");
    }

    let chapters = app_state
        .comic_state
        .chapter_service
        .list_chapters(comic.id)
        .await
        .expect("Failed to list chapters");

    let numbers: Vec<i32> = chapters.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    teardown_test(&db).await;
}
