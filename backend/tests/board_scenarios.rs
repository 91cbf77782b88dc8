//! End-to-end scenarios driving the use cases over the in-memory adapters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use board_backend::domain::ports::{
    CommentRepository, PostRepository, UserRepository, UserRepositoryError,
};
use board_backend::domain::use_cases::{
    CreateUserRequest, CreateUserUseCase, DeleteCommentErrorCode, DeleteCommentRequest,
    DeleteCommentUseCase, DeletePostErrorCode, DeletePostRequest, DeletePostUseCase,
    GetPostRequest, GetPostUseCase, GetUserErrorCode, GetUserRequest, GetUserUseCase,
    ListCommentsByAuthorIdRequest, ListCommentsByAuthorIdUseCase, ListCommentsByPostIdRequest,
    ListCommentsByPostIdUseCase, ListPostsByAuthorIdRequest, ListPostsByAuthorIdUseCase,
    ListPostsErrorCode, ListPostsRequest, ListPostsUseCase, PostPayload, SaveCommentRequest,
    SaveCommentUseCase, SavePostErrorCode, SavePostRequest, SavePostUseCase, UseCase,
};
use board_backend::domain::{
    AggregateRoot, CommentId, Page, Post, PostDraft, PostId, User, UserId, Users,
};
use board_backend::outbound::memory::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
};
use chrono::Utc;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

/// User store that counts batch lookups before delegating.
#[derive(Default)]
struct CountingUsers {
    inner: InMemoryUserRepository,
    batch_lookups: AtomicUsize,
}

impl CountingUsers {
    fn batch_lookups(&self) -> usize {
        self.batch_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for CountingUsers {
    async fn find_one_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        self.inner.find_one_by_id(id).await
    }

    async fn find_all_by_ids(&self, ids: &[UserId]) -> Result<Users, UserRepositoryError> {
        self.batch_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all_by_ids(ids).await
    }

    async fn save(&self, user: &User) -> Result<Option<User>, UserRepositoryError> {
        self.inner.save(user).await
    }
}

struct Board {
    users: Arc<CountingUsers>,
    posts: Arc<InMemoryPostRepository>,
    comments: Arc<InMemoryCommentRepository>,
    clock: Arc<dyn Clock>,
}

impl Board {
    async fn create_user(&self, name: &str) -> UserId {
        CreateUserUseCase::new(Arc::clone(&self.users), Arc::clone(&self.clock))
            .execute(CreateUserRequest {
                name: name.to_owned(),
            })
            .await
            .expect("user created")
            .id
    }

    fn save_post(&self) -> SavePostUseCase<CountingUsers, InMemoryPostRepository> {
        SavePostUseCase::new(
            Arc::clone(&self.users),
            Arc::clone(&self.posts),
            Arc::clone(&self.clock),
        )
    }

    fn save_comment(
        &self,
    ) -> SaveCommentUseCase<CountingUsers, InMemoryPostRepository, InMemoryCommentRepository>
    {
        SaveCommentUseCase::new(
            Arc::clone(&self.users),
            Arc::clone(&self.posts),
            Arc::clone(&self.comments),
            Arc::clone(&self.clock),
        )
    }

    fn get_post(&self) -> GetPostUseCase<CountingUsers, InMemoryPostRepository> {
        GetPostUseCase::new(Arc::clone(&self.users), Arc::clone(&self.posts))
    }

    fn list_posts(&self) -> ListPostsUseCase<CountingUsers, InMemoryPostRepository> {
        ListPostsUseCase::new(Arc::clone(&self.users), Arc::clone(&self.posts))
    }

    async fn publish(&self, author_id: &UserId, title: &str, content: &str) -> PostId {
        self.save_post()
            .execute(SavePostRequest {
                id: None,
                author_id: author_id.clone(),
                title: title.to_owned(),
                content: content.to_owned(),
            })
            .await
            .expect("post published")
            .post_id
    }

    async fn stored_post(&self, id: &PostId) -> Option<Post> {
        self.posts.find_one_by_id(id).await.expect("post lookup")
    }
}

#[fixture]
fn board() -> Board {
    Board {
        users: Arc::new(CountingUsers::default()),
        posts: Arc::new(InMemoryPostRepository::new()),
        comments: Arc::new(InMemoryCommentRepository::new()),
        clock: Arc::new(DefaultClock),
    }
}

#[rstest]
#[tokio::test]
async fn create_user_mints_fresh_identities_stamped_at_call_time(board: Board) {
    let before = Utc::now();
    let use_case = CreateUserUseCase::new(Arc::clone(&board.users), Arc::clone(&board.clock));

    let first = use_case
        .execute(CreateUserRequest {
            name: "Ada".to_owned(),
        })
        .await
        .expect("first user");
    let second = use_case
        .execute(CreateUserRequest {
            name: "Ada".to_owned(),
        })
        .await
        .expect("second user");
    let after = Utc::now();

    assert!(!first.id.as_str().is_empty());
    assert_ne!(first.id, second.id);
    assert!(first.registered_at >= before && first.registered_at <= after);
}

#[rstest]
#[tokio::test]
async fn get_user_round_trips_created_user(board: Board) {
    let created = CreateUserUseCase::new(Arc::clone(&board.users), Arc::clone(&board.clock))
        .execute(CreateUserRequest {
            name: "Grace".to_owned(),
        })
        .await
        .expect("user created");
    let get_user = GetUserUseCase::new(Arc::clone(&board.users));

    let fetched = get_user
        .execute(GetUserRequest {
            id: created.id.clone(),
        })
        .await
        .expect("user found");
    assert_eq!(fetched, created);

    let missing = get_user
        .execute(GetUserRequest {
            id: UserId::random(),
        })
        .await
        .expect_err("never persisted");
    assert_eq!(missing.code(), Some(GetUserErrorCode::UserNotFound));
}

#[rstest]
#[tokio::test]
async fn save_post_with_unknown_author_persists_nothing(board: Board) {
    let error = board
        .save_post()
        .execute(SavePostRequest {
            id: None,
            author_id: UserId::random(),
            title: "T".to_owned(),
            content: "C".to_owned(),
        })
        .await
        .expect_err("unknown author");
    assert_eq!(error.code(), Some(SavePostErrorCode::AuthorNotFound));

    let stored = board
        .posts
        .find_all(Page::new(0, 100))
        .await
        .expect("listing");
    assert!(stored.is_empty());
}

#[rstest]
#[tokio::test]
async fn save_post_with_unknown_id_leaves_storage_untouched(board: Board) {
    let author = board.create_user("Ada").await;
    let existing = board.publish(&author, "T1", "C1").await;
    let before = board.stored_post(&existing).await;

    let error = board
        .save_post()
        .execute(SavePostRequest {
            id: Some(PostId::random()),
            author_id: author.clone(),
            title: "T2".to_owned(),
            content: "C2".to_owned(),
        })
        .await
        .expect_err("unknown post");

    assert_eq!(error.code(), Some(SavePostErrorCode::PostNotFound));
    assert_eq!(board.stored_post(&existing).await, before);
}

#[rstest]
#[tokio::test]
async fn updating_a_post_keeps_its_creation_time(board: Board) {
    let author = board.create_user("Ada").await;
    let id = board.publish(&author, "T1", "C1").await;
    let created_at = board
        .stored_post(&id)
        .await
        .expect("post stored")
        .created_at();

    let response = board
        .save_post()
        .execute(SavePostRequest {
            id: Some(id.clone()),
            author_id: author,
            title: "T2".to_owned(),
            content: "C2".to_owned(),
        })
        .await
        .expect("post updated");
    assert_eq!(response.post_id, id);

    let updated = board.stored_post(&id).await.expect("post stored");
    assert_eq!(updated.title(), "T2");
    assert_eq!(updated.content(), "C2");
    assert_eq!(updated.created_at(), created_at);
}

#[rstest]
#[case(0, 0)]
#[case(0, -3)]
#[case(-1, 10)]
#[tokio::test]
async fn empty_windows_skip_author_resolution(
    board: Board,
    #[case] skip: i64,
    #[case] take: i64,
) {
    let author = board.create_user("Ada").await;
    board.publish(&author, "T", "C").await;

    let summaries = board
        .list_posts()
        .execute(ListPostsRequest {
            page: Page::new(skip, take),
        })
        .await
        .expect("empty listing");

    assert!(summaries.is_empty());
    assert_eq!(board.users.batch_lookups(), 0);
}

#[rstest]
#[tokio::test]
async fn listing_with_dangling_author_never_returns_partial_page(board: Board) {
    let author = board.create_user("Ada").await;
    board.publish(&author, "kept", "C").await;
    let orphan = Post::create_new(
        PostDraft {
            author_id: UserId::random(),
            title: "orphan".to_owned(),
            content: "C".to_owned(),
        },
        board.clock.as_ref(),
    );
    board.posts.save(&orphan).await.expect("orphan stored");

    let error = board
        .list_posts()
        .execute(ListPostsRequest {
            page: Page::new(0, 100),
        })
        .await
        .expect_err("dangling author");

    assert_eq!(error.code(), Some(ListPostsErrorCode::AuthorNotFound));
}

#[rstest]
#[tokio::test]
async fn repeated_comment_edit_is_idempotent(board: Board) {
    let author = board.create_user("Ada").await;
    let post_id = board.publish(&author, "T", "C").await;
    let comment_id = board
        .save_comment()
        .execute(SaveCommentRequest {
            id: None,
            post_id: post_id.clone(),
            author_id: author.clone(),
            content: "first draft".to_owned(),
        })
        .await
        .expect("comment created")
        .comment_id;

    let edit = || SaveCommentRequest {
        id: Some(comment_id.clone()),
        post_id: post_id.clone(),
        author_id: author.clone(),
        content: "X".to_owned(),
    };

    board.save_comment().execute(edit()).await.expect("first edit");
    let after_first = board
        .comments
        .find_one_by_id(&comment_id)
        .await
        .expect("lookup")
        .expect("comment stored");
    board.save_comment().execute(edit()).await.expect("second edit");
    let after_second = board
        .comments
        .find_one_by_id(&comment_id)
        .await
        .expect("lookup")
        .expect("comment stored");

    assert_eq!(after_first.content(), "X");
    assert_eq!(after_second, after_first);
}

#[rstest]
#[tokio::test]
async fn deleting_missing_aggregates_reports_not_found(board: Board) {
    let author = board.create_user("Ada").await;
    let post_id = board.publish(&author, "T", "C").await;

    let post_error = DeletePostUseCase::new(Arc::clone(&board.posts))
        .execute(DeletePostRequest {
            post_id: PostId::random(),
        })
        .await
        .expect_err("missing post");
    assert_eq!(post_error.code(), Some(DeletePostErrorCode::PostNotFound));

    let comment_error = DeleteCommentUseCase::new(Arc::clone(&board.comments))
        .execute(DeleteCommentRequest {
            comment_id: CommentId::random(),
        })
        .await
        .expect_err("missing comment");
    assert_eq!(
        comment_error.code(),
        Some(DeleteCommentErrorCode::CommentNotFound)
    );

    assert!(board.stored_post(&post_id).await.is_some());
}

#[rstest]
#[tokio::test]
async fn deleting_a_post_removes_it(board: Board) {
    let author = board.create_user("Ada").await;
    let post_id = board.publish(&author, "T", "C").await;

    DeletePostUseCase::new(Arc::clone(&board.posts))
        .execute(DeletePostRequest {
            post_id: post_id.clone(),
        })
        .await
        .expect("post deleted");

    assert!(board.stored_post(&post_id).await.is_none());
}

#[rstest]
#[tokio::test]
async fn ada_publishes_and_reads_back_a_post(board: Board) {
    let ada = board.create_user("Ada").await;
    let post_id = board.publish(&ada, "T", "C").await;

    let post = board
        .get_post()
        .execute(GetPostRequest {
            id: post_id.clone(),
        })
        .await
        .expect("post found");

    let created_at = board
        .stored_post(&post_id)
        .await
        .expect("post stored")
        .created_at();
    assert_eq!(
        post,
        PostPayload {
            id: post_id,
            author_id: ada,
            author_name: "Ada".to_owned(),
            title: "T".to_owned(),
            content: "C".to_owned(),
            created_at,
        }
    );
}

#[rstest]
#[tokio::test]
async fn author_listings_cover_posts_and_comments(board: Board) {
    let ada = board.create_user("Ada").await;
    let grace = board.create_user("Grace").await;
    let ada_post = board.publish(&ada, "mine", "C").await;
    board.publish(&grace, "theirs", "C").await;

    for (author, content) in [(&grace, "nice"), (&ada, "thanks")] {
        board
            .save_comment()
            .execute(SaveCommentRequest {
                id: None,
                post_id: ada_post.clone(),
                author_id: author.clone(),
                content: content.to_owned(),
            })
            .await
            .expect("comment created");
    }

    let ada_posts =
        ListPostsByAuthorIdUseCase::new(Arc::clone(&board.users), Arc::clone(&board.posts))
            .execute(ListPostsByAuthorIdRequest {
                user_id: ada.clone(),
            })
            .await
            .expect("author posts");
    let titles: Vec<&str> = ada_posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["mine"]);

    let grace_comments =
        ListCommentsByAuthorIdUseCase::new(Arc::clone(&board.users), Arc::clone(&board.comments))
            .execute(ListCommentsByAuthorIdRequest {
                user_id: grace.clone(),
            })
            .await
            .expect("author comments");
    let grace_names: Vec<&str> = grace_comments
        .iter()
        .map(|comment| comment.author_name.as_str())
        .collect();
    assert_eq!(grace_names, vec!["Grace"]);

    let on_post = ListCommentsByPostIdUseCase::new(
        Arc::clone(&board.users),
        Arc::clone(&board.posts),
        Arc::clone(&board.comments),
    )
    .execute(ListCommentsByPostIdRequest {
        post_id: ada_post,
        page: Page::new(0, 10),
    })
    .await
    .expect("post comments");
    let mut authors: Vec<&str> = on_post.iter().map(|c| c.author_name.as_str()).collect();
    authors.sort_unstable();
    assert_eq!(authors, vec!["Ada", "Grace"]);
}
