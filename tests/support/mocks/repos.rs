// tests/support/mocks/repos.rs
use async_trait::async_trait;
use quill_core::domain::{
    comment::{
        Comment, CommentId, CommentPageRequest, CommentReadRepository, CommentSortField,
        CommentUpdate, CommentWriteRepository, LikesInfo, NewComment, SortDirection,
    },
    errors::{DomainError, DomainResult},
    like::{LikeRepository, LikeStatus},
    post::{Post, PostId, PostRepository},
    user::{User, UserId, UserLogin, UserRepository},
};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering as AtomicOrdering},
    },
    time::Duration,
};

use super::time::fixed_now;

#[derive(Default)]
struct BlogState {
    users: HashMap<i64, User>,
    posts: HashMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    likes: HashMap<(i64, i64), LikeStatus>,
    next_comment_id: i64,
}

/// 全リポジトリポートを一つのインメモリストアで実装する
#[derive(Default)]
pub struct InMemoryBlog {
    state: Mutex<BlogState>,
    comment_queries: AtomicUsize,
    like_delays: Mutex<HashMap<i64, Duration>>,
    failing_likes: Mutex<HashSet<i64>>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: i64, login: &str) {
        let user = User {
            id: UserId::new(id).expect("invalid user id"),
            login: UserLogin::new(login).expect("invalid login"),
            created_at: fixed_now(),
        };
        self.state.lock().unwrap().users.insert(id, user);
    }

    /// ログイン名の変更（既存コメントのスナップショットには影響しない）
    pub fn rename_user(&self, id: i64, login: &str) {
        let mut state = self.state.lock().unwrap();
        let user = state.users.get_mut(&id).expect("unknown user");
        user.login = UserLogin::new(login).expect("invalid login");
    }

    pub fn add_post(&self, id: i64, title: &str) {
        let post = Post {
            id: PostId::new(id).expect("invalid post id"),
            title: title.into(),
            blog_name: "test blog".into(),
            created_at: fixed_now(),
        };
        self.state.lock().unwrap().posts.insert(id, post);
    }

    /// 既存のコメントをそのまま格納する（ID の採番も追従させる）
    pub fn put_comment(&self, comment: Comment) {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(comment.id);
        state.next_comment_id = state.next_comment_id.max(id);
        state.comments.insert(id, comment);
    }

    pub fn comment(&self, id: i64) -> Option<Comment> {
        self.state.lock().unwrap().comments.get(&id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn set_like(&self, comment_id: i64, user_id: i64, status: LikeStatus) {
        self.state
            .lock()
            .unwrap()
            .likes
            .insert((comment_id, user_id), status);
    }

    /// 指定コメントのいいね状態取得に遅延を入れる
    pub fn delay_like_lookup(&self, comment_id: i64, delay: Duration) {
        self.like_delays.lock().unwrap().insert(comment_id, delay);
    }

    /// 指定コメントのいいね状態取得を失敗させる
    pub fn fail_like_lookup(&self, comment_id: i64) {
        self.failing_likes.lock().unwrap().insert(comment_id);
    }

    /// コメントテーブルに発行されたクエリ数
    pub fn comment_queries(&self) -> usize {
        self.comment_queries.load(AtomicOrdering::SeqCst)
    }

    fn record_comment_query(&self) {
        self.comment_queries.fetch_add(1, AtomicOrdering::SeqCst);
    }
}

fn compare(a: &Comment, b: &Comment, field: CommentSortField) -> Ordering {
    let primary = match field {
        CommentSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        CommentSortField::Content => a.content.as_str().cmp(b.content.as_str()),
        CommentSortField::CommentatorLogin => a
            .commentator
            .user_login
            .as_str()
            .cmp(b.commentator.user_login.as_str()),
        CommentSortField::LikesCount => a.likes.likes_count.cmp(&b.likes.likes_count),
        CommentSortField::DislikesCount => a.likes.dislikes_count.cmp(&b.likes.dislikes_count),
        CommentSortField::Id => Ordering::Equal,
    };
    primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
}

#[async_trait]
impl CommentWriteRepository for InMemoryBlog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.posts.contains_key(&i64::from(comment.post_id)) {
            return Err(DomainError::NotFound("post not found".into()));
        }
        state.next_comment_id += 1;
        let created = Comment {
            id: CommentId::new(state.next_comment_id)?,
            post_id: comment.post_id,
            content: comment.content,
            commentator: comment.commentator,
            likes: LikesInfo::default(),
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state
            .comments
            .insert(i64::from(created.id), created.clone());
        Ok(created)
    }

    async fn update_content(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let comment = state
            .comments
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.content = update.content;
        comment.updated_at = update.updated_at;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .comments
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        self.record_comment_query();
        Ok(self.comment(i64::from(id)))
    }

    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        self.record_comment_query();
        let state = self.state.lock().unwrap();
        let count = state
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .count();
        Ok(count as u64)
    }

    async fn list_by_post(
        &self,
        post_id: PostId,
        page: &CommentPageRequest,
    ) -> DomainResult<Vec<Comment>> {
        self.record_comment_query();
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, page.sort_by);
            match page.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(page.page_size() as usize)
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryBlog {
    async fn find_status(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<LikeStatus>> {
        let key = i64::from(comment_id);
        let delay = self.like_delays.lock().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_likes.lock().unwrap().contains(&key) {
            return Err(DomainError::Persistence("likes table unavailable".into()));
        }
        Ok(self
            .state
            .lock()
            .unwrap()
            .likes
            .get(&(key, i64::from(user_id)))
            .copied())
    }
}

#[async_trait]
impl PostRepository for InMemoryBlog {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.state.lock().unwrap().posts.get(&i64::from(id)).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryBlog {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&i64::from(id)).cloned())
    }
}
