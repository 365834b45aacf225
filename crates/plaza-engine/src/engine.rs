use std::sync::Arc;

use tracing::{debug, info};

use plaza_feed::{FeedItem, FeedStore, ItemKind};
use plaza_media::{MediaPipeline, MediaUpload};
use plaza_session::{AccountDirectory, PreferenceKind, Preferences, Session};
use plaza_social::FollowSet;
use plaza_store::SnapshotStore;
use plaza_types::{CommentId, ItemId, ReactionKind, Username};

use crate::error::{EngineError, EngineResult};
use crate::snapshot::SnapshotGateway;

/// The Plaza engine: one in-process snapshot of the feed for one
/// logged-in identity at a time.
///
/// All durable state is rehydrated once at [`open`](Self::open); every
/// successful mutation writes its collection back through the snapshot
/// store before returning. Mutations require a logged-in session and are
/// attributed to it -- there is no way to act as anyone else.
///
/// The engine is single-session by design: it takes `&mut self` for every
/// mutation and holds no internal locks. Callers that share it across
/// threads must add their own mutual exclusion.
pub struct Plaza {
    feed: FeedStore,
    directory: AccountDirectory,
    following: FollowSet,
    session: Session,
    gateway: SnapshotGateway,
    media: Arc<dyn MediaPipeline>,
}

impl Plaza {
    /// Open the engine over a snapshot store and a media pipeline,
    /// rehydrating whatever the store holds.
    pub fn open(
        store: Arc<dyn SnapshotStore>,
        media: Arc<dyn MediaPipeline>,
    ) -> EngineResult<Self> {
        let gateway = SnapshotGateway::new(store);
        let (feed, directory) = gateway.load()?;
        info!(
            posts = feed.posts().len(),
            events = feed.events().len(),
            accounts = directory.len(),
            "engine opened"
        );
        Ok(Self {
            feed,
            directory,
            following: FollowSet::new(),
            session: Session::new(),
            gateway,
            media,
        })
    }

    fn persist(&self, kind: ItemKind) -> EngineResult<()> {
        match kind {
            ItemKind::Post => self.gateway.save_posts(self.feed.posts()),
            ItemKind::Event => self.gateway.save_events(self.feed.events()),
        }
    }

    // ---- Accounts and session ----

    /// Add an account to the directory. Available while logged out.
    pub fn register(&mut self, username: Username, secret: &str) -> EngineResult<()> {
        self.directory.register(username.clone(), secret)?;
        self.gateway.save_accounts(&self.directory)?;
        info!(%username, "account registered");
        Ok(())
    }

    /// Verify credentials and begin a session.
    pub fn login(&mut self, username: &Username, secret: &str) -> EngineResult<()> {
        self.directory.verify(username, secret)?;
        self.session.begin(username.clone());
        self.following.clear();
        info!(%username, "logged in");
        Ok(())
    }

    /// End the session, dropping everything scoped to it: the identity,
    /// the follow set, the avatar, and the preferences.
    pub fn logout(&mut self) {
        self.session.end();
        self.following.clear();
        info!("logged out");
    }

    /// The logged-in identity, if any.
    pub fn current_user(&self) -> Option<&Username> {
        self.session.current_user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The known accounts, in registration order.
    pub fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Encode raw bytes as the session's avatar. New posts pick it up.
    pub fn set_profile_picture(
        &mut self,
        content_type: &str,
        bytes: &[u8],
    ) -> EngineResult<()> {
        self.session.require_user()?;
        let reference = plaza_media::data_reference(content_type, bytes);
        self.session.set_avatar(reference);
        Ok(())
    }

    // ---- Preferences ----

    pub fn preferences(&self) -> &Preferences {
        self.session.preferences()
    }

    pub fn set_preference(&mut self, kind: PreferenceKind, value: bool) -> EngineResult<()> {
        self.session.require_user()?;
        self.session.preferences_mut().set(kind, value);
        Ok(())
    }

    /// Flip one preference, returning the new value.
    pub fn toggle_preference(&mut self, kind: PreferenceKind) -> EngineResult<bool> {
        self.session.require_user()?;
        Ok(self.session.preferences_mut().toggle(kind))
    }

    /// Whether like counts on `author`'s content should be surfaced.
    ///
    /// Counts are hidden only on the current identity's own content, and
    /// only when they have asked for that.
    pub fn likes_visible(&self, author: &Username) -> bool {
        match self.session.current_user() {
            Some(current) if current == author => !self.session.preferences().hide_likes,
            _ => true,
        }
    }

    /// Whether dislike counts on `author`'s content should be surfaced.
    pub fn dislikes_visible(&self, author: &Username) -> bool {
        match self.session.current_user() {
            Some(current) if current == author => !self.session.preferences().hide_dislikes,
            _ => true,
        }
    }

    // ---- Reading the feed ----

    /// The posts, most recent first.
    pub fn posts(&self) -> &[FeedItem] {
        self.feed.posts()
    }

    /// The events, most recent first.
    pub fn events(&self) -> &[FeedItem] {
        self.feed.events()
    }

    /// Look up one item by collection and id.
    pub fn get(&self, kind: ItemKind, id: ItemId) -> Option<&FeedItem> {
        self.feed.get(kind, id)
    }

    // ---- Feed mutations ----

    /// Create a post as the logged-in user.
    pub fn create_post(&mut self, content: &str) -> EngineResult<ItemId> {
        let author = self.session.require_user()?;
        let avatar = self.session.avatar().unwrap_or("").to_string();
        let id = self.feed.create_post(author, content, &avatar)?;
        self.persist(ItemKind::Post)?;
        Ok(id)
    }

    /// Create an event as the logged-in user.
    ///
    /// The upload is handed to the media pipeline first; the event is only
    /// committed (and persisted) once ingestion resolves. A pipeline that
    /// never resolves never commits anything.
    pub async fn create_event(
        &mut self,
        content: &str,
        upload: Option<MediaUpload>,
    ) -> EngineResult<ItemId> {
        let author = self.session.require_user()?;
        if content.trim().is_empty() {
            return Err(plaza_feed::FeedError::EmptyContent.into());
        }
        let upload = upload.ok_or(plaza_feed::FeedError::MissingMedia)?;

        let media = self.media.ingest(upload).await?;
        let avatar = self.session.avatar().unwrap_or("").to_string();
        let id = self.feed.create_event(author, content, &avatar, Some(media))?;
        self.persist(ItemKind::Event)?;
        Ok(id)
    }

    /// Replace an item's text. Only its author may edit.
    pub fn edit_item(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        new_content: &str,
    ) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed.edit_item(kind, id, &actor, new_content)?;
        self.persist(kind)
    }

    /// Remove an item and its whole comment thread. Only its author may
    /// delete.
    pub fn delete_item(&mut self, kind: ItemKind, id: ItemId) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed.delete_item(kind, id, &actor)?;
        self.persist(kind)
    }

    /// Toggle the logged-in user's vote on an item.
    pub fn react_to_item(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        reaction: ReactionKind,
    ) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed.react_to_item(kind, id, reaction, &actor)?;
        debug!(%kind, %id, %reaction, %actor, "vote toggled");
        self.persist(kind)
    }

    /// Move an item to the back of its collection, surfacing the next one.
    pub fn move_to_back(&mut self, kind: ItemKind, id: ItemId) -> EngineResult<()> {
        self.session.require_user()?;
        self.feed.move_to_back(kind, id)?;
        self.persist(kind)
    }

    // ---- Comment mutations ----

    /// Comment on an item as the logged-in user.
    pub fn add_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        content: &str,
    ) -> EngineResult<CommentId> {
        let author = self.session.require_user()?;
        let comment = self.feed.add_comment(kind, id, author, content)?;
        self.persist(kind)?;
        Ok(comment)
    }

    /// Replace a comment's text. Only its author may edit.
    pub fn edit_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
        new_content: &str,
    ) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed.edit_comment(kind, id, comment, &actor, new_content)?;
        self.persist(kind)
    }

    /// Remove a comment. Only its author may delete.
    pub fn delete_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
    ) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed.delete_comment(kind, id, comment, &actor)?;
        self.persist(kind)
    }

    /// Toggle the logged-in user's vote on a comment.
    pub fn react_to_comment(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        comment: CommentId,
        reaction: ReactionKind,
    ) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.feed
            .react_to_comment(kind, id, comment, reaction, &actor)?;
        self.persist(kind)
    }

    // ---- Follow graph ----

    /// Follow another author. Session-scoped; cleared on logout.
    pub fn follow(&mut self, target: Username) -> EngineResult<()> {
        let actor = self.session.require_user()?;
        self.following.follow(&actor, target)?;
        Ok(())
    }

    /// Unfollow an author. A no-op if they were not followed.
    pub fn unfollow(&mut self, target: &Username) -> EngineResult<()> {
        self.session.require_user()?;
        self.following.unfollow(target);
        Ok(())
    }

    /// The current identity's follow set.
    pub fn following(&self) -> &FollowSet {
        &self.following
    }
}

impl std::fmt::Debug for Plaza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plaza")
            .field("posts", &self.feed.posts().len())
            .field("events", &self.feed.events().len())
            .field("accounts", &self.directory.len())
            .field("current_user", &self.session.current_user())
            .finish()
    }
}
