//! In-memory registry of viewers.
//!
//! A viewer is one browser session looking at the user list: the records fetched when the
//! page was loaded and the `Pager` selecting which of them are shown. Navigation requests
//! only touch the registry, the upstream endpoint is queried again only when `/` is reloaded.

use crate::config::SessionConfig;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use userlist_core::{ITEMS_PER_PAGE, Navigation, PageState, Pager, UserRecord};
use uuid::Uuid;

/// Snapshot of a viewer after a request: the visible records and the page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub users: Vec<UserRecord>,
    pub state: PageState,
}

struct Viewer {
    users: Vec<UserRecord>,
    pager: Pager,
    last_seen: Instant,
}

impl Viewer {
    fn new(users: Vec<UserRecord>) -> Self {
        let pager = Pager::initialize(&users, ITEMS_PER_PAGE);
        Self {
            users,
            pager,
            last_seen: Instant::now(),
        }
    }

    fn view(&self) -> UsersView {
        UsersView {
            users: self.pager.visible(&self.users).to_vec(),
            state: self.pager.state(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }
}

#[derive(Clone)]
pub struct ViewerRegistry {
    viewers: Arc<RwLock<HashMap<Uuid, Viewer>>>,
    ttl: Duration,
    capacity: usize,
}

impl ViewerRegistry {
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_limits(Duration::from_secs(config.ttl), config.capacity)
    }

    /// A capacity of zero is treated as one.
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            viewers: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Registers a new viewer positioned on page 1 and returns its id with the first view.
    pub async fn open(&self, users: Vec<UserRecord>) -> (Uuid, UsersView) {
        let viewer = Viewer::new(users);
        let view = viewer.view();
        let id = Uuid::new_v4();

        let mut viewers = self.viewers.write().await;
        prune(&mut viewers, self.ttl, self.capacity - 1);
        viewers.insert(id, viewer);
        debug!("opened viewer {id} with {} pages", view.state.total_pages);
        (id, view)
    }

    /// Applies `navigation`, if any, to the viewer `id` and returns its current view.
    ///
    /// Returns `None` when the viewer is unknown or has been idle for longer than the ttl.
    pub async fn view(&self, id: &Uuid, navigation: Option<Navigation>) -> Option<UsersView> {
        let mut viewers = self.viewers.write().await;
        let viewer = viewers.get_mut(id)?;
        if viewer.is_expired(self.ttl) {
            viewers.remove(id);
            debug!("viewer {id} expired");
            return None;
        }
        if let Some(navigation) = navigation {
            viewer.pager.navigate(navigation);
        }
        viewer.last_seen = Instant::now();
        Some(viewer.view())
    }

    pub async fn close(&self, id: &Uuid) -> bool {
        self.viewers.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.viewers.read().await.len()
    }
}

/// Drops expired viewers, then the least recently seen ones until at most `keep` remain.
fn prune(viewers: &mut HashMap<Uuid, Viewer>, ttl: Duration, keep: usize) {
    viewers.retain(|_, viewer| !viewer.is_expired(ttl));
    if viewers.len() <= keep {
        return;
    }
    let mut by_age: Vec<(Uuid, Instant)> = viewers
        .iter()
        .map(|(id, viewer)| (*id, viewer.last_seen))
        .collect();
    by_age.sort_by_key(|(_, last_seen)| *last_seen);
    let excess = viewers.len() - keep;
    for (id, _) in by_age.into_iter().take(excess) {
        viewers.remove(&id);
    }
}
