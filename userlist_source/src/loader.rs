use crate::config::SourceConfig;
use crate::error::SourceError;
use log::{debug, warn};
use reqwest::Client;
use userlist_core::UserRecord;

pub const STATUS_OK: u16 = 200;
/// Status reported when the request could not be completed or its body was unusable.
pub const STATUS_LOAD_FAILED: u16 = 500;

/// Outcome of a single load: a status code and, on success, the users in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub status_code: u16,
    pub users: Vec<UserRecord>,
}

impl LoadResult {
    pub fn success(users: Vec<UserRecord>) -> Self {
        Self {
            status_code: STATUS_OK,
            users,
        }
    }

    pub fn failure(status_code: u16) -> Self {
        Self {
            status_code,
            users: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

pub trait UserSource {
    /// Fetches the full user list once.
    ///
    /// # Returns
    ///
    /// - `LoadResult { status_code: 200, users }` when the endpoint answered with a 2xx status
    ///   and a JSON array of users
    /// - `LoadResult { status_code, users: [] }` carrying the received status otherwise
    /// - `LoadResult { status_code: 500, users: [] }` on transport or decode failures
    fn load_users(&self) -> impl Future<Output = LoadResult> + Send;
}

#[derive(Clone)]
pub struct HttpUserSource {
    client: Client,
    url: String,
}

impl HttpUserSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: config.users_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<LoadResult, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("users endpoint {} answered with {}", self.url, status);
            return Ok(LoadResult::failure(status.as_u16()));
        }
        let users = response.json::<Vec<UserRecord>>().await?;
        debug!("loaded {} users from {}", users.len(), self.url);
        Ok(LoadResult::success(users))
    }
}

impl UserSource for HttpUserSource {
    async fn load_users(&self) -> LoadResult {
        match self.fetch().await {
            Ok(result) => result,
            Err(e) => {
                warn!("loading users from {} failed: {e}", self.url);
                LoadResult::failure(STATUS_LOAD_FAILED)
            }
        }
    }
}
