//! Display variables derived from the environment.

use serde::Serialize;
use tracing::debug;

/// Environment variable holding the account that hosts the published site.
pub const ACCOUNT_VAR: &str = "GITHUB_USERNAME";
/// Environment variable holding the project (repository) name.
pub const PROJECT_VAR: &str = "REPO_NAME";
/// Environment variable overriding the published site URL.
pub const SITE_URL_VAR: &str = "GITHUB_PAGES_URL";

/// Account used when the environment does not name one.
pub const DEFAULT_ACCOUNT: &str = "TortoiseWolfe";
/// Project used when the environment does not name one.
pub const DEFAULT_PROJECT: &str = "The_House_that_Code_Built";

/// Per-render display variables.
///
/// # Examples
///
/// ```
/// use codehouse_core::DisplayContext;
///
/// let ctx = DisplayContext::from_lookup(|name| match name {
///     "GITHUB_USERNAME" => Some("octo".to_string()),
///     "REPO_NAME" => Some("house".to_string()),
///     _ => None,
/// });
///
/// assert_eq!(ctx.published_site_url(), "https://octo.github.io/house");
/// assert_eq!(ctx.base_href(), "https://octo.github.io/house/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
pub struct DisplayContext {
    /// Account that owns the repository
    account_name: String,
    /// Repository / project name
    project_name: String,
    /// Where the static export is published
    published_site_url: String,
}

impl DisplayContext {
    /// Creates a context, composing the published URL when none is given.
    pub fn new(
        account_name: impl Into<String>,
        project_name: impl Into<String>,
        published_site_url: Option<String>,
    ) -> Self {
        let account_name = account_name.into();
        let project_name = project_name.into();
        let published_site_url = published_site_url
            .unwrap_or_else(|| pages_url(&account_name, &project_name));
        Self {
            account_name,
            project_name,
            published_site_url,
        }
    }

    /// Reads the context from the process environment.
    ///
    /// Reads:
    /// - `GITHUB_USERNAME` (default: "TortoiseWolfe")
    /// - `REPO_NAME` (default: "The_House_that_Code_Built")
    /// - `GITHUB_PAGES_URL` (default: `https://{account}.github.io/{project}`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the context from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let account_name = read(ACCOUNT_VAR).unwrap_or_else(|| DEFAULT_ACCOUNT.to_string());
        let project_name = read(PROJECT_VAR).unwrap_or_else(|| DEFAULT_PROJECT.to_string());
        let published_site_url = read(SITE_URL_VAR);
        debug!(
            account = %account_name,
            project = %project_name,
            explicit_url = published_site_url.is_some(),
            "Resolved display context"
        );

        Self::new(account_name, project_name, published_site_url)
    }

    /// Published URL with exactly one trailing slash, as used by a `<base>` tag.
    pub fn base_href(&self) -> String {
        format!("{}/", self.published_site_url.trim_end_matches('/'))
    }

    /// Source repository URL.
    pub fn repository_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.account_name, self.project_name
        )
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT, DEFAULT_PROJECT, None)
    }
}

fn pages_url(account: &str, project: &str) -> String {
    format!("https://{account}.github.io/{project}")
}
