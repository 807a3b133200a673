//! Site details baked in at build time.
//!
//! Set `PORTFOLIO_GITHUB_URL`, `PORTFOLIO_EMAIL`, `PORTFOLIO_OWNER` and
//! `PORTFOLIO_COPYRIGHT` in the build environment (e.g. before `dx serve`).
//! Values are used as-is; nothing is validated.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub github_url: String,
    pub email: String,
    pub copyright: String,
}

const DEFAULT_OWNER: &str = "Rita Huang";
const DEFAULT_COPYRIGHT: &str = "© 2025 RITA";

impl SiteConfig {
    /// Configuration captured from the environment of the build.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_OWNER"),
            option_env!("PORTFOLIO_GITHUB_URL"),
            option_env!("PORTFOLIO_EMAIL"),
            option_env!("PORTFOLIO_COPYRIGHT"),
        )
    }

    fn from_values(
        owner_name: Option<&str>,
        github_url: Option<&str>,
        email: Option<&str>,
        copyright: Option<&str>,
    ) -> Self {
        Self {
            owner_name: owner_name.unwrap_or(DEFAULT_OWNER).to_string(),
            github_url: github_url.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
            copyright: copyright.unwrap_or(DEFAULT_COPYRIGHT).to_string(),
        }
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
