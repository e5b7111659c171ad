use anyhow::Context;
use art_config::GalleryConfig;
use art_github::GitHubClient;
use art_render::RenderContext;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GalleryConfig,
    pub client: GitHubClient,
    pub render: RenderContext,
}

impl AppContext {
    /// Load layered configuration (with `.env`) and build the client.
    pub fn load(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = GalleryConfig::load_with_dotenv(flags.config.as_deref())
            .context("failed to load artm configuration")?;
        Self::from_config(config)
    }

    pub fn from_config(config: GalleryConfig) -> anyhow::Result<Self> {
        let client = GitHubClient::new(&config).context("failed to initialize GitHub client")?;
        let render = RenderContext::from_config(&config);
        tracing::debug!(
            owner = %config.repo.owner,
            repo = %config.repo.name,
            branch = %config.repo.branch,
            "gallery context ready"
        );
        Ok(Self {
            config,
            client,
            render,
        })
    }
}
