use worker::Env;

use crate::images::ImageSource;
use crate::models::{Seo, SiteSettings};

pub const WEBHOOK_SECRET: &str = "WEBHOOK_SECRET";
pub const SITE_DOMAIN: &str = "SITE_DOMAIN";
pub const SITE_NAME: &str = "SITE_NAME";
pub const SEO_TITLE: &str = "SEO_TITLE";
pub const SEO_DESCRIPTION: &str = "SEO_DESCRIPTION";
pub const SANITY_PROJECT_ID: &str = "SANITY_PROJECT_ID";
pub const SANITY_DATASET: &str = "SANITY_DATASET";
pub const HOME_WORKSPACE_ID: &str = "HOME_WORKSPACE_ID";

const DEFAULT_DATASET: &str = "production";

/// Everything the handlers need from the Worker environment, read once per
/// request and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub webhook_secret: Option<String>,
    pub site: SiteSettings,
    pub images: ImageSource,
    /// Workspace whose roles are shown for internal people.
    pub home_workspace_id: Option<String>,
}

impl WorkerConfig {
    pub fn from_env(env: &Env) -> Self {
        Self::from_lookup(|name| {
            if name == WEBHOOK_SECRET {
                env.secret(name).ok().map(|s| s.to_string())
            } else {
                env.var(name).ok().map(|v| v.to_string())
            }
        })
    }

    /// Build from any name -> value source. Missing and empty values are
    /// treated alike.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            webhook_secret: get(WEBHOOK_SECRET),
            site: SiteSettings {
                site_domain: get(SITE_DOMAIN),
                site_name: get(SITE_NAME),
                seo: Seo {
                    title: get(SEO_TITLE),
                    description: get(SEO_DESCRIPTION),
                },
            },
            images: ImageSource::new(
                get(SANITY_PROJECT_ID).unwrap_or_default(),
                get(SANITY_DATASET).unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            ),
            home_workspace_id: get(HOME_WORKSPACE_ID),
        }
    }
}
