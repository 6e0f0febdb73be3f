//! Per-platform integration settings. Each variant carries only the
//! credentials its platform uses.

use serde::{Deserialize, Serialize};

use super::scheduled_post::Platform;
use crate::error::DomainError;

/// OAuth application credentials (client id + secret).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthApp {
    pub app_id: String,
    pub client_secret: String,
}

/// A Facebook page chosen to publish on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookPage {
    pub id: String,
    pub name: String,
}

/// Connection settings, tagged by platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform")]
pub enum IntegrationConfig {
    WordPress {
        site_url: String,
        username: String,
        /// WordPress application password.
        application_password: String,
    },
    Facebook {
        app_id: String,
        client_secret: String,
        #[serde(default)]
        selected_page: Option<FacebookPage>,
    },
    Instagram(OAuthApp),
    TikTok(OAuthApp),
    LinkedIn(OAuthApp),
}

impl IntegrationConfig {
    pub fn platform(&self) -> Platform {
        match self {
            IntegrationConfig::WordPress { .. } => Platform::WordPress,
            IntegrationConfig::Facebook { .. } => Platform::Facebook,
            IntegrationConfig::Instagram(_) => Platform::Instagram,
            IntegrationConfig::TikTok(_) => Platform::TikTok,
            IntegrationConfig::LinkedIn(_) => Platform::LinkedIn,
        }
    }

    /// Check that every credential needed to connect is filled in.
    pub fn validate_for_connect(&self) -> Result<(), DomainError> {
        let fields: Vec<(&str, &str)> = match self {
            IntegrationConfig::WordPress {
                site_url,
                username,
                application_password,
            } => vec![
                ("site_url", site_url.as_str()),
                ("username", username.as_str()),
                ("application_password", application_password.as_str()),
            ],
            IntegrationConfig::Facebook {
                app_id,
                client_secret,
                ..
            } => vec![
                ("app_id", app_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ],
            IntegrationConfig::Instagram(app)
            | IntegrationConfig::TikTok(app)
            | IntegrationConfig::LinkedIn(app) => vec![
                ("app_id", app.app_id.as_str()),
                ("client_secret", app.client_secret.as_str()),
            ],
        };

        let missing: Vec<String> = fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| format!("{} requires {}", self.platform(), name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(missing))
        }
    }

    /// Label shown for a connected account.
    pub fn display_label(&self, username: &str) -> String {
        match self {
            IntegrationConfig::Facebook {
                selected_page: Some(page),
                ..
            } => format!("Page: {}", page.name),
            IntegrationConfig::WordPress { site_url, .. } if !site_url.is_empty() => {
                site_url.clone()
            }
            _ => username.to_string(),
        }
    }
}
