// src/models/share.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Share targets offered by the result share menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Download,
    Twitter,
    Facebook,
    Whatsapp,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Download,
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::Whatsapp,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SharePlatform::Download => "download",
            SharePlatform::Twitter => "twitter",
            SharePlatform::Facebook => "facebook",
            SharePlatform::Whatsapp => "whatsapp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SharePlatform::Download => "Download Image",
            SharePlatform::Twitter => "Share on Twitter",
            SharePlatform::Facebook => "Share on Facebook",
            SharePlatform::Whatsapp => "Share on WhatsApp",
        }
    }
}

/// DTO for dispatching a share.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareRequest {
    pub score: u32,

    #[validate(range(min = 1, message = "total_questions must be at least 1"))]
    pub total_questions: u32,

    #[validate(length(min = 1, max = 80, message = "user_name must be 1-80 characters"))]
    pub user_name: String,

    pub platform: SharePlatform,
}

/// Outcome reported back to the share menu.
///
/// `success` is true once the share URL is built; opening it is
/// fire-and-forget on the client, there is no confirmation channel.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

/// One entry of the share menu.
#[derive(Debug, Serialize)]
pub struct ShareOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Query parameters for the rendered result card.
#[derive(Debug, Deserialize)]
pub struct ResultCardParams {
    pub score: u32,
    pub total: u32,
    #[serde(default = "default_card_name")]
    pub name: String,
}

fn default_card_name() -> String {
    "Swiftie".to_string()
}
