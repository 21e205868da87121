// src/handlers/share.rs

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    graphic,
    models::{
        attempt::score_percentage,
        share::{ResultCardParams, ShareOption, SharePlatform, ShareRequest, ShareResponse},
    },
};

fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Builds the share payload for one platform.
///
/// Opening the returned deep link is fire-and-forget on the client; there
/// is no confirmation channel, so `success` reflects URL construction only.
fn build_share(config: &Config, req: &ShareRequest) -> ShareResponse {
    let percentage = score_percentage(req.score, req.total_questions);
    let site = &config.site_url;

    match req.platform {
        SharePlatform::Download => {
            let query = encode_query(&[
                ("score", &req.score.to_string()),
                ("total", &req.total_questions.to_string()),
                ("name", &req.user_name),
            ]);
            ShareResponse {
                success: true,
                message: "Image downloaded successfully!".to_string(),
                share_url: Some(format!("/api/share/image?{}", query)),
            }
        }
        SharePlatform::Twitter => {
            let text = format!(
                "I scored {}% on the Taylor Swift Quiz. Try it: {} #TaylorSwift #Swiftie",
                percentage, site
            );
            ShareResponse {
                success: true,
                message: "Shared to Twitter!".to_string(),
                share_url: Some(format!(
                    "https://twitter.com/intent/tweet?{}",
                    encode_query(&[("text", &text)])
                )),
            }
        }
        SharePlatform::Facebook => {
            let text = format!("I scored {}% on the Taylor Swift Quiz.", percentage);
            ShareResponse {
                success: true,
                message: "Shared to Facebook!".to_string(),
                share_url: Some(format!(
                    "https://www.facebook.com/sharer/sharer.php?{}",
                    encode_query(&[("u", site), ("quote", &text)])
                )),
            }
        }
        SharePlatform::Whatsapp => {
            let text = format!(
                "I scored {}% on the Taylor Swift Quiz. Try it: {}",
                percentage, site
            );
            ShareResponse {
                success: true,
                message: "Shared to WhatsApp!".to_string(),
                share_url: Some(format!(
                    "https://wa.me/?{}",
                    encode_query(&[("text", &text)])
                )),
            }
        }
    }
}

/// Dispatches a share to one of the fixed targets.
pub async fn dispatch_share(
    State(config): State<Config>,
    Json(payload): Json<ShareRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if payload.score > payload.total_questions {
        return Err(AppError::BadRequest(
            "score cannot exceed total_questions".to_string(),
        ));
    }

    Ok(Json(build_share(&config, &payload)))
}

/// Lists the share menu entries.
pub async fn share_options() -> impl IntoResponse {
    let options: Vec<ShareOption> = SharePlatform::ALL
        .iter()
        .map(|platform| ShareOption {
            id: platform.id(),
            name: platform.display_name(),
        })
        .collect();

    Json(options)
}

/// Renders the shareable result card as a downloadable PNG.
pub async fn result_card(
    Query(params): Query<ResultCardParams>,
) -> Result<impl IntoResponse, AppError> {
    let png = graphic::render_result_card(params.score, params.total, &params.name)?;

    let filename = format!("taylor-swift-quiz-{}.png", Utc::now().timestamp_millis());
    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, png))
}
