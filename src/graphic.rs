// src/graphic.rs

use std::io::Cursor;

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_cubic_bezier_curve_mut, draw_text_mut, text_size};

use crate::error::AppError;
use crate::models::attempt::score_percentage;

/// OpenGraph card dimensions.
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;

const FONT_REGULAR: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
const FONT_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

/// Score band with its display color and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceTier {
    pub color: [u8; 3],
    pub message: &'static str,
}

/// Maps a percentage to its color/message band.
pub fn performance_tier(percentage: u32) -> PerformanceTier {
    if percentage >= 90 {
        PerformanceTier {
            color: [76, 175, 80],
            message: "Top tier performance",
        }
    } else if percentage >= 80 {
        PerformanceTier {
            color: [139, 195, 74],
            message: "Excellent performance",
        }
    } else if percentage >= 70 {
        PerformanceTier {
            color: [255, 193, 7],
            message: "Great performance",
        }
    } else if percentage >= 60 {
        PerformanceTier {
            color: [255, 152, 0],
            message: "Good performance",
        }
    } else {
        PerformanceTier {
            color: [244, 67, 54],
            message: "Keep practicing",
        }
    }
}

/// Renders the shareable 1200x630 result card as PNG bytes.
///
/// Layout mirrors the site's share card: dark diagonal gradient, subtle
/// grid pattern, bordered content panel, centered score block in the tier
/// color, and the signature flourish at the bottom.
pub fn render_result_card(
    score: u32,
    total_questions: u32,
    user_name: &str,
) -> Result<Vec<u8>, AppError> {
    if total_questions == 0 {
        return Err(AppError::BadRequest(
            "total_questions must be at least 1".to_string(),
        ));
    }
    if score > total_questions {
        return Err(AppError::BadRequest(
            "score cannot exceed total_questions".to_string(),
        ));
    }

    let regular = FontRef::try_from_slice(FONT_REGULAR)
        .map_err(|e| AppError::InternalServerError(format!("Failed to load font: {}", e)))?;
    let bold = FontRef::try_from_slice(FONT_BOLD)
        .map_err(|e| AppError::InternalServerError(format!("Failed to load font: {}", e)))?;

    let mut img = RgbaImage::new(CARD_WIDTH, CARD_HEIGHT);

    draw_gradient_background(&mut img);
    draw_grid_pattern(&mut img);

    // Content panel with border
    fill_rect(&mut img, 100, 100, 1000, 430, [0, 0, 0], 0.35);
    stroke_rect(&mut img, 100, 100, 1000, 430, 3, [255, 255, 255], 0.12);

    let percentage = score_percentage(score, total_questions);
    let tier = performance_tier(percentage);
    let center_x = (CARD_WIDTH / 2) as i32;

    draw_centered_text(
        &mut img,
        Rgba([234, 234, 234, 255]),
        center_x,
        136,
        48.0,
        &bold,
        "Taylor Swift Quiz Results",
    );
    draw_centered_text(
        &mut img,
        Rgba([234, 234, 234, 255]),
        center_x,
        198,
        32.0,
        &regular,
        &format!("{} Performance", user_name),
    );
    draw_centered_text(
        &mut img,
        Rgba([tier.color[0], tier.color[1], tier.color[2], 255]),
        center_x,
        250,
        72.0,
        &bold,
        &format!("{}%", percentage),
    );
    draw_centered_text(
        &mut img,
        Rgba([207, 207, 207, 255]),
        center_x,
        347,
        24.0,
        &regular,
        &format!("{} out of {} correct", score, total_questions),
    );
    draw_centered_text(
        &mut img,
        Rgba([184, 184, 184, 255]),
        center_x,
        397,
        24.0,
        &regular,
        tier.message,
    );
    draw_centered_text(
        &mut img,
        Rgba([168, 168, 168, 255]),
        center_x,
        440,
        20.0,
        &regular,
        "Powered by Taylor Swift Quiz",
    );
    draw_centered_text(
        &mut img,
        Rgba([150, 150, 150, 255]),
        center_x,
        481,
        20.0,
        &regular,
        "tayler-swift.vercel.app",
    );

    draw_signature(&mut img);

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::InternalServerError(format!("Failed to encode card: {}", e)))?;

    Ok(png)
}

/// Diagonal gradient from #0a0a0a to #141414.
fn draw_gradient_background(img: &mut RgbaImage) {
    let (w, h) = (img.width(), img.height());
    for y in 0..h {
        for x in 0..w {
            let t = (x as f32 / (w - 1) as f32 + y as f32 / (h - 1) as f32) / 2.0;
            let v = (0x0a as f32 + t * (0x14 - 0x0a) as f32).round() as u8;
            img.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }
}

/// 50px grid at 5% white.
fn draw_grid_pattern(img: &mut RgbaImage) {
    let (w, h) = (img.width(), img.height());
    for x in (0..w).step_by(50) {
        fill_rect(img, x as i32, 0, 1, h, [255, 255, 255], 0.05);
    }
    for y in (0..h).step_by(50) {
        fill_rect(img, 0, y as i32, w, 1, [255, 255, 255], 0.05);
    }
}

/// The quadratic-curve flourish under the score block, pre-blended to its
/// on-background color.
fn draw_signature(img: &mut RgbaImage) {
    // 20% white over the dark background
    let color = Rgba([58, 58, 58, 255]);

    // Quadratic segments (200,550)-(300,500)-(400,550) and
    // (400,550)-(500,600)-(600,550), expressed as cubics.
    draw_cubic_bezier_curve_mut(
        img,
        (200.0, 550.0),
        (400.0, 550.0),
        (266.7, 516.7),
        (333.3, 516.7),
        color,
    );
    draw_cubic_bezier_curve_mut(
        img,
        (400.0, 550.0),
        (600.0, 550.0),
        (466.7, 583.3),
        (533.3, 583.3),
        color,
    );
}

fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: [u8; 3], alpha: f32) {
    let px = img.get_pixel_mut(x, y);
    for c in 0..3 {
        px.0[c] = (color[c] as f32 * alpha + px.0[c] as f32 * (1.0 - alpha)).round() as u8;
    }
}

fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: [u8; 3], alpha: f32) {
    let (img_w, img_h) = (img.width() as i32, img.height() as i32);
    for yy in y.max(0)..(y + h as i32).min(img_h) {
        for xx in x.max(0)..(x + w as i32).min(img_w) {
            blend_pixel(img, xx as u32, yy as u32, color, alpha);
        }
    }
}

fn stroke_rect(
    img: &mut RgbaImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    thickness: u32,
    color: [u8; 3],
    alpha: f32,
) {
    let t = thickness;
    fill_rect(img, x, y, w, t, color, alpha);
    fill_rect(img, x, y + h as i32 - t as i32, w, t, color, alpha);
    fill_rect(img, x, y + t as i32, t, h - 2 * t, color, alpha);
    fill_rect(
        img,
        x + w as i32 - t as i32,
        y + t as i32,
        t,
        h - 2 * t,
        color,
        alpha,
    );
}

fn draw_centered_text(
    img: &mut RgbaImage,
    color: Rgba<u8>,
    center_x: i32,
    y: i32,
    size: f32,
    font: &FontRef<'_>,
    text: &str,
) {
    let scale = PxScale::from(size);
    let (text_w, _) = text_size(scale, font, text);
    draw_text_mut(img, color, center_x - (text_w as i32) / 2, y, scale, font, text);
}
