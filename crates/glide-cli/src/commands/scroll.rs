use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::info;

use glide_core::behavior::smooth_scroll;
use glide_core::{animate_scroll_to, AppConfig};

use super::load_page;

pub async fn run(
    config: &AppConfig,
    page_path: Option<&Path>,
    target: &str,
    duration_ms: Option<u64>,
    from: f64,
) -> Result<()> {
    let mut page = load_page(page_path)?;
    page.scroll_to(from);
    let start = page.scroll_y();

    // A number is an offset, anything else a selector
    let target_offset = match target.parse::<f64>() {
        Ok(offset) => offset,
        Err(_) => smooth_scroll::scroll_target(&page, target, config.scroll.header_offset)
            .ok_or_else(|| anyhow!("No element matches {}", target))?,
    };
    let target_offset = target_offset.clamp(0.0, page.max_scroll());

    let duration = Duration::from_millis(duration_ms.unwrap_or(config.scroll.duration_ms));
    let frame = config.scroll.animation_tick_duration();
    info!(
        start,
        target = target_offset,
        duration_ms = duration.as_millis() as u64,
        "Animating scroll"
    );

    println!("{:>5}  {:>10}", "frame", "offset");
    let mut frames = 0usize;
    let landed = animate_scroll_to(target_offset, start, duration, frame, |offset| {
        frames += 1;
        page.scroll_to(offset);
        println!("{:>5}  {:>10.2}", frames, offset);
    })
    .await;

    println!("\n{} frames, landed at {}", frames, landed);
    Ok(())
}
