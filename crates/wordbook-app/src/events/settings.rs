use wordbook_types::UiEvent;

use crate::context::AppContext;

pub async fn handle_toggle_dark_mode(ctx: &AppContext) -> anyhow::Result<()> {
    let dark = ctx.state.settings.write().await.toggle_dark_mode().await;
    tracing::debug!("Dark mode: {}", dark);
    handle_show_settings(ctx).await
}

pub async fn handle_set_font_size(ctx: &AppContext, size: u32) -> anyhow::Result<()> {
    ctx.state.settings.write().await.update_font_size(size).await;
    handle_show_settings(ctx).await
}

pub async fn handle_show_settings(ctx: &AppContext) -> anyhow::Result<()> {
    let settings = ctx.state.settings.read().await.settings();
    ctx.show(UiEvent::ShowSettings(settings)).await;
    Ok(())
}
