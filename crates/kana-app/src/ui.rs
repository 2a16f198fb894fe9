use kana_core::{AppEvent, Catalog};
use kanal::{AsyncReceiver, AsyncSender};

pub async fn ui_loop(
    catalog: Catalog,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    kana_ui::ui_loop(catalog, app_to_ui_rx, ui_to_app_tx).await
}
