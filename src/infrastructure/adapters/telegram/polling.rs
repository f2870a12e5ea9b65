//! Long-polling transport (development mode)

use std::time::Duration;

use super::{handle_update, TelegramAdapter};
use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;

const POLL_TIMEOUT_SECONDS: i64 = 30;
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Poll getUpdates forever, handling each update to completion in order
pub async fn run_polling(bot: &TelegramAdapter, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
    bot.delete_webhook().await?;

    let mut offset: i64 = 0;
    tracing::info!("Starting message loop (long polling)...");

    loop {
        match bot.get_updates(offset, POLL_TIMEOUT_SECONDS).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    tracing::debug!("Received {} updates", updates.len());
                }

                for update in &updates {
                    if let Err(e) = handle_update(bot, dispatcher, update).await {
                        tracing::error!("Failed to handle update {}: {}", update.update_id, e);
                    }
                }

                if let Some(next) = TelegramAdapter::get_next_offset(&updates) {
                    offset = next;
                }
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
