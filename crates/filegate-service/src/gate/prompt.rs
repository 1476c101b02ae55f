//! Subscription prompt rendering.

use filegate_core::types::{InlineButton, InlineKeyboard};

use crate::messages;

/// Public URL of a channel, if it has one.
///
/// `@name` and bare `name` map to `https://t.me/name`. Numeric chat ids
/// have no public URL.
pub fn channel_url(channel: &str) -> Option<String> {
    let name = channel.strip_prefix('@').unwrap_or(channel);
    let looks_numeric = name
        .strip_prefix('-')
        .unwrap_or(name)
        .chars()
        .all(|c| c.is_ascii_digit());
    if name.is_empty() || looks_numeric {
        return None;
    }
    Some(format!("https://t.me/{name}"))
}

/// Prompt text; channels without a public URL are named inline.
pub fn subscribe_text(unmet: &[String]) -> String {
    let unlinked: Vec<&str> = unmet
        .iter()
        .filter(|c| channel_url(c).is_none())
        .map(String::as_str)
        .collect();
    if unlinked.is_empty() {
        messages::SUBSCRIBE_PROMPT.to_string()
    } else {
        messages::subscribe_prompt_naming(&unlinked)
    }
}

/// One URL button per unmet channel that has a public URL.
pub fn subscribe_keyboard(unmet: &[String]) -> InlineKeyboard {
    InlineKeyboard::single_column(unmet.iter().filter_map(|channel| {
        channel_url(channel).map(|url| InlineButton::url(messages::subscribe_button(channel), url))
    }))
}
