//! User-visible reply texts.

/// Shown with the subscription buttons when the gate denies access.
pub const SUBSCRIBE_PROMPT: &str = "Please subscribe to all our channels to use this bot.";

/// Shown for unknown, revoked, or malformed links.
pub const LINK_INVALID: &str = "Link expired or invalid.";

/// Sent right before the media.
pub const ACCESSING_FILE: &str = "Accessing file...";

/// Best-effort notice when the media could not be sent.
pub const DELIVERY_FAILED: &str = "Could not deliver the file right now. Please try again later.";

/// Sent when the link store is unreachable.
pub const TEMPORARILY_UNAVAILABLE: &str = "Something went wrong. Please try again later.";

/// Reply to `/upload` from the admin.
pub const UPLOAD_INSTRUCTIONS: &str = "Send me a file, photo, or video to upload.";

/// Reply to `/upload` from anyone else.
pub const UPLOAD_COMMAND_DENIED: &str = "Only admin can upload.";

/// Reply to a media message from anyone but the admin.
pub const UPLOAD_DENIED: &str = "Only admin can upload files.";

/// Reply to an admin message without supported media.
pub const UNSUPPORTED_MEDIA: &str = "Unsupported file type.";

/// Revoke button label.
pub const REVOKE_BUTTON: &str = "Revoke Link";

/// Edit applied when a non-admin presses the revoke button.
pub const REVOKE_DENIED: &str = "Only admin can revoke.";

/// Edit applied after a successful revoke.
pub const LINK_REVOKED: &str = "Link revoked!";

/// Edit applied when the revoke target does not exist.
pub const LINK_NOT_FOUND: &str = "Link not found.";

/// Subscription prompt that also names channels the buttons cannot link to.
pub fn subscribe_prompt_naming(channels: &[&str]) -> String {
    format!("{SUBSCRIBE_PROMPT}\nAlso join: {}", channels.join(", "))
}

/// Greeting for a plain `/start`.
pub fn greeting(first_name: &str) -> String {
    format!("Hello {first_name}! Use /upload to share files (admin only).")
}

/// Confirmation sent to the admin after an upload.
pub fn upload_confirmation(share_url: &str) -> String {
    format!("File uploaded! Share this link: {share_url}")
}

/// Subscription button label for a channel.
pub fn subscribe_button(channel: &str) -> String {
    format!("Subscribe to {channel}")
}
