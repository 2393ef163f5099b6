//! Client-side checks for Discord's documented payload limits.
//!
//! Catching a limit violation before the request leaves the process turns a
//! guaranteed 400 into a cheap local error.

use crate::{CreateMessage, Embed, Snowflake};
use giotto_error::ValidationError;

/// Maximum characters in message content.
pub const MAX_CONTENT_LEN: usize = 2000;
/// Maximum embeds per message.
pub const MAX_EMBEDS: usize = 10;
/// Maximum characters in an embed title.
pub const MAX_EMBED_TITLE_LEN: usize = 256;
/// Maximum characters in an embed description.
pub const MAX_EMBED_DESCRIPTION_LEN: usize = 4096;
/// Maximum fields on one embed.
pub const MAX_EMBED_FIELDS: usize = 25;
/// Maximum characters in a field name.
pub const MAX_FIELD_NAME_LEN: usize = 256;
/// Maximum characters in a field value.
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
/// Maximum characters in footer text.
pub const MAX_FOOTER_TEXT_LEN: usize = 2048;
/// Maximum characters in an author name.
pub const MAX_AUTHOR_NAME_LEN: usize = 256;
/// Maximum combined characters across one embed's text surfaces.
pub const MAX_EMBED_TOTAL_LEN: usize = 6000;
/// Minimum messages in one bulk delete call.
pub const MIN_BULK_DELETE: usize = 2;
/// Maximum messages in one bulk delete call.
pub const MAX_BULK_DELETE: usize = 100;
/// Maximum age in days of a message eligible for bulk delete.
pub const MAX_BULK_DELETE_AGE_DAYS: i64 = 14;

/// Check message content length.
pub fn content(text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_CONTENT_LEN {
        return Err(ValidationError::new(format!(
            "message content exceeds {MAX_CONTENT_LEN} characters"
        )));
    }
    Ok(())
}

/// Check one embed against the per-surface and combined limits.
pub fn embed(embed: &Embed) -> Result<(), ValidationError> {
    let mut total = 0usize;
    if let Some(title) = &embed.title {
        let len = title.chars().count();
        if len > MAX_EMBED_TITLE_LEN {
            return Err(ValidationError::new(format!(
                "embed title exceeds {MAX_EMBED_TITLE_LEN} characters"
            )));
        }
        total += len;
    }
    if let Some(description) = &embed.description {
        let len = description.chars().count();
        if len > MAX_EMBED_DESCRIPTION_LEN {
            return Err(ValidationError::new(format!(
                "embed description exceeds {MAX_EMBED_DESCRIPTION_LEN} characters"
            )));
        }
        total += len;
    }
    if embed.fields.len() > MAX_EMBED_FIELDS {
        return Err(ValidationError::new(format!(
            "embed has more than {MAX_EMBED_FIELDS} fields"
        )));
    }
    for field in &embed.fields {
        let name_len = field.name.chars().count();
        let value_len = field.value.chars().count();
        if name_len > MAX_FIELD_NAME_LEN {
            return Err(ValidationError::new(format!(
                "embed field name exceeds {MAX_FIELD_NAME_LEN} characters"
            )));
        }
        if value_len > MAX_FIELD_VALUE_LEN {
            return Err(ValidationError::new(format!(
                "embed field value exceeds {MAX_FIELD_VALUE_LEN} characters"
            )));
        }
        total += name_len + value_len;
    }
    if let Some(footer) = &embed.footer {
        let len = footer.text.chars().count();
        if len > MAX_FOOTER_TEXT_LEN {
            return Err(ValidationError::new(format!(
                "embed footer exceeds {MAX_FOOTER_TEXT_LEN} characters"
            )));
        }
        total += len;
    }
    if let Some(author) = &embed.author {
        let len = author.name.chars().count();
        if len > MAX_AUTHOR_NAME_LEN {
            return Err(ValidationError::new(format!(
                "embed author name exceeds {MAX_AUTHOR_NAME_LEN} characters"
            )));
        }
        total += len;
    }
    if total > MAX_EMBED_TOTAL_LEN {
        return Err(ValidationError::new(format!(
            "embed text exceeds {MAX_EMBED_TOTAL_LEN} combined characters"
        )));
    }
    Ok(())
}

/// Check a full message creation body.
pub fn create_message(body: &CreateMessage) -> Result<(), ValidationError> {
    if let Some(text) = &body.content {
        content(text)?;
    }
    if body.embeds.len() > MAX_EMBEDS {
        return Err(ValidationError::new(format!(
            "message has more than {MAX_EMBEDS} embeds"
        )));
    }
    for e in &body.embeds {
        embed(e)?;
    }
    if body.content.as_deref().unwrap_or("").is_empty()
        && body.embeds.is_empty()
        && body.sticker_ids.is_empty()
    {
        return Err(ValidationError::new(
            "message must carry content, embeds, or stickers",
        ));
    }
    Ok(())
}

/// Check a bulk delete id list for count and age limits.
///
/// Messages older than two weeks are rejected by the API, so the cutoff is
/// computed from each id's embedded timestamp.
pub fn bulk_delete(ids: &[Snowflake], now_ms: u64) -> Result<(), ValidationError> {
    if ids.len() < MIN_BULK_DELETE || ids.len() > MAX_BULK_DELETE {
        return Err(ValidationError::new(format!(
            "bulk delete takes {MIN_BULK_DELETE} to {MAX_BULK_DELETE} messages, got {}",
            ids.len()
        )));
    }
    let cutoff_ms = now_ms.saturating_sub((MAX_BULK_DELETE_AGE_DAYS as u64) * 24 * 60 * 60 * 1000);
    for id in ids {
        if id.timestamp_ms() < cutoff_ms {
            return Err(ValidationError::new(format!(
                "message {id} is older than {MAX_BULK_DELETE_AGE_DAYS} days"
            )));
        }
    }
    Ok(())
}
