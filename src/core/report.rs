//! Text formatting for appointment views and dashboard figures.
//!
//! These helpers are framework-agnostic; the bot layer puts their output into
//! embeds and messages.

use super::assembler::AppointmentView;

/// Shown when an appointment books no services.
pub const NO_SERVICES: &str = "No Services";
/// Shown when an appointment books no packages.
pub const NO_PACKAGES: &str = "-";

/// Longest embed field name Discord accepts, in characters.
pub const EMBED_FIELD_NAME_LIMIT: usize = 256;
/// Longest embed field value Discord accepts, in characters.
pub const EMBED_FIELD_LIMIT: usize = 1024;
/// Most characters Discord accepts across a whole embed.
pub const EMBED_TOTAL_LIMIT: usize = 6000;
/// Room kept for an embed's title, description and footer when filling fields.
pub const EMBED_CHROME_RESERVE: usize = 500;
/// Budget for [`fit_fields`] in a list embed.
pub const LIST_FIELD_BUDGET: usize = EMBED_TOTAL_LIMIT - EMBED_CHROME_RESERVE;

/// An embed field as `(name, value, inline)`.
pub type EmbedField = (String, String, bool);

/// Formats an amount with a currency symbol and two decimals, e.g. `₹850.00`.
#[must_use]
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("{symbol}{amount:.2}")
    }
}

/// Joins names with `, `, or returns `fallback` for an empty list.
#[must_use]
pub fn format_names(names: &[String], fallback: &str) -> String {
    if names.is_empty() {
        fallback.to_string()
    } else {
        names.join(", ")
    }
}

/// Formats minutes as `45m`, `2h` or `1h 30m`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// One-line summary of an appointment:
/// `#1 14:05 | Asha | Ravi Kumar | Haircut | ₹300.00 | Scheduled/Pending`.
#[must_use]
pub fn format_view_line(view: &AppointmentView, symbol: &str) -> String {
    let mut booked = format_names(&view.services, NO_SERVICES);
    if !view.packages.is_empty() {
        booked.push_str(" + ");
        booked.push_str(&view.packages.join(", "));
    }
    format!(
        "#{} {} | {} | {} | {} | {} | {}/{}",
        view.id,
        view.time,
        view.client_name,
        view.staff_name,
        booked,
        format_amount(symbol, view.total_amount),
        view.status,
        view.payment_status,
    )
}

/// Joins `lines` with newlines, stopping before `max_chars` is exceeded and
/// noting how many lines were left out.
#[must_use]
pub fn fit_lines(lines: &[String], max_chars: usize) -> String {
    let mut out = String::new();
    for (shown, line) in lines.iter().enumerate() {
        let remaining = lines.len() - shown;
        let separator = if out.is_empty() { "" } else { "\n" };
        let more = format!("{separator}…and {remaining} more");
        let reserve = if remaining > 1 { more.len() + 1 } else { 0 };
        if out.len() + separator.len() + line.len() + reserve > max_chars {
            out.push_str(&more);
            return out;
        }
        out.push_str(separator);
        out.push_str(line);
    }
    out
}

/// Cuts `text` to at most `max_chars` characters, ending with `…` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Caps every field to Discord's name and value limits and keeps fields while
/// their combined length stays within `budget` characters.
///
/// Returns the kept fields; their count tells how many items are shown.
#[must_use]
pub fn fit_fields<I>(fields: I, budget: usize) -> Vec<EmbedField>
where
    I: IntoIterator<Item = EmbedField>,
{
    let mut used = 0;
    let mut kept = Vec::new();
    for (name, value, inline) in fields {
        let name = truncate_text(&name, EMBED_FIELD_NAME_LIMIT);
        let value = truncate_text(&value, EMBED_FIELD_LIMIT);
        let size = name.chars().count() + value.chars().count();
        if used + size > budget {
            break;
        }
        used += size;
        kept.push((name, value, inline));
    }
    kept
}

/// Footer for a list embed, noting when only some items are shown.
#[must_use]
pub fn list_footer(shown: usize, total: usize, note: &str) -> String {
    if shown < total {
        format!("Showing {shown} of {total}. {note}")
    } else {
        note.to_string()
    }
}

/// Share of billed money already collected, 0-100.
#[must_use]
pub fn collection_rate(collected: f64, pending: f64) -> f64 {
    let billed = collected + pending;
    if billed <= 0.0 {
        return 0.0;
    }
    (collected / billed) * 100.0
}

/// Text progress bar like `[████████░░] 80.0%`.
#[must_use]
pub fn format_progress_bar(percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percent.clamp(0.0, 100.0);

    // Cast safety: clamped ∈ [0, 100] and length is small, so the result is in [0, length].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!("[{}{}] {percent:.1}%", "█".repeat(filled), "░".repeat(empty))
}
