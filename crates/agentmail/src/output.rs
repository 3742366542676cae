//! Terminal rendering: inbox table, message view, relative ages.

use agentmail_core::{Message, Priority};
use chrono::{DateTime, Local, Utc};

const HEADERS: [&str; 5] = ["ID", "FROM", "SUBJECT", "PRIORITY", "AGE"];

/// Placeholder for timestamps the store did not report.
const NO_DATE: &str = "-";

/// Human-readable relative age of a timestamp.
///
/// Buckets: "just now" under a minute, then minutes, hours, days up to a
/// week, then the calendar date. Timestamps in the future clamp to
/// "just now".
pub fn format_age(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return NO_DATE.to_string();
    };

    let diff = now.signed_duration_since(ts);
    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_hours() < 24 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 7 {
        format!("{}d ago", diff.num_days())
    } else {
        ts.format("%b %d").to_string()
    }
}

/// Inbox table with a `*` marker on unread rows.
///
/// Columns are space-padded to the widest cell; the store's listing order
/// is kept as-is.
pub fn render_inbox(messages: &[Message], now: DateTime<Utc>) -> String {
    let rows: Vec<[String; 5]> = messages
        .iter()
        .map(|msg| {
            [
                msg.id.clone(),
                msg.from.clone(),
                msg.subject.clone(),
                Priority::from_level(msg.priority).label().to_string(),
                format_age(msg.timestamp, now),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, ' ', &HEADERS.map(String::from), &widths);
    for (msg, row) in messages.iter().zip(&rows) {
        let marker = if msg.read { ' ' } else { '*' };
        render_row(&mut out, marker, row, &widths);
    }
    out
}

fn render_row(out: &mut String, marker: char, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = format!("{marker} ");
    for (cell, &width) in cells.iter().zip(widths) {
        line.push_str(&format!("{cell:<width$}"));
        line.push_str("  ");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Full message view: headers, then the body when there is one.
pub fn render_message(msg: &Message) -> String {
    let date = msg.timestamp.map_or_else(
        || NO_DATE.to_string(),
        |ts| {
            ts.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    );

    let mut out = format!(
        "From:    {}\nTo:      {}\nSubject: {}\nDate:    {}\n",
        msg.from, msg.to, msg.subject, date
    );
    if !msg.body.is_empty() {
        out.push('\n');
        out.push_str(&msg.body);
        out.push('\n');
    }
    out
}
