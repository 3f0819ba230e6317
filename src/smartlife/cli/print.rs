use chrono::{DateTime, Utc};
use colored::*;
use smartlife::model::{Event, EventKind, Note, Preferences, Task};
use unicode_width::UnicodeWidthChar;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 15;
const DONE_MARKER: &str = "✓";

pub fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events.");
        return;
    }
    for event in events {
        let kind = match &event.kind {
            EventKind::Reminder => "reminder".yellow(),
            EventKind::Course => "course".cyan(),
            EventKind::Other(tag) => tag.as_str().normal(),
        };
        let label = format!("{} {}", event.time, event.title);
        print_row(event.id, "  ", &label, &kind.to_string(), event.created_at);
    }
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for task in tasks {
        let marker = if task.completed {
            format!("{} ", DONE_MARKER.green())
        } else {
            "  ".to_string()
        };
        let text = if task.completed {
            task.text.dimmed().strikethrough().to_string()
        } else {
            task.text.clone()
        };
        print_row(task.id, &marker, &text, "", task.created_at);
    }
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        let preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let label = if preview.is_empty() {
            note.title.bold().to_string()
        } else {
            format!("{} {}", note.title.bold(), preview.dimmed())
        };
        print_row(note.id, "  ", &label, "", note.created_at);
    }
}

pub fn print_full_note(note: &Note) {
    println!("{} {}", note.id.to_string().yellow(), note.title.bold());
    println!("--------------------------------");
    println!("{}", note.content);
}

pub fn print_preferences(prefs: &Preferences) {
    println!("user-name     = {}", prefs.user_name);
    println!("theme         = {}", prefs.theme);
    println!("notifications = {}", prefs.notifications);
}

pub fn print_heading(title: &str, count: usize) {
    println!("{} {}", title.bold(), format!("({})", count).dimmed());
}

pub fn success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref().dimmed());
}

fn print_row(id: i64, prefix: &str, label: &str, tag: &str, created_at: DateTime<Utc>) {
    let id_str = format!("{:>width$} ", id, width = ID_WIDTH);
    let tag_part = if tag.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tag)
    };

    let fixed = ID_WIDTH + 1 + console_width(prefix) + console_width(&tag_part) + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let label = truncate_to_width(label, available);
    let padding = available.saturating_sub(console_width(&label));

    println!(
        "{}{}{}{}{}{}",
        id_str.dimmed(),
        prefix,
        label,
        " ".repeat(padding),
        tag_part,
        format_time_ago(created_at).dimmed()
    );
}

/// Display width ignoring ANSI color sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if console_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            result.push(c);
            for c in chars.by_ref() {
                result.push(c);
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            result.push_str("\u{1b}[0m");
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_labels() {
        let out = truncate_to_width("abcdefghij", 5);
        assert!(out.starts_with("abcd…"));
    }

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn width_skips_color_codes() {
        assert_eq!(console_width("\u{1b}[1mhi\u{1b}[0m"), 2);
        assert_eq!(console_width("日本"), 4);
    }
}
