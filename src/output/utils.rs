//! Shared utility functions for output formatting

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::tree::{Lookup, format_size};

/// Connector drawn in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Text between the brackets of a size annotation, `None` when sizes are off.
pub fn size_text(size: &Lookup<u64>, human: bool) -> Option<String> {
    match size {
        Lookup::Skipped => None,
        Lookup::Found(bytes) if human => Some(format_size(*bytes)),
        Lookup::Found(bytes) => Some(bytes.to_string()),
        Lookup::Failed => Some("?".to_string()),
    }
}

/// Text between the brackets of a date annotation, `None` when dates are off.
pub fn date_text(modified: &Lookup<SystemTime>) -> Option<String> {
    match modified {
        Lookup::Skipped => None,
        Lookup::Found(time) => Some(format_time(*time)),
        Lookup::Failed => Some("?".to_string()),
    }
}

/// Local time in the `ls -l` style, e.g. `Oct  7 21:42`.
pub fn format_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%b %e %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_connector() {
        assert_eq!(connector(true), "└── ");
        assert_eq!(connector(false), "├── ");
    }

    #[test]
    fn test_size_text() {
        assert_eq!(size_text(&Lookup::Skipped, false), None);
        assert_eq!(size_text(&Lookup::Found(4096), false).as_deref(), Some("4096"));
        assert_eq!(size_text(&Lookup::Found(4096), true).as_deref(), Some("4.0K"));
        assert_eq!(size_text(&Lookup::Failed, true).as_deref(), Some("?"));
    }

    #[test]
    fn test_date_text() {
        assert_eq!(date_text(&Lookup::Skipped), None);
        assert_eq!(date_text(&Lookup::Failed).as_deref(), Some("?"));

        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let text = date_text(&Lookup::Found(time)).unwrap();
        // "Mon dd HH:MM" regardless of the local time zone
        assert_eq!(text.len(), 12);
        assert_eq!(&text[9..10], ":");
    }
}
