use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;

use crate::utils::error::{Result, TimestampError};

/// Fallback text returned by [`format_named`] for an unrecognized tag name.
/// Callers on the string-keyed path must compare against this to detect
/// silent failure; the enum-keyed path cannot produce it.
pub const INVALID_FORMAT: &str = "invalid format type";

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatTag {
    /// `YYYY-MM-DD HH:MM:SS`
    Full,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYYMMDD_HHMMSS`
    Datetime,
    /// `YYYYMMDD`
    Compact,
    /// `YYYYWNN`, Sunday-start week numbering (00-53)
    Week,
}

impl FormatTag {
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Full,
        FormatTag::Date,
        FormatTag::Datetime,
        FormatTag::Compact,
        FormatTag::Week,
    ];

    /// The strftime pattern rendered for this tag. `%U` counts Sunday-start
    /// weeks, with days before the year's first Sunday in week 00.
    pub fn pattern(&self) -> &'static str {
        match self {
            FormatTag::Full => "%Y-%m-%d %H:%M:%S",
            FormatTag::Date => "%Y-%m-%d",
            FormatTag::Datetime => "%Y%m%d_%H%M%S",
            FormatTag::Compact => "%Y%m%d",
            FormatTag::Week => "%YW%U",
        }
    }

    /// The tag name as it appears on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            FormatTag::Full => "full",
            FormatTag::Date => "date",
            FormatTag::Datetime => "datetime",
            FormatTag::Compact => "compact",
            FormatTag::Week => "week",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatTag {
    type Err = TimestampError;

    // Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(FormatTag::Full),
            "date" => Ok(FormatTag::Date),
            "datetime" => Ok(FormatTag::Datetime),
            "compact" => Ok(FormatTag::Compact),
            "week" => Ok(FormatTag::Week),
            _ => Err(TimestampError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Local wall-clock reading. Taken once per invocation.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a given instant with the pattern for `tag`. Total over the enum;
/// cannot fail.
pub fn format_at(tag: FormatTag, instant: NaiveDateTime) -> String {
    instant.format(tag.pattern()).to_string()
}

/// Render the current local time with the pattern for `tag`.
pub fn generate(tag: FormatTag) -> String {
    format_at(tag, now_local())
}

/// String-keyed entry point. Renders on a recognized tag name; anything
/// else degrades to [`INVALID_FORMAT`] instead of erroring.
pub fn format_named(name: &str, instant: NaiveDateTime) -> String {
    match name.parse::<FormatTag>() {
        Ok(tag) => format_at(tag, instant),
        Err(_) => INVALID_FORMAT.to_string(),
    }
}
