use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    GameStart,
    GameEnd,
    Kill,
    PlayerInfoChanged,
}

pub static EVENT_TAGS: phf::Map<&'static str, EventKind> = phf::phf_map! {
    "InitGame" => EventKind::GameStart,
    "ShutdownGame" => EventKind::GameEnd,
    "Kill" => EventKind::Kill,
    "ClientUserinfoChanged" => EventKind::PlayerInfoChanged,
};

// e.g. '0:00 InitGame:', '20:38 ClientConnect:', '20:54 Kill:'
// Digits and whitespace are ASCII only, `\d`/`\s` would also accept other scripts.
static EVENT_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"[0-9]+:[0-9]+[\t\n\f\r ]+([^\t\n\f\r :]+):")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        EVENT_TAGS.get(tag).copied()
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::GameStart => "InitGame",
            Self::GameEnd => "ShutdownGame",
            Self::Kill => "Kill",
            Self::PlayerInfoChanged => "ClientUserinfoChanged",
        }
    }
}

/// A recognized event together with the line it was found on, so handlers
/// can pull the event specific details out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'l> {
    pub kind: EventKind,
    pub line: &'l str,
}

/// Classifies a single log line.
///
/// Returns `None` for lines without a `<minutes>:<seconds> <Tag>:` prefix and
/// for tags that are not tracked (`Item`, `ClientConnect`, ...).
pub fn classify(line: &str) -> Option<Event<'_>> {
    let tag = EVENT_RE.captures(line)?.get(1)?.as_str();

    EventKind::from_tag(tag).map(|kind| Event { kind, line })
}
