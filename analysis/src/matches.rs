use std::collections::HashMap;
use std::sync::LazyLock;

use crate::event::{self, EventKind};

/// Killer name used by the server for deaths caused by the map itself
/// (falling, trigger hurt, lava, ...).
pub const WORLD_ENTITY: &str = "<world>";

// 2:11 Kill: 2 4 6: Dono da Bola killed Zeh by MOD_ROCKET
// 21:07 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
static KILL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"Kill:[\t\n\f\r ]+[0-9]+[\t\n\f\r ]+[0-9]+[\t\n\f\r ]+[0-9]+:[\t\n\f\r ]+(.+) killed (.+) by ([^\t\n\f\r ]+)")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

// 3:47 ClientUserinfoChanged: 5 n\Assasinu Credi\t\0\model\sarge\hmodel\sarge\...
static PLAYER_INFO_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"ClientUserinfoChanged:[\t\n\f\r ]+[0-9]+[\t\n\f\r ]+n\\([^\\]+)\\")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchRecord {
    pub total_kills: usize,
    pub player_scores: HashMap<String, i64>,
    pub cause_of_death: HashMap<String, usize>,
}

impl MatchRecord {
    pub fn kills_are_consistent(&self) -> bool {
        self.total_kills == self.cause_of_death.values().sum::<usize>()
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InMatch(MatchRecord),
}

/// Folds log lines into match records, one line at a time.
///
/// A match is closed by `ShutdownGame`, by the next `InitGame` or by
/// [`Accumulator::finish`], whichever comes first. Every opened match ends up
/// in the output exactly once.
#[derive(Debug, Default)]
pub struct Accumulator {
    state: State,
    completed: Vec<MatchRecord>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_match(&self) -> bool {
        matches!(self.state, State::InMatch(_))
    }

    /// Matches closed so far, in closing order.
    pub fn completed(&self) -> &[MatchRecord] {
        &self.completed
    }

    pub fn feed(&mut self, line: &str) {
        let event = match event::classify(line) {
            Some(e) => e,
            None => return,
        };

        match event.kind {
            EventKind::GameStart => self.game_start(),
            EventKind::GameEnd => self.game_end(),
            EventKind::Kill => {
                if let State::InMatch(current) = &mut self.state {
                    kill(current, event.line);
                }
            }
            EventKind::PlayerInfoChanged => {
                if let State::InMatch(current) = &mut self.state {
                    player_info_changed(current, event.line);
                }
            }
        };
    }

    pub fn finish(mut self) -> Vec<MatchRecord> {
        if self.in_match() {
            tracing::debug!("Log ended without ShutdownGame, closing the running match");
            self.close_current();
        }

        tracing::debug!(matches = self.completed().len(), "Finished parsing");

        self.completed
    }

    fn game_start(&mut self) {
        // Servers sometimes log two InitGame in a row without a ShutdownGame
        // in between, the first one still counts as a match.
        if self.in_match() {
            tracing::debug!("InitGame while a match is running, closing it");
            self.close_current();
        }

        tracing::debug!(number = self.completed().len() + 1, "Match started");
        self.state = State::InMatch(MatchRecord::default());
    }

    fn game_end(&mut self) {
        if self.in_match() {
            self.close_current();
        }
    }

    fn close_current(&mut self) {
        if let State::InMatch(current) = std::mem::take(&mut self.state) {
            tracing::debug!(
                number = self.completed().len() + 1,
                total_kills = current.total_kills,
                players = current.player_scores.len(),
                "Match closed"
            );
            self.completed.push(current);
        }
    }
}

/// Parses a complete log, one line per item.
pub fn parse<'l, I>(lines: I) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut accumulator = Accumulator::new();
    for line in lines {
        accumulator.feed(line);
    }
    accumulator.finish()
}

pub fn parse_str(content: &str) -> Vec<MatchRecord> {
    parse(content.lines())
}

fn kill(current: &mut MatchRecord, line: &str) {
    let captures = match KILL_RE.captures(line) {
        Some(c) => c,
        None => {
            tracing::trace!(line, tag = EventKind::Kill.tag(), "Ignoring malformed line");
            return;
        }
    };

    let killer = &captures[1];
    let victim = &captures[2];
    let cause = &captures[3];

    if killer == WORLD_ENTITY || killer == victim {
        *current.player_scores.entry(victim.to_owned()).or_default() -= 1;
    } else {
        *current.player_scores.entry(killer.to_owned()).or_default() += 1;
        current.player_scores.entry(victim.to_owned()).or_default();
    }

    *current.cause_of_death.entry(cause.to_owned()).or_default() += 1;
    current.total_kills += 1;
}

fn player_info_changed(current: &mut MatchRecord, line: &str) {
    let name = match PLAYER_INFO_RE.captures(line).and_then(|c| c.get(1)) {
        Some(n) => n.as_str(),
        None => {
            tracing::trace!(
                line,
                tag = EventKind::PlayerInfoChanged.tag(),
                "Ignoring malformed line"
            );
            return;
        }
    };

    current.player_scores.entry(name.to_owned()).or_default();
}
