use chrono::{DateTime, Utc};
use contracts::{LeaderboardEntry, LeaderboardPage, NewLeaderboardEntry};

/// Append-only score table. Entries are never reordered or removed in place.
#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    last_id: u64,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, entry: NewLeaderboardEntry) -> &LeaderboardEntry {
        self.submit_at(entry, Utc::now())
    }

    /// Ids are epoch milliseconds, bumped past the previous id when the clock has not moved.
    pub fn submit_at(
        &mut self,
        entry: NewLeaderboardEntry,
        now: DateTime<Utc>,
    ) -> &LeaderboardEntry {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;

        self.entries.push(LeaderboardEntry {
            id,
            name: entry.name,
            score: entry.score,
            days: entry.days,
            survived: entry.survived,
            time_stamp: now,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Highest scores first; equal scores keep submission order.
    pub fn top(&self, n: usize) -> LeaderboardPage {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(n);

        LeaderboardPage {
            leaderboard: ranked,
            length: self.entries.len(),
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
