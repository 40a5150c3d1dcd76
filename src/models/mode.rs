use std::fmt;

/// Run cadence, which governs the search window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Daily,
    Weekly,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Daily => "daily",
            RunMode::Weekly => "weekly",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
