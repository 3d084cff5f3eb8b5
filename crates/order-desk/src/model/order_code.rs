//! Short order codes called out at the counter (`A001`, `A002`, …).

/// Highest sequence number before codes wrap back to 001.
pub const MAX_SEQUENCE: u32 = 999;

#[derive(Debug, Clone)]
pub struct OrderCodeGenerator {
    prefix: String,
    next: u32,
}

impl OrderCodeGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `"{prefix}{n:03}"` and advances. After 999 the sequence restarts at 001.
    pub fn next_code(&mut self) -> String {
        if self.next > MAX_SEQUENCE {
            self.next = 1;
        }
        let code = format!("{}{:03}", self.prefix, self.next);
        self.next += 1;
        code
    }

    /// Moves the sequence past a code that already exists, so reloaded orders are not handed
    /// out again. Codes with another prefix or a non-numeric tail are ignored.
    pub fn observe(&mut self, code: &str) {
        let Some(tail) = code.strip_prefix(self.prefix.as_str()) else {
            return;
        };
        match tail.parse::<u32>() {
            Ok(n) if (1..=MAX_SEQUENCE).contains(&n) && n >= self.next => self.next = n + 1,
            _ => {}
        }
    }
}
