//! Transient notice ("Copied!") shown after side-effect-only actions.
//!
//! Each `show` bumps a sequence number; a dismiss timer only clears the
//! notice it was started for, so a stale timer cannot hide a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible.
pub const NOTICE_DURATION_MS: u32 = 2_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub message: Option<String>,
    pub seq: u64,
}

impl NoticeState {
    /// Display `message` and return the sequence to dismiss it with.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Clear the notice if it is still the one shown as `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}
