//! Send-code cooldown.
//!
//! `Idle -> Counting(n) -> ... -> Counting(1) -> Idle`, one step per tick. The
//! async driver ticks once per second from a single interval.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

pub const SEND_CODE_COOLDOWN_SECS: u32 = 60;

const SEND_CODE_LABEL: &str = "send code";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountdownState {
    #[default]
    Idle,
    Counting(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    state: CountdownState,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Whether the send-code button is usable.
    pub fn is_idle(&self) -> bool {
        self.state == CountdownState::Idle
    }

    /// Start counting from `seconds`. Zero leaves the countdown idle.
    pub fn start(&mut self, seconds: u32) {
        self.state = if seconds == 0 {
            CountdownState::Idle
        } else {
            CountdownState::Counting(seconds)
        };
    }

    /// Advance one second and return the new state.
    pub fn tick(&mut self) -> CountdownState {
        self.state = match self.state {
            CountdownState::Counting(remaining) if remaining > 1 => {
                CountdownState::Counting(remaining - 1)
            }
            _ => CountdownState::Idle,
        };
        self.state
    }

    /// Button text: remaining seconds while counting.
    pub fn label(&self) -> String {
        match self.state {
            CountdownState::Idle => SEND_CODE_LABEL.to_owned(),
            CountdownState::Counting(remaining) => format!("{remaining}s"),
        }
    }

    /// Count down from `seconds`, calling `on_tick` with each label, and
    /// return once idle again.
    pub async fn run(&mut self, seconds: u32, mut on_tick: impl FnMut(&str)) {
        self.start(seconds);
        on_tick(&self.label());

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately.
        ticker.tick().await;

        while !self.is_idle() {
            ticker.tick().await;
            self.tick();
            on_tick(&self.label());
        }
    }
}
