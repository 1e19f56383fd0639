//! Score counter display
//!
//! The page carries one element per counter, classed `<side>Total`,
//! `<side>Goals` and `<side>Behinds`. Each frame the HUD writes any counter
//! whose value changed since the last write.

use crate::sim::{Scoreboard, Side, SideScore};

/// Which counter an element shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Total,
    Goals,
    Behinds,
}

impl Counter {
    pub const ALL: [Counter; 3] = [Counter::Total, Counter::Goals, Counter::Behinds];

    fn suffix(&self) -> &'static str {
        match self {
            Counter::Total => "Total",
            Counter::Goals => "Goals",
            Counter::Behinds => "Behinds",
        }
    }

    pub fn value(&self, score: &SideScore) -> u32 {
        match self {
            Counter::Total => score.total,
            Counter::Goals => score.goals,
            Counter::Behinds => score.behinds,
        }
    }
}

/// Element class for a counter, e.g. `playerTotal`
pub fn element_class(side: Side, counter: Counter) -> String {
    format!("{}{}", side.as_str(), counter.suffix())
}

/// Tracks what the page currently shows
#[derive(Debug, Default)]
pub struct Hud {
    shown: Option<Scoreboard>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters that differ from what was last written, as (class, text)
    pub fn changes(&self, scoreboard: &Scoreboard) -> Vec<(String, String)> {
        let mut changes = Vec::new();
        for side in Side::ALL {
            let score = scoreboard.side(side);
            for counter in Counter::ALL {
                let value = counter.value(score);
                let stale = self
                    .shown
                    .map(|shown| counter.value(shown.side(side)) != value)
                    .unwrap_or(true);
                if stale {
                    changes.push((element_class(side, counter), value.to_string()));
                }
            }
        }
        changes
    }

    /// Remember the scoreboard as written
    pub fn mark_shown(&mut self, scoreboard: &Scoreboard) {
        self.shown = Some(*scoreboard);
    }

    /// Write changed counters into the DOM
    #[cfg(target_arch = "wasm32")]
    pub fn update(&mut self, scoreboard: &Scoreboard) {
        let changes = self.changes(scoreboard);
        if changes.is_empty() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for (class, text) in &changes {
            match document.query_selector(&format!(".{}", class)) {
                Ok(Some(el)) => el.set_text_content(Some(text)),
                _ => log::warn!("Score element .{} not found", class),
            }
        }
        self.mark_shown(scoreboard);
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn update(&mut self, scoreboard: &Scoreboard) {
        for (class, text) in self.changes(scoreboard) {
            log::debug!("{} = {}", class, text);
        }
        self.mark_shown(scoreboard);
    }
}
