//! Cosmetic timer schedules
//!
//! The simulation only asks for effects (see [`GameEvent`]); the host turns
//! them into browser timers. Nothing here touches physics.

use crate::sim::{ColorTag, GameEvent};

/// One color change of the hit flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashStep {
    /// Delay from the hazard hit, in milliseconds
    pub delay_ms: u32,
    pub color: ColorTag,
}

/// The sequence of color changes a `StartFlash` request expands to.
///
/// Step k (1-based) fires at k * interval. Odd steps show the flash color and
/// even steps the normal one. The final step always restores the normal color.
/// Schedules from quick successive hits may overlap; whichever timer fires
/// last decides the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSchedule {
    pub alternations: u32,
    pub interval_ms: u32,
}

impl FlashSchedule {
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match *event {
            GameEvent::StartFlash {
                alternations,
                interval_ms,
            } => Some(Self {
                alternations,
                interval_ms,
            }),
            _ => None,
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = FlashStep> + '_ {
        (1..=self.alternations).map(move |k| FlashStep {
            delay_ms: k * self.interval_ms,
            color: if k % 2 == 1 && k != self.alternations {
                ColorTag::PlayerFlash
            } else {
                ColorTag::Player
            },
        })
    }

    /// Total time until the player color is back to normal
    pub fn duration_ms(&self) -> u32 {
        self.alternations * self.interval_ms
    }
}

/// Delay before the form is revealed, if the event asks for it
pub fn reveal_delay(event: &GameEvent) -> Option<u32> {
    match *event {
        GameEvent::RevealForm { delay_ms } => Some(delay_ms),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn standard() -> FlashSchedule {
        FlashSchedule {
            alternations: FLASH_ALTERNATIONS,
            interval_ms: FLASH_INTERVAL_MS,
        }
    }

    #[test]
    fn test_six_alternations() {
        let steps: Vec<_> = standard().steps().collect();
        assert_eq!(steps.len(), 6);
        let delays: Vec<u32> = steps.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![100, 200, 300, 400, 500, 600]);
        assert_eq!(steps[0].color, ColorTag::PlayerFlash);
        assert_eq!(steps[1].color, ColorTag::Player);
        assert_eq!(steps[4].color, ColorTag::PlayerFlash);
        assert_eq!(steps[5].color, ColorTag::Player);
        assert_eq!(standard().duration_ms(), 600);
    }

    #[test]
    fn test_odd_count_ends_on_normal_color() {
        let schedule = FlashSchedule {
            alternations: 3,
            interval_ms: 50,
        };
        let last = schedule.steps().last().unwrap();
        assert_eq!(last.delay_ms, 150);
        assert_eq!(last.color, ColorTag::Player);
    }

    #[test]
    fn test_from_event() {
        let event = GameEvent::StartFlash {
            alternations: 6,
            interval_ms: 100,
        };
        assert_eq!(FlashSchedule::from_event(&event), Some(standard()));
        assert_eq!(FlashSchedule::from_event(&GameEvent::Jumped), None);
    }

    #[test]
    fn test_reveal_delay() {
        let event = GameEvent::RevealForm {
            delay_ms: GOAL_REVEAL_DELAY_MS,
        };
        assert_eq!(reveal_delay(&event), Some(500));
        assert_eq!(reveal_delay(&GameEvent::HazardHit { index: 0 }), None);
    }

    #[test]
    fn test_overlapping_flashes_last_write_wins() {
        // Second hit 250ms after the first; replay both schedules on one color slot
        let mut timeline: Vec<(u32, ColorTag)> = standard()
            .steps()
            .map(|s| (s.delay_ms, s.color))
            .chain(standard().steps().map(|s| (s.delay_ms + 250, s.color)))
            .collect();
        timeline.sort_by_key(|(t, _)| *t);
        let mut color = ColorTag::Player;
        for (_, c) in timeline {
            color = c;
        }
        assert_eq!(color, ColorTag::Player);
    }
}
