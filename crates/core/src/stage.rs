//! Stage module - maps cumulative score to a growth stage
//!
//! The growth backdrop climbs from the ground to outer space as the score
//! rises. Stages are a static table sorted by threshold; the active stage is
//! the one with the greatest threshold not exceeding the score.
//!
//! | Threshold | Zone |
//! |-----------|------|
//! | 0 | Ground |
//! | 500 | Village |
//! | 2000 | City |
//! | 5000 | Clouds |
//! | 10000 | Sky |
//! | 30000 | Space |

use serde::Serialize;

/// Visual theme for one growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stage {
    /// Minimum score at which this stage becomes active.
    pub threshold: u32,
    pub zone: &'static str,
    pub icon: &'static str,
    /// Character height as a percentage of the scene.
    pub height_pct: u8,
    pub scale: f32,
    /// Sky gradient, top colour then bottom colour.
    pub sky: [[u8; 3]; 2],
}

pub const DEFAULT_STAGES: [Stage; 6] = [
    Stage {
        threshold: 0,
        zone: "Ground",
        icon: "🌱",
        height_pct: 25,
        scale: 0.4,
        sky: [[0x87, 0xCE, 0xEB], [0x90, 0xEE, 0x90]],
    },
    Stage {
        threshold: 500,
        zone: "Village",
        icon: "🏠",
        height_pct: 40,
        scale: 0.55,
        sky: [[0x87, 0xCE, 0xEB], [0x22, 0x8B, 0x22]],
    },
    Stage {
        threshold: 2000,
        zone: "City",
        icon: "🏙",
        height_pct: 55,
        scale: 0.7,
        sky: [[0x4A, 0x90, 0xD9], [0x87, 0xCE, 0xEB]],
    },
    Stage {
        threshold: 5000,
        zone: "Clouds",
        icon: "☁",
        height_pct: 70,
        scale: 0.85,
        sky: [[0x2E, 0x50, 0x90], [0x87, 0xCE, 0xEB]],
    },
    Stage {
        threshold: 10000,
        zone: "Sky",
        icon: "✈",
        height_pct: 85,
        scale: 1.0,
        sky: [[0x1A, 0x1A, 0x2E], [0x4A, 0x90, 0xD9]],
    },
    Stage {
        threshold: 30000,
        zone: "Space",
        icon: "🚀",
        height_pct: 100,
        scale: 1.2,
        sky: [[0x0F, 0x0F, 0x23], [0x1A, 0x1A, 0x2E]],
    },
];

/// Score from which clouds drift across the backdrop.
pub const CLOUDS_FROM: u32 = 2000;

/// Score from which stars appear.
pub const STARS_FROM: u32 = 10000;

/// Decorations layered over the stage backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Scenery {
    pub clouds: bool,
    pub stars: bool,
}

impl Scenery {
    pub fn for_score(score: u32) -> Self {
        Self {
            clouds: score >= CLOUDS_FROM,
            stars: score >= STARS_FROM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageTableError {
    #[error("stage table is empty")]
    Empty,
    #[error("stage {index} threshold {threshold} is not above the previous one")]
    Unordered { index: usize, threshold: u32 },
}

/// Ordered, immutable stage table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTable {
    stages: &'static [Stage],
}

impl StageTable {
    /// Wrap a table, checking it is non-empty and strictly ascending.
    pub fn new(stages: &'static [Stage]) -> Result<Self, StageTableError> {
        if stages.is_empty() {
            return Err(StageTableError::Empty);
        }
        for (index, pair) in stages.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(StageTableError::Unordered {
                    index: index + 1,
                    threshold: pair[1].threshold,
                });
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &'static [Stage] {
        self.stages
    }

    /// Index of the active stage for `score`.
    ///
    /// Falls back to the first (lowest) stage when `score` is below every
    /// threshold.
    pub fn index_for(&self, score: u32) -> usize {
        self.stages
            .partition_point(|stage| stage.threshold <= score)
            .saturating_sub(1)
    }

    pub fn stage_for(&self, score: u32) -> &'static Stage {
        &self.stages[self.index_for(score)]
    }

    /// The next stage to reach, if any.
    pub fn next_after(&self, score: u32) -> Option<&'static Stage> {
        self.stages.get(self.index_for(score) + 1)
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            stages: &DEFAULT_STAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(StageTable::new(&DEFAULT_STAGES).is_ok());
        assert_eq!(StageTable::default().stages().len(), 6);
    }

    #[test]
    fn lookup_uses_greatest_threshold_not_exceeding_score() {
        let table = StageTable::default();
        assert_eq!(table.stage_for(0).zone, "Ground");
        assert_eq!(table.stage_for(499).zone, "Ground");
        assert_eq!(table.stage_for(500).zone, "Village");
        assert_eq!(table.stage_for(1999).zone, "Village");
        assert_eq!(table.stage_for(2000).zone, "City");
        assert_eq!(table.stage_for(9999).zone, "Clouds");
        assert_eq!(table.stage_for(29_999).zone, "Sky");
        assert_eq!(table.stage_for(30_000).zone, "Space");
        assert_eq!(table.stage_for(u32::MAX).zone, "Space");
    }

    #[test]
    fn below_every_threshold_falls_back_to_first() {
        static HIGH: [Stage; 2] = [
            Stage {
                threshold: 100,
                ..DEFAULT_STAGES[0]
            },
            Stage {
                threshold: 200,
                ..DEFAULT_STAGES[1]
            },
        ];
        let table = StageTable::new(&HIGH).unwrap();
        assert_eq!(table.index_for(0), 0);
        assert_eq!(table.index_for(150), 0);
        assert_eq!(table.index_for(200), 1);
    }

    #[test]
    fn rejects_bad_tables() {
        static EMPTY: [Stage; 0] = [];
        assert_eq!(StageTable::new(&EMPTY), Err(StageTableError::Empty));

        static BACKWARDS: [Stage; 2] = [DEFAULT_STAGES[1], DEFAULT_STAGES[0]];
        assert_eq!(
            StageTable::new(&BACKWARDS),
            Err(StageTableError::Unordered {
                index: 1,
                threshold: 0
            })
        );
    }

    #[test]
    fn next_stage_preview() {
        let table = StageTable::default();
        assert_eq!(table.next_after(0).map(|s| s.threshold), Some(500));
        assert_eq!(table.next_after(600).map(|s| s.threshold), Some(2000));
        assert_eq!(table.next_after(30_000), None);
    }

    #[test]
    fn scenery_thresholds() {
        assert_eq!(Scenery::for_score(1999), Scenery::default());
        assert!(Scenery::for_score(2000).clouds);
        assert!(!Scenery::for_score(2000).stars);
        assert!(Scenery::for_score(10_000).stars);
    }
}
