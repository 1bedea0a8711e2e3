//! Stage → presentation mapping for renderers and legends.
//!
//! The engine never reads this; it is a plain immutable value handed to
//! whichever collaborator draws agents.

use crate::Stage;

/// Label and color for one stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    pub label: String,
    pub color: String,
}

/// One [`PaletteEntry`] per [`Stage`], indexed by stage code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagePalette {
    entries: Vec<PaletteEntry>,
}

impl Default for StagePalette {
    fn default() -> Self {
        Self::from_colors([
            "lightblue",
            "coral",
            "red",
            "darkred",
            "purple",
            "lightgreen",
        ])
    }
}

impl StagePalette {
    /// Build a palette from one color per stage (in [`Stage::ALL`] order),
    /// labelled with [`Stage::label`].
    pub fn from_colors(colors: [&str; Stage::COUNT]) -> Self {
        let entries = Stage::ALL
            .iter()
            .zip(colors)
            .map(|(stage, color)| PaletteEntry {
                label: stage.label().to_string(),
                color: color.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Copy of `self` with `stage` recolored.
    pub fn with_color(mut self, stage: Stage, color: impl Into<String>) -> Self {
        self.entries[stage.index()].color = color.into();
        self
    }

    #[inline]
    pub fn entry(&self, stage: Stage) -> &PaletteEntry {
        &self.entries[stage.index()]
    }

    #[inline]
    pub fn color(&self, stage: Stage) -> &str {
        &self.entry(stage).color
    }

    #[inline]
    pub fn label(&self, stage: Stage) -> &str {
        &self.entry(stage).label
    }

    /// Per-agent colors for a stage slice, in agent order.
    pub fn colors_for<'a>(&'a self, stages: &'a [Stage]) -> impl Iterator<Item = &'a str> + 'a {
        stages.iter().map(move |&s| self.color(s))
    }

    /// Legend rows in progression order.
    pub fn legend(&self) -> impl Iterator<Item = (Stage, &PaletteEntry)> + '_ {
        Stage::ALL.iter().map(move |&s| (s, self.entry(s)))
    }
}
