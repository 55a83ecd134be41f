//! Demo sketches selectable from the command line.

mod landscape;
mod noisy_lines;
mod particles;
mod pulse;
mod shapes;

pub use landscape::Landscape;
pub use noisy_lines::NoisyLines;
pub use particles::Particles;
pub use pulse::Pulse;
pub use shapes::ScatteredShapes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchName {
    Pulse,
    Shapes,
    NoisyLines,
    Particles,
    Landscape,
}

impl SketchName {
    const ALL: [SketchName; 5] = [
        SketchName::Pulse,
        SketchName::Shapes,
        SketchName::NoisyLines,
        SketchName::Particles,
        SketchName::Landscape,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SketchName::Pulse => "pulse",
            SketchName::Shapes => "shapes",
            SketchName::NoisyLines => "noisy-lines",
            SketchName::Particles => "particles",
            SketchName::Landscape => "landscape",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == s)
    }

    pub fn list() -> String {
        Self::ALL.map(SketchName::as_str).join(", ")
    }
}

/// Channel value in `[0, 255]` from a signed wave.
fn wave_channel(v: f32) -> f32 {
    v.abs() * 255.0
}
