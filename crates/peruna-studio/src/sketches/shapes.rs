use peruna_engine::{Canvas, Color, Sketch};

use super::wave_channel;

const SHAPE_COUNT: usize = 10;

#[derive(Debug, Clone, Copy)]
struct Placement {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

/// Randomly placed ellipses and rects, alternating colors.
#[derive(Default)]
pub struct ScatteredShapes {
    placements: Vec<Placement>,
}

impl Sketch for ScatteredShapes {
    fn setup(&mut self, p: &mut Canvas) {
        let (w, h) = (p.width(), p.height());
        self.placements = (0..SHAPE_COUNT)
            .map(|_| Placement {
                x: p.random_to(w),
                y: p.random_to(h),
                w: p.random_uniform(w / 10.0, w / 2.0),
                h: p.random_uniform(h / 10.0, h / 2.0),
            })
            .collect();
    }

    fn draw(&mut self, p: &mut Canvas, frame_count: u64) {
        let t = frame_count as f32;
        p.set_background(Color::rgb(
            wave_channel((t * 0.01).sin()),
            wave_channel((t * 0.02).sin()),
            wave_channel((t * 0.03).sin()),
        ));

        for (i, s) in self.placements.iter().enumerate() {
            if i % 2 == 0 {
                p.set_fill(Color::SMU_RED);
                p.set_stroke(Color::SMU_BLUE);
                p.draw_ellipse(s.x, s.y, s.w, s.h);
            } else {
                p.set_fill(Color::SMU_BLUE);
                p.set_stroke(Color::SMU_RED);
                p.draw_rect(s.x, s.y, s.w, s.h);
            }
        }
    }
}
