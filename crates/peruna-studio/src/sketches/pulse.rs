use peruna_engine::{Canvas, Color, Sketch};

use super::wave_channel;

/// A rect and a circle over a slowly cycling background.
pub struct Pulse;

impl Sketch for Pulse {
    fn draw(&mut self, p: &mut Canvas, frame_count: u64) {
        let t = frame_count as f32;
        p.set_background(Color::rgb(
            wave_channel((t * 0.01).sin()),
            wave_channel((t * 0.02).sin()),
            wave_channel((t * 0.03).sin()),
        ));

        let (w, h) = (p.width(), p.height());

        p.set_fill(Color::SMU_RED);
        p.set_stroke(Color::SMU_BLUE);
        p.draw_rect(w / 2.0, h / 2.0, w / 2.0, h / 2.0);

        p.set_fill(Color::SMU_BLUE);
        p.set_stroke(Color::SMU_RED);
        p.draw_ellipse(w / 2.0, h / 4.0, w / 3.0, w / 3.0);
    }
}
