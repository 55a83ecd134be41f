use peruna_engine::{Canvas, Color, Sketch};

const NOISE_FACTOR: f32 = 30.0;

/// Noise-tinted ellipse field with a swaying band of grass along the bottom.
#[derive(Default)]
pub struct Landscape {
    cell: f32,
}

impl Landscape {
    fn draw_sky(&self, p: &mut Canvas, frame: f32) {
        let cols = (p.width() / self.cell) as usize;
        let rows = (p.height() / self.cell) as usize + 1;

        for i in 0..cols {
            for j in 0..=rows {
                let n = p.noise(i as f32 * NOISE_FACTOR, j as f32 * NOISE_FACTOR, frame * 0.01);
                let r = p.map_range(n, 0.0, 1.0, 15.0, 60.0, false);
                let g = p.map_range(n, 0.0, 1.0, 15.0, 50.0, false);
                let b = p.map_range(n, 0.0, 1.0, 50.0, 100.0, false);

                p.set_fill_rgba(r, g, b, 255.0);
                p.draw_ellipse(
                    i as f32 * self.cell + self.cell / 2.0,
                    j as f32 * self.cell + self.cell / 2.0,
                    self.cell * 2.0,
                    self.cell * 2.0,
                );
            }
        }
    }

    fn draw_grass(&self, p: &mut Canvas, frame: f32) {
        let cols = (p.width() / self.cell) as usize;
        let rows = (p.height() / self.cell / 2.5) as usize;

        for i in 0..cols {
            for j in 0..=rows {
                let (x, y) = (i as f32 * NOISE_FACTOR, j as f32 * NOISE_FACTOR);
                let sway = p.noise(x, y, frame);
                let rn = p.noise(x, y, frame + 500.0);
                let gn = p.noise(x, y, frame + 1000.0);
                let bn = p.noise(x, y, frame + 1500.0);

                p.set_fill_rgba(
                    p.map_range(rn, 0.0, 1.0, 20.0, 60.0, false),
                    p.map_range(gn, 0.0, 1.0, 40.0, 150.0, false),
                    p.map_range(bn, 0.0, 1.0, 20.0, 40.0, false),
                    255.0,
                );
                p.set_stroke_rgba(bn * 255.0, gn * 255.0, rn * 255.0, 255.0);

                let offset = p.map_range(sway, 0.0, 1.0, 0.0, p.width() / 5.0, false);
                p.draw_ellipse(
                    i as f32 * self.cell + self.cell / 2.0,
                    p.height() - j as f32 * self.cell + offset,
                    self.cell * 2.0,
                    self.cell * 2.0,
                );
            }
        }
    }
}

impl Sketch for Landscape {
    fn setup(&mut self, p: &mut Canvas) {
        self.cell = p.width() / 15.0;
        p.set_ellipse_segments(24);
    }

    fn draw(&mut self, p: &mut Canvas, frame_count: u64) {
        let frame = frame_count as f32;
        p.set_background(Color::rgb(
            ((frame * 0.02).cos() * 60.0).abs(),
            20.0,
            ((frame * 0.02).sin() * 60.0).abs(),
        ));

        // Sky tint does not take a stroke.
        p.disable_stroke();
        self.draw_sky(p, frame);
        self.draw_grass(p, frame);
    }
}
