use peruna_engine::{Canvas, Color, Sketch};

const GRID_DIV: f32 = 60.0;
const CLUSTERS: usize = 40;
const LINES_PER_CLUSTER: usize = 15;
const NOISE_STEP: f32 = 0.2;
const NOISE_AMOUNT: f32 = 40.0;

struct Cluster {
    dx: f32,
    dy: f32,
    color: Color,
}

/// Vertical grid lines under clusters of noise-jittered diagonals.
#[derive(Default)]
pub struct NoisyLines {
    clusters: Vec<Cluster>,
}

impl Sketch for NoisyLines {
    fn setup(&mut self, p: &mut Canvas) {
        let (w, h) = (p.width(), p.height());
        self.clusters = (0..CLUSTERS)
            .map(|_| Cluster {
                dx: p.random_uniform(-w * 0.25, w),
                dy: p.random_uniform(-h * 0.25, h),
                color: p.make_color(p.random_to(255.0), p.random_to(255.0), p.random_to(255.0), 255.0),
            })
            .collect();
    }

    fn draw(&mut self, p: &mut Canvas, frame_count: u64) {
        p.set_background_gray(1.0);

        let (w, h) = (p.width(), p.height());
        let grid_w = w / GRID_DIV;

        p.set_stroke_gray(20.0);
        for i in 0..GRID_DIV as usize {
            let x = i as f32 * grid_w + grid_w / 2.0;
            p.draw_line(x, 0.0, x, h);
        }

        let frame = frame_count as f32;
        for c in &self.clusters {
            p.set_stroke(c.color);
            for i in 0..LINES_PER_CLUSTER {
                let fi = i as f32;
                let n = |x: f32, y: f32| p.noise(x * NOISE_STEP, y * NOISE_STEP, 0.0) * NOISE_AMOUNT;

                let x1 = fi * grid_w + grid_w / 2.0 + c.dx + n(fi, frame);
                let y1 = h / 4.0 + fi * 10.0 + c.dy + n(fi, frame + 1000.0);
                let x2 = fi * grid_w + grid_w / 2.0 + c.dx + n(fi + 1000.0, frame);
                let y2 = h * 0.5 + fi * 10.0 + c.dy + n(fi + 2000.0, 1000.0);

                p.draw_line(x1, y1, x2, y2);
            }
        }
    }
}
