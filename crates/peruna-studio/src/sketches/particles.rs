use peruna_engine::{Canvas, Color, Sketch};

const SPAWN_EVERY: u64 = 10;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    color: Color,
    life: f32,
    max_life: f32,
}

impl Particle {
    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= 1.0;
    }

    fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    fn draw(&self, p: &mut Canvas) {
        let alpha = self.life / self.max_life * 255.0;
        p.set_fill(self.color.with_alpha(alpha / 255.0));
        p.draw_circle(self.x, self.y, self.size);
    }
}

/// Translucent circles that drift and fade out.
#[derive(Default)]
pub struct Particles {
    particles: Vec<Particle>,
}

impl Sketch for Particles {
    fn setup(&mut self, p: &mut Canvas) {
        p.disable_stroke();
    }

    fn draw(&mut self, p: &mut Canvas, frame_count: u64) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|particle| !particle.is_dead());

        for particle in &self.particles {
            particle.draw(p);
        }

        if frame_count % SPAWN_EVERY == 0 {
            let life = p.random_uniform(50.0, 150.0);
            self.particles.push(Particle {
                x: p.random_to(p.width()),
                y: p.random_to(p.height()),
                vx: p.random_uniform(-1.0, 1.0),
                vy: p.random_uniform(-1.0, 1.0),
                size: p.random_uniform(2.0, 800.0),
                color: p.make_color(p.random_to(255.0), p.random_to(255.0), p.random_to(255.0), 255.0),
                life,
                max_life: life,
            });
        }
    }
}
