//! Drift-and-pulse model behind the ambient canvas background.
//!
//! The DOM layer owns the canvas and the frame loop; this module owns every
//! number. Randomness is injected so the simulation is deterministic under
//! test (the browser passes `js_sys::Math::random`).

/// One particle per this many square pixels of canvas.
pub const AREA_PER_PARTICLE: f64 = 9000.0;
/// Hard cap regardless of canvas size.
pub const MAX_PARTICLES: usize = 90;

/// Particle count for a canvas of the given pixel size.
pub fn count_for_area(width: f64, height: f64) -> usize {
    ((width * height / AREA_PER_PARTICLE) as usize).min(MAX_PARTICLES)
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_opacity: f64,
    pub vx: f64,
    pub vy: f64,
    pub phase: f64,
    pub pulse_speed: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            radius: 0.6 + rng() * 1.8,
            base_opacity: 0.15 + rng() * 0.45,
            vx: (rng() - 0.5) * 0.3,
            // Upward drift only.
            vy: -(0.1 + rng() * 0.4),
            phase: rng() * std::f64::consts::TAU,
            pulse_speed: 0.01 + rng() * 0.03,
        }
    }

    /// Opacity to draw with at the current pulse phase.
    pub fn display_opacity(&self) -> f64 {
        self.base_opacity * (0.6 + 0.4 * self.phase.sin())
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let particles = (0..count_for_area(width, height))
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopts new canvas dimensions after a resize. Existing particles keep
    /// their positions; the population is regrown or trimmed to the new
    /// density.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        let want = count_for_area(width, height);
        self.particles.truncate(want);
        while self.particles.len() < want {
            self.particles.push(Particle::spawn(width, height, rng));
        }
    }

    /// Advances every particle one frame: pulse phase, then drift, then
    /// edge handling (recycle to the bottom past the top, wrap across the
    /// sides).
    pub fn step(&mut self, rng: &mut impl FnMut() -> f64) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.phase += p.pulse_speed;
            p.x += p.vx;
            p.y += p.vy;

            if p.y + p.radius < 0.0 {
                p.y = h + p.radius;
                p.x = rng() * w;
            }
            if p.x - p.radius > w {
                p.x = -p.radius;
            } else if p.x + p.radius < 0.0 {
                p.x = w + p.radius;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap deterministic [0,1) sequence for tests.
    fn test_rng() -> impl FnMut() -> f64 {
        let mut seed = 0x2545_f491_4f6c_dd1du64;
        move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn count_scales_with_area_and_caps() {
        assert_eq!(count_for_area(300.0, 300.0), 10);
        assert_eq!(count_for_area(4000.0, 3000.0), MAX_PARTICLES);
        assert_eq!(count_for_area(0.0, 0.0), 0);
    }

    #[test]
    fn particles_spawn_inside_the_canvas() {
        let mut rng = test_rng();
        let field = ParticleField::new(800.0, 600.0, &mut rng);
        assert!(!field.particles().is_empty());
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vy < 0.0);
        }
    }

    #[test]
    fn drifting_past_the_top_recycles_to_the_bottom() {
        let mut rng = test_rng();
        let mut field = ParticleField::new(400.0, 300.0, &mut rng);
        // Run long enough for the slowest particle to cross the canvas.
        for _ in 0..10_000 {
            field.step(&mut rng);
            for p in field.particles() {
                assert!(p.y + p.radius >= 0.0, "particle escaped the top");
                assert!(p.y <= 300.0 + p.radius + 1.0);
            }
        }
    }

    #[test]
    fn horizontal_positions_wrap() {
        let mut rng = test_rng();
        let mut field = ParticleField::new(200.0, 200.0, &mut rng);
        for _ in 0..10_000 {
            field.step(&mut rng);
            for p in field.particles() {
                assert!(p.x + p.radius >= -1.0 && p.x - p.radius <= 201.0);
            }
        }
    }

    #[test]
    fn pulse_keeps_opacity_within_base_envelope() {
        let mut rng = test_rng();
        let mut field = ParticleField::new(500.0, 500.0, &mut rng);
        for _ in 0..500 {
            field.step(&mut rng);
            for p in field.particles() {
                let o = p.display_opacity();
                assert!(o >= p.base_opacity * 0.2 - 1e-9);
                assert!(o <= p.base_opacity * 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn resize_regrows_to_the_new_density() {
        let mut rng = test_rng();
        let mut field = ParticleField::new(300.0, 300.0, &mut rng);
        field.resize(1200.0, 900.0, &mut rng);
        assert_eq!(field.particles().len(), count_for_area(1200.0, 900.0));
        field.resize(100.0, 100.0, &mut rng);
        assert_eq!(field.particles().len(), count_for_area(100.0, 100.0));
    }
}
