//! Celebration bursts after a successful submission.
//!
//! Particles are plain `div`s appended to `<body>` and animated by the
//! `confetti-fly` keyframes in `styles.css`; each burst removes its own
//! particles once the animation is over.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const PARTICLE_LIFETIME_MS: u32 = 2_200;
const BASE_VELOCITY: f64 = 45.0;
const GRAVITY_DROP: f64 = 35.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub delay_ms: u32,
    pub particle_count: u32,
    /// Launch direction in degrees, 90 is straight up.
    pub angle: f64,
    pub spread: f64,
    /// Launch point as a fraction of the viewport.
    pub origin: (f64, f64),
    pub colors: &'static [&'static str],
}

/// Centre burst, then one from each side.
pub fn celebration() -> [Burst; 3] {
    [
        Burst {
            delay_ms: 0,
            particle_count: 100,
            angle: 90.0,
            spread: 70.0,
            origin: (0.5, 0.6),
            colors: &["#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#ec4899"],
        },
        Burst {
            delay_ms: 250,
            particle_count: 50,
            angle: 60.0,
            spread: 55.0,
            origin: (0.0, 0.5),
            colors: &["#0ea5e9", "#3b82f6", "#6366f1"],
        },
        Burst {
            delay_ms: 400,
            particle_count: 50,
            angle: 120.0,
            spread: 55.0,
            origin: (1.0, 0.5),
            colors: &["#8b5cf6", "#ec4899", "#f43f5e"],
        },
    ]
}

/// Deterministic value in `[0, 1)` so bursts look scattered without an RNG.
fn scatter(seed: u32) -> f64 {
    let x = (f64::from(seed) * 12.9898).sin() * 43_758.545_3;
    x - x.floor()
}

/// Inline style for one particle of `burst`.
pub fn particle_style(burst: &Burst, index: u32) -> String {
    let jitter = scatter(index * 3 + 1);
    let speed = scatter(index * 3 + 2);
    let tilt = scatter(index * 3 + 3);

    let degrees = burst.angle - burst.spread / 2.0 + jitter * burst.spread;
    let radians = degrees.to_radians();
    let velocity = BASE_VELOCITY * (0.5 + speed);
    let dx = radians.cos() * velocity;
    let dy = -radians.sin() * velocity + GRAVITY_DROP;
    let color = burst.colors[index as usize % burst.colors.len()];

    format!(
        "left: {:.2}vw; top: {:.2}vh; background: {}; --dx: {:.2}vmin; --dy: {:.2}vmin; --spin: {:.0}deg;",
        burst.origin.0 * 100.0,
        burst.origin.1 * 100.0,
        color,
        dx,
        dy,
        tilt * 720.0 - 360.0,
    )
}

/// Schedules every burst of [`celebration`].
pub fn celebrate() {
    for burst in celebration() {
        Timeout::new(burst.delay_ms, move || launch(&burst)).forget();
    }
}

fn launch(burst: &Burst) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let mut particles = Vec::with_capacity(burst.particle_count as usize);
    for index in 0..burst.particle_count {
        let Ok(element) = document.create_element("div") else {
            continue;
        };
        let Ok(particle) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        particle.set_class_name("confetti-particle");
        let _ = particle.set_attribute("style", &particle_style(burst, index));
        if body.append_child(&particle).is_ok() {
            particles.push(particle);
        }
    }

    Timeout::new(PARTICLE_LIFETIME_MS, move || {
        for particle in particles {
            particle.remove();
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_bursts_staggered() {
        let bursts = celebration();
        let timing: Vec<(u32, u32)> = bursts
            .iter()
            .map(|b| (b.delay_ms, b.particle_count))
            .collect();
        assert_eq!(timing, vec![(0, 100), (250, 50), (400, 50)]);
        assert_eq!(bursts[1].origin.0, 0.0);
        assert_eq!(bursts[2].origin.0, 1.0);
    }

    #[test]
    fn particles_cycle_through_palette() {
        let burst = &celebration()[1];
        assert!(particle_style(burst, 0).contains("#0ea5e9"));
        assert!(particle_style(burst, 1).contains("#3b82f6"));
        assert!(particle_style(burst, 3).contains("#0ea5e9"));
    }

    #[test]
    fn scatter_stays_in_unit_range() {
        for seed in 0..500 {
            let v = scatter(seed);
            assert!((0.0..1.0).contains(&v), "{} -> {}", seed, v);
        }
    }
}
