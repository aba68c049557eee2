//! Decorative particle canvas background
//!
//! A full-viewport canvas of slowly drifting, softly pulsing particles with
//! connection lines between close pairs. Purely cosmetic: the animation
//! loop is cancelled on unmount and the particle field is rebuilt on
//! resize.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CONNECT_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    opacity: f64,
    hue: f64,
}

fn spawn_particle(width: f64, height: f64) -> Particle {
    Particle {
        x: js_sys::Math::random() * width,
        y: js_sys::Math::random() * height,
        vx: (js_sys::Math::random() - 0.5) * 0.5,
        vy: (js_sys::Math::random() - 0.5) * 0.5,
        size: js_sys::Math::random() * 2.0 + 1.0,
        opacity: js_sys::Math::random() * 0.5 + 0.1,
        // Blue to cyan range
        hue: js_sys::Math::random() * 60.0 + 180.0,
    }
}

/// Particle count scales with the viewport area and the requested
/// intensity.
fn particle_count(width: f64, height: f64, intensity: f64) -> usize {
    ((width * height) / 15_000.0 * intensity) as usize
}

/// Advance all particles by one frame: drift, wrap around the edges, and
/// pulse the opacity with a time-and-position dependent phase.
fn step_particles(particles: &mut [Particle], width: f64, height: f64, time_ms: f64) {
    for particle in particles {
        particle.x += particle.vx;
        particle.y += particle.vy;

        if particle.x < 0.0 {
            particle.x = width;
        }
        if particle.x > width {
            particle.x = 0.0;
        }
        if particle.y < 0.0 {
            particle.y = height;
        }
        if particle.y > height {
            particle.y = 0.0;
        }

        particle.opacity += (time_ms * 0.001 + particle.x * 0.01).sin() * 0.01;
        particle.opacity = particle.opacity.clamp(0.1, 0.6);
    }
}

fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    particles: &[Particle],
    width: f64,
    height: f64,
    intensity: f64,
) {
    ctx.clear_rect(0.0, 0.0, width, height);

    // Connection lines between close pairs
    for (i, particle) in particles.iter().enumerate() {
        for other in &particles[i + 1..] {
            let dx = particle.x - other.x;
            let dy = particle.y - other.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < CONNECT_DISTANCE {
                let opacity = (1.0 - distance / CONNECT_DISTANCE) * 0.1 * intensity;
                ctx.set_stroke_style_str(&format!(
                    "hsla({}, 70%, 60%, {})",
                    particle.hue, opacity
                ));
                ctx.set_line_width(0.5);
                ctx.begin_path();
                ctx.move_to(particle.x, particle.y);
                ctx.line_to(other.x, other.y);
                ctx.stroke();
            }
        }
    }

    for particle in particles {
        ctx.set_fill_style_str(&format!(
            "hsla({}, 70%, 60%, {})",
            particle.hue,
            particle.opacity * intensity
        ));
        ctx.begin_path();
        let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
        ctx.fill();

        // Soft glow pass
        ctx.set_shadow_color(&format!("hsl({}, 70%, 60%)", particle.hue));
        ctx.set_shadow_blur(particle.size * 2.0);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}

/// Owns the live animation: dropping it detaches the resize listener and
/// ends the requestAnimationFrame loop.
struct AnimationHandle {
    window: web_sys::Window,
    resize: Closure<dyn FnMut()>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "resize",
            self.resize.as_ref().unchecked_ref(),
        );
        self.frame.borrow_mut().take();
    }
}

/// Fixed, pointer-transparent particle canvas covering the viewport.
#[component]
pub fn ParticleBackground(#[prop(default = 0.5)] intensity: f64) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // The handle holds browser-thread-only closures, so it lives in local
    // storage; the cleanup below only touches the Copy handle.
    let animation = StoredValue::new_local(None::<AnimationHandle>);
    on_cleanup(move || animation.set_value(None));

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let canvas: HtmlCanvasElement = canvas.clone();
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(ctx_obj)) = canvas.get_context("2d") else {
            return;
        };
        let Ok(ctx) = ctx_obj.dyn_into::<CanvasRenderingContext2d>() else {
            return;
        };

        let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(Vec::new()));

        let resize = {
            let canvas = canvas.clone();
            let particles = Rc::clone(&particles);
            let window = window.clone();
            move || {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or(0.0);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);

                let count = particle_count(width, height, intensity);
                *particles.borrow_mut() =
                    (0..count).map(|_| spawn_particle(width, height)).collect();
            }
        };
        resize();

        // Rebuild the field when the viewport changes
        let resize_closure = Closure::<dyn FnMut()>::new(resize);
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());

        // requestAnimationFrame loop; dropping the closure stops it
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_handle = Rc::clone(&frame);
        let animate = {
            let canvas = canvas.clone();
            let window = window.clone();
            let particles = Rc::clone(&particles);
            move || {
                let width = f64::from(canvas.width());
                let height = f64::from(canvas.height());
                let now = js_sys::Date::now();

                step_particles(&mut particles.borrow_mut(), width, height, now);
                draw_particles(&ctx, &particles.borrow(), width, height, intensity);

                if let Some(closure) = frame_handle.borrow().as_ref() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        };
        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(animate));
        if let Some(closure) = frame.borrow().as_ref() {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }

        // Replacing the handle drops any previous run's listener and loop.
        animation.set_value(Some(AnimationHandle {
            window,
            resize: resize_closure,
            frame,
        }));
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 pointer-events-none z-0"
            style="opacity: 0.3;"
        ></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_area_and_intensity() {
        assert_eq!(particle_count(0.0, 0.0, 0.5), 0);
        let full = particle_count(1920.0, 1080.0, 1.0);
        let half = particle_count(1920.0, 1080.0, 0.5);
        assert!(full > 0);
        assert!(half < full);
    }

    #[test]
    fn particles_wrap_around_edges() {
        let mut particles = vec![Particle {
            x: -1.0,
            y: 101.0,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.3,
            hue: 200.0,
        }];
        step_particles(&mut particles, 100.0, 100.0, 0.0);
        assert!(particles[0].x >= 0.0 && particles[0].x <= 100.0);
        assert!(particles[0].y >= 0.0 && particles[0].y <= 100.0);
    }

    #[test]
    fn opacity_stays_in_bounds() {
        let mut particles = vec![Particle {
            x: 10.0,
            y: 10.0,
            vx: 0.1,
            vy: 0.1,
            size: 1.0,
            opacity: 0.6,
            hue: 200.0,
        }];
        for t in 0..1_000 {
            step_particles(&mut particles, 100.0, 100.0, f64::from(t) * 16.0);
            assert!((0.1..=0.6).contains(&particles[0].opacity));
        }
    }
}
