//! Parameters for the background particle field.

use crate::theme::Theme;
use serde_json::{Value, json};

struct Palette {
    particle: &'static str,
    line: &'static str,
    opacity: f64,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            particle: "#6366f1",
            line: "#a5b4fc",
            opacity: 0.5,
        },
        Theme::Dark => Palette {
            particle: "#e2e8f0",
            line: "#94a3b8",
            opacity: 0.35,
        },
    }
}

/// Configuration object handed to `particlesJS`.
pub fn particle_params(theme: Theme) -> Value {
    let p = palette(theme);
    json!({
        "particles": {
            "number": { "value": 60, "density": { "enable": true, "value_area": 900 } },
            "color": { "value": p.particle },
            "shape": { "type": "circle" },
            "opacity": { "value": p.opacity, "random": false },
            "size": { "value": 3, "random": true },
            "line_linked": {
                "enable": true,
                "distance": 150,
                "color": p.line,
                "opacity": p.opacity,
                "width": 1
            },
            "move": { "enable": true, "speed": 2, "direction": "none", "out_mode": "out" }
        },
        "interactivity": {
            "detect_on": "canvas",
            "events": {
                "onhover": { "enable": true, "mode": "grab" },
                "onclick": { "enable": true, "mode": "push" },
                "resize": true
            }
        },
        "retina_detect": true
    })
}
