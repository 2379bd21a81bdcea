use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::str::FromStr;

use palette::Srgb;
use zoon::*;

use crate::platform::now_seconds;
use shared::Palette;
use shared::geometry::{Camera, Icosahedron, ProjectedEdge, depth_alpha, project_wireframe, view_matrix};
use shared::interaction::{FrameClock, RotationDriver, RotationSpeeds};

const ORB_HEIGHT_PX: u32 = 320;
const FRAME_MS: u32 = 16;
/// Camera orbit speed, in full turns per minute.
const AUTO_ORBIT_SPEED: f64 = 2.0;
const WIRE_WIDTH: f32 = 1.5;
const VERTEX_RADIUS: f32 = 2.5;
/// Used when the theme color does not parse.
const FALLBACK_WIRE_RGB: (u8, u8, u8) = (99, 102, 241);

type Rgb = (u8, u8, u8);

fn wire_rgb(hex: &str) -> Rgb {
    match Srgb::<u8>::from_str(hex) {
        Ok(color) => (color.red, color.green, color.blue),
        Err(error) => {
            zoon::eprintln!("Invalid orb color '{hex}': {error}");
            FALLBACK_WIRE_RGB
        }
    }
}

/// Spinning wireframe icosahedron in the hero section.
pub fn tech_orb(palette: &Palette) -> impl Element + use<> {
    let color = wire_rgb(palette.orb_wire);
    El::new()
        .s(Width::fill())
        .s(Height::exact(ORB_HEIGHT_PX))
        .child_signal(orb_canvas(color).into_signal_option())
}

async fn orb_canvas(color: Rgb) -> impl Element {
    let mut zoon_canvas = Canvas::new().width(0).height(0).s(Width::fill()).s(Height::fill());

    let dom_canvas = zoon_canvas.raw_el_mut().dom_element();
    let canvas_wrapper = fast2d::CanvasWrapper::new_with_canvas(dom_canvas).await;
    zoon::println!("Orb canvas ready");

    let canvas = Rc::new(RefCell::new(canvas_wrapper));
    let size = Rc::new(Cell::new((0_u32, 0_u32)));

    let frame_loop = Task::start_droppable({
        let canvas = canvas.clone();
        let size = size.clone();
        async move {
            let mesh = Icosahedron::new(Icosahedron::ORB_RADIUS);
            let camera = Camera::default();
            let mut object = RotationDriver::new(RotationSpeeds::ORB);
            let mut orbit = RotationDriver::new(RotationSpeeds::auto_orbit(AUTO_ORBIT_SPEED));
            let mut clock = FrameClock::default();
            loop {
                let elapsed = clock.delta(now_seconds());
                object.tick(elapsed);
                orbit.tick(elapsed);

                let (width, height) = size.get();
                if width > 0 && height > 0 {
                    let view = view_matrix(object.state(), orbit.state().angle_y);
                    let edges = project_wireframe(&mesh, &view, &camera, width as f64, height as f64);
                    canvas
                        .borrow_mut()
                        .update_objects(move |objects| *objects = wireframe_objects(&edges, &camera, color));
                }
                Timer::sleep(FRAME_MS).await;
            }
        }
    });

    zoon_canvas
        .update_raw_el(move |raw_el| {
            raw_el.on_resize(move |width, height| {
                size.set((width, height));
                canvas.borrow_mut().resized(width, height);
            })
        })
        .after_remove(move |_| drop(frame_loop))
}

/// Edges as lines plus a dot at each edge start, fading with depth.
fn wireframe_objects(edges: &[ProjectedEdge], camera: &Camera, (r, g, b): Rgb) -> Vec<fast2d::Object2d> {
    let near = camera.distance - Icosahedron::ORB_RADIUS;
    let far = camera.distance + Icosahedron::ORB_RADIUS;
    let mut objects = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        let alpha = depth_alpha(edge.depth, near, far) as f32;
        objects.push(
            fast2d::Line::new()
                .points(&[
                    (edge.from.0 as f32, edge.from.1 as f32),
                    (edge.to.0 as f32, edge.to.1 as f32),
                ])
                .color(r, g, b, alpha)
                .width(WIRE_WIDTH)
                .into(),
        );
        objects.push(
            fast2d::Circle::new()
                .center(edge.from.0 as f32, edge.from.1 as f32)
                .radius(VERTEX_RADIUS)
                .color(r, g, b, alpha)
                .into(),
        );
    }
    objects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_colors_parse_to_rgb() {
        assert_eq!(wire_rgb("#4f46e5"), (0x4f, 0x46, 0xe5));
        for theme in [shared::Theme::Light, shared::Theme::Dark] {
            let hex = shared::ThemePreset::for_theme(theme).palette.orb_wire;
            assert!(Srgb::<u8>::from_str(hex).is_ok(), "{theme}: {hex}");
        }
    }
}
