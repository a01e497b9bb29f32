/// Render loop driving the rotating wireframe
use nalgebra::Point2;

use crate::geometry::Wireframe;
use crate::projection::Projector;
use crate::transform::RotationState;

/// Per-frame rotation increment (radians). Trades perceived rotation speed
/// against smoothness at typical refresh rates.
pub const SPIN_RATE: f64 = 0.005;

/// Default mapping from normalized projection space to surface units,
/// sized for pixel surfaces.
pub const SCALE: f64 = 300.0;

/// A 2D immediate-mode drawing surface the engine renders into.
///
/// Implementations report their current dimensions each frame, so resizes
/// made between frames are picked up at the start of the next one.
pub trait Surface {
    /// Current width and height in surface units
    fn dimensions(&self) -> (f64, f64);

    /// Erase the whole surface
    fn clear(&mut self);

    /// Draw a straight line segment between two surface-space points
    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>);
}

/// The render loop state: a wireframe model plus the rotation it is
/// currently drawn under.
///
/// The engine owns the rotation exclusively; each `frame_step` advances it
/// once and redraws every edge. Scheduling of the next frame belongs to the
/// caller, which keeps the loop cancellable by simply not calling again.
pub struct Engine {
    model: Wireframe,
    projector: Projector,
    rotation: RotationState,
    pub spin_rate: f64,
    pub scale: f64,
}

impl Engine {
    pub fn new(model: Wireframe) -> Self {
        Self {
            model,
            projector: Projector::default(),
            rotation: RotationState::zero(),
            spin_rate: SPIN_RATE,
            scale: SCALE,
        }
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Run one frame: clear, advance the rotation, project every edge under
    /// the advanced angles, and draw it centered on the surface.
    pub fn frame_step<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();

        self.rotation.rotate(self.spin_rate, self.spin_rate);

        let (width, height) = surface.dimensions();
        let cx = width / 2.0;
        let cy = height / 2.0;

        for edge in self.model.edges() {
            let a = self.projector.project(&self.model.vertices()[edge.a], &self.rotation);
            let b = self.projector.project(&self.model.vertices()[edge.b], &self.rotation);
            if let (Some(a), Some(b)) = (a, b) {
                surface.draw_line(
                    Point2::new(cx + a.x * self.scale, cy + a.y * self.scale),
                    Point2::new(cx + b.x * self.scale, cy + b.y * self.scale),
                );
            }
        }
    }
}
