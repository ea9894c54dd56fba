//! Panels and the host interface the transition controller drives.
//!
//! A [`Panel`] is any child view whose geometry the carousel may overwrite.
//! The [`PanelHost`] trait is the narrow view of a panel collection that the
//! [`TransitionController`](crate::widget::animation::TransitionController)
//! needs: index-addressable geometry, the viewport width, and a way to ask
//! for a repaint.

use super::geometry::Rect;

/// A child view managed by a carousel.
pub trait Panel {
    /// Current geometry in carousel coordinates.
    fn geometry(&self) -> Rect;

    /// Replace the panel geometry.
    fn set_geometry(&mut self, rect: Rect);

    /// Current width.
    fn width(&self) -> f32 {
        self.geometry().width()
    }
}

/// A plain panel that only records its geometry.
///
/// Useful as a stand-in for a real child widget, or when the host renders
/// panels itself and only needs the carousel to compute where they go.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelFrame {
    name: String,
    geometry: Rect,
}

impl PanelFrame {
    /// Create a named panel with zero geometry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: Rect::ZERO,
        }
    }

    /// Create a named panel with the given geometry.
    pub fn with_geometry(name: impl Into<String>, geometry: Rect) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }

    /// The panel name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Panel for PanelFrame {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }
}

impl<P: Panel + ?Sized> Panel for Box<P> {
    fn geometry(&self) -> Rect {
        (**self).geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        (**self).set_geometry(rect);
    }

    fn width(&self) -> f32 {
        (**self).width()
    }
}

/// An ordered, index-addressable panel collection.
pub trait PanelHost {
    /// Number of panels.
    fn panel_count(&self) -> usize;

    /// Geometry of the panel at `index`, if it exists.
    fn panel_geometry(&self, index: usize) -> Option<Rect>;

    /// Overwrite the geometry of the panel at `index`.
    ///
    /// Out of range indices are ignored.
    fn set_panel_geometry(&mut self, index: usize, rect: Rect);

    /// Width of the visible area panels slide through.
    fn viewport_width(&self) -> f32;

    /// Ask the host to repaint.
    fn request_repaint(&mut self);
}

/// A [`PanelHost`] over an owned list of panels.
///
/// This is the collection a carousel stores its children in.
#[derive(Debug, Clone, Default)]
pub struct PanelStrip<P> {
    panels: Vec<P>,
    viewport: Rect,
    repaint_requested: bool,
}

impl<P: Panel> PanelStrip<P> {
    /// Create an empty strip with the given viewport.
    pub fn new(viewport: Rect) -> Self {
        Self {
            panels: Vec::new(),
            viewport,
            repaint_requested: false,
        }
    }

    /// The visible area.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Change the visible area.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// All panels, in order.
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    /// Mutable access to the panel list.
    pub fn panels_mut(&mut self) -> &mut Vec<P> {
        &mut self.panels
    }

    /// Whether a repaint was requested since the flag was last taken.
    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }

    /// Return and clear the repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Geometry that fills the viewport, with the given left edge.
    pub fn slot_at(&self, x: f32) -> Rect {
        Rect::from_size(self.viewport.size).with_x(x)
    }
}

impl<P: Panel> PanelHost for PanelStrip<P> {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn panel_geometry(&self, index: usize) -> Option<Rect> {
        self.panels.get(index).map(Panel::geometry)
    }

    fn set_panel_geometry(&mut self, index: usize, rect: Rect) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.set_geometry(rect);
        }
    }

    fn viewport_width(&self) -> f32 {
        self.viewport.width()
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_frame_geometry() {
        let mut panel = PanelFrame::new("first");
        assert_eq!(panel.name(), "first");
        assert_eq!(panel.geometry(), Rect::ZERO);

        panel.set_geometry(Rect::new(5.0, 0.0, 120.0, 80.0));
        assert_eq!(panel.width(), 120.0);
    }

    #[test]
    fn test_boxed_panel_forwards() {
        let mut panel: Box<dyn Panel> = Box::new(PanelFrame::new("boxed"));
        panel.set_geometry(Rect::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(panel.width(), 64.0);
    }

    #[test]
    fn test_strip_host() {
        let mut strip = PanelStrip::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        strip.panels_mut().push(PanelFrame::new("a"));

        assert_eq!(strip.panel_count(), 1);
        assert_eq!(strip.viewport_width(), 200.0);

        strip.set_panel_geometry(0, strip.slot_at(200.0));
        assert_eq!(strip.panel_geometry(0), Some(Rect::new(200.0, 0.0, 200.0, 100.0)));

        // Out of range writes are ignored
        strip.set_panel_geometry(5, Rect::ZERO);
        assert_eq!(strip.panel_geometry(5), None);

        strip.request_repaint();
        assert!(strip.take_repaint_request());
        assert!(!strip.repaint_requested());
    }
}
