//! Named drawing layers and the root container that stacks them.

use std::collections::HashMap;

use tracing::debug;

use crate::render::{Graphics, PathSink};

/// Identity of an attached layer, unique within one [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LayerId(u64);

#[derive(Debug, Clone)]
struct Layer {
    name: String,
    graphics: Graphics,
}

/// Root render container.
///
/// Layers are stacked in creation order: the first layer added is drawn
/// first (bottom), the last one on top. Names are case-sensitive keys.
///
/// Adding a name that is already registered detaches the old layer and its
/// content, then registers a fresh empty layer on top of the stack. Each name
/// therefore maps to exactly one attached layer.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    order: Vec<LayerId>,
    layers: HashMap<LayerId, Layer>,
    names: HashMap<String, LayerId>,
    next_id: u64,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and attach a layer, returning its handle for direct drawing.
    ///
    /// Returns `None` for an empty name; nothing is created in that case.
    pub fn add_layer(&mut self, name: &str) -> Option<&mut Graphics> {
        if name.is_empty() {
            debug!("rejected layer with empty name");
            return None;
        }
        if let Some(previous) = self.names.remove(name) {
            debug!(layer = name, "replacing existing layer");
            self.detach(previous);
        }

        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.names.insert(name.to_string(), id);
        let layer = self.layers.entry(id).or_insert(Layer {
            name: name.to_string(),
            graphics: Graphics::new(),
        });
        Some(&mut layer.graphics)
    }

    /// Erase everything drawn on a layer. Unknown names are ignored.
    ///
    /// Returns whether a layer was found.
    pub fn clear_layer(&mut self, name: &str) -> bool {
        match self.layer_mut(name) {
            Some(graphics) => {
                graphics.clear();
                true
            }
            None => {
                debug!(layer = name, "clear skipped for unknown layer");
                false
            }
        }
    }

    /// Look up a layer handle by name.
    pub fn layer(&self, name: &str) -> Option<&Graphics> {
        let id = self.names.get(name)?;
        self.layers.get(id).map(|layer| &layer.graphics)
    }

    /// Look up a layer handle by name for drawing.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Graphics> {
        let id = self.names.get(name)?;
        self.layers.get_mut(id).map(|layer| &mut layer.graphics)
    }

    /// Check whether a layer is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of attached layers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether no layer is attached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate attached layers bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = (&str, &Graphics)> {
        self.order
            .iter()
            .filter_map(|id| self.layers.get(id))
            .map(|layer| (layer.name.as_str(), &layer.graphics))
    }

    /// Layer names bottom to top.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers().map(|(name, _)| name)
    }

    /// Forward every layer, bottom to top, to `sink`.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for (name, graphics) in self.layers() {
            sink.begin_layer(name);
            graphics.replay(sink);
            sink.end_layer();
        }
    }

    fn detach(&mut self, id: LayerId) {
        self.order.retain(|attached| *attached != id);
        self.layers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenPoint;
    use crate::render::Color;

    #[test]
    fn empty_name_creates_nothing() {
        let mut stage = Stage::new();
        assert!(stage.add_layer("").is_none());
        assert!(stage.is_empty());
    }

    #[test]
    fn layers_stack_in_creation_order() {
        let mut stage = Stage::new();
        for name in ["line", "function", "points"] {
            assert!(stage.add_layer(name).is_some());
        }
        let names: Vec<_> = stage.layer_names().collect();
        assert_eq!(names, ["line", "function", "points"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut stage = Stage::new();
        stage.add_layer("Points");
        assert!(stage.contains("Points"));
        assert!(!stage.contains("points"));
    }

    #[test]
    fn duplicate_name_replaces_and_detaches_old_layer() {
        let mut stage = Stage::new();
        stage
            .add_layer("a")
            .unwrap()
            .move_to(ScreenPoint::new(1.0, 1.0));
        stage.add_layer("b");
        let fresh = stage.add_layer("a").unwrap();
        assert!(fresh.is_empty());
        assert_eq!(stage.len(), 2);
        let names: Vec<_> = stage.layer_names().collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn clear_keeps_layer_attached() {
        let mut stage = Stage::new();
        stage
            .add_layer("points")
            .unwrap()
            .begin_fill(Color::BLACK)
            .draw_circle(ScreenPoint::new(0.0, 0.0), 3.0)
            .end_fill();
        assert!(stage.clear_layer("points"));
        assert!(stage.layer("points").unwrap().is_empty());
        assert_eq!(stage.len(), 1);
        assert!(!stage.clear_layer("missing"));
    }
}
