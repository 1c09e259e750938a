use serde::{Deserialize, Serialize};

use crate::{Color, EngineError, PixelAccess, PixelBuffer, Result, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerProperties {
    pub title: String,
    pub is_visible: bool,
    pub is_locked: bool,
}

impl Default for LayerProperties {
    fn default() -> Self {
        LayerProperties {
            title: String::new(),
            is_visible: true,
            is_locked: false,
        }
    }
}

/// One raster layer: properties plus an exclusively owned pixel buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub properties: LayerProperties,
    buffer: PixelBuffer,
}

impl Layer {
    pub fn new(title: impl Into<String>, size: impl Into<Size>) -> Self {
        Layer {
            properties: LayerProperties {
                title: title.into(),
                ..Default::default()
            },
            buffer: PixelBuffer::new(size),
        }
    }

    pub fn from_buffer(title: impl Into<String>, buffer: PixelBuffer) -> Self {
        Layer {
            properties: LayerProperties {
                title: title.into(),
                ..Default::default()
            },
            buffer,
        }
    }

    pub fn get_title(&self) -> &str {
        &self.properties.title
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Swap in a new pixel buffer, returning the old one
    pub fn replace_buffer(&mut self, buffer: PixelBuffer) -> PixelBuffer {
        std::mem::replace(&mut self.buffer, buffer)
    }
}

impl PixelAccess for Layer {
    fn width(&self) -> i32 {
        self.buffer.get_width()
    }

    fn height(&self) -> i32 {
        self.buffer.get_height()
    }

    fn pixel(&self, x: i32, y: i32) -> Color {
        self.buffer.get(x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.set(x, y, color);
    }
}

/// Ordered layer stack with a current-layer cursor.
///
/// Commands resolve the current layer's buffer through this model at
/// execution time, never caching a reference across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerModel {
    layers: Vec<Layer>,
    current_layer: Option<usize>,
}

impl LayerModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with a single current layer of the given size
    pub fn with_base_layer(size: impl Into<Size>) -> Self {
        let mut model = Self::new();
        model.add_layer_at(0, Layer::new("Background", size));
        model.current_layer = Some(0);
        model
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn get_layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Insert a layer; the current-layer cursor is left untouched unless
    /// this is the first layer, which becomes current.
    pub fn add_layer_at(&mut self, index: usize, layer: Layer) {
        let index = index.min(self.layers.len());
        self.layers.insert(index, layer);
        if self.current_layer.is_none() {
            self.current_layer = Some(index);
        }
    }

    /// Remove a layer.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::LayerOutOfRange` for an invalid index.
    pub fn remove_layer(&mut self, index: usize) -> Result<Layer> {
        if index >= self.layers.len() {
            return Err(EngineError::LayerOutOfRange {
                layer: index,
                max: self.layers.len(),
            });
        }
        let layer = self.layers.remove(index);
        if self.layers.is_empty() {
            self.current_layer = None;
        } else if let Some(mut current) = self.current_layer {
            if current > index {
                current -= 1;
            }
            self.current_layer = Some(current.min(self.layers.len() - 1));
        }
        Ok(layer)
    }

    /// # Errors
    ///
    /// Returns `EngineError::LayerOutOfRange` for an invalid index.
    pub fn set_current_layer(&mut self, index: usize) -> Result<()> {
        if index >= self.layers.len() {
            return Err(EngineError::LayerOutOfRange {
                layer: index,
                max: self.layers.len(),
            });
        }
        self.current_layer = Some(index);
        Ok(())
    }

    pub fn current_layer_index(&self) -> Option<usize> {
        self.current_layer
    }

    pub fn current_layer(&self) -> Option<&Layer> {
        self.current_layer.and_then(|index| self.layers.get(index))
    }

    pub fn current_layer_mut(&mut self) -> Option<&mut Layer> {
        match self.current_layer {
            Some(index) => self.layers.get_mut(index),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_layer_becomes_current() {
        let mut model = LayerModel::new();
        assert!(model.current_layer().is_none());
        model.add_layer_at(0, Layer::new("Background", (4, 4)));
        assert_eq!(model.current_layer_index(), Some(0));
        assert_eq!(model.current_layer().unwrap().get_title(), "Background");
    }

    #[test]
    fn test_set_current_layer_out_of_range() {
        let mut model = LayerModel::with_base_layer((4, 4));
        assert!(matches!(model.set_current_layer(1), Err(EngineError::LayerOutOfRange { layer: 1, max: 1 })));
    }

    #[test]
    fn test_remove_layer_adjusts_current() {
        let mut model = LayerModel::with_base_layer((4, 4));
        model.add_layer_at(1, Layer::new("Top", (4, 4)));
        model.set_current_layer(1).unwrap();
        model.remove_layer(0).unwrap();
        assert_eq!(model.current_layer_index(), Some(0));
        assert_eq!(model.current_layer().unwrap().get_title(), "Top");
    }

    #[test]
    fn test_remove_last_layer_clears_current() {
        let mut model = LayerModel::with_base_layer((4, 4));
        model.remove_layer(0).unwrap();
        assert!(model.current_layer().is_none());
    }
}
