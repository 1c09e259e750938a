//! Undo operations for raster editing.

use raster_engine::{Color, PixelBuffer, Position, Result};

use crate::{EditState, FillCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    Unknown,
    EditPixels,
}

pub trait UndoOperation: Send + Sync {
    fn get_description(&self) -> String;

    /// # Errors
    ///
    /// Returns an error if the operation cannot be rolled back against
    /// the current state.
    fn undo(&mut self, edit_state: &mut EditState) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the operation cannot be reapplied against the
    /// current state.
    fn redo(&mut self, edit_state: &mut EditState) -> Result<()>;

    fn get_operation_type(&self) -> OperationType {
        OperationType::Unknown
    }

    fn changes_data(&self) -> bool {
        true
    }
}

/// Undoable flood fill.
///
/// Undo restores the pre-fill buffer snapshot; redo replays the stored
/// fill command, re-resolving the layer's current buffer. Only the small
/// parameter record and the snapshot are retained, never traversal
/// state.
pub struct FloodFillOperation {
    layer: usize,
    old_data: PixelBuffer,
    clicked: Position,
    target_color: Color,
    tolerance: f32,
}

impl FloodFillOperation {
    pub fn new(layer: usize, old_data: PixelBuffer, clicked: Position, target_color: Color, tolerance: f32) -> Self {
        FloodFillOperation {
            layer,
            old_data,
            clicked,
            target_color,
            tolerance,
        }
    }
}

impl UndoOperation for FloodFillOperation {
    fn get_description(&self) -> String {
        "Flood fill".to_string()
    }

    fn undo(&mut self, edit_state: &mut EditState) -> Result<()> {
        edit_state.restore_layer_buffer(self.layer, self.old_data.clone())
    }

    fn redo(&mut self, edit_state: &mut EditState) -> Result<()> {
        edit_state.layer_model_mut().set_current_layer(self.layer)?;
        let command = FillCommand::new(self.clicked, self.target_color, self.tolerance);
        command.run(edit_state.layer_model_mut())?;
        Ok(())
    }

    fn get_operation_type(&self) -> OperationType {
        OperationType::EditPixels
    }
}
