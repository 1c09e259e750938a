//! Edit state: the layer model plus undo/redo bookkeeping.
//!
//! All modifications go through the undo system: an operation is pushed,
//! executed once, and can then be undone/redone from the stacks. The
//! dirty flag tracks unsaved changes.

use raster_engine::{Color, EngineError, LayerModel, PixelBuffer, Position, Result, Size};

use crate::{FillCommand, FillOutcome, FloodFillOperation, UndoOperation};

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// # Errors
    ///
    /// Returns an error if the topmost operation fails to roll back.
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// # Errors
    ///
    /// Returns an error if the topmost operation fails to reapply.
    fn redo(&mut self) -> Result<()>;
}

pub struct EditState {
    layer_model: LayerModel,
    undo_stack: Vec<Box<dyn UndoOperation>>,
    redo_stack: Vec<Box<dyn UndoOperation>>,
    is_dirty: bool,
}

impl EditState {
    pub fn new(layer_model: LayerModel) -> Self {
        EditState {
            layer_model,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            is_dirty: false,
        }
    }

    /// State with a single current layer of the given size
    pub fn with_base_layer(size: impl Into<Size>) -> Self {
        Self::new(LayerModel::with_base_layer(size))
    }

    pub fn layer_model(&self) -> &LayerModel {
        &self.layer_model
    }

    pub fn layer_model_mut(&mut self) -> &mut LayerModel {
        &mut self.layer_model
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Tolerant flood fill on the current layer, as one undoable unit.
    ///
    /// A no-op fill (seed already at the target color) pushes nothing
    /// onto the undo stack.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoCurrentLayer` if the model has no current
    /// layer.
    pub fn flood_fill(&mut self, clicked: Position, target_color: Color, tolerance: f32) -> Result<FillOutcome> {
        let layer_index = self.layer_model.current_layer_index().ok_or(EngineError::NoCurrentLayer)?;
        let old_data = self
            .layer_model
            .current_layer()
            .ok_or(EngineError::NoCurrentLayer)?
            .buffer()
            .clone();

        let command = FillCommand::new(clicked, target_color, tolerance);
        let outcome = command.run(&mut self.layer_model)?;
        if let FillOutcome::Filled { .. } = outcome {
            let op = FloodFillOperation::new(layer_index, old_data, clicked, target_color, tolerance);
            self.push_plain_undo(Box::new(op));
        }
        Ok(outcome)
    }

    /// Push an already executed operation onto the undo stack
    pub(crate) fn push_plain_undo(&mut self, op: Box<dyn UndoOperation>) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.redo_stack.clear();
        self.undo_stack.push(op);
    }

    /// Swap a layer's buffer back to a snapshot (undo path)
    pub(crate) fn restore_layer_buffer(&mut self, layer: usize, buffer: PixelBuffer) -> Result<()> {
        let max = self.layer_model.layer_count();
        let target = self.layer_model.get_layer_mut(layer).ok_or(EngineError::LayerOutOfRange { layer, max })?;
        target.replace_buffer(buffer);
        Ok(())
    }
}

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|op| op.get_description())
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(mut op) = self.undo_stack.pop() else {
            return Ok(());
        };
        let result = op.undo(self);
        self.redo_stack.push(op);
        result
    }

    fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.get_description())
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(mut op) = self.redo_stack.pop() else {
            return Ok(());
        };
        let result = op.redo(self);
        self.undo_stack.push(op);
        result
    }
}
