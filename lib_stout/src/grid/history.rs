use super::Grid;

/// Linear undo history of full-grid snapshots.
///
/// `index` points at the snapshot currently shown; it is `None` only while the
/// history is empty.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Grid>,
    index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Appends a snapshot, discarding the redo branch beyond the cursor first.
    pub fn push(&mut self, snapshot: Grid) {
        let next = self.index.map_or(0, |index| index + 1);
        self.snapshots.truncate(next);
        self.snapshots.push(snapshot);
        self.index = Some(next);
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.index, Some(index) if index > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 < self.snapshots.len())
    }

    /// Steps back and returns the snapshot to restore, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Grid> {
        if !self.can_undo() {
            return None;
        }
        let index = self.index? - 1;
        self.index = Some(index);
        self.snapshots.get(index)
    }

    /// Steps forward and returns the snapshot to restore, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Grid> {
        if !self.can_redo() {
            return None;
        }
        let index = self.index? + 1;
        self.index = Some(index);
        self.snapshots.get(index)
    }

    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.index = None;
    }
}
