use super::types::Mark;

/// Square board stored row-major: `index = row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_cells(size: usize, cells: Vec<Mark>) -> Self {
        assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }
}
