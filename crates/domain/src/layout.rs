use crate::{DomainError, ImageFile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: usize,
    cell_size: f32,
    capacity: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
    pub row: usize,
    pub column: usize,
    pub item: &'a ImageFile,
}

impl GridLayout {
    pub fn new(
        columns: usize,
        cell_size: f32,
        capacity: Option<usize>,
    ) -> Result<Self, DomainError> {
        if columns == 0 {
            return Err(DomainError::InvalidGridColumns(columns));
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(DomainError::InvalidCellSize(cell_size));
        }
        if capacity == Some(0) {
            return Err(DomainError::InvalidGridCapacity(0));
        }
        Ok(Self {
            columns,
            cell_size,
            capacity,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Places items row by row, left to right, stopping at the capacity.
    pub fn cells<'a>(&self, items: &'a [ImageFile]) -> Vec<GridCell<'a>> {
        let visible = self.capacity.unwrap_or(items.len()).min(items.len());
        items[..visible]
            .iter()
            .enumerate()
            .map(|(index, item)| GridCell {
                row: index / self.columns,
                column: index % self.columns,
                item,
            })
            .collect()
    }
}
