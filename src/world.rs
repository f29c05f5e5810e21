#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    active: bool,
}

impl Cell {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl From<bool> for Cell {
    fn from(active: bool) -> Self {
        Self { active }
    }
}

pub use grid::Grid;
mod grid;
