//! Module grids and the encoder that produces them

use qrcode::{Color, EcLevel, QrCode};

use crate::error::QrError;

/// Immutable square grid of QR modules, addressed by `row * size + col`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Wrap a flattened module array; `true` means dark.
    pub fn new(size: usize, modules: Vec<bool>) -> Result<Self, QrError> {
        if size == 0 {
            return Err(QrError::matrix("grid side length must be positive"));
        }
        if modules.len() != size * size {
            return Err(QrError::matrix(format!(
                "expected {} modules for a {}x{} grid, got {}",
                size * size,
                size,
                size,
                modules.len()
            )));
        }
        Ok(Self { size, modules })
    }

    /// Build a grid by evaluating `dark(row, col)` for every cell
    pub fn from_fn(size: usize, mut dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                modules.push(dark(row, col));
            }
        }
        Self { size, modules }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Dark/light value of a cell. Out-of-range coordinates are light.
    pub fn is_dark(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        if row < 0 || row >= n || col < 0 || col >= n {
            return false;
        }
        self.modules[(row * n + col) as usize]
    }
}

/// Turns a payload into a finished module grid
pub trait MatrixProvider {
    fn module_grid(&self, payload: &str) -> Result<ModuleGrid, QrError>;
}

/// Encoder backed by the `qrcode` crate.
///
/// Always uses the highest error-correction level so the center cutout
/// stays within the symbol's redundancy.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeProvider;

impl MatrixProvider for QrcodeProvider {
    fn module_grid(&self, payload: &str) -> Result<ModuleGrid, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(QrError::matrix)?;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        ModuleGrid::new(code.width(), modules)
    }
}
