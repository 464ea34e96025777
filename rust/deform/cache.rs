//! Rest-position cache
//!
//! Typed snapshot of a mesh's vertex positions, taken once before the first
//! deformation and used to reset it. Stored in the host as JSON:
//! `{"positions":[[x,y,z],...]}`.

use serde::{Deserialize, Serialize};

use crate::ocean::{OceanError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalPositions {
    positions: Vec<[f64; 3]>,
}

impl OriginalPositions {
    pub fn snapshot(positions: &[[f64; 3]]) -> Self {
        Self {
            positions: positions.to_vec(),
        }
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Copy the rest positions back over `out`, which must match in length.
    pub fn restore_into(&self, out: &mut [[f64; 3]]) -> Result<()> {
        if out.len() != self.positions.len() {
            return Err(OceanError::VertexCountMismatch {
                expected: self.positions.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.positions);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
