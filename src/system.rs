use crate::charge::PointCharge;
use crate::config::F;
use crate::macros::check_path;
use crate::mesh::Mesh2D;
use ndarray::prelude::*;
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use std::fs::File;
use std::io::BufWriter;

/// Накопленные поверхности поля: суммарный вклад положительных зарядов
/// и суммарный вклад остальных. Поверхности не комбинируются между собой.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSurfaces {
    pub positive: Array2<F>,
    pub negative: Array2<F>,
}

impl FieldSurfaces {
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self {
            positive: Array::zeros(shape),
            negative: Array::zeros(shape),
        }
    }

    /// Сохраняет поверхности в dir_path/e_pos.npy и dir_path/e_neg.npy
    pub fn save_as_npy(&self, dir_path: &str) -> Result<(), WriteNpyError> {
        for (surface, name) in [(&self.positive, "e_pos"), (&self.negative, "e_neg")] {
            let path = format!("{dir_path}/{name}.npy");
            check_path!(path.as_str());
            let writer = BufWriter::new(File::create(path)?);
            surface.write_npy(writer)?;
        }
        Ok(())
    }
}

/// Система зарядов: хранит заряды в порядке добавления
#[derive(Debug, Clone, Default)]
pub struct ChargeSystem {
    pub charges: Vec<PointCharge>,
}

impl ChargeSystem {
    pub fn new() -> Self {
        Self {
            charges: Vec::new(),
        }
    }

    pub fn add_charge(&mut self, charge: PointCharge) {
        self.charges.push(charge);
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Складывает вклады всех зарядов в две поверхности: заряды с q > 0
    /// попадают в positive, остальные (включая q = 0) в negative.
    pub fn accumulate(&self, mesh: &Mesh2D) -> FieldSurfaces {
        let mut surfaces = FieldSurfaces::zeros(mesh.shape());
        for charge in &self.charges {
            let e = charge.field_magnitude(mesh);
            if charge.value > 0.0 {
                surfaces.positive += &e;
            } else {
                surfaces.negative += &e;
            }
        }
        surfaces
    }
}
