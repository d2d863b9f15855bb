use crate::config::F;
use crate::mesh::Mesh2D;
use ndarray::prelude::*;
use ndarray::Zip;

/// Точечный заряд: величина в кулонах и координаты на плоскости в метрах
#[derive(Debug, Clone, Copy)]
pub struct PointCharge {
    pub value: F,
    pub x: F,
    pub y: F,
}

impl PointCharge {
    pub fn new(value: F, x: F, y: F) -> Self {
        Self { value, x, y }
    }

    /// Модуль напряжённости поля заряда E = K q / r² в каждом узле сетки.
    /// Знак результата совпадает со знаком заряда. В узле, совпадающем
    /// с положением заряда, r заменяется отсечкой R_MIN, чтобы значение
    /// оставалось конечным.
    pub fn field_magnitude(&self, mesh: &Mesh2D) -> Array2<F> {
        const K: F = 8.99e9; // Н·м²/Кл²
        const R_MIN: F = 1e-10;

        let mut e: Array2<F> = Array::zeros(mesh.shape());
        Zip::from(&mut e)
            .and(&mesh.x)
            .and(&mesh.y)
            .for_each(|e_ij, &x_ij, &y_ij| {
                let mut r = ((x_ij - self.x).powi(2) + (y_ij - self.y).powi(2)).sqrt();
                if r == 0.0 {
                    r = R_MIN;
                }
                *e_ij = K * self.value / r.powi(2);
            });
        e
    }
}
