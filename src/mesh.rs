use crate::config::F;
use crate::macros::check_path;
use ndarray::prelude::*;
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use std::fs::File;
use std::io::BufWriter;

/// Возвращает координатные матрицы X и Y по одномерным осям.
/// X[i][j] = x[j], Y[i][j] = y[i].
pub fn meshgrid(x: &Array1<F>, y: &Array1<F>) -> (Array2<F>, Array2<F>) {
    let shape = (y.len(), x.len());
    let x_grid = x.broadcast(shape).unwrap().to_owned();
    let y_grid = y
        .view()
        .insert_axis(Axis(1))
        .broadcast(shape)
        .unwrap()
        .to_owned();
    (x_grid, y_grid)
}

/// Квадратная координатная сетка над прямоугольной областью.
/// Границы должны быть упорядочены: x_lim[0] < x_lim[1], y_lim[0] < y_lim[1].
#[derive(Debug, Clone)]
pub struct Mesh2D {
    pub x_lim: [F; 2],
    pub y_lim: [F; 2],
    pub n: usize,
    pub step: [F; 2],
    pub axes: [Array1<F>; 2],
    pub x: Array2<F>,
    pub y: Array2<F>,
}

impl Mesh2D {
    pub const DIM: usize = 2;

    pub fn new(x_lim: [F; 2], y_lim: [F; 2], n: usize) -> Self {
        assert!(n >= 2, "Сетка должна содержать не менее двух узлов на ось");
        let step = [
            (x_lim[1] - x_lim[0]) / (n - 1) as F,
            (y_lim[1] - y_lim[0]) / (n - 1) as F,
        ];
        let x_axis = Array::linspace(x_lim[0], x_lim[1], n);
        let y_axis = Array::linspace(y_lim[0], y_lim[1], n);
        let (x, y) = meshgrid(&x_axis, &y_axis);
        Self {
            x_lim,
            y_lim,
            n,
            step,
            axes: [x_axis, y_axis],
            x,
            y,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Координаты узла (i, j): i нумерует строки (ось y), j - столбцы (ось x)
    pub fn point(&self, i: usize, j: usize) -> [F; 2] {
        [self.axes[0][j], self.axes[1][i]]
    }

    /// Сохраняет оси сетки в dir_path/x.npy и dir_path/y.npy
    pub fn save_as_npy(&self, dir_path: &str) -> Result<(), WriteNpyError> {
        for (axis, name) in self.axes.iter().zip(["x", "y"]) {
            let path = format!("{dir_path}/{name}.npy");
            check_path!(path.as_str());
            let writer = BufWriter::new(File::create(path)?);
            axis.write_npy(writer)?;
        }
        Ok(())
    }
}
