use crate::charge::PointCharge;
use crate::config::F;
use crate::mesh::Mesh2D;
use crate::print_and_log;
use crate::system::{ChargeSystem, FieldSurfaces};
use crate::utils::surface;
use ndarray_npy::WriteNpyError;

/// Симулятор электростатического поля на квадратной сетке.
/// Сетка строится один раз при создании; заряды добавляются по одному,
/// расчёт каждый раз выполняется заново по всем зарядам.
#[derive(Debug, Clone)]
pub struct FieldSimulator {
    pub x_lim: [F; 2],
    pub y_lim: [F; 2],
    pub resolution: usize,
    pub mesh: Mesh2D,
    pub system: ChargeSystem,
}

impl FieldSimulator {
    pub fn new(x_lim: [F; 2], y_lim: [F; 2], resolution: usize) -> Self {
        print_and_log!("Инициализация FieldSimulator...");
        let mesh = Mesh2D::new(x_lim, y_lim, resolution);
        let simulator = Self {
            x_lim,
            y_lim,
            resolution,
            mesh,
            system: ChargeSystem::new(),
        };
        print_and_log!("FieldSimulator инициализирован");
        simulator
    }

    pub fn add_charge(&mut self, charge: PointCharge) {
        self.system.add_charge(charge);
    }

    /// Считает обе поверхности поля с нуля по текущему набору зарядов
    pub fn compute(&self) -> FieldSurfaces {
        self.system.accumulate(&self.mesh)
    }

    /// Считает поверхности и открывает интерактивный 3D-график
    pub fn run(&self) {
        let surfaces = self.compute();
        let plot = surface::field_surface_plot(&self.mesh, &surfaces);
        plot.show();
    }

    /// Сохраняет оси сетки и обе поверхности в .npy
    pub fn save_results(&self, dir_path: &str) -> Result<(), WriteNpyError> {
        self.mesh.save_as_npy(dir_path)?;
        self.compute().save_as_npy(dir_path)?;
        Ok(())
    }
}
