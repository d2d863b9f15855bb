use crate::config::F;
use crate::mesh::Mesh2D;
use crate::system::FieldSurfaces;
use ndarray::prelude::*;
use plotly::common::{ColorScale, ColorScalePalette, Title};
use plotly::layout::{Axis, Layout, LayoutScene};
use plotly::{Plot, Surface};

fn to_rows(z: &Array2<F>) -> Vec<Vec<F>> {
    z.outer_iter().map(|row| row.to_vec()).collect()
}

/// Интерактивный 3D-график двух поверхностей поля: красная палитра для
/// вклада положительных зарядов, синяя для отрицательных.
pub fn field_surface_plot(mesh: &Mesh2D, surfaces: &FieldSurfaces) -> Plot {
    let x = mesh.axes[0].to_vec();
    let y = mesh.axes[1].to_vec();

    let positive = Surface::new(to_rows(&surfaces.positive))
        .x(x.clone())
        .y(y.clone())
        .name("E > 0")
        .color_scale(ColorScale::Palette(ColorScalePalette::Reds))
        .opacity(0.8)
        .show_scale(false);
    let negative = Surface::new(to_rows(&surfaces.negative))
        .x(x)
        .y(y)
        .name("E <= 0")
        .color_scale(ColorScale::Palette(ColorScalePalette::Blues))
        .opacity(0.8)
        .show_scale(false);

    let layout = Layout::new()
        .width(800)
        .height(800)
        .title(Title::from("3D Map of the Electric Field"))
        .scene(
            LayoutScene::new()
                .x_axis(Axis::new().title(Title::from("X (m)")))
                .y_axis(Axis::new().title(Title::from("Y (m)")))
                .z_axis(Axis::new().title(Title::from("Electric Field (N/C)"))),
        );

    let mut plot = Plot::new();
    plot.add_trace(positive);
    plot.add_trace(negative);
    plot.set_layout(layout);
    plot
}
