use crate::config::F;
use crate::macros::check_path;
use crate::mesh::Mesh2D;
use colorous::Gradient;
use itertools::iproduct;
use ndarray::prelude::*;
use plotters::prelude::*;
use std::error::Error;

/// Плоская карта одной поверхности поля (вид сверху). Значения за пределами
/// limits обрезаются до границ градиента.
pub fn plot_surface_heatmap(
    mesh: &Mesh2D,
    surface: &Array2<F>,
    gradient: Gradient,
    limits: (F, F),
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    assert_eq!(
        surface.dim(),
        mesh.shape(),
        "Размер поверхности не совпадает с сеткой"
    );

    let (v_min, v_max) = limits;
    let x = &mesh.axes[0];
    let y = &mesh.axes[1];

    check_path!(output_path);
    let root = BitMapBackend::new(output_path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x[0]..x[x.len() - 1], y[0]..y[y.len() - 1])?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("X (m)")
        .y_desc("Y (m)")
        .draw()?;

    let plotting_area = chart.plotting_area();
    let [half_dx, half_dy] = [mesh.step[0] / 2.0, mesh.step[1] / 2.0];
    for (i, j) in iproduct!(0..mesh.n, 0..mesh.n) {
        let value = surface[[i, j]].max(v_min).min(v_max);
        let t = (value - v_min) / (v_max - v_min);
        let (r, g, b) = gradient.eval_continuous(t).as_tuple();
        let rectangle = Rectangle::new(
            [
                (mesh.x[[i, j]] - half_dx, mesh.y[[i, j]] - half_dy),
                (mesh.x[[i, j]] + half_dx, mesh.y[[i, j]] + half_dy),
            ],
            RGBColor(r, g, b).filled(),
        );
        plotting_area.draw(&rectangle)?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::PointCharge;

    #[test]
    fn test_heatmap() {
        let mesh = Mesh2D::new([-4.0, 4.0], [-4.0, 4.0], 30);
        let e = PointCharge::new(1e-9, 0.0, 0.0).field_magnitude(&mesh);

        plot_surface_heatmap(
            &mesh,
            &e,
            colorous::REDS,
            (0.0, 50.0),
            "tests_out/heatmap.png",
        )
        .expect("не удалось построить карту поля");
    }
}
