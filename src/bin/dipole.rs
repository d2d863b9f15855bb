use efield::charge::PointCharge;
use efield::measure_time;
use efield::simulator::FieldSimulator;
use efield::utils::{heatmap, surface};

fn main() {
    // префикс для сохранения
    let out_prefix = "out/dipole";

    // диполь: два заряда по 1 нКл разного знака
    let mut simulator = FieldSimulator::new([-4.0, 4.0], [-4.0, 4.0], 500);
    simulator.add_charge(PointCharge::new(1e-9, -1.0, 0.0));
    simulator.add_charge(PointCharge::new(-1e-9, 1.0, 0.0));

    measure_time!("Расчёт поля диполя", {
        simulator
            .save_results(out_prefix)
            .expect("Не удалось сохранить результаты");
    });

    let surfaces = simulator.compute();

    // интерактивная 3D-карта
    let plot = surface::field_surface_plot(&simulator.mesh, &surfaces);
    plot.write_html(format!("{out_prefix}/field.html"));

    // плоские карты обеих поверхностей
    heatmap::plot_surface_heatmap(
        &simulator.mesh,
        &surfaces.positive,
        colorous::REDS,
        (0.0, 50.0),
        format!("{out_prefix}/e_pos.png").as_str(),
    )
    .expect("Не удалось построить карту положительной поверхности");
    heatmap::plot_surface_heatmap(
        &simulator.mesh,
        &surfaces.negative,
        colorous::BLUES,
        (-50.0, 0.0),
        format!("{out_prefix}/e_neg.png").as_str(),
    )
    .expect("Не удалось построить карту отрицательной поверхности");
}
