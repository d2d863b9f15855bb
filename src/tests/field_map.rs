use crate::charge::PointCharge;
use crate::mesh::Mesh2D;
use crate::simulator::FieldSimulator;
use crate::system::ChargeSystem;

/// Углы сетки совпадают с границами области
#[test]
fn mesh_corners_match_limits() {
    let mesh = Mesh2D::new([-4.0, 4.0], [-2.0, 2.0], 5);
    let last = mesh.n - 1;
    assert_eq!(mesh.x[[0, 0]], -4.0);
    assert_eq!(mesh.x[[last, last]], 4.0);
    assert_eq!(mesh.y[[0, 0]], -2.0);
    assert_eq!(mesh.y[[last, last]], 2.0);
}

/// Заряд 1 нКл на расстоянии 1 м даёт поле около 8.99 Н/Кл
#[test]
fn unit_distance_reference_value() {
    let mesh = Mesh2D::new([-1.0, 1.0], [-1.0, 1.0], 3);
    let e = PointCharge::new(1e-9, 0.0, 0.0).field_magnitude(&mesh);
    // узел (1, 2) лежит в точке (1, 0)
    assert_eq!(mesh.point(1, 2), [1.0, 0.0]);
    assert!(
        (e[[1, 2]] - 8.99).abs() < 1e-9,
        "Ожидалось 8.99 Н/Кл, получено {}",
        e[[1, 2]]
    );
}

/// В узле, совпадающем с положением заряда, поле конечно
#[test]
fn field_is_finite_at_charge_node() {
    let mesh = Mesh2D::new([-4.0, 4.0], [-4.0, 4.0], 5);
    // узел (2, 2) лежит в точке (0, 0)
    let e = PointCharge::new(1e-9, 0.0, 0.0).field_magnitude(&mesh);
    assert!(e.iter().all(|v| v.is_finite()));
    assert!(e[[2, 2]] > 1e19, "Отсечка должна давать большое значение");
}

/// Вклады разных знаков не смешиваются между поверхностями
#[test]
fn accumulation_routes_by_sign() {
    let mesh = Mesh2D::new([-4.0, 4.0], [-4.0, 4.0], 21);
    let q1 = PointCharge::new(1e-9, -2.0, 0.0);
    let q2 = PointCharge::new(-1e-9, 2.0, 0.0);

    let mut system = ChargeSystem::new();
    system.add_charge(q1);
    system.add_charge(q2);
    let surfaces = system.accumulate(&mesh);

    assert_eq!(surfaces.positive, q1.field_magnitude(&mesh));
    assert_eq!(surfaces.negative, q2.field_magnitude(&mesh));
}

/// Нулевой заряд попадает в отрицательную поверхность и даёт нулевой вклад
#[test]
fn zero_charge_goes_to_negative_surface() {
    let mesh = Mesh2D::new([-1.0, 1.0], [-1.0, 1.0], 5);
    let mut system = ChargeSystem::new();
    system.add_charge(PointCharge::new(0.0, 0.3, -0.7));
    system.add_charge(PointCharge::new(1e-9, -0.5, 0.5));
    let surfaces = system.accumulate(&mesh);

    // положительная поверхность содержит только вклад ненулевого заряда
    assert_eq!(
        surfaces.positive,
        PointCharge::new(1e-9, -0.5, 0.5).field_magnitude(&mesh)
    );
    assert!(surfaces.negative.iter().all(|&v| v == 0.0));
}

/// Повторный расчёт с теми же зарядами даёт те же поверхности
#[test]
fn recompute_is_idempotent() {
    let mut simulator = FieldSimulator::new([-4.0, 4.0], [-4.0, 4.0], 33);
    simulator.add_charge(PointCharge::new(2e-9, -1.5, 1.0));
    simulator.add_charge(PointCharge::new(-3e-9, 1.5, -1.0));
    simulator.add_charge(PointCharge::new(1e-9, 0.0, 0.0));

    assert_eq!(simulator.compute(), simulator.compute());
}

/// Порядок добавления зарядов не влияет на результат
#[test]
fn accumulation_order_is_irrelevant() {
    let mesh = Mesh2D::new([-2.0, 2.0], [-2.0, 2.0], 9);
    let charges = [
        PointCharge::new(1e-9, -1.0, 0.0),
        PointCharge::new(2e-9, 1.0, 1.0),
        PointCharge::new(-1e-9, 0.0, -1.0),
    ];

    let mut forward = ChargeSystem::new();
    let mut reverse = ChargeSystem::new();
    for charge in charges {
        forward.add_charge(charge);
    }
    for charge in charges.iter().rev() {
        reverse.add_charge(*charge);
    }

    let a = forward.accumulate(&mesh);
    let b = reverse.accumulate(&mesh);
    let tol = 1e-6;
    for (u, v) in a.positive.iter().zip(b.positive.iter()) {
        assert!((u - v).abs() < tol, "Поверхности должны совпадать");
    }
    for (u, v) in a.negative.iter().zip(b.negative.iter()) {
        assert!((u - v).abs() < tol, "Поверхности должны совпадать");
    }
}
