use efield::charge::PointCharge;
use efield::measure_time;
use efield::simulator::FieldSimulator;
use std::io;

/// Печатает приглашение и читает число со стандартного ввода
fn read_value<T>(prompt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Debug,
{
    println!("{prompt}");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Не удалось прочитать строку");
    line.trim().parse().expect("Ожидалось число")
}

fn main() {
    let n: usize = read_value("Введите количество зарядов:");

    // область моделирования и разрешение сетки
    let mut simulator = FieldSimulator::new([-4.0, 4.0], [-4.0, 4.0], 500);

    for i in 1..=n {
        let q = read_value(&format!("Введите величину заряда {i} (в кулонах):"));
        let x = read_value(&format!("Введите координату x заряда {i} (в метрах):"));
        let y = read_value(&format!("Введите координату y заряда {i} (в метрах):"));
        simulator.add_charge(PointCharge::new(q, x, y));
    }

    measure_time!("Расчёт поля", {
        simulator.run();
    });
}
