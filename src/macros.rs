/// Макрос для вывода в терминал и в лог-файл
#[macro_export]
macro_rules! print_and_log {
    ($($arg:tt)*) => {{
        println!($($arg)*);

        use std::io::Write;
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("efield.log")
        {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, $($arg)*) {
                    eprintln!("Не удалось записать в лог-файл: {e}");
                }
            }
            Err(e) => eprintln!("Не удалось открыть лог-файл: {e}"),
        }
    }};
}

/// Макрос для замера времени выполнения блока
#[macro_export]
macro_rules! measure_time {
    ($label:expr, $code:block) => {
        let start = std::time::Instant::now();
        $code
        $crate::print_and_log!("{}: {:.3} с", $label, start.elapsed().as_secs_f64());
    };
}

/// Макрос для создания родительской директории пути перед записью
macro_rules! check_path {
    ($path:expr) => {
        if let Some(parent) = std::path::Path::new($path).parent() {
            std::fs::create_dir_all(parent).expect("Не удалось создать директорию");
        }
    };
}
pub(crate) use check_path;
