// тип данных: f64 или f32
pub type F = f64;

// константы
/// Постоянная Кулона, Н·м²/Кл²
pub const K_COULOMB: F = 8.9875517873681764e9;
