//! Parametros de configuracion de la licuadora

use log::LevelFilter;

/// Cuanto tiempo (en segundos) tarda la licuadora en procesar los ingredientes
pub const BLEND_WAIT_IN_SECS: u64 = 30;

/// Ingredientes pedidos para el licuado, en el orden en que se agregan.
/// Puede contener nombres desconocidos, que se reportan y se saltean.
pub const REQUESTED_INGREDIENTS: [&str; 6] =
    ["strawberry", "cherry", "mango", "raspberry", "strawberry", "kiwi"];

/// Nivel de log por defecto, se puede sobreescribir con `RUST_LOG`
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
