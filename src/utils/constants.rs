/// URL base del backend de reservas
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5003 (por defecto)
/// - Producción: via BACKEND_URL env var (.env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5003",
};
