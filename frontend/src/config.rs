/// Backend origin. Empty means same-origin, which is the normal deployment
/// (the backend serves the built frontend). Set BACKEND_URL at build time for
/// a split setup.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL").unwrap_or("").to_string()
}
