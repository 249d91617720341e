#[inline]
pub fn log_warn(scope: &str, message: &str) {
    eprintln!("[{scope}] {message}");
}
