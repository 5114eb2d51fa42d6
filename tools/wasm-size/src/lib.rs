#[unsafe(no_mangle)]
pub extern "C" fn format_double_len(f: f64) -> usize {
    schubfach::format_double(f).len()
}

#[unsafe(no_mangle)]
pub extern "C" fn format_float_len(f: f32) -> usize {
    schubfach::format_float(f).len()
}
