#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", e);
    }
}

pub fn log_resize(original: (u32, u32), target: (u32, u32)) {
    fn format_size(size: (u32, u32)) -> String {
        format!("{}x{}", size.0, size.1)
    }
    if original == target {
        log::info!("Image already {}, no resampling needed", format_size(target));
        return;
    }
    log::info!(
        "Resampling image from {} to {}",
        format_size(original),
        format_size(target)
    );
}
