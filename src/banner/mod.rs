use crate::platform::PlatformInfo;

pub const SEPARATOR: &str = "========================================";
pub const TITLE: &str = "  Hello from inside a Docker container!";

const LABEL_WIDTH: usize = 14;

/// The three metadata lines, in fixed order: version, OS, architecture.
pub fn metadata_lines(info: &PlatformInfo) -> Vec<String> {
    vec![
        labeled("Rust version", &info.runtime_version),
        labeled("OS", &info.os_line()),
        labeled("Architecture", &info.arch),
    ]
}

/// Full banner block, one entry per output line.
pub fn render(info: &PlatformInfo) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);
    lines.push(SEPARATOR.to_string());
    lines.push(TITLE.to_string());
    lines.push(SEPARATOR.to_string());
    lines.extend(metadata_lines(info));
    lines.push(SEPARATOR.to_string());
    lines
}

fn labeled(label: &str, value: &str) -> String {
    format!("  {:<width$} : {}", label, value, width = LABEL_WIDTH)
}
