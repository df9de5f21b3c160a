use crate::ui::blocks::warning::WarningBlock;
use gqlgen::config::ConfigWarning;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut block = WarningBlock::new(format!("Unknown config key '{}' in {}", warning.key, location));
    match &warning.suggestion {
        Some(suggestion) => block.add_line(format!("Did you mean '{}'?", suggestion)),
        None => block.add_line("This key is ignored."),
    }
    block.render(supports_color, supports_unicode)
}
