use gqlgen::GenError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);

    match err.downcast_ref::<GenError>() {
        Some(GenError::Validation(validation)) => {
            let count = validation.diagnostics.len();
            let mut out = format!(
                "{} {}\n",
                icon,
                ColoredText::error(format!(
                    "{} {} in GraphQL documents",
                    count,
                    if count == 1 { "problem" } else { "problems" }
                ))
                .bold()
                .render(supports_color)
            );
            for diagnostic in &validation.diagnostics {
                out.push_str(&format!("  {}\n", diagnostic));
            }
            out
        }
        _ => format!("{} {}\n", icon, err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(GenError::Validation(validation)) = err.downcast_ref::<GenError>() {
            output["diagnostics"] = validation
                .diagnostics
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "file": d.file.display().to_string(),
                        "line": d.line,
                        "message": d.message,
                    })
                })
                .collect();
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
