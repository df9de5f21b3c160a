use crate::ui::primitives::icon::Icon;
use gqlgen::application::CheckReport;

pub fn render_check_report(report: &CheckReport, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {} operations and {} fragments are valid against the schema ({} types)\n",
        Icon::Check.colored(supports_color, supports_unicode),
        report.operations,
        report.fragments,
        report.schema_types
    )
}
