use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use gqlgen::application::GenerateReport;

pub fn render_generate_header(
    project: &str,
    target: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Generate, "gqlgen generate");
    header.add("Project", project);
    header.add("Target", target);
    header.add("Output", output);
    header.render(supports_color, supports_unicode)
}

pub fn render_generate_summary(
    report: &GenerateReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Generated {} {} from {} {} and {} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.files_written,
        plural(report.files_written, "file", "files"),
        report.operations,
        plural(report.operations, "operation", "operations"),
        report.fragments,
        plural(report.fragments, "fragment", "fragments"),
    )
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts() {
        let report = GenerateReport {
            files_written: 1,
            operations: 2,
            fragments: 1,
        };
        insta::assert_snapshot!(
            render_generate_summary(&report, false, false).trim_end(),
            @"[OK] Generated 1 file from 2 operations and 1 fragment"
        );
    }

    #[test]
    fn header_lists_target_and_output() {
        let rendered = render_generate_header("/p", "typescript", "__generated__", false, true);
        assert!(rendered.starts_with("⚙ gqlgen generate\n"));
        assert!(rendered.contains("Target: typescript\n"));
        assert!(rendered.contains("Output: __generated__\n"));
    }
}
