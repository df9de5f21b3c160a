use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use gqlgen::application::watch::WatchEvent;
use gqlgen::domain::ports::TriggerKind;

pub fn render_watch_header(
    project: &str,
    target: &str,
    output: &str,
    interactive: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "gqlgen watch");
    header.add("Project", project);
    header.add("Target", target);
    header.add("Output", output);
    header.add(
        "Hint",
        if interactive {
            "Press any key to stop"
        } else {
            "Press Ctrl+C to stop"
        },
    );
    header.render(supports_color, supports_unicode)
}

/// One event as a human line. Suppressed triggers only show with `-v`.
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    let line = match event {
        WatchEvent::WatchStarted { watching, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            watching.join(", ")
        ),
        WatchEvent::FileChanged { path, kind } => format!(
            "{} {} {}: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            kind_label(*kind),
            path
        ),
        WatchEvent::TriggerSuppressed { path, marker } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "{} {} Ignored: {} (matches '{}')\n",
                prefix,
                Icon::Skipped.colored(supports_color, supports_unicode),
                path,
                marker
            )
        }
        WatchEvent::GenerationStarted => format!(
            "{} {} Generating...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::GenerationComplete { files_written } => format!(
            "{} {} Generated: {} {}\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            files_written,
            if *files_written == 1 { "file" } else { "files" }
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown { reason } => format!(
            "\n{} {} Watch stopped ({}).\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            reason
        ),
    };
    Some(line)
}

fn kind_label(kind: TriggerKind) -> &'static str {
    match kind {
        TriggerKind::Created => "Created",
        TriggerKind::Modified => "Changed",
        TriggerKind::Removed => "Removed",
        TriggerKind::Other => "Touched",
    }
}

/// Raw mode turns off output post-processing, so bare `\n` no longer
/// returns the cursor.
pub fn raw_mode_lines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_started_event_with_watch_icon() {
        let event = WatchEvent::WatchStarted {
            root: "/project".to_string(),
            watching: vec!["src/**/*.graphql".to_string()],
            interactive: false,
        };
        let rendered = render_watch_event("00:00:00", &event, 0, false, false).unwrap();
        insta::assert_snapshot!(rendered.trim_end(), @"[00:00:00] [~] Watching: src/**/*.graphql");
    }

    #[test]
    fn suppressed_triggers_need_verbose() {
        let event = WatchEvent::TriggerSuppressed {
            path: "/project/src/__generated__/Me.ts".to_string(),
            marker: "__generated__".to_string(),
        };
        assert_eq!(render_watch_event("12:00:00", &event, 0, false, false), None);

        let rendered = render_watch_event("12:00:00", &event, 1, false, false).unwrap();
        assert!(rendered.contains("Ignored: /project/src/__generated__/Me.ts (matches '__generated__')"));
    }

    #[test]
    fn completion_pluralizes_files() {
        let one = render_watch_event(
            "t",
            &WatchEvent::GenerationComplete { files_written: 1 },
            0,
            false,
            true,
        )
        .unwrap();
        assert_eq!(one, "[t] ✓ Generated: 1 file\n");

        let many = render_watch_event(
            "t",
            &WatchEvent::GenerationComplete { files_written: 3 },
            0,
            false,
            true,
        )
        .unwrap();
        assert!(many.ends_with("3 files\n"));
    }

    #[test]
    fn file_change_uses_trigger_kind() {
        let event = WatchEvent::FileChanged {
            path: "src/me.graphql".to_string(),
            kind: TriggerKind::Removed,
        };
        let rendered = render_watch_event("t", &event, 0, false, false).unwrap();
        assert_eq!(rendered, "[t] [>] Removed: src/me.graphql\n");
    }

    #[test]
    fn header_hint_follows_lifecycle() {
        let interactive = render_watch_header("/p", "swift", "API.swift", true, false, false);
        assert!(interactive.contains("Hint: Press any key to stop"));

        let headless = render_watch_header("/p", "swift", "API.swift", false, false, false);
        assert!(headless.contains("Hint: Press Ctrl+C to stop"));
        assert!(headless.starts_with("[~] gqlgen watch\n"));
    }

    #[test]
    fn raw_mode_lines_adds_carriage_returns_once() {
        assert_eq!(raw_mode_lines("a\nb\r\n"), "a\r\nb\r\n");
    }
}
