//! Four-line report written after a build step.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Timelike};

use crate::ambient::BuildContext;

pub const BANNER: &str = "Post-build plugin executed";
pub const DIRECTORY_LABEL: &str = "Current directory";
pub const TIMESTAMP_LABEL: &str = "Timestamp";
pub const ARGUMENTS_LABEL: &str = "Arguments";

/// Local datetime layout with microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Layout used when the sub-second part is zero.
pub const WHOLE_SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Microsecond precision, with the fraction left off on whole seconds.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format(WHOLE_SECOND_FORMAT).to_string()
    } else {
        ts.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Render the report as newline-terminated lines.
pub fn render_report(ctx: &BuildContext) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "{DIRECTORY_LABEL}: {}", ctx.current_dir.display());
    let _ = writeln!(out, "{TIMESTAMP_LABEL}: {}", format_timestamp(&ctx.timestamp));
    let _ = writeln!(out, "{ARGUMENTS_LABEL}: {:?}", ctx.args);
    out
}

/// Write the whole report in one call, then flush.
pub fn write_report(ctx: &BuildContext, mut w: impl Write) -> Result<()> {
    let rendered = render_report(ctx);
    w.write_all(rendered.as_bytes())
        .context("failed to write post-build report")?;
    w.flush().context("failed to flush post-build report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::path::PathBuf;

    fn sample_context(args: &[&str]) -> BuildContext {
        BuildContext {
            current_dir: PathBuf::from("/work/app"),
            timestamp: Local
                .with_ymd_and_hms(2026, 10, 14, 9, 30, 1)
                .single()
                .expect("unambiguous local time"),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn renders_lines_in_fixed_order() {
        let ctx = sample_context(&["post-build", "--release"]);
        let text = render_report(&ctx);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Post-build plugin executed",
                "Current directory: /work/app",
                "Timestamp: 2026-10-14 09:30:01",
                r#"Arguments: ["post-build", "--release"]"#,
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn whole_seconds_drop_the_fraction() {
        let ctx = sample_context(&["post-build"]);
        assert_eq!(format_timestamp(&ctx.timestamp), "2026-10-14 09:30:01");

        let later = ctx.timestamp + Duration::microseconds(7);
        assert_eq!(format_timestamp(&later), "2026-10-14 09:30:01.000007");

        let sub_micro = ctx.timestamp + Duration::nanoseconds(400);
        assert_eq!(format_timestamp(&sub_micro), "2026-10-14 09:30:01");
    }

    #[test]
    fn quotes_arguments_with_spaces_and_quotes() {
        let ctx = sample_context(&["post-build", "my app", "say \"hi\""]);
        let text = render_report(&ctx);

        assert!(text.contains(r#"["post-build", "my app", "say \"hi\""]"#));
    }

    #[test]
    fn write_report_matches_render() {
        let ctx = sample_context(&["post-build"]);
        let mut buf = Vec::new();

        write_report(&ctx, &mut buf).expect("write");

        assert_eq!(String::from_utf8(buf).expect("utf8"), render_report(&ctx));
    }
}
