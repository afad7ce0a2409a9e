use crate::checker::RunReport;
use crate::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};

pub(crate) fn format_output(
    format: OutputFormat,
    report: &RunReport,
    color_mode: ColorMode,
    verbose: u8,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter::new().format(report),
        OutputFormat::Markdown => MarkdownFormatter::new().format(report),
    }
}
