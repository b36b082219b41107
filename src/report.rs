//! Multi-format report assembly
//!
//! A [`ReportBuilder`] assembles a [`Report`] from independently settable
//! parts; [`TextReportBuilder`] passes the parts through verbatim while
//! [`HtmlReportBuilder`] wraps them in markup. [`ReportDirector`] drives any
//! builder through the same assembly sequence, decoupling the steps from the
//! final representation.

/// Presentation style attached to a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    pub background: String,
    pub font_color: String,
    pub font_size: u32,
}

impl ReportStyle {
    pub fn new(background: impl Into<String>, font_color: impl Into<String>, font_size: u32) -> Self {
        Self {
            background: background.into(),
            font_color: font_color.into(),
            font_size,
        }
    }
}

/// Assembled report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub header: String,
    pub content: String,
    pub footer: String,
    pub style: Option<ReportStyle>,
}

impl Report {
    /// Render the final text: header, optional style line, content, footer
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        if let Some(style) = &self.style {
            out.push_str(&format!(
                "style: background={}, font={}, size={}\n",
                style.background, style.font_color, style.font_size
            ));
        }
        out.push_str(&self.content);
        out.push('\n');
        out.push_str(&self.footer);
        out
    }
}

/// Assembly steps shared by every report format
pub trait ReportBuilder {
    fn header(&mut self, header: &str);
    fn content(&mut self, content: &str);
    fn footer(&mut self, footer: &str);
    fn style(&mut self, style: ReportStyle);

    /// Take the assembled report, leaving the builder empty
    fn finish(&mut self) -> Report;
}

/// Builds plain-text reports
#[derive(Debug, Default)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for TextReportBuilder {
    fn header(&mut self, header: &str) {
        self.report.header = header.to_string();
    }

    fn content(&mut self, content: &str) {
        self.report.content = content.to_string();
    }

    fn footer(&mut self, footer: &str) {
        self.report.footer = footer.to_string();
    }

    fn style(&mut self, style: ReportStyle) {
        self.report.style = Some(style);
    }

    fn finish(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

/// Builds HTML reports by wrapping each part in markup
#[derive(Debug, Default)]
pub struct HtmlReportBuilder {
    report: Report,
}

impl HtmlReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for HtmlReportBuilder {
    fn header(&mut self, header: &str) {
        self.report.header = format!("<h1>{header}</h1>");
    }

    fn content(&mut self, content: &str) {
        self.report.content = format!("<p>{content}</p>");
    }

    fn footer(&mut self, footer: &str) {
        self.report.footer = format!("<small>{footer}</small>");
    }

    fn style(&mut self, style: ReportStyle) {
        self.report.style = Some(style);
    }

    fn finish(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

/// Drives any builder through the standard assembly sequence
#[derive(Debug, Default)]
pub struct ReportDirector;

impl ReportDirector {
    pub fn construct(
        &self,
        builder: &mut dyn ReportBuilder,
        header: &str,
        content: &str,
        footer: &str,
    ) -> Report {
        builder.header(header);
        builder.content(content);
        builder.footer(footer);
        builder.finish()
    }

    pub fn construct_styled(
        &self,
        builder: &mut dyn ReportBuilder,
        style: ReportStyle,
        header: &str,
        content: &str,
        footer: &str,
    ) -> Report {
        builder.style(style);
        self.construct(builder, header, content, footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_builder_passes_parts_through() {
        let mut builder = TextReportBuilder::new();
        let report = ReportDirector.construct(&mut builder, "Weekly", "Plan met.", "Author: Aida");

        assert_eq!(report.header, "Weekly");
        assert_eq!(report.content, "Plan met.");
        assert_eq!(report.footer, "Author: Aida");
        assert_eq!(report.style, None);
    }

    #[test]
    fn test_html_builder_wraps_parts() {
        let mut builder = HtmlReportBuilder::new();
        let report = ReportDirector.construct(&mut builder, "Revenue", "Up 10%.", "System");

        assert_eq!(report.header, "<h1>Revenue</h1>");
        assert_eq!(report.content, "<p>Up 10%.</p>");
        assert_eq!(report.footer, "<small>System</small>");
    }

    #[test]
    fn test_finish_resets_the_builder() {
        let mut builder = TextReportBuilder::new();
        builder.header("First");
        let _ = builder.finish();

        let empty = builder.finish();
        assert_eq!(empty, Report::default());
    }

    #[test]
    fn test_render_includes_style_line() {
        let mut builder = TextReportBuilder::new();
        let report = ReportDirector.construct_styled(
            &mut builder,
            ReportStyle::new("#FFFFFF", "#000000", 14),
            "Monthly",
            "Stats shown.",
            "(c) 2026",
        );

        let rendered = report.render();
        assert!(rendered.contains("style: background=#FFFFFF, font=#000000, size=14"));
    }
}
