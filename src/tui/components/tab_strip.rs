//! Tab strip listing pillar names with the active one bracketed.

use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";
const OVERFLOW_MARKER: &str = "< ";

/// Context for rendering the tab strip.
#[derive(Debug, Clone)]
pub struct TabStripViewContext<'a> {
    /// Pillar names in tab order.
    pub pillars: Vec<&'a str>,
    /// Name of the active pillar.
    pub active: &'a str,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component rendering the row of pillar tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabStripComponent;

impl TabStripComponent {
    /// Creates a tab strip component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the tab strip as a single line ending in a newline.
    ///
    /// When the full strip does not fit, leading tabs are dropped until the
    /// active tab is visible.
    #[must_use]
    pub fn view(&self, ctx: &TabStripViewContext<'_>) -> String {
        let labels: Vec<String> = ctx
            .pillars
            .iter()
            .map(|pillar| {
                if *pillar == ctx.active {
                    format!("[{pillar}]")
                } else {
                    (*pillar).to_owned()
                }
            })
            .collect();

        let active_index = ctx
            .pillars
            .iter()
            .position(|pillar| *pillar == ctx.active)
            .unwrap_or(0);

        let mut first = 0;
        let mut line = labels.join(SEPARATOR);
        while first < active_index && UnicodeWidthStr::width(line.as_str()) > ctx.max_width {
            first += 1;
            let remaining = labels.get(first..).unwrap_or_default();
            line = format!("{OVERFLOW_MARKER}{}", remaining.join(SEPARATOR));
        }

        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{TabStripComponent, TabStripViewContext};

    const PILLARS: [&str; 3] = ["Operational Excellence", "Security", "Reliability"];

    #[rstest]
    fn brackets_active_tab() {
        let line = TabStripComponent::new().view(&TabStripViewContext {
            pillars: PILLARS.to_vec(),
            active: "Security",
            max_width: 120,
        });

        assert_eq!(line, "Operational Excellence | [Security] | Reliability\n");
    }

    #[rstest]
    fn narrow_strip_scrolls_to_active_tab() {
        let line = TabStripComponent::new().view(&TabStripViewContext {
            pillars: PILLARS.to_vec(),
            active: "Reliability",
            max_width: 30,
        });

        assert!(line.starts_with("< "));
        assert!(line.contains("[Reliability]"));
    }
}
