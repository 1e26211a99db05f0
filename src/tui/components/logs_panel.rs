//! Logs panel component
//!
//! Displays the tracing events captured by `TuiLogLayer`, color-coded by
//! level. Follows new entries until the user pages up; paging back to the
//! bottom resumes following.

use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext, Scrollable};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Shared with the tracing layer
    buffer: LogBuffer,

    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            scroll: ScrollState::new(),
        }
    }

    /// Sync scroll dimensions with the buffer (call before each render)
    pub fn sync(&mut self, viewport_height: usize) {
        self.scroll
            .update_dimensions(self.buffer.len(), viewport_height);
    }

    /// Render a given set of entries with the current scroll window
    pub fn render_with_entries(
        &self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        theme: &Theme,
    ) {
        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries
            .iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let title = if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(false))
                .title(title),
        );

        f.render_widget(list, area);
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let entries = self.buffer.get_all();
        self.render_with_entries(f, area, &entries, ctx.theme);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warn),
        LogLevel::Info => Style::default().fg(theme.info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.debug),
    }
}
