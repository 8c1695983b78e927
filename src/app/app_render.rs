use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::config::{ClipboardBackend, InterceptMode};
use crate::notification::render_notification;
use crate::page::Element;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints: Vec<Constraint> = self
            .page
            .elements
            .iter()
            .map(|element| match element {
                Element::Field(field) if field.is_multiline() => Constraint::Min(5),
                _ => Constraint::Length(3),
            })
            .collect();
        constraints.push(Constraint::Length(5));
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(frame.area());
        let element_count = self.page.elements.len();
        let focus = self.page.focus();

        for (i, element) in self.page.elements.iter().enumerate() {
            match element {
                Element::Field(field) => frame.render_widget(&field.textarea, areas[i]),
                Element::Button(button) => {
                    render_button(frame, areas[i], &button.label, focus == Some(i))
                }
            }
        }

        self.render_body(frame, areas[element_count]);
        self.render_status_bar(frame, areas[element_count + 1]);

        render_notification(frame, &mut self.notification);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let border = if self.page.focus().is_none() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let text_style = if self.page.body_selected() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };

        let body = Paragraph::new(Span::styled(self.page.body.as_str(), text_style))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Page ")
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(body, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.mode {
            InterceptMode::Native => "native",
            InterceptMode::Manual => "manual",
        };
        let backend = match self.backend {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::System => "system",
            ClipboardBackend::Osc52 => "osc52",
            ClipboardBackend::Memory => "memory",
        };
        let (state, state_color) = if self.interception_enabled() {
            ("on", Color::Green)
        } else {
            ("off", Color::Red)
        };

        let line = Line::from(vec![
            Span::styled(" intercept ", Style::default().fg(Color::DarkGray)),
            Span::styled(state, Style::default().fg(state_color)),
            Span::styled(
                format!(" | {} | {} ", mode, backend),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("Tab focus  F2 toggle  Ctrl+Q quit"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Paragraph::new(Span::styled(format!(" {} ", label), style))
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::{ClipboardBackend, Config};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    fn memory_config() -> Config {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Memory;
        config
    }

    #[test]
    fn test_demo_page_renders_all_elements() {
        let mut app = App::new(&memory_config());

        let output = render_to_string(&mut app);

        assert!(output.contains("Name"));
        assert!(output.contains("Notes"));
        assert!(output.contains("Submit"));
        assert!(output.contains("Page"));
    }

    #[test]
    fn test_status_bar_shows_mode_and_backend() {
        let mut app = App::new(&memory_config());

        let output = render_to_string(&mut app);

        assert!(output.contains("intercept on"));
        assert!(output.contains("manual | memory"));
    }

    #[test]
    fn test_status_bar_reflects_toggle() {
        let mut app = App::new(&memory_config());
        app.toggle_interception();

        let output = render_to_string(&mut app);

        assert!(output.contains("intercept off"));
    }
}
