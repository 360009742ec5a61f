pub mod keybinds;
pub mod signal_chart;

use crossterm::event::{
    Event as TerminalEvent,
    KeyCode,
    KeyEvent,
    KeyEventKind,
    KeyModifiers,
};
use linecode::{
    BitSequence,
    SampleSequence,
    Scheme,
    Timeline,
    timeline,
};
use ratatui::{
    buffer::Buffer,
    layout::{
        Alignment,
        Constraint,
        Layout,
        Rect,
    },
    style::{
        Color,
        Modifier,
        Style,
    },
    text::{
        Line,
        Span,
    },
    widgets::{
        Block,
        Paragraph,
        Tabs,
        Widget,
    },
};

use crate::{
    app::AppProxy,
    config,
    ui::{
        keybinds::{
            Action,
            Keybinds,
        },
        signal_chart::SignalChart,
    },
};

const TITLE: &str = "Digital Encoding Visualizer";
const PLACEHOLDER: &str = "Enter binary sequence, e.g., 1010";

#[derive(Debug)]
pub struct Ui {
    layout: Layout,

    keybinds: Keybinds,
    style: config::Style,

    input: String,
    scheme: Scheme,
    strict: bool,

    timeline: Timeline,
    error: Option<String>,
}

impl Ui {
    pub fn new(
        keybinds: Keybinds,
        style: config::Style,
        scheme: Scheme,
        input: String,
        strict: bool,
    ) -> Self {
        let mut this = Self {
            layout: Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(100),
                Constraint::Length(1),
            ]),
            keybinds,
            style,
            input,
            scheme,
            strict,
            timeline: linecode::encode(scheme, ""),
            error: None,
        };
        this.generate();
        this
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_event(&mut self, event: UiEvent, app: &AppProxy) {
        match event {
            UiEvent::Terminal(event) => self.handle_terminal_event(event, app),
        }
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent, app: &AppProxy) {
        match event {
            TerminalEvent::Key(key_event) => {
                if let Some(action) = self.keybinds.get(key_event) {
                    match action {
                        Action::Quit => app.request_exit(),
                        Action::NextScheme => self.set_scheme(self.scheme.next()),
                        Action::PreviousScheme => self.set_scheme(self.scheme.previous()),
                        Action::DeleteBit => {
                            self.input.pop();
                            self.generate();
                        }
                        Action::ClearInput => {
                            self.input.clear();
                            self.generate();
                        }
                        Action::ToggleStrict => {
                            self.strict = !self.strict;
                            self.generate();
                        }
                        Action::Generate => self.generate(),
                    }
                }
                else if let Some(c) = typed_char(key_event) {
                    self.input.push(c);
                    self.generate();
                }
            }
            TerminalEvent::Paste(text) => {
                self.input.extend(text.chars().filter(|c| !c.is_control()));
                self.generate();
            }
            _ => {}
        }
    }

    fn set_scheme(&mut self, scheme: Scheme) {
        tracing::debug!(%scheme, "scheme selected");
        self.scheme = scheme;
        self.generate();
    }

    /// Encodes the current input with the current scheme.
    fn generate(&mut self) {
        let bits = if self.strict {
            match BitSequence::parse_strict(&self.input) {
                Ok(bits) => bits,
                Err(error) => {
                    self.error = Some(error.to_string());
                    self.timeline = timeline::project(&SampleSequence::new(), self.scheme.time_base());
                    return;
                }
            }
        }
        else {
            BitSequence::from(self.input.as_str())
        };

        let samples = self.scheme.encode(&bits);
        self.timeline = timeline::project(&samples, self.scheme.time_base());
        self.error = None;
    }
}

/// Character typed by a key press that isn't bound to an action.
fn typed_char(event: KeyEvent) -> Option<char> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char(c) if (event.modifiers - KeyModifiers::SHIFT).is_empty() => Some(c),
        _ => None,
    }
}

impl Widget for &Ui {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [title_area, input_area, scheme_area, chart_area, status_area] =
            self.layout.areas(area);

        Line::from(TITLE)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(title_area, buf);

        let input_title = if self.strict {
            "Input Text (Binary, strict)"
        }
        else {
            "Input Text (Binary)"
        };
        let input = if self.input.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        }
        else {
            Span::raw(self.input.as_str())
        };
        Paragraph::new(Line::from(input))
            .block(Block::bordered().title(input_title))
            .render(input_area, buf);

        Tabs::new(Scheme::ALL.iter().map(|scheme| scheme.name()))
            .select(self.scheme.index())
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .block(Block::bordered().title("Encoding Type"))
            .render(scheme_area, buf);

        SignalChart {
            timeline: &self.timeline,
            color: self.style.line_color(),
        }
        .render(chart_area, buf);

        let status = match &self.error {
            Some(error) => Line::styled(error.as_str(), Style::default().fg(Color::Red)),
            None => {
                let descriptor = self.scheme.descriptor();
                Line::from(format!(
                    "{} · {} sample(s) per bit · {} samples · Tab: next scheme · Esc: quit",
                    descriptor.full_name,
                    descriptor.time_base.samples_per_bit(),
                    self.timeline.len(),
                ))
            }
        };
        status.render(status_area, buf);
    }
}

#[derive(Debug)]
pub enum UiEvent {
    Terminal(TerminalEvent),
}
