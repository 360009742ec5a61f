use std::time::Duration;

use color_eyre::eyre::Error;
use futures_util::TryStreamExt;
use ratatui::DefaultTerminal;
use tokio::{
    sync::mpsc,
    time::Interval,
};

use crate::{
    args::ViewArgs,
    config::Config,
    ui::{
        Ui,
        UiEvent,
        keybinds::Keybinds,
    },
};

#[derive(Debug)]
pub struct App {
    app_events: mpsc::UnboundedReceiver<AppEvent>,
    proxy: AppProxy,
    terminal: DefaultTerminal,
    terminal_events: crossterm::event::EventStream,
    ui: Ui,
    exit_requested: bool,
    redraw_interval: Interval,
}

impl App {
    pub fn new(args: ViewArgs, config: &Config, keybinds: Keybinds) -> Result<Self, Error> {
        let redraw_interval = args.redraw_interval.unwrap_or(config.redraw_interval);
        if redraw_interval == 0 {
            color_eyre::eyre::bail!("Redraw interval must be greater than 0");
        }

        let ui = Ui::new(
            keybinds,
            config.style.clone(),
            args.scheme.unwrap_or(config.default_scheme),
            args.bits.unwrap_or_default(),
            config.strict,
        );

        let terminal = ratatui::init();
        let terminal_events = crossterm::event::EventStream::new();

        let (proxy, app_events) = AppProxy::new();

        Ok(Self {
            app_events,
            proxy,
            terminal,
            terminal_events,
            ui,
            exit_requested: false,
            redraw_interval: tokio::time::interval(Duration::from_millis(redraw_interval)),
        })
    }

    pub async fn run(&mut self) -> Result<(), Error> {
        self.exit_requested = false;

        while !self.exit_requested {
            tokio::select! {
                option = self.app_events.recv() => {
                    let Some(event) = option
                    else {
                        break;
                    };

                    self.handle_event(event)?;
                }
                result = self.terminal_events.try_next() => {
                    let Some(event) = result?
                    else {
                        break;
                    };
                    self.ui.handle_event(UiEvent::Terminal(event), &self.proxy);
                }
                _ = self.redraw_interval.tick() => {
                    self.terminal.draw(|frame| frame.render_widget(&self.ui, frame.area()))?;
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<(), Error> {
        match event {
            AppEvent::RequestExit => {
                tracing::debug!(scheme = %self.ui.scheme(), "exit requested");
                self.exit_requested = true;
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

#[derive(Clone, Debug)]
pub struct AppProxy {
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl AppProxy {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        (Self { event_sender }, event_receiver)
    }

    pub fn request_exit(&self) {
        let _ = self.event_sender.send(AppEvent::RequestExit);
    }
}

#[derive(Debug)]
pub enum AppEvent {
    RequestExit,
}
