use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use gimnasio_config::GimnasioConfig;
use gimnasio_overlay::KeyBinding;
use gimnasio_overlay::KeyDispatch;
use gimnasio_overlay::KeyListeners;
use gimnasio_overlay::OverlayProvider;
use gimnasio_overlay::OverlayRegistry;
use gimnasio_overlay::RenderStyle;
use gimnasio_overlay::SharedScrollFlag;
use gimnasio_overlay::backdrop_click;
use gimnasio_protocol::OverlayConfig;
use gimnasio_protocol::OverlayMetadata;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::StreamExt;
use tracing::debug;
use tracing::info;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::hub::Hub;
use crate::key_hint;
use crate::overlay_shell;
use crate::overlay_shell::ShellFrame;
use crate::tui;
use crate::views;
use crate::views::OverlayView;
use crate::views::ViewContext;
use crate::views::ViewFactory;

const KEY_CTRL_C: KeyBinding = key_hint::ctrl(KeyCode::Char('c'));
const KEY_X: KeyBinding = key_hint::plain(KeyCode::Char('x'));

/// Deepest entry still drawn when receded entries are rendered.
const MAX_RENDERED_DEPTH: usize = 2;
const WHEEL_LINES: i32 = 3;

/// A view built for one stack entry. Kept while the entry stays in place so
/// view state (selection) survives pushes above it.
struct MountedView {
    config: OverlayConfig,
    title: String,
    metadata: OverlayMetadata,
    view: Box<dyn OverlayView>,
}

pub(crate) struct App {
    provider: OverlayProvider,
    listeners: KeyListeners,
    registry: OverlayRegistry<ViewFactory>,
    mounted: Vec<MountedView>,
    hub: Hub,
    view_context: ViewContext,
    render_receded: bool,
    last_area: Rect,
    app_event_rx: UnboundedReceiver<AppEvent>,
    should_exit: bool,
}

impl App {
    pub(crate) fn new(config: &GimnasioConfig, close_key: KeyBinding) -> anyhow::Result<Self> {
        let (app_event_tx, app_event_rx) = unbounded_channel();
        let app_event_tx = AppEventSender::new(app_event_tx);

        let scroll_lock = SharedScrollFlag::new();
        let listeners = KeyListeners::new();
        let provider =
            OverlayProvider::mount(Box::new(scroll_lock.clone()), &listeners, close_key)?;

        Ok(Self {
            provider,
            listeners,
            registry: views::registry(),
            mounted: Vec::new(),
            hub: Hub::new(config.actor.clone(), scroll_lock, app_event_tx.clone()),
            view_context: ViewContext {
                actor: config.actor.clone(),
                app_event_tx,
            },
            render_receded: config.overlays.render_receded,
            last_area: Rect::default(),
            app_event_rx,
            should_exit: false,
        })
    }

    pub(crate) async fn run(&mut self, terminal: &mut tui::Terminal) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        terminal.draw(|frame| self.render(frame.area(), frame.buffer_mut()))?;

        while !self.should_exit {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                Some(app_event) = self.app_event_rx.recv() => self.handle_app_event(app_event),
            }
            self.drain_app_events();
            terminal.draw(|frame| self.render(frame.area(), frame.buffer_mut()))?;
        }
        info!(depth = self.stack().depth(), "exiting");
        Ok(())
    }

    fn stack(&self) -> &gimnasio_overlay::OverlayStack {
        self.provider.stack()
    }

    pub(crate) fn open(&mut self, config: OverlayConfig) {
        self.handle_app_event(AppEvent::PushOverlay(config));
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if KEY_CTRL_C.is_press(key_event) {
            self.should_exit = true;
            return;
        }
        if self.listeners.dispatch(&key_event) == KeyDispatch::Handled {
            self.sync_views();
            return;
        }

        let Some(top_style) = self.mounted.last().map(|mounted| mounted.metadata.style) else {
            self.hub.handle_key_event(key_event);
            return;
        };
        if top_style == RenderStyle::Fullscreen && KEY_X.is_press(key_event) {
            self.stack().pop();
            self.sync_views();
        } else if let Some(top) = self.mounted.last_mut() {
            top.view.handle_key_event(key_event);
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(style) = self.mounted.last().map(|mounted| mounted.metadata.style) else {
                    return;
                };
                if overlay_shell::is_backdrop_hit(
                    style,
                    self.last_area,
                    mouse_event.column,
                    mouse_event.row,
                ) && backdrop_click(self.provider.stack(), 0, style)
                {
                    self.sync_views();
                }
            }
            MouseEventKind::ScrollDown => {
                self.hub.scroll_by(WHEEL_LINES);
            }
            MouseEventKind::ScrollUp => {
                self.hub.scroll_by(-WHEEL_LINES);
            }
            _ => {}
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        debug!(?event, "app event");
        match event {
            AppEvent::PushOverlay(config) => self.stack().push(config),
            AppEvent::PopOverlay => self.stack().pop(),
            AppEvent::ReplaceOverlay(config) => self.stack().replace(config),
            AppEvent::ClearOverlays => self.stack().clear(),
            AppEvent::ExitRequest => self.should_exit = true,
        }
        self.sync_views();
    }

    fn drain_app_events(&mut self) {
        while let Ok(event) = self.app_event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Rebuild views for entries that changed; keep the unchanged prefix.
    fn sync_views(&mut self) {
        let snapshot = self.stack().snapshot();
        let kept = self
            .mounted
            .iter()
            .zip(snapshot.iter())
            .take_while(|(mounted, config)| mounted.config == **config)
            .count();
        self.mounted.truncate(kept);

        for config in &snapshot.entries()[kept..] {
            let resolved = self.registry.resolve(config);
            let factory = *resolved.component;
            // The shell names what is shown, not what was asked for.
            let title = if resolved.fallback {
                OverlayConfig::Unrecognized.title()
            } else {
                config.title()
            };
            self.mounted.push(MountedView {
                config: config.clone(),
                title,
                metadata: resolved.metadata,
                view: factory(config, &self.view_context),
            });
        }
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.last_area = area;
        self.hub.render(area, buf);

        let deepest = if self.render_receded {
            MAX_RENDERED_DEPTH
        } else {
            0
        };
        let close_key = self.provider.cancel_key().unwrap_or_default();
        let snapshot = self.stack().snapshot();
        let visible: Vec<(usize, &MountedView)> = snapshot
            .entries_with_depth()
            .zip(self.mounted.iter().rev())
            .take_while(|((depth, _), _)| *depth <= deepest)
            .map(|((depth, _), mounted)| (depth, mounted))
            .collect();
        // Deepest first so the top is painted last.
        for (depth, mounted) in visible.into_iter().rev() {
            let frame = ShellFrame {
                title: &mounted.title,
                metadata: mounted.metadata,
                depth,
                close_key,
            };
            overlay_shell::render_shell(area, buf, &frame, mounted.view.as_ref());
        }
    }
}
