use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use gimnasio_overlay::KeyBinding;
use gimnasio_overlay::SharedScrollFlag;
use gimnasio_protocol::ActorSummary;
use gimnasio_protocol::OverlayConfig;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::key_hint;

const KEY_UP: KeyBinding = key_hint::plain(KeyCode::Up);
const KEY_DOWN: KeyBinding = key_hint::plain(KeyCode::Down);
const KEY_PAGE_UP: KeyBinding = key_hint::plain(KeyCode::PageUp);
const KEY_PAGE_DOWN: KeyBinding = key_hint::plain(KeyCode::PageDown);
const KEY_Q: KeyBinding = key_hint::plain(KeyCode::Char('q'));

const PAGE: u16 = 10;

struct HubEntry {
    label: &'static str,
    config: OverlayConfig,
}

/// Base screen under every overlay. Scrolls unless the overlay stack holds
/// the scroll lock.
pub(crate) struct Hub {
    actor: ActorSummary,
    entries: Vec<HubEntry>,
    scroll_offset: u16,
    scroll_lock: SharedScrollFlag,
    app_event_tx: AppEventSender,
}

fn entries() -> Vec<HubEntry> {
    vec![
        HubEntry {
            label: "Mi grupo",
            config: OverlayConfig::MiGrupo,
        },
        HubEntry {
            label: "Mis cursos",
            config: OverlayConfig::MisCursos,
        },
        HubEntry {
            label: "Mi progreso",
            config: OverlayConfig::MiProgreso,
        },
        HubEntry {
            label: "Tienda",
            config: OverlayConfig::Tienda,
        },
        HubEntry {
            label: "Animaciones",
            config: OverlayConfig::Animaciones,
        },
        HubEntry {
            label: "Planificaciones de Ciencias",
            config: OverlayConfig::PlanificacionesSector {
                sector_nombre: "Ciencias".to_string(),
                sector_color: "#10b981".to_string(),
                sector_emoji: "🔬".to_string(),
            },
        },
        HubEntry {
            label: "Planificaciones de Matemática",
            config: OverlayConfig::PlanificacionesSector {
                sector_nombre: "Matemática".to_string(),
                sector_color: "#3b82f6".to_string(),
                sector_emoji: "📐".to_string(),
            },
        },
        HubEntry {
            label: "Mes de la ciencia · Astronomía",
            config: OverlayConfig::Planificacion {
                codigo: "2025-11-mes-ciencia".to_string(),
                tema: "astronomia".to_string(),
            },
        },
        HubEntry {
            label: "Desafío semanal",
            config: OverlayConfig::Unrecognized,
        },
    ]
}

impl Hub {
    pub(crate) fn new(
        actor: ActorSummary,
        scroll_lock: SharedScrollFlag,
        app_event_tx: AppEventSender,
    ) -> Self {
        Self {
            actor,
            entries: entries(),
            scroll_offset: 0,
            scroll_lock,
            app_event_tx,
        }
    }

    #[cfg(test)]
    pub(crate) fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Move the content by `delta` lines; a no-op while locked.
    pub(crate) fn scroll_by(&mut self, delta: i32) -> bool {
        if self.scroll_lock.is_locked() {
            return false;
        }
        let max = self.line_count().saturating_sub(1);
        let next = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(max));
        self.scroll_offset = u16::try_from(next).unwrap_or(max);
        true
    }

    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event {
            e if KEY_UP.is_press(e) => self.scroll_by(-1),
            e if KEY_DOWN.is_press(e) => self.scroll_by(1),
            e if KEY_PAGE_UP.is_press(e) => self.scroll_by(-i32::from(PAGE)),
            e if KEY_PAGE_DOWN.is_press(e) => self.scroll_by(i32::from(PAGE)),
            e if KEY_Q.is_press(e) => {
                self.app_event_tx.send(AppEvent::ExitRequest);
                true
            }
            KeyEvent {
                code: KeyCode::Char(c @ '1'..='9'),
                kind: KeyEventKind::Press,
                ..
            } => {
                let Some(entry) = self.entries.get(c as usize - '1' as usize) else {
                    return false;
                };
                tracing::info!(overlay = entry.config.kind().as_str(), "opening from hub");
                self.app_event_tx
                    .send(AppEvent::PushOverlay(entry.config.clone()));
                true
            }
            _ => false,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                "Hola, ".into(),
                self.actor.display_name().bold(),
                "!".into(),
            ]),
            Line::from(format!(
                "Nivel {} · {} puntos",
                self.actor.nivel_actual, self.actor.puntos_totales
            ))
            .dim(),
            Line::default(),
        ];
        lines.extend(self.entries.iter().enumerate().map(|(i, entry)| {
            Line::from(vec![format!(" {} ", i + 1).cyan().bold(), entry.label.into()])
        }));
        lines.push(Line::default());
        lines.push(
            key_hint::key_hints_line(&[
                (&[KEY_UP, KEY_DOWN], "to scroll"),
                (&[KEY_Q], "to quit"),
            ]),
        );
        lines
    }

    fn line_count(&self) -> u16 {
        u16::try_from(self.lines().len()).unwrap_or(u16::MAX)
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .scroll((self.scroll_offset, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing;
    use crossterm::event::KeyModifiers;
    use gimnasio_overlay::ScrollSurface;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn hub() -> (Hub, SharedScrollFlag, tokio::sync::mpsc::UnboundedReceiver<AppEvent>) {
        let (ctx, rx) = testing::context();
        let flag = SharedScrollFlag::new();
        (Hub::new(ctx.actor, flag.clone(), ctx.app_event_tx), flag, rx)
    }

    #[test]
    fn number_keys_open_entries() {
        let (mut hub, _flag, mut rx) = hub();
        assert!(hub.handle_key_event(press(KeyCode::Char('4'))));
        assert!(hub.handle_key_event(press(KeyCode::Char('9'))));
        assert_eq!(
            vec![
                AppEvent::PushOverlay(OverlayConfig::Tienda),
                AppEvent::PushOverlay(OverlayConfig::Unrecognized),
            ],
            testing::drain(&mut rx)
        );
    }

    #[test]
    fn q_requests_exit() {
        let (mut hub, _flag, mut rx) = hub();
        hub.handle_key_event(press(KeyCode::Char('q')));
        assert_eq!(vec![AppEvent::ExitRequest], testing::drain(&mut rx));
    }

    #[test]
    fn scrolling_stops_while_locked() {
        let (mut hub, mut flag, _rx) = hub();
        assert!(hub.handle_key_event(press(KeyCode::Down)));
        assert_eq!(1, hub.scroll_offset());

        flag.set_scroll_locked(true);
        assert!(!hub.handle_key_event(press(KeyCode::Down)));
        assert!(!hub.scroll_by(5));
        assert_eq!(1, hub.scroll_offset());

        flag.set_scroll_locked(false);
        hub.handle_key_event(press(KeyCode::PageDown));
        hub.handle_key_event(press(KeyCode::PageDown));
        assert_eq!(hub.line_count() - 1, hub.scroll_offset());
        hub.scroll_by(-100);
        assert_eq!(0, hub.scroll_offset());
    }

    #[test]
    fn renders_greeting_and_entries() {
        let (hub, _flag, _rx) = hub();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        hub.render(area, &mut buf);
        assert_eq!(
            concat!(
                "Hola, Lucía Pérez!\n",
                "Nivel 3 · 1250 puntos\n",
                "\n",
                " 1 Mi grupo\n",
                " 2 Mis cursos\n",
                " 3 Mi progreso\n",
                " 4 Tienda\n",
                " 5 Animaciones\n",
            ),
            testing::buffer_to_text(&buf, area)
        );
    }
}
