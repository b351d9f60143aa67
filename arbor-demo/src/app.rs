//! Two tree panes side by side with a status line underneath.

use std::cell::RefCell;
use std::rc::Rc;

use arbor::dispatch::{self, DispatchReceiver, Notice};
use arbor::node::{NodeId, TreeModel};
use arbor::prelude::*;
use arbor_term::{Color, Rect, Region, Style, Terminal, convert_event};
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info};

use crate::DemoError;
use crate::sample;
use crate::settings::Settings;

/// Gap between the two panes.
const GUTTER: u16 = 2;

struct Pane {
    title: &'static str,
    view: TreeView<String>,
    renderer: TreeRenderer,
    theme: ThemeDefinition,
    area: Rect,
}

impl Pane {
    fn new(
        title: &'static str,
        config: &TreeConfig,
        theme: ThemeDefinition,
        x: u16,
    ) -> Result<Self, DemoError> {
        let (model, root) = sample::build()?;
        let view = config.build_view(model, root)?;
        let theme = config.theme(theme);
        let renderer = TreeRenderer::from_theme(&theme)?;
        let (columns, height) = view.size();
        let area = Rect::new(
            x,
            1,
            u16::try_from(columns).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        );
        Ok(Self {
            title,
            view,
            renderer,
            theme,
            area,
        })
    }
}

/// What woke the event loop.
enum Wake {
    Input(Option<Event>),
    Notice(Notice),
    Closed,
}

pub struct App {
    panes: [Pane; 2],
    focus: usize,
    selected: Rc<RefCell<String>>,
    toggled: Rc<RefCell<String>>,
    notices: DispatchReceiver,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self, DemoError> {
        let bracket = Pane::new("Bracket Tree", &settings.bracket, ThemeDefinition::dark(), 0)?;

        let mut block_theme = ThemeDefinition::dark();
        block_theme.set_active(Style::new(Color::rgb(205, 49, 49), Color::rgb(17, 168, 205)));
        let block_x = bracket.area.right() + GUTTER;
        let block = Pane::new("No bracket in block Tree", &settings.block, block_theme, block_x)?;

        let (tx, notices) = dispatch::channel();
        let selected = Rc::new(RefCell::new(String::new()));
        let toggled = Rc::new(RefCell::new(String::new()));

        let mut panes = [bracket, block];
        for pane in &mut panes {
            let title = pane.title;

            let status = selected.clone();
            pane.view.set_on_select(move |model: &TreeModel<String>, node: NodeId| {
                let label = model.label(node).unwrap_or_default();
                info!("{}: selected node {}", title, label);
                *status.borrow_mut() = format!("Selected: {label}");
            });

            let status = toggled.clone();
            pane.view.add_listener(move |model: &TreeModel<String>, node: NodeId| {
                let label = model.label(node).unwrap_or_default();
                let state = if model.expanded_flag(node) { "expanded" } else { "collapsed" };
                debug!("{}: {} {}", title, label, state);
                *status.borrow_mut() = format!("{label} {state}");
            });

            pane.view.install_dispatcher(tx.clone());
        }

        Ok(Self {
            panes,
            focus: 0,
            selected,
            toggled,
            notices,
        })
    }

    pub async fn run(&mut self, terminal: &mut Terminal) -> Result<(), DemoError> {
        let mut events = EventStream::new();
        self.draw(terminal)?;

        loop {
            let wake = tokio::select! {
                Some(result) = events.next() => match result {
                    Ok(event) => Wake::Input(convert_event(event)),
                    Err(e) => {
                        error!("Event stream error: {}", e);
                        Wake::Input(None)
                    }
                },
                Some(notice) = self.notices.recv() => Wake::Notice(notice),
                else => Wake::Closed,
            };

            match wake {
                Wake::Input(Some(event)) => {
                    if self.handle_event(event) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Wake::Input(None) => continue,
                Wake::Notice(notice) => {
                    for notice in std::iter::once(notice).chain(self.notices.drain()) {
                        self.deliver(notice);
                    }
                }
                Wake::Closed => return Ok(()),
            }

            self.draw(terminal)?;
        }
    }

    fn deliver(&mut self, notice: Notice) {
        if !self.panes.iter_mut().any(|pane| pane.view.deliver(notice)) {
            debug!("Dropping notice for unknown tree {}", notice.tree());
        }
    }

    /// Returns true when the app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                if is_quit(&key) {
                    return true;
                }
                let result = self.panes[self.focus].view.handle_key(key);
                if let EventResult::MoveFocus(direction) = result {
                    self.move_focus(direction);
                }
            }
            Event::Mouse(action) => {
                for (index, pane) in self.panes.iter_mut().enumerate() {
                    if let Some(local) = action.relative_to(pane.area) {
                        self.focus = index;
                        pane.view.handle_mouse(local);
                        break;
                    }
                }
            }
            _ => {}
        }
        false
    }

    fn move_focus(&mut self, direction: FocusMove) {
        self.focus = match direction {
            FocusMove::Left => 0,
            FocusMove::Right => self.panes.len() - 1,
            FocusMove::Next => (self.focus + 1) % self.panes.len(),
            FocusMove::Previous => (self.focus + self.panes.len() - 1) % self.panes.len(),
        };
        debug!("Focus moved to {}", self.panes[self.focus].title);
    }

    fn draw(&mut self, terminal: &mut Terminal) -> Result<(), DemoError> {
        let frame = terminal.frame()?;
        let mut status_y = 0;

        for (index, pane) in self.panes.iter_mut().enumerate() {
            let title_style = if index == self.focus {
                pane.theme.active()
            } else {
                pane.theme.normal().bold()
            };
            frame.put_str(pane.area.x, 0, pane.title, title_style);

            let mut region = Region::new(&mut *frame, pane.area);
            pane.renderer.draw(&pane.view, &mut region, &pane.theme);
            pane.view.clear_dirty();
            status_y = status_y.max(pane.area.bottom() + 1);
        }

        let normal = self.panes[0].theme.normal();
        frame.put_str(0, status_y, &self.selected.borrow(), normal);
        frame.put_str(0, status_y + 1, &self.toggled.borrow(), normal);
        frame.put_str(0, status_y + 2, "Tab: switch tree  Enter: toggle  q: quit", normal);

        let pane = &self.panes[self.focus];
        let (x, y) = pane.renderer.cursor_location(&pane.view);
        terminal.present(Some((pane.area.x + x, pane.area.y + y)))?;
        Ok(())
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.key {
        Key::Escape => true,
        Key::Char('q') => key.modifiers.none(),
        Key::Char('c') => key.modifiers.ctrl,
        _ => false,
    }
}
