//! The demo screen and its event loop.
//!
//! The loop is the single owner of [`ScreenState`]. Widget callbacks and the
//! processing task only send [`Msg`]s back; the loop applies them and
//! rebuilds the tree so the next event sees the new state.

use std::io::Write;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;
use widgetdom::render::outline;
use widgetdom::{
    Align, AnimationState, Color, Edges, Element, Event, LayoutResult, Rect, Size, layout,
};
use widgetkit::{DispatchResult, ExpandableCard, HandlerRegistry, LoadingButton, dispatch};

use crate::command::Command;
use crate::config::DemoConfig;
use crate::error::DemoError;

const HOLO_ORANGE_DARK: Color = Color::rgb(1.0, 0x88 as f32 / 255.0, 0.0);

/// Messages sent to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    SubmitClicked,
    ProcessingDone,
    /// The card asked to toggle; carries the state it was rendered with.
    CardToggled(bool),
}

/// State owned by the host and passed down to the widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub loading: bool,
    pub expanded: bool,
}

pub struct DemoApp {
    config: DemoConfig,
    state: ScreenState,
    tx: UnboundedSender<Msg>,
    registry: HandlerRegistry,
    animation: AnimationState,
    root: Element,
    layout: LayoutResult,
}

impl DemoApp {
    pub fn new(config: DemoConfig, tx: UnboundedSender<Msg>) -> Self {
        let mut animation = AnimationState::new();
        animation.set_reduced_motion(config.reduced_motion);

        let mut app = Self {
            config,
            state: ScreenState::default(),
            tx,
            registry: HandlerRegistry::new(),
            animation,
            root: Element::box_(),
            layout: LayoutResult::new(),
        };
        app.rebuild();
        app
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Build the screen from the current state.
    fn view(&self) -> Element {
        let submit_tx = self.tx.clone();
        let button = LoadingButton::new()
            .id("submit")
            .label("Submit Form")
            .loading(self.state.loading)
            .on_click(move || {
                let _ = submit_tx.send(Msg::SubmitClicked);
            })
            .build(&self.registry);

        let toggle_tx = self.tx.clone();
        let card = ExpandableCard::new()
            .id("card")
            .heading("Click to Expand anywhere on Header")
            .header_height(3)
            .header_padding(Edges::horizontal(1))
            .header_background(Color::WHITE, HOLO_ORANGE_DARK)
            .expanded(self.state.expanded)
            .on_toggle(move |current| {
                let _ = toggle_tx.send(Msg::CardToggled(current));
            })
            .child(
                Element::col()
                    .id("card-content")
                    .width(Size::Fill)
                    .height(Size::Fixed(4))
                    .align(Align::Center)
                    .child(Element::text("Expanded State").id("card-content-text")),
            )
            .build(&self.registry);

        Element::col()
            .id("screen")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .child(button)
            .child(card)
    }

    /// Re-register handlers, lay out and advance animations.
    fn rebuild(&mut self) {
        self.registry.clear();
        self.root = self.view();
        self.layout = layout(
            &self.root,
            Rect::new(0, 0, self.config.width, self.config.height),
        );
        self.animation
            .update_at(&self.root, &self.layout, Instant::now().into_std());
    }

    /// Dispatch an input event against the last rendered tree.
    pub fn handle_event(&mut self, event: &Event) -> DispatchResult {
        let result = dispatch(&self.root, &self.layout, &self.registry, event);
        debug!("{event:?} -> {result:?}");
        result
    }

    /// Apply a message and rebuild.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::SubmitClicked => {
                if self.state.loading {
                    return;
                }
                info!("processing started");
                self.state.loading = true;
                tokio::spawn(process(self.config.delay, self.tx.clone()));
            }
            Msg::ProcessingDone => {
                info!("processing finished");
                self.state.loading = false;
            }
            Msg::CardToggled(current) => {
                self.state.expanded = !current;
            }
        }
        self.rebuild();
    }

    /// Render the current frame as an outline.
    pub fn frame(&mut self) -> String {
        self.rebuild();
        outline(
            &self.root,
            &self.layout,
            &self.animation,
            Instant::now().into_std(),
        )
    }
}

/// The background work behind the submit button: hold for `delay`, then report.
pub async fn process(delay: Duration, tx: UnboundedSender<Msg>) {
    tokio::time::sleep(delay).await;
    let _ = tx.send(Msg::ProcessingDone);
}

/// Run the command loop until `quit` or end of input.
pub async fn run<R, W>(config: DemoConfig, input: R, out: &mut W) -> Result<(), DemoError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = DemoApp::new(config, tx);
    let mut lines = input.lines();

    write!(out, "{}", app.frame())?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        warn!("bad command {line:?}: {e}");
                        writeln!(out, "error: {e}")?;
                        continue;
                    }
                };
                if !execute(&mut app, &mut rx, command, out).await? {
                    break;
                }
            }
            Some(msg) = rx.recv() => app.update(msg),
        }
    }

    info!("demo finished in state {:?}", app.state());
    Ok(())
}

/// Execute one command. Returns false on quit.
async fn execute<W: Write>(
    app: &mut DemoApp,
    rx: &mut UnboundedReceiver<Msg>,
    command: Command,
    out: &mut W,
) -> Result<bool, DemoError> {
    if let Some(event) = command.event() {
        let result = app.handle_event(&event);
        writeln!(out, "{result:?}")?;
        // Callbacks have queued their messages; apply them before the next input
        while let Ok(msg) = rx.try_recv() {
            app.update(msg);
        }
        write!(out, "{}", app.frame())?;
        return Ok(true);
    }

    match command {
        Command::Frame => write!(out, "{}", app.frame())?,
        Command::Wait(duration) => {
            let deadline = Instant::now() + duration;
            loop {
                tokio::select! {
                    _ = tokio::time::sleep_until(deadline) => break,
                    Some(msg) = rx.recv() => app.update(msg),
                }
            }
        }
        Command::Quit => return Ok(false),
        Command::Click(_) | Command::Tap(..) | Command::Key(..) => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (DemoApp, UnboundedReceiver<Msg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = DemoConfig::new().delay(Duration::from_millis(5000));
        (DemoApp::new(config, tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn submit_click_sends_message_and_loads() {
        let (mut app, mut rx) = app();

        let result = app.handle_event(&Event::click_on("submit"));
        assert!(result.is_handled());
        assert_eq!(rx.try_recv(), Ok(Msg::SubmitClicked));

        app.update(Msg::SubmitClicked);
        assert!(app.state().loading);

        // A second click while loading is swallowed
        let result = app.handle_event(&Event::click_on("submit"));
        assert_eq!(result, DispatchResult::Disabled { target: "submit".into() });
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn processing_clears_loading_after_delay() {
        let (mut app, mut rx) = app();
        app.update(Msg::SubmitClicked);

        let start = Instant::now();
        let msg = rx.recv().await.unwrap();

        assert_eq!(msg, Msg::ProcessingDone);
        assert!(start.elapsed() >= Duration::from_millis(5000));
        assert!(app.state().loading);

        app.update(msg);
        assert!(!app.state().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn card_toggle_flips_expanded() {
        let (mut app, mut rx) = app();

        app.handle_event(&Event::click_on("card-header"));
        let msg = rx.try_recv().unwrap();
        assert_eq!(msg, Msg::CardToggled(false));

        app.update(msg);
        assert!(app.state().expanded);
        assert!(app.frame().contains("#card-body"));

        app.handle_event(&Event::click_on("card-chevron"));
        app.update(rx.try_recv().unwrap());
        assert!(!app.state().expanded);
        assert!(!app.frame().contains("#card-body"));
    }

    #[tokio::test(start_paused = true)]
    async fn run_script() {
        let script =
            b"click submit\nclick submit\nbogus\nwait 6000\nclick card-header\nquit\nframe\n";
        let mut out = Vec::new();
        let config = DemoConfig::new().reduced_motion();

        run(config, &script[..], &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Handled { target: \"submit\" }"));
        assert!(out.contains("Disabled { target: \"submit\" }"));
        assert!(out.contains("error: Unknown command 'bogus'"));
        assert!(out.contains("Handled { target: \"card-header\" }"));
        assert!(out.contains("#card-body"));
        // Loading was cleared during the wait
        let last_button = out.lines().rev().find(|l| l.contains("#submit ")).unwrap();
        assert!(!last_button.contains("disabled"));
    }
}
