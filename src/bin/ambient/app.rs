//! Event loop: terminal input drives the mute control and the first-gesture
//! observer, the frame tick drives the pulse.

use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
};
use ratatui::{layout::Rect, DefaultTerminal, Frame};
use rtrb::Consumer;

use ambient_drone::{
    control::EnableHint,
    engine::CpalEngine,
    gesture::{FirstGesture, GestureKind},
    AmbientSynth, SynthConfig,
};

use crate::ui::{self, spectrum::SpectrumAnalyzer, View};

/// UI frame tick (~60 fps)
const FRAME: Duration = Duration::from_millis(16);
/// Analysis window for waveform and spectrum
const VIS_BUFFER_SIZE: usize = 4096;
/// Capacity in windows for the audio→UI ring
const SCOPE_BLOCKS: usize = 8;

pub fn run(config: SynthConfig) -> EyreResult<()> {
    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|_| App::new(config).run(&mut terminal));

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// What one terminal event asks for.
///
/// The sound control consumes its event: it already made the start attempt,
/// so the gesture observer does not see it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Control,
    Gesture(GestureKind),
    Ignore,
}

fn route_key(code: KeyCode) -> Input {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('m') | KeyCode::Char('M') => Input::Control,
        _ => Input::Gesture(GestureKind::Key),
    }
}

fn route_mouse(kind: MouseEventKind, on_control: bool) -> Input {
    match kind {
        MouseEventKind::Down(MouseButton::Left) if on_control => Input::Control,
        MouseEventKind::Down(_) => Input::Gesture(GestureKind::Click),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => Input::Gesture(GestureKind::Scroll),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Input::Gesture(GestureKind::PointerMove)
        }
        MouseEventKind::Up(_) => Input::Ignore,
    }
}

struct App {
    synth: AmbientSynth<CpalEngine>,
    gestures: FirstGesture,
    hint: EnableHint,
    launched: Instant,
    scope: Option<Consumer<f32>>,
    audio_buffer: Vec<f32>,
    spectrum: Option<SpectrumAnalyzer>,
    /// Where the mute control was last drawn, for click hit-testing
    control_area: Rect,
    last_error: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(config: SynthConfig) -> Self {
        let gestures = FirstGesture::new(config.gestures.iter().copied());
        let engine = CpalEngine::new().with_scope(VIS_BUFFER_SIZE * SCOPE_BLOCKS);
        Self {
            synth: AmbientSynth::new(config, engine),
            gestures,
            hint: EnableHint::default(),
            launched: Instant::now(),
            scope: None,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: None,
            control_area: Rect::default(),
            last_error: None,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        log::info!("Press a key, click or scroll to start the ambience, or use the sound control");

        while !self.should_quit {
            let now = self.launched.elapsed();
            self.synth.on_frame(now);
            self.hint.update(now, self.synth.state().is_audible());

            self.poll_audio();

            terminal.draw(|frame| self.render(frame))?;

            // Handle input (non-blocking, one frame tick)
            if event::poll(FRAME)? {
                self.handle_event(event::read()?);
            }
        }

        Ok(())
    }

    /// Drain the scope ring, keeping the last `VIS_BUFFER_SIZE` samples.
    fn poll_audio(&mut self) {
        if self.scope.is_none() {
            self.scope = self.synth.engine_mut().take_scope();
            if let Some(sample_rate) = self.synth.engine().sample_rate() {
                self.spectrum = Some(SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate));
            }
        }
        let Some(scope) = self.scope.as_mut() else {
            return;
        };

        let mut received = 0;
        while let Ok(sample) = scope.pop() {
            self.audio_buffer.push(sample);
            received += 1;
        }
        if received == 0 {
            return;
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
        if let Some(spectrum) = self.spectrum.as_mut() {
            spectrum.update(&self.audio_buffer);
        }
    }

    fn handle_event(&mut self, event: Event) {
        let input = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => route_key(key.code),
            Event::Mouse(mouse) => {
                let on_control = self
                    .control_area
                    .contains((mouse.column, mouse.row).into());
                route_mouse(mouse.kind, on_control)
            }
            _ => Input::Ignore,
        };

        match input {
            Input::Quit => self.should_quit = true,
            Input::Control => self.toggle_mute(),
            Input::Gesture(kind) => self.gesture(kind),
            Input::Ignore => {}
        }
    }

    fn toggle_mute(&mut self) {
        match self.synth.toggle_mute() {
            Ok(()) => self.last_error = None,
            Err(err) => self.last_error = Some(err.to_string()),
        }
        if self.synth.state().started {
            self.gestures.disarm();
        }
    }

    fn gesture(&mut self, kind: GestureKind) {
        let synth = &mut self.synth;
        match self.gestures.notify(kind, |_| synth.try_start()) {
            Some(Ok(())) => self.last_error = None,
            Some(Err(err)) => self.last_error = Some(err.to_string()),
            None => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let elapsed = self.launched.elapsed();
        let view = View {
            indicator: self.synth.indicator(),
            glow: self.hint.glow(elapsed),
            master_target: self.synth.master_target(),
            sample_rate: self.synth.engine().sample_rate(),
            awaiting_gesture: self.gestures.is_armed(),
            error: self.last_error.as_deref(),
            audio: &self.audio_buffer,
            spectrum: self.spectrum.as_ref().map(SpectrumAnalyzer::data),
        };
        self.control_area = ui::render(frame, &view);
    }
}
