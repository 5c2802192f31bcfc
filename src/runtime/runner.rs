use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::AppState;
use crate::submit::SubmitExecutor;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    executor: SubmitExecutor,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(
        state: AppState,
        terminal: Terminal,
        executor: SubmitExecutor,
        renderer: Renderer,
    ) -> Self {
        Self {
            state,
            terminal,
            executor,
            key_bindings: KeyBindings::new(),
            renderer,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                let event = self.terminal.poll_event(POLL_INTERVAL)?;
                let mut render_requested = self.dispatch_terminal_event(event)?;

                // Whole-form validation runs after the input has been applied.
                render_requested |= self.state.form.run_pending_validations();
                render_requested |= self.process_completions();

                if render_requested && !self.state.should_exit() {
                    self.render()?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn dispatch_terminal_event(&mut self, event: TerminalEvent) -> io::Result<bool> {
        let intent = match event {
            TerminalEvent::Key(key) => self
                .key_bindings
                .resolve(key)
                .unwrap_or(Intent::InputKey(key)),
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                return Ok(true);
            }
            TerminalEvent::Tick => Intent::Tick,
        };

        let effects = Reducer::reduce(&mut self.state, intent);
        Ok(self.apply_effects(effects))
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut render_requested = false;
        for effect in effects {
            match effect {
                Effect::Submit(request) => self.executor.spawn(request),
                Effect::RequestRender => render_requested = true,
            }
        }
        render_requested
    }

    fn process_completions(&mut self) -> bool {
        let completions = self.executor.drain_ready();
        let any = !completions.is_empty();
        for completion in completions {
            self.state.form.complete_submit(completion);
        }
        any
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(
            &self.state.view(),
            &self.state.focus,
            self.terminal.size().width,
        );
        self.terminal.render_frame(&frame)
    }
}
