use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use crate::render::RenderCtx;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trichrome".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Runtime handle passed to application callbacks.
///
/// Requests are collected while a callback runs and applied after it returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    redraw_requested: bool,
    exit_requested: bool,
}

impl RuntimeCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a repaint of the window.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Asks the runtime to shut down after the current callback.
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` in a single window until it exits or startup fails.
    ///
    /// Startup failures inside the event loop (window creation, GPU
    /// acquisition, renderer construction in `on_ready`) stop the loop and
    /// are returned to the caller.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.failure {
            return Err(err);
        }

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            failure: None,
        }
    }

    /// Creates the window, brings up the GPU context, and runs `on_ready`.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let built = WindowEntryTryBuilder {
            input_state: InputState::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU context")?;

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry_slot) = (&mut self.app, &mut self.entry);
        let entry = entry_slot.insert(built);

        let mut ready = Ok(());
        entry.with_mut(|fields| {
            let rctx = RenderCtx::new(
                fields.gpu.device(),
                fields.gpu.queue(),
                fields.gpu.surface_format(),
                logical_viewport(fields.window),
            );
            ready = app.on_ready(&rctx);
        });
        ready.context("application startup failed")?;

        entry.with_window(|w| w.request_redraw());
        Ok(())
    }

    /// Applies requests the app queued during a callback.
    fn apply_runtime(&mut self, event_loop: &ActiveEventLoop, ctx: RuntimeCtx) {
        if ctx.redraw_requested() {
            if let Some(entry) = self.entry.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
        }
        if ctx.exit_requested() {
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            self.failure = Some(err);
            self.exit_requested = true;
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Event-driven: sleep until input arrives or a redraw was requested.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry_slot) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry_slot.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        let mut runtime_ctx = RuntimeCtx::new();

        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(fields.window, fields.input_state, &event) {
                fields.input_state.apply_event(&ev);
                let viewport = logical_viewport(fields.window);
                app.on_input(viewport, &ev, &mut runtime_ctx);
            }
        });

        self.apply_runtime(event_loop, runtime_ctx);
        if self.exit_requested {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let mut app_control = AppControl::Continue;

                let (app, entry_slot) = (&mut self.app, &mut self.entry);
                if let Some(entry) = entry_slot.as_mut() {
                    entry.with_mut(|fields| {
                        let mut ctx = FrameCtx {
                            window: WindowCtx {
                                id: window_id,
                                window: fields.window,
                            },
                            gpu: fields.gpu,
                        };
                        app_control = app.on_frame(&mut ctx);
                    });
                }

                if app_control == AppControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

fn translate_input_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };
            let button = map_mouse_button(*button);

            // Button events carry no position; stamp the last known one.
            let (x, y) = state.pointer_pos().unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: st,
                x,
                y,
            }))
        }

        _ => None,
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn logical_viewport(window: &Window) -> Viewport {
    let phys = window.inner_size();
    let scale = window.scale_factor();
    let logical: LogicalSize<f64> = phys.to_logical(scale);
    Viewport::new(logical.width as f32, logical.height as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
