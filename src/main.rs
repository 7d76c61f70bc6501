use std::io;
use std::time::Instant;

use anyhow::Context;
use chrono::NaiveTime;
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use structopt::StructOpt;
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop, EventLoopProxy},
    window::{Window, WindowBuilder},
};
use winit_input_helper::WinitInputHelper;

use baernuhr::color::Rgb;
use baernuhr::config::{PanelConfig, Style};
use baernuhr::display::Display;
use baernuhr::driver::{self, Clock, ClockFace, MinuteTracker};
use baernuhr::grid;
use baernuhr::renderer::FaceRenderer;
use baernuhr::sink::{PanelSink, TerminalSink};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "baernuhr",
    about = "A Bernese German word clock for 64x64 RGB LED panels."
)]
struct Opt {
    /// Letter color: white, warm, cool, red, green, blue, orange, yellow, or hex (#RRGGBB)
    #[structopt(short, long, default_value = "white")]
    color: String,

    /// Display brightness in percent (1-100)
    #[structopt(short, long, default_value = "50")]
    brightness: u32,

    /// Grey level of unlit letters (0-255, 0 hides them)
    #[structopt(long, default_value = "40")]
    dim_brightness: u8,

    /// Print the clock to the terminal instead of opening a panel window
    #[structopt(short, long)]
    simulate: bool,

    /// Letter style: glyph or block
    #[structopt(long, default_value = "glyph")]
    style: Style,

    /// Window pixels per panel pixel
    #[structopt(long, default_value = "8")]
    scale: u32,

    /// Freeze the clock at HH:MM
    #[structopt(long, parse(try_from_str = driver::parse_time))]
    time: Option<NaiveTime>,

    /// Print every five-minute phrase of ten o'clock and exit
    #[structopt(long)]
    demo: bool,
}

impl Opt {
    fn panel_config(&self) -> PanelConfig {
        let color = self.color.parse::<Rgb>().unwrap_or_else(|e| {
            warn!("{}, using white", e);
            Rgb::WHITE
        });
        let brightness = self.brightness.clamp(1, 100) as u8;
        PanelConfig::default()
            .with_appearance(color, brightness, self.dim_brightness)
            .with_style(self.style)
    }

    fn clock(&self) -> Clock {
        self.time.map_or(Clock::Local, Clock::Fixed)
    }
}

/// Upper bound for `--scale`, a 4096x4096 window.
const MAX_SCALE: u32 = 64;

/// Sent to the window event loop when SIGINT or SIGTERM arrives.
#[derive(Debug)]
struct Shutdown;

/// The panel, emulated as a window through `pixels`.
struct WindowSink {
    pixels: Pixels,
    display: Display,
    renderer: FaceRenderer,
}

impl WindowSink {
    fn new(window: &Window, config: PanelConfig) -> anyhow::Result<Self> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(
            Display::WIDTH as u32,
            Display::HEIGHT as u32,
            surface_texture,
        )
        .context("failed to create pixel surface")?;

        Ok(Self {
            pixels,
            display: Display::new(),
            renderer: FaceRenderer::new(config),
        })
    }

    fn render(&mut self) -> anyhow::Result<()> {
        self.renderer.draw(&self.display, self.pixels.get_frame());
        self.pixels.render()?;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixels.resize_surface(width, height);
    }
}

impl PanelSink for WindowSink {
    fn show(&mut self, face: &ClockFace) -> anyhow::Result<()> {
        self.renderer.paint(&mut self.display, &face.cells, face.dots());
        self.render()
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.display.clear();
        self.render()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    grid::verify().context("word table does not match the letter grid")?;

    if opt.demo {
        return print_demo();
    }

    if opt.simulate {
        run_terminal(opt.clock())
    } else {
        run_window(&opt)
    }
}

fn print_demo() -> anyhow::Result<()> {
    let demo_times = [
        (0, "on the hour"),
        (7, "5 past + 2 dots"),
        (10, "10 past"),
        (15, "quarter past"),
        (20, "20 past"),
        (25, "5 to half"),
        (30, "half"),
        (35, "5 past half"),
        (40, "20 to"),
        (45, "quarter to"),
        (50, "10 to"),
        (55, "5 to"),
    ];

    for (minute, desc) in demo_times {
        let face = ClockFace::at(10, minute)?;
        println!("\n--- {} ---", desc);
        println!("Time: {:02}:{:02}", face.hour, face.minute);
        println!("Words: {}", face.translation.phrase());
        println!("Minute dots: {}\n", face.dots());
        print!("{}", face.ascii());
    }
    Ok(())
}

fn run_terminal(clock: Clock) -> anyhow::Result<()> {
    info!("Starting Bernese word clock in the terminal, press Ctrl+C to exit");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let shutdown = {
        let _guard = runtime.enter();
        driver::shutdown_signal()?
    };

    let mut sink = TerminalSink::new(io::stdout());
    runtime.block_on(driver::run(clock, &mut sink, shutdown))
}

fn window_size(scale: u32) -> LogicalSize<u32> {
    let scale = scale.clamp(1, MAX_SCALE);
    LogicalSize::new(
        (Display::WIDTH as u32).saturating_mul(scale),
        (Display::HEIGHT as u32).saturating_mul(scale),
    )
}

/// Waits for a shutdown signal on its own thread and forwards it to the event loop.
fn watch_signals(proxy: EventLoopProxy<Shutdown>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let shutdown = {
        let _guard = runtime.enter();
        driver::shutdown_signal()?
    };

    std::thread::Builder::new()
        .name("signals".into())
        .spawn(move || {
            runtime.block_on(shutdown);
            // fails only if the event loop is already gone
            let _ = proxy.send_event(Shutdown);
        })
        .context("failed to start signal thread")?;
    Ok(())
}

fn run_window(opt: &Opt) -> anyhow::Result<()> {
    let clock = opt.clock();
    let event_loop = EventLoop::<Shutdown>::with_user_event();
    let mut input = WinitInputHelper::new();
    let window = {
        if opt.scale > MAX_SCALE {
            warn!("scale {} is too large, using {}", opt.scale, MAX_SCALE);
        }
        WindowBuilder::new()
            .with_title("Bärner Wort-Uhr")
            .with_inner_size(window_size(opt.scale))
            .with_min_inner_size(window_size(1))
            .build(&event_loop)
            .context("failed to open window")?
    };
    watch_signals(event_loop.create_proxy())?;

    let mut sink = WindowSink::new(&window, opt.panel_config())?;
    let mut tracker = MinuteTracker::new();
    info!("Starting Bernese word clock, press Escape to exit");

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::UserEvent(Shutdown) => {
                info!("Shutting down");
                *control_flow = ControlFlow::Exit;
                return;
            }
            // Every exit path ends here
            Event::LoopDestroyed => {
                if let Err(e) = sink.clear() {
                    error!("failed to clear panel: {}", e);
                }
                return;
            }
            _ => {}
        }

        if let Event::RedrawRequested(_) = event {
            if let Err(e) = sink.render() {
                error!("pixels.render() failed: {}", e);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                info!("Shutting down");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                sink.resize(size.width, size.height);
            }

            match driver::poll(&clock, &mut tracker) {
                Ok(Some(face)) => {
                    if let Err(e) = sink.show(&face) {
                        error!("failed to show {}: {}", face.translation.phrase(), e);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("{}", e);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            // Wake up again on the next whole second
            let wait = driver::until_next_second(clock.now());
            *control_flow = ControlFlow::WaitUntil(Instant::now() + wait);
            window.request_redraw();
        }
    })
}
