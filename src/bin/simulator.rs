use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::ascii::{FONT_7X13, FONT_7X13_BOLD};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Target;
use log::{info, LevelFilter};
use ui_text::font::{HAlign, MonoFontRenderer};
use ui_text::gfx::EmbeddedDrawingContext;
use ui_text::gui::comps::{Button, Label};
use ui_text::gui::{GuiEvent, Scene, DARK_THEME, LIGHT_THEME};

const TITLE: &str = "title";
const COUNTER: &str = "counter";
const INCREMENT: &str = "increment";
const RESET: &str = "reset";
const THEME: &str = "theme";

fn main() -> Result<(), std::convert::Infallible> {
    env_logger::Builder::new()
        .target(Target::Stdout)
        .filter(None, LevelFilter::Info)
        .init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(320, 240));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Text Widgets", &output_settings);

    let font = MonoFontRenderer::new(FONT_7X13);
    let bold = MonoFontRenderer::new(FONT_7X13_BOLD);

    let mut scene = Scene::new(LIGHT_THEME);
    scene.add(
        TITLE,
        Label::new(&bold, Rectangle::new(Point::new(0, 10), Size::new(320, 20)), "Counter demo")
            .with_align(HAlign::Center),
    );
    scene.add(
        COUNTER,
        Label::new(&font, Rectangle::new(Point::new(20, 60), Size::new(280, 20)), "count: 0"),
    );
    scene.add(INCREMENT, Button::auto_sized(&font, Point::new(20, 100), "+1"));
    scene.add(RESET, Button::auto_sized(&font, Point::new(80, 100), "reset"));
    scene.add(THEME, Button::auto_sized(&font, Point::new(170, 100), "dark"));
    scene.set_focused(INCREMENT);
    scene.info();

    let mut count = 0;
    let mut dark = false;
    'running: loop {
        {
            let mut ctx = EmbeddedDrawingContext::new(&mut display);
            scene.draw(&mut ctx);
        }
        window.update(&display);
        for event in window.events() {
            let clicked = match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    let key = keycode.into_i32();
                    if (0..=255).contains(&key) {
                        scene.handle_input(GuiEvent::KeyEvent(key as u8))
                    } else {
                        None
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    scene.handle_input(GuiEvent::Press(point))
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    scene.handle_input(GuiEvent::Release(point))
                }
                _ => None,
            };
            let Some(name) = clicked else {
                continue;
            };
            info!("clicked {name}");
            match name.as_str() {
                INCREMENT => count += 1,
                RESET => count = 0,
                THEME => {
                    dark = !dark;
                    scene.set_theme(if dark { DARK_THEME } else { LIGHT_THEME });
                    scene.set_text(THEME, if dark { "light" } else { "dark" });
                }
                _ => {}
            }
            scene.set_text(COUNTER, &format!("count: {count}"));
        }
    }
    Ok(())
}
