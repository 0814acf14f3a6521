//! Static screens: the hello message and the rain title splash.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::TEXT_SIZE;
use crate::scaled::Scaled;
use crate::styles::{HELLO_STYLE, SPLASH_STYLE, TOP_LEFT};

/// Hello message text.
pub const HELLO_TEXT: &str = "Hello, Kubota!";

/// Where the hello message starts.
pub const HELLO_POS: Point = Point::new(20, 100);

/// Rain title splash text.
pub const SPLASH_TEXT: &str = "Hello, Kubota... loading rain";

/// Where the splash text starts.
pub const SPLASH_POS: Point = Point::new(8, 8);

/// Clear the screen and print the hello message.
pub fn draw_hello<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;
    Text::with_text_style(HELLO_TEXT, HELLO_POS, HELLO_STYLE, TOP_LEFT).draw(display)?;
    Ok(())
}

/// Print the rain title over whatever is on screen, at the rain's text size.
pub fn draw_splash<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut scaled = Scaled::new(display, SPLASH_POS, TEXT_SIZE);
    Text::with_text_style(SPLASH_TEXT, Point::zero(), SPLASH_STYLE, TOP_LEFT).draw(&mut scaled)?;
    Ok(())
}
