use canvas_charts::{prelude::*, style::ShapeStyle, BarChart};
use piet::{
    kurbo::{Insets, Point, Rect, Size},
    Color,
};
use piet_common::{Device, RenderContext};
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 600;
const HEIGHT: usize = 400;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut device = Device::new()?;
    let mut bitmap = device.bitmap_target(WIDTH * 2, HEIGHT * 2, 2.0)?;
    let mut rc = bitmap.render_context();
    let size = Size::new(WIDTH as f64, HEIGHT as f64);

    rc.fill(Rect::from_origin_size(Point::ZERO, size), &Color::WHITE);

    let mut chart = BarChart::new([1.0, 0.8, 0.6, 0.4, 0.2, 0.0]);
    chart.padding = Insets::uniform(20.);
    chart.style.axes.width = 2.;
    chart.style.guidelines = ShapeStyle::stroke(Color::rgba8(0, 0, 0, 0x60), 1.);
    chart.draw(size, &mut rc)?;

    rc.finish()?;
    std::mem::drop(rc);

    bitmap.save_to_file("bar-chart.png")?;
    Ok(())
}
